use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "auto_video_dedupe",
    version,
    about = "Find video files with near-identical names and delete the lower-bitrate copy"
)]
pub struct Args {
    /// Full path of the directory to clean (defaults to the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub directory: Option<PathBuf>,
}

impl Args {
    /// 取得要掃描的資料夾；未指定時使用目前工作目錄
    pub fn resolve_directory(&self) -> Result<PathBuf> {
        match &self.directory {
            Some(directory) => Ok(directory.clone()),
            None => std::env::current_dir().context("Failed to read current working directory"),
        }
    }
}
