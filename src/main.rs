use anyhow::Result;
use auto_video_dedupe::cli::Args;
use auto_video_dedupe::component::SimilarVideoCleaner;
use auto_video_dedupe::config::Config;
use auto_video_dedupe::init;
use auto_video_dedupe::tools::FfprobeBitrateProvider;
use clap::Parser;
use console::style;
use log::{info, warn};

fn main() {
    init::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        warn!("Program error: {e:#}");
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    match &args.directory {
        Some(directory) => println!("cleaning directory {}", directory.display()),
        None => println!("no user supplied directory, using CWD recursively!"),
    }
    let directory = args.resolve_directory()?;

    let config = Config::new()?;
    let cleaner = SimilarVideoCleaner::new(config, FfprobeBitrateProvider);
    cleaner.run(&directory)?;

    info!("Program exited normally");
    Ok(())
}
