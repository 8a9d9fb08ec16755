use crate::error::CleanerError;
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::process::Command;

/// 取得影片編碼位元率的來源，方便替換成其他平台的實作
pub trait BitrateProvider {
    /// 回傳影片串流的編碼位元率（bits/second）
    fn encoding_bitrate(&self, path: &Path) -> Result<u64, CleanerError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct MediaInfo {
    pub encoding_bitrate: Option<u64>,
    pub total_bitrate: Option<u64>,
    pub duration_seconds: Option<f64>,
}

#[derive(Deserialize)]
struct FfprobeOutput {
    format: Option<FormatInfo>,
    streams: Option<Vec<StreamInfo>>,
}

#[derive(Deserialize)]
struct FormatInfo {
    duration: Option<String>,
    bit_rate: Option<String>,
}

#[derive(Deserialize)]
struct StreamInfo {
    codec_type: Option<String>,
    bit_rate: Option<String>,
    duration: Option<String>,
    #[serde(default)]
    tags: HashMap<String, String>,
}

/// 使用 ffprobe 取得位元率
#[derive(Debug, Default, Clone, Copy)]
pub struct FfprobeBitrateProvider;

impl BitrateProvider for FfprobeBitrateProvider {
    fn encoding_bitrate(&self, path: &Path) -> Result<u64, CleanerError> {
        let info = get_media_info(path).map_err(|e| CleanerError::MetadataUnavailable {
            path: path.to_path_buf(),
            reason: format!("{e:#}"),
        })?;

        info.encoding_bitrate
            .ok_or_else(|| CleanerError::MetadataUnavailable {
                path: path.to_path_buf(),
                reason: "video stream has no bitrate".to_string(),
            })
    }
}

/// 使用 ffprobe 取得影片資訊
pub fn get_media_info(path: &Path) -> Result<MediaInfo> {
    let output = Command::new("ffprobe")
        .args([
            "-v",
            "quiet",
            "-print_format",
            "json",
            "-show_format",
            "-show_streams",
        ])
        .arg(path)
        .output()
        .with_context(|| format!("Failed to run ffprobe on {}", path.display()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("ffprobe exited with {}: {stderr}", output.status);
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_ffprobe_output(&stdout)
}

fn parse_ffprobe_output(json: &str) -> Result<MediaInfo> {
    let probe: FfprobeOutput =
        serde_json::from_str(json).context("Failed to parse ffprobe output")?;

    let video_stream = probe
        .streams
        .as_ref()
        .and_then(|streams| {
            streams
                .iter()
                .find(|s| s.codec_type.as_deref() == Some("video"))
        })
        .ok_or_else(|| anyhow::anyhow!("No video stream found"))?;

    // Matroska 通常沒有 stream bit_rate，改讀 BPS 標籤
    let encoding_bitrate = video_stream
        .bit_rate
        .as_deref()
        .or_else(|| video_stream.tags.get("BPS").map(String::as_str))
        .or_else(|| video_stream.tags.get("BPS-eng").map(String::as_str))
        .and_then(|value| value.trim().parse::<u64>().ok());

    let total_bitrate = probe
        .format
        .as_ref()
        .and_then(|f| f.bit_rate.as_deref())
        .and_then(|value| value.trim().parse::<u64>().ok());

    // 影片長度優先從 format，其次從 stream
    let duration_seconds = probe
        .format
        .as_ref()
        .and_then(|f| f.duration.as_ref())
        .or(video_stream.duration.as_ref())
        .and_then(|d| d.parse::<f64>().ok());

    Ok(MediaInfo {
        encoding_bitrate,
        total_bitrate,
        duration_seconds,
    })
}
