//! Directory scanner module.
//!
//! Scans a directory recursively, gating entries by video extension.
//! Non-video files are collected separately so `--clean-up` can plan
//! their relocation.

use crate::utils::fs::ensure_directory;
use crate::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Supported video file extensions.
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv", "avi"];

/// Name of the folder cleanup moves non-video files into.
pub const DELETED_DIR_NAME: &str = "Deleted";

/// A video file found during scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFile {
    /// Full path to the file.
    pub path: PathBuf,
    /// File name including extension.
    pub filename: String,
    /// File name without extension.
    pub stem: String,
    /// Extension, lowercased, without the dot.
    pub extension: String,
}

/// Result of scanning a directory.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Video files found, sorted by path.
    pub videos: Vec<VideoFile>,
    /// Non-video files found, sorted by path.
    pub others: Vec<PathBuf>,
}

/// Check if a file extension is a recognized video format.
fn is_video_extension(ext: &str) -> bool {
    let ext_lower = ext.to_lowercase();
    VIDEO_EXTENSIONS.contains(&ext_lower.as_str())
}

/// Check whether a path sits inside the cleanup folder.
///
/// Files already relocated by a previous `--clean-up` run must not be
/// collected again, or every run would re-plan them.
fn is_in_deleted_dir(path: &Path) -> bool {
    path.components().any(|c| {
        matches!(c, std::path::Component::Normal(name) if name == DELETED_DIR_NAME)
    })
}

/// Create a `VideoFile` from a path.
fn create_video_file(path: &Path) -> Option<VideoFile> {
    let filename = path.file_name()?.to_str()?.to_string();
    let stem = path.file_stem()?.to_str()?.to_string();
    let extension = path.extension()?.to_str()?.to_lowercase();

    Some(VideoFile {
        path: path.to_path_buf(),
        filename,
        stem,
        extension,
    })
}

/// Scan a directory recursively for video files.
///
/// Returns video files and non-video files separately, both sorted by path
/// for deterministic output. The source path is validated once, up front.
pub fn scan_directory(path: &Path) -> Result<ScanResult> {
    ensure_directory(path)?;

    let mut result = ScanResult::default();

    for entry in WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let entry_path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }
        if is_in_deleted_dir(entry_path.strip_prefix(path).unwrap_or(entry_path)) {
            continue;
        }

        let is_video = entry_path
            .extension()
            .and_then(|e| e.to_str())
            .map(is_video_extension)
            .unwrap_or(false);

        if is_video {
            match create_video_file(entry_path) {
                Some(video) => result.videos.push(video),
                None => {
                    tracing::warn!("Skipping non-UTF-8 file name: {}", entry_path.display());
                }
            }
        } else {
            result.others.push(entry_path.to_path_buf());
        }
    }

    result.videos.sort_by(|a, b| a.path.cmp(&b.path));
    result.others.sort();

    tracing::info!(
        "Scanned {}: {} videos, {} other files",
        path.display(),
        result.videos.len(),
        result.others.len()
    );

    Ok(result)
}
