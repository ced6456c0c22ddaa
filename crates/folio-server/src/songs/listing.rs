//! Song directory listing

use std::fs;
use std::io;
use std::path::Path;
use serde::Serialize;
use tracing::warn;
use super::probe::TrackProbe;

/// Extensions the player can stream
pub const AUDIO_EXTENSIONS: [&str; 5] = ["mp3", "m4a", "ogg", "wav", "flac"];

/// One entry of `GET /api/songs`
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub duration_seconds: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
}

pub fn is_audio_file(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| AUDIO_EXTENSIONS.iter().any(|a| a.eq_ignore_ascii_case(ext)))
}

/// A bare audio file name, rejecting anything that could leave the directory
pub fn is_safe_file_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && !name.contains(['/', '\\', '\0'])
        && !name.contains("..")
        && is_audio_file(name)
}

/// Percent-encode a single URL path segment
pub fn encode_path_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => out.push(byte as char),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// List playable songs in `dir`, sorted by file name.
///
/// Files under `min_bytes` are skipped. A missing directory lists as empty.
/// Files that fail to probe are still listed with what the file name gives.
pub fn list_songs(dir: &Path, min_bytes: u64, probe: &dyn TrackProbe) -> io::Result<Vec<Song>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };

    let mut files: Vec<(String, std::path::PathBuf)> = Vec::new();
    for entry in entries {
        let entry = entry?;
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if !is_safe_file_name(&name) {
            continue;
        }
        let metadata = entry.metadata()?;
        if metadata.is_file() && metadata.len() >= min_bytes {
            files.push((name, entry.path()));
        }
    }
    files.sort_by(|a, b| a.0.cmp(&b.0));

    let songs = files
        .into_iter()
        .map(|(name, path)| {
            let meta = probe.probe(&path).unwrap_or_else(|e| {
                warn!(file = %name, error = %e, "could not read song metadata");
                Default::default()
            });
            let encoded = encode_path_segment(&name);
            let stem = Path::new(&name)
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or(&name)
                .to_string();

            Song {
                name: meta.title.unwrap_or(stem),
                url: format!("/songs/{encoded}"),
                description: meta.comment,
                duration_seconds: meta.duration_seconds.map(|d| d.max(0.0).round() as u64).unwrap_or(0),
                cover_url: meta.cover.map(|_| format!("/api/songs/cover/{encoded}")),
            }
        })
        .collect();

    Ok(songs)
}
