//! Audio metadata probing

use std::fs::File;
use std::path::Path;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::{MetadataOptions, MetadataRevision, StandardTagKey};
use symphonia::core::probe::Hint;

/// Embedded picture
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoverArt {
    pub media_type: String,
    pub data: Vec<u8>,
}

/// Metadata read from one audio file
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrackMetadata {
    pub title: Option<String>,
    pub comment: Option<String>,
    pub duration_seconds: Option<f64>,
    pub cover: Option<CoverArt>,
}

/// Errors probing a file.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("cannot open audio file: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported or corrupt audio: {0}")]
    Decode(#[from] symphonia::core::errors::Error),
}

/// Reads tags, duration and cover art. Blocking; run off the async runtime.
pub trait TrackProbe: Send + Sync {
    fn probe(&self, path: &Path) -> Result<TrackMetadata, ProbeError>;
}

/// Probe backed by symphonia's format readers
#[derive(Clone, Copy, Debug, Default)]
pub struct SymphoniaProbe;

impl TrackProbe for SymphoniaProbe {
    fn probe(&self, path: &Path) -> Result<TrackMetadata, ProbeError> {
        let file = File::open(path)?;
        let stream = MediaSourceStream::new(Box::new(file), Default::default());

        let mut hint = Hint::new();
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            hint.with_extension(ext);
        }

        let mut probed = symphonia::default::get_probe().format(
            &hint,
            stream,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )?;

        let mut meta = TrackMetadata::default();

        // Tags found ahead of the container (ID3v2) come first
        if let Some(metadata) = probed.metadata.get() {
            if let Some(revision) = metadata.current() {
                absorb(&mut meta, revision);
            }
        }
        if let Some(revision) = probed.format.metadata().current() {
            absorb(&mut meta, revision);
        }

        if let Some(track) = probed.format.default_track() {
            let params = &track.codec_params;
            meta.duration_seconds = match (params.n_frames, params.time_base, params.sample_rate) {
                (Some(frames), Some(time_base), _) => {
                    let time = time_base.calc_time(frames);
                    Some(time.seconds as f64 + time.frac)
                }
                (Some(frames), None, Some(rate)) if rate > 0 => Some(frames as f64 / f64::from(rate)),
                _ => None,
            };
        }

        Ok(meta)
    }
}

/// Fill fields not already set from a metadata revision
fn absorb(meta: &mut TrackMetadata, revision: &MetadataRevision) {
    for tag in revision.tags() {
        let value = tag.value.to_string().trim().to_string();
        if value.is_empty() {
            continue;
        }
        match tag.std_key {
            Some(StandardTagKey::TrackTitle) if meta.title.is_none() => meta.title = Some(value),
            Some(StandardTagKey::Comment) if meta.comment.is_none() => meta.comment = Some(value),
            _ => {}
        }
    }

    if meta.cover.is_none() {
        meta.cover = revision.visuals().first().map(|visual| CoverArt {
            media_type: if visual.media_type.is_empty() {
                "image/jpeg".to_string()
            } else {
                visual.media_type.clone()
            },
            data: visual.data.to_vec(),
        });
    }
}
