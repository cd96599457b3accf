//! Background-music mixing.
//!
//! Overlays an optional music bed under the assembled narration at a
//! configured attenuation. With no music configured the stage is a no-op
//! pass-through of the narration track.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::AudioSettings;
use crate::timeline::NarrationTrack;
use crate::toolkit::{FfmpegToolkit, ToolResult};

/// How the mixed track's length relates to its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationPolicy {
    /// Output ends with the shorter input.
    Shortest,
    /// Output ends with the longer input; the shorter one is silence
    /// beyond its end.
    Longest,
    /// Output length equals the narration regardless of music length;
    /// the music bed is looped and cut at the narration's end.
    #[default]
    MatchNarration,
}

impl DurationPolicy {
    /// The ffmpeg `amix` duration token for this policy.
    pub(crate) fn amix_token(&self) -> &'static str {
        match self {
            Self::Shortest => "shortest",
            Self::Longest => "longest",
            Self::MatchNarration => "first",
        }
    }
}

/// How narration and music are combined.
#[derive(Debug, Clone, PartialEq)]
pub struct MixSpec {
    /// Gain applied to the narration track.
    pub narration_gain: f64,
    /// Gain applied to the music bed.
    pub music_gain: f64,
    /// Output length policy.
    pub duration_policy: DurationPolicy,
}

impl Default for MixSpec {
    fn default() -> Self {
        Self {
            narration_gain: 1.0,
            music_gain: 0.25,
            duration_policy: DurationPolicy::MatchNarration,
        }
    }
}

impl MixSpec {
    /// Build from configuration.
    pub fn from_settings(audio: &AudioSettings) -> Self {
        Self {
            narration_gain: audio.narration_gain,
            music_gain: audio.music_gain,
            duration_policy: audio.music_policy,
        }
    }
}

/// Mix `music` under `narration`, writing the result to `output`.
///
/// Returns the path of the track to carry forward: `output` when a mix
/// happened, the untouched narration path when `music` is `None`.
pub fn mix_tracks(
    toolkit: &FfmpegToolkit,
    narration: &NarrationTrack,
    music: Option<&Path>,
    spec: &MixSpec,
    output: &Path,
) -> ToolResult<PathBuf> {
    let music = match music {
        Some(music) => music,
        None => return Ok(narration.path.clone()),
    };

    toolkit.mix(&narration.path, music, spec, output)?;
    Ok(output.to_path_buf())
}
