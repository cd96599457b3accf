//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Every field has a serde default so a partial (or empty) config file
//! still loads.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;
use crate::mixer::DurationPolicy;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Path-related settings.
    #[serde(default)]
    pub paths: PathSettings,

    /// External tool binaries.
    #[serde(default)]
    pub tools: ToolSettings,

    /// Speech synthesis engine.
    #[serde(default)]
    pub tts: TtsSettings,

    /// Audio assembly and mixing.
    #[serde(default)]
    pub audio: AudioSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Path configuration for output, temp, and logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSettings {
    /// Output folder for delivered files.
    #[serde(default = "default_output_folder")]
    pub output_folder: String,

    /// Root folder for per-job workspaces.
    #[serde(default = "default_temp_root")]
    pub temp_root: String,

    /// Folder for log files.
    #[serde(default = "default_logs_folder")]
    pub logs_folder: String,
}

fn default_output_folder() -> String {
    "narrated_output".to_string()
}

fn default_temp_root() -> String {
    ".temp".to_string()
}

fn default_logs_folder() -> String {
    ".logs".to_string()
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            output_folder: default_output_folder(),
            temp_root: default_temp_root(),
            logs_folder: default_logs_folder(),
        }
    }
}

/// External media-toolkit binaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSettings {
    /// Path to the ffmpeg binary.
    #[serde(default = "default_ffmpeg_path")]
    pub ffmpeg_path: String,

    /// Path to the ffprobe binary.
    #[serde(default = "default_ffprobe_path")]
    pub ffprobe_path: String,
}

fn default_ffmpeg_path() -> String {
    "ffmpeg".to_string()
}

fn default_ffprobe_path() -> String {
    "ffprobe".to_string()
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            ffmpeg_path: default_ffmpeg_path(),
            ffprobe_path: default_ffprobe_path(),
        }
    }
}

/// Speech synthesis engine configuration.
///
/// The voice model selects both voice and language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TtsSettings {
    /// TTS engine binary.
    #[serde(default = "default_tts_program")]
    pub program: String,

    /// Voice model file.
    #[serde(default)]
    pub model: String,

    /// Speaker id for multi-speaker models (empty = model default).
    #[serde(default)]
    pub speaker: String,
}

fn default_tts_program() -> String {
    "piper".to_string()
}

impl Default for TtsSettings {
    fn default() -> Self {
        Self {
            program: default_tts_program(),
            model: String::new(),
            speaker: String::new(),
        }
    }
}

/// Audio assembly and mixing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioSettings {
    /// Sample rate for the assembled narration track.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Gain applied to the narration when mixing.
    #[serde(default = "default_narration_gain")]
    pub narration_gain: f64,

    /// Gain applied to the music bed when mixing.
    #[serde(default = "default_music_gain")]
    pub music_gain: f64,

    /// Output length policy when mixing with music.
    #[serde(default)]
    pub music_policy: DurationPolicy,
}

fn default_sample_rate() -> u32 {
    48_000
}

fn default_narration_gain() -> f64 {
    1.0
}

fn default_music_gain() -> f64 {
    0.25
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            sample_rate: default_sample_rate(),
            narration_gain: default_narration_gain(),
            music_gain: default_music_gain(),
            music_policy: DurationPolicy::default(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default log level (RUST_LOG overrides).
    #[serde(default)]
    pub level: LogLevel,

    /// Also write a log file under the logs folder.
    #[serde(default)]
    pub log_to_file: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            log_to_file: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let settings = Settings::default();
        assert_eq!(settings.tools.ffmpeg_path, "ffmpeg");
        assert_eq!(settings.tts.program, "piper");
        assert_eq!(settings.audio.sample_rate, 48_000);
        assert!(settings.audio.music_gain < settings.audio.narration_gain);
    }

    #[test]
    fn empty_toml_loads_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings.paths.temp_root, ".temp");
        assert_eq!(settings.audio.music_policy, DurationPolicy::MatchNarration);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let settings: Settings = toml::from_str(
            "[tools]\nffmpeg_path = \"/opt/ffmpeg/bin/ffmpeg\"\n\n[audio]\nmusic_policy = \"shortest\"\n",
        )
        .unwrap();
        assert_eq!(settings.tools.ffmpeg_path, "/opt/ffmpeg/bin/ffmpeg");
        assert_eq!(settings.tools.ffprobe_path, "ffprobe");
        assert_eq!(settings.audio.music_policy, DurationPolicy::Shortest);
    }
}
