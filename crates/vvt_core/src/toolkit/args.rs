//! ffmpeg argument construction.
//!
//! Pure token builders, kept separate from process execution so the
//! command shape can be unit-tested.

use std::path::Path;

use crate::mixer::{DurationPolicy, MixSpec};

/// Milliseconds as an ffmpeg seconds argument.
pub(crate) fn secs(ms: f64) -> String {
    format!("{:.3}", ms / 1000.0)
}

pub(crate) fn path_arg(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

/// `anullsrc`-generated silence of a given length.
pub(crate) fn silence_args(duration_ms: f64, sample_rate: u32, output: &Path) -> Vec<String> {
    vec![
        "-y".to_string(),
        "-f".to_string(),
        "lavfi".to_string(),
        "-i".to_string(),
        format!("anullsrc=r={}:cl=mono", sample_rate),
        "-t".to_string(),
        secs(duration_ms),
        "-c:a".to_string(),
        "pcm_s16le".to_string(),
        path_arg(output),
    ]
}

/// Cut to `target_ms` from the head, re-encoding to the canonical format.
pub(crate) fn trim_args(
    input: &Path,
    target_ms: f64,
    sample_rate: u32,
    output: &Path,
) -> Vec<String> {
    vec![
        "-y".to_string(),
        "-i".to_string(),
        path_arg(input),
        "-t".to_string(),
        secs(target_ms),
        "-ar".to_string(),
        sample_rate.to_string(),
        "-ac".to_string(),
        "1".to_string(),
        "-c:a".to_string(),
        "pcm_s16le".to_string(),
        path_arg(output),
    ]
}

/// Extend with trailing silence to `target_ms` (`apad` + hard cut).
pub(crate) fn pad_args(
    input: &Path,
    target_ms: f64,
    sample_rate: u32,
    output: &Path,
) -> Vec<String> {
    vec![
        "-y".to_string(),
        "-i".to_string(),
        path_arg(input),
        "-af".to_string(),
        format!("apad=whole_dur={}", secs(target_ms)),
        "-t".to_string(),
        secs(target_ms),
        "-ar".to_string(),
        sample_rate.to_string(),
        "-ac".to_string(),
        "1".to_string(),
        "-c:a".to_string(),
        "pcm_s16le".to_string(),
        path_arg(output),
    ]
}

/// Concat-demuxer invocation over a prepared list file.
pub(crate) fn concat_args(list_path: &Path, sample_rate: u32, output: &Path) -> Vec<String> {
    vec![
        "-y".to_string(),
        "-f".to_string(),
        "concat".to_string(),
        "-safe".to_string(),
        "0".to_string(),
        "-i".to_string(),
        path_arg(list_path),
        "-ar".to_string(),
        sample_rate.to_string(),
        "-ac".to_string(),
        "1".to_string(),
        "-c:a".to_string(),
        "pcm_s16le".to_string(),
        path_arg(output),
    ]
}

/// Weighted two-track mix.
///
/// Narration is input 0, music input 1. Gains are applied per input
/// before summing; `amix` normalization is disabled so the configured
/// gains are the only scaling. `MatchNarration` loops the music bed
/// (`-stream_loop -1`) and cuts the mix at the narration's end
/// (`amix duration=first`).
pub(crate) fn mix_args(
    narration: &Path,
    music: &Path,
    spec: &MixSpec,
    sample_rate: u32,
    output: &Path,
) -> Vec<String> {
    let mut args = vec!["-y".to_string(), "-i".to_string(), path_arg(narration)];

    if spec.duration_policy == DurationPolicy::MatchNarration {
        args.push("-stream_loop".to_string());
        args.push("-1".to_string());
    }
    args.push("-i".to_string());
    args.push(path_arg(music));

    args.push("-filter_complex".to_string());
    args.push(format!(
        "[0:a]volume={:.3}[n];[1:a]volume={:.3}[m];[n][m]amix=inputs=2:duration={}:dropout_transition=0:normalize=0[out]",
        spec.narration_gain,
        spec.music_gain,
        spec.duration_policy.amix_token()
    ));
    args.push("-map".to_string());
    args.push("[out]".to_string());

    args.push("-ar".to_string());
    args.push(sample_rate.to_string());
    args.push("-c:a".to_string());
    args.push("pcm_s16le".to_string());
    args.push(path_arg(output));

    args
}

/// Stream-mapped remux: video copied bit-exact, audio encoded fresh,
/// shortest-stream output duration.
pub(crate) fn remux_args(video: &Path, audio: &Path, output: &Path) -> Vec<String> {
    vec![
        "-y".to_string(),
        "-i".to_string(),
        path_arg(video),
        "-i".to_string(),
        path_arg(audio),
        "-map".to_string(),
        "0:v:0".to_string(),
        "-map".to_string(),
        "1:a:0".to_string(),
        "-c:v".to_string(),
        "copy".to_string(),
        "-c:a".to_string(),
        "aac".to_string(),
        "-shortest".to_string(),
        path_arg(output),
    ]
}

/// Plain re-encode, container chosen by the output extension.
pub(crate) fn encode_args(input: &Path, output: &Path) -> Vec<String> {
    vec![
        "-y".to_string(),
        "-i".to_string(),
        path_arg(input),
        path_arg(output),
    ]
}
