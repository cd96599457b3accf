//! Duration conformance.
//!
//! Forces a speech clip to exactly its cue window length. Clips that run
//! long are truncated from the tail — never the head, which would clip
//! the start of speech. Clips that run short get trailing silence. The
//! postcondition holds for every input: the result's length equals the
//! requested target.

use std::path::Path;

use super::types::ConformedClip;
use crate::toolkit::{AudioBackend, ToolResult};

/// Duration difference below which a clip counts as already conformed.
pub const DURATION_TOLERANCE_MS: f64 = 1.0;

/// What [`conform_clip`] did to the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConformAction {
    /// The clip's tail was dropped.
    Trimmed { removed_ms: f64 },
    /// Trailing silence was appended.
    Padded { added_ms: f64 },
    /// Already within tolerance of the target.
    Unchanged,
}

/// Conform `input` to exactly `target_ms`, writing the result to `output`.
///
/// Equal-length clips are re-encoded through the trim path too: every
/// segment entering the timeline must share the canonical sample format,
/// and the hard cut pins the declared length exactly.
pub fn conform_clip(
    backend: &dyn AudioBackend,
    input: &Path,
    target_ms: f64,
    output: &Path,
) -> ToolResult<(ConformedClip, ConformAction)> {
    let measured_ms = backend.clip_duration_ms(input)?;

    let action = if measured_ms > target_ms + DURATION_TOLERANCE_MS {
        backend.trim_to(input, target_ms, output)?;
        ConformAction::Trimmed {
            removed_ms: measured_ms - target_ms,
        }
    } else if measured_ms < target_ms - DURATION_TOLERANCE_MS {
        backend.pad_to(input, target_ms, output)?;
        ConformAction::Padded {
            added_ms: target_ms - measured_ms,
        }
    } else {
        backend.trim_to(input, target_ms, output)?;
        ConformAction::Unchanged
    };

    tracing::debug!(
        "Conformed {} ({:.1}ms -> {:.1}ms, {:?})",
        input.display(),
        measured_ms,
        target_ms,
        action
    );

    Ok((
        ConformedClip {
            path: output.to_path_buf(),
            duration_ms: target_ms,
        },
        action,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::test_support::MockBackend;

    #[test]
    fn long_clips_are_trimmed_from_the_tail() {
        let dir = tempfile::tempdir().unwrap();
        let backend = MockBackend::new(4000.0);

        let (clip, action) = conform_clip(
            &backend,
            &dir.path().join("in.wav"),
            2000.0,
            &dir.path().join("out.wav"),
        )
        .unwrap();

        assert_eq!(clip.duration_ms, 2000.0);
        assert_eq!(action, ConformAction::Trimmed { removed_ms: 2000.0 });
        assert_eq!(backend.ops(), vec!["trim 2000"]);
    }

    #[test]
    fn short_clips_get_trailing_silence() {
        let dir = tempfile::tempdir().unwrap();
        let backend = MockBackend::new(1500.0);

        let (clip, action) = conform_clip(
            &backend,
            &dir.path().join("in.wav"),
            2000.0,
            &dir.path().join("out.wav"),
        )
        .unwrap();

        assert_eq!(clip.duration_ms, 2000.0);
        assert_eq!(action, ConformAction::Padded { added_ms: 500.0 });
        assert_eq!(backend.ops(), vec!["pad 2000"]);
    }

    #[test]
    fn exact_clips_pass_through_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let backend = MockBackend::new(2000.0);

        let (clip, action) = conform_clip(
            &backend,
            &dir.path().join("in.wav"),
            2000.0,
            &dir.path().join("out.wav"),
        )
        .unwrap();

        assert_eq!(clip.duration_ms, 2000.0);
        assert_eq!(action, ConformAction::Unchanged);
    }
}
