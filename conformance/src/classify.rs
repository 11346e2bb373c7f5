//! Key-name classification for register-space entries.
//!
//! Expansion rules are keyed on naming conventions rather than a fixed enum
//! of names. All of that matching lives here so the rest of the crate only
//! sees a [`KeyKind`].

/// The literal key holding the first slot of the target queue.
pub const QUEUE_BASE_KEY: &str = "TARGET_QUEUE_BASE";

/// The literal helper key giving the queue slot stride in words.
pub const QUEUE_STRIDE_KEY: &str = "TARGET_QUEUE_STRIDE";

/// How a register-space key expands into concrete addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Base of a multi-axis float32 pose block.
    Pose,
    /// Base of a 32-bit tick counter (two words).
    Tick,
    /// Base of the variable-length target queue.
    QueueBase,
    /// Queue stride helper; consulted during expansion, never emitted.
    QueueStride,
    /// A single-word entry.
    Plain,
}

/// Classifies a register-space key.
///
/// Precedence: stride helper, pose base, tick base, queue base, plain.
pub fn classify(key: &str) -> KeyKind {
    if key == QUEUE_STRIDE_KEY {
        KeyKind::QueueStride
    } else if key.contains("POSE") && key.ends_with("_BASE") {
        KeyKind::Pose
    } else if key.ends_with("TICK_BASE") {
        KeyKind::Tick
    } else if key == QUEUE_BASE_KEY {
        KeyKind::QueueBase
    } else {
        KeyKind::Plain
    }
}
