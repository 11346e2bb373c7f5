//! A scalar parameter placed on the last word of a pose block.

/// Holding map where `SEQ_ID` sits on word 11 of the pose at 0.
pub const POSE_COLLISION: &str = r#"{
  "holding": {
    "TARGET_POSE_BASE": 0,
    "SEQ_ID": 11,
    "SPEED_PCT": 12
  }
}"#;
