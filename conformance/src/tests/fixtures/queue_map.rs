//! Queue of stride 4 at 100 with a parameter at 105.
//!
//! Only conflicts once the queue is expanded to at least two slots.

/// Queue fixture.
pub const QUEUE_MAP: &str = r#"{
  "holding": {
    "TARGET_QUEUE_BASE": 100,
    "TARGET_QUEUE_STRIDE": 4,
    "SPEED_PCT": 105
  }
}"#;
