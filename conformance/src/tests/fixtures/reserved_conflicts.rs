//! Reserved ranges that collide with each other and with used entries.

/// Coils: a used coil inside a reservation. Holding: a reservation inside a
/// pose block, and two reservations sharing address 20.
pub const RESERVED_CONFLICTS: &str = r#"{
  "coils": { "PUBLISH_REQ": 5 },
  "holding": { "TARGET_POSE_BASE": 40 },
  "reserved": {
    "coils": [ { "start": 0, "end": 9, "purpose": "vendor" } ],
    "holding": [
      { "start": 10, "end": 20, "purpose": "spare" },
      { "start": 20, "end": 25, "purpose": "firmware" },
      { "start": 44, "end": 45, "purpose": "legacy" }
    ]
  }
}"#;
