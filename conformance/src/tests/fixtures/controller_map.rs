//! Pick-and-place controller map with no conflicts.
//!
//! Holding: staging pose at 132..143, queue at 200 with stride 12, scalar
//! parameters below the pose block. Input registers carry the live pose and a
//! heartbeat tick counter.

/// Clean controller address map.
pub const CONTROLLER_MAP: &str = r#"{
  "meta": { "schema": 3, "pose_axes": 6, "float32_words_per_axis": 2 },
  "coils": { "PUBLISH_REQ": 100, "ABORT_REQ": 101 },
  "discrete_inputs": { "ROBOT_READY": 100, "PICK_DONE": 101, "ROBOT_BUSY": 102 },
  "holding": {
    "SEQ_ID": 120,
    "PAYLOAD_CKSUM": 121,
    "SPEED_PCT": 122,
    "CMD_TIMEOUT_MS": 123,
    "READY_TIMEOUT_MS": 124,
    "TARGET_POSE_STAGING_BASE": 132,
    "TARGET_QUEUE_BASE": 200,
    "TARGET_QUEUE_STRIDE": 12
  },
  "input_registers": {
    "ACTUAL_POSE_BASE": 340,
    "HEARTBEAT_TICK_BASE": 388,
    "ERROR_CODE": 390
  },
  "reserved": {
    "coils": [ { "start": 0, "end": 99, "purpose": "vendor" } ],
    "holding": [ { "start": 150, "end": 199, "purpose": "future parameters" } ],
    "input_registers": [ { "start": 352, "end": 387, "purpose": "diagnostics" } ]
  }
}"#;
