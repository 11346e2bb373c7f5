/// A map that declares nothing.
pub const EMPTY_MAP: &str = r#"{
  "meta": {},
  "coils": {},
  "discrete_inputs": {},
  "holding": {},
  "input_registers": {},
  "reserved": {}
}"#;
