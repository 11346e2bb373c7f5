//! Address map documents used as test fixtures.
//!
//! Each constant holds a complete JSON address map exercising one class of
//! check. `CONTROLLER_MAP` is a clean map; every other fixture contains the
//! conflict its name describes.

mod controller_map;
mod empty_map;
mod pose_collision;
mod queue_map;
mod reserved_conflicts;

pub use controller_map::CONTROLLER_MAP;
pub use empty_map::EMPTY_MAP;
pub use pose_collision::POSE_COLLISION;
pub use queue_map::QUEUE_MAP;
pub use reserved_conflicts::RESERVED_CONFLICTS;
