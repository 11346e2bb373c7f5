//! Sample address maps shared by unit and integration tests.

pub mod fixtures;
