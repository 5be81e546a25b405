//! Step definitions for turn panel behaviour tests.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
