//! Shared utility modules used across textsim components.

pub mod float;
pub mod math;
