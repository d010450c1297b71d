//! Controller layer: backend events and request orchestration.

pub mod events;
pub mod orchestration;
