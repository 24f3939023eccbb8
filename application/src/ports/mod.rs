//! Ports: interfaces the application layer needs from the outside world.

pub mod progress;
pub mod provider;
