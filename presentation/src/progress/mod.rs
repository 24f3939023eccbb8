//! Progress display implementations

pub mod reporter;
