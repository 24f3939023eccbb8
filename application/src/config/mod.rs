//! Application-level configuration.
//!
//! - [`RunParams`]: summarizer selection and run deadline

pub mod run_params;

pub use run_params::{
    DEFAULT_RUN_TIMEOUT, DEFAULT_SUMMARIZER, DEFAULT_SUMMARIZER_RESERVE, RunParams,
};
