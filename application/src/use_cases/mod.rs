//! Use cases: the fan-out engine, the summarization step and the run
//! orchestrator that sequences them.

pub mod fan_out;
pub mod run_verdict;
pub(crate) mod shared;
pub mod summarize;
