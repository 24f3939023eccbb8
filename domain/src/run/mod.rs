//! Run lifecycle: the state machine a single invocation walks through and
//! the report it produces.

mod report;
mod state;

pub use report::{Verdict, VerdictReport};
pub use state::RunState;
