//! Fan-out outcome types.
//!
//! - [`QueryOutcome`]: what a single provider produced for one query
//! - [`FanOutResult`]: the `results` / `errors` maps after the join barrier

mod outcome;
mod result;

pub use outcome::QueryOutcome;
pub use result::FanOutResult;
