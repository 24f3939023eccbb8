//! Run state machine

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// State of one run
///
/// ```text
/// Init -> ConfigLoaded -> ProvidersResolved -> FannedOut
///      -> SummarizerSelected -> Summarized -> Done
/// ```
///
/// `Failed` is reachable from every non-terminal state. Nothing is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    Init,
    ConfigLoaded,
    ProvidersResolved,
    FannedOut,
    SummarizerSelected,
    Summarized,
    Done,
    Failed,
}

impl RunState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunState::Init => "init",
            RunState::ConfigLoaded => "config_loaded",
            RunState::ProvidersResolved => "providers_resolved",
            RunState::FannedOut => "fanned_out",
            RunState::SummarizerSelected => "summarizer_selected",
            RunState::Summarized => "summarized",
            RunState::Done => "done",
            RunState::Failed => "failed",
        }
    }

    /// The single successor on the happy path
    pub fn next(&self) -> Option<RunState> {
        match self {
            RunState::Init => Some(RunState::ConfigLoaded),
            RunState::ConfigLoaded => Some(RunState::ProvidersResolved),
            RunState::ProvidersResolved => Some(RunState::FannedOut),
            RunState::FannedOut => Some(RunState::SummarizerSelected),
            RunState::SummarizerSelected => Some(RunState::Summarized),
            RunState::Summarized => Some(RunState::Done),
            RunState::Done | RunState::Failed => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Done | RunState::Failed)
    }

    pub fn can_transition_to(&self, to: RunState) -> bool {
        if to == RunState::Failed {
            return !self.is_terminal();
        }
        self.next() == Some(to)
    }

    /// Move to `to`, rejecting anything but the next state or `Failed`
    pub fn advance(self, to: RunState) -> Result<RunState, DomainError> {
        if self.can_transition_to(to) {
            Ok(to)
        } else {
            Err(DomainError::InvalidTransition {
                from: self.as_str().to_string(),
                to: to.as_str().to_string(),
            })
        }
    }
}

impl std::fmt::Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
