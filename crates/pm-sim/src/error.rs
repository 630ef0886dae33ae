use pm_core::{AgentId, ConfigError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("agent at index {index} has id {found}; ids must be sequential from 0")]
    AgentIdMismatch { index: usize, found: AgentId },

    #[error("agent {id}: {reason}")]
    InvalidAgent { id: AgentId, reason: &'static str },

    #[cfg(feature = "parallel")]
    #[error("could not build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Only reachable when panics unwind; see `RunHandle::stop`.
    #[error("simulation runner thread panicked")]
    RunnerPanicked,
}

pub type SimResult<T> = Result<T, SimError>;
