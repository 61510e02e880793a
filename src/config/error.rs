use std::path::PathBuf;

/// Errors that can occur while loading a step table.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Step table parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Step table has no steps")]
    EmptyTable,

    /// Step ids must run 1..=N in table order.
    #[error("Step at position {position} has id {found}, expected {expected}")]
    StepIdMismatch {
        position: usize,
        expected: usize,
        found: usize,
    },

    #[error("Instruction step {0} has no buttons")]
    EmptyButtons(usize),

    #[error("Question step {0} has no choices")]
    EmptyChoices(usize),

    #[error("Question step {0} has no correct choice")]
    NoCorrectChoice(usize),
}
