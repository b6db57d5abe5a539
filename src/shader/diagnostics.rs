/// Compile and link diagnostics as structured values.
///
/// The graphics binding reports a raw success flag plus the driver's
/// info log; these types wrap that pair so failure travels as data
/// rather than a console print. Conversion into `Result` is explicit,
/// letting the caller log, display, or abort as it sees fit.

use super::source::ShaderStage;
use crate::error::{Error, Result};

/// Verdict of a driver-side shader stage compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileOutcome {
    /// The stage compiled cleanly
    Success,
    /// The driver rejected the stage
    Failure {
        /// Driver info log text
        log: String,
    },
}

impl CompileOutcome {
    /// Build from the raw status + info log the graphics API reports.
    pub fn from_status(success: bool, log: impl Into<String>) -> Self {
        if success {
            Self::Success
        } else {
            Self::Failure { log: log.into() }
        }
    }

    /// Whether the stage compiled.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Convert into a `Result`, attaching the stage to the failure.
    pub fn into_result(self, stage: ShaderStage) -> Result<()> {
        match self {
            Self::Success => Ok(()),
            Self::Failure { log } => Err(Error::ShaderCompile { stage, log }),
        }
    }
}

/// Verdict of a driver-side program link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// The program linked cleanly
    Success,
    /// The driver rejected the program
    Failure {
        /// Driver info log text
        log: String,
    },
}

impl LinkOutcome {
    /// Build from the raw status + info log the graphics API reports.
    pub fn from_status(success: bool, log: impl Into<String>) -> Self {
        if success {
            Self::Success
        } else {
            Self::Failure { log: log.into() }
        }
    }

    /// Whether the program linked.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Convert into a `Result`.
    pub fn into_result(self) -> Result<()> {
        match self {
            Self::Success => Ok(()),
            Self::Failure { log } => Err(Error::ProgramLink { log }),
        }
    }
}

#[cfg(test)]
#[path = "diagnostics_tests.rs"]
mod tests;
