use std::fmt;

/// Errors raised by the experiment core.
///
/// Every precondition the experiments rely on (positive sample counts,
/// well-formed rectangles, prefixes within the base arrays) is checked up
/// front and reported here instead of producing silently wrong numbers.
#[derive(Debug)]
pub enum ExperimentError {
    /// A parameter is outside the domain the computation is defined on
    InvalidArgument {
        what: &'static str,
        reason: String,
    },
    /// A prefix longer than the generated base sequence was requested
    PrefixOutOfRange { requested: usize, available: usize },
    /// The results sink could not be written
    Io(std::io::Error),
}

impl ExperimentError {
    pub(crate) fn invalid(what: &'static str, reason: impl Into<String>) -> Self {
        ExperimentError::InvalidArgument {
            what,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ExperimentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExperimentError::InvalidArgument { what, reason } => {
                write!(f, "invalid {what}: {reason}")
            }
            ExperimentError::PrefixOutOfRange {
                requested,
                available,
            } => write!(
                f,
                "prefix of length {requested} requested but only {available} elements were generated"
            ),
            ExperimentError::Io(e) => write!(f, "results sink error: {e}"),
        }
    }
}

impl std::error::Error for ExperimentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExperimentError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ExperimentError {
    fn from(err: std::io::Error) -> Self {
        ExperimentError::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, ExperimentError>;
