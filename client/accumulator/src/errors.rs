use std::error::Error;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// The wallet or node rejected the call (bad signature, reverted claim).
    Rejected,
    /// The node could not be reached.
    Unavailable,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Rejected => write!(f, "submission rejected"),
            SubmitError::Unavailable => write!(f, "node unavailable"),
        }
    }
}

impl Error for SubmitError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// The wallet is on the wrong network. The caller should request a
    /// network switch; the original intent is not retried automatically.
    WrongNetwork { expected: u64, actual: u64 },
    Submit(SubmitError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::WrongNetwork { expected, actual } => {
                write!(f, "wrong network: expected {expected}, connected to {actual}")
            }
            SessionError::Submit(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {}

impl From<SubmitError> for SessionError {
    fn from(err: SubmitError) -> Self {
        SessionError::Submit(err)
    }
}
