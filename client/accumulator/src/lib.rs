//! Client-side batching for the clicker ledger.
//!
//! Mirrors the game UI behavior: clicks accumulate in an optimistic local
//! counter and every `batch_size`-th click becomes one `claim_clicks`
//! submission, so the displayed total (confirmed + unconfirmed) stays
//! responsive without a transaction per click. Submission failure handling is
//! an explicit [`SubmitPolicy`] rather than a silent log line.

mod errors;
mod session;
mod tests;
mod types;

pub use errors::{SessionError, SubmitError};
pub use session::{ClaimSubmitter, MintSubscription, Session};
pub use types::{BatchOutcome, MintEvent, Notification, SessionConfig, SubmitPolicy};

pub const DEFAULT_BATCH_SIZE: u64 = 100;
pub const DEFAULT_MAX_NOTIFICATIONS: usize = 3;
