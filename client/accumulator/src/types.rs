use crate::{DEFAULT_BATCH_SIZE, DEFAULT_MAX_NOTIFICATIONS};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Fixed deployment target; any other network is refused at connect time.
    pub chain_id: u64,
    pub batch_size: u64,
    pub policy: SubmitPolicy,
    /// How many recent notifications to keep for display.
    pub max_notifications: usize,
}

impl SessionConfig {
    pub fn new(chain_id: u64) -> Self {
        SessionConfig {
            chain_id,
            batch_size: DEFAULT_BATCH_SIZE,
            policy: SubmitPolicy::DropAndNotify,
            max_notifications: DEFAULT_MAX_NOTIFICATIONS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPolicy {
    /// Discard a failed batch and surface the loss as a notification; the
    /// displayed total re-converges with the ledger immediately.
    DropAndNotify,
    /// Submit a batch up to `max_attempts` total attempts, then leave it
    /// pending locally for a later [`Session::flush`](crate::Session::flush).
    /// One submission always happens, so a zero behaves as one.
    Retry { max_attempts: u32 },
}

/// A mint notification as decoded from the ledger's event stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MintEvent<A> {
    pub owner: A,
    pub token_id: u32,
    pub rarity: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notification {
    Mint { token_id: u32, rarity: String },
    BatchDropped { count: u64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchOutcome {
    Submitted { count: u64 },
    Dropped { count: u64 },
    Deferred { count: u64, attempts: u32 },
}
