use std::collections::HashMap;

use crate::{ClaimSubmitter, SessionConfig, SubmitError};

pub const CHAIN_ID: u64 = 10143;

pub fn config() -> SessionConfig {
    SessionConfig::new(CHAIN_ID)
}

/// In-memory stand-in for the wallet provider + contract bindings. Failures
/// are scripted through `fail_next`; every submitted count is recorded.
pub struct MockSubmitter {
    pub chain_id: u64,
    pub totals: HashMap<&'static str, u64>,
    pub fail_next: u32,
    pub calls: Vec<u64>,
}

impl MockSubmitter {
    pub fn new() -> Self {
        MockSubmitter {
            chain_id: CHAIN_ID,
            totals: HashMap::new(),
            fail_next: 0,
            calls: Vec::new(),
        }
    }
}

impl ClaimSubmitter<&'static str> for MockSubmitter {
    fn chain_id(&self) -> u64 {
        self.chain_id
    }

    fn confirmed_total(&mut self, player: &&'static str) -> Result<u64, SubmitError> {
        Ok(*self.totals.get(player).unwrap_or(&0))
    }

    fn submit_claim(&mut self, player: &&'static str, count: u64) -> Result<(), SubmitError> {
        self.calls.push(count);

        if self.fail_next > 0 {
            self.fail_next -= 1;
            return Err(SubmitError::Rejected);
        }

        *self.totals.entry(*player).or_insert(0) += count;

        Ok(())
    }
}
