use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::errors::{SessionError, SubmitError};
use crate::types::{BatchOutcome, MintEvent, Notification, SessionConfig, SubmitPolicy};

/// Ledger access as the accumulator sees it: a network id, one read and one
/// mutating call. Implementations wrap a wallet provider and the contract
/// bindings.
pub trait ClaimSubmitter<A> {
    fn chain_id(&self) -> u64;

    fn confirmed_total(&mut self, player: &A) -> Result<u64, SubmitError>;

    fn submit_claim(&mut self, player: &A, count: u64) -> Result<(), SubmitError>;
}

/// Listener handle for mint notifications. Dropping it stops delivery, so a
/// disconnect cannot leak a live listener across reconnects.
pub struct MintSubscription {
    active: Rc<Cell<bool>>,
}

impl MintSubscription {
    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn unsubscribe(self) {}
}

impl Drop for MintSubscription {
    fn drop(&mut self) {
        self.active.set(false);
    }
}

/// One connected-wallet game session. Single-threaded by construction (the
/// UI event loop); click handlers and submit completions never race.
pub struct Session<A, S> {
    player: A,
    config: SessionConfig,
    submitter: S,
    local_clicks: u64,
    confirmed_total: u64,
    notifications: VecDeque<Notification>,
    listener: Rc<Cell<bool>>,
}

impl<A: Clone + PartialEq, S: ClaimSubmitter<A>> Session<A, S> {
    /// Connect against the fixed deployment target. A mismatched network is
    /// refused before anything is submitted; the confirmed total is seeded
    /// from the ledger so the display starts accurate.
    pub fn connect(
        mut submitter: S,
        player: A,
        config: SessionConfig,
    ) -> Result<Self, SessionError> {
        let actual = submitter.chain_id();

        if actual != config.chain_id {
            return Err(SessionError::WrongNetwork {
                expected: config.chain_id,
                actual,
            });
        }

        let confirmed_total = submitter.confirmed_total(&player)?;

        Ok(Session {
            player,
            config,
            submitter,
            local_clicks: 0,
            confirmed_total,
            notifications: VecDeque::new(),
            listener: Rc::new(Cell::new(false)),
        })
    }

    /// Register one local click. Every `batch_size`-th click triggers one
    /// batched submission of exactly `batch_size` clicks.
    pub fn click(&mut self) -> Option<BatchOutcome> {
        self.local_clicks += 1;

        if self.local_clicks % self.config.batch_size == 0 {
            Some(self.submit_batch())
        } else {
            None
        }
    }

    /// Re-attempt a batch left pending by a deferred submission.
    pub fn flush(&mut self) -> Option<BatchOutcome> {
        if self.local_clicks >= self.config.batch_size {
            Some(self.submit_batch())
        } else {
            None
        }
    }

    fn submit_batch(&mut self) -> BatchOutcome {
        let count = self.config.batch_size;

        match self.config.policy {
            SubmitPolicy::Retry { max_attempts } => {
                let mut attempts = 0;

                loop {
                    attempts += 1;

                    match self.submitter.submit_claim(&self.player, count) {
                        Ok(()) => {
                            self.confirm(count);
                            return BatchOutcome::Submitted { count };
                        }
                        Err(_) if attempts < max_attempts => continue,
                        Err(_) => return BatchOutcome::Deferred { count, attempts },
                    }
                }
            }
            SubmitPolicy::DropAndNotify => {
                match self.submitter.submit_claim(&self.player, count) {
                    Ok(()) => {
                        self.confirm(count);
                        BatchOutcome::Submitted { count }
                    }
                    Err(_) => {
                        self.local_clicks -= count;
                        self.push_notification(Notification::BatchDropped { count });
                        BatchOutcome::Dropped { count }
                    }
                }
            }
        }
    }

    fn confirm(&mut self, count: u64) {
        self.confirmed_total += count;
        self.local_clicks -= count;
    }

    /// Confirmed ledger total plus unconfirmed local clicks.
    pub fn displayed_total(&self) -> u64 {
        self.confirmed_total + self.local_clicks
    }

    pub fn confirmed_total(&self) -> u64 {
        self.confirmed_total
    }

    pub fn local_clicks(&self) -> u64 {
        self.local_clicks
    }

    pub fn player(&self) -> &A {
        &self.player
    }

    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    pub fn submitter_mut(&mut self) -> &mut S {
        &mut self.submitter
    }

    /// Arm mint-event delivery for this session's player. Any previously
    /// issued handle is invalidated.
    pub fn subscribe(&mut self) -> MintSubscription {
        self.listener.set(false);
        self.listener = Rc::new(Cell::new(true));

        MintSubscription {
            active: Rc::clone(&self.listener),
        }
    }

    /// Feed one decoded ledger event. Events for other addresses, or events
    /// arriving without a live subscription, are ignored.
    pub fn handle_event(&mut self, event: MintEvent<A>) {
        if !self.listener.get() || event.owner != self.player {
            return;
        }

        self.push_notification(Notification::Mint {
            token_id: event.token_id,
            rarity: event.rarity,
        });
    }

    /// Most recent notifications, oldest first, bounded by
    /// `config.max_notifications`.
    pub fn notifications(&self) -> &VecDeque<Notification> {
        &self.notifications
    }

    fn push_notification(&mut self, notification: Notification) {
        self.notifications.push_back(notification);

        while self.notifications.len() > self.config.max_notifications {
            self.notifications.pop_front();
        }
    }

    /// Move the session to another wallet address: the old listener is torn
    /// down, unconfirmed clicks and notifications are discarded, and the
    /// confirmed total is reloaded from the ledger.
    pub fn switch_account(&mut self, player: A) -> Result<(), SessionError> {
        self.listener.set(false);
        self.listener = Rc::new(Cell::new(false));

        self.confirmed_total = self.submitter.confirmed_total(&player)?;
        self.player = player;
        self.local_clicks = 0;
        self.notifications.clear();

        Ok(())
    }
}
