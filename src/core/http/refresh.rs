//! Single-flight coordination for the token refresh exchange
//!
//! At most one refresh call may be in flight at any time. The first request
//! to hit a 401 claims the leader role and performs the exchange; every
//! request that 401s while the exchange is pending parks on a oneshot slot
//! and is resolved with the leader's outcome. State is only mutated
//! synchronously between await points, so two exchanges can never interleave.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;

use super::error::ApiError;

/// Result of the refresh exchange, shared by the leader and every waiter.
pub type RefreshOutcome = Result<String, ApiError>;

/// What a request that hit a 401 should do next.
pub enum RefreshClaim {
    /// Nobody is refreshing: perform the exchange, then call
    /// [`RefreshCoordinator::settle`] with its outcome.
    Leader,
    /// A refresh is already in flight: await the slot.
    Waiter(oneshot::Receiver<RefreshOutcome>),
}

#[derive(Default)]
struct Inner {
    is_refreshing: bool,
    waiters: Vec<oneshot::Sender<RefreshOutcome>>,
}

/// Process-wide refresh state. Cheap to clone; all clones share one queue.
#[derive(Clone, Default)]
pub struct RefreshCoordinator {
    inner: Rc<RefCell<Inner>>,
}

impl RefreshCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the exchange. Exactly one caller per refresh cycle becomes the
    /// leader; all others become waiters until the leader settles.
    pub fn claim(&self) -> RefreshClaim {
        let mut inner = self.inner.borrow_mut();
        if inner.is_refreshing {
            let (tx, rx) = oneshot::channel();
            inner.waiters.push(tx);
            RefreshClaim::Waiter(rx)
        } else {
            inner.is_refreshing = true;
            RefreshClaim::Leader
        }
    }

    /// Publish the exchange outcome: drains the queue in arrival order, every
    /// waiter receives the same result, and the in-flight flag is cleared.
    pub fn settle(&self, outcome: RefreshOutcome) {
        let waiters = {
            let mut inner = self.inner.borrow_mut();
            inner.is_refreshing = false;
            std::mem::take(&mut inner.waiters)
        };
        for waiter in waiters {
            // A dropped receiver just means the caller lost interest.
            let _ = waiter.send(outcome.clone());
        }
    }

    pub fn is_refreshing(&self) -> bool {
        self.inner.borrow().is_refreshing
    }
}

/// Whether a failed request may still be recovered by a refresh: only a 401,
/// and only if this request has not been retried yet.
pub fn may_recover(err: &ApiError, already_retried: bool) -> bool {
    err.is_unauthorized() && !already_retried
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn first_claim_is_leader() {
        let coordinator = RefreshCoordinator::new();
        assert!(matches!(coordinator.claim(), RefreshClaim::Leader));
        assert!(coordinator.is_refreshing());
    }

    #[test]
    fn claims_during_flight_become_waiters() {
        let coordinator = RefreshCoordinator::new();
        assert!(matches!(coordinator.claim(), RefreshClaim::Leader));
        assert!(matches!(coordinator.claim(), RefreshClaim::Waiter(_)));
        assert!(matches!(coordinator.claim(), RefreshClaim::Waiter(_)));
    }

    #[test]
    fn settle_resolves_every_waiter_with_the_same_token() {
        let coordinator = RefreshCoordinator::new();
        assert!(matches!(coordinator.claim(), RefreshClaim::Leader));

        let mut receivers = Vec::new();
        for _ in 0..3 {
            match coordinator.claim() {
                RefreshClaim::Waiter(rx) => receivers.push(rx),
                RefreshClaim::Leader => panic!("second leader while refresh in flight"),
            }
        }

        coordinator.settle(Ok("token-2".to_string()));

        for rx in receivers {
            let outcome = block_on(rx).expect("settle dropped a waiter");
            assert_eq!(outcome, Ok("token-2".to_string()));
        }
        assert!(!coordinator.is_refreshing());
    }

    #[test]
    fn settle_failure_rejects_every_waiter_with_the_same_error() {
        let coordinator = RefreshCoordinator::new();
        assert!(matches!(coordinator.claim(), RefreshClaim::Leader));

        let rx1 = match coordinator.claim() {
            RefreshClaim::Waiter(rx) => rx,
            RefreshClaim::Leader => panic!("second leader"),
        };
        let rx2 = match coordinator.claim() {
            RefreshClaim::Waiter(rx) => rx,
            RefreshClaim::Leader => panic!("third leader"),
        };

        coordinator.settle(Err(ApiError::Unauthorized { message: None }));

        assert_eq!(
            block_on(rx1).unwrap(),
            Err(ApiError::Unauthorized { message: None })
        );
        assert_eq!(
            block_on(rx2).unwrap(),
            Err(ApiError::Unauthorized { message: None })
        );
    }

    #[test]
    fn queue_is_empty_after_settle() {
        let coordinator = RefreshCoordinator::new();
        assert!(matches!(coordinator.claim(), RefreshClaim::Leader));
        let _rx = coordinator.claim();
        coordinator.settle(Ok("token".to_string()));

        // A new cycle starts from scratch: next claim leads again.
        assert!(matches!(coordinator.claim(), RefreshClaim::Leader));
        coordinator.settle(Ok("token".to_string()));
    }

    #[test]
    fn abandoned_waiter_does_not_block_settlement() {
        let coordinator = RefreshCoordinator::new();
        assert!(matches!(coordinator.claim(), RefreshClaim::Leader));
        drop(coordinator.claim());
        coordinator.settle(Ok("token".to_string()));
        assert!(!coordinator.is_refreshing());
    }

    #[test]
    fn recovery_applies_to_first_401_only() {
        let unauthorized = ApiError::Unauthorized { message: None };
        assert!(may_recover(&unauthorized, false));
        assert!(!may_recover(&unauthorized, true));
        assert!(!may_recover(&ApiError::Server, false));
        assert!(!may_recover(&ApiError::Network, false));
    }
}
