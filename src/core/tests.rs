#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use futures::channel::oneshot;
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;

    use crate::core::http::error::ApiError;
    use crate::core::http::refresh::{
        RefreshClaim, RefreshCoordinator, RefreshOutcome, may_recover,
    };
    use crate::core::session::credential::StoredCredential;
    use crate::core::session::types::{RestorePlan, restore_plan};

    /// Model of a request hitting a 401: claim the coordinator, lead the
    /// exchange if first, otherwise wait for the in-flight one. The leader
    /// parks on `gate` the way a real exchange parks on the network.
    async fn recover_from_401(
        coordinator: RefreshCoordinator,
        exchanges: Rc<Cell<u32>>,
        gate: Rc<RefCell<Option<oneshot::Receiver<RefreshOutcome>>>>,
    ) -> Result<String, ApiError> {
        match coordinator.claim() {
            RefreshClaim::Waiter(receiver) => receiver.await.map_err(|_| ApiError::Network)?,
            RefreshClaim::Leader => {
                exchanges.set(exchanges.get() + 1);
                let receiver = gate.borrow_mut().take().expect("one exchange per gate");
                let outcome = receiver.await.map_err(|_| ApiError::Network)?;
                coordinator.settle(outcome.clone());
                outcome
            }
        }
    }

    fn run_concurrent_401s(
        n: usize,
        exchange_result: RefreshOutcome,
    ) -> (u32, Vec<Result<String, ApiError>>) {
        let mut pool = LocalPool::new();
        let spawner = pool.spawner();

        let coordinator = RefreshCoordinator::new();
        let exchanges = Rc::new(Cell::new(0));
        let (gate_tx, gate_rx) = oneshot::channel();
        let gate = Rc::new(RefCell::new(Some(gate_rx)));
        let outcomes = Rc::new(RefCell::new(vec![None; n]));

        for i in 0..n {
            let coordinator = coordinator.clone();
            let exchanges = exchanges.clone();
            let gate = gate.clone();
            let outcomes = outcomes.clone();
            spawner
                .spawn_local(async move {
                    let outcome = recover_from_401(coordinator, exchanges, gate).await;
                    outcomes.borrow_mut()[i] = Some(outcome);
                })
                .expect("spawn request task");
        }

        // All requests hit their 401 while the exchange is still on the wire.
        pool.run_until_stalled();
        assert!(coordinator.is_refreshing());
        assert!(outcomes.borrow().iter().all(Option::is_none));

        // The exchange comes back; everyone settles.
        gate_tx.send(exchange_result).expect("leader is waiting");
        pool.run();

        let outcomes = outcomes
            .borrow_mut()
            .iter_mut()
            .map(|slot| slot.take().expect("request settled"))
            .collect();
        (exchanges.get(), outcomes)
    }

    // Token expires mid-session, several requests 401 at once: exactly one
    // refresh exchange happens and every request resolves with its token.
    #[test]
    fn concurrent_401s_share_a_single_refresh_exchange() {
        let (exchanges, outcomes) = run_concurrent_401s(4, Ok("fresh-token".to_string()));

        assert_eq!(exchanges, 1);
        assert_eq!(outcomes.len(), 4);
        for outcome in outcomes {
            assert_eq!(outcome, Ok("fresh-token".to_string()));
        }
    }

    #[test]
    fn two_simultaneous_requests_match_the_expiry_scenario() {
        let (exchanges, outcomes) = run_concurrent_401s(2, Ok("token-2".to_string()));
        assert_eq!(exchanges, 1);
        assert!(outcomes.iter().all(|o| o == &Ok("token-2".to_string())));
    }

    // The refresh call itself fails: every queued request rejects with that
    // same failure, none resolves.
    #[test]
    fn failed_refresh_rejects_every_queued_request() {
        let (exchanges, outcomes) =
            run_concurrent_401s(3, Err(ApiError::Unauthorized { message: None }));

        assert_eq!(exchanges, 1);
        for outcome in outcomes {
            assert_eq!(outcome, Err(ApiError::Unauthorized { message: None }));
        }
    }

    // After a settled cycle the coordinator starts fresh: a later 401 leads
    // a new exchange instead of reusing a stale queue.
    #[test]
    fn a_new_cycle_starts_after_settlement() {
        let coordinator = RefreshCoordinator::new();
        assert!(matches!(coordinator.claim(), RefreshClaim::Leader));
        coordinator.settle(Ok("t1".to_string()));

        assert!(!coordinator.is_refreshing());
        assert!(matches!(coordinator.claim(), RefreshClaim::Leader));
    }

    // A request that still 401s after its one retry is terminal; it must not
    // start a second refresh cycle.
    #[test]
    fn retried_request_does_not_refresh_again() {
        let err = ApiError::Unauthorized {
            message: Some("token revoked".to_string()),
        };
        assert!(may_recover(&err, false));
        assert!(!may_recover(&err, true));
    }

    // Bootstrap with no stored credential settles without any network call.
    #[test]
    fn restore_without_credential_stays_offline() {
        assert_eq!(restore_plan(None, 1_000), RestorePlan::Stay);
    }

    // Bootstrap with an expired credential behaves like no credential.
    #[test]
    fn restore_with_expired_credential_stays_offline() {
        let credential = StoredCredential {
            token: "stale".to_string(),
            expires_at: 999,
        };
        assert_eq!(restore_plan(Some(credential), 1_000), RestorePlan::Stay);
    }
}
