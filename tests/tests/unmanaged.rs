//! Coordinator behavior when collaborators are absent.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use txcoord_tests::prelude::*;

#[test]
fn test_every_call_owns_a_noop_transaction() {
    let coordinator = TransactionCoordinator::unmanaged();

    for raw in 0..4 {
        let cx = ContextId(raw);
        assert!(coordinator.begin_or_join(cx).unwrap());
        assert!(coordinator.begin_or_join(cx).unwrap());
        assert!(coordinator.commit(cx).is_ok());
        assert_eq!(coordinator.status(cx).unwrap(), TransactionStatus::NoTransaction);
    }
}

#[test]
fn test_scoped_work_runs_without_manager() {
    let coordinator = TransactionCoordinator::default();

    let result: CoordinatorResult<u32> = coordinator.in_transaction(ContextId(1), |_| Ok(42));

    assert_eq!(result.unwrap(), 42);
}

#[test]
fn test_manager_only_configuration() {
    // GIVEN - suspend/resume available, begin/commit degraded
    let tm = Arc::new(InMemoryTransactionManager::new());
    let coordinator =
        TransactionCoordinator::new(CoordinatorConfig::new().with_transaction_manager(tm.clone()));

    // WHEN
    let owns = coordinator.begin_or_join(ContextId(1)).unwrap();
    let suspended = coordinator.suspend(ContextId(1));

    // THEN
    assert!(owns);
    assert!(coordinator.has_transaction_manager());
    assert!(!coordinator.has_user_transaction());
    assert_eq!(tm.calls(Call::Begin), 0);
    assert!(matches!(suspended, Err(CoordinatorError::Suspend { .. })));
}

#[test]
fn test_reconfigure_at_startup() {
    // GIVEN
    let mut coordinator = TransactionCoordinator::unmanaged();
    let tm = Arc::new(InMemoryTransactionManager::new());

    // WHEN
    coordinator.configure(
        CoordinatorConfig::new()
            .with_transaction_manager(tm.clone())
            .with_user_transaction(tm.clone()),
    );

    // THEN
    assert!(coordinator.begin_or_join(ContextId(1)).unwrap());
    assert!(!coordinator.begin_or_join(ContextId(1)).unwrap());
    assert_eq!(tm.calls(Call::Begin), 1);
    assert_eq!(
        format!("{:?}", coordinator),
        "TransactionCoordinator { has_transaction_manager: true, has_user_transaction: true }"
    );
}
