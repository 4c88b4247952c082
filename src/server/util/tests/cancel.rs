use crate::server::{error::Error, util::cancel::CancelSignal};

/// Expected: a fresh signal lets the operation continue
#[test]
fn fresh_signal_is_active() {
    let cancel = CancelSignal::new();

    assert!(!cancel.is_cancelled());
    assert!(cancel.ensure_active("load consents").is_ok());
}

/// Expected: cancelling one clone is observed by every clone
#[test]
fn cancel_is_shared_between_clones() {
    let cancel = CancelSignal::new();
    let observer = cancel.clone();

    cancel.cancel();

    assert!(observer.is_cancelled());
    assert!(matches!(
        observer.ensure_active("load consents"),
        Err(Error::Cancelled(step)) if step == "load consents"
    ));
}
