use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

fn counting(hub: &UnauthorizedHub) -> (Arc<AtomicUsize>, UnauthorizedSubscription) {
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_cb = hits.clone();
    let sub = hub.subscribe(move || {
        hits_cb.fetch_add(1, Ordering::SeqCst);
    });
    (hits, sub)
}

#[test]
fn notify_runs_every_subscriber() {
    let hub = UnauthorizedHub::new();
    let (a, _sa) = counting(&hub);
    let (b, _sb) = counting(&hub);

    hub.notify();
    hub.notify();

    assert_eq!(a.load(Ordering::SeqCst), 2);
    assert_eq!(b.load(Ordering::SeqCst), 2);
}

#[test]
fn dropping_handle_deregisters() {
    let hub = UnauthorizedHub::new();
    let (hits, sub) = counting(&hub);
    assert_eq!(hub.len(), 1);

    drop(sub);
    hub.notify();

    assert!(hub.is_empty());
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[test]
fn clones_share_one_registry() {
    let hub = UnauthorizedHub::new();
    let (hits, _sub) = counting(&hub.clone());

    hub.clone().notify();

    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn handle_outliving_hub_drops_cleanly() {
    let hub = UnauthorizedHub::new();
    let (_hits, sub) = counting(&hub);
    drop(hub);
    drop(sub);
}

#[test]
fn callback_may_subscribe_during_notify() {
    let hub = UnauthorizedHub::new();
    let inner_hub = hub.clone();
    let late = Arc::new(Mutex::new(Vec::new()));
    let late_cb = late.clone();
    let _sub = hub.subscribe(move || {
        let handle = inner_hub.subscribe(|| {});
        late_cb.lock().unwrap().push(handle);
    });

    hub.notify();

    assert_eq!(hub.len(), 2);
}
