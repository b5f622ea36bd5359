//! Alert feed integration tests

use uuid::Uuid;

use crop_advisory_backend::services::AlertStore;
use shared::models::AlertSeverity;

#[test]
fn seeded_feed_has_expected_mix() {
    let store = AlertStore::seeded();
    let all = store.list(None).unwrap();
    assert_eq!(all.len(), 4);

    let high = store.list(Some(AlertSeverity::High)).unwrap();
    let medium = store.list(Some(AlertSeverity::Medium)).unwrap();
    let low = store.list(Some(AlertSeverity::Low)).unwrap();
    assert_eq!(high.len(), 1);
    assert_eq!(medium.len(), 2);
    assert_eq!(low.len(), 1);
    assert_eq!(high.len() + medium.len() + low.len(), all.len());
}

#[test]
fn feed_is_newest_first() {
    let store = AlertStore::seeded();
    let alerts = store.list(None).unwrap();
    for pair in alerts.windows(2) {
        assert!(pair[0].timestamp >= pair[1].timestamp);
    }
}

#[test]
fn resolving_removes_from_every_view() {
    let store = AlertStore::seeded();
    let target = store.list(Some(AlertSeverity::High)).unwrap()[0].clone();

    store.resolve(target.id).unwrap();

    assert!(store.list(Some(AlertSeverity::High)).unwrap().is_empty());
    assert!(store
        .list(None)
        .unwrap()
        .iter()
        .all(|a| a.id != target.id));
}

#[test]
fn resolving_unknown_alert_is_not_found() {
    let store = AlertStore::seeded();
    assert!(store.resolve(Uuid::new_v4()).is_err());
    // The feed is untouched by the failed resolve
    assert_eq!(store.list(None).unwrap().len(), 4);
}
