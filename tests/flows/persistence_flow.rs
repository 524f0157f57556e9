//! Cache persistence across a simulated restart:
//! resolve -> snapshot to disk -> reload -> serve from cache alone.

#[path = "../common/mod.rs"]
mod common;

use common::{wire_query, MockUpstream};
use hickory_proto::rr::RecordType;
use hoard_dns_application::ports::{QueryResolver, Resolution, SnapshotStore};
use hoard_dns_infrastructure::dns::transport::UdpTransport;
use hoard_dns_infrastructure::dns::{ForwardingResolver, RecordCache};
use hoard_dns_infrastructure::persistence::FileSnapshotStore;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn populated_cache_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.json");

    let upstream = MockUpstream::start(600, [203, 0, 113, 7]).await.unwrap();

    // First life: resolve once and persist, the way the server loop does
    // after every answered query.
    {
        let mut resolver = ForwardingResolver::new(
            RecordCache::new(),
            Arc::new(UdpTransport::new(upstream.addr())),
            Duration::from_secs(5),
        );
        let outcome = resolver
            .resolve(&wire_query(70, "example.com.", RecordType::A))
            .await;
        assert!(outcome.is_answered());

        let store = FileSnapshotStore::new(&path);
        store.save(&resolver.snapshot()).unwrap();
    }

    // The upstream dies with the first process.
    upstream.shutdown();

    // Second life: loaded from disk, answering without any upstream at all.
    let store = FileSnapshotStore::new(&path);
    let cache = RecordCache::from_snapshot(store.load().unwrap());
    assert_eq!(cache.len(), 1);

    let mut resolver = ForwardingResolver::new(
        cache,
        Arc::new(UdpTransport::new(upstream_gone())),
        Duration::from_millis(200),
    );

    match resolver
        .resolve(&wire_query(71, "example.com.", RecordType::A))
        .await
    {
        Resolution::Answered { cache_hit, .. } => assert!(cache_hit),
        Resolution::NoResponse => panic!("restarted cache should answer"),
    }
}

#[tokio::test]
async fn restart_with_no_snapshot_starts_empty_and_still_works() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSnapshotStore::new(dir.path().join("never-written.json"));

    let snapshot = store.load().unwrap();
    assert!(snapshot.is_empty());

    let upstream = MockUpstream::start(60, [198, 51, 100, 9]).await.unwrap();
    let mut resolver = ForwardingResolver::new(
        RecordCache::from_snapshot(snapshot),
        Arc::new(UdpTransport::new(upstream.addr())),
        Duration::from_secs(5),
    );

    let outcome = resolver
        .resolve(&wire_query(5, "fresh.example.", RecordType::A))
        .await;
    assert!(outcome.is_answered());
    assert_eq!(resolver.cache_len(), 1);

    upstream.shutdown();
}

/// An address nothing listens on; forwarding there can only time out.
fn upstream_gone() -> std::net::SocketAddr {
    ([127, 0, 0, 1], 59_999).into()
}
