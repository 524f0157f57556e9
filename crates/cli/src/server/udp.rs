use anyhow::Context;
use hoard_dns_application::ports::{QueryResolver, Resolution, SnapshotStore};
use hoard_dns_domain::Config;
use hoard_dns_infrastructure::dns::ForwardingResolver;
use hoard_dns_infrastructure::persistence::FileSnapshotStore;
use tokio::net::UdpSocket;
use tracing::{debug, info, warn};

/// Classic DNS-over-UDP message ceiling; queries never legitimately exceed it.
const MAX_DATAGRAM: usize = 512;

/// The blocking request/response loop.
///
/// Strictly sequential: one query is fully resolved, replied to and persisted
/// before the next datagram is read. A slow upstream therefore stalls every
/// client for up to the query timeout; that serialization is also what lets
/// the cache go entirely unlocked.
pub async fn run(
    config: &Config,
    mut resolver: ForwardingResolver,
    store: FileSnapshotStore,
) -> anyhow::Result<()> {
    let bind = format!("{}:{}", config.server.bind_address, config.server.dns_port);
    let socket = UdpSocket::bind(&bind)
        .await
        .with_context(|| format!("failed to bind UDP listener on {bind}"))?;

    info!(bind = %bind, "DNS forwarder listening");

    let mut buf = [0u8; MAX_DATAGRAM];
    loop {
        let (len, peer) = tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Ctrl-C received; persisting cache and shutting down");
                break;
            }
            received = socket.recv_from(&mut buf) => match received {
                Ok(received) => received,
                Err(e) => {
                    warn!(error = %e, "Failed to read datagram");
                    continue;
                }
            },
        };

        let datagram = &buf[..len];

        if let Some(command) = control_command(datagram) {
            info!(command, client = %peer, "Control datagram received; persisting cache and shutting down");
            break;
        }

        match resolver.resolve(datagram).await {
            Resolution::Answered { bytes, cache_hit } => {
                match socket.send_to(&bytes, peer).await {
                    Ok(sent) => debug!(client = %peer, cache_hit, bytes = sent, "Reply sent"),
                    Err(e) => warn!(client = %peer, error = %e, "Failed to send reply"),
                }
                persist(&resolver, &store);
            }
            Resolution::NoResponse => {
                debug!(client = %peer, "Query dropped without a reply");
            }
        }
    }

    persist(&resolver, &store);

    let metrics = resolver.cache_metrics();
    info!(
        hits = metrics.hits,
        misses = metrics.misses,
        entries = resolver.cache_len(),
        "Shutdown complete"
    );
    Ok(())
}

/// The plaintext `exit` / `disable` datagrams flush the cache and stop the
/// server.
fn control_command(datagram: &[u8]) -> Option<&'static str> {
    let text = std::str::from_utf8(datagram).ok()?;
    match text.trim() {
        "exit" => Some("exit"),
        "disable" => Some("disable"),
        _ => None,
    }
}

fn persist(resolver: &ForwardingResolver, store: &FileSnapshotStore) {
    if let Err(e) = store.save(&resolver.snapshot()) {
        warn!(error = %e, "Failed to persist cache snapshot");
    }
}
