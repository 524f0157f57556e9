//! # Hoard DNS
//!
//! A caching DNS forwarder: answers from a TTL-bounded cache when it can,
//! forwards everything else to a single upstream resolver, and persists the
//! cache across restarts.

mod bootstrap;
mod server;

use clap::Parser;
use hoard_dns_domain::CliOverrides;
use hoard_dns_infrastructure::dns::transport::UdpTransport;
use hoard_dns_infrastructure::dns::ForwardingResolver;
use hoard_dns_infrastructure::persistence::FileSnapshotStore;
use std::net::ToSocketAddrs;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "hoard-dns")]
#[command(version)]
#[command(about = "A caching DNS forwarder with a persistent cache")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Bind address
    #[arg(short, long)]
    bind: Option<String>,

    /// DNS listen port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Upstream resolver ("host" or "host:port")
    #[arg(short, long)]
    upstream: Option<String>,

    /// Cache snapshot file
    #[arg(short, long)]
    snapshot_path: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        bind_address: cli.bind,
        dns_port: cli.port,
        upstream: cli.upstream,
        snapshot_path: cli.snapshot_path,
        log_level: cli.log_level,
    };

    let config = bootstrap::config::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::logging::init_logging(&config);

    tracing::info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        bind = %config.server.bind_address,
        dns_port = config.server.dns_port,
        upstream = %config.upstream.address,
        upstream_port = config.upstream.port,
        snapshot = %config.cache.snapshot_path,
        "Configuration loaded"
    );

    let store = FileSnapshotStore::new(&config.cache.snapshot_path);
    let cache = bootstrap::cache::load_cache(&store);

    let upstream = format!("{}:{}", config.upstream.address, config.upstream.port);
    let upstream_addr = upstream
        .to_socket_addrs()
        .map_err(|e| anyhow::anyhow!("cannot resolve upstream '{upstream}': {e}"))?
        .next()
        .ok_or_else(|| anyhow::anyhow!("upstream '{upstream}' resolves to no address"))?;

    let transport = Arc::new(UdpTransport::new(upstream_addr));
    let resolver = ForwardingResolver::new(
        cache,
        transport,
        Duration::from_secs(config.upstream.query_timeout),
    );

    server::udp::run(&config, resolver, store).await
}
