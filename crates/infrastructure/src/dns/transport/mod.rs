pub mod udp;

pub use hoard_dns_application::ports::{DnsTransport, TransportResponse};
pub use udp::UdpTransport;
