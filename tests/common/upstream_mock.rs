//! Mock upstream DNS server for integration flows.

use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::net::{Ipv4Addr, SocketAddr};
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// Replies to every well-formed query until shut down.
///
/// Answers with one A record for the queried name, or stays silent when
/// constructed with `start_silent` (the forwarder then runs into its
/// timeout).
pub struct MockUpstream {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

#[derive(Clone, Copy)]
enum Behavior {
    Answer { ttl: u32, ip: Ipv4Addr },
    Silent,
}

impl MockUpstream {
    pub async fn start(ttl: u32, ip: [u8; 4]) -> std::io::Result<Self> {
        Self::spawn(Behavior::Answer {
            ttl,
            ip: Ipv4Addr::from(ip),
        })
        .await
    }

    pub async fn start_silent() -> std::io::Result<Self> {
        Self::spawn(Behavior::Silent).await
    }

    async fn spawn(behavior: Behavior) -> std::io::Result<Self> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    received = socket.recv_from(&mut buf) => {
                        let (len, peer) = match received {
                            Ok(received) => received,
                            Err(_) => break,
                        };
                        if let Behavior::Answer { ttl, ip } = behavior {
                            if let Some(reply) = build_reply(&buf[..len], ttl, ip) {
                                let _ = socket.send_to(&reply, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn build_reply(query_bytes: &[u8], ttl: u32, ip: Ipv4Addr) -> Option<Vec<u8>> {
    let query = Message::from_vec(query_bytes).ok()?;
    let question = query.queries().first()?.clone();

    let mut response = Message::new(query.id(), MessageType::Response, OpCode::Query);
    response.set_recursion_desired(query.recursion_desired());
    response.set_recursion_available(true);
    response.set_response_code(ResponseCode::NoError);
    response.add_answer(Record::from_rdata(
        question.name().clone(),
        ttl,
        RData::A(A(ip)),
    ));
    response.add_query(question);

    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    response.emit(&mut encoder).ok()?;
    Some(buf)
}
