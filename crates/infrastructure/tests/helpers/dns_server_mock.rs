#![allow(dead_code)]
use super::messages::{identity_response, nsid_response};
use hickory_proto::op::Message;
use hickory_proto::rr::DNSClass;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// What the mock answers to a query arriving from a given client source port.
#[derive(Debug, Clone)]
pub enum ServerBehavior {
    /// Never reply.
    Silent,
    Nsid(Vec<u8>),
    /// NSID (optional) plus CH TXT identity answers, one per entry.
    Identity {
        nsid: Option<Vec<u8>>,
        identities: Vec<String>,
    },
    /// Reply with bytes that do not decode as a DNS message.
    Garbage,
    /// Well-formed reply carrying the wrong transaction ID.
    WrongId,
}

/// Loopback UDP server that plays a different backend per client source port.
pub struct MockNsidServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockNsidServer {
    /// Ports missing from `behaviors` get `fallback`.
    pub async fn start(
        behaviors: HashMap<u16, ServerBehavior>,
        fallback: ServerBehavior,
    ) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let behaviors = Arc::new(behaviors);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            let behavior = behaviors.get(&peer.port()).unwrap_or(&fallback);
                            if let Some(response) = Self::respond(&buf[..len], behavior) {
                                let _ = socket.send_to(&response, peer).await;
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

    fn respond(query: &[u8], behavior: &ServerBehavior) -> Option<Vec<u8>> {
        let query = Message::from_vec(query).ok()?;

        let response = match behavior {
            ServerBehavior::Silent => return None,
            ServerBehavior::Garbage => return Some(vec![0xde, 0xad, 0xbe, 0xef]),
            ServerBehavior::Nsid(nsid) => nsid_response(&query, Some(nsid.as_slice())),
            ServerBehavior::WrongId => {
                let mut response = nsid_response(&query, Some(b"liar".as_slice()));
                response.set_id(query.id().wrapping_add(1));
                response
            }
            ServerBehavior::Identity { nsid, identities } => {
                let answers: Vec<Vec<&str>> =
                    identities.iter().map(|i| vec![i.as_str()]).collect();
                let answers: Vec<&[&str]> = answers.iter().map(Vec::as_slice).collect();
                identity_response(&query, nsid.as_deref(), DNSClass::CH, &answers)
            }
        };

        response.to_vec().ok()
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockNsidServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
