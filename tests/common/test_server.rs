use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::{Record, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// Test DNS server on 127.0.0.1, UDP and TCP each on an ephemeral port.
pub struct TestServer {
    udp_addr: SocketAddr,
    tcp_addr: SocketAddr,
    received: Arc<Mutex<Vec<RecordType>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

struct Zone {
    answers: HashMap<RecordType, Vec<Record>>,
    silent_for: Option<RecordType>,
}

impl TestServer {
    pub async fn start() -> Result<Self, std::io::Error> {
        TestServerBuilder::new().build().await
    }

    pub fn udp_addr(&self) -> SocketAddr {
        self.udp_addr
    }

    pub fn tcp_addr(&self) -> SocketAddr {
        self.tcp_addr
    }

    /// Query types received so far, in arrival order
    pub fn received(&self) -> Vec<RecordType> {
        self.received.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub struct TestServerBuilder {
    answers: HashMap<RecordType, Vec<Record>>,
    silent_for: Option<RecordType>,
}

impl TestServerBuilder {
    pub fn new() -> Self {
        Self {
            answers: HashMap::new(),
            silent_for: None,
        }
    }

    pub fn with_records(mut self, records: Vec<Record>) -> Self {
        for record in records {
            self.answers
                .entry(record.record_type())
                .or_default()
                .push(record);
        }
        self
    }

    /// Answer `rtype` queries with `records`, whatever their own types
    pub fn with_answer(mut self, rtype: RecordType, records: Vec<Record>) -> Self {
        self.answers.insert(rtype, records);
        self
    }

    /// Never reply to queries of this type
    pub fn silent_for(mut self, rtype: RecordType) -> Self {
        self.silent_for = Some(rtype);
        self
    }

    pub async fn build(self) -> Result<TestServer, std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let udp_addr = socket.local_addr()?;
        let tcp_addr = listener.local_addr()?;

        let zone = Arc::new(Zone {
            answers: self.answers,
            silent_for: self.silent_for,
        });
        let received = Arc::new(Mutex::new(Vec::new()));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let log = Arc::clone(&received);
        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if let Some(reply) = answer(&zone, &log, &buf[..len]) {
                                let _ = socket.send_to(&reply, peer).await;
                            }
                        }
                    }
                    result = listener.accept() => {
                        if let Ok((mut stream, _)) = result {
                            let zone = Arc::clone(&zone);
                            let log = Arc::clone(&log);
                            tokio::spawn(async move {
                                let mut len_buf = [0u8; 2];
                                if stream.read_exact(&mut len_buf).await.is_err() {
                                    return;
                                }
                                let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                                if stream.read_exact(&mut query).await.is_err() {
                                    return;
                                }
                                if let Some(reply) = answer(&zone, &log, &query) {
                                    let _ = stream.write_all(&(reply.len() as u16).to_be_bytes()).await;
                                    let _ = stream.write_all(&reply).await;
                                }
                            });
                        }
                    }
                }
            }
        });

        Ok(TestServer {
            udp_addr,
            tcp_addr,
            received,
            shutdown_tx: Some(shutdown_tx),
        })
    }
}

fn answer(zone: &Zone, log: &Mutex<Vec<RecordType>>, query: &[u8]) -> Option<Vec<u8>> {
    let request = Message::from_vec(query).ok()?;
    let question = request.queries().first()?.clone();
    let qtype = question.query_type();

    if let Ok(mut log) = log.lock() {
        log.push(qtype);
    }

    if zone.silent_for == Some(qtype) {
        return None;
    }

    let mut response = Message::new(request.id(), MessageType::Response, OpCode::Query);
    response.set_recursion_desired(true);
    response.set_recursion_available(true);
    response.set_response_code(ResponseCode::NoError);
    response.add_query(question);
    for record in zone.answers.get(&qtype).into_iter().flatten() {
        response.add_answer(record.clone());
    }

    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    response.emit(&mut encoder).ok()?;
    Some(buf)
}
