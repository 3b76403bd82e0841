#![allow(dead_code)]

use std::future::Future;
use std::sync::{Arc, Mutex};

use pokedex_client::{ClientConfig, PokeApiClient, PokeApiError, RawResponse, Result, Transport};

pub const PIKACHU: &str = include_str!("../fixtures/pikachu.json");
pub const POKEMON_LIST: &str = include_str!("../fixtures/pokemon_list.json");

#[derive(Debug, Clone)]
pub enum Reply {
    Respond(u16, String),
    NetworkDown,
}

/// Answers every GET with the same scripted reply and remembers the targets.
#[derive(Debug, Clone)]
pub struct StubTransport {
    reply: Reply,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubTransport {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for StubTransport {
    fn get(&self, url: &str) -> impl Future<Output = Result<RawResponse>> + Send {
        self.requests.lock().unwrap().push(url.to_string());
        let reply = self.reply.clone();
        async move {
            match reply {
                Reply::Respond(status, body) => Ok(RawResponse { status, body }),
                Reply::NetworkDown => Err(network_error()),
            }
        }
    }
}

/// A real `reqwest::Error`, produced without touching the network.
pub fn network_error() -> PokeApiError {
    let err = reqwest::Client::new()
        .get("http://[::1")
        .build()
        .unwrap_err();
    PokeApiError::from(err)
}

pub fn client(reply: Reply) -> (PokeApiClient<StubTransport>, StubTransport) {
    let transport = StubTransport::new(reply);
    let client = PokeApiClient::with_transport(transport.clone(), ClientConfig::default());
    (client, transport)
}

pub fn ok(body: &str) -> Reply {
    Reply::Respond(200, body.to_string())
}

/// The pikachu fixture with edits applied to its decoded form.
pub fn pikachu_with(edit: impl FnOnce(&mut serde_json::Value)) -> String {
    let mut value: serde_json::Value = serde_json::from_str(PIKACHU).unwrap();
    edit(&mut value);
    value.to_string()
}

/// Log lines written by `tracing` while a test runs.
#[derive(Debug, Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Route events on the current thread into the returned buffer until the
    /// guard is dropped.
    pub fn install() -> (Self, tracing::subscriber::DefaultGuard) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (logs, guard)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    pub fn error_lines(&self) -> Vec<String> {
        self.contents()
            .lines()
            .filter(|line| line.contains("ERROR"))
            .map(str::to_string)
            .collect()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
