//! In-memory transport and object builders shared by the integration tests.

#![allow(dead_code)]

use std::future::Future;
use std::sync::Mutex;

use layer_peer_types::{Request, Response, enums, types};
use layer_peers::{Client, Config, InvocationError, Transport};

type Responder = Box<dyn Fn(&Request) -> Result<Response, InvocationError> + Send + Sync>;

/// Records every request and answers it with a fixed function.
pub struct MemTransport {
    sent:      Mutex<Vec<Request>>,
    responder: Responder,
}

impl MemTransport {
    pub fn new(
        responder: impl Fn(&Request) -> Result<Response, InvocationError> + Send + Sync + 'static,
    ) -> Self {
        Self { sent: Mutex::new(Vec::new()), responder: Box::new(responder) }
    }

    /// A transport for tests that must not touch the network at all.
    pub fn silent() -> Self {
        Self::new(|req| panic!("unexpected request {}", req.name()))
    }

    pub fn sent(&self) -> Vec<Request> {
        self.sent.lock().unwrap().clone()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.sent.lock().unwrap().iter().map(Request::name).collect()
    }
}

impl Transport for MemTransport {
    fn send(&self, request: Request) -> impl Future<Output = Result<Response, InvocationError>> + Send {
        let result = (self.responder)(&request);
        self.sent.lock().unwrap().push(request);
        async move { result }
    }
}

pub fn client(transport: MemTransport) -> Client<MemTransport> {
    Client::new(transport, Config::default())
}

// ── builders ──────────────────────────────────────────────────────────────────

pub fn user(id: i64, access_hash: i64) -> types::User {
    types::User { id, access_hash: Some(access_hash), first_name: Some(format!("user{id}")), ..Default::default() }
}

pub fn channel(id: i64, access_hash: i64) -> types::Channel {
    types::Channel { id, access_hash: Some(access_hash), megagroup: true, title: format!("channel{id}"), ..Default::default() }
}

pub fn message(id: i32, date: i32) -> enums::Message {
    types::Message {
        out:     false,
        id,
        peer_id: types::PeerUser { user_id: 1 }.into(),
        date,
        message: String::new(),
    }
    .into()
}

pub fn empty_message(id: i32) -> enums::Message {
    types::MessageEmpty { id, peer_id: None }.into()
}

pub fn dialog(peer: enums::Peer, top_message: i32) -> enums::Dialog {
    types::Dialog { pinned: false, peer, top_message, unread_count: 0, folder_id: None }.into()
}

pub fn updates() -> Response {
    Response::Updates(enums::Updates::Updates(types::Updates::default()))
}
