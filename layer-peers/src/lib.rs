//! # layer-peers
//!
//! Peer identity handling for layer clients: the compact peer-id codec,
//! peer resolution against an access-hash cache, chat member lookup, chat
//! photo updates and dialog paging.
//!
//! Everything that talks to Telegram goes through a [`Transport`], so the
//! crate runs the same against a live MTProto connection and an in-memory
//! test double.
//!
//! ```rust,no_run
//! # async fn f<T: layer_peers::Transport>(transport: T) -> Result<(), layer_peers::InvocationError> {
//! use layer_peers::{Client, Config, PeerReference};
//!
//! let client = Client::new(transport, Config::default());
//!
//! let group = PeerReference::from_compact(-1001234567890, Some(0x5eed));
//! let member = client.get_chat_member(group, "@durov").await?;
//! println!("{:?}", member.status);
//! # Ok(()) }
//! ```

#![deny(unsafe_code)]

pub mod admin_log;
pub mod dialogs;
pub mod errors;
pub mod file_id;
pub mod media;
pub mod participants;
pub mod peer_id;
pub mod resolve;
pub mod transport;

use std::sync::Arc;

use layer_peer_types as tl;
use layer_peer_types::{RemoteCall, Response};
use tokio::sync::Mutex;

pub use admin_log::ChatEventFilter;
pub use dialogs::{DialogIter, DialogsPage, compute_offset};
pub use errors::{InvocationError, RpcError};
pub use file_id::{FileId, FileIdError, FileType};
pub use media::{MediaSource, MediaUploader, UploadedFile};
pub use participants::{ChatMember, DefaultMemberParser, MemberParser, ParticipantStatus};
pub use peer_id::{PeerKind, PeerReference};
pub use resolve::{PeerIdentifier, PeerResolver};
pub use transport::Transport;

use resolve::PeerCache;

// ─── Config ───────────────────────────────────────────────────────────────────

/// Configuration for [`Client::new`].
#[derive(Clone)]
pub struct Config {
    /// Size of each uploaded file part, in bytes. Telegram requires a
    /// divisor of 512 KiB that is itself divisible by 1 KiB.
    pub upload_part_size:   usize,
    /// Files at least this large are sent with `upload.saveBigFilePart`.
    pub big_file_threshold: usize,
    /// Turns raw participant payloads into [`ChatMember`]s.
    pub member_parser:      Arc<dyn MemberParser>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upload_part_size:   512 * 1024,
            big_file_threshold: 10 * 1024 * 1024,
            member_parser:      Arc::new(DefaultMemberParser),
        }
    }
}

// ─── Client ───────────────────────────────────────────────────────────────────

struct ClientInner<T> {
    transport:             T,
    pub(crate) peer_cache: Mutex<PeerCache>,
    config:                Config,
}

/// Entry point for every peer operation. Cheap to clone; internally Arc-wrapped.
pub struct Client<T> {
    pub(crate) inner: Arc<ClientInner<T>>,
}

impl<T> Clone for Client<T> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T: Transport> Client<T> {
    pub fn new(transport: T, config: Config) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                transport,
                peer_cache: Mutex::new(PeerCache::default()),
                config,
            }),
        }
    }

    pub fn transport(&self) -> &T {
        &self.inner.transport
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Send a typed request and recover its typed result.
    pub async fn invoke<R: RemoteCall>(&self, req: &R) -> Result<R::Return, InvocationError> {
        let request: tl::Request = req.clone().into();
        let name = request.name();
        log::debug!("[layer] → {name}");

        let response = self.inner.transport.send(request).await?;
        <R::Return as TryFrom<Response>>::try_from(response).map_err(|other| {
            InvocationError::Deserialize(format!("{name}: unexpected {}", other.name()))
        })
    }

    /// Seed the access-hash cache from a list of users.
    pub async fn cache_users(&self, users: &[tl::enums::User]) {
        self.inner.peer_cache.lock().await.cache_users(users);
    }

    /// Seed the access-hash cache from a list of chats.
    pub async fn cache_chats(&self, chats: &[tl::enums::Chat]) {
        self.inner.peer_cache.lock().await.cache_chats(chats);
    }

    pub(crate) async fn cache_entities(&self, users: &[tl::enums::User], chats: &[tl::enums::Chat]) {
        let mut cache = self.inner.peer_cache.lock().await;
        cache.cache_users(users);
        cache.cache_chats(chats);
    }
}

// ─── Helpers ──────────────────────────────────────────────────────────────────

pub(crate) fn random_i64() -> Result<i64, getrandom::Error> {
    let mut b = [0u8; 8];
    getrandom::getrandom(&mut b)?;
    Ok(i64::from_le_bytes(b))
}
