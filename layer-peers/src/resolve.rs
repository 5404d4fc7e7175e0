//! Turning loosely typed peer identifiers into [`PeerReference`]s.
//!
//! [`Client`] resolves through an in-memory access-hash cache that every
//! response carrying users or chats keeps seeded. Only on a cache miss does
//! it ask Telegram.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;

use layer_peer_types as tl;

use crate::peer_id::{self, PeerKind, PeerReference};
use crate::transport::Transport;
use crate::{Client, InvocationError};

// ─── PeerIdentifier ───────────────────────────────────────────────────────────

/// Anything a caller may use to name a peer.
///
/// Text converts as follows:
/// - `"me"` / `"self"` → [`PeerIdentifier::SelfMarker`]
/// - a negative integer (`"-1001234"`) → [`PeerIdentifier::Id`]
/// - `"+…"` or only digits → [`PeerIdentifier::Phone`] (digits kept)
/// - anything else → [`PeerIdentifier::Username`], with `@`, `t.me/` links and
///   case removed
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PeerIdentifier {
    SelfMarker,
    Id(i64),
    Username(String),
    Phone(String),
    /// Already resolved; resolving it makes no remote call.
    Resolved(PeerReference),
}

impl PeerIdentifier {
    fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.eq_ignore_ascii_case("me") || text.eq_ignore_ascii_case("self") {
            return Self::SelfMarker;
        }
        if text.starts_with('-') {
            if let Ok(id) = text.parse::<i64>() {
                return Self::Id(id);
            }
        }
        let digits = text.strip_prefix('+').unwrap_or(text);
        if digits.chars().any(|c| c.is_ascii_digit())
            && digits.chars().all(|c| c.is_ascii_digit() || c == ' ' || c == '-')
        {
            return Self::Phone(digits.chars().filter(char::is_ascii_digit).collect());
        }

        let mut name = text;
        for scheme in ["https://", "http://"] {
            name = name.strip_prefix(scheme).unwrap_or(name);
        }
        for host in ["t.me/", "telegram.me/", "telegram.dog/"] {
            name = name.strip_prefix(host).unwrap_or(name);
        }
        let name = name.strip_prefix('@').unwrap_or(name);
        Self::Username(name.to_ascii_lowercase())
    }
}

impl From<i64> for PeerIdentifier {
    fn from(id: i64) -> Self { Self::Id(id) }
}

impl From<&str> for PeerIdentifier {
    fn from(s: &str) -> Self { Self::parse(s) }
}

impl From<String> for PeerIdentifier {
    fn from(s: String) -> Self { Self::parse(&s) }
}

impl From<PeerReference> for PeerIdentifier {
    fn from(r: PeerReference) -> Self { Self::Resolved(r) }
}

impl From<&PeerReference> for PeerIdentifier {
    fn from(r: &PeerReference) -> Self { Self::Resolved(*r) }
}

impl fmt::Display for PeerIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfMarker  => write!(f, "self"),
            Self::Id(id)      => write!(f, "{id}"),
            Self::Username(u) => write!(f, "@{u}"),
            Self::Phone(p)    => write!(f, "+{p}"),
            Self::Resolved(r) => write!(f, "{r}"),
        }
    }
}

// ─── PeerResolver ─────────────────────────────────────────────────────────────

/// Maps a [`PeerIdentifier`] to a [`PeerReference`] carrying its access hash.
pub trait PeerResolver: Send + Sync {
    fn resolve_peer(
        &self,
        peer: PeerIdentifier,
    ) -> impl Future<Output = Result<PeerReference, InvocationError>> + Send;
}

// ─── PeerCache ────────────────────────────────────────────────────────────────

/// Access hashes for users and channels, plus username and phone lookups,
/// keyed by compact id.
#[derive(Default)]
pub(crate) struct PeerCache {
    /// user_id → access_hash
    users:     HashMap<i64, i64>,
    /// channel_id → access_hash
    channels:  HashMap<i64, i64>,
    /// lowercase username → compact id
    usernames: HashMap<String, i64>,
    /// phone digits → user_id
    phones:    HashMap<String, i64>,
}

impl PeerCache {
    pub(crate) fn cache_user(&mut self, user: &tl::enums::User) {
        let tl::enums::User::User(u) = user else { return };
        // min constructors carry a hash that is only valid in their original context
        if u.min {
            return;
        }
        if let Some(hash) = u.access_hash {
            self.users.insert(u.id, hash);
        }
        if let Some(name) = &u.username {
            self.usernames.insert(name.to_ascii_lowercase(), u.id);
        }
        if let Some(phone) = &u.phone {
            self.phones.insert(phone.clone(), u.id);
        }
    }

    pub(crate) fn cache_chat(&mut self, chat: &tl::enums::Chat) {
        match chat {
            tl::enums::Chat::Channel(c) if !c.min => {
                if let Some(hash) = c.access_hash {
                    self.channels.insert(c.id, hash);
                }
                if let Some(name) = &c.username {
                    let compact = PeerReference::Channel { id: c.id as u64, access_hash: None }.compact_id();
                    if let Some(compact) = compact {
                        self.usernames.insert(name.to_ascii_lowercase(), compact);
                    }
                }
            }
            tl::enums::Chat::ChannelForbidden(c) => {
                self.channels.insert(c.id, c.access_hash);
            }
            _ => {}
        }
    }

    pub(crate) fn cache_users(&mut self, users: &[tl::enums::User]) {
        for u in users { self.cache_user(u); }
    }

    pub(crate) fn cache_chats(&mut self, chats: &[tl::enums::Chat]) {
        for c in chats { self.cache_chat(c); }
    }

    /// The reference for a compact id, if its hash is known. Basic groups
    /// need no hash and always succeed.
    pub(crate) fn lookup(&self, compact_id: i64) -> Option<PeerReference> {
        let (kind, id) = peer_id::decode(compact_id);
        match kind {
            PeerKind::Chat => Some(PeerReference::Chat { id }),
            PeerKind::User => self.users.get(&(id as i64)).map(|&h| PeerReference::User {
                id, access_hash: Some(h),
            }),
            PeerKind::Channel => self.channels.get(&(id as i64)).map(|&h| PeerReference::Channel {
                id, access_hash: Some(h),
            }),
        }
    }

    pub(crate) fn lookup_peer(&self, peer: &tl::enums::Peer) -> Option<PeerReference> {
        match peer {
            tl::enums::Peer::User(u) => self.users.get(&u.user_id).map(|&h| PeerReference::User {
                id: u.user_id as u64, access_hash: Some(h),
            }),
            tl::enums::Peer::Chat(c) => Some(PeerReference::Chat { id: c.chat_id as u64 }),
            tl::enums::Peer::Channel(c) => self.channels.get(&c.channel_id).map(|&h| PeerReference::Channel {
                id: c.channel_id as u64, access_hash: Some(h),
            }),
        }
    }

    fn lookup_username(&self, username: &str) -> Option<PeerReference> {
        self.usernames.get(username).and_then(|&id| self.lookup(id))
    }

    fn lookup_phone(&self, phone: &str) -> Option<PeerReference> {
        self.phones.get(phone).and_then(|&id| self.lookup(id))
    }

    fn remember_username(&mut self, username: &str, peer: &PeerReference) {
        if let Some(id) = peer.compact_id() {
            self.usernames.insert(username.to_string(), id);
        }
    }
}

// ─── Client as resolver ───────────────────────────────────────────────────────

impl<T: Transport> PeerResolver for Client<T> {
    async fn resolve_peer(&self, peer: PeerIdentifier) -> Result<PeerReference, InvocationError> {
        match peer {
            PeerIdentifier::SelfMarker     => Ok(PeerReference::SelfMarker),
            PeerIdentifier::Resolved(r)    => Ok(r),
            PeerIdentifier::Id(id)         => self.resolve_id(id).await,
            PeerIdentifier::Username(name) => self.resolve_username(&name).await,
            PeerIdentifier::Phone(phone)   => self.resolve_phone(&phone).await,
        }
    }
}

impl<T: Transport> Client<T> {
    /// The cached reference for a compact id, without any remote call.
    pub async fn cached_peer(&self, compact_id: i64) -> Option<PeerReference> {
        self.inner.peer_cache.lock().await.lookup(compact_id)
    }

    async fn resolve_id(&self, compact_id: i64) -> Result<PeerReference, InvocationError> {
        if let Some(r) = self.cached_peer(compact_id).await {
            return Ok(r);
        }

        // Not seen yet: ask with a zero hash, which Telegram accepts for
        // peers the account has interacted with.
        match peer_id::decode(compact_id) {
            (PeerKind::User, id) => {
                log::debug!("[layer] user {id} not cached, fetching");
                let unknown = PeerReference::User { id, access_hash: None };
                let req = tl::functions::users::GetUsers { id: unknown.to_input_user().into_iter().collect() };
                let users = self.invoke(&req).await?;
                self.cache_users(&users).await;
            }
            (PeerKind::Channel, id) => {
                log::debug!("[layer] channel {id} not cached, fetching");
                let unknown = PeerReference::Channel { id, access_hash: None };
                let req = tl::functions::channels::GetChannels { id: unknown.to_input_channel().into_iter().collect() };
                let chats = self.invoke(&req).await?.into_chats();
                self.cache_chats(&chats).await;
            }
            (PeerKind::Chat, id) => return Ok(PeerReference::Chat { id }),
        }

        self.cached_peer(compact_id)
            .await
            .ok_or_else(|| InvocationError::Unresolved(format!("peer id {compact_id} is unknown")))
    }

    async fn resolve_username(&self, username: &str) -> Result<PeerReference, InvocationError> {
        if let Some(r) = self.inner.peer_cache.lock().await.lookup_username(username) {
            return Ok(r);
        }
        let req = tl::functions::contacts::ResolveUsername { username: username.to_string() };
        let resolved = self.invoke(&req).await?;

        let mut cache = self.inner.peer_cache.lock().await;
        cache.cache_users(&resolved.users);
        cache.cache_chats(&resolved.chats);
        let peer = cache.lookup_peer(&resolved.peer)
            .ok_or_else(|| InvocationError::Unresolved(format!("@{username}: no access hash in response")))?;
        cache.remember_username(username, &peer);
        Ok(peer)
    }

    async fn resolve_phone(&self, phone: &str) -> Result<PeerReference, InvocationError> {
        if let Some(r) = self.inner.peer_cache.lock().await.lookup_phone(phone) {
            return Ok(r);
        }
        let req = tl::functions::contacts::ResolvePhone { phone: phone.to_string() };
        let resolved = self.invoke(&req).await?;

        let mut cache = self.inner.peer_cache.lock().await;
        cache.cache_users(&resolved.users);
        cache.cache_chats(&resolved.chats);
        let peer = cache.lookup_peer(&resolved.peer)
            .ok_or_else(|| InvocationError::Unresolved(format!("+{phone}: no access hash in response")))?;
        if let PeerReference::User { id, .. } = peer {
            cache.phones.insert(phone.to_string(), id as i64);
        }
        Ok(peer)
    }
}
