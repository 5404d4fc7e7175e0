//! Compact peer ids and typed peer references.
//!
//! Applications address peers with a single signed integer:
//!
//! | Compact id            | Peer                                   |
//! |-----------------------|----------------------------------------|
//! | `n > 0`               | user `n`                               |
//! | `-100<digits>`        | channel / supergroup `<digits>`        |
//! | any other `n <= 0`    | basic group `-n`                       |
//!
//! Telegram itself only understands typed references, each with its own id
//! field and (for users and channels) an access hash. [`decode`] and
//! [`PeerReference::compact_id`] convert between the two. Access hashes are
//! never part of the compact form.
//!
//! Everything here is integer arithmetic; no id is ever formatted to a string
//! to test or strip the channel prefix.

use std::fmt;

use layer_peer_types as tl;

/// The leading decimal digits that mark a channel in the compact form.
const CHANNEL_PREFIX: u64 = 100;
const CHANNEL_PREFIX_DIGITS: u32 = 3;

// ─── PeerKind ─────────────────────────────────────────────────────────────────

/// The kind of peer a compact id denotes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PeerKind {
    User,
    /// A basic group.
    Chat,
    /// A broadcast channel or a supergroup.
    Channel,
}

// ─── PeerReference ────────────────────────────────────────────────────────────

/// A resolved peer, ready to be turned into an input peer for an RPC call.
///
/// `access_hash` is `None` when it is unknown. That is different from a hash
/// that happens to be zero, which Telegram does issue for some peers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PeerReference {
    /// The logged-in account.
    SelfMarker,
    User { id: u64, access_hash: Option<i64> },
    Chat { id: u64 },
    Channel { id: u64, access_hash: Option<i64> },
    /// No peer at all; the valid value for an omitted optional target.
    Empty,
}

impl PeerReference {
    /// The peer kind, or `None` for [`PeerReference::SelfMarker`] and
    /// [`PeerReference::Empty`].
    pub fn kind(&self) -> Option<PeerKind> {
        match self {
            Self::User { .. }    => Some(PeerKind::User),
            Self::Chat { .. }    => Some(PeerKind::Chat),
            Self::Channel { .. } => Some(PeerKind::Channel),
            Self::SelfMarker | Self::Empty => None,
        }
    }

    /// The bare numeric id of the peer.
    pub fn id(&self) -> Option<u64> {
        match self {
            Self::User { id, .. } | Self::Chat { id } | Self::Channel { id, .. } => Some(*id),
            Self::SelfMarker | Self::Empty => None,
        }
    }

    pub fn access_hash(&self) -> Option<i64> {
        match self {
            Self::User { access_hash, .. } | Self::Channel { access_hash, .. } => *access_hash,
            Self::Chat { .. } | Self::SelfMarker | Self::Empty => None,
        }
    }

    /// Encode as a compact id. Access hashes are dropped.
    ///
    /// Returns `None` for [`PeerReference::SelfMarker`] and
    /// [`PeerReference::Empty`], and for ids too large for the signed form.
    /// A basic group whose id itself starts with the channel prefix (`1005`,
    /// `100123`) also has no compact form: `-1005` would read back as
    /// channel `5`.
    pub fn compact_id(&self) -> Option<i64> {
        match *self {
            Self::User { id, .. }    => i64::try_from(id).ok(),
            Self::Chat { id } if strip_channel_prefix(id).is_some() => None,
            Self::Chat { id }        => i64::try_from(id).ok().map(|v| -v),
            Self::Channel { id, .. } => channel_compact_id(id),
            Self::SelfMarker | Self::Empty => None,
        }
    }

    /// Build a reference from a compact id and whatever access hash the caller
    /// has for it.
    ///
    /// A channel-prefixed id only becomes a channel when a hash is supplied;
    /// without one it is taken as a basic group id, as there is no way to
    /// address a channel without its hash.
    pub fn from_compact(compact_id: i64, access_hash: Option<i64>) -> Self {
        match decode(compact_id) {
            (PeerKind::User, id) => Self::User { id, access_hash },
            (PeerKind::Channel, id) if access_hash.is_some() => Self::Channel { id, access_hash },
            (PeerKind::Channel, _) | (PeerKind::Chat, _) => Self::Chat { id: compact_id.unsigned_abs() },
        }
    }

    /// The `InputPeer` to send. An unknown access hash is sent as `0`.
    ///
    /// The wire carries ids as `i64`, and the id is reinterpreted bit for bit:
    /// an id above `i64::MAX` goes out negative. This is the inverse of the
    /// `From<&InputPeer>` conversion, so any id read off the wire is sent back
    /// unchanged. Telegram never issues ids in that range.
    pub fn to_input_peer(&self) -> tl::enums::InputPeer {
        match *self {
            Self::SelfMarker => tl::enums::InputPeer::PeerSelf,
            Self::User { id, access_hash } => tl::enums::InputPeer::User(tl::types::InputPeerUser {
                user_id:     id as i64,
                access_hash: access_hash.unwrap_or(0),
            }),
            Self::Chat { id } => tl::enums::InputPeer::Chat(tl::types::InputPeerChat {
                chat_id: id as i64,
            }),
            Self::Channel { id, access_hash } => tl::enums::InputPeer::Channel(tl::types::InputPeerChannel {
                channel_id:  id as i64,
                access_hash: access_hash.unwrap_or(0),
            }),
            Self::Empty => tl::enums::InputPeer::Empty,
        }
    }

    /// The `InputChannel` form, for channels only. The id is cast as in
    /// [`to_input_peer`](Self::to_input_peer) and an unknown hash is sent as `0`.
    pub fn to_input_channel(&self) -> Option<tl::enums::InputChannel> {
        match *self {
            Self::Channel { id, access_hash } => Some(tl::enums::InputChannel::InputChannel(
                tl::types::InputChannel { channel_id: id as i64, access_hash: access_hash.unwrap_or(0) },
            )),
            _ => None,
        }
    }

    /// The `InputUser` form, for users and the logged-in account only. The id
    /// is cast as in [`to_input_peer`](Self::to_input_peer).
    pub fn to_input_user(&self) -> Option<tl::enums::InputUser> {
        match *self {
            Self::SelfMarker => Some(tl::enums::InputUser::UserSelf),
            Self::User { id, access_hash } => Some(tl::enums::InputUser::InputUser(
                tl::types::InputUser { user_id: id as i64, access_hash: access_hash.unwrap_or(0) },
            )),
            _ => None,
        }
    }
}

impl From<&tl::enums::InputPeer> for PeerReference {
    fn from(peer: &tl::enums::InputPeer) -> Self {
        match peer {
            tl::enums::InputPeer::Empty    => Self::Empty,
            tl::enums::InputPeer::PeerSelf => Self::SelfMarker,
            tl::enums::InputPeer::Chat(c)  => Self::Chat { id: c.chat_id as u64 },
            tl::enums::InputPeer::User(u)  => Self::User {
                id: u.user_id as u64, access_hash: Some(u.access_hash),
            },
            tl::enums::InputPeer::Channel(c) => Self::Channel {
                id: c.channel_id as u64, access_hash: Some(c.access_hash),
            },
        }
    }
}

impl fmt::Display for PeerReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfMarker           => write!(f, "self"),
            Self::User { id, .. }      => write!(f, "user {id}"),
            Self::Chat { id }          => write!(f, "chat {id}"),
            Self::Channel { id, .. }   => write!(f, "channel {id}"),
            Self::Empty                => write!(f, "empty peer"),
        }
    }
}

// ─── Codec ────────────────────────────────────────────────────────────────────

/// Classify a compact id and extract the bare id of the peer.
///
/// Total: every integer maps to exactly one kind. Zero, and any negative
/// value without the channel prefix, is a basic group.
pub fn decode(compact_id: i64) -> (PeerKind, u64) {
    if compact_id > 0 {
        return (PeerKind::User, compact_id as u64);
    }
    let abs = compact_id.unsigned_abs();
    match strip_channel_prefix(abs) {
        Some(id) => (PeerKind::Channel, id),
        None     => (PeerKind::Chat, abs),
    }
}

/// Build a reference from an already classified id.
///
/// Chats carry no access hash, so one passed for a chat is discarded. A
/// channel stays a channel even when `access_hash` is `None`.
pub fn encode(kind: PeerKind, id: u64, access_hash: Option<i64>) -> PeerReference {
    match kind {
        PeerKind::User    => PeerReference::User { id, access_hash },
        PeerKind::Chat    => PeerReference::Chat { id },
        PeerKind::Channel => PeerReference::Channel { id, access_hash },
    }
}

/// The bare channel id inside a compact id, if it denotes a channel.
pub fn channel_id_from_compact(compact_id: i64) -> Option<u64> {
    match decode(compact_id) {
        (PeerKind::Channel, id) => Some(id),
        _ => None,
    }
}

fn digit_count(mut n: u64) -> u32 {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

/// `abs` read as decimal digits `100<rest>` (with at least one digit in
/// `rest`) yields `rest`.
fn strip_channel_prefix(abs: u64) -> Option<u64> {
    let digits = digit_count(abs);
    if digits <= CHANNEL_PREFIX_DIGITS {
        return None;
    }
    let scale = 10u64.pow(digits - CHANNEL_PREFIX_DIGITS);
    (abs / scale == CHANNEL_PREFIX).then_some(abs % scale)
}

fn channel_compact_id(id: u64) -> Option<i64> {
    let scale = 10u64.checked_pow(digit_count(id))?;
    let abs = CHANNEL_PREFIX.checked_mul(scale)?.checked_add(id)?;
    i64::try_from(abs).ok().map(|v| -v)
}
