//! Telegram API types, functions and enums for peer handling.
//!
//! This crate carries the part of the Telegram schema that peer resolution,
//! membership lookup, dialog paging and chat photo updates touch, laid out the
//! same way a generated TL crate is:
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`types`]     | Concrete constructors (bare types) as `struct`s            |
//! | [`functions`] | RPC functions as `struct`s implementing [`RemoteCall`]     |
//! | [`enums`]     | Boxed types as `enum`s                                     |
//!
//! Wire encoding of functions is left to the transport. What this crate fixes
//! is the typed exchange: every function converts into a [`Request`], and its
//! result is recovered from a [`Response`].
//!
//! ```rust
//! use layer_peer_types::{functions, Request};
//!
//! let req = functions::messages::GetFullChat { chat_id: 42 };
//! let request: Request = req.into();
//! assert_eq!(request.name(), "messages.getFullChat");
//! ```

#![deny(unsafe_code)]
#![allow(clippy::large_enum_variant)]

pub mod deserialize;
pub mod enums;
pub mod functions;
pub mod serialize;
pub mod types;

pub use deserialize::{Cursor, Deserializable};
pub use serialize::Serializable;

// ─── Core traits ──────────────────────────────────────────────────────────────

/// Marks a function type that can be sent to Telegram as an RPC call.
///
/// `Return` is the type Telegram will respond with. A [`Response`] holding a
/// different result hands itself back as the conversion error.
pub trait RemoteCall: Into<Request> + Clone {
    /// The response type.
    type Return: TryFrom<Response, Error = Response>;
}

// ─── Request ──────────────────────────────────────────────────────────────────

/// Every function this crate knows how to send.
#[derive(Clone, Debug, PartialEq)]
pub enum Request {
    GetFullChat(functions::messages::GetFullChat),
    EditChatPhoto(functions::messages::EditChatPhoto),
    GetDialogs(functions::messages::GetDialogs),
    GetPinnedDialogs(functions::messages::GetPinnedDialogs),
    GetParticipant(functions::channels::GetParticipant),
    EditPhoto(functions::channels::EditPhoto),
    GetChannels(functions::channels::GetChannels),
    GetUsers(functions::users::GetUsers),
    ResolveUsername(functions::contacts::ResolveUsername),
    ResolvePhone(functions::contacts::ResolvePhone),
    SaveFilePart(functions::upload::SaveFilePart),
    SaveBigFilePart(functions::upload::SaveBigFilePart),
}

impl Request {
    /// The TL name of the function, e.g. `"channels.getParticipant"`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::GetFullChat(_)      => "messages.getFullChat",
            Self::EditChatPhoto(_)    => "messages.editChatPhoto",
            Self::GetDialogs(_)       => "messages.getDialogs",
            Self::GetPinnedDialogs(_) => "messages.getPinnedDialogs",
            Self::GetParticipant(_)   => "channels.getParticipant",
            Self::EditPhoto(_)        => "channels.editPhoto",
            Self::GetChannels(_)      => "channels.getChannels",
            Self::GetUsers(_)         => "users.getUsers",
            Self::ResolveUsername(_)  => "contacts.resolveUsername",
            Self::ResolvePhone(_)     => "contacts.resolvePhone",
            Self::SaveFilePart(_)     => "upload.saveFilePart",
            Self::SaveBigFilePart(_)  => "upload.saveBigFilePart",
        }
    }
}

// ─── Response ─────────────────────────────────────────────────────────────────

/// Every result type a [`Request`] can produce.
#[derive(Clone, Debug, PartialEq)]
pub enum Response {
    ChatFull(types::messages::ChatFull),
    ChannelParticipant(types::channels::ChannelParticipant),
    Dialogs(enums::messages::Dialogs),
    PeerDialogs(types::messages::PeerDialogs),
    Chats(enums::messages::Chats),
    Users(Vec<enums::User>),
    ResolvedPeer(types::contacts::ResolvedPeer),
    Updates(enums::Updates),
    Bool(bool),
}

impl Response {
    /// The TL name of the result type, for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ChatFull(_)           => "messages.ChatFull",
            Self::ChannelParticipant(_) => "channels.ChannelParticipant",
            Self::Dialogs(_)            => "messages.Dialogs",
            Self::PeerDialogs(_)        => "messages.PeerDialogs",
            Self::Chats(_)              => "messages.Chats",
            Self::Users(_)              => "Vector<User>",
            Self::ResolvedPeer(_)       => "contacts.ResolvedPeer",
            Self::Updates(_)            => "Updates",
            Self::Bool(_)               => "Bool",
        }
    }
}

macro_rules! response_variant {
    ($( $ty:ty => $variant:ident ),* $(,)?) => {
        $(
            impl From<$ty> for Response {
                fn from(x: $ty) -> Self { Self::$variant(x) }
            }

            impl TryFrom<Response> for $ty {
                type Error = Response;
                fn try_from(r: Response) -> Result<Self, Response> {
                    match r {
                        Response::$variant(x) => Ok(x),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

response_variant! {
    types::messages::ChatFull           => ChatFull,
    types::channels::ChannelParticipant => ChannelParticipant,
    enums::messages::Dialogs            => Dialogs,
    types::messages::PeerDialogs        => PeerDialogs,
    enums::messages::Chats              => Chats,
    Vec<enums::User>                    => Users,
    types::contacts::ResolvedPeer       => ResolvedPeer,
    enums::Updates                      => Updates,
    bool                                => Bool,
}

macro_rules! remote_call {
    ($( $func:ty => $variant:ident -> $ret:ty ),* $(,)?) => {
        $(
            impl From<$func> for Request {
                fn from(f: $func) -> Self { Self::$variant(f) }
            }

            impl RemoteCall for $func {
                type Return = $ret;
            }
        )*
    };
}

remote_call! {
    functions::messages::GetFullChat      => GetFullChat      -> types::messages::ChatFull,
    functions::messages::EditChatPhoto    => EditChatPhoto    -> enums::Updates,
    functions::messages::GetDialogs       => GetDialogs       -> enums::messages::Dialogs,
    functions::messages::GetPinnedDialogs => GetPinnedDialogs -> types::messages::PeerDialogs,
    functions::channels::GetParticipant   => GetParticipant   -> types::channels::ChannelParticipant,
    functions::channels::EditPhoto        => EditPhoto        -> enums::Updates,
    functions::channels::GetChannels      => GetChannels      -> enums::messages::Chats,
    functions::users::GetUsers            => GetUsers         -> Vec<enums::User>,
    functions::contacts::ResolveUsername  => ResolveUsername  -> types::contacts::ResolvedPeer,
    functions::contacts::ResolvePhone     => ResolvePhone     -> types::contacts::ResolvedPeer,
    functions::upload::SaveFilePart       => SaveFilePart     -> bool,
    functions::upload::SaveBigFilePart    => SaveBigFilePart  -> bool,
}
