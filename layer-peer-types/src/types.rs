//! Concrete constructors (bare types) as `struct`s.
//!
//! Field names follow the TL schema; `flags` words are not modelled, optional
//! parameters are `Option`s and `true` flags are `bool`s.

use crate::enums;

// ─── Input peers ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputPeerUser {
    pub user_id:     i64,
    pub access_hash: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputPeerChat {
    pub chat_id: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputPeerChannel {
    pub channel_id:  i64,
    pub access_hash: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputUser {
    pub user_id:     i64,
    pub access_hash: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputChannel {
    pub channel_id:  i64,
    pub access_hash: i64,
}

// ─── Peers ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PeerUser {
    pub user_id: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PeerChat {
    pub chat_id: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PeerChannel {
    pub channel_id: i64,
}

// ─── Users and chats ──────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct User {
    /// Set on the user object that describes the logged-in account.
    pub is_self:     bool,
    pub contact:     bool,
    pub bot:         bool,
    pub deleted:     bool,
    pub min:         bool,
    pub id:          i64,
    pub access_hash: Option<i64>,
    pub first_name:  Option<String>,
    pub last_name:   Option<String>,
    pub username:    Option<String>,
    pub phone:       Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserEmpty {
    pub id: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatEmpty {
    pub id: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Chat {
    pub creator:            bool,
    pub left:               bool,
    pub deactivated:        bool,
    pub id:                 i64,
    pub title:              String,
    pub participants_count: i32,
    pub date:               i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatForbidden {
    pub id:    i64,
    pub title: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Channel {
    pub creator:     bool,
    pub left:        bool,
    pub broadcast:   bool,
    pub megagroup:   bool,
    pub min:         bool,
    pub id:          i64,
    pub access_hash: Option<i64>,
    pub title:       String,
    pub username:    Option<String>,
    pub date:        i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelForbidden {
    pub broadcast:   bool,
    pub megagroup:   bool,
    pub id:          i64,
    pub access_hash: i64,
    pub title:       String,
    pub until_date:  Option<i32>,
}

// ─── Messages and dialogs ─────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub out:     bool,
    pub id:      i32,
    pub peer_id: enums::Peer,
    pub date:    i32,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageService {
    pub out:     bool,
    pub id:      i32,
    pub peer_id: enums::Peer,
    pub date:    i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEmpty {
    pub id:      i32,
    pub peer_id: Option<enums::Peer>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dialog {
    pub pinned:       bool,
    pub peer:         enums::Peer,
    pub top_message:  i32,
    pub unread_count: i32,
    pub folder_id:    Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogFolder {
    pub pinned:      bool,
    pub folder_id:   i32,
    pub peer:        enums::Peer,
    pub top_message: i32,
}

// ─── Basic group participants ─────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatParticipant {
    pub user_id:    i64,
    pub inviter_id: i64,
    pub date:       i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatParticipantCreator {
    pub user_id: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatParticipantAdmin {
    pub user_id:    i64,
    pub inviter_id: i64,
    pub date:       i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatParticipants {
    pub chat_id:      i64,
    pub participants: Vec<enums::ChatParticipant>,
    pub version:      i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatParticipantsForbidden {
    pub chat_id:          i64,
    pub self_participant: Option<enums::ChatParticipant>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatFull {
    pub id:           i64,
    pub about:        String,
    pub participants: enums::ChatParticipants,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelFull {
    pub id:                 i64,
    pub about:              String,
    pub participants_count: Option<i32>,
}

// ─── Channel participants ─────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatAdminRights {
    pub change_info:     bool,
    pub post_messages:   bool,
    pub edit_messages:   bool,
    pub delete_messages: bool,
    pub ban_users:       bool,
    pub invite_users:    bool,
    pub pin_messages:    bool,
    pub add_admins:      bool,
    pub anonymous:       bool,
    pub manage_call:     bool,
    pub other:           bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatBannedRights {
    pub view_messages: bool,
    pub send_messages: bool,
    pub send_media:    bool,
    pub send_stickers: bool,
    pub send_gifs:     bool,
    pub send_games:    bool,
    pub send_inline:   bool,
    pub embed_links:   bool,
    pub send_polls:    bool,
    pub change_info:   bool,
    pub invite_users:  bool,
    pub pin_messages:  bool,
    pub until_date:    i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelParticipant {
    pub user_id: i64,
    pub date:    i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelParticipantSelf {
    pub via_request: bool,
    pub user_id:     i64,
    pub inviter_id:  i64,
    pub date:        i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelParticipantCreator {
    pub user_id:      i64,
    pub admin_rights: ChatAdminRights,
    pub rank:         Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelParticipantAdmin {
    pub can_edit:     bool,
    pub is_self:      bool,
    pub user_id:      i64,
    pub inviter_id:   Option<i64>,
    pub promoted_by:  i64,
    pub date:         i32,
    pub admin_rights: ChatAdminRights,
    pub rank:         Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelParticipantBanned {
    pub left:          bool,
    pub peer:          enums::Peer,
    pub kicked_by:     i64,
    pub date:          i32,
    pub banned_rights: ChatBannedRights,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelParticipantLeft {
    pub peer: enums::Peer,
}

// ─── Files and photos ─────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputFile {
    pub id:           i64,
    pub parts:        i32,
    pub name:         String,
    pub md5_checksum: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputFileBig {
    pub id:    i64,
    pub parts: i32,
    pub name:  String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputPhoto {
    pub id:             i64,
    pub access_hash:    i64,
    pub file_reference: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputChatUploadedPhoto {
    pub file:           Option<enums::InputFile>,
    pub video:          Option<enums::InputFile>,
    pub video_start_ts: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputChatPhoto {
    pub id: enums::InputPhoto,
}

// ─── Admin log ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChannelAdminLogEventsFilter {
    pub join:       bool,
    pub leave:      bool,
    pub invite:     bool,
    pub ban:        bool,
    pub unban:      bool,
    pub kick:       bool,
    pub unkick:     bool,
    pub promote:    bool,
    pub demote:     bool,
    pub info:       bool,
    pub settings:   bool,
    pub pinned:     bool,
    pub edit:       bool,
    pub delete:     bool,
    pub group_call: bool,
    pub invites:    bool,
}

// ─── Updates ──────────────────────────────────────────────────────────────────

/// `updates` constructor. Individual update objects are not modelled; only the
/// entities carried alongside them are.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Updates {
    pub users: Vec<enums::User>,
    pub chats: Vec<enums::Chat>,
    pub date:  i32,
    pub seq:   i32,
}

// ─── Namespaced result types ──────────────────────────────────────────────────

pub mod messages {
    use crate::enums;

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct ChatFull {
        pub full_chat: enums::ChatFull,
        pub chats:     Vec<enums::Chat>,
        pub users:     Vec<enums::User>,
    }

    #[derive(Clone, Debug, Default, PartialEq, Eq)]
    pub struct Dialogs {
        pub dialogs:  Vec<enums::Dialog>,
        pub messages: Vec<enums::Message>,
        pub chats:    Vec<enums::Chat>,
        pub users:    Vec<enums::User>,
    }

    #[derive(Clone, Debug, Default, PartialEq, Eq)]
    pub struct DialogsSlice {
        pub count:    i32,
        pub dialogs:  Vec<enums::Dialog>,
        pub messages: Vec<enums::Message>,
        pub chats:    Vec<enums::Chat>,
        pub users:    Vec<enums::User>,
    }

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct DialogsNotModified {
        pub count: i32,
    }

    #[derive(Clone, Debug, Default, PartialEq, Eq)]
    pub struct PeerDialogs {
        pub dialogs:  Vec<enums::Dialog>,
        pub messages: Vec<enums::Message>,
        pub chats:    Vec<enums::Chat>,
        pub users:    Vec<enums::User>,
    }

    #[derive(Clone, Debug, Default, PartialEq, Eq)]
    pub struct Chats {
        pub chats: Vec<enums::Chat>,
    }

    #[derive(Clone, Debug, Default, PartialEq, Eq)]
    pub struct ChatsSlice {
        pub count: i32,
        pub chats: Vec<enums::Chat>,
    }
}

pub mod channels {
    use crate::enums;

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct ChannelParticipant {
        pub participant: enums::ChannelParticipant,
        pub chats:       Vec<enums::Chat>,
        pub users:       Vec<enums::User>,
    }
}

pub mod contacts {
    use crate::enums;

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct ResolvedPeer {
        pub peer:  enums::Peer,
        pub chats: Vec<enums::Chat>,
        pub users: Vec<enums::User>,
    }
}
