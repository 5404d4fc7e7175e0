//! Chat member lookup.
//!
//! Provides [`Client::get_chat_member`], which works for both basic groups and
//! channels/supergroups, and the [`MemberParser`] that turns the raw
//! participant objects Telegram returns into [`ChatMember`]s.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use layer_peer_types as tl;

use crate::resolve::{PeerIdentifier, PeerResolver};
use crate::transport::Transport;
use crate::{Client, InvocationError, PeerReference};

// ─── ChatMember ───────────────────────────────────────────────────────────────

/// The role of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParticipantStatus {
    /// The group or channel creator.
    Creator,
    /// Admin (may have a custom title).
    Administrator,
    /// Regular member.
    Member,
    /// Still in the chat, but some rights were taken away.
    Restricted,
    /// Left the chat.
    Left,
    /// Not allowed to view messages.
    Banned,
}

/// One member of a basic group, supergroup or channel.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMember {
    /// The member, when it is a user.
    pub user:          Option<tl::types::User>,
    /// The member, when a channel participant is itself a chat or channel.
    pub chat:          Option<tl::enums::Chat>,
    pub status:        ParticipantStatus,
    /// Unix timestamp of when the member joined.
    pub joined_date:   Option<i32>,
    pub invited_by:    Option<tl::types::User>,
    pub promoted_by:   Option<tl::types::User>,
    pub restricted_by: Option<tl::types::User>,
    /// Admin rank shown next to the name.
    pub custom_title:  Option<String>,
    /// Unix timestamp at which the restriction lifts; `0` means never.
    pub until_date:    Option<i32>,
    pub is_member:     bool,
    /// Whether the logged-in account may edit this admin's rights.
    pub can_be_edited: bool,
    pub admin_rights:  Option<tl::types::ChatAdminRights>,
    pub banned_rights: Option<tl::types::ChatBannedRights>,
}

impl ChatMember {
    fn new(user: Option<tl::types::User>, status: ParticipantStatus) -> Self {
        Self {
            user,
            chat:          None,
            status,
            joined_date:   None,
            invited_by:    None,
            promoted_by:   None,
            restricted_by: None,
            custom_title:  None,
            until_date:    None,
            is_member:     !matches!(status, ParticipantStatus::Left | ParticipantStatus::Banned),
            can_be_edited: false,
            admin_rights:  None,
            banned_rights: None,
        }
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|u| u.id)
    }

    /// Whether this member is the logged-in account.
    pub fn is_self(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_self)
    }

    pub fn joined_at(&self) -> Option<DateTime<Utc>> {
        self.joined_date.and_then(|d| DateTime::from_timestamp(i64::from(d), 0))
    }
}

// ─── MemberParser ─────────────────────────────────────────────────────────────

/// A participant exactly as Telegram returned it.
#[derive(Debug, Clone, Copy)]
pub enum RawParticipant<'a> {
    Chat(&'a tl::enums::ChatParticipant),
    Channel(&'a tl::enums::ChannelParticipant),
}

/// Users of one response, by id.
pub type UserTable = HashMap<i64, tl::types::User>;
/// Chats and channels of one response, by bare id.
pub type ChatTable = HashMap<i64, tl::enums::Chat>;

pub trait MemberParser: Send + Sync {
    fn parse(&self, raw: RawParticipant<'_>, users: &UserTable, chats: &ChatTable) -> ChatMember;
}

/// Builds [`ChatMember`]s field by field from the participant constructor.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMemberParser;

impl MemberParser for DefaultMemberParser {
    fn parse(&self, raw: RawParticipant<'_>, users: &UserTable, chats: &ChatTable) -> ChatMember {
        match raw {
            RawParticipant::Chat(p)    => parse_chat_participant(p, users),
            RawParticipant::Channel(p) => parse_channel_participant(p, users, chats),
        }
    }
}

fn lookup_user(users: &UserTable, id: i64) -> tl::types::User {
    match users.get(&id) {
        Some(u) => u.clone(),
        None => {
            log::warn!("[layer] participant user {id} missing from response");
            tl::types::User { id, ..Default::default() }
        }
    }
}

fn parse_chat_participant(p: &tl::enums::ChatParticipant, users: &UserTable) -> ChatMember {
    use tl::enums::ChatParticipant as P;
    match p {
        P::ChatParticipant(x) => ChatMember {
            joined_date: Some(x.date),
            invited_by:  Some(lookup_user(users, x.inviter_id)),
            ..ChatMember::new(Some(lookup_user(users, x.user_id)), ParticipantStatus::Member)
        },
        P::Creator(x) => ChatMember::new(Some(lookup_user(users, x.user_id)), ParticipantStatus::Creator),
        P::Admin(x) => ChatMember {
            joined_date: Some(x.date),
            invited_by:  Some(lookup_user(users, x.inviter_id)),
            ..ChatMember::new(Some(lookup_user(users, x.user_id)), ParticipantStatus::Administrator)
        },
    }
}

fn parse_channel_participant(
    p:     &tl::enums::ChannelParticipant,
    users: &UserTable,
    chats: &ChatTable,
) -> ChatMember {
    use tl::enums::ChannelParticipant as P;
    match p {
        P::ChannelParticipant(x) => ChatMember {
            joined_date: Some(x.date),
            ..ChatMember::new(Some(lookup_user(users, x.user_id)), ParticipantStatus::Member)
        },
        P::ParticipantSelf(x) => ChatMember {
            joined_date: Some(x.date),
            invited_by:  Some(lookup_user(users, x.inviter_id)),
            ..ChatMember::new(Some(lookup_user(users, x.user_id)), ParticipantStatus::Member)
        },
        P::Creator(x) => ChatMember {
            custom_title: x.rank.clone(),
            admin_rights: Some(x.admin_rights.clone()),
            ..ChatMember::new(Some(lookup_user(users, x.user_id)), ParticipantStatus::Creator)
        },
        P::Admin(x) => ChatMember {
            joined_date:   Some(x.date),
            invited_by:    x.inviter_id.map(|id| lookup_user(users, id)),
            promoted_by:   Some(lookup_user(users, x.promoted_by)),
            custom_title:  x.rank.clone(),
            can_be_edited: x.can_edit,
            admin_rights:  Some(x.admin_rights.clone()),
            ..ChatMember::new(Some(lookup_user(users, x.user_id)), ParticipantStatus::Administrator)
        },
        P::Banned(x) => {
            let status = if x.banned_rights.view_messages {
                ParticipantStatus::Banned
            } else {
                ParticipantStatus::Restricted
            };
            let (user, chat) = member_peer(&x.peer, users, chats);
            ChatMember {
                chat,
                joined_date:   Some(x.date),
                restricted_by: Some(lookup_user(users, x.kicked_by)),
                until_date:    Some(x.banned_rights.until_date),
                is_member:     !x.left,
                banned_rights: Some(x.banned_rights.clone()),
                ..ChatMember::new(user, status)
            }
        }
        P::Left(x) => {
            let (user, chat) = member_peer(&x.peer, users, chats);
            ChatMember { chat, ..ChatMember::new(user, ParticipantStatus::Left) }
        }
    }
}

fn member_peer(
    peer:  &tl::enums::Peer,
    users: &UserTable,
    chats: &ChatTable,
) -> (Option<tl::types::User>, Option<tl::enums::Chat>) {
    match peer {
        tl::enums::Peer::User(u)    => (Some(lookup_user(users, u.user_id)), None),
        tl::enums::Peer::Chat(c)    => (None, chats.get(&c.chat_id).cloned()),
        tl::enums::Peer::Channel(c) => (None, chats.get(&c.channel_id).cloned()),
    }
}

fn user_table(users: &[tl::enums::User]) -> UserTable {
    users.iter()
        .filter_map(|u| match u { tl::enums::User::User(u) => Some((u.id, u.clone())), _ => None })
        .collect()
}

fn chat_table(chats: &[tl::enums::Chat]) -> ChatTable {
    chats.iter().map(|c| (c.id(), c.clone())).collect()
}

// ─── Client methods ───────────────────────────────────────────────────────────

impl<T: Transport> Client<T> {
    /// Fetch one member of a basic group, supergroup or channel.
    ///
    /// Basic groups are answered from `messages.getFullChat`, scanning the
    /// participant list in order; a user who is not in it yields
    /// [`InvocationError::NotParticipant`]. Channels and supergroups make a
    /// single `channels.getParticipant` call.
    ///
    /// Use `"me"` (or [`PeerReference::SelfMarker`]) for the logged-in account.
    pub async fn get_chat_member(
        &self,
        chat: impl Into<PeerIdentifier>,
        user: impl Into<PeerIdentifier>,
    ) -> Result<ChatMember, InvocationError> {
        let chat = self.resolve_peer(chat.into()).await?;
        if let PeerReference::Chat { id } = chat {
            let user = self.resolve_peer(user.into()).await?;
            return self.get_basic_group_member(id as i64, user).await;
        }
        let Some(channel) = chat.to_input_channel() else {
            return Err(InvocationError::InvalidArgument(format!(
                "get_chat_member: {chat} is not a group or channel"
            )));
        };
        let user = self.resolve_peer(user.into()).await?;
        self.get_channel_member(channel, user).await
    }

    async fn get_basic_group_member(
        &self,
        chat_id: i64,
        user:    PeerReference,
    ) -> Result<ChatMember, InvocationError> {
        let full = self.invoke(&tl::functions::messages::GetFullChat { chat_id }).await?;
        self.cache_entities(&full.users, &full.chats).await;

        let participants: &[tl::enums::ChatParticipant] = match &full.full_chat {
            tl::enums::ChatFull::ChatFull(cf) => match &cf.participants {
                tl::enums::ChatParticipants::ChatParticipants(p) => &p.participants,
                tl::enums::ChatParticipants::Forbidden(_)        => &[],
            },
            tl::enums::ChatFull::ChannelFull(_) => &[],
        };

        let users  = user_table(&full.users);
        let chats  = ChatTable::new();
        let parser = &self.inner.config.member_parser;
        for p in participants {
            let member = parser.parse(RawParticipant::Chat(p), &users, &chats);
            let found = match user {
                PeerReference::SelfMarker     => member.is_self(),
                PeerReference::User { id, .. } => member.user_id() == Some(id as i64),
                _ => false,
            };
            if found {
                return Ok(member);
            }
        }

        log::debug!("[layer] {user} not among {} members of chat {chat_id}", participants.len());
        Err(InvocationError::NotParticipant)
    }

    async fn get_channel_member(
        &self,
        channel: tl::enums::InputChannel,
        user:    PeerReference,
    ) -> Result<ChatMember, InvocationError> {
        let req = tl::functions::channels::GetParticipant {
            channel,
            participant: user.to_input_peer(),
        };
        let resp = self.invoke(&req).await?;
        self.cache_entities(&resp.users, &resp.chats).await;

        let users = user_table(&resp.users);
        let chats = chat_table(&resp.chats);
        Ok(self.inner.config.member_parser.parse(RawParticipant::Channel(&resp.participant), &users, &chats))
    }
}
