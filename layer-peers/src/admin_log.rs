//! Filters for a channel's admin log.

use layer_peer_types as tl;

/// Which kinds of admin-log events to fetch. Everything is off by default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChatEventFilter {
    /// Members restricted, unrestricted, banned or unbanned.
    pub new_restrictions: bool,
    /// Members promoted or demoted.
    pub admin_rights:     bool,
    /// Members joining, on their own or invited.
    pub new_members:      bool,
    /// Description, linked chat, location, photo, sticker set, title or
    /// username changed.
    pub chat_info:        bool,
    /// Invites, hidden history, signatures or default permissions changed.
    pub chat_settings:    bool,
    pub invite_links:     bool,
    pub deleted_messages: bool,
    /// Includes closed polls.
    pub edited_messages:  bool,
    pub pinned_messages:  bool,
    pub leaving_members:  bool,
    pub voice_chats:      bool,
}

impl ChatEventFilter {
    /// A filter that lets every event through.
    pub fn all() -> Self {
        Self {
            new_restrictions: true,
            admin_rights:     true,
            new_members:      true,
            chat_info:        true,
            chat_settings:    true,
            invite_links:     true,
            deleted_messages: true,
            edited_messages:  true,
            pinned_messages:  true,
            leaving_members:  true,
            voice_chats:      true,
        }
    }

    pub fn to_raw(&self) -> tl::types::ChannelAdminLogEventsFilter {
        tl::types::ChannelAdminLogEventsFilter {
            join:       self.new_members,
            leave:      self.leaving_members,
            invite:     self.new_members,
            ban:        self.new_restrictions,
            unban:      self.new_restrictions,
            kick:       self.new_restrictions,
            unkick:     self.new_restrictions,
            promote:    self.admin_rights,
            demote:     self.admin_rights,
            info:       self.chat_info,
            settings:   self.chat_settings,
            pinned:     self.pinned_messages,
            edit:       self.edited_messages,
            delete:     self.deleted_messages,
            group_call: self.voice_chats,
            invites:    self.invite_links,
        }
    }
}

impl From<ChatEventFilter> for tl::types::ChannelAdminLogEventsFilter {
    fn from(f: ChatEventFilter) -> Self { f.to_raw() }
}
