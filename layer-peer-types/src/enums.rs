//! Boxed types as `enum`s, one variant per constructor.

use crate::types;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputPeer {
    Empty,
    PeerSelf,
    Chat(types::InputPeerChat),
    User(types::InputPeerUser),
    Channel(types::InputPeerChannel),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputUser {
    Empty,
    UserSelf,
    InputUser(types::InputUser),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputChannel {
    Empty,
    InputChannel(types::InputChannel),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Peer {
    User(types::PeerUser),
    Chat(types::PeerChat),
    Channel(types::PeerChannel),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum User {
    Empty(types::UserEmpty),
    User(types::User),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Chat {
    Empty(types::ChatEmpty),
    Chat(types::Chat),
    Forbidden(types::ChatForbidden),
    Channel(types::Channel),
    ChannelForbidden(types::ChannelForbidden),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Message {
    Empty(types::MessageEmpty),
    Message(types::Message),
    Service(types::MessageService),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dialog {
    Dialog(types::Dialog),
    Folder(types::DialogFolder),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatParticipant {
    ChatParticipant(types::ChatParticipant),
    Creator(types::ChatParticipantCreator),
    Admin(types::ChatParticipantAdmin),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatParticipants {
    Forbidden(types::ChatParticipantsForbidden),
    ChatParticipants(types::ChatParticipants),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatFull {
    ChatFull(types::ChatFull),
    ChannelFull(types::ChannelFull),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChannelParticipant {
    ChannelParticipant(types::ChannelParticipant),
    ParticipantSelf(types::ChannelParticipantSelf),
    Creator(types::ChannelParticipantCreator),
    Admin(types::ChannelParticipantAdmin),
    Banned(types::ChannelParticipantBanned),
    Left(types::ChannelParticipantLeft),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputFile {
    InputFile(types::InputFile),
    Big(types::InputFileBig),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputPhoto {
    Empty,
    InputPhoto(types::InputPhoto),
}

#[derive(Clone, Debug, PartialEq)]
pub enum InputChatPhoto {
    Empty,
    UploadedPhoto(types::InputChatUploadedPhoto),
    InputChatPhoto(types::InputChatPhoto),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Updates {
    TooLong,
    Updates(types::Updates),
}

pub mod messages {
    use crate::types;

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Dialogs {
        Dialogs(types::messages::Dialogs),
        Slice(types::messages::DialogsSlice),
        NotModified(types::messages::DialogsNotModified),
    }

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Chats {
        Chats(types::messages::Chats),
        Slice(types::messages::ChatsSlice),
    }

    impl From<types::messages::Dialogs> for Dialogs {
        fn from(x: types::messages::Dialogs) -> Self { Self::Dialogs(x) }
    }

    impl From<types::messages::DialogsSlice> for Dialogs {
        fn from(x: types::messages::DialogsSlice) -> Self { Self::Slice(x) }
    }

    impl From<types::messages::DialogsNotModified> for Dialogs {
        fn from(x: types::messages::DialogsNotModified) -> Self { Self::NotModified(x) }
    }

    impl From<types::messages::Chats> for Chats {
        fn from(x: types::messages::Chats) -> Self { Self::Chats(x) }
    }

    impl From<types::messages::ChatsSlice> for Chats {
        fn from(x: types::messages::ChatsSlice) -> Self { Self::Slice(x) }
    }

    impl Chats {
        pub fn into_chats(self) -> Vec<super::Chat> {
            match self {
                Self::Chats(c) => c.chats,
                Self::Slice(c) => c.chats,
            }
        }
    }
}

// ─── Accessors ────────────────────────────────────────────────────────────────

impl User {
    pub fn id(&self) -> i64 {
        match self {
            Self::Empty(u) => u.id,
            Self::User(u)  => u.id,
        }
    }
}

impl Chat {
    pub fn id(&self) -> i64 {
        match self {
            Self::Empty(c)            => c.id,
            Self::Chat(c)             => c.id,
            Self::Forbidden(c)        => c.id,
            Self::Channel(c)          => c.id,
            Self::ChannelForbidden(c) => c.id,
        }
    }
}

impl Message {
    pub fn id(&self) -> i32 {
        match self {
            Self::Empty(m)   => m.id,
            Self::Message(m) => m.id,
            Self::Service(m) => m.id,
        }
    }

    /// Send date; `None` for `messageEmpty`, which carries no date.
    pub fn date(&self) -> Option<i32> {
        match self {
            Self::Empty(_)   => None,
            Self::Message(m) => Some(m.date),
            Self::Service(m) => Some(m.date),
        }
    }
}

impl Dialog {
    pub fn peer(&self) -> &Peer {
        match self {
            Self::Dialog(d) => &d.peer,
            Self::Folder(d) => &d.peer,
        }
    }

    pub fn top_message(&self) -> i32 {
        match self {
            Self::Dialog(d) => d.top_message,
            Self::Folder(d) => d.top_message,
        }
    }
}

// ─── From<types::T> for enums::E ─────────────────────────────────────────────

macro_rules! impl_from_type {
    ($( $ty:ty => $enum:ident :: $variant:ident ),* $(,)?) => {
        $(
            impl From<$ty> for $enum {
                fn from(x: $ty) -> Self { Self::$variant(x) }
            }
        )*
    };
}

impl_from_type! {
    types::InputPeerChat              => InputPeer::Chat,
    types::InputPeerUser              => InputPeer::User,
    types::InputPeerChannel           => InputPeer::Channel,
    types::InputUser                  => InputUser::InputUser,
    types::InputChannel               => InputChannel::InputChannel,
    types::PeerUser                   => Peer::User,
    types::PeerChat                   => Peer::Chat,
    types::PeerChannel                => Peer::Channel,
    types::UserEmpty                  => User::Empty,
    types::User                       => User::User,
    types::ChatEmpty                  => Chat::Empty,
    types::Chat                       => Chat::Chat,
    types::ChatForbidden              => Chat::Forbidden,
    types::Channel                    => Chat::Channel,
    types::ChannelForbidden           => Chat::ChannelForbidden,
    types::MessageEmpty               => Message::Empty,
    types::Message                    => Message::Message,
    types::MessageService             => Message::Service,
    types::Dialog                     => Dialog::Dialog,
    types::DialogFolder               => Dialog::Folder,
    types::ChatParticipant            => ChatParticipant::ChatParticipant,
    types::ChatParticipantCreator     => ChatParticipant::Creator,
    types::ChatParticipantAdmin       => ChatParticipant::Admin,
    types::ChatParticipantsForbidden  => ChatParticipants::Forbidden,
    types::ChatParticipants           => ChatParticipants::ChatParticipants,
    types::ChatFull                   => ChatFull::ChatFull,
    types::ChannelFull                => ChatFull::ChannelFull,
    types::ChannelParticipant         => ChannelParticipant::ChannelParticipant,
    types::ChannelParticipantSelf     => ChannelParticipant::ParticipantSelf,
    types::ChannelParticipantCreator  => ChannelParticipant::Creator,
    types::ChannelParticipantAdmin    => ChannelParticipant::Admin,
    types::ChannelParticipantBanned   => ChannelParticipant::Banned,
    types::ChannelParticipantLeft     => ChannelParticipant::Left,
    types::InputFile                  => InputFile::InputFile,
    types::InputFileBig               => InputFile::Big,
    types::InputPhoto                 => InputPhoto::InputPhoto,
    types::InputChatUploadedPhoto     => InputChatPhoto::UploadedPhoto,
    types::InputChatPhoto             => InputChatPhoto::InputChatPhoto,
    types::Updates                    => Updates::Updates,
}
