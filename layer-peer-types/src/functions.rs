//! RPC functions as `struct`s implementing [`RemoteCall`](crate::RemoteCall).

pub mod messages {
    use crate::enums;

    /// `messages.getFullChat`: full info about a basic group.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct GetFullChat {
        pub chat_id: i64,
    }

    /// `messages.editChatPhoto`: change the photo of a basic group.
    #[derive(Clone, Debug, PartialEq)]
    pub struct EditChatPhoto {
        pub chat_id: i64,
        pub photo:   enums::InputChatPhoto,
    }

    /// `messages.getDialogs`
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct GetDialogs {
        pub exclude_pinned: bool,
        pub folder_id:      Option<i32>,
        pub offset_date:    i32,
        pub offset_id:      i32,
        pub offset_peer:    enums::InputPeer,
        pub limit:          i32,
        pub hash:           i64,
    }

    /// `messages.getPinnedDialogs`
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct GetPinnedDialogs {
        pub folder_id: i32,
    }
}

pub mod channels {
    use crate::enums;

    /// `channels.getParticipant`: membership of one peer in a channel or supergroup.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct GetParticipant {
        pub channel:     enums::InputChannel,
        pub participant: enums::InputPeer,
    }

    /// `channels.editPhoto`
    #[derive(Clone, Debug, PartialEq)]
    pub struct EditPhoto {
        pub channel: enums::InputChannel,
        pub photo:   enums::InputChatPhoto,
    }

    /// `channels.getChannels`
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct GetChannels {
        pub id: Vec<enums::InputChannel>,
    }
}

pub mod users {
    use crate::enums;

    /// `users.getUsers`
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct GetUsers {
        pub id: Vec<enums::InputUser>,
    }
}

pub mod contacts {
    /// `contacts.resolveUsername`
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct ResolveUsername {
        pub username: String,
    }

    /// `contacts.resolvePhone`
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct ResolvePhone {
        pub phone: String,
    }
}

pub mod upload {
    /// `upload.saveFilePart`: one part of a file below the big-file threshold.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct SaveFilePart {
        pub file_id:   i64,
        pub file_part: i32,
        pub bytes:     Vec<u8>,
    }

    /// `upload.saveBigFilePart`
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct SaveBigFilePart {
        pub file_id:          i64,
        pub file_part:        i32,
        pub file_total_parts: i32,
        pub bytes:            Vec<u8>,
    }
}
