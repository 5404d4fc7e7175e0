mod support;

use layer_peer_types::{Request, Response, enums, functions, types};
use layer_peers::{InvocationError, ParticipantStatus, PeerReference, RpcError};
use support::{MemTransport, client, user};

const GROUP: PeerReference = PeerReference::Chat { id: 7 };
const SUPERGROUP: PeerReference = PeerReference::Channel { id: 5, access_hash: Some(99) };

fn member(id: i64) -> PeerReference {
    PeerReference::User { id: id as u64, access_hash: Some(1) }
}

fn full_chat(participants: Vec<enums::ChatParticipant>, users: Vec<types::User>) -> Response {
    Response::ChatFull(types::messages::ChatFull {
        full_chat: types::ChatFull {
            id:           7,
            about:        String::new(),
            participants: types::ChatParticipants { chat_id: 7, participants, version: 1 }.into(),
        }
        .into(),
        chats: vec![],
        users: users.into_iter().map(Into::into).collect(),
    })
}

fn plain(user_id: i64) -> enums::ChatParticipant {
    types::ChatParticipant { user_id, inviter_id: 1, date: 1_600_000_000 }.into()
}

fn admin(user_id: i64) -> enums::ChatParticipant {
    types::ChatParticipantAdmin { user_id, inviter_id: 1, date: 1_600_000_001 }.into()
}

fn group_of_three() -> MemTransport {
    MemTransport::new(|_| {
        Ok(full_chat(
            vec![types::ChatParticipantCreator { user_id: 1 }.into(), admin(2), plain(3)],
            vec![user(1, 11), user(2, 22), types::User { is_self: true, ..user(3, 33) }],
        ))
    })
}

fn channel_participant(p: enums::ChannelParticipant) -> MemTransport {
    MemTransport::new(move |_| {
        Ok(Response::ChannelParticipant(types::channels::ChannelParticipant {
            participant: p.clone(),
            chats:       vec![],
            users:       vec![user(2, 22).into(), user(4, 44).into()],
        }))
    })
}

// ── basic groups ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn basic_group_member_found_with_one_call() {
    let client = client(group_of_three());
    let m = client.get_chat_member(GROUP, member(2)).await.unwrap();

    assert_eq!(m.user_id(), Some(2));
    assert_eq!(m.status, ParticipantStatus::Administrator);
    assert_eq!(m.joined_date, Some(1_600_000_001));
    assert_eq!(m.invited_by.as_ref().map(|u| u.id), Some(1));
    assert!(m.is_member);
    assert_eq!(
        client.transport().sent(),
        vec![Request::GetFullChat(functions::messages::GetFullChat { chat_id: 7 })],
    );
}

#[tokio::test]
async fn basic_group_first_match_wins() {
    let client = client(MemTransport::new(|_| {
        Ok(full_chat(vec![plain(2), admin(2)], vec![user(2, 22)]))
    }));
    let m = client.get_chat_member(GROUP, member(2)).await.unwrap();
    assert_eq!(m.status, ParticipantStatus::Member);
}

#[tokio::test]
async fn basic_group_self_matches_on_self_flag() {
    let client = client(group_of_three());
    let m = client.get_chat_member(GROUP, PeerReference::SelfMarker).await.unwrap();
    assert_eq!(m.user_id(), Some(3));
    assert!(m.is_self());

    let m = client.get_chat_member(GROUP, "me").await.unwrap();
    assert_eq!(m.user_id(), Some(3));
}

#[tokio::test]
async fn basic_group_miss_is_not_participant() {
    let client = client(group_of_three());
    let err = client.get_chat_member(GROUP, member(9)).await.unwrap_err();
    assert!(matches!(err, InvocationError::NotParticipant));
    assert!(err.is_not_participant());
    assert_eq!(client.transport().names(), vec!["messages.getFullChat"]);
}

#[tokio::test]
async fn basic_group_without_participant_list_is_not_participant() {
    let client = client(MemTransport::new(|_| {
        Ok(Response::ChatFull(types::messages::ChatFull {
            full_chat: types::ChatFull {
                id:           7,
                about:        String::new(),
                participants: types::ChatParticipantsForbidden { chat_id: 7, self_participant: None }.into(),
            }
            .into(),
            chats: vec![],
            users: vec![],
        }))
    }));
    let err = client.get_chat_member(GROUP, member(2)).await.unwrap_err();
    assert!(matches!(err, InvocationError::NotParticipant));
}

#[tokio::test]
async fn participant_missing_from_user_table_still_parses() {
    let client = client(MemTransport::new(|_| Ok(full_chat(vec![plain(2)], vec![]))));
    let m = client.get_chat_member(GROUP, member(2)).await.unwrap();
    let u = m.user.unwrap();
    assert_eq!(u.id, 2);
    assert_eq!(u.first_name, None);
}

#[tokio::test]
async fn joined_at_is_utc_timestamp() {
    let client = client(group_of_three());
    let m = client.get_chat_member(GROUP, member(2)).await.unwrap();
    assert_eq!(m.joined_at().unwrap().timestamp(), 1_600_000_001);
}

// ── channels ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn channel_member_makes_a_single_get_participant() {
    let client = client(channel_participant(
        types::ChannelParticipantAdmin {
            can_edit:     true,
            is_self:      false,
            user_id:      2,
            inviter_id:   None,
            promoted_by:  4,
            date:         1_650_000_000,
            admin_rights: types::ChatAdminRights { ban_users: true, ..Default::default() },
            rank:         Some("mod".into()),
        }
        .into(),
    ));
    let m = client.get_chat_member(SUPERGROUP, member(2)).await.unwrap();

    assert_eq!(m.status, ParticipantStatus::Administrator);
    assert_eq!(m.custom_title.as_deref(), Some("mod"));
    assert_eq!(m.promoted_by.map(|u| u.id), Some(4));
    assert!(m.can_be_edited);
    assert!(m.admin_rights.unwrap().ban_users);

    assert_eq!(
        client.transport().sent(),
        vec![Request::GetParticipant(functions::channels::GetParticipant {
            channel:     types::InputChannel { channel_id: 5, access_hash: 99 }.into(),
            participant: types::InputPeerUser { user_id: 2, access_hash: 1 }.into(),
        })],
    );
}

#[tokio::test]
async fn channel_without_known_hash_is_sent_with_zero_hash() {
    let client = client(channel_participant(
        types::ChannelParticipant { user_id: 2, date: 3 }.into(),
    ));
    let chat = PeerReference::Channel { id: 5, access_hash: None };
    client.get_chat_member(chat, member(2)).await.unwrap();

    let Request::GetParticipant(req) = &client.transport().sent()[0] else { panic!() };
    assert_eq!(req.channel, types::InputChannel { channel_id: 5, access_hash: 0 }.into());
}

#[tokio::test]
async fn channel_self_is_sent_as_peer_self() {
    let client = client(channel_participant(
        types::ChannelParticipantSelf { via_request: false, user_id: 2, inviter_id: 4, date: 5 }.into(),
    ));
    let m = client.get_chat_member(SUPERGROUP, PeerReference::SelfMarker).await.unwrap();
    assert_eq!(m.status, ParticipantStatus::Member);

    let Request::GetParticipant(req) = &client.transport().sent()[0] else { panic!() };
    assert_eq!(req.participant, enums::InputPeer::PeerSelf);
}

#[tokio::test]
async fn banned_without_view_rights_is_banned() {
    let client = client(channel_participant(
        types::ChannelParticipantBanned {
            left:          true,
            peer:          types::PeerUser { user_id: 2 }.into(),
            kicked_by:     4,
            date:          10,
            banned_rights: types::ChatBannedRights { view_messages: true, until_date: 0, ..Default::default() },
        }
        .into(),
    ));
    let m = client.get_chat_member(SUPERGROUP, member(2)).await.unwrap();
    assert_eq!(m.status, ParticipantStatus::Banned);
    assert_eq!(m.restricted_by.map(|u| u.id), Some(4));
    assert!(!m.is_member);
}

#[tokio::test]
async fn banned_with_view_rights_is_restricted() {
    let client = client(channel_participant(
        types::ChannelParticipantBanned {
            left:          false,
            peer:          types::PeerUser { user_id: 2 }.into(),
            kicked_by:     4,
            date:          10,
            banned_rights: types::ChatBannedRights { send_media: true, until_date: 99, ..Default::default() },
        }
        .into(),
    ));
    let m = client.get_chat_member(SUPERGROUP, member(2)).await.unwrap();
    assert_eq!(m.status, ParticipantStatus::Restricted);
    assert_eq!(m.until_date, Some(99));
    assert!(m.is_member);
}

#[tokio::test]
async fn channel_errors_pass_through_unchanged() {
    let client = client(MemTransport::new(|_| {
        Err(RpcError::from_telegram(400, "USER_NOT_PARTICIPANT").into())
    }));
    let err = client.get_chat_member(SUPERGROUP, member(2)).await.unwrap_err();
    assert!(matches!(&err, InvocationError::Rpc(e) if e.name == "USER_NOT_PARTICIPANT"));
    assert!(err.is_not_participant());
}

// ── wrong kind ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn user_as_chat_is_rejected_before_any_call() {
    let client = client(MemTransport::silent());
    let err = client.get_chat_member(member(2), member(3)).await.unwrap_err();
    assert!(matches!(err, InvocationError::InvalidArgument(_)));
    assert!(client.transport().sent().is_empty());

    let err = client.get_chat_member(PeerReference::SelfMarker, member(3)).await.unwrap_err();
    assert!(matches!(err, InvocationError::InvalidArgument(_)));
}
