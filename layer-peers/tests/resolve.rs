mod support;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use layer_peer_types::{Request, Response, enums, functions, types};
use layer_peers::{InvocationError, PeerIdentifier, PeerReference, PeerResolver, RpcError};
use support::{MemTransport, channel, client, user};

fn resolved(peer: enums::Peer, users: Vec<types::User>, chats: Vec<types::Channel>) -> Response {
    Response::ResolvedPeer(types::contacts::ResolvedPeer {
        peer,
        users: users.into_iter().map(Into::into).collect(),
        chats: chats.into_iter().map(Into::into).collect(),
    })
}

// ── PeerIdentifier parsing ────────────────────────────────────────────────────

#[test]
fn text_identifiers() {
    assert_eq!(PeerIdentifier::from("me"), PeerIdentifier::SelfMarker);
    assert_eq!(PeerIdentifier::from("Self"), PeerIdentifier::SelfMarker);
    assert_eq!(PeerIdentifier::from("@Durov"), PeerIdentifier::Username("durov".into()));
    assert_eq!(PeerIdentifier::from("https://t.me/durov"), PeerIdentifier::Username("durov".into()));
    assert_eq!(PeerIdentifier::from("+1 555 0100"), PeerIdentifier::Phone("15550100".into()));
    assert_eq!(PeerIdentifier::from("15550100"), PeerIdentifier::Phone("15550100".into()));
    assert_eq!(PeerIdentifier::from("-1001234"), PeerIdentifier::Id(-1001234));
    assert_eq!(PeerIdentifier::from(42i64), PeerIdentifier::Id(42));
}

#[test]
fn phone_needs_at_least_one_digit() {
    assert_eq!(PeerIdentifier::from("-"), PeerIdentifier::Username("-".into()));
    assert_eq!(PeerIdentifier::from(" - - "), PeerIdentifier::Username("- -".into()));
    assert_eq!(PeerIdentifier::from("+"), PeerIdentifier::Username("+".into()));
    assert_eq!(PeerIdentifier::from("+7 - 1"), PeerIdentifier::Phone("71".into()));
}

// ── resolution ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn markers_and_references_need_no_call() {
    let client = client(MemTransport::silent());
    assert_eq!(client.resolve_peer(PeerIdentifier::SelfMarker).await.unwrap(), PeerReference::SelfMarker);

    let r = PeerReference::Channel { id: 1, access_hash: Some(2) };
    assert_eq!(client.resolve_peer(r.into()).await.unwrap(), r);
    assert_eq!(client.resolve_peer((-42i64).into()).await.unwrap(), PeerReference::Chat { id: 42 });
}

#[tokio::test]
async fn username_is_resolved_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let client = client(MemTransport::new(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(resolved(
            types::PeerUser { user_id: 9 }.into(),
            vec![types::User { username: Some("Durov".into()), ..user(9, 77) }],
            vec![],
        ))
    }));

    let expected = PeerReference::User { id: 9, access_hash: Some(77) };
    assert_eq!(client.resolve_peer("@durov".into()).await.unwrap(), expected);
    assert_eq!(client.resolve_peer("durov".into()).await.unwrap(), expected);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        client.transport().sent(),
        vec![Request::ResolveUsername(functions::contacts::ResolveUsername { username: "durov".into() })],
    );
}

#[tokio::test]
async fn channel_username_resolves_to_channel() {
    let client = client(MemTransport::new(|_| {
        Ok(resolved(types::PeerChannel { channel_id: 5 }.into(), vec![], vec![channel(5, 55)]))
    }));
    assert_eq!(
        client.resolve_peer("t.me/somegroup".into()).await.unwrap(),
        PeerReference::Channel { id: 5, access_hash: Some(55) },
    );
}

#[tokio::test]
async fn phone_is_resolved_and_cached() {
    let client = client(MemTransport::new(|_| {
        Ok(resolved(types::PeerUser { user_id: 3 }.into(), vec![user(3, 33)], vec![]))
    }));
    let r = client.resolve_peer("+15550100".into()).await.unwrap();
    assert_eq!(r, PeerReference::User { id: 3, access_hash: Some(33) });
    client.resolve_peer("+15550100".into()).await.unwrap();
    assert_eq!(client.transport().names(), vec!["contacts.resolvePhone"]);
}

#[tokio::test]
async fn unknown_user_id_is_fetched_with_zero_hash() {
    let client = client(MemTransport::new(|_| Ok(Response::Users(vec![user(12, 1212).into()]))));

    let r = client.resolve_peer(12i64.into()).await.unwrap();
    assert_eq!(r, PeerReference::User { id: 12, access_hash: Some(1212) });
    assert_eq!(
        client.transport().sent(),
        vec![Request::GetUsers(functions::users::GetUsers {
            id: vec![types::InputUser { user_id: 12, access_hash: 0 }.into()],
        })],
    );

    // second time from cache
    client.resolve_peer(12i64.into()).await.unwrap();
    assert_eq!(client.transport().sent().len(), 1);
}

#[tokio::test]
async fn unknown_channel_without_result_is_unresolved() {
    let client = client(MemTransport::new(|_| {
        Ok(Response::Chats(types::messages::Chats { chats: vec![] }.into()))
    }));
    let err = client.resolve_peer((-1005i64).into()).await.unwrap_err();
    assert!(matches!(err, InvocationError::Unresolved(_)));
    assert_eq!(client.transport().names(), vec!["channels.getChannels"]);
}

#[tokio::test]
async fn min_users_are_not_cached() {
    let client = client(MemTransport::new(|_| Ok(Response::Users(vec![]))));
    client.cache_users(&[types::User { min: true, ..user(8, 88) }.into()]).await;
    assert_eq!(client.cached_peer(8).await, None);

    client.cache_users(&[user(8, 88).into()]).await;
    assert_eq!(client.cached_peer(8).await, Some(PeerReference::User { id: 8, access_hash: Some(88) }));
}

#[tokio::test]
async fn member_lookup_seeds_the_cache() {
    let client = client(MemTransport::new(|req| match req {
        Request::GetParticipant(_) => Ok(Response::ChannelParticipant(types::channels::ChannelParticipant {
            participant: types::ChannelParticipant { user_id: 2, date: 1 }.into(),
            chats:       vec![channel(5, 55).into()],
            users:       vec![user(2, 22).into()],
        })),
        other => panic!("unexpected {}", other.name()),
    }));

    client
        .get_chat_member(
            PeerReference::Channel { id: 5, access_hash: Some(55) },
            PeerReference::User { id: 2, access_hash: Some(22) },
        )
        .await
        .unwrap();

    assert_eq!(client.resolve_peer(2i64.into()).await.unwrap(), PeerReference::User { id: 2, access_hash: Some(22) });
    assert_eq!(
        client.resolve_peer((-1005i64).into()).await.unwrap(),
        PeerReference::Channel { id: 5, access_hash: Some(55) },
    );
    assert_eq!(client.transport().sent().len(), 1);
}

#[tokio::test]
async fn resolver_errors_are_propagated() {
    let client = client(MemTransport::new(|_| {
        Err(RpcError::from_telegram(400, "USERNAME_NOT_OCCUPIED").into())
    }));
    let err = client.resolve_peer("@nobody".into()).await.unwrap_err();
    assert!(err.is("USERNAME_*"));
}

#[tokio::test]
async fn mismatched_response_is_a_deserialize_error() {
    let client = client(MemTransport::new(|_| Ok(Response::Bool(true))));
    let err = client.resolve_peer("@durov".into()).await.unwrap_err();
    assert!(matches!(err, InvocationError::Deserialize(ref s) if s.contains("contacts.resolveUsername")));
}

// ── errors ────────────────────────────────────────────────────────────────────

#[test]
fn rpc_error_splits_numeric_suffix() {
    let e = RpcError::from_telegram(420, "FLOOD_WAIT_30");
    assert_eq!(e.name, "FLOOD_WAIT");
    assert_eq!(e.value, Some(30));
    assert!(e.is("FLOOD_*"));
    assert!(e.is("*_WAIT"));
    assert!(!e.is("FLOOD"));
}
