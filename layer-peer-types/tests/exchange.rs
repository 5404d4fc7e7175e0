use layer_peer_types::{enums, functions, types, Request, Response, RemoteCall};

fn returns<R: RemoteCall>(_: &R, response: Response) -> Result<R::Return, Response> {
    <R::Return as TryFrom<Response>>::try_from(response)
}

#[test]
fn function_converts_into_its_request_variant() {
    let req = functions::channels::GetParticipant {
        channel:     enums::InputChannel::InputChannel(types::InputChannel { channel_id: 5, access_hash: 9 }),
        participant: enums::InputPeer::PeerSelf,
    };
    let request: Request = req.clone().into();
    assert_eq!(request, Request::GetParticipant(req));
    assert_eq!(request.name(), "channels.getParticipant");
}

#[test]
fn matching_response_is_extracted() {
    let req = functions::messages::GetFullChat { chat_id: 1 };
    let full = types::messages::ChatFull {
        full_chat: types::ChannelFull { id: 1, about: String::new(), participants_count: None }.into(),
        chats:     vec![],
        users:     vec![],
    };
    let got = returns(&req, Response::ChatFull(full.clone())).unwrap();
    assert_eq!(got, full);
}

#[test]
fn mismatched_response_is_handed_back() {
    let req = functions::upload::SaveFilePart { file_id: 1, file_part: 0, bytes: vec![] };
    let err = returns(&req, Response::Updates(enums::Updates::TooLong)).unwrap_err();
    assert_eq!(err.name(), "Updates");
}

#[test]
fn message_date_skips_empty() {
    let empty: enums::Message = types::MessageEmpty { id: 3, peer_id: None }.into();
    let full: enums::Message = types::Message {
        out:     false,
        id:      4,
        peer_id: types::PeerUser { user_id: 1 }.into(),
        date:    1_600_000_000,
        message: "hi".into(),
    }.into();
    assert_eq!(empty.date(), None);
    assert_eq!(full.date(), Some(1_600_000_000));
    assert_eq!(full.id(), 4);
}
