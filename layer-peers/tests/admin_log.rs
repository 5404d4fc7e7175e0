use layer_peer_types::types::ChannelAdminLogEventsFilter;
use layer_peers::ChatEventFilter;

#[test]
fn default_filter_selects_nothing() {
    assert_eq!(ChatEventFilter::default().to_raw(), ChannelAdminLogEventsFilter::default());
}

#[test]
fn restrictions_cover_bans_and_kicks() {
    let raw = ChatEventFilter { new_restrictions: true, ..Default::default() }.to_raw();
    assert_eq!(
        raw,
        ChannelAdminLogEventsFilter { ban: true, unban: true, kick: true, unkick: true, ..Default::default() },
    );
}

#[test]
fn grouped_flags_fan_out() {
    let raw = ChannelAdminLogEventsFilter::from(ChatEventFilter {
        admin_rights: true,
        new_members:  true,
        ..Default::default()
    });
    assert!(raw.promote && raw.demote);
    assert!(raw.join && raw.invite);
    assert!(!raw.leave);
}

#[test]
fn single_flags_map_one_to_one() {
    let raw = ChatEventFilter {
        chat_info:        true,
        invite_links:     true,
        deleted_messages: true,
        voice_chats:      true,
        ..Default::default()
    }
    .to_raw();
    assert_eq!(
        raw,
        ChannelAdminLogEventsFilter { info: true, invites: true, delete: true, group_call: true, ..Default::default() },
    );
}

#[test]
fn all_selects_everything() {
    let raw = ChatEventFilter::all().to_raw();
    let every = [
        raw.join, raw.leave, raw.invite, raw.ban, raw.unban, raw.kick, raw.unkick, raw.promote,
        raw.demote, raw.info, raw.settings, raw.pinned, raw.edit, raw.delete, raw.group_call, raw.invites,
    ];
    assert!(every.iter().all(|&f| f));
}
