use fireworks_room::room::events::{InitState, PlayerLeft};
use fireworks_room::room::mock::WELCOME_TEXT;
use fireworks_room::room::{
    ChatMessage, ClientEvent, LaunchPayload, MockRoom, OfflineRoom, Player, RoomConfig,
    RoomState, RoomTransport, ServerEvent,
};
use std::time::Duration;

fn me() -> Player {
    Player::new("me", "Lucky Panda", "#f472b6")
}

fn message(id: &str, text: &str) -> ChatMessage {
    ChatMessage {
        id: id.into(),
        player_id: "bot-1".into(),
        player_name: "Galaxy Walker".into(),
        text: text.into(),
        timestamp: 0,
        color: "#60a5fa".into(),
    }
}

fn secs(s: u64) -> Duration {
    Duration::from_secs(s)
}

// ==================================
// 1. Contrat JSON
// ==================================

#[test]
fn test_parse_remote_launch() {
    let event = ServerEvent::parse(
        r#"{"type":"remote_launch","payload":{"sx":1,"sy":2,"tx":3,"ty":4,"hue":5}}"#,
    )
    .unwrap();
    assert_eq!(
        event,
        ServerEvent::RemoteLaunch(LaunchPayload {
            sx: 1.0,
            sy: 2.0,
            tx: 3.0,
            ty: 4.0,
            hue: 5.0
        })
    );
}

#[test]
fn test_parse_init_state_uses_camel_case() {
    let json = r##"{"type":"init_state","payload":{
        "selfId":"me",
        "players":[{"id":"me","name":"Lucky Panda","color":"#f472b6"}],
        "chatHistory":[{"id":"m1","playerId":"me","playerName":"Lucky Panda","text":"hi","timestamp":12,"color":"#f472b6"}]
    }}"##;
    let ServerEvent::InitState(init) = ServerEvent::parse(json).unwrap() else {
        panic!("expected init_state");
    };
    assert_eq!(init.self_id, "me");
    assert_eq!(init.players.len(), 1);
    assert_eq!(init.chat_history[0].player_name, "Lucky Panda");
}

#[test]
fn test_unknown_or_malformed_events_are_rejected() {
    assert!(ServerEvent::parse(r#"{"type":"teleport","payload":{}}"#).is_err());
    assert!(ServerEvent::parse(r#"{"type":"player_left"}"#).is_err());
    assert!(ServerEvent::parse("not json").is_err());
}

#[test]
fn test_client_events_serialize_with_type_and_payload() {
    assert_eq!(
        ClientEvent::chat("hello").to_json().unwrap(),
        r#"{"type":"chat_send","payload":{"text":"hello"}}"#
    );

    let launch = ClientEvent::FireworkLaunch(LaunchPayload {
        sx: 1.0,
        sy: 2.0,
        tx: 3.0,
        ty: 4.0,
        hue: 5.0,
    });
    let json = launch.to_json().unwrap();
    assert!(json.starts_with(r#"{"type":"firework_launch","payload":{"#));
    assert_eq!(ClientEvent::parse(&json).unwrap(), launch);
}

// ==================================
// 2. RoomState
// ==================================

#[test]
fn test_init_state_replaces_roster_and_marks_current_user() {
    let mut room = RoomState::new(me(), 10);
    room.apply(ServerEvent::InitState(InitState {
        self_id: "me".into(),
        players: vec![Player::new("bot-1", "Galaxy Walker", "#60a5fa"), me()],
        chat_history: vec![message("m1", "hello")],
    }));

    let names: Vec<&str> = room.roster().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Galaxy Walker", "Lucky Panda"]);
    assert!(room.roster().get("me").unwrap().is_current_user);
    assert!(!room.roster().get("bot-1").unwrap().is_current_user);
    assert_eq!(room.chat().len(), 1);
}

#[test]
fn test_join_and_leave() {
    let mut room = RoomState::new(me(), 10);
    room.apply(ServerEvent::PlayerJoined(Player::new("p2", "Night Blaze", "#facc15")));
    room.apply(ServerEvent::PlayerJoined(Player::new("p2", "Night Blaze II", "#facc15")));
    assert_eq!(room.roster().len(), 2);
    assert_eq!(room.roster().get("p2").unwrap().name, "Night Blaze II");

    room.apply(ServerEvent::PlayerLeft(PlayerLeft { id: "p2".into() }));
    room.apply(ServerEvent::PlayerLeft(PlayerLeft { id: "me".into() }));
    assert_eq!(room.roster().len(), 1);
    assert!(room.roster().current_user().is_some());
}

#[test]
fn test_remote_launch_is_returned_to_host() {
    let mut room = RoomState::new(me(), 10);
    let payload = LaunchPayload {
        sx: 10.0,
        sy: 600.0,
        tx: 200.0,
        ty: 150.0,
        hue: 42.0,
    };
    assert_eq!(room.apply(ServerEvent::RemoteLaunch(payload)), Some(payload));
}

#[test]
fn test_chat_is_deduplicated_and_bounded() {
    let mut room = RoomState::new(me(), 3);
    for i in 0..5 {
        room.apply(ServerEvent::NewMessage(message(&format!("m{}", i), "hey")));
    }
    room.apply(ServerEvent::NewMessage(message("m4", "again")));

    let ids: Vec<&str> = room.chat().iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["m2", "m3", "m4"]);
    assert_eq!(room.chat().last().unwrap().text, "hey");
}

// ==================================
// 3. Transports
// ==================================

#[test]
fn test_mock_room_starts_with_bots_and_welcome() {
    let mut mock = MockRoom::new(&RoomConfig::default(), me());
    let events = mock.poll(Duration::ZERO);

    let Some(ServerEvent::InitState(init)) = events.first() else {
        panic!("expected init_state first");
    };
    assert_eq!(init.players.len(), 3);
    assert_eq!(init.chat_history[0].text, WELCOME_TEXT);
}

#[test]
fn test_mock_room_bot_launches_stay_in_band() {
    let config = RoomConfig {
        bot_launch_chance: 1.0,
        bot_chat_chance: 0.0,
        seed: Some(9),
        ..RoomConfig::default()
    };
    let mut mock = MockRoom::new(&config, me());
    mock.set_surface_size(800.0, 600.0);
    mock.poll(Duration::ZERO);

    let launches: Vec<LaunchPayload> = mock
        .poll(secs(20))
        .into_iter()
        .filter_map(|e| match e {
            ServerEvent::RemoteLaunch(p) => Some(p),
            _ => None,
        })
        .collect();

    assert_eq!(launches.len(), 10);
    for p in launches {
        assert_eq!(p.sy, 600.0);
        assert!((0.0..=800.0).contains(&p.sx) && (0.0..=800.0).contains(&p.tx));
        assert!((120.0..=420.0).contains(&p.ty), "ty = {}", p.ty);
        assert!((0.0..360.0).contains(&p.hue));
    }
}

#[test]
fn test_mock_room_without_surface_does_not_launch() {
    let config = RoomConfig {
        bot_launch_chance: 1.0,
        seed: Some(10),
        ..RoomConfig::default()
    };
    let mut mock = MockRoom::new(&config, me());
    mock.poll(Duration::ZERO);

    assert!(mock
        .poll(secs(10))
        .iter()
        .all(|e| !matches!(e, ServerEvent::RemoteLaunch(_))));
}

#[test]
fn test_mock_room_echoes_chat() {
    let mut mock = MockRoom::new(&RoomConfig::default(), me());
    mock.poll(Duration::ZERO);

    mock.send(ClientEvent::chat("   "));
    mock.send(ClientEvent::chat("  happy new year  "));
    let events = mock.poll(Duration::ZERO);

    assert_eq!(events.len(), 1);
    let ServerEvent::NewMessage(msg) = &events[0] else {
        panic!("expected new_message");
    };
    assert_eq!(msg.text, "happy new year");
    assert_eq!(msg.player_id, "me");
}

#[test]
fn test_offline_room_has_only_current_user() {
    let mut room = RoomState::new(me(), 10);
    let mut offline = OfflineRoom::new(me());

    for event in offline.poll(Duration::ZERO) {
        room.apply(event);
    }
    assert_eq!(room.roster().len(), 1);
    assert!(room.chat().is_empty());

    offline.send(ClientEvent::chat("solo"));
    for event in offline.poll(secs(1)) {
        room.apply(event);
    }
    assert_eq!(room.chat().last().unwrap().text, "solo");
}
