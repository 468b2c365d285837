use std::cell::Cell;
use std::io::Cursor;
use std::rc::Rc;
use std::sync::Arc;

use mc_client::Connection;
use mc_data::GameVersion;
use mc_integration_tests::{perform_login, FakeServer};
use mc_packets::play;
use mc_protocol::{Decode, Encode, Packet};

#[test]
fn connect_completes_handshake_and_login() {
    let server = FakeServer::spawn(|transport| {
        perform_login(transport, "Botty");
    });
    let port = server.port;

    let version = Arc::new(GameVersion::default());
    let connection = Connection::connect("127.0.0.1", port, 763, version);
    assert!(connection.is_ok(), "{:?}", connection.err());

    server.join();
}

#[test]
fn play_loop_echoes_keep_alive_and_tracks_login_play() {
    let server = FakeServer::spawn(|transport| {
        perform_login(transport, "Botty");

        let mut body = Vec::new();
        play::clientbound::LoginPlay {
            entity_id: 42,
            is_hardcore: false,
            gamemode: 0,
            previous_gamemode: -1,
            dimension_names: vec!["minecraft:overworld".to_string()],
            registry_codec: mc_protocol::Nbt(vec![0x00]),
            dimension_type: "minecraft:overworld".to_string(),
            dimension_name: "minecraft:overworld".to_string(),
            hashed_seed: 0,
            max_players: 20.into(),
            view_distance: 10.into(),
            simulation_distance: 10.into(),
            reduced_debug_info: false,
            enable_respawn_screen: true,
            is_debug: false,
            is_flat: false,
            has_death_location: false,
            death_dimension_name: None,
            death_location: None,
            portal_cooldown: 1.into(),
        }
        .encode(&mut body)
        .expect("encode LoginPlay");
        transport
            .write_frame(play::clientbound::LoginPlay::ID, &body)
            .expect("write LoginPlay");

        let mut body = Vec::new();
        play::clientbound::KeepAlive { keep_alive_id: 0xBEEF }
            .encode(&mut body)
            .expect("encode KeepAlive");
        transport
            .write_frame(play::clientbound::KeepAlive::ID, &body)
            .expect("write KeepAlive");

        let (id, body) = transport.read_frame().expect("read echoed KeepAlive");
        assert_eq!(id, play::serverbound::KeepAlive::ID);
        let echoed =
            play::serverbound::KeepAlive::decode(&mut Cursor::new(&body[..])).expect("decode echoed KeepAlive");
        assert_eq!(echoed.keep_alive_id, 0xBEEF);

        let mut body = Vec::new();
        play::clientbound::DisconnectPlay {
            reason: "test complete".to_string(),
        }
        .encode(&mut body)
        .expect("encode DisconnectPlay");
        transport
            .write_frame(play::clientbound::DisconnectPlay::ID, &body)
            .expect("write DisconnectPlay");
    });
    let port = server.port;

    let version = Arc::new(GameVersion::default());
    let mut connection = Connection::connect("127.0.0.1", port, 763, version).expect("connect");

    let disconnected = Rc::new(Cell::new(false));
    let disconnected_clone = Rc::clone(&disconnected);
    connection.events.on_event(move |event| {
        if matches!(event, mc_client::Event::Disconnected { .. }) {
            disconnected_clone.set(true);
        }
        0
    });

    connection.run().expect("play loop");

    assert!(disconnected.get());
    assert!(connection.gamestate.login_play_seen);
    assert_eq!(connection.gamestate.player.entity_id, 42);
    assert_eq!(connection.gamestate.dimension_name, "minecraft:overworld");

    server.join();
}

