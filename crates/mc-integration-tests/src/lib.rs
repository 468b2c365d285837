//! A minimal in-process fake Minecraft server for exercising `mc_client`
//! end to end without a real game server or JVM. The server side runs a
//! caller-supplied script on a background thread against a blocking
//! `TcpStream`; the test drives `mc_client::Connection` against it from
//! the main thread, the same way `mc_client`'s own transport tests drive
//! a loopback pair.

use std::io::Cursor;
use std::net::TcpListener;
use std::thread::JoinHandle;

use mc_client::transport::FrameTransport;
use mc_packets::{handshake, login};
use mc_protocol::{Decode, Encode, Packet, Uuid};

/// A fake server bound to a random local port, running `script` against
/// the first connection it accepts.
pub struct FakeServer {
    pub port: u16,
    handle: Option<JoinHandle<()>>,
}

impl FakeServer {
    pub fn spawn(script: impl FnOnce(&mut FrameTransport) + Send + 'static) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind fake server");
        let port = listener.local_addr().expect("local_addr").port();
        let handle = std::thread::spawn(move || {
            if let Ok((stream, _)) = listener.accept() {
                if let Ok(mut transport) = FrameTransport::new(stream) {
                    script(&mut transport);
                }
            }
        });
        Self {
            port,
            handle: Some(handle),
        }
    }

    /// Wait for the server-side script to finish.
    pub fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Performs the server side of Handshake → Login for one connection,
/// asserting the client requested `username`, and replies with a
/// `LoginSuccess` for a fixed offline-mode UUID.
pub fn perform_login(transport: &mut FrameTransport, username: &str) {
    let (_id, body) = transport.read_frame().expect("read Intention");
    handshake::serverbound::Intention::decode(&mut Cursor::new(&body[..])).expect("decode Intention");

    let (_id, body) = transport.read_frame().expect("read LoginStart");
    let login_start =
        login::serverbound::LoginStart::decode(&mut Cursor::new(&body[..])).expect("decode LoginStart");
    assert_eq!(login_start.name, username);

    let mut out = Vec::new();
    login::clientbound::LoginSuccess {
        uuid: Uuid(0),
        username: username.to_string(),
        properties: Vec::new(),
    }
    .encode(&mut out)
    .expect("encode LoginSuccess");
    transport
        .write_frame(login::clientbound::LoginSuccess::ID, &out)
        .expect("write LoginSuccess");
}
