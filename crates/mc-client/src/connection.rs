//! The connection state machine: Handshake, Status, Login and Play. Single
//! threaded and blocking — one `read_frame` call blocks on the socket,
//! dispatches whatever it decoded, and may write a response on the same
//! call stack. Only socket I/O blocks; there is no async runtime here.

use std::net::TcpStream;
use std::sync::Arc;
use std::time::Instant;

use mc_data::GameVersion;
use mc_protocol::{Decode, Packet, Uuid};
use mc_packets::{handshake, login, play, status};
use tracing::{debug, info};

use crate::error::{ClientError, Result};
use crate::events::{Event, EventTable};
use crate::gamestate::{self, Gamestate};
use crate::transport::FrameTransport;

/// Seam for responding to an `EncryptionRequest`. The default
/// implementation refuses — AES-CFB8 session encryption and Mojang
/// session-server authentication are out of scope for this crate.
pub trait EncryptionHook {
    fn handle_encryption_request(
        &mut self,
        request: &login::clientbound::EncryptionRequest,
    ) -> Result<login::serverbound::EncryptionResponse>;
}

/// The default [`EncryptionHook`]: any encrypted server is rejected.
pub struct NoEncryption;

impl EncryptionHook for NoEncryption {
    fn handle_encryption_request(
        &mut self,
        _request: &login::clientbound::EncryptionRequest,
    ) -> Result<login::serverbound::EncryptionResponse> {
        Err(ClientError::EncryptionUnsupported)
    }
}

/// Result of a Status-state server list ping.
#[derive(Debug, Clone)]
pub struct ServerStatus {
    pub json_response: String,
    pub latency: std::time::Duration,
}

/// Performs the Handshake → Status round trip and closes the connection.
pub fn fetch_status(host: &str, port: u16, protocol_version: i32) -> Result<ServerStatus> {
    let stream = TcpStream::connect((host, port))?;
    let mut transport = FrameTransport::new(stream)?;

    send(
        &mut transport,
        &handshake::serverbound::Intention {
            protocol_version: protocol_version.into(),
            server_address: host.to_string(),
            server_port: port,
            next_state: 1.into(),
        },
    )?;
    send(&mut transport, &status::serverbound::StatusRequest)?;
    let (_id, body) = transport.read_frame()?;
    let response = status::clientbound::StatusResponse::decode(&mut std::io::Cursor::new(&body[..]))?;

    let started = Instant::now();
    send(&mut transport, &status::serverbound::PingRequest { payload: 0x4D435F50 })?;
    let (_id, body) = transport.read_frame()?;
    let _pong = status::clientbound::PongResponse::decode(&mut std::io::Cursor::new(&body[..]))?;

    Ok(ServerStatus {
        json_response: response.json_response,
        latency: started.elapsed(),
    })
}

/// Buffers Play packets opened by a Bundle-Delimiter so they apply to the
/// gamestate atomically once the matching close arrives.
#[derive(Default)]
struct BundleBuilder {
    open: bool,
    buffered: Vec<(i32, Vec<u8>)>,
}

impl BundleBuilder {
    fn toggle(&mut self) -> Option<Vec<(i32, Vec<u8>)>> {
        if self.open {
            self.open = false;
            Some(std::mem::take(&mut self.buffered))
        } else {
            self.open = true;
            None
        }
    }

    fn push(&mut self, packet_id: i32, body: Vec<u8>) {
        self.buffered.push((packet_id, body));
    }
}

/// A live Play-state session: transport, gamestate and event table.
pub struct Connection {
    transport: FrameTransport,
    pub gamestate: Gamestate,
    pub events: EventTable,
    version: Arc<GameVersion>,
    bundle: BundleBuilder,
}

impl Connection {
    /// Connects as `"Botty"` with no player UUID (offline-mode login),
    /// refusing any encryption request.
    pub fn connect(host: &str, port: u16, protocol_version: i32, version: Arc<GameVersion>) -> Result<Self> {
        Self::connect_as(host, port, protocol_version, version, "Botty", None, &mut NoEncryption)
    }

    /// Connects with caller-supplied credentials, delegating any
    /// `EncryptionRequest` to `encryption`.
    pub fn connect_as(
        host: &str,
        port: u16,
        protocol_version: i32,
        version: Arc<GameVersion>,
        username: &str,
        player_uuid: Option<Uuid>,
        encryption: &mut dyn EncryptionHook,
    ) -> Result<Self> {
        let stream = TcpStream::connect((host, port))?;
        let mut transport = FrameTransport::new(stream)?;

        send(
            &mut transport,
            &handshake::serverbound::Intention {
                protocol_version: protocol_version.into(),
                server_address: host.to_string(),
                server_port: port,
                next_state: 2.into(),
            },
        )?;
        send(
            &mut transport,
            &login::serverbound::LoginStart {
                name: username.to_string(),
                has_player_uuid: player_uuid.is_some(),
                player_uuid,
            },
        )?;

        loop {
            let (packet_id, body) = transport.read_frame()?;
            let mut cursor = std::io::Cursor::new(&body[..]);
            match packet_id {
                id if id == login::clientbound::LoginDisconnect::ID => {
                    let pkt = login::clientbound::LoginDisconnect::decode(&mut cursor)?;
                    return Err(ClientError::ProtocolViolation(format!(
                        "server rejected login: {}",
                        pkt.reason
                    )));
                }
                id if id == login::clientbound::EncryptionRequest::ID => {
                    let pkt = login::clientbound::EncryptionRequest::decode(&mut cursor)?;
                    let response = encryption.handle_encryption_request(&pkt)?;
                    send(&mut transport, &response)?;
                }
                id if id == login::clientbound::SetCompression::ID => {
                    let pkt = login::clientbound::SetCompression::decode(&mut cursor)?;
                    transport.set_compression(Some(pkt.threshold.0));
                }
                id if id == login::clientbound::LoginPluginRequest::ID => {
                    let pkt = login::clientbound::LoginPluginRequest::decode(&mut cursor)?;
                    send(
                        &mut transport,
                        &login::serverbound::LoginPluginResponse {
                            message_id: pkt.message_id,
                            successful: false,
                            data: None,
                        },
                    )?;
                }
                id if id == login::clientbound::LoginSuccess::ID => {
                    let pkt = login::clientbound::LoginSuccess::decode(&mut cursor)?;
                    info!(username = %pkt.username, uuid = ?pkt.uuid, "login succeeded");
                    break;
                }
                other => {
                    return Err(ClientError::ProtocolViolation(format!(
                        "unexpected packet {other} during login"
                    )));
                }
            }
        }

        Ok(Self {
            transport,
            gamestate: Gamestate::new(),
            events: EventTable::new(),
            version,
            bundle: BundleBuilder::default(),
        })
    }

    /// Reads and applies exactly one frame. Returns `Ok(false)` once the
    /// server has gracefully disconnected.
    pub fn tick(&mut self) -> Result<bool> {
        let (packet_id, body) = self.transport.read_frame()?;

        if packet_id == play::clientbound::BundleDelimiter::ID {
            if let Some(batch) = self.bundle.toggle() {
                for (id, body) in batch {
                    self.apply(id, &body)?;
                }
            }
            return Ok(true);
        }

        if self.bundle.open {
            self.bundle.push(packet_id, body);
            return Ok(true);
        }

        self.apply(packet_id, &body)
    }

    /// Runs `tick` until the connection ends gracefully or errors.
    pub fn run(&mut self) -> Result<()> {
        while self.tick()? {}
        Ok(())
    }

    fn apply(&mut self, packet_id: i32, body: &[u8]) -> Result<bool> {
        let mut cursor = std::io::Cursor::new(body);

        match packet_id {
            id if id == play::clientbound::DisconnectPlay::ID => {
                let pkt = play::clientbound::DisconnectPlay::decode(&mut cursor)?;
                self.events.fire(Event::Disconnected {
                    reason: pkt.reason.clone(),
                })?;
                debug!(reason = %pkt.reason, "server disconnected us");
                return Ok(false);
            }
            id if id == play::clientbound::KeepAlive::ID => {
                let pkt = play::clientbound::KeepAlive::decode(&mut cursor)?;
                send(
                    &mut self.transport,
                    &play::serverbound::KeepAlive {
                        keep_alive_id: pkt.keep_alive_id,
                    },
                )?;
                return Ok(true);
            }
            id if id == play::clientbound::PingPlay::ID => {
                let pkt = play::clientbound::PingPlay::decode(&mut cursor)?;
                send(&mut self.transport, &play::serverbound::PongPlay { id: pkt.id })?;
                return Ok(true);
            }
            id if id == play::clientbound::SynchronizePlayerPosition::ID => {
                let pkt = play::clientbound::SynchronizePlayerPosition::decode(&mut cursor)?;
                apply_teleport(&mut self.gamestate, &pkt);
                send(
                    &mut self.transport,
                    &play::serverbound::ConfirmTeleportation {
                        teleport_id: pkt.teleport_id,
                    },
                )?;
                return Ok(true);
            }
            _ => {}
        }

        gamestate::apply_packet(packet_id, body, &mut self.gamestate, &self.version, &mut self.events)?;
        Ok(true)
    }
}

const TELEPORT_RELATIVE_X: u8 = 0x01;
const TELEPORT_RELATIVE_Y: u8 = 0x02;
const TELEPORT_RELATIVE_Z: u8 = 0x04;
const TELEPORT_RELATIVE_Y_ROT: u8 = 0x08;
const TELEPORT_RELATIVE_X_ROT: u8 = 0x10;

fn apply_teleport(gamestate: &mut Gamestate, pkt: &play::clientbound::SynchronizePlayerPosition) {
    let player = &mut gamestate.player;
    player.x = if pkt.flags & TELEPORT_RELATIVE_X != 0 { player.x + pkt.x } else { pkt.x };
    player.y = if pkt.flags & TELEPORT_RELATIVE_Y != 0 { player.y + pkt.y } else { pkt.y };
    player.z = if pkt.flags & TELEPORT_RELATIVE_Z != 0 { player.z + pkt.z } else { pkt.z };
    player.yaw = if pkt.flags & TELEPORT_RELATIVE_Y_ROT != 0 { player.yaw + pkt.yaw } else { pkt.yaw };
    player.pitch = if pkt.flags & TELEPORT_RELATIVE_X_ROT != 0 {
        player.pitch + pkt.pitch
    } else {
        pkt.pitch
    };
}

fn send<P: mc_protocol::Encode + Packet>(transport: &mut FrameTransport, packet: &P) -> Result<()> {
    let mut body = Vec::new();
    packet.encode(&mut body)?;
    transport.write_frame(P::ID, &body)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn teleport_applies_relative_and_absolute_axes() {
        let mut gamestate = Gamestate::new();
        gamestate.player.x = 10.0;
        gamestate.player.y = 64.0;
        gamestate.player.z = -5.0;
        gamestate.player.yaw = 90.0;
        gamestate.player.pitch = 0.0;

        let pkt = play::clientbound::SynchronizePlayerPosition {
            x: 1.0,
            y: 200.0,
            z: 2.0,
            yaw: 10.0,
            pitch: 5.0,
            flags: TELEPORT_RELATIVE_X | TELEPORT_RELATIVE_Z,
            teleport_id: 7.into(),
        };
        apply_teleport(&mut gamestate, &pkt);

        assert_eq!(gamestate.player.x, 11.0);
        assert_eq!(gamestate.player.y, 200.0);
        assert_eq!(gamestate.player.z, -3.0);
        assert_eq!(gamestate.player.yaw, 10.0);
        assert_eq!(gamestate.player.pitch, 5.0);
    }
}
