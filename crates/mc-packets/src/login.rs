//! Login state — authentication, compression and plugin-channel negotiation
//! before the session enters Play.

use mc_protocol::{ByteArray, Decode, Direction, Encode, Packet, State, Uuid, VarInt};
use serde::{Deserialize, Serialize};

pub mod clientbound {
    use super::*;

    /// Packet ID: 0x00
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct LoginDisconnect {
        /// JSON chat component.
        pub reason: String,
    }

    impl Packet for LoginDisconnect {
        const ID: i32 = 0x00;
        const NAME: &'static str = "LoginDisconnect";
        const STATE: State = State::Login;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x01. Online-mode authentication is out of scope (see
    /// `mc_client::encryption`) — this crate only ever reads the fields off
    /// the wire so the login state machine can recognise and reject it.
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct EncryptionRequest {
        pub server_id: String,
        pub public_key: ByteArray,
        pub verify_token: ByteArray,
    }

    impl Packet for EncryptionRequest {
        const ID: i32 = 0x01;
        const NAME: &'static str = "EncryptionRequest";
        const STATE: State = State::Login;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// A cosmetic/signature property attached to a profile (e.g. skin
    /// texture). Read and discarded — see `Non-goals`.
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct Property {
        pub name: String,
        pub value: String,
        pub signature: Option<String>,
    }

    /// Packet ID: 0x02
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct LoginSuccess {
        pub uuid: Uuid,
        pub username: String,
        pub properties: Vec<Property>,
    }

    impl Packet for LoginSuccess {
        const ID: i32 = 0x02;
        const NAME: &'static str = "LoginSuccess";
        const STATE: State = State::Login;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x03
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SetCompression {
        /// Packets whose uncompressed body is shorter than this threshold
        /// are sent uncompressed. Negative disables compression entirely.
        pub threshold: VarInt,
    }

    impl Packet for SetCompression {
        const ID: i32 = 0x03;
        const NAME: &'static str = "SetCompression";
        const STATE: State = State::Login;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x04. `data` is the unprefixed remainder of the packet, not
    /// a varint-length-prefixed `Vec<u8>`, so this hand-rolls `Encode`/`Decode`.
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    pub struct LoginPluginRequest {
        pub message_id: VarInt,
        pub channel: String,
        /// Remainder of the packet; channel-specific, never parsed here.
        pub data: Vec<u8>,
    }

    impl Encode for LoginPluginRequest {
        fn encode<W: std::io::Write>(&self, writer: &mut W) -> mc_protocol::Result<()> {
            self.message_id.encode(writer)?;
            self.channel.encode(writer)?;
            writer.write_all(&self.data)?;
            Ok(())
        }
    }

    impl Decode<'_> for LoginPluginRequest {
        fn decode<R: std::io::Read>(reader: &mut R) -> mc_protocol::Result<Self> {
            let message_id = VarInt::decode(reader)?;
            let channel = String::decode(reader)?;
            let mut data = Vec::new();
            reader.read_to_end(&mut data)?;
            Ok(Self {
                message_id,
                channel,
                data,
            })
        }
    }

    impl Packet for LoginPluginRequest {
        const ID: i32 = 0x04;
        const NAME: &'static str = "LoginPluginRequest";
        const STATE: State = State::Login;
        const DIRECTION: Direction = Direction::Clientbound;
    }
}

pub mod serverbound {
    use super::*;

    /// Packet ID: 0x00. `player_uuid`'s presence is carried by
    /// `has_player_uuid` on the wire, not by the generic `Option<T>` bool
    /// prefix, so this type hand-rolls `Encode`/`Decode` instead of deriving.
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    pub struct LoginStart {
        pub name: String,
        pub has_player_uuid: bool,
        pub player_uuid: Option<Uuid>,
    }

    impl Encode for LoginStart {
        fn encode<W: std::io::Write>(&self, writer: &mut W) -> mc_protocol::Result<()> {
            self.name.encode(writer)?;
            self.has_player_uuid.encode(writer)?;
            if let Some(uuid) = &self.player_uuid {
                uuid.encode(writer)?;
            }
            Ok(())
        }
    }

    impl Decode<'_> for LoginStart {
        fn decode<R: std::io::Read>(reader: &mut R) -> mc_protocol::Result<Self> {
            let name = String::decode(reader)?;
            let has_player_uuid = bool::decode(reader)?;
            let player_uuid = if has_player_uuid {
                Some(Uuid::decode(reader)?)
            } else {
                None
            };
            Ok(Self {
                name,
                has_player_uuid,
                player_uuid,
            })
        }
    }

    impl Packet for LoginStart {
        const ID: i32 = 0x00;
        const NAME: &'static str = "LoginStart";
        const STATE: State = State::Login;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x01. This crate never sends this packet (see
    /// `EncryptionHook` in `mc_client`) but keeps the type for completeness.
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct EncryptionResponse {
        pub shared_secret: ByteArray,
        pub verify_token: ByteArray,
    }

    impl Packet for EncryptionResponse {
        const ID: i32 = 0x01;
        const NAME: &'static str = "EncryptionResponse";
        const STATE: State = State::Login;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x02. `data`'s presence is carried by `successful`, not by
    /// the generic `Option<T>` bool prefix, and when present it is the raw
    /// remainder of the packet with no length prefix — hand-rolled for both
    /// reasons.
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    pub struct LoginPluginResponse {
        pub message_id: VarInt,
        pub successful: bool,
        pub data: Option<Vec<u8>>,
    }

    impl Encode for LoginPluginResponse {
        fn encode<W: std::io::Write>(&self, writer: &mut W) -> mc_protocol::Result<()> {
            self.message_id.encode(writer)?;
            self.successful.encode(writer)?;
            if let Some(data) = &self.data {
                writer.write_all(data)?;
            }
            Ok(())
        }
    }

    impl Decode<'_> for LoginPluginResponse {
        fn decode<R: std::io::Read>(reader: &mut R) -> mc_protocol::Result<Self> {
            let message_id = VarInt::decode(reader)?;
            let successful = bool::decode(reader)?;
            let data = if successful {
                let mut rest = Vec::new();
                reader.read_to_end(&mut rest)?;
                Some(rest)
            } else {
                None
            };
            Ok(Self {
                message_id,
                successful,
                data,
            })
        }
    }

    impl Packet for LoginPluginResponse {
        const ID: i32 = 0x02;
        const NAME: &'static str = "LoginPluginResponse";
        const STATE: State = State::Login;
        const DIRECTION: Direction = Direction::Serverbound;
    }
}
