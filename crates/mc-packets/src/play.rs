//! Play state — the bulk of the protocol surface. Packets the connection
//! state machine or gamestate projector dispatch on on carry real fields;
//! everything else (boss bar, titles, advancements, recipes, tags, plugin
//! messages, sound effects, most of particle) is acknowledged and its
//! payload dropped without a shape-specific decode.

#![allow(dead_code)]

use mc_protocol::{
    read_varint, write_varint, Angle, BitSet, BlockState, ByteArray, Decode, Direction, Encode,
    ItemStack, Nbt, Packet, Position, State, Uuid, VarInt, VarLong,
};
use serde::{Deserialize, Serialize};

pub mod clientbound {
    use super::*;

    /// Packet ID: 0x00
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct BundleDelimiter;

    impl Packet for BundleDelimiter {
        const ID: i32 = 0x00;
        const NAME: &'static str = "BundleDelimiter";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x01
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SpawnEntity {
        pub entity_id: VarInt,
        pub entity_uuid: Uuid,
        pub entity_type: VarInt,
        pub x: f64,
        pub y: f64,
        pub z: f64,
        pub pitch: Angle,
        pub yaw: Angle,
        pub head_yaw: Angle,
        pub data: VarInt,
        pub velocity_x: i16,
        pub velocity_y: i16,
        pub velocity_z: i16,
    }

    impl Packet for SpawnEntity {
        const ID: i32 = 0x01;
        const NAME: &'static str = "SpawnEntity";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x02
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SpawnExperienceOrb {
        pub entity_id: VarInt,
        pub x: f64,
        pub y: f64,
        pub z: f64,
        pub count: i16,
    }

    impl Packet for SpawnExperienceOrb {
        const ID: i32 = 0x02;
        const NAME: &'static str = "SpawnExperienceOrb";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x03
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SpawnPlayer {
        pub entity_id: VarInt,
        pub player_uuid: Uuid,
        pub x: f64,
        pub y: f64,
        pub z: f64,
        pub yaw: Angle,
        pub pitch: Angle,
    }

    impl Packet for SpawnPlayer {
        const ID: i32 = 0x03;
        const NAME: &'static str = "SpawnPlayer";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x04
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct EntityAnimation {
        pub entity_id: VarInt,
        pub animation: u8,
    }

    impl Packet for EntityAnimation {
        const ID: i32 = 0x04;
        const NAME: &'static str = "EntityAnimation";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x06
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct AcknowledgeBlockChange {
        pub sequence_id: VarInt,
    }

    impl Packet for AcknowledgeBlockChange {
        const ID: i32 = 0x06;
        const NAME: &'static str = "AcknowledgeBlockChange";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x07
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SetBlockDestroyStage {
        pub entity_id: VarInt,
        pub location: Position,
        pub destroy_stage: u8,
    }

    impl Packet for SetBlockDestroyStage {
        const ID: i32 = 0x07;
        const NAME: &'static str = "SetBlockDestroyStage";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x08
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct BlockEntityData {
        pub location: Position,
        pub block_entity_type: VarInt,
        pub data: Nbt,
    }

    impl Packet for BlockEntityData {
        const ID: i32 = 0x08;
        const NAME: &'static str = "BlockEntityData";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x09
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct BlockAction {
        pub location: Position,
        pub action_id: u8,
        pub action_param: u8,
        pub block_type: VarInt,
    }

    impl Packet for BlockAction {
        const ID: i32 = 0x09;
        const NAME: &'static str = "BlockAction";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x0A
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct BlockUpdate {
        pub location: Position,
        pub block_id: BlockState,
    }

    impl Packet for BlockUpdate {
        const ID: i32 = 0x0A;
        const NAME: &'static str = "BlockUpdate";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// One chunk's worth of raw (still paletted-container-encoded) biome data.
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct ChunkBiomeEntry {
        pub chunk_x: i32,
        pub chunk_z: i32,
        pub data: ByteArray,
    }

    /// Packet ID: 0x0D
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct ChunkBiomes {
        pub entries: Vec<ChunkBiomeEntry>,
    }

    impl Packet for ChunkBiomes {
        const ID: i32 = 0x0D;
        const NAME: &'static str = "ChunkBiomes";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x1A
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct DisconnectPlay {
        /// JSON chat component.
        pub reason: String,
    }

    impl Packet for DisconnectPlay {
        const ID: i32 = 0x1A;
        const NAME: &'static str = "DisconnectPlay";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x1C. `entity_id` is a plain big-endian `i32` here, unlike
    /// almost every other entity-id field, which is a `VarInt`.
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct EntityEvent {
        pub entity_id: i32,
        pub entity_status: i8,
    }

    impl Packet for EntityEvent {
        const ID: i32 = 0x1C;
        const NAME: &'static str = "EntityEvent";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// One block offset burned out by an explosion.
    #[derive(Debug, Clone, Copy, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct ExplosionRecord {
        pub dx: i8,
        pub dy: i8,
        pub dz: i8,
    }

    /// Packet ID: 0x1D
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct Explosion {
        pub x: f64,
        pub y: f64,
        pub z: f64,
        pub strength: f32,
        pub records: Vec<ExplosionRecord>,
        pub player_motion_x: f32,
        pub player_motion_y: f32,
        pub player_motion_z: f32,
    }

    impl Packet for Explosion {
        const ID: i32 = 0x1D;
        const NAME: &'static str = "Explosion";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x1E. Fields are wire-ordered `(chunk_z, chunk_x)`.
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct UnloadChunk {
        pub chunk_z: i32,
        pub chunk_x: i32,
    }

    impl Packet for UnloadChunk {
        const ID: i32 = 0x1E;
        const NAME: &'static str = "UnloadChunk";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x1F
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct GameEvent {
        pub event: u8,
        pub value: f32,
    }

    impl Packet for GameEvent {
        const ID: i32 = 0x1F;
        const NAME: &'static str = "GameEvent";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x23
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct KeepAlive {
        pub keep_alive_id: i64,
    }

    impl Packet for KeepAlive {
        const ID: i32 = 0x23;
        const NAME: &'static str = "KeepAlive";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// One block-entity found while decoding a chunk section column.
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct BlockEntityEntry {
        /// High nibble = local X, low nibble = local Z.
        pub packed_xz: u8,
        pub y: i16,
        pub block_entity_type: VarInt,
        pub data: Nbt,
    }

    /// Packet ID: 0x24. `sections` is the still-paletted-container-encoded
    /// raw section buffer (up to 24 sections); the projector (not this
    /// codec) walks it with [`mc_protocol::palette`].
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct ChunkDataAndUpdateLight {
        pub chunk_x: i32,
        pub chunk_z: i32,
        pub heightmaps: Nbt,
        pub sections: ByteArray,
        pub block_entities: Vec<BlockEntityEntry>,
        pub trust_edges: bool,
        pub sky_light_mask: BitSet,
        pub block_light_mask: BitSet,
        pub empty_sky_light_mask: BitSet,
        pub empty_block_light_mask: BitSet,
        pub sky_light_arrays: Vec<ByteArray>,
        pub block_light_arrays: Vec<ByteArray>,
    }

    impl Packet for ChunkDataAndUpdateLight {
        const ID: i32 = 0x24;
        const NAME: &'static str = "ChunkDataAndUpdateLight";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x28. `has_death_location`-guarded fields are not a
    /// generic `Option<T>` bool prefix, so this hand-rolls `Encode`/`Decode`.
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    pub struct LoginPlay {
        pub entity_id: i32,
        pub is_hardcore: bool,
        pub gamemode: u8,
        pub previous_gamemode: i8,
        pub dimension_names: Vec<String>,
        pub registry_codec: Nbt,
        pub dimension_type: String,
        pub dimension_name: String,
        pub hashed_seed: i64,
        pub max_players: VarInt,
        pub view_distance: VarInt,
        pub simulation_distance: VarInt,
        pub reduced_debug_info: bool,
        pub enable_respawn_screen: bool,
        pub is_debug: bool,
        pub is_flat: bool,
        pub has_death_location: bool,
        pub death_dimension_name: Option<String>,
        pub death_location: Option<Position>,
        pub portal_cooldown: VarInt,
    }

    impl Encode for LoginPlay {
        fn encode<W: std::io::Write>(&self, writer: &mut W) -> mc_protocol::Result<()> {
            self.entity_id.encode(writer)?;
            self.is_hardcore.encode(writer)?;
            self.gamemode.encode(writer)?;
            self.previous_gamemode.encode(writer)?;
            self.dimension_names.encode(writer)?;
            self.registry_codec.encode(writer)?;
            self.dimension_type.encode(writer)?;
            self.dimension_name.encode(writer)?;
            self.hashed_seed.encode(writer)?;
            self.max_players.encode(writer)?;
            self.view_distance.encode(writer)?;
            self.simulation_distance.encode(writer)?;
            self.reduced_debug_info.encode(writer)?;
            self.enable_respawn_screen.encode(writer)?;
            self.is_debug.encode(writer)?;
            self.is_flat.encode(writer)?;
            self.has_death_location.encode(writer)?;
            if self.has_death_location {
                self.death_dimension_name
                    .as_ref()
                    .expect("has_death_location implies death_dimension_name")
                    .encode(writer)?;
                self.death_location
                    .as_ref()
                    .expect("has_death_location implies death_location")
                    .encode(writer)?;
            }
            self.portal_cooldown.encode(writer)?;
            Ok(())
        }
    }

    impl Decode<'_> for LoginPlay {
        fn decode<R: std::io::Read>(reader: &mut R) -> mc_protocol::Result<Self> {
            let entity_id = i32::decode(reader)?;
            let is_hardcore = bool::decode(reader)?;
            let gamemode = u8::decode(reader)?;
            let previous_gamemode = i8::decode(reader)?;
            let dimension_names = Vec::<String>::decode(reader)?;
            let registry_codec = Nbt::decode(reader)?;
            let dimension_type = String::decode(reader)?;
            let dimension_name = String::decode(reader)?;
            let hashed_seed = i64::decode(reader)?;
            let max_players = VarInt::decode(reader)?;
            let view_distance = VarInt::decode(reader)?;
            let simulation_distance = VarInt::decode(reader)?;
            let reduced_debug_info = bool::decode(reader)?;
            let enable_respawn_screen = bool::decode(reader)?;
            let is_debug = bool::decode(reader)?;
            let is_flat = bool::decode(reader)?;
            let has_death_location = bool::decode(reader)?;
            let (death_dimension_name, death_location) = if has_death_location {
                (Some(String::decode(reader)?), Some(Position::decode(reader)?))
            } else {
                (None, None)
            };
            let portal_cooldown = VarInt::decode(reader)?;
            Ok(Self {
                entity_id,
                is_hardcore,
                gamemode,
                previous_gamemode,
                dimension_names,
                registry_codec,
                dimension_type,
                dimension_name,
                hashed_seed,
                max_players,
                view_distance,
                simulation_distance,
                reduced_debug_info,
                enable_respawn_screen,
                is_debug,
                is_flat,
                has_death_location,
                death_dimension_name,
                death_location,
                portal_cooldown,
            })
        }
    }

    impl Packet for LoginPlay {
        const ID: i32 = 0x28;
        const NAME: &'static str = "LoginPlay";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x2B. Deltas are signed wire shorts scaled 1/4096 by the
    /// projector, not by this codec.
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct UpdateEntityPosition {
        pub entity_id: VarInt,
        pub delta_x: i16,
        pub delta_y: i16,
        pub delta_z: i16,
        pub on_ground: bool,
    }

    impl Packet for UpdateEntityPosition {
        const ID: i32 = 0x2B;
        const NAME: &'static str = "UpdateEntityPosition";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x2C
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct UpdateEntityPositionAndRotation {
        pub entity_id: VarInt,
        pub delta_x: i16,
        pub delta_y: i16,
        pub delta_z: i16,
        pub yaw: Angle,
        pub pitch: Angle,
        pub on_ground: bool,
    }

    impl Packet for UpdateEntityPositionAndRotation {
        const ID: i32 = 0x2C;
        const NAME: &'static str = "UpdateEntityPositionAndRotation";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x2D
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct UpdateEntityRotation {
        pub entity_id: VarInt,
        pub yaw: Angle,
        pub pitch: Angle,
        pub on_ground: bool,
    }

    impl Packet for UpdateEntityRotation {
        const ID: i32 = 0x2D;
        const NAME: &'static str = "UpdateEntityRotation";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x32
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct PingPlay {
        pub id: i32,
    }

    impl Packet for PingPlay {
        const ID: i32 = 0x32;
        const NAME: &'static str = "PingPlay";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x38
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct CombatDeath {
        pub player_id: VarInt,
        pub entity_id: i32,
        /// JSON chat component (death message).
        pub message: String,
    }

    impl Packet for CombatDeath {
        const ID: i32 = 0x38;
        const NAME: &'static str = "CombatDeath";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x39
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct PlayerInfoRemove {
        pub uuids: Vec<Uuid>,
    }

    impl Packet for PlayerInfoRemove {
        const ID: i32 = 0x39;
        const NAME: &'static str = "PlayerInfoRemove";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// A signed chat session public key, carried by the init-chat sub-record.
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct ChatSession {
        pub session_id: Uuid,
        pub expires_at: i64,
        pub public_key: ByteArray,
        pub key_signature: ByteArray,
    }

    /// One player's worth of the six optional sub-records in a
    /// `PlayerInfoUpdate` entry, gated by `actions`'s bitmask rather than a
    /// self-describing `Option<T>` prefix.
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    pub struct PlayerInfoEntry {
        pub uuid: Uuid,
        pub add_player: Option<AddPlayerAction>,
        pub init_chat: Option<ChatSession>,
        pub update_gamemode: Option<VarInt>,
        pub update_listed: Option<bool>,
        pub update_latency: Option<VarInt>,
        pub update_display_name: Option<String>,
    }

    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct AddPlayerAction {
        pub name: String,
        pub properties: Vec<crate::login::clientbound::Property>,
    }

    const PLAYER_INFO_ACTION_ADD_PLAYER: u8 = 0x01;
    const PLAYER_INFO_ACTION_INIT_CHAT: u8 = 0x02;
    const PLAYER_INFO_ACTION_UPDATE_GAMEMODE: u8 = 0x04;
    const PLAYER_INFO_ACTION_UPDATE_LISTED: u8 = 0x08;
    const PLAYER_INFO_ACTION_UPDATE_LATENCY: u8 = 0x10;
    const PLAYER_INFO_ACTION_UPDATE_DISPLAY_NAME: u8 = 0x20;

    impl PlayerInfoEntry {
        fn encode_for<W: std::io::Write>(&self, actions: u8, writer: &mut W) -> mc_protocol::Result<()> {
            self.uuid.encode(writer)?;
            if actions & PLAYER_INFO_ACTION_ADD_PLAYER != 0 {
                self.add_player
                    .as_ref()
                    .expect("add_player action bit implies add_player")
                    .encode(writer)?;
            }
            if actions & PLAYER_INFO_ACTION_INIT_CHAT != 0 {
                let present = self.init_chat.is_some();
                present.encode(writer)?;
                if let Some(session) = &self.init_chat {
                    session.encode(writer)?;
                }
            }
            if actions & PLAYER_INFO_ACTION_UPDATE_GAMEMODE != 0 {
                self.update_gamemode
                    .as_ref()
                    .expect("update_gamemode action bit implies update_gamemode")
                    .encode(writer)?;
            }
            if actions & PLAYER_INFO_ACTION_UPDATE_LISTED != 0 {
                self.update_listed
                    .expect("update_listed action bit implies update_listed")
                    .encode(writer)?;
            }
            if actions & PLAYER_INFO_ACTION_UPDATE_LATENCY != 0 {
                self.update_latency
                    .as_ref()
                    .expect("update_latency action bit implies update_latency")
                    .encode(writer)?;
            }
            if actions & PLAYER_INFO_ACTION_UPDATE_DISPLAY_NAME != 0 {
                let present = self.update_display_name.is_some();
                present.encode(writer)?;
                if let Some(name) = &self.update_display_name {
                    name.encode(writer)?;
                }
            }
            Ok(())
        }

        fn decode_for<R: std::io::Read>(actions: u8, reader: &mut R) -> mc_protocol::Result<Self> {
            let uuid = Uuid::decode(reader)?;
            let add_player = if actions & PLAYER_INFO_ACTION_ADD_PLAYER != 0 {
                Some(AddPlayerAction::decode(reader)?)
            } else {
                None
            };
            let init_chat = if actions & PLAYER_INFO_ACTION_INIT_CHAT != 0 {
                if bool::decode(reader)? {
                    Some(ChatSession::decode(reader)?)
                } else {
                    None
                }
            } else {
                None
            };
            let update_gamemode = if actions & PLAYER_INFO_ACTION_UPDATE_GAMEMODE != 0 {
                Some(VarInt::decode(reader)?)
            } else {
                None
            };
            let update_listed = if actions & PLAYER_INFO_ACTION_UPDATE_LISTED != 0 {
                Some(bool::decode(reader)?)
            } else {
                None
            };
            let update_latency = if actions & PLAYER_INFO_ACTION_UPDATE_LATENCY != 0 {
                Some(VarInt::decode(reader)?)
            } else {
                None
            };
            let update_display_name = if actions & PLAYER_INFO_ACTION_UPDATE_DISPLAY_NAME != 0 {
                if bool::decode(reader)? {
                    Some(String::decode(reader)?)
                } else {
                    None
                }
            } else {
                None
            };
            Ok(Self {
                uuid,
                add_player,
                init_chat,
                update_gamemode,
                update_listed,
                update_latency,
                update_display_name,
            })
        }
    }

    /// Packet ID: 0x3A
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    pub struct PlayerInfoUpdate {
        pub actions: u8,
        pub entries: Vec<PlayerInfoEntry>,
    }

    impl Encode for PlayerInfoUpdate {
        fn encode<W: std::io::Write>(&self, writer: &mut W) -> mc_protocol::Result<()> {
            self.actions.encode(writer)?;
            write_varint(writer, self.entries.len() as i32)?;
            for entry in &self.entries {
                entry.encode_for(self.actions, writer)?;
            }
            Ok(())
        }
    }

    impl Decode<'_> for PlayerInfoUpdate {
        fn decode<R: std::io::Read>(reader: &mut R) -> mc_protocol::Result<Self> {
            let actions = u8::decode(reader)?;
            let count = read_varint(reader)? as usize;
            let mut entries = Vec::with_capacity(count.min(4096));
            for _ in 0..count {
                entries.push(PlayerInfoEntry::decode_for(actions, reader)?);
            }
            Ok(Self { actions, entries })
        }
    }

    impl Packet for PlayerInfoUpdate {
        const ID: i32 = 0x3A;
        const NAME: &'static str = "PlayerInfoUpdate";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x3C
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SynchronizePlayerPosition {
        pub x: f64,
        pub y: f64,
        pub z: f64,
        pub yaw: f32,
        pub pitch: f32,
        pub flags: u8,
        pub teleport_id: VarInt,
    }

    impl Packet for SynchronizePlayerPosition {
        const ID: i32 = 0x3C;
        const NAME: &'static str = "SynchronizePlayerPosition";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x3E
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct RemoveEntities {
        pub entity_ids: Vec<VarInt>,
    }

    impl Packet for RemoveEntities {
        const ID: i32 = 0x3E;
        const NAME: &'static str = "RemoveEntities";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x3F
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct RemoveEntityEffect {
        pub entity_id: VarInt,
        pub effect_id: VarInt,
    }

    impl Packet for RemoveEntityEffect {
        const ID: i32 = 0x3F;
        const NAME: &'static str = "RemoveEntityEffect";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x40. `prompt_message`'s presence is carried by
    /// `has_prompt_message`, not the generic `Option<T>` bool prefix.
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    pub struct ResourcePack {
        pub url: String,
        pub hash: String,
        pub forced: bool,
        pub has_prompt_message: bool,
        pub prompt_message: Option<String>,
    }

    impl Encode for ResourcePack {
        fn encode<W: std::io::Write>(&self, writer: &mut W) -> mc_protocol::Result<()> {
            self.url.encode(writer)?;
            self.hash.encode(writer)?;
            self.forced.encode(writer)?;
            self.has_prompt_message.encode(writer)?;
            if let Some(message) = &self.prompt_message {
                message.encode(writer)?;
            }
            Ok(())
        }
    }

    impl Decode<'_> for ResourcePack {
        fn decode<R: std::io::Read>(reader: &mut R) -> mc_protocol::Result<Self> {
            let url = String::decode(reader)?;
            let hash = String::decode(reader)?;
            let forced = bool::decode(reader)?;
            let has_prompt_message = bool::decode(reader)?;
            let prompt_message = if has_prompt_message {
                Some(String::decode(reader)?)
            } else {
                None
            };
            Ok(Self {
                url,
                hash,
                forced,
                has_prompt_message,
                prompt_message,
            })
        }
    }

    impl Packet for ResourcePack {
        const ID: i32 = 0x40;
        const NAME: &'static str = "ResourcePack";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x42
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SetHeadRotation {
        pub entity_id: VarInt,
        pub head_yaw: Angle,
    }

    impl Packet for SetHeadRotation {
        const ID: i32 = 0x42;
        const NAME: &'static str = "SetHeadRotation";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x45. `icon`'s presence is carried by `has_icon`, not the
    /// generic `Option<T>` bool prefix.
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    pub struct ServerData {
        /// JSON chat component.
        pub motd: String,
        pub has_icon: bool,
        /// Base64-encoded PNG, present only if `has_icon`.
        pub icon: Option<String>,
        pub enforces_secure_chat: bool,
    }

    impl Encode for ServerData {
        fn encode<W: std::io::Write>(&self, writer: &mut W) -> mc_protocol::Result<()> {
            self.motd.encode(writer)?;
            self.has_icon.encode(writer)?;
            if let Some(icon) = &self.icon {
                icon.encode(writer)?;
            }
            self.enforces_secure_chat.encode(writer)?;
            Ok(())
        }
    }

    impl Decode<'_> for ServerData {
        fn decode<R: std::io::Read>(reader: &mut R) -> mc_protocol::Result<Self> {
            let motd = String::decode(reader)?;
            let has_icon = bool::decode(reader)?;
            let icon = if has_icon {
                Some(String::decode(reader)?)
            } else {
                None
            };
            let enforces_secure_chat = bool::decode(reader)?;
            Ok(Self {
                motd,
                has_icon,
                icon,
                enforces_secure_chat,
            })
        }
    }

    impl Packet for ServerData {
        const ID: i32 = 0x45;
        const NAME: &'static str = "ServerData";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x47
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SetBorderCenter {
        pub x: f64,
        pub z: f64,
    }

    impl Packet for SetBorderCenter {
        const ID: i32 = 0x47;
        const NAME: &'static str = "SetBorderCenter";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x48
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SetBorderLerpSize {
        pub old_diameter: f64,
        pub new_diameter: f64,
        pub speed: VarLong,
    }

    impl Packet for SetBorderLerpSize {
        const ID: i32 = 0x48;
        const NAME: &'static str = "SetBorderLerpSize";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x49
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SetBorderSize {
        pub diameter: f64,
    }

    impl Packet for SetBorderSize {
        const ID: i32 = 0x49;
        const NAME: &'static str = "SetBorderSize";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x4A
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SetBorderWarningDelay {
        pub warning_time: VarInt,
    }

    impl Packet for SetBorderWarningDelay {
        const ID: i32 = 0x4A;
        const NAME: &'static str = "SetBorderWarningDelay";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x4B
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SetBorderWarningDistance {
        pub warning_blocks: VarInt,
    }

    impl Packet for SetBorderWarningDistance {
        const ID: i32 = 0x4B;
        const NAME: &'static str = "SetBorderWarningDistance";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x4E
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SetCenterChunk {
        pub chunk_x: VarInt,
        pub chunk_z: VarInt,
    }

    impl Packet for SetCenterChunk {
        const ID: i32 = 0x4E;
        const NAME: &'static str = "SetCenterChunk";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x52. `metadata` is the unprefixed remainder of the
    /// packet (a sequence of `{index, typed value}` entries terminated by
    /// index 0xFF) — the 28-variant value union is out of scope for this
    /// codec layer; the gamestate projector walks these bytes directly.
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    pub struct SetEntityMetadata {
        pub entity_id: VarInt,
        pub metadata: Vec<u8>,
    }

    impl Encode for SetEntityMetadata {
        fn encode<W: std::io::Write>(&self, writer: &mut W) -> mc_protocol::Result<()> {
            self.entity_id.encode(writer)?;
            writer.write_all(&self.metadata)?;
            Ok(())
        }
    }

    impl Decode<'_> for SetEntityMetadata {
        fn decode<R: std::io::Read>(reader: &mut R) -> mc_protocol::Result<Self> {
            let entity_id = VarInt::decode(reader)?;
            let mut metadata = Vec::new();
            reader.read_to_end(&mut metadata)?;
            Ok(Self { entity_id, metadata })
        }
    }

    impl Packet for SetEntityMetadata {
        const ID: i32 = 0x52;
        const NAME: &'static str = "SetEntityMetadata";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x53
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct LinkEntities {
        pub attached_entity_id: i32,
        pub holding_entity_id: i32,
    }

    impl Packet for LinkEntities {
        const ID: i32 = 0x53;
        const NAME: &'static str = "LinkEntities";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x54
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SetEntityVelocity {
        pub entity_id: VarInt,
        pub velocity_x: i16,
        pub velocity_y: i16,
        pub velocity_z: i16,
    }

    impl Packet for SetEntityVelocity {
        const ID: i32 = 0x54;
        const NAME: &'static str = "SetEntityVelocity";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x55. `equipment` is the unprefixed remainder: a sequence
    /// of `{slot, item}` entries with the top bit of `slot` signalling
    /// "more follow" — left as raw bytes for the same reason as
    /// [`SetEntityMetadata`].
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    pub struct SetEquipment {
        pub entity_id: VarInt,
        pub equipment: Vec<u8>,
    }

    impl Encode for SetEquipment {
        fn encode<W: std::io::Write>(&self, writer: &mut W) -> mc_protocol::Result<()> {
            self.entity_id.encode(writer)?;
            writer.write_all(&self.equipment)?;
            Ok(())
        }
    }

    impl Decode<'_> for SetEquipment {
        fn decode<R: std::io::Read>(reader: &mut R) -> mc_protocol::Result<Self> {
            let entity_id = VarInt::decode(reader)?;
            let mut equipment = Vec::new();
            reader.read_to_end(&mut equipment)?;
            Ok(Self { entity_id, equipment })
        }
    }

    impl Packet for SetEquipment {
        const ID: i32 = 0x55;
        const NAME: &'static str = "SetEquipment";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x6A. `properties` is the unprefixed remainder — each
    /// attribute carries a variable number of modifiers, left as raw bytes
    /// for the same reason as [`SetEntityMetadata`].
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    pub struct UpdateAttributes {
        pub entity_id: VarInt,
        pub properties: Vec<u8>,
    }

    impl Encode for UpdateAttributes {
        fn encode<W: std::io::Write>(&self, writer: &mut W) -> mc_protocol::Result<()> {
            self.entity_id.encode(writer)?;
            writer.write_all(&self.properties)?;
            Ok(())
        }
    }

    impl Decode<'_> for UpdateAttributes {
        fn decode<R: std::io::Read>(reader: &mut R) -> mc_protocol::Result<Self> {
            let entity_id = VarInt::decode(reader)?;
            let mut properties = Vec::new();
            reader.read_to_end(&mut properties)?;
            Ok(Self { entity_id, properties })
        }
    }

    impl Packet for UpdateAttributes {
        const ID: i32 = 0x6A;
        const NAME: &'static str = "UpdateAttributes";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x6B
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct FeatureFlags {
        pub feature_flags: Vec<String>,
    }

    impl Packet for FeatureFlags {
        const ID: i32 = 0x6B;
        const NAME: &'static str = "FeatureFlags";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x6C. `factor_data`'s presence is the `0x04` bit of
    /// `flags`, not the generic `Option<T>` bool prefix.
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    pub struct EntityEffect {
        pub entity_id: VarInt,
        pub effect_id: VarInt,
        pub amplifier: i8,
        pub duration: VarInt,
        pub flags: u8,
        pub factor_data: Option<Nbt>,
    }

    const ENTITY_EFFECT_HAS_FACTOR_DATA: u8 = 0x04;

    impl Encode for EntityEffect {
        fn encode<W: std::io::Write>(&self, writer: &mut W) -> mc_protocol::Result<()> {
            self.entity_id.encode(writer)?;
            self.effect_id.encode(writer)?;
            self.amplifier.encode(writer)?;
            self.duration.encode(writer)?;
            self.flags.encode(writer)?;
            if self.flags & ENTITY_EFFECT_HAS_FACTOR_DATA != 0 {
                self.factor_data
                    .as_ref()
                    .expect("factor-data flag bit implies factor_data")
                    .encode(writer)?;
            }
            Ok(())
        }
    }

    impl Decode<'_> for EntityEffect {
        fn decode<R: std::io::Read>(reader: &mut R) -> mc_protocol::Result<Self> {
            let entity_id = VarInt::decode(reader)?;
            let effect_id = VarInt::decode(reader)?;
            let amplifier = i8::decode(reader)?;
            let duration = VarInt::decode(reader)?;
            let flags = u8::decode(reader)?;
            let factor_data = if flags & ENTITY_EFFECT_HAS_FACTOR_DATA != 0 {
                Some(Nbt::decode(reader)?)
            } else {
                None
            };
            Ok(Self {
                entity_id,
                effect_id,
                amplifier,
                duration,
                flags,
                factor_data,
            })
        }
    }

    impl Packet for EntityEffect {
        const ID: i32 = 0x6C;
        const NAME: &'static str = "EntityEffect";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }
    /// Packet ID: 0x05
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct AwardStatistics;

    impl Packet for AwardStatistics {
        const ID: i32 = 0x05;
        const NAME: &'static str = "AwardStatistics";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x0B
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct BossBar;

    impl Packet for BossBar {
        const ID: i32 = 0x0B;
        const NAME: &'static str = "BossBar";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x0C
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct ChangeDifficulty;

    impl Packet for ChangeDifficulty {
        const ID: i32 = 0x0C;
        const NAME: &'static str = "ChangeDifficulty";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x0E
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct ClearTitles;

    impl Packet for ClearTitles {
        const ID: i32 = 0x0E;
        const NAME: &'static str = "ClearTitles";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x0F
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct CommandSuggestionsResponse;

    impl Packet for CommandSuggestionsResponse {
        const ID: i32 = 0x0F;
        const NAME: &'static str = "CommandSuggestionsResponse";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x10
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct Commands;

    impl Packet for Commands {
        const ID: i32 = 0x10;
        const NAME: &'static str = "Commands";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x11
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct CloseContainer {
        pub window_id: u8,
    }

    impl Packet for CloseContainer {
        const ID: i32 = 0x11;
        const NAME: &'static str = "CloseContainer";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x12
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SetContainerContent {
        pub window_id: u8,
        pub state_id: VarInt,
        pub slot_data: Vec<Option<ItemStack>>,
        pub carried_item: Option<ItemStack>,
    }

    impl Packet for SetContainerContent {
        const ID: i32 = 0x12;
        const NAME: &'static str = "SetContainerContent";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x13
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SetContainerProperty {
        pub window_id: u8,
        pub property: i16,
        pub value: i16,
    }

    impl Packet for SetContainerProperty {
        const ID: i32 = 0x13;
        const NAME: &'static str = "SetContainerProperty";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x14
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SetContainerSlot {
        pub window_id: i8,
        pub state_id: VarInt,
        pub slot: i16,
        pub slot_data: Option<ItemStack>,
    }

    impl Packet for SetContainerSlot {
        const ID: i32 = 0x14;
        const NAME: &'static str = "SetContainerSlot";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x15
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SetCooldown {
        pub item_id: VarInt,
        pub cooldown_ticks: VarInt,
    }

    impl Packet for SetCooldown {
        const ID: i32 = 0x15;
        const NAME: &'static str = "SetCooldown";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x16
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct ChatSuggestions;

    impl Packet for ChatSuggestions {
        const ID: i32 = 0x16;
        const NAME: &'static str = "ChatSuggestions";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x17
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct PluginMessage;

    impl Packet for PluginMessage {
        const ID: i32 = 0x17;
        const NAME: &'static str = "PluginMessage";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x18
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct DamageEvent;

    impl Packet for DamageEvent {
        const ID: i32 = 0x18;
        const NAME: &'static str = "DamageEvent";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x19
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct DeleteMessage;

    impl Packet for DeleteMessage {
        const ID: i32 = 0x19;
        const NAME: &'static str = "DeleteMessage";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x1B
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct DisguisedChatMessage;

    impl Packet for DisguisedChatMessage {
        const ID: i32 = 0x1B;
        const NAME: &'static str = "DisguisedChatMessage";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x20
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct OpenHorseScreen {
        pub window_id: u8,
        pub slot_count: VarInt,
        pub entity_id: i32,
    }

    impl Packet for OpenHorseScreen {
        const ID: i32 = 0x20;
        const NAME: &'static str = "OpenHorseScreen";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x21
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct HurtAnimation;

    impl Packet for HurtAnimation {
        const ID: i32 = 0x21;
        const NAME: &'static str = "HurtAnimation";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x22
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct InitializeWorldBorder;

    impl Packet for InitializeWorldBorder {
        const ID: i32 = 0x22;
        const NAME: &'static str = "InitializeWorldBorder";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x25
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct WorldEvent;

    impl Packet for WorldEvent {
        const ID: i32 = 0x25;
        const NAME: &'static str = "WorldEvent";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x26
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct Particle;

    impl Packet for Particle {
        const ID: i32 = 0x26;
        const NAME: &'static str = "Particle";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x27
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct UpdateLight;

    impl Packet for UpdateLight {
        const ID: i32 = 0x27;
        const NAME: &'static str = "UpdateLight";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x29
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct MapData;

    impl Packet for MapData {
        const ID: i32 = 0x29;
        const NAME: &'static str = "MapData";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x2A
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct MerchantOffers;

    impl Packet for MerchantOffers {
        const ID: i32 = 0x2A;
        const NAME: &'static str = "MerchantOffers";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x2E
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct MoveVehicle;

    impl Packet for MoveVehicle {
        const ID: i32 = 0x2E;
        const NAME: &'static str = "MoveVehicle";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x2F
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct OpenBook;

    impl Packet for OpenBook {
        const ID: i32 = 0x2F;
        const NAME: &'static str = "OpenBook";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x30
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct OpenScreen;

    impl Packet for OpenScreen {
        const ID: i32 = 0x30;
        const NAME: &'static str = "OpenScreen";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x31
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct OpenSignEditor;

    impl Packet for OpenSignEditor {
        const ID: i32 = 0x31;
        const NAME: &'static str = "OpenSignEditor";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x33
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct PlaceGhostRecipe;

    impl Packet for PlaceGhostRecipe {
        const ID: i32 = 0x33;
        const NAME: &'static str = "PlaceGhostRecipe";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x34
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct PlayerAbilities;

    impl Packet for PlayerAbilities {
        const ID: i32 = 0x34;
        const NAME: &'static str = "PlayerAbilities";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x35
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct PlayerChatMessage;

    impl Packet for PlayerChatMessage {
        const ID: i32 = 0x35;
        const NAME: &'static str = "PlayerChatMessage";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x36
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct EndCombat;

    impl Packet for EndCombat {
        const ID: i32 = 0x36;
        const NAME: &'static str = "EndCombat";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x37
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct EnterCombat;

    impl Packet for EnterCombat {
        const ID: i32 = 0x37;
        const NAME: &'static str = "EnterCombat";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x3B
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct LookAt;

    impl Packet for LookAt {
        const ID: i32 = 0x3B;
        const NAME: &'static str = "LookAt";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x3D
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct UpdateRecipeBook;

    impl Packet for UpdateRecipeBook {
        const ID: i32 = 0x3D;
        const NAME: &'static str = "UpdateRecipeBook";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x41
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct Respawn;

    impl Packet for Respawn {
        const ID: i32 = 0x41;
        const NAME: &'static str = "Respawn";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x43
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct UpdateSectionBlocks;

    impl Packet for UpdateSectionBlocks {
        const ID: i32 = 0x43;
        const NAME: &'static str = "UpdateSectionBlocks";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x44
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SelectAdvancementsTab;

    impl Packet for SelectAdvancementsTab {
        const ID: i32 = 0x44;
        const NAME: &'static str = "SelectAdvancementsTab";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x46
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SetActionBarText;

    impl Packet for SetActionBarText {
        const ID: i32 = 0x46;
        const NAME: &'static str = "SetActionBarText";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x4C
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SetCamera;

    impl Packet for SetCamera {
        const ID: i32 = 0x4C;
        const NAME: &'static str = "SetCamera";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x4D
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SetHeldItem;

    impl Packet for SetHeldItem {
        const ID: i32 = 0x4D;
        const NAME: &'static str = "SetHeldItem";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x4F
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SetRenderDistance;

    impl Packet for SetRenderDistance {
        const ID: i32 = 0x4F;
        const NAME: &'static str = "SetRenderDistance";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x50
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SetDefaultSpawnPosition;

    impl Packet for SetDefaultSpawnPosition {
        const ID: i32 = 0x50;
        const NAME: &'static str = "SetDefaultSpawnPosition";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x51
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct DisplayObjective;

    impl Packet for DisplayObjective {
        const ID: i32 = 0x51;
        const NAME: &'static str = "DisplayObjective";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x56
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SetExperience;

    impl Packet for SetExperience {
        const ID: i32 = 0x56;
        const NAME: &'static str = "SetExperience";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x57
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SetHealth;

    impl Packet for SetHealth {
        const ID: i32 = 0x57;
        const NAME: &'static str = "SetHealth";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x58
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct UpdateObjectives;

    impl Packet for UpdateObjectives {
        const ID: i32 = 0x58;
        const NAME: &'static str = "UpdateObjectives";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x59
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SetPassengers;

    impl Packet for SetPassengers {
        const ID: i32 = 0x59;
        const NAME: &'static str = "SetPassengers";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x5A
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct UpdateTeams;

    impl Packet for UpdateTeams {
        const ID: i32 = 0x5A;
        const NAME: &'static str = "UpdateTeams";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x5B
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct UpdateScore;

    impl Packet for UpdateScore {
        const ID: i32 = 0x5B;
        const NAME: &'static str = "UpdateScore";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x5C
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SetSimulationDistance;

    impl Packet for SetSimulationDistance {
        const ID: i32 = 0x5C;
        const NAME: &'static str = "SetSimulationDistance";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x5D
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SetSubtitleText;

    impl Packet for SetSubtitleText {
        const ID: i32 = 0x5D;
        const NAME: &'static str = "SetSubtitleText";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x5E
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct UpdateTime;

    impl Packet for UpdateTime {
        const ID: i32 = 0x5E;
        const NAME: &'static str = "UpdateTime";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x5F
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SetTitleText;

    impl Packet for SetTitleText {
        const ID: i32 = 0x5F;
        const NAME: &'static str = "SetTitleText";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x60
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SetTitleAnimationTimes;

    impl Packet for SetTitleAnimationTimes {
        const ID: i32 = 0x60;
        const NAME: &'static str = "SetTitleAnimationTimes";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x61
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct EntitySoundEffect;

    impl Packet for EntitySoundEffect {
        const ID: i32 = 0x61;
        const NAME: &'static str = "EntitySoundEffect";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x62
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SoundEffect;

    impl Packet for SoundEffect {
        const ID: i32 = 0x62;
        const NAME: &'static str = "SoundEffect";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x63
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct StopSound;

    impl Packet for StopSound {
        const ID: i32 = 0x63;
        const NAME: &'static str = "StopSound";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x64
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SystemChatMessage;

    impl Packet for SystemChatMessage {
        const ID: i32 = 0x64;
        const NAME: &'static str = "SystemChatMessage";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x65
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SetTabListHeaderAndFooter;

    impl Packet for SetTabListHeaderAndFooter {
        const ID: i32 = 0x65;
        const NAME: &'static str = "SetTabListHeaderAndFooter";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x66
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct TagQueryResponse;

    impl Packet for TagQueryResponse {
        const ID: i32 = 0x66;
        const NAME: &'static str = "TagQueryResponse";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x67
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct PickupItem;

    impl Packet for PickupItem {
        const ID: i32 = 0x67;
        const NAME: &'static str = "PickupItem";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x68
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct TeleportEntity;

    impl Packet for TeleportEntity {
        const ID: i32 = 0x68;
        const NAME: &'static str = "TeleportEntity";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x69
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct UpdateAdvancements;

    impl Packet for UpdateAdvancements {
        const ID: i32 = 0x69;
        const NAME: &'static str = "UpdateAdvancements";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x6D
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct UpdateRecipes;

    impl Packet for UpdateRecipes {
        const ID: i32 = 0x6D;
        const NAME: &'static str = "UpdateRecipes";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x6E
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct UpdateTags;

    impl Packet for UpdateTags {
        const ID: i32 = 0x6E;
        const NAME: &'static str = "UpdateTags";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Clientbound;
    }
}

pub mod serverbound {
    use super::*;

    /// Packet ID: 0x00
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct ConfirmTeleportation {
        pub teleport_id: VarInt,
    }

    impl Packet for ConfirmTeleportation {
        const ID: i32 = 0x00;
        const NAME: &'static str = "ConfirmTeleportation";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x08
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct ClientInformation {
        pub locale: String,
        pub view_distance: i8,
        pub chat_mode: VarInt,
        pub chat_colors: bool,
        pub displayed_skin_parts: u8,
        pub main_hand: VarInt,
        pub enable_text_filtering: bool,
        pub allow_server_listings: bool,
    }

    impl Packet for ClientInformation {
        const ID: i32 = 0x08;
        const NAME: &'static str = "ClientInformation";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x12
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct KeepAlive {
        pub keep_alive_id: i64,
    }

    impl Packet for KeepAlive {
        const ID: i32 = 0x12;
        const NAME: &'static str = "KeepAlive";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x14
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SetPlayerPosition {
        pub x: f64,
        pub y: f64,
        pub z: f64,
        pub on_ground: bool,
    }

    impl Packet for SetPlayerPosition {
        const ID: i32 = 0x14;
        const NAME: &'static str = "SetPlayerPosition";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x15
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SetPlayerPositionAndRotation {
        pub x: f64,
        pub y: f64,
        pub z: f64,
        pub yaw: f32,
        pub pitch: f32,
        pub on_ground: bool,
    }

    impl Packet for SetPlayerPositionAndRotation {
        const ID: i32 = 0x15;
        const NAME: &'static str = "SetPlayerPositionAndRotation";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x16
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SetPlayerRotation {
        pub yaw: f32,
        pub pitch: f32,
        pub on_ground: bool,
    }

    impl Packet for SetPlayerRotation {
        const ID: i32 = 0x16;
        const NAME: &'static str = "SetPlayerRotation";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x17
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SetPlayerOnGround {
        pub on_ground: bool,
    }

    impl Packet for SetPlayerOnGround {
        const ID: i32 = 0x17;
        const NAME: &'static str = "SetPlayerOnGround";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x20
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct PongPlay {
        pub id: i32,
    }

    impl Packet for PongPlay {
        const ID: i32 = 0x20;
        const NAME: &'static str = "PongPlay";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x2F
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SwingArm {
        pub hand: VarInt,
    }

    impl Packet for SwingArm {
        const ID: i32 = 0x2F;
        const NAME: &'static str = "SwingArm";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }
    /// Packet ID: 0x01
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct QueryBlockEntityTag;

    impl Packet for QueryBlockEntityTag {
        const ID: i32 = 0x01;
        const NAME: &'static str = "QueryBlockEntityTag";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x02
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct ChangeDifficulty;

    impl Packet for ChangeDifficulty {
        const ID: i32 = 0x02;
        const NAME: &'static str = "ChangeDifficulty";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x03
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct MessageAcknowledgment;

    impl Packet for MessageAcknowledgment {
        const ID: i32 = 0x03;
        const NAME: &'static str = "MessageAcknowledgment";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x04
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct ChatCommand;

    impl Packet for ChatCommand {
        const ID: i32 = 0x04;
        const NAME: &'static str = "ChatCommand";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x05
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct ChatMessage;

    impl Packet for ChatMessage {
        const ID: i32 = 0x05;
        const NAME: &'static str = "ChatMessage";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x06
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct PlayerSession;

    impl Packet for PlayerSession {
        const ID: i32 = 0x06;
        const NAME: &'static str = "PlayerSession";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x07
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct ClientCommand;

    impl Packet for ClientCommand {
        const ID: i32 = 0x07;
        const NAME: &'static str = "ClientCommand";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x09
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct CommandSuggestionsRequest;

    impl Packet for CommandSuggestionsRequest {
        const ID: i32 = 0x09;
        const NAME: &'static str = "CommandSuggestionsRequest";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x0A
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct ClickContainerButton;

    impl Packet for ClickContainerButton {
        const ID: i32 = 0x0A;
        const NAME: &'static str = "ClickContainerButton";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x0B
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct ClickContainer;

    impl Packet for ClickContainer {
        const ID: i32 = 0x0B;
        const NAME: &'static str = "ClickContainer";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x0C
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct CloseContainer;

    impl Packet for CloseContainer {
        const ID: i32 = 0x0C;
        const NAME: &'static str = "CloseContainer";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x0D
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct PluginMessage;

    impl Packet for PluginMessage {
        const ID: i32 = 0x0D;
        const NAME: &'static str = "PluginMessage";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x0E
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct EditBook;

    impl Packet for EditBook {
        const ID: i32 = 0x0E;
        const NAME: &'static str = "EditBook";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x0F
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct QueryEntityTag;

    impl Packet for QueryEntityTag {
        const ID: i32 = 0x0F;
        const NAME: &'static str = "QueryEntityTag";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x10
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct Interact;

    impl Packet for Interact {
        const ID: i32 = 0x10;
        const NAME: &'static str = "Interact";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x11
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct JigsawGenerate;

    impl Packet for JigsawGenerate {
        const ID: i32 = 0x11;
        const NAME: &'static str = "JigsawGenerate";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x13
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct LockDifficulty;

    impl Packet for LockDifficulty {
        const ID: i32 = 0x13;
        const NAME: &'static str = "LockDifficulty";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x18
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct MoveVehicle;

    impl Packet for MoveVehicle {
        const ID: i32 = 0x18;
        const NAME: &'static str = "MoveVehicle";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x19
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct PaddleBoat;

    impl Packet for PaddleBoat {
        const ID: i32 = 0x19;
        const NAME: &'static str = "PaddleBoat";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x1A
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct PickItem;

    impl Packet for PickItem {
        const ID: i32 = 0x1A;
        const NAME: &'static str = "PickItem";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x1B
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct PlaceRecipe;

    impl Packet for PlaceRecipe {
        const ID: i32 = 0x1B;
        const NAME: &'static str = "PlaceRecipe";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x1C
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct PlayerAbilities;

    impl Packet for PlayerAbilities {
        const ID: i32 = 0x1C;
        const NAME: &'static str = "PlayerAbilities";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x1D
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct PlayerAction;

    impl Packet for PlayerAction {
        const ID: i32 = 0x1D;
        const NAME: &'static str = "PlayerAction";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x1E
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct PlayerCommand;

    impl Packet for PlayerCommand {
        const ID: i32 = 0x1E;
        const NAME: &'static str = "PlayerCommand";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x1F
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct PlayerInput;

    impl Packet for PlayerInput {
        const ID: i32 = 0x1F;
        const NAME: &'static str = "PlayerInput";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x21
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct ChangeRecipeBookSettings;

    impl Packet for ChangeRecipeBookSettings {
        const ID: i32 = 0x21;
        const NAME: &'static str = "ChangeRecipeBookSettings";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x22
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SetSeenRecipe;

    impl Packet for SetSeenRecipe {
        const ID: i32 = 0x22;
        const NAME: &'static str = "SetSeenRecipe";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x23
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct RenameItem;

    impl Packet for RenameItem {
        const ID: i32 = 0x23;
        const NAME: &'static str = "RenameItem";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x24
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct ResourcePack;

    impl Packet for ResourcePack {
        const ID: i32 = 0x24;
        const NAME: &'static str = "ResourcePack";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x25
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SeenAdvancements;

    impl Packet for SeenAdvancements {
        const ID: i32 = 0x25;
        const NAME: &'static str = "SeenAdvancements";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x26
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SelectTrade;

    impl Packet for SelectTrade {
        const ID: i32 = 0x26;
        const NAME: &'static str = "SelectTrade";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x27
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SetBeaconEffect;

    impl Packet for SetBeaconEffect {
        const ID: i32 = 0x27;
        const NAME: &'static str = "SetBeaconEffect";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x28
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SetHeldItem;

    impl Packet for SetHeldItem {
        const ID: i32 = 0x28;
        const NAME: &'static str = "SetHeldItem";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x29
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct ProgramCommandBlock;

    impl Packet for ProgramCommandBlock {
        const ID: i32 = 0x29;
        const NAME: &'static str = "ProgramCommandBlock";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x2A
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct ProgramCommandBlockMinecart;

    impl Packet for ProgramCommandBlockMinecart {
        const ID: i32 = 0x2A;
        const NAME: &'static str = "ProgramCommandBlockMinecart";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x2B
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct SetCreativeModeSlot;

    impl Packet for SetCreativeModeSlot {
        const ID: i32 = 0x2B;
        const NAME: &'static str = "SetCreativeModeSlot";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x2C
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct ProgramJigsawBlock;

    impl Packet for ProgramJigsawBlock {
        const ID: i32 = 0x2C;
        const NAME: &'static str = "ProgramJigsawBlock";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x2D
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct ProgramStructureBlock;

    impl Packet for ProgramStructureBlock {
        const ID: i32 = 0x2D;
        const NAME: &'static str = "ProgramStructureBlock";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x2E
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct UpdateSign;

    impl Packet for UpdateSign {
        const ID: i32 = 0x2E;
        const NAME: &'static str = "UpdateSign";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x30
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct TeleportToEntity;

    impl Packet for TeleportToEntity {
        const ID: i32 = 0x30;
        const NAME: &'static str = "TeleportToEntity";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x31
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct UseItemOn;

    impl Packet for UseItemOn {
        const ID: i32 = 0x31;
        const NAME: &'static str = "UseItemOn";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x32
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct UseItem;

    impl Packet for UseItem {
        const ID: i32 = 0x32;
        const NAME: &'static str = "UseItem";
        const STATE: State = State::Play;
        const DIRECTION: Direction = Direction::Serverbound;
    }
}
