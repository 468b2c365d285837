//! The gamestate aggregate and the projector that folds Play packets into
//! it. Entities, chunks and roster entries live in [`LinkedList`]s so the
//! projector's frequent positional removals (entity despawn, chunk
//! eviction) stay O(1).

use mc_data::GameVersion;
use mc_protocol::palette::{read_paletted_container, PaletteKind};
use mc_protocol::{Decode, ItemStack, Position, Uuid};
use std::collections::BTreeMap;
use std::io::{Cursor, Read};
use std::sync::Arc;

use crate::error::Result;
use crate::events::{Event, EventTable};
use crate::list::LinkedList;
use mc_packets::play::clientbound as cb;

pub const SECTIONS_PER_CHUNK: usize = 24;
pub const BLOCKS_PER_SECTION: usize = 4096;
pub const BIOMES_PER_SECTION: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub i32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkPos(pub i32, pub i32);

#[derive(Debug, Clone, Default)]
pub struct Entity {
    pub id: i32,
    pub uuid: Uuid,
    pub type_index: i32,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub pitch: u8,
    pub yaw: u8,
    pub head_yaw: u8,
    pub on_ground: bool,
    pub velocity_x: f32,
    pub velocity_y: f32,
    pub velocity_z: f32,
    pub linked_to: Option<i32>,
}

/// A single block within a chunk section.
#[derive(Debug, Clone)]
pub struct Block {
    pub state_id: u32,
    pub stage: u8,
    pub block_entity: Option<Vec<u8>>,
}

#[derive(Debug, Clone, Default)]
pub struct Section {
    pub non_air_count: i16,
    pub blocks: Vec<Option<Block>>,
    pub biomes: [u32; BIOMES_PER_SECTION],
}

impl Section {
    fn empty() -> Self {
        Self {
            non_air_count: 0,
            blocks: vec![None; BLOCKS_PER_SECTION],
            biomes: [0; BIOMES_PER_SECTION],
        }
    }
}

#[derive(Debug, Clone)]
pub struct Chunk {
    pub x: i32,
    pub z: i32,
    pub sections: Vec<Section>,
}

/// An open non-player inventory (chest, furnace, horse, …). The player's
/// own inventory (window id 0) is always open and lives on [`Gamestate`]
/// directly instead of here.
#[derive(Debug, Clone, Default)]
pub struct Container {
    pub id: u8,
    pub slot_count: usize,
    pub slots: Vec<Option<ItemStack>>,
    pub properties: BTreeMap<i16, i16>,
}

/// The digging status a pending block change was recorded under, mirrored
/// from the serverbound Player Action packet's `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiggingStatus {
    #[default]
    Started,
    Cancelled,
    Finished,
}

#[derive(Debug, Clone, Default)]
pub struct Player {
    pub entity_id: i32,
    pub gamemode: u8,
    pub previous_gamemode: i8,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub yaw: f32,
    pub pitch: f32,
    pub health: f32,
}

#[derive(Debug, Clone, Default)]
pub struct RosterEntry {
    pub uuid: Uuid,
    pub name: String,
    pub gamemode: i32,
    pub listed: bool,
    pub ping_ms: i32,
    pub display_name: Option<String>,
}

#[derive(Debug, Default)]
pub struct PendingBlockChange {
    pub sequence_id: i32,
    pub location: Position,
    pub status: DiggingStatus,
}

/// The full client-visible world state for one Play session.
#[derive(Default)]
pub struct Gamestate {
    pub player: Player,
    pub world_age: i64,
    pub time_of_day: i64,
    pub hardcore: bool,
    pub dimension_names: Vec<String>,
    pub dimension_type: String,
    pub dimension_name: String,
    pub hashed_seed: i64,
    pub view_distance: i32,
    pub simulation_distance: i32,
    pub login_play_seen: bool,
    pub entities: LinkedList<Entity>,
    pub chunks: LinkedList<Chunk>,
    pub pending_block_changes: Vec<PendingBlockChange>,
    pub roster: LinkedList<RosterEntry>,
    pub current_chunk: Option<ChunkPos>,
    pub feature_flags: Vec<String>,
    pub server_motd: String,
    pub player_inventory: Vec<Option<ItemStack>>,
    pub open_container: Option<Container>,
    pub carried_item: Option<ItemStack>,
}

impl Gamestate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id.0)
    }

    #[must_use]
    pub fn chunk(&self, pos: ChunkPos) -> Option<&Chunk> {
        self.chunks.iter().find(|c| c.x == pos.0 && c.z == pos.1)
    }

    fn chunk_mut(&mut self, pos: ChunkPos) -> Option<&mut Chunk> {
        self.chunks.find_mut(|c| c.x == pos.0 && c.z == pos.1)
    }
}

/// Applies one Play-state packet to `gamestate`, firing events as it goes.
/// `raw_packet_id` and `body` are the already-framed packet; `version`
/// resolves numeric ids the packet carries to textual identifiers.
pub fn apply_packet(
    packet_id: i32,
    body: &[u8],
    gamestate: &mut Gamestate,
    version: &Arc<GameVersion>,
    events: &mut EventTable,
) -> Result<()> {
    use mc_protocol::Packet as _;

    let mut cursor = Cursor::new(body);

    match packet_id {
        id if id == cb::SpawnEntity::ID => {
            let pkt = cb::SpawnEntity::decode(&mut cursor)?;
            let entity = Entity {
                id: pkt.entity_id.0,
                uuid: pkt.entity_uuid,
                type_index: pkt.entity_type.0,
                x: pkt.x,
                y: pkt.y,
                z: pkt.z,
                pitch: pkt.pitch.0,
                yaw: pkt.yaw.0,
                head_yaw: pkt.head_yaw.0,
                on_ground: false,
                velocity_x: f32::from(pkt.velocity_x) / 8000.0,
                velocity_y: f32::from(pkt.velocity_y) / 8000.0,
                velocity_z: f32::from(pkt.velocity_z) / 8000.0,
                linked_to: None,
            };
            let id = entity.id;
            gamestate.entities.push_back(entity);
            events.fire(Event::SpawnEntity { entity_id: id })?;
        }
        id if id == cb::SpawnPlayer::ID => {
            let pkt = cb::SpawnPlayer::decode(&mut cursor)?;
            let entity = Entity {
                id: pkt.entity_id.0,
                uuid: pkt.player_uuid,
                x: pkt.x,
                y: pkt.y,
                z: pkt.z,
                pitch: pkt.pitch.0,
                yaw: pkt.yaw.0,
                ..Default::default()
            };
            let id = entity.id;
            gamestate.entities.push_back(entity);
            events.fire(Event::SpawnEntity { entity_id: id })?;
        }
        id if id == cb::RemoveEntities::ID => {
            let pkt = cb::RemoveEntities::decode(&mut cursor)?;
            for entity_id in pkt.entity_ids {
                remove_entity_by_id(gamestate, entity_id.0);
                events.fire(Event::RemoveEntity { entity_id: entity_id.0 })?;
            }
        }
        id if id == cb::UpdateEntityPosition::ID => {
            let pkt = cb::UpdateEntityPosition::decode(&mut cursor)?;
            mutate_entity(gamestate, pkt.entity_id.0, |e| {
                e.x += f64::from(pkt.delta_x) / 4096.0;
                e.y += f64::from(pkt.delta_y) / 4096.0;
                e.z += f64::from(pkt.delta_z) / 4096.0;
                e.on_ground = pkt.on_ground;
            });
        }
        id if id == cb::UpdateEntityPositionAndRotation::ID => {
            let pkt = cb::UpdateEntityPositionAndRotation::decode(&mut cursor)?;
            mutate_entity(gamestate, pkt.entity_id.0, |e| {
                e.x += f64::from(pkt.delta_x) / 4096.0;
                e.y += f64::from(pkt.delta_y) / 4096.0;
                e.z += f64::from(pkt.delta_z) / 4096.0;
                e.yaw = pkt.yaw.0;
                e.pitch = pkt.pitch.0;
                e.on_ground = pkt.on_ground;
            });
        }
        id if id == cb::UpdateEntityRotation::ID => {
            let pkt = cb::UpdateEntityRotation::decode(&mut cursor)?;
            mutate_entity(gamestate, pkt.entity_id.0, |e| {
                e.yaw = pkt.yaw.0;
                e.pitch = pkt.pitch.0;
                e.on_ground = pkt.on_ground;
            });
        }
        id if id == cb::SetHeadRotation::ID => {
            let pkt = cb::SetHeadRotation::decode(&mut cursor)?;
            mutate_entity(gamestate, pkt.entity_id.0, |e| e.head_yaw = pkt.head_yaw.0);
        }
        id if id == cb::SetEntityVelocity::ID => {
            let pkt = cb::SetEntityVelocity::decode(&mut cursor)?;
            mutate_entity(gamestate, pkt.entity_id.0, |e| {
                e.velocity_x = f32::from(pkt.velocity_x) / 8000.0;
                e.velocity_y = f32::from(pkt.velocity_y) / 8000.0;
                e.velocity_z = f32::from(pkt.velocity_z) / 8000.0;
            });
        }
        id if id == cb::LinkEntities::ID => {
            let pkt = cb::LinkEntities::decode(&mut cursor)?;
            mutate_entity(gamestate, pkt.attached_entity_id, |e| {
                e.linked_to = Some(pkt.holding_entity_id);
            });
        }
        id if id == cb::EntityEvent::ID => {
            let pkt = cb::EntityEvent::decode(&mut cursor)?;
            events.fire(Event::EntityEvent {
                entity_id: pkt.entity_id,
                status: pkt.entity_status,
            })?;
        }
        id if id == cb::EntityEffect::ID => {
            let pkt = cb::EntityEffect::decode(&mut cursor)?;
            events.fire(Event::EntityEffect {
                entity_id: pkt.entity_id.0,
                effect_id: pkt.effect_id.0,
            })?;
        }
        id if id == cb::RemoveEntityEffect::ID => {
            let pkt = cb::RemoveEntityEffect::decode(&mut cursor)?;
            events.fire(Event::RemoveEntityEffect {
                entity_id: pkt.entity_id.0,
                effect_id: pkt.effect_id.0,
            })?;
        }
        id if id == cb::AcknowledgeBlockChange::ID => {
            let pkt = cb::AcknowledgeBlockChange::decode(&mut cursor)?;
            if let Some(position) = gamestate
                .pending_block_changes
                .iter()
                .position(|p| p.sequence_id == pkt.sequence_id.0)
            {
                let pending = gamestate.pending_block_changes.remove(position);
                if pending.status == DiggingStatus::Finished {
                    if let Some(slot) = block_slot_mut(gamestate, pending.location) {
                        *slot = None;
                    }
                }
            }
            events.fire(Event::AcknowledgeBlockChange {
                sequence_id: pkt.sequence_id.0,
            })?;
        }
        id if id == cb::BlockUpdate::ID => {
            let pkt = cb::BlockUpdate::decode(&mut cursor)?;
            events.fire(Event::BlockUpdate {
                location: pkt.location,
                state_id: pkt.block_id.0,
            })?;
        }
        id if id == cb::BlockAction::ID => {
            let pkt = cb::BlockAction::decode(&mut cursor)?;
            events.fire(Event::BlockAction {
                location: pkt.location,
                action_id: pkt.action_id,
                action_param: pkt.action_param,
            })?;
        }
        id if id == cb::SetBlockDestroyStage::ID => {
            let pkt = cb::SetBlockDestroyStage::decode(&mut cursor)?;
            if let Some(slot) = block_slot_mut(gamestate, pkt.location) {
                if pkt.destroy_stage < 10 {
                    if let Some(block) = slot {
                        block.stage = pkt.destroy_stage;
                    }
                } else {
                    *slot = None;
                }
            }
            events.fire(Event::SetBlockDestroyStage {
                location: pkt.location,
                destroy_stage: pkt.destroy_stage,
            })?;
        }
        id if id == cb::BlockEntityData::ID => {
            let pkt = cb::BlockEntityData::decode(&mut cursor)?;
            if let Some(Some(block)) = block_slot_mut(gamestate, pkt.location) {
                block.block_entity = Some(pkt.data.0.clone());
            }
            events.fire(Event::BlockEntityData { location: pkt.location })?;
        }
        id if id == cb::Explosion::ID => {
            let pkt = cb::Explosion::decode(&mut cursor)?;
            let base_x = pkt.x.floor() as i32;
            let base_y = pkt.y.floor() as i32;
            let base_z = pkt.z.floor() as i32;
            for record in &pkt.records {
                let location = Position::new(
                    base_x + i32::from(record.dx),
                    (base_y + i32::from(record.dy)) as i16,
                    base_z + i32::from(record.dz),
                );
                if let Some(slot) = block_slot_mut(gamestate, location) {
                    *slot = None;
                }
            }
            events.fire(Event::Explosion {
                x: pkt.x,
                y: pkt.y,
                z: pkt.z,
                removed_blocks: pkt.records.len(),
            })?;
        }
        id if id == cb::ChunkDataAndUpdateLight::ID => {
            let pkt = cb::ChunkDataAndUpdateLight::decode(&mut cursor)?;
            let chunk = decode_chunk_sections(&pkt, version)?;
            let x = chunk.x;
            let z = chunk.z;
            gamestate.chunks.push_back(chunk);
            events.fire(Event::ChunkLoad { x, z })?;
        }
        id if id == cb::ChunkBiomes::ID => {
            let pkt = cb::ChunkBiomes::decode(&mut cursor)?;
            for entry in pkt.entries {
                if let Some(chunk) = gamestate.chunk_mut(ChunkPos(entry.chunk_x, entry.chunk_z)) {
                    let mut inner = Cursor::new(&entry.data.0[..]);
                    for section in &mut chunk.sections {
                        if let Ok(biomes) =
                            read_paletted_container(&mut inner, PaletteKind::biomes(version.biomes.len()))
                        {
                            for (i, slot) in section.biomes.iter_mut().enumerate() {
                                *slot = biomes.resolve_at(i.min(BIOMES_PER_SECTION - 1));
                            }
                        }
                    }
                }
            }
        }
        id if id == cb::UnloadChunk::ID => {
            let pkt = cb::UnloadChunk::decode(&mut cursor)?;
            remove_chunk(gamestate, ChunkPos(pkt.chunk_x, pkt.chunk_z));
            events.fire(Event::ChunkUnload {
                x: pkt.chunk_x,
                z: pkt.chunk_z,
            })?;
        }
        id if id == cb::SetCenterChunk::ID => {
            let pkt = cb::SetCenterChunk::decode(&mut cursor)?;
            gamestate.current_chunk = Some(ChunkPos(pkt.chunk_x.0, pkt.chunk_z.0));
            evict_out_of_view_chunks(gamestate, pkt.chunk_x.0, pkt.chunk_z.0);
        }
        id if id == cb::LoginPlay::ID => {
            let pkt = cb::LoginPlay::decode(&mut cursor)?;
            gamestate.player.entity_id = pkt.entity_id;
            gamestate.player.gamemode = pkt.gamemode;
            gamestate.player.previous_gamemode = pkt.previous_gamemode;
            gamestate.hardcore = pkt.is_hardcore;
            gamestate.dimension_names = pkt.dimension_names;
            gamestate.dimension_type = pkt.dimension_type;
            gamestate.dimension_name = pkt.dimension_name;
            gamestate.hashed_seed = pkt.hashed_seed;
            gamestate.view_distance = pkt.view_distance.0;
            gamestate.simulation_distance = pkt.simulation_distance.0;
            gamestate.login_play_seen = true;
            events.fire(Event::LoginPlay)?;
        }
        id if id == cb::PlayerInfoUpdate::ID => {
            let pkt = cb::PlayerInfoUpdate::decode(&mut cursor)?;
            for entry in pkt.entries {
                apply_player_info_entry(gamestate, entry);
            }
        }
        id if id == cb::PlayerInfoRemove::ID => {
            let pkt = cb::PlayerInfoRemove::decode(&mut cursor)?;
            for uuid in pkt.uuids {
                gamestate.roster.retain_matching(|r| r.uuid != uuid);
            }
        }
        id if id == cb::GameEvent::ID => {
            let pkt = cb::GameEvent::decode(&mut cursor)?;
            events.fire_game_event(pkt.event, pkt.value)?;
        }
        id if id == cb::CombatDeath::ID => {
            let pkt = cb::CombatDeath::decode(&mut cursor)?;
            events.fire(Event::CombatDeath {
                message: pkt.message,
            })?;
        }
        id if id == cb::FeatureFlags::ID => {
            let pkt = cb::FeatureFlags::decode(&mut cursor)?;
            gamestate.feature_flags = pkt.feature_flags;
        }
        id if id == cb::ServerData::ID => {
            let pkt = cb::ServerData::decode(&mut cursor)?;
            gamestate.server_motd = pkt.motd;
        }
        id if id == cb::ResourcePack::ID => {
            let pkt = cb::ResourcePack::decode(&mut cursor)?;
            events.fire(Event::ResourcePack { url: pkt.url })?;
        }
        id if id == cb::CloseContainer::ID => {
            let pkt = cb::CloseContainer::decode(&mut cursor)?;
            if gamestate.open_container.as_ref().map(|c| c.id) == Some(pkt.window_id) {
                gamestate.open_container = None;
            }
            events.fire(Event::ContainerUpdate { window_id: pkt.window_id })?;
        }
        id if id == cb::SetContainerContent::ID => {
            let pkt = cb::SetContainerContent::decode(&mut cursor)?;
            if pkt.window_id == 0 {
                gamestate.player_inventory = pkt.slot_data;
            } else {
                let container = ensure_open_container(gamestate, pkt.window_id);
                container.slot_count = pkt.slot_data.len();
                container.slots = pkt.slot_data;
            }
            gamestate.carried_item = pkt.carried_item;
            events.fire(Event::ContainerUpdate { window_id: pkt.window_id })?;
        }
        id if id == cb::SetContainerProperty::ID => {
            let pkt = cb::SetContainerProperty::decode(&mut cursor)?;
            if pkt.window_id != 0 {
                let container = ensure_open_container(gamestate, pkt.window_id);
                container.properties.insert(pkt.property, pkt.value);
            }
            events.fire(Event::ContainerUpdate { window_id: pkt.window_id })?;
        }
        id if id == cb::SetContainerSlot::ID => {
            let pkt = cb::SetContainerSlot::decode(&mut cursor)?;
            if pkt.window_id < 0 {
                gamestate.carried_item = pkt.slot_data;
            } else if pkt.window_id == 0 {
                set_slot(&mut gamestate.player_inventory, pkt.slot.max(0) as usize, pkt.slot_data);
            } else {
                let container = ensure_open_container(gamestate, pkt.window_id as u8);
                set_slot(&mut container.slots, pkt.slot.max(0) as usize, pkt.slot_data);
                container.slot_count = container.slots.len();
            }
            events.fire(Event::ContainerUpdate {
                window_id: pkt.window_id.max(0) as u8,
            })?;
        }
        id if id == cb::SetCooldown::ID => {
            let pkt = cb::SetCooldown::decode(&mut cursor)?;
            events.fire(Event::SetCooldown {
                item_id: pkt.item_id.0,
                cooldown_ticks: pkt.cooldown_ticks.0,
            })?;
        }
        id if id == cb::OpenHorseScreen::ID => {
            let pkt = cb::OpenHorseScreen::decode(&mut cursor)?;
            let slot_count = pkt.slot_count.0.max(0) as usize;
            gamestate.open_container = Some(Container {
                id: pkt.window_id,
                slot_count,
                slots: vec![None; slot_count],
                properties: BTreeMap::new(),
            });
            events.fire(Event::ContainerUpdate { window_id: pkt.window_id })?;
        }
        id if id == cb::SetBorderCenter::ID
            || id == cb::SetBorderSize::ID
            || id == cb::SetBorderLerpSize::ID
            || id == cb::SetBorderWarningDelay::ID
            || id == cb::SetBorderWarningDistance::ID =>
        {
            events.fire(Event::WorldBorderChanged)?;
        }
        _ => {
            // Cold path: boss bar, titles, advancements, recipes, tags,
            // plugin messages, sound effects, particle data beyond id.
            // Already bounded by the frame; no shape-specific decode is
            // needed. A registered raw-packet hook still sees it.
            events.fire_raw(packet_id, body)?;
        }
    }

    Ok(())
}

/// Locates the block slot at a world position, if its chunk and section are
/// loaded. `location.y` is the full build-height coordinate (-64..320 at
/// this revision); section index and local coordinates are derived from it
/// the same way [`decode_chunk_sections`] derives them for block entities.
fn block_slot_mut(gamestate: &mut Gamestate, location: Position) -> Option<&mut Option<Block>> {
    let chunk_pos = ChunkPos(location.x >> 4, location.z >> 4);
    let section_index = ((i32::from(location.y) + 64) >> 4) as usize;
    let local_x = (location.x & 0x0F) as usize;
    let local_z = (location.z & 0x0F) as usize;
    let local_y = i32::from(location.y).rem_euclid(16) as usize;
    let index = (local_y * 16 + local_z) * 16 + local_x;

    let chunk = gamestate.chunk_mut(chunk_pos)?;
    let section = chunk.sections.get_mut(section_index)?;
    section.blocks.get_mut(index)
}

/// Returns the currently open container, replacing it with a fresh one if
/// none is open or a different window is tracked.
fn ensure_open_container(gamestate: &mut Gamestate, window_id: u8) -> &mut Container {
    if gamestate.open_container.as_ref().is_some_and(|c| c.id != window_id) {
        gamestate.open_container = None;
    }
    gamestate.open_container.get_or_insert_with(|| Container {
        id: window_id,
        ..Default::default()
    })
}

fn set_slot(slots: &mut Vec<Option<ItemStack>>, index: usize, item: Option<ItemStack>) {
    if index >= slots.len() {
        slots.resize_with(index + 1, || None);
    }
    slots[index] = item;
}

fn mutate_entity(gamestate: &mut Gamestate, entity_id: i32, f: impl FnOnce(&mut Entity)) {
    if let Some(entity) = gamestate.entities.find_mut(|e| e.id == entity_id) {
        f(entity);
    }
}

fn remove_entity_by_id(gamestate: &mut Gamestate, entity_id: i32) {
    gamestate.entities.retain_matching(|e| e.id != entity_id);
}

fn remove_chunk(gamestate: &mut Gamestate, pos: ChunkPos) {
    gamestate.chunks.retain_matching(|c| c.x != pos.0 || c.z != pos.1);
}

fn evict_out_of_view_chunks(gamestate: &mut Gamestate, center_x: i32, center_z: i32) {
    let view = gamestate.view_distance.max(0);
    gamestate
        .chunks
        .retain_matching(|c| (c.x - center_x).abs() <= view && (c.z - center_z).abs() <= view);
}

fn apply_player_info_entry(gamestate: &mut Gamestate, entry: cb::PlayerInfoEntry) {
    let existing = gamestate.roster.iter().position(|r| r.uuid == entry.uuid);
    if existing.is_none() {
        gamestate.roster.push_back(RosterEntry {
            uuid: entry.uuid,
            ..Default::default()
        });
    }
    if let Some(slot) = gamestate.roster.find_mut(|r| r.uuid == entry.uuid) {
        if let Some(add) = &entry.add_player {
            slot.name = add.name.clone();
        }
        if let Some(gamemode) = entry.update_gamemode {
            slot.gamemode = gamemode.0;
        }
        if let Some(listed) = entry.update_listed {
            slot.listed = listed;
        }
        if let Some(latency) = entry.update_latency {
            slot.ping_ms = latency.0;
        }
        if let Some(display_name) = &entry.update_display_name {
            slot.display_name = Some(display_name.clone());
        }
    }
}

fn decode_chunk_sections(pkt: &cb::ChunkDataAndUpdateLight, version: &Arc<GameVersion>) -> Result<Chunk> {
    let mut sections = Vec::with_capacity(SECTIONS_PER_CHUNK);
    let mut cursor = Cursor::new(&pkt.sections.0[..]);

    while sections.len() < SECTIONS_PER_CHUNK {
        let mut count_buf = [0u8; 2];
        if cursor.read_exact(&mut count_buf).is_err() {
            break;
        }
        let non_air_count = i16::from_be_bytes(count_buf);

        let block_container = read_paletted_container(
            &mut cursor,
            PaletteKind::blocks(version.block_states.len().max(1)),
        )?;
        let biome_container =
            read_paletted_container(&mut cursor, PaletteKind::biomes(version.biomes.len().max(1)))?;

        let mut section = Section::empty();
        section.non_air_count = non_air_count;
        for i in 0..BLOCKS_PER_SECTION {
            let state_id = block_container.resolve_at(i);
            let is_air = version.is_air(state_id);
            section.blocks[i] = if is_air {
                None
            } else {
                Some(Block {
                    state_id,
                    stage: 0,
                    block_entity: None,
                })
            };
        }
        for i in 0..BIOMES_PER_SECTION {
            section.biomes[i] = biome_container.resolve_at(i);
        }
        sections.push(section);
    }

    for entry in &pkt.block_entities {
        let y_to_section = ((i32::from(entry.y) + 64) >> 4) as usize;
        if let Some(section) = sections.get_mut(y_to_section) {
            let local_x = (entry.packed_xz >> 4) as usize;
            let local_z = (entry.packed_xz & 0x0F) as usize;
            let local_y = (i32::from(entry.y).rem_euclid(16)) as usize;
            let index = (local_y * 16 + local_z) * 16 + local_x;
            if let Some(Some(block)) = section.blocks.get_mut(index) {
                block.block_entity = Some(entry.data.0.clone());
            }
        }
    }

    Ok(Chunk {
        x: pkt.chunk_x,
        z: pkt.chunk_z,
        sections,
    })
}
