//! Synchronous, same-thread event dispatch. Each domain event has one
//! optional callback slot; callbacks return `i32` where negative aborts
//! processing of the current packet (surfaced as
//! [`ClientError::CallbackAborted`]) and non-negative continues.

use mc_protocol::Position;

use crate::error::{ClientError, Result};

/// One fired domain event. Mirrors the gamestate projector's dispatch
/// table in `gamestate::apply_packet`.
#[derive(Debug, Clone)]
pub enum Event {
    SpawnEntity { entity_id: i32 },
    RemoveEntity { entity_id: i32 },
    EntityEvent { entity_id: i32, status: i8 },
    EntityEffect { entity_id: i32, effect_id: i32 },
    RemoveEntityEffect { entity_id: i32, effect_id: i32 },
    AcknowledgeBlockChange { sequence_id: i32 },
    BlockUpdate { location: Position, state_id: i32 },
    BlockAction { location: Position, action_id: u8, action_param: u8 },
    SetBlockDestroyStage { location: Position, destroy_stage: u8 },
    BlockEntityData { location: Position },
    Explosion { x: f64, y: f64, z: f64, removed_blocks: usize },
    ContainerUpdate { window_id: u8 },
    SetCooldown { item_id: i32, cooldown_ticks: i32 },
    ChunkLoad { x: i32, z: i32 },
    ChunkUnload { x: i32, z: i32 },
    LoginPlay,
    CombatDeath { message: String },
    ResourcePack { url: String },
    WorldBorderChanged,
    Disconnected { reason: String },
}

type Callback = Box<dyn FnMut(&Event) -> i32>;
type GameEventCallback = Box<dyn FnMut(u8, f32) -> i32>;
type RawCallback = Box<dyn FnMut(i32, &[u8]) -> i32>;

/// Table of optional callbacks, one slot per event kind, plus a 16-entry
/// slot array for Game-Event sub-ids and a catch-all for cold-path
/// packets that have no shape-specific [`Event`] variant.
#[derive(Default)]
pub struct EventTable {
    generic: Vec<Callback>,
    game_event: [Option<GameEventCallback>; 16],
    raw: Option<RawCallback>,
}

impl EventTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback invoked for every fired [`Event`]. Handlers run
    /// in registration order; the first to return negative aborts the
    /// remaining handlers and the packet that triggered them.
    pub fn on_event(&mut self, handler: impl FnMut(&Event) -> i32 + 'static) {
        self.generic.push(Box::new(handler));
    }

    /// Register a callback for a specific Game-Event sub-id (0..16).
    pub fn on_game_event(&mut self, sub_id: u8, handler: impl FnMut(u8, f32) -> i32 + 'static) {
        if let Some(slot) = self.game_event.get_mut(sub_id as usize) {
            *slot = Some(Box::new(handler));
        }
    }

    /// Register a callback for packets with no shape-specific decode
    /// (boss bar, titles, advancements, recipes, tags, plugin messages,
    /// sound effects, particle data beyond id). Still receives the raw,
    /// already-framed payload.
    pub fn on_raw(&mut self, handler: impl FnMut(i32, &[u8]) -> i32 + 'static) {
        self.raw = Some(Box::new(handler));
    }

    pub(crate) fn fire(&mut self, event: Event) -> Result<()> {
        for handler in &mut self.generic {
            if handler(&event) < 0 {
                return Err(ClientError::CallbackAborted);
            }
        }
        Ok(())
    }

    pub(crate) fn fire_game_event(&mut self, sub_id: u8, value: f32) -> Result<()> {
        if let Some(Some(handler)) = self.game_event.get_mut(sub_id as usize) {
            if handler(sub_id, value) < 0 {
                return Err(ClientError::CallbackAborted);
            }
        }
        Ok(())
    }

    pub(crate) fn fire_raw(&mut self, packet_id: i32, body: &[u8]) -> Result<()> {
        if let Some(handler) = &mut self.raw {
            if handler(packet_id, body) < 0 {
                return Err(ClientError::CallbackAborted);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn fires_registered_handler() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = Rc::clone(&seen);
        let mut events = EventTable::new();
        events.on_event(move |event| {
            seen_clone.borrow_mut().push(format!("{event:?}"));
            0
        });
        events.fire(Event::LoginPlay).unwrap();
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn negative_return_aborts_as_callback_error() {
        let mut events = EventTable::new();
        events.on_event(|_| -1);
        let result = events.fire(Event::LoginPlay);
        assert!(matches!(result, Err(ClientError::CallbackAborted)));
    }

    #[test]
    fn game_event_slot_dispatches_by_sub_id() {
        let seen = Rc::new(RefCell::new(None));
        let seen_clone = Rc::clone(&seen);
        let mut events = EventTable::new();
        events.on_game_event(3, move |sub_id, value| {
            *seen_clone.borrow_mut() = Some((sub_id, value));
            0
        });
        events.fire_game_event(3, 1.5).unwrap();
        events.fire_game_event(4, 9.0).unwrap();
        assert_eq!(*seen.borrow(), Some((3, 1.5)));
    }

    #[test]
    fn raw_handler_sees_cold_path_packets() {
        let seen = Rc::new(RefCell::new(None));
        let seen_clone = Rc::clone(&seen);
        let mut events = EventTable::new();
        events.on_raw(move |id, body| {
            *seen_clone.borrow_mut() = Some((id, body.to_vec()));
            0
        });
        events.fire_raw(99, &[1, 2, 3]).unwrap();
        assert_eq!(*seen.borrow(), Some((99, vec![1, 2, 3])));
    }
}
