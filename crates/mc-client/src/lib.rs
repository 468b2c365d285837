//! Blocking Minecraft Java Edition protocol client (revision 763, 1.19.4).
//!
//! Connects through Handshake → Status → Login → Play, tracks a
//! [`gamestate::Gamestate`] snapshot from the packets it sees, and hands
//! embedders a synchronous [`events::EventTable`] to react with. There is
//! no Configuration state at this protocol revision: Login transitions
//! straight to Play.

pub mod connection;
pub mod error;
pub mod events;
pub mod gamestate;
pub mod list;
pub mod transport;

pub use connection::{fetch_status, Connection, EncryptionHook, NoEncryption, ServerStatus};
pub use error::{ClientError, Result};
pub use events::{Event, EventTable};
pub use gamestate::Gamestate;
