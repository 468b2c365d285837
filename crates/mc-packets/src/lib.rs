//! Hand-authored packet definitions for protocol 763 (Minecraft 1.19.4).
//!
//! Covers Handshake, Status, Login and Play. There is no Configuration
//! state at this protocol revision — it was introduced in 1.20.2.

/// Protocol version for this build.
pub const PROTOCOL_VERSION: i32 = 763;

/// Minecraft version name for this build.
pub const PROTOCOL_NAME: &str = "1.19.4";

// Re-export protocol types
pub use mc_protocol::{Direction, Packet, State};

pub mod handshake;
pub mod login;
pub mod play;
pub mod status;
