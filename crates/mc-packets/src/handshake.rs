//! Handshake state — one packet, always serverbound, opens every connection.

use mc_protocol::{Decode, Direction, Encode, Packet, State, VarInt};
use serde::{Deserialize, Serialize};

pub mod serverbound {
    use super::*;

    /// Packet ID: 0x00
    #[derive(Debug, Clone, Encode, Decode, Serialize, Deserialize)]
    pub struct Intention {
        pub protocol_version: VarInt,
        pub server_address: String,
        pub server_port: u16,
        /// 1 = Status, 2 = Login.
        pub next_state: VarInt,
    }

    impl Packet for Intention {
        const ID: i32 = 0x00;
        const NAME: &'static str = "Intention";
        const STATE: State = State::Handshaking;
        const DIRECTION: Direction = Direction::Serverbound;
    }
}
