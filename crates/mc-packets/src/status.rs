//! Status state — server list ping.

use mc_protocol::{Decode, Direction, Encode, Packet, State};
use serde::{Deserialize, Serialize};

pub mod clientbound {
    use super::*;

    /// Packet ID: 0x00. `json_response` is an opaque JSON document (server
    /// description, players, version, favicon) — this crate does not parse
    /// it, just hands the string back to the caller.
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct StatusResponse {
        pub json_response: String,
    }

    impl Packet for StatusResponse {
        const ID: i32 = 0x00;
        const NAME: &'static str = "StatusResponse";
        const STATE: State = State::Status;
        const DIRECTION: Direction = Direction::Clientbound;
    }

    /// Packet ID: 0x01
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct PongResponse {
        pub payload: i64,
    }

    impl Packet for PongResponse {
        const ID: i32 = 0x01;
        const NAME: &'static str = "PongResponse";
        const STATE: State = State::Status;
        const DIRECTION: Direction = Direction::Clientbound;
    }
}

pub mod serverbound {
    use super::*;

    /// Packet ID: 0x00
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct StatusRequest;

    impl Packet for StatusRequest {
        const ID: i32 = 0x00;
        const NAME: &'static str = "StatusRequest";
        const STATE: State = State::Status;
        const DIRECTION: Direction = Direction::Serverbound;
    }

    /// Packet ID: 0x01
    #[derive(Debug, Clone, Default, Encode, Decode, Serialize, Deserialize)]
    pub struct PingRequest {
        pub payload: i64,
    }

    impl Packet for PingRequest {
        const ID: i32 = 0x01;
        const NAME: &'static str = "PingRequest";
        const STATE: State = State::Status;
        const DIRECTION: Direction = Direction::Serverbound;
    }
}
