pub mod types;
pub use self::types::{parse_hex_color, ChatMessage, GameStats, LaunchPayload, Player};

pub mod roster;
pub use self::roster::Roster;

pub mod chat;
pub use self::chat::ChatLog;

pub mod events;
pub use self::events::{ClientEvent, RoomError, ServerEvent};

pub mod state;
pub use self::state::RoomState;

pub mod transport;
pub use self::transport::RoomTransport;

pub mod mock;
pub use self::mock::MockRoom;

pub mod offline;
pub use self::offline::OfflineRoom;

pub mod config;
pub use self::config::{RoomConfig, RoomMode};
