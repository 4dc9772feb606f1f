use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::room::types::{ChatMessage, LaunchPayload, Player};

#[derive(Debug, Error)]
pub enum RoomError {
    #[error("malformed room event: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitState {
    pub self_id: String,
    pub players: Vec<Player>,
    #[serde(default)]
    pub chat_history: Vec<ChatMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerLeft {
    pub id: String,
}

/// Événements reçus du salon : `{"type": ..., "payload": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ServerEvent {
    InitState(InitState),
    PlayerJoined(Player),
    PlayerLeft(PlayerLeft),
    RemoteLaunch(LaunchPayload),
    NewMessage(ChatMessage),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinRoom {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSend {
    pub text: String,
}

/// Événements envoyés au salon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ClientEvent {
    JoinRoom(JoinRoom),
    FireworkLaunch(LaunchPayload),
    ChatSend(ChatSend),
}

impl ServerEvent {
    pub fn parse(text: &str) -> Result<Self, RoomError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String, RoomError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl ClientEvent {
    pub fn parse(text: &str) -> Result<Self, RoomError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String, RoomError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn chat(text: impl Into<String>) -> Self {
        ClientEvent::ChatSend(ChatSend { text: text.into() })
    }
}
