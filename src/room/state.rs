use log::{debug, info};

use crate::room::chat::ChatLog;
use crate::room::events::ServerEvent;
use crate::room::roster::Roster;
use crate::room::types::{GameStats, LaunchPayload, Player};

/// Vue locale du salon : joueurs, messages, compteurs.
#[derive(Debug, Clone)]
pub struct RoomState {
    current_user: Player,
    roster: Roster,
    chat: ChatLog,
    pub stats: GameStats,
}

impl RoomState {
    pub fn new(current_user: Player, chat_history_limit: usize) -> Self {
        let mut roster = Roster::new();
        roster.upsert(current_user.clone());
        Self {
            current_user,
            roster,
            chat: ChatLog::new(chat_history_limit),
            stats: GameStats::default(),
        }
    }

    /// Applique un événement. Retourne le lancement distant à rejouer, le cas échéant.
    pub fn apply(&mut self, event: ServerEvent) -> Option<LaunchPayload> {
        match event {
            ServerEvent::InitState(init) => {
                info!(
                    "👋 Joined room as {} ({} players, {} messages)",
                    init.self_id,
                    init.players.len(),
                    init.chat_history.len()
                );
                self.current_user.id = init.self_id.clone();
                self.roster.replace_all(init.players.into_iter().map(|mut p| {
                    p.is_current_user = p.id == init.self_id;
                    p
                }));
                if self.roster.get(&self.current_user.id).is_none() {
                    self.roster.upsert(self.current_user.clone());
                }
                self.chat.replace_all(init.chat_history);
                None
            }
            ServerEvent::PlayerJoined(mut player) => {
                debug!("Player joined: {} ({})", player.name, player.id);
                player.is_current_user = player.id == self.current_user.id;
                self.roster.upsert(player);
                None
            }
            ServerEvent::PlayerLeft(left) => {
                if left.id == self.current_user.id {
                    debug!("Ignoring player_left for the current user");
                } else if self.roster.remove(&left.id).is_some() {
                    debug!("Player left: {}", left.id);
                }
                None
            }
            ServerEvent::RemoteLaunch(payload) => Some(payload),
            ServerEvent::NewMessage(message) => {
                self.chat.push(message);
                None
            }
        }
    }

    pub fn current_user(&self) -> &Player {
        &self.current_user
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn chat(&self) -> &ChatLog {
        &self.chat
    }
}
