use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::VecDeque;
use std::time::Duration;

use crate::room::events::{ClientEvent, InitState, ServerEvent};
use crate::room::transport::RoomTransport;
use crate::room::types::{ChatMessage, Player};

/// Salon local à un seul joueur : les messages sont simplement renvoyés.
#[derive(Debug)]
pub struct OfflineRoom {
    current_user: Player,
    outbox: VecDeque<ServerEvent>,
    rng: StdRng,
}

impl OfflineRoom {
    pub fn new(current_user: Player) -> Self {
        let mut outbox = VecDeque::new();
        outbox.push_back(ServerEvent::InitState(InitState {
            self_id: current_user.id.clone(),
            players: vec![current_user.clone()],
            chat_history: Vec::new(),
        }));
        Self {
            current_user,
            outbox,
            rng: StdRng::from_os_rng(),
        }
    }
}

impl RoomTransport for OfflineRoom {
    fn poll(&mut self, _now: Duration) -> Vec<ServerEvent> {
        self.outbox.drain(..).collect()
    }

    fn send(&mut self, event: ClientEvent) {
        if let ClientEvent::ChatSend(chat) = event {
            let text = chat.text.trim();
            if !text.is_empty() {
                let message = ChatMessage::from_player(&mut self.rng, &self.current_user, text);
                self.outbox.push_back(ServerEvent::NewMessage(message));
            }
        }
    }
}
