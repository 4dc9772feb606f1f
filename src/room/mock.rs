use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::time::Duration;

use crate::room::config::RoomConfig;
use crate::room::events::{ClientEvent, InitState, ServerEvent};
use crate::room::transport::RoomTransport;
use crate::room::types::{now_millis, ChatMessage, LaunchPayload, Player, SYSTEM_COLOR};
use crate::utils::RepeatTimer;

const BOT_PHRASES: [&str; 6] = [
    "So pretty!",
    "Wow!",
    "Happy New Year!",
    "I'll launch one too",
    "Watch this!",
    "Boom boom boom!",
];

pub const WELCOME_TEXT: &str = "Welcome to the fireworks room! Click or hold to launch fireworks.";

/// Message système d'accueil.
pub fn welcome_message() -> ChatMessage {
    ChatMessage {
        id: "system-1".into(),
        player_id: "system".into(),
        player_name: "System".into(),
        text: WELCOME_TEXT.into(),
        timestamp: now_millis(),
        color: SYSTEM_COLOR.into(),
    }
}

/// Salon simulé : deux bots qui tirent et discutent au hasard.
#[derive(Debug)]
pub struct MockRoom {
    config: RoomConfig,
    current_user: Player,
    bots: [Player; 2],
    outbox: VecDeque<ServerEvent>,
    launch_timer: RepeatTimer,
    chat_timer: RepeatTimer,
    surface: Option<(f32, f32)>,
    rng: StdRng,
}

impl MockRoom {
    pub fn new(config: &RoomConfig, current_user: Player) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let bots = [
            Player::new("bot-1", "Galaxy Walker", "#60a5fa"),
            Player::new("bot-2", "Night Blaze", "#facc15"),
        ];

        let mut players = vec![current_user.clone()];
        players.extend(bots.iter().cloned());

        let mut outbox = VecDeque::new();
        outbox.push_back(ServerEvent::InitState(InitState {
            self_id: current_user.id.clone(),
            players,
            chat_history: vec![welcome_message()],
        }));

        info!("🤖 Mock room: {} + 2 bots", current_user.name);

        Self {
            config: config.clone(),
            current_user,
            bots,
            outbox,
            launch_timer: RepeatTimer::new(config.bot_launch_interval()),
            chat_timer: RepeatTimer::new(config.bot_chat_interval()),
            surface: None,
            rng,
        }
    }

    pub fn bots(&self) -> &[Player] {
        &self.bots
    }

    /// Lancement d'un bot : départ en bas, cible dans la bande [20 %, 70 %] de la hauteur.
    fn bot_launch(&mut self) -> Option<LaunchPayload> {
        let (width, height) = self.surface?;
        Some(LaunchPayload {
            sx: self.rng.random_range(0.0..=width),
            sy: height,
            tx: self.rng.random_range(0.0..=width),
            ty: height * 0.2 + self.rng.random_range(0.0..=height * 0.5),
            hue: self.rng.random_range(0.0..360.0),
        })
    }

    fn bot_message(&mut self) -> Option<ChatMessage> {
        let bot = self.bots.choose(&mut self.rng)?.clone();
        let text = *BOT_PHRASES.choose(&mut self.rng)?;
        Some(ChatMessage::from_player(&mut self.rng, &bot, text))
    }
}

impl RoomTransport for MockRoom {
    fn poll(&mut self, now: Duration) -> Vec<ServerEvent> {
        self.launch_timer.start(now);
        self.chat_timer.start(now);

        for _ in 0..self.launch_timer.poll(now) {
            if self.rng.random_bool(self.config.bot_launch_chance) {
                if let Some(payload) = self.bot_launch() {
                    self.outbox.push_back(ServerEvent::RemoteLaunch(payload));
                }
            }
        }

        for _ in 0..self.chat_timer.poll(now) {
            if self.rng.random_bool(self.config.bot_chat_chance) {
                if let Some(message) = self.bot_message() {
                    self.outbox.push_back(ServerEvent::NewMessage(message));
                }
            }
        }

        self.outbox.drain(..).collect()
    }

    fn send(&mut self, event: ClientEvent) {
        match event {
            ClientEvent::ChatSend(chat) => {
                let text = chat.text.trim();
                if text.is_empty() {
                    return;
                }
                let message = ChatMessage::from_player(&mut self.rng, &self.current_user, text);
                self.outbox.push_back(ServerEvent::NewMessage(message));
            }
            ClientEvent::JoinRoom(join) => {
                debug!("Mock room: join_room as {}", join.name);
                self.current_user.name = join.name;
                self.current_user.color = join.color;
            }
            ClientEvent::FireworkLaunch(_) => {
                // Pas d'autres joueurs réels à prévenir
            }
        }
    }

    fn set_surface_size(&mut self, width: f32, height: f32) {
        self.surface = (width > 0.0 && height > 0.0).then_some((width, height));
    }
}
