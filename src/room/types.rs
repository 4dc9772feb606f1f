use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Palette proposée aux joueurs.
pub const PLAYER_COLORS: [&str; 8] = [
    "#f472b6", "#c084fc", "#818cf8", "#60a5fa", "#34d399", "#facc15", "#fb923c", "#2dd4bf",
];

/// Couleur des messages système.
pub const SYSTEM_COLOR: &str = "#94a3b8";

const NAME_PREFIXES: [&str; 8] = [
    "Happy", "Gloomy", "Soaring", "Mystic", "Fearless", "Lucky", "Stellar", "Shiny",
];
const NAME_NOUNS: [&str; 8] = [
    "Firework", "Panda", "Astronaut", "Traveler", "Star", "Explorer", "Dreamer", "Geek",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    /// Couleur CSS `#rrggbb`.
    pub color: String,
    #[serde(default)]
    pub is_current_user: bool,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            is_current_user: false,
        }
    }

    /// Joueur local : id, nom et couleur tirés au hasard.
    pub fn random_current_user<R: Rng>(rng: &mut R) -> Self {
        Self {
            is_current_user: true,
            ..Self::new(random_id(rng), random_name(rng), random_color(rng))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub player_id: String,
    pub player_name: String,
    pub text: String,
    /// Millisecondes depuis l'epoch Unix.
    pub timestamp: u64,
    pub color: String,
}

impl ChatMessage {
    /// Message de `player`, horodaté maintenant.
    pub fn from_player<R: Rng>(rng: &mut R, player: &Player, text: impl Into<String>) -> Self {
        Self {
            id: random_id(rng),
            player_id: player.id.clone(),
            player_name: player.name.clone(),
            text: text.into(),
            timestamp: now_millis(),
            color: player.color.clone(),
        }
    }
}

/// Coordonnées d'un lancement échangées entre joueurs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaunchPayload {
    pub sx: f32,
    pub sy: f32,
    pub tx: f32,
    pub ty: f32,
    pub hue: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStats {
    pub fireworks_launched: u64,
    pub explosions: u64,
}

impl GameStats {
    pub fn record_launch(&mut self) {
        self.fireworks_launched += 1;
    }

    pub fn record_explosion(&mut self) {
        self.explosions += 1;
    }
}

pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Identifiant court en base 36 (9 caractères).
pub fn random_id<R: Rng>(rng: &mut R) -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    (0..9)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

pub fn random_name<R: Rng>(rng: &mut R) -> String {
    let prefix = NAME_PREFIXES.choose(rng).copied().unwrap_or("Happy");
    let noun = NAME_NOUNS.choose(rng).copied().unwrap_or("Firework");
    format!("{} {}", prefix, noun)
}

pub fn random_color<R: Rng>(rng: &mut R) -> String {
    PLAYER_COLORS
        .choose(rng)
        .copied()
        .unwrap_or(PLAYER_COLORS[0])
        .to_string()
}

/// `#rrggbb` (ou `#rgb`) → RGBA normalisé, pour l'affichage.
pub fn parse_hex_color(hex: &str) -> Option<[f32; 4]> {
    let digits = hex.strip_prefix('#').filter(|d| d.is_ascii())?;
    let channel = |s: &str| u8::from_str_radix(s, 16).ok().map(|v| v as f32 / 255.0);

    let (r, g, b) = match digits.len() {
        6 => (
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        ),
        3 => {
            let expand = |i: usize| channel(digits[i..i + 1].repeat(2).as_str());
            (expand(0)?, expand(1)?, expand(2)?)
        }
        _ => return None,
    };
    Some([r, g, b, 1.0])
}
