use crate::room::types::Player;

/// Joueurs présents, dans l'ordre d'arrivée. Un id n'apparaît qu'une fois.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ajoute un joueur, ou remplace sur place celui qui a le même id.
    pub fn upsert(&mut self, player: Player) {
        match self.players.iter_mut().find(|p| p.id == player.id) {
            Some(existing) => *existing = player,
            None => self.players.push(player),
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<Player> {
        let index = self.players.iter().position(|p| p.id == id)?;
        Some(self.players.remove(index))
    }

    /// Remplace tout le contenu (état initial reçu du serveur).
    pub fn replace_all(&mut self, players: impl IntoIterator<Item = Player>) {
        self.players.clear();
        for player in players {
            self.upsert(player);
        }
    }

    pub fn get(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn current_user(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.is_current_user)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
