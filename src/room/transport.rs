use std::time::Duration;

use crate::room::events::{ClientEvent, ServerEvent};

/// Canal d'échange avec le salon.
pub trait RoomTransport {
    /// Événements arrivés jusqu'à l'instant logique `now`.
    fn poll(&mut self, now: Duration) -> Vec<ServerEvent>;

    /// Envoie un événement (sans attendre de réponse).
    fn send(&mut self, event: ClientEvent);

    /// Taille logique de l'écran, pour les transports qui génèrent des lancements.
    fn set_surface_size(&mut self, _width: f32, _height: f32) {}
}
