pub trait AudioEngine {
    /// Sifflement de départ d'une fusée.
    fn play_launch(&self);
    /// Détonation (bruit filtré).
    fn play_explosion(&self);

    fn start_audio_thread(&mut self);
    fn stop_audio_thread(&mut self);

    fn mute(&mut self);
    /// Rétablit le gain configuré et le retourne.
    fn unmute(&mut self) -> f32;
}
