use crossbeam_channel::{Receiver, Sender};
use log::debug;

use crate::physic_engine::{Explosion, LaunchRequest};

/// Observateur des événements sortants de la simulation.
pub trait FireworksListener {
    /// Un lancement local a eu lieu (à relayer aux autres joueurs).
    fn on_launch(&mut self, _request: &LaunchRequest) {}

    /// Une fusée vient d'exploser.
    fn on_explode(&mut self, _explosion: &Explosion) {}
}

/// Listener par défaut : ignore tout.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullListener;

impl FireworksListener for NullListener {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FireworksEvent {
    Launched(LaunchRequest),
    Exploded(Explosion),
}

/// Relaie les événements sur un canal crossbeam (consommés par l'application).
#[derive(Debug, Clone)]
pub struct ChannelListener {
    sender: Sender<FireworksEvent>,
}

impl ChannelListener {
    pub fn new(sender: Sender<FireworksEvent>) -> Self {
        Self { sender }
    }

    /// Listener + récepteur associé, sur un canal non borné.
    pub fn unbounded() -> (Self, Receiver<FireworksEvent>) {
        let (sender, receiver) = crossbeam_channel::unbounded();
        (Self::new(sender), receiver)
    }

    fn forward(&self, event: FireworksEvent) {
        if self.sender.send(event).is_err() {
            debug!("FireworksEvent dropped: receiver gone");
        }
    }
}

impl FireworksListener for ChannelListener {
    fn on_launch(&mut self, request: &LaunchRequest) {
        self.forward(FireworksEvent::Launched(*request));
    }

    fn on_explode(&mut self, explosion: &Explosion) {
        self.forward(FireworksEvent::Exploded(*explosion));
    }
}
