use log::debug;
use std::time::Duration;

/// Minuterie périodique pilotée par un temps logique.
///
/// Aucun thread : l'hôte appelle [`RepeatTimer::poll`] avec l'instant courant
/// et reçoit le nombre de périodes écoulées depuis le dernier appel.
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatTimer {
    period: Duration,
    next_due: Option<Duration>,
    max_catch_up: Option<u32>,
}

impl RepeatTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            next_due: None,
            max_catch_up: None,
        }
    }

    /// Borne le nombre d'échéances rendues par un même `poll` ;
    /// les périodes en trop sont abandonnées.
    pub fn with_max_catch_up(mut self, max: u32) -> Self {
        self.max_catch_up = Some(max.max(1));
        self
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Arme la minuterie ; premier déclenchement à `now + period`.
    /// Sans effet si elle tourne déjà.
    pub fn start(&mut self, now: Duration) {
        if self.next_due.is_none() {
            self.next_due = Some(now + self.period);
        }
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    /// Nombre d'échéances atteintes à `now`, borné par `max_catch_up`.
    pub fn poll(&mut self, now: Duration) -> u32 {
        let Some(due) = self.next_due else {
            return 0;
        };
        if due > now {
            return 0;
        }
        let elapsed = now - due;
        let periods = elapsed.as_nanos() / self.period.as_nanos();
        let fired = u32::try_from(periods + 1).unwrap_or(u32::MAX);
        self.next_due = Some(due + self.period * fired);

        let returned = match self.max_catch_up {
            Some(max) => fired.min(max),
            None => fired,
        };
        if fired > returned {
            debug!(
                "RepeatTimer stalled: {} periods at {:?}, {} dropped",
                fired,
                now,
                fired - returned
            );
        } else if fired > 1 {
            debug!("RepeatTimer catch-up: {} periods at {:?}", fired, now);
        }
        returned
    }
}
