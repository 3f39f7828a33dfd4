//! Session lifecycle
//!
//! Runs one session at a time: intro screen, running, and after a win or a
//! loss a fixed pause before a brand-new session starts. Nothing from the
//! finished session is carried into the next one.

use log::{debug, info};

use crate::config::Config;
use crate::error::ConfigError;
use crate::render::{Surface, scene};
use crate::sim::{KeyEvent, Outcome, Session, TerminalReason};

/// Where the driver is in the session lifecycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Fresh session built, start screen not yet shown
    Intro,
    /// Ticking the live session every frame
    Running,
    /// Session over; next one starts at `resume_at` (ms)
    Restarting {
        resume_at: f64,
        reason: TerminalReason,
    },
}

/// Drives sessions frame by frame
pub struct Driver {
    config: Config,
    phase: Phase,
    /// Never-ticked session built from the validated config; cloned on restart
    fresh: Session,
    session: Option<Session>,
    sessions_started: u64,
    last_reason: Option<TerminalReason>,
}

impl Driver {
    /// Validate the config and prepare the first session
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let fresh = Session::new(config.clone())?;
        Ok(Self {
            config,
            phase: Phase::Intro,
            session: Some(fresh.clone()),
            fresh,
            sessions_started: 1,
            last_reason: None,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The live session, if one is running
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn sessions_started(&self) -> u64 {
        self.sessions_started
    }

    /// How the most recent session ended
    pub fn last_reason(&self) -> Option<TerminalReason> {
        self.last_reason
    }

    /// Route a key event to the live session; dropped during the restart pause
    pub fn key(&mut self, event: KeyEvent) {
        if let Some(session) = self.session.as_mut() {
            session.key(event);
        }
    }

    /// Handle one animation frame at `now` (ms)
    ///
    /// Returns the tick outcome when the session advanced this frame.
    pub fn frame(&mut self, now: f64, surface: &mut dyn Surface) -> Option<Outcome> {
        match self.phase {
            Phase::Intro => {
                self.show_intro(surface);
                None
            }
            Phase::Running => self.run_tick(now, surface),
            Phase::Restarting { resume_at, .. } => {
                if now >= resume_at {
                    self.restart(surface);
                }
                None
            }
        }
    }

    fn show_intro(&mut self, surface: &mut dyn Surface) {
        surface.draw(&scene::intro(&self.config));
        self.phase = Phase::Running;
    }

    fn run_tick(&mut self, now: f64, surface: &mut dyn Surface) -> Option<Outcome> {
        let session = self.session.as_mut()?;
        let (snapshot, outcome) = session.frame(now);

        surface.draw(&scene::frame(&snapshot, &self.config));

        if let Some(reason) = outcome.reason() {
            surface.draw(&scene::overlay(reason, &self.config));
            // Dropping the session releases its clock scan, input and paddle
            self.session = None;
            self.last_reason = Some(reason);
            let resume_at = now + self.config.restart_delay_ms;
            self.phase = Phase::Restarting { resume_at, reason };
            debug!("Restart scheduled at {:.0}ms ({})", resume_at, reason.as_str());
        }

        Some(outcome)
    }

    fn restart(&mut self, surface: &mut dyn Surface) {
        self.session = Some(self.fresh.clone());
        self.sessions_started += 1;
        info!("Starting session #{}", self.sessions_started);
        self.phase = Phase::Intro;
        self.show_intro(surface);
    }
}
