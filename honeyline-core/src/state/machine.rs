//! State machine definition
//!
//! Every transport write, line read and display update is a function of
//! the current state and an event.

use super::events::Event;

/// Attempt states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Idle, waiting for the caller to send anything
    #[default]
    AwaitingInput,
    /// Counting the attempt and showing the caught-status
    AttemptStart,
    /// Banner sent, draining one line
    Banner,
    /// Login prompt sent, reading the login line
    LoginPrompt,
    /// Password prompt sent, reading the password line
    PasswordPrompt,
    /// Settling, then sending the rejection
    Rejection,
}

impl State {
    /// Check if this state waits on the caller
    pub fn waits_for_caller(&self) -> bool {
        matches!(
            self,
            State::AwaitingInput | State::Banner | State::LoginPrompt | State::PasswordPrompt
        )
    }

    /// Check if this state captures a credential
    pub fn is_capturing(&self) -> bool {
        matches!(self, State::LoginPrompt | State::PasswordPrompt)
    }

    /// Check if an attempt is in progress
    pub fn in_attempt(&self) -> bool {
        !matches!(self, State::AwaitingInput)
    }

    /// Process an event and return the next state
    ///
    /// This is the core state transition logic.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            (AwaitingInput, InputAvailable) => AttemptStart,
            (AttemptStart, StatusShown) => Banner,
            (Banner, BannerDrained) => LoginPrompt,
            (LoginPrompt, LoginCaptured) => PasswordPrompt,
            (PasswordPrompt, PasswordCaptured) => Rejection,
            (Rejection, RejectionSent) => AwaitingInput,

            // A broken transport abandons the attempt
            (_, TransportFault) => AwaitingInput,

            // Default: stay in current state
            _ => self,
        }
    }
}
