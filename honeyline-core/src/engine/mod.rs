//! Interaction engine
//!
//! Drives the attempt state machine against a transport, a character
//! display and a delay source. One engine owns every piece of mutable
//! state the lure has: the attempt counter, the two captured values and
//! the status currently on the LCD.
//!
//! # Attempt sequence
//!
//! ```text
//! AwaitingInput ──input──► AttemptStart ──► Banner ──drain 1 line──► LoginPrompt
//!       ▲                                                                 │
//!       │                                                            login line
//!       │                                                                 ▼
//!   Rejection ◄──────────────────── password line ◄──────────────── PasswordPrompt
//! ```
//!
//! Waiting for input is a poll of [`Transport::available`] with a sleep of
//! `poll_interval_ms` in between, so an idle device spends its time asleep
//! in the executor rather than spinning.

use embedded_hal_async::delay::DelayNs;
use honeyline_protocol::{script, trim_capture, Line};

use crate::config::EngineConfig;
use crate::state::{Event, State};
use crate::status::DisplayStatus;
use crate::traits::{CharDisplay, Transport};

#[cfg(test)]
mod mock;

/// Errors that abort an attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EngineError<E> {
    /// The transport failed; the attempt was abandoned
    Transport(E),
}

/// The lure's interaction engine
pub struct Engine<T, D, W> {
    transport: T,
    display: D,
    delay: W,
    config: EngineConfig,
    state: State,
    /// Attempts started since power-on, saturating
    attempts: u32,
    login: Line,
    password: Line,
    /// Raw line as read, before trimming
    scratch: Line,
    status: DisplayStatus,
    /// Display writes that failed
    display_faults: u32,
}

impl<T, D, W> Engine<T, D, W>
where
    T: Transport,
    D: CharDisplay,
    W: DelayNs,
{
    /// Create an engine in `AwaitingInput` with a zero counter and empty
    /// captures
    pub fn new(transport: T, display: D, delay: W, config: EngineConfig) -> Self {
        Self {
            transport,
            display,
            delay,
            config,
            state: State::AwaitingInput,
            attempts: 0,
            login: Line::new(),
            password: Line::new(),
            scratch: Line::new(),
            status: DisplayStatus::new(),
            display_faults: 0,
        }
    }

    /// Show the power-on splash
    pub fn show_boot_screen(&mut self) {
        self.show(DisplayStatus::boot());
    }

    /// Run the current state's action and advance the machine
    ///
    /// Returns the new state. Blocks for as long as the current state waits
    /// on the caller. On a transport error the attempt is abandoned, the
    /// machine goes back to `AwaitingInput` and the error is returned.
    pub async fn step(&mut self) -> Result<State, EngineError<T::Error>> {
        let event = match self.enter().await {
            Ok(event) => event,
            Err(e) => {
                self.state = self.state.transition(Event::TransportFault);
                return Err(EngineError::Transport(e));
            }
        };

        self.state = self.state.transition(event);
        Ok(self.state)
    }

    /// Step until one whole attempt has finished
    ///
    /// Returns the attempt counter once the machine is back in
    /// `AwaitingInput`.
    pub async fn run_attempt(&mut self) -> Result<u32, EngineError<T::Error>> {
        loop {
            if self.step().await? == State::AwaitingInput {
                return Ok(self.attempts);
            }
        }
    }

    async fn enter(&mut self) -> Result<Event, T::Error> {
        match self.state {
            State::AwaitingInput => {
                self.wait_for_input().await?;
                Ok(Event::InputAvailable)
            }
            State::AttemptStart => {
                self.begin_attempt();
                Ok(Event::StatusShown)
            }
            State::Banner => {
                for line in script::BANNER {
                    self.transport.write_line(line).await?;
                }
                self.transport.flush().await?;
                // Swallow whatever was typed at the banner
                self.transport.read_line(&mut self.scratch).await?;
                Ok(Event::BannerDrained)
            }
            State::LoginPrompt => {
                self.prompt_and_read(script::LOGIN_PROMPT).await?;
                store_trimmed(&mut self.login, &self.scratch);
                self.show(DisplayStatus::login(&self.login));
                Ok(Event::LoginCaptured)
            }
            State::PasswordPrompt => {
                self.prompt_and_read(script::PASSWORD_PROMPT).await?;
                store_trimmed(&mut self.password, &self.scratch);
                self.show(DisplayStatus::password(&self.login, &self.password));
                Ok(Event::PasswordCaptured)
            }
            State::Rejection => {
                self.delay.delay_ms(self.config.settle_delay_ms).await;
                self.transport.write_line(script::REJECTION).await?;
                self.transport.flush().await?;
                Ok(Event::RejectionSent)
            }
        }
    }

    async fn wait_for_input(&mut self) -> Result<(), T::Error> {
        while self.transport.available()? == 0 {
            self.delay.delay_ms(self.config.poll_interval_ms).await;
        }
        Ok(())
    }

    fn begin_attempt(&mut self) {
        self.attempts = self.attempts.saturating_add(1);
        self.login.clear();
        self.password.clear();
        self.show(DisplayStatus::caught(self.attempts));
    }

    async fn prompt_and_read(&mut self, prompt: &str) -> Result<(), T::Error> {
        self.transport.write(prompt).await?;
        self.transport.flush().await?;
        self.wait_for_input().await?;
        self.transport.read_line(&mut self.scratch).await
    }

    fn show(&mut self, status: DisplayStatus) {
        if status.render(&mut self.display).is_err() {
            self.display_faults = self.display_faults.saturating_add(1);
        }
        self.status = status;
    }
}

impl<T, D, W> Engine<T, D, W> {
    /// Current state
    pub fn state(&self) -> State {
        self.state
    }

    /// Attempts started since power-on
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Login captured in the current attempt, trimmed
    pub fn captured_login(&self) -> &str {
        &self.login
    }

    /// Password captured in the current attempt, trimmed
    pub fn captured_password(&self) -> &str {
        &self.password
    }

    /// Status last sent to the display
    pub fn status(&self) -> &DisplayStatus {
        &self.status
    }

    /// Number of display updates that failed
    pub fn display_faults(&self) -> u32 {
        self.display_faults
    }

    /// Engine timing
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Borrow the transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Borrow the display
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Borrow the delay source
    pub fn delay(&self) -> &W {
        &self.delay
    }

    /// Take the collaborators back
    pub fn into_parts(self) -> (T, D, W) {
        (self.transport, self.display, self.delay)
    }
}

/// Replace `dst` with the trimmed content of `raw`
fn store_trimmed(dst: &mut Line, raw: &Line) {
    dst.clear();
    // A slice of a Line always fits in a Line
    let _ = dst.push_str(trim_capture(raw));
}
