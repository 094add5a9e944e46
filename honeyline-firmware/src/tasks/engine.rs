//! Engine task
//!
//! Runs the attempt state machine forever and logs what it does. Captured
//! credentials go to the LCD only; they are never written to the log.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::{Delay, Timer};

use honeyline_core::state::State;
use honeyline_core::Engine;
use honeyline_drivers::display::Hd44780;
use honeyline_drivers::serial::LineTransport;
use honeyline_hal_rp2040::uart::{PipeRx, SerialTx};

use crate::channels::SERIAL_RX_SIZE;

/// Serial line as seen by the engine
pub type SerialTransport = LineTransport<PipeRx<SERIAL_RX_SIZE>, SerialTx>;

/// Status LCD on GPIO outputs
pub type StatusLcd = Hd44780<Output<'static>, Delay>;

/// The engine with this board's collaborators
pub type HoneypotEngine = Engine<SerialTransport, StatusLcd, Delay>;

/// Engine task - one attempt after another
#[embassy_executor::task]
pub async fn engine_task(mut engine: HoneypotEngine) {
    info!("Engine task started");

    let retry_ms = engine.config().poll_interval_ms as u64;

    loop {
        let previous = engine.state();

        match engine.step().await {
            Ok(state) => {
                debug!("State: {:?} -> {:?}", previous, state);
                log_step(&engine, previous, state);
            }
            Err(e) => {
                warn!(
                    "Attempt {} abandoned in {:?}: {:?}",
                    engine.attempts(),
                    previous,
                    e
                );
                // Don't spin on a transport that keeps failing
                Timer::after_millis(retry_ms).await;
            }
        }
    }
}

fn log_step(engine: &HoneypotEngine, previous: State, state: State) {
    match state {
        State::AttemptStart => info!("Caller on the line"),
        State::Banner => info!("Attempt {} started", engine.attempts()),
        State::PasswordPrompt | State::Rejection => {
            let truncated = engine.transport().truncated();
            if truncated > 0 {
                debug!("Captured line truncated by {} bytes", truncated);
            }
        }
        State::AwaitingInput if previous == State::Rejection => {
            info!(
                "Attempt {} rejected ({} display faults so far)",
                engine.attempts(),
                engine.display_faults()
            );
        }
        _ => {}
    }
}
