//! Honeyline - Serial Line Honeypot Firmware
//!
//! Main firmware binary for RP2040-based boards. The device answers on a
//! serial line as a bank card-processing telehub, takes whatever login and
//! password the caller types, rejects them, and shows them on a 16x2
//! character LCD along with a count of attempts.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Uart};
use embassy_time::{Delay, Timer};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use honeyline_core::Engine;
use honeyline_drivers::display::{Hd44780, LcdPins};
use honeyline_drivers::serial::LineTransport;
use honeyline_hal_rp2040::uart::{rp_config, PipeRx, SerialTx};
use honeyline_hal_rp2040::UartConfig;

mod channels;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Honeyline firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load_config();

    // Serial line on UART0 (TX=GPIO0, RX=GPIO1), 8N1
    let line = UartConfig::with_baudrate(config.serial.baudrate);
    let uart_config = match rp_config(&line) {
        Some(c) => c,
        None => {
            warn!("Unsupported serial framing, using driver defaults");
            Default::default()
        }
    };

    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    info!(
        "UART initialized: {} baud, {} us per character",
        line.baudrate,
        line.char_time_us()
    );

    // Status LCD, HD44780 in 4-bit mode (RS=GPIO7, EN=GPIO8, D4..D7=GPIO9..12)
    let pins = LcdPins {
        rs: Output::new(p.PIN_7, Level::Low),
        en: Output::new(p.PIN_8, Level::Low),
        d4: Output::new(p.PIN_9, Level::Low),
        d5: Output::new(p.PIN_10, Level::Low),
        d6: Output::new(p.PIN_11, Level::Low),
        d7: Output::new(p.PIN_12, Level::Low),
    };
    let mut lcd = Hd44780::new(pins, Delay, config.display.geometry());
    match lcd.init() {
        Ok(()) => info!("LCD initialized"),
        // The lure still works without its display
        Err(e) => warn!("LCD init failed: {:?}", e),
    }

    let transport = LineTransport::new(PipeRx::new(&channels::SERIAL_RX), SerialTx::new(tx));
    let mut engine = Engine::new(transport, lcd, Delay, config.engine);

    if config.display.boot_splash {
        engine.show_boot_screen();
    }

    // Spawn tasks
    spawner.spawn(tasks::serial_rx_task(rx)).unwrap();
    spawner.spawn(tasks::engine_task(engine)).unwrap();

    info!("All tasks spawned, honeypot listening");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
