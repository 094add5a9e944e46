//! HD44780 character LCD in 4-bit mode
//!
//! The controller is driven write-only over six GPIOs: RS selects command
//! or data, EN latches a nibble on its falling edge, and D4..D7 carry the
//! nibble. R/W is tied to ground on the board, so the busy flag can never
//! be read and every command is followed by a fixed delay long enough for
//! the slowest one.
//!
//! # Wiring
//!
//! | Signal | GPIO |
//! |--------|------|
//! | RS     | 7    |
//! | EN     | 8    |
//! | D4..D7 | 9..12 |

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use honeyline_core::traits::{CharDisplay, DisplayError, Geometry};

const CMD_CLEAR: u8 = 0x01;
const CMD_ENTRY_MODE: u8 = 0x04;
const CMD_DISPLAY_CONTROL: u8 = 0x08;
const CMD_FUNCTION_SET: u8 = 0x20;
const CMD_SET_DDRAM: u8 = 0x80;

/// Entry mode: cursor moves right, no display shift
const ENTRY_INCREMENT: u8 = 0x02;
/// Display control: display on, cursor and blink off
const DISPLAY_ON: u8 = 0x04;
/// Function set: two display lines (4-bit bus, 5x8 font implied by zero bits)
const FUNCTION_TWO_LINES: u8 = 0x08;

/// Execution time of ordinary commands, with margin
const COMMAND_DELAY_US: u32 = 100;
/// Execution time of clear and home
const CLEAR_DELAY_US: u32 = 2_000;

/// Replacement for characters the controller has no glyph for
const UNPRINTABLE: u8 = b'?';

/// Control and data pins of the LCD
pub struct LcdPins<P> {
    pub rs: P,
    pub en: P,
    pub d4: P,
    pub d5: P,
    pub d6: P,
    pub d7: P,
}

/// HD44780 driver
///
/// Text past the last column of a row is dropped, not wrapped; the
/// controller's DDRAM layout would otherwise put it on a different row.
pub struct Hd44780<P, D> {
    pins: LcdPins<P>,
    delay: D,
    geometry: Geometry,
    /// Column the next printed character lands on
    column: u8,
}

impl<P: OutputPin, D: DelayNs> Hd44780<P, D> {
    /// Create a driver; call [`init`](Self::init) before anything else
    pub fn new(pins: LcdPins<P>, delay: D, geometry: Geometry) -> Self {
        Self {
            pins,
            delay,
            geometry,
            column: 0,
        }
    }

    /// Run the power-on initialisation sequence
    ///
    /// Forces the controller into 4-bit mode from whatever state it is in,
    /// then switches the display on with a blank screen.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        // Wait for Vcc to settle
        self.delay.delay_ms(50);
        self.set(Pin::Rs, false)?;
        self.set(Pin::En, false)?;

        // Three times "8-bit mode", then "4-bit mode", one nibble each
        self.write_nibble(0x03)?;
        self.delay.delay_us(4_500);
        self.write_nibble(0x03)?;
        self.delay.delay_us(4_500);
        self.write_nibble(0x03)?;
        self.delay.delay_us(150);
        self.write_nibble(0x02)?;

        let lines = if self.geometry.rows > 1 {
            FUNCTION_TWO_LINES
        } else {
            0
        };
        self.command(CMD_FUNCTION_SET | lines)?;
        self.command(CMD_DISPLAY_CONTROL | DISPLAY_ON)?;
        self.clear()?;
        self.command(CMD_ENTRY_MODE | ENTRY_INCREMENT)
    }

    /// Release the pins and delay
    pub fn release(self) -> (LcdPins<P>, D) {
        (self.pins, self.delay)
    }

    /// DDRAM address of the first cell of `row`
    fn row_offset(&self, row: u8) -> u8 {
        let columns = self.geometry.columns;
        match row {
            0 => 0x00,
            1 => 0x40,
            2 => columns,
            _ => 0x40 + columns,
        }
    }

    fn command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.send(cmd, false)?;
        self.delay.delay_us(COMMAND_DELAY_US);
        Ok(())
    }

    fn send(&mut self, byte: u8, data: bool) -> Result<(), DisplayError> {
        self.set(Pin::Rs, data)?;
        self.write_nibble(byte >> 4)?;
        self.write_nibble(byte & 0x0F)
    }

    fn write_nibble(&mut self, nibble: u8) -> Result<(), DisplayError> {
        self.set(Pin::D4, nibble & 0x01 != 0)?;
        self.set(Pin::D5, nibble & 0x02 != 0)?;
        self.set(Pin::D6, nibble & 0x04 != 0)?;
        self.set(Pin::D7, nibble & 0x08 != 0)?;
        self.pulse_enable()
    }

    fn pulse_enable(&mut self) -> Result<(), DisplayError> {
        self.set(Pin::En, false)?;
        self.delay.delay_us(1);
        self.set(Pin::En, true)?;
        // Enable pulse must be >450ns
        self.delay.delay_us(1);
        self.set(Pin::En, false)?;
        // Commands need >37us to settle
        self.delay.delay_us(COMMAND_DELAY_US);
        Ok(())
    }

    fn set(&mut self, pin: Pin, high: bool) -> Result<(), DisplayError> {
        let pins = &mut self.pins;
        let pin = match pin {
            Pin::Rs => &mut pins.rs,
            Pin::En => &mut pins.en,
            Pin::D4 => &mut pins.d4,
            Pin::D5 => &mut pins.d5,
            Pin::D6 => &mut pins.d6,
            Pin::D7 => &mut pins.d7,
        };
        let result = if high { pin.set_high() } else { pin.set_low() };
        result.map_err(|_| DisplayError::Bus)
    }
}

#[derive(Clone, Copy)]
enum Pin {
    Rs,
    En,
    D4,
    D5,
    D6,
    D7,
}

impl<P: OutputPin, D: DelayNs> CharDisplay for Hd44780<P, D> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.send(CMD_CLEAR, false)?;
        self.delay.delay_us(CLEAR_DELAY_US);
        self.column = 0;
        Ok(())
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
        if !self.geometry.contains(col, row) {
            return Err(DisplayError::OutOfBounds);
        }
        let address = self.row_offset(row) + col;
        self.command(CMD_SET_DDRAM | address)?;
        self.column = col;
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<(), DisplayError> {
        for ch in text.chars() {
            if self.column >= self.geometry.columns {
                break;
            }
            let code = u8::try_from(u32::from(ch)).unwrap_or(UNPRINTABLE);
            self.send(code, true)?;
            self.column += 1;
        }
        Ok(())
    }

    fn geometry(&self) -> Geometry {
        self.geometry
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::vec::Vec;

    /// Pin levels plus every nibble latched on a falling EN edge
    #[derive(Default)]
    struct Bus {
        levels: [bool; 6],
        /// (rs, nibble)
        latched: Vec<(bool, u8)>,
        broken: bool,
    }

    struct MockPin {
        bus: Rc<RefCell<Bus>>,
        index: usize,
    }

    impl embedded_hal::digital::ErrorType for MockPin {
        type Error = embedded_hal::digital::ErrorKind;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.drive(false)
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.drive(true)
        }
    }

    impl MockPin {
        fn drive(&mut self, high: bool) -> Result<(), embedded_hal::digital::ErrorKind> {
            let mut bus = self.bus.borrow_mut();
            if bus.broken {
                return Err(embedded_hal::digital::ErrorKind::Other);
            }
            // Index 1 is EN
            if self.index == 1 && bus.levels[1] && !high {
                let l = bus.levels;
                let nibble = (l[2] as u8) | (l[3] as u8) << 1 | (l[4] as u8) << 2 | (l[5] as u8) << 3;
                bus.latched.push((l[0], nibble));
            }
            bus.levels[self.index] = high;
            Ok(())
        }
    }

    struct NoDelay;

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn lcd(geometry: Geometry) -> (Hd44780<MockPin, NoDelay>, Rc<RefCell<Bus>>) {
        let bus = Rc::new(RefCell::new(Bus::default()));
        let pin = |index| MockPin {
            bus: bus.clone(),
            index,
        };
        let pins = LcdPins {
            rs: pin(0),
            en: pin(1),
            d4: pin(2),
            d5: pin(3),
            d6: pin(4),
            d7: pin(5),
        };
        (Hd44780::new(pins, NoDelay, geometry), bus)
    }

    /// Pair latched nibbles into (rs, byte)
    fn bytes(nibbles: &[(bool, u8)]) -> Vec<(bool, u8)> {
        nibbles
            .chunks(2)
            .map(|pair| (pair[0].0, pair[0].1 << 4 | pair[1].1))
            .collect()
    }

    fn take(bus: &Rc<RefCell<Bus>>) -> Vec<(bool, u8)> {
        core::mem::take(&mut bus.borrow_mut().latched)
    }

    #[test]
    fn test_init_sequence() {
        let (mut lcd, bus) = lcd(Geometry::LCD_16X2);
        lcd.init().unwrap();

        let latched = take(&bus);
        let wake: Vec<u8> = latched[..4].iter().map(|&(_, n)| n).collect();
        assert_eq!(wake, [0x03, 0x03, 0x03, 0x02]);
        assert!(latched[..4].iter().all(|&(rs, _)| !rs));

        assert_eq!(
            bytes(&latched[4..]),
            [(false, 0x28), (false, 0x0C), (false, 0x01), (false, 0x06)]
        );
    }

    #[test]
    fn test_single_row_function_set() {
        let (mut lcd, bus) = lcd(Geometry {
            columns: 16,
            rows: 1,
        });
        lcd.init().unwrap();
        assert_eq!(bytes(&take(&bus)[4..])[0], (false, 0x20));
    }

    #[test]
    fn test_cursor_addresses() {
        let (mut lcd, bus) = lcd(Geometry::LCD_16X2);
        lcd.set_cursor(0, 0).unwrap();
        lcd.set_cursor(3, 1).unwrap();
        assert_eq!(bytes(&take(&bus)), [(false, 0x80), (false, 0xC3)]);
    }

    #[test]
    fn test_four_row_addresses() {
        let (mut lcd, bus) = lcd(Geometry {
            columns: 20,
            rows: 4,
        });
        lcd.set_cursor(0, 2).unwrap();
        lcd.set_cursor(1, 3).unwrap();
        // Rows 2 and 3 continue rows 0 and 1 in DDRAM
        assert_eq!(bytes(&take(&bus)), [(false, 0x94), (false, 0xD5)]);
    }

    #[test]
    fn test_cursor_out_of_bounds() {
        let (mut lcd, bus) = lcd(Geometry::LCD_16X2);
        assert_eq!(lcd.set_cursor(16, 0), Err(DisplayError::OutOfBounds));
        assert_eq!(lcd.set_cursor(0, 2), Err(DisplayError::OutOfBounds));
        assert!(take(&bus).is_empty());
    }

    #[test]
    fn test_print_sends_data() {
        let (mut lcd, bus) = lcd(Geometry::LCD_16X2);
        lcd.print("Hi").unwrap();
        assert_eq!(bytes(&take(&bus)), [(true, b'H'), (true, b'i')]);
    }

    #[test]
    fn test_print_stops_at_last_column() {
        let (mut lcd, bus) = lcd(Geometry::LCD_16X2);
        lcd.set_cursor(10, 0).unwrap();
        take(&bus);

        lcd.print("0123456789").unwrap();
        let sent = bytes(&take(&bus));
        assert_eq!(sent.len(), 6);
        assert_eq!(sent[5], (true, b'5'));

        // Clearing homes the column
        lcd.clear().unwrap();
        take(&bus);
        lcd.print("AB").unwrap();
        assert_eq!(bytes(&take(&bus)).len(), 2);
    }

    #[test]
    fn test_unprintable_characters() {
        let (mut lcd, bus) = lcd(Geometry::LCD_16X2);
        lcd.print("\u{e9}\u{263a}").unwrap();
        assert_eq!(bytes(&take(&bus)), [(true, 0xE9), (true, b'?')]);
    }

    #[test]
    fn test_pin_failure_is_bus_error() {
        let (mut lcd, bus) = lcd(Geometry::LCD_16X2);
        bus.borrow_mut().broken = true;
        assert_eq!(lcd.clear(), Err(DisplayError::Bus));
        assert_eq!(lcd.init(), Err(DisplayError::Bus));
    }

    #[test]
    fn test_geometry_reported() {
        let (lcd, _bus) = lcd(Geometry::LCD_16X2);
        assert_eq!(lcd.geometry(), Geometry::LCD_16X2);
    }
}
