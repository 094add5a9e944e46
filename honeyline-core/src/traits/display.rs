//! Character display trait for the status LCD

/// Errors that can occur when driving the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Pin or bus write failed
    Bus,
    /// Cursor position outside the display
    OutOfBounds,
}

/// Display size in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Geometry {
    /// Characters per row
    pub columns: u8,
    /// Number of rows
    pub rows: u8,
}

impl Geometry {
    /// The common 16x2 module
    pub const LCD_16X2: Self = Self {
        columns: 16,
        rows: 2,
    };

    /// Check whether a cursor position is on screen
    pub fn contains(&self, col: u8, row: u8) -> bool {
        col < self.columns && row < self.rows
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::LCD_16X2
    }
}

/// Trait for a text-mode character display
///
/// Text that runs past the last column is the driver's concern; callers
/// hand over whole strings and never pre-truncate.
pub trait CharDisplay {
    /// Clear the screen and home the cursor
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Move the cursor
    ///
    /// - `col`: Column number (0-based)
    /// - `row`: Row number (0-based)
    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError>;

    /// Print text at the cursor, advancing it
    fn print(&mut self, text: &str) -> Result<(), DisplayError>;

    /// Display size
    fn geometry(&self) -> Geometry;
}

/// Helper trait for whole-row updates
pub trait CharDisplayExt: CharDisplay {
    /// Print `text` starting at column 0 of `row`
    fn print_row(&mut self, row: u8, text: &str) -> Result<(), DisplayError> {
        self.set_cursor(0, row)?;
        self.print(text)
    }
}

// Blanket implementation for all CharDisplay types
impl<T: CharDisplay> CharDisplayExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_contains() {
        let g = Geometry::LCD_16X2;
        assert!(g.contains(0, 0));
        assert!(g.contains(15, 1));
        assert!(!g.contains(16, 0));
        assert!(!g.contains(0, 2));
    }

    #[test]
    fn test_default_geometry() {
        assert_eq!(Geometry::default(), Geometry { columns: 16, rows: 2 });
    }
}
