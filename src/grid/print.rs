//! Printing grids as tables of text, for debugging.
//!
//! The output is meant for humans; there is no way to parse it back into a
//! grid.

use itertools::Itertools;
use log::warn;
use std::fmt;
use std::io::{self, Write};

use super::Grid2D;

/// Options controlling how `Grid2D::print_with()` renders each cell.
pub struct PrintOptions<'a, T> {
    /// Function converting a cell value into text.
    pub repr: Box<dyn 'a + Fn(&T) -> String>,
    /// Text placed between adjacent cells in a row.
    pub separator: String,
    /// Text used for empty cells.
    pub empty: String,
}
impl<'a, T: 'a + fmt::Display> Default for PrintOptions<'a, T> {
    fn default() -> Self {
        Self::with_repr(|value: &T| value.to_string())
    }
}
impl<T> fmt::Debug for PrintOptions<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrintOptions")
            .field("separator", &self.separator)
            .field("empty", &self.empty)
            .finish()
    }
}
impl<'a, T> PrintOptions<'a, T> {
    /// Returns options with a custom representation function and the default
    /// separator and empty cell text (a single space each).
    pub fn with_repr(repr: impl 'a + Fn(&T) -> String) -> Self {
        Self {
            repr: Box::new(repr),
            separator: " ".to_owned(),
            empty: " ".to_owned(),
        }
    }
    /// Sets the text placed between adjacent cells in a row.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
    /// Sets the text used for empty cells.
    pub fn empty(mut self, empty: impl Into<String>) -> Self {
        self.empty = empty.into();
        self
    }

    fn cell_text(&self, value: Option<&T>) -> String {
        match value {
            Some(value) => (self.repr)(value),
            None => self.empty.clone(),
        }
    }
}

impl<T> Grid2D<T> {
    /// Renders each row of the grid as one line of text, from `y = 0`
    /// upwards.
    pub fn render_rows(&self, options: &PrintOptions<'_, T>) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.height);
        let mut row = Vec::with_capacity(self.width);
        for cell in self {
            row.push(options.cell_text(cell.value));
            if cell.x == self.width - 1 {
                lines.push(row.drain(..).join(&options.separator));
            }
        }
        lines
    }
    /// Writes each row of the grid to `w`, one per line.
    pub fn write_to(&self, mut w: impl Write, options: &PrintOptions<'_, T>) -> io::Result<()> {
        for line in self.render_rows(options) {
            writeln!(w, "{}", line)?;
        }
        Ok(())
    }
    /// Prints the grid to stdout using the given options.
    pub fn print_with(&self, options: &PrintOptions<'_, T>) -> &Self {
        let stdout = io::stdout();
        if let Err(e) = self.write_to(stdout.lock(), options) {
            warn!("Unable to print grid: {}", e);
        }
        self
    }
    /// Prints the grid to stdout, with each value in its `Display` form and
    /// empty cells as spaces.
    pub fn print(&self) -> &Self
    where
        T: fmt::Display,
    {
        self.print_with(&PrintOptions::default())
    }
}

impl<T: fmt::Display> fmt::Display for Grid2D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self.render_rows(&PrintOptions::default());
        write!(f, "{}", lines.iter().join("\n"))
    }
}
