//! State machine for segmented OTP entry.
//!
//! [`OtpEntry`] owns a fixed-size ordered sequence of single-character cells
//! and the index of the focused cell. It never touches the DOM; the input
//! component translates browser events into the methods here and mirrors the
//! focus index back onto the real inputs. That split keeps every focus and
//! assembly rule testable without a browser.

use std::fmt;

/// Returned by [`OtpEntry::assemble`] when a cell is still empty. The model
/// has already moved focus to the offending cell; no request must be sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IncompleteInput {
    pub index: usize,
}

impl fmt::Display for IncompleteInput {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "cell {} is empty", self.index)
    }
}

impl std::error::Error for IncompleteInput {}

/// Fixed-size sequence of single-character cells plus the focused index.
#[derive(Clone, Debug)]
pub struct OtpEntry {
    cells: Vec<String>,
    focus: usize,
}

impl OtpEntry {
    /// Creates an entry with `length` empty cells and focus on cell 0.
    /// A zero length is bumped to one cell so the focus index stays valid.
    pub fn new(length: usize) -> Self {
        Self {
            cells: vec![String::new(); length.max(1)],
            focus: 0,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Index of the cell that should hold focus.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Current value of cell `index`, empty for out-of-range indices.
    pub fn value(&self, index: usize) -> &str {
        self.cells.get(index).map_or("", String::as_str)
    }

    /// Whether every cell holds exactly one character.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Records typed input for cell `index` and advances focus when the cell
    /// is filled and a later cell exists. `raw` is the input's full value
    /// after the edit; only its last character is kept, so pasting or typing
    /// over a filled cell behaves like replacing it.
    pub fn on_input(&mut self, index: usize, raw: &str) {
        if index >= self.cells.len() {
            return;
        }

        // The user demonstrably has this cell focused.
        self.focus = index;
        self.cells[index] = raw.chars().last().map(String::from).unwrap_or_default();

        if !self.cells[index].is_empty() && index + 1 < self.cells.len() {
            self.focus = index + 1;
        }
    }

    /// Handles a Backspace keydown on cell `index`, before the browser
    /// mutates the value. Moves focus back only when the cell is already
    /// empty and a previous cell exists; deleting a character stays put.
    pub fn on_backspace(&mut self, index: usize) {
        if index >= self.cells.len() {
            return;
        }

        self.focus = index;
        if index > 0 && self.cells[index].is_empty() {
            self.focus = index - 1;
        }
    }

    /// Concatenates all cell values in index order. At the first empty cell,
    /// focus moves there and assembly fails; the caller must not issue a
    /// request in that case.
    pub fn assemble(&mut self) -> Result<String, IncompleteInput> {
        if let Some(index) = self.cells.iter().position(String::is_empty) {
            self.focus = index;
            return Err(IncompleteInput { index });
        }

        Ok(self.cells.concat())
    }
}

#[cfg(test)]
mod tests {
    use super::{IncompleteInput, OtpEntry};

    fn filled(values: &[&str]) -> OtpEntry {
        let mut entry = OtpEntry::new(values.len());
        for (index, value) in values.iter().enumerate() {
            if !value.is_empty() {
                entry.on_input(index, value);
            }
        }
        entry
    }

    #[test]
    fn starts_empty_with_focus_on_first_cell() {
        let entry = OtpEntry::new(6);
        assert_eq!(entry.cell_count(), 6);
        assert_eq!(entry.focus(), 0);
        assert!(!entry.is_complete());
        for index in 0..6 {
            assert_eq!(entry.value(index), "");
        }
    }

    #[test]
    fn zero_length_is_bumped_to_one_cell() {
        let entry = OtpEntry::new(0);
        assert_eq!(entry.cell_count(), 1);
        assert_eq!(entry.focus(), 0);
    }

    #[test]
    fn typing_advances_focus_through_every_non_last_cell() {
        let mut entry = OtpEntry::new(4);
        for index in 0..3 {
            entry.on_input(index, "7");
            assert_eq!(entry.focus(), index + 1);
        }
    }

    #[test]
    fn typing_into_the_last_cell_keeps_focus_there() {
        let mut entry = OtpEntry::new(4);
        entry.on_input(3, "9");
        assert_eq!(entry.focus(), 3);
        assert_eq!(entry.value(3), "9");
    }

    #[test]
    fn clearing_a_cell_does_not_advance_focus() {
        let mut entry = OtpEntry::new(4);
        entry.on_input(1, "5");
        entry.on_input(1, "");
        assert_eq!(entry.value(1), "");
        assert_eq!(entry.focus(), 1);
    }

    #[test]
    fn multi_character_input_keeps_the_last_character() {
        let mut entry = OtpEntry::new(4);
        entry.on_input(0, "12");
        assert_eq!(entry.value(0), "2");
        assert_eq!(entry.focus(), 1);
    }

    #[test]
    fn out_of_range_input_is_ignored() {
        let mut entry = OtpEntry::new(2);
        entry.on_input(5, "1");
        assert_eq!(entry.focus(), 0);
        assert!(!entry.is_complete());
    }

    #[test]
    fn backspace_on_an_empty_cell_moves_focus_back() {
        let mut entry = OtpEntry::new(4);
        entry.on_input(0, "1");
        assert_eq!(entry.focus(), 1);
        entry.on_backspace(1);
        assert_eq!(entry.focus(), 0);
    }

    #[test]
    fn backspace_on_a_filled_cell_stays_put() {
        let mut entry = OtpEntry::new(4);
        entry.on_input(1, "5");
        entry.on_backspace(1);
        assert_eq!(entry.focus(), 1);
        assert_eq!(entry.value(1), "5");
    }

    #[test]
    fn backspace_on_the_first_cell_stays_put() {
        let mut entry = OtpEntry::new(4);
        entry.on_backspace(0);
        assert_eq!(entry.focus(), 0);
    }

    #[test]
    fn assemble_concatenates_in_index_order() {
        let mut entry = filled(&["1", "2", "3", "4"]);
        assert!(entry.is_complete());
        assert_eq!(entry.assemble(), Ok("1234".to_string()));
    }

    #[test]
    fn assemble_fails_on_the_first_empty_cell_and_focuses_it() {
        let mut entry = filled(&["1", "", "3", "4"]);
        assert_eq!(entry.assemble(), Err(IncompleteInput { index: 1 }));
        assert_eq!(entry.focus(), 1);
    }

    #[test]
    fn assemble_reports_the_earliest_gap() {
        let mut entry = filled(&["", "2", "", "4"]);
        assert_eq!(entry.assemble(), Err(IncompleteInput { index: 0 }));
        assert_eq!(entry.focus(), 0);
    }

    #[test]
    fn assemble_succeeds_after_the_gap_is_filled() {
        let mut entry = filled(&["1", "", "3", "4"]);
        assert!(entry.assemble().is_err());
        entry.on_input(1, "2");
        assert_eq!(entry.assemble(), Ok("1234".to_string()));
    }

    #[test]
    fn incomplete_input_names_the_empty_cell() {
        let error = IncompleteInput { index: 2 };
        assert_eq!(error.to_string(), "cell 2 is empty");
    }
}
