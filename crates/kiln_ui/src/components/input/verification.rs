//! Verification-code entry
//!
//! A code is a fixed row of single-character cells. Typing into a cell moves
//! focus to the next one, backspace on an empty cell moves it back, and the
//! completion callback fires once each time the row becomes full.
//!
//! Cell focus is tracked in a [`FocusArena`]; callers address cells by index
//! and never see the handles.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use kiln_core::{FocusArena, FocusHandle, FocusOrigin};

use crate::error::{KilnError, Result};

/// Character shown in place of a secure cell's content
pub const MASK: char = '•';

/// Per-field verification behavior
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationOptions {
    /// Number of cells
    pub length: usize,
    /// Focus the first cell on mount
    pub auto_focus: bool,
    /// Mask cell contents
    pub secure: bool,
    /// Text rendered between cells
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
}

impl Default for VerificationOptions {
    fn default() -> Self {
        Self {
            length: 6,
            auto_focus: true,
            secure: false,
            separator: None,
        }
    }
}

/// Fixed-length row of optional characters
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationBuffer {
    cells: SmallVec<[Option<char>; 8]>,
}

impl VerificationBuffer {
    pub fn new(length: usize) -> Result<Self> {
        if length == 0 {
            return Err(KilnError::InvalidLength);
        }
        Ok(Self {
            cells: SmallVec::from_elem(None, length),
        })
    }

    /// Buffer seeded from a joined value; extra characters are dropped
    pub fn from_value(length: usize, value: &str) -> Result<Self> {
        let mut buffer = Self::new(length)?;
        for (cell, c) in buffer.cells.iter_mut().zip(value.chars()) {
            *cell = Some(c);
        }
        Ok(buffer)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a buffer has at least one cell
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<char> {
        self.cells.get(index).copied().flatten()
    }

    pub fn set(&mut self, index: usize, value: Option<char>) -> Result<()> {
        let length = self.cells.len();
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(KilnError::CellOutOfRange { index, length })?;
        *cell = value;
        Ok(())
    }

    /// Every cell holds a character
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Filled cells concatenated in order
    pub fn joined(&self) -> String {
        self.cells.iter().flatten().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<char>> + '_ {
        self.cells.iter().copied()
    }
}

/// Outcome of a cell edit
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellUpdate {
    /// Joined value after the edit
    pub value: String,
    /// The full code, when this edit completed it
    pub completed: Option<String>,
    /// Cell that received focus
    pub focus_moved: Option<usize>,
}

/// Multi-cell verification code with focus management
#[derive(Debug)]
pub struct VerificationCode {
    options: VerificationOptions,
    /// What the cells show
    buffer: VerificationBuffer,
    /// Edits awaiting the caller's sync (controlled mode)
    pending: Option<VerificationBuffer>,
    controlled: bool,
    completed: bool,
    focus: FocusArena,
    handles: SmallVec<[FocusHandle; 8]>,
}

impl VerificationCode {
    /// Uncontrolled code seeded from a default value
    pub fn new(options: VerificationOptions, default_value: &str) -> Result<Self> {
        Self::build(options, default_value, false)
    }

    /// Code whose value is owned by the caller
    pub fn controlled(options: VerificationOptions, value: &str) -> Result<Self> {
        Self::build(options, value, true)
    }

    fn build(options: VerificationOptions, value: &str, controlled: bool) -> Result<Self> {
        let buffer = VerificationBuffer::from_value(options.length, value)?;
        let mut focus = FocusArena::new();
        let handles = (0..options.length)
            .map(|i| focus.insert(format!("cell-{i}")))
            .collect();

        Ok(Self {
            completed: buffer.is_full(),
            buffer,
            pending: None,
            controlled,
            focus,
            handles,
            options,
        })
    }

    pub fn options(&self) -> &VerificationOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// The committed buffer
    pub fn buffer(&self) -> &VerificationBuffer {
        &self.buffer
    }

    /// Joined value of the committed buffer
    pub fn value(&self) -> String {
        self.buffer.joined()
    }

    /// Apply mount-time focus
    pub fn mount(&mut self) {
        if self.options.auto_focus {
            self.focus_cell(0, FocusOrigin::Programmatic);
        }
    }

    /// Disable or enable every cell
    pub fn set_disabled(&mut self, disabled: bool) {
        for &handle in &self.handles {
            self.focus.set_disabled(handle, disabled);
        }
    }

    /// Focus a cell; false if the index is out of range or the cell is disabled
    pub fn focus_cell(&mut self, index: usize, origin: FocusOrigin) -> bool {
        match self.handles.get(index) {
            Some(&handle) => self.focus.focus(handle, origin),
            None => false,
        }
    }

    pub fn blur(&mut self) {
        self.focus.blur();
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.focus.focused().and_then(|h| self.focus.position(h))
    }

    pub fn focus_origin(&self) -> Option<FocusOrigin> {
        self.focus.focus_origin()
    }

    pub fn has_focus(&self) -> bool {
        self.focus.has_focus()
    }

    fn working(&self) -> &VerificationBuffer {
        self.pending.as_ref().unwrap_or(&self.buffer)
    }

    /// Write the first character of `text` into a cell, or clear it on empty text
    pub fn set_cell(&mut self, index: usize, text: &str) -> Result<CellUpdate> {
        let written = text.chars().next();
        let mut next = self.working().clone();
        next.set(index, written)?;

        let value = next.joined();
        let full = next.is_full();
        let completed = (full && !self.completed).then(|| value.clone());
        self.completed = full;
        if completed.is_some() {
            tracing::debug!(length = next.len(), "verification code complete");
        }

        if self.controlled {
            self.pending = Some(next);
        } else {
            self.buffer = next;
        }

        let mut focus_moved = None;
        if written.is_some() && index + 1 < self.len() {
            let origin = self.focus.focus_origin().unwrap_or_default();
            if self.focus_cell(index + 1, origin) {
                tracing::trace!(from = index, to = index + 1, "advance cell focus");
                focus_moved = Some(index + 1);
            }
        }

        Ok(CellUpdate {
            value,
            completed,
            focus_moved,
        })
    }

    /// Backspace pressed in a cell; moves focus back when the cell is empty
    ///
    /// Returns the cell that received focus. Nothing is deleted.
    pub fn backspace(&mut self, index: usize) -> Result<Option<usize>> {
        let length = self.len();
        if index >= length {
            return Err(KilnError::CellOutOfRange { index, length });
        }
        if self.working().get(index).is_some() || index == 0 {
            return Ok(None);
        }
        let origin = self.focus.focus_origin().unwrap_or_default();
        if self.focus_cell(index - 1, origin) {
            tracing::trace!(from = index, to = index - 1, "retreat cell focus");
            return Ok(Some(index - 1));
        }
        Ok(None)
    }

    /// Adopt the caller's value
    ///
    /// A pending edit whose joined value matches is kept as-is so that gaps
    /// between filled cells survive the round trip.
    pub fn sync(&mut self, value: &str) -> Result<()> {
        let next = match self.pending.take() {
            Some(pending) if pending.joined() == value => pending,
            _ => VerificationBuffer::from_value(self.len(), value)?,
        };
        self.completed = next.is_full();
        self.buffer = next;
        Ok(())
    }

    /// Clear every cell
    pub fn reset(&mut self) -> Result<()> {
        let empty = VerificationBuffer::new(self.len())?;
        self.completed = false;
        if self.controlled {
            self.pending = Some(empty);
        } else {
            self.buffer = empty;
        }
        Ok(())
    }

    /// Text shown in a cell
    pub fn display(&self, index: usize) -> String {
        match self.buffer.get(index) {
            Some(_) if self.options.secure => MASK.to_string(),
            Some(c) => c.to_string(),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(length: usize) -> VerificationCode {
        let options = VerificationOptions {
            length,
            ..Default::default()
        };
        VerificationCode::new(options, "").unwrap()
    }

    #[test]
    fn test_zero_length_is_rejected() {
        assert!(matches!(
            VerificationBuffer::new(0),
            Err(KilnError::InvalidLength)
        ));
        let options = VerificationOptions {
            length: 0,
            ..Default::default()
        };
        assert!(VerificationCode::new(options, "").is_err());
    }

    #[test]
    fn test_mount_focuses_first_cell() {
        let mut code = code(4);
        assert_eq!(code.focused_index(), None);
        code.mount();
        assert_eq!(code.focused_index(), Some(0));

        let mut manual = VerificationCode::new(
            VerificationOptions {
                auto_focus: false,
                ..Default::default()
            },
            "",
        )
        .unwrap();
        manual.mount();
        assert_eq!(manual.focused_index(), None);
    }

    #[test]
    fn test_typing_advances_focus() {
        let mut code = code(6);
        code.mount();
        let update = code.set_cell(0, "1").unwrap();
        assert_eq!(update.value, "1");
        assert_eq!(update.focus_moved, Some(1));
        assert_eq!(code.focused_index(), Some(1));

        // Only the first character is kept
        let update = code.set_cell(1, "23").unwrap();
        assert_eq!(update.value, "12");
        assert_eq!(code.focused_index(), Some(2));
    }

    #[test]
    fn test_last_cell_does_not_wrap() {
        let mut code = code(4);
        code.focus_cell(3, FocusOrigin::Keyboard);
        let update = code.set_cell(3, "9").unwrap();
        assert_eq!(update.focus_moved, None);
        assert_eq!(code.focused_index(), Some(3));
    }

    #[test]
    fn test_completion_fires_once() {
        let mut code = code(4);
        code.mount();
        for (i, c) in ["1", "2", "3"].iter().enumerate() {
            assert_eq!(code.set_cell(i, c).unwrap().completed, None);
        }
        let update = code.set_cell(3, "4").unwrap();
        assert_eq!(update.completed.as_deref(), Some("1234"));

        // Still full: no second completion
        let update = code.set_cell(2, "7").unwrap();
        assert_eq!(update.value, "1274");
        assert_eq!(update.completed, None);

        // Clearing and refilling completes again
        code.set_cell(1, "").unwrap();
        let update = code.set_cell(1, "5").unwrap();
        assert_eq!(update.completed.as_deref(), Some("1574"));
    }

    #[test]
    fn test_clearing_middle_cell_joins_filled_cells() {
        let mut code = code(4);
        for (i, c) in ["1", "2", "3", "4"].iter().enumerate() {
            code.set_cell(i, c).unwrap();
        }
        let update = code.set_cell(1, "").unwrap();
        assert_eq!(update.value, "134");
        assert_eq!(update.focus_moved, None);
        assert_eq!(code.buffer().get(1), None);
    }

    #[test]
    fn test_out_of_range_cell() {
        let mut code = code(4);
        assert!(matches!(
            code.set_cell(4, "1"),
            Err(KilnError::CellOutOfRange {
                index: 4,
                length: 4
            })
        ));
        assert!(code.backspace(9).is_err());
    }

    #[test]
    fn test_backspace_on_empty_cell_moves_back() {
        let mut code = code(4);
        code.mount();
        code.set_cell(0, "1").unwrap();
        assert_eq!(code.focused_index(), Some(1));

        assert_eq!(code.backspace(1).unwrap(), Some(0));
        assert_eq!(code.focused_index(), Some(0));
        // Nothing was deleted
        assert_eq!(code.value(), "1");

        // Filled cell, or the first cell: focus stays
        assert_eq!(code.backspace(0).unwrap(), None);
        code.focus_cell(0, FocusOrigin::Keyboard);
        assert_eq!(code.backspace(0).unwrap(), None);
    }

    #[test]
    fn test_disabled_cells_refuse_focus() {
        let mut code = code(3);
        code.set_disabled(true);
        code.mount();
        assert_eq!(code.focused_index(), None);
        code.set_disabled(false);
        assert!(code.focus_cell(2, FocusOrigin::Pointer));
    }

    #[test]
    fn test_secure_display() {
        let options = VerificationOptions {
            length: 4,
            secure: true,
            ..Default::default()
        };
        let code = VerificationCode::new(options, "12").unwrap();
        assert_eq!(code.display(0), "•");
        assert_eq!(code.display(2), "");
        assert_eq!(code.value(), "12");
    }

    #[test]
    fn test_controlled_waits_for_sync() {
        let options = VerificationOptions {
            length: 4,
            ..Default::default()
        };
        let mut code = VerificationCode::controlled(options, "").unwrap();
        code.mount();

        let update = code.set_cell(0, "8").unwrap();
        assert_eq!(update.value, "8");
        assert_eq!(code.value(), "");
        assert_eq!(code.focused_index(), Some(1));

        code.sync("8").unwrap();
        assert_eq!(code.value(), "8");

        // Caller substitutes its own value
        code.set_cell(1, "1").unwrap();
        code.sync("42").unwrap();
        assert_eq!(code.value(), "42");
        assert_eq!(code.buffer().get(1), Some('2'));
    }

    #[test]
    fn test_from_value_truncates() {
        let buffer = VerificationBuffer::from_value(3, "12345").unwrap();
        assert_eq!(buffer.joined(), "123");
        assert!(buffer.is_full());
    }
}
