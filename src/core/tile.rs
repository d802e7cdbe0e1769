//! Grid cells and their tag stacks
//!
//! Each cell keeps the tags it has been given in insertion order. Typing a
//! letter pushes `Guessing`, deleting pops the last tag, and scoring pushes
//! `Guessed` followed by at most one of `Correct` or `Shifted`.

use super::Feedback;

/// A visual tag attached to a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Letter typed into the active row
    Guessing,
    /// Row has been submitted and scored
    Guessed,
    /// Letter is in the right position
    Correct,
    /// Letter is in the word at another position
    Shifted,
}

impl Tag {
    /// Lowercase tag name, e.g. for CSS-like class lists
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Guessing => "guessing",
            Self::Guessed => "guessed",
            Self::Correct => "correct",
            Self::Shifted => "shifted",
        }
    }
}

/// One letter slot of the grid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    value: Option<char>,
    tags: Vec<Tag>,
}

impl Cell {
    /// The typed letter, if any
    #[inline]
    #[must_use]
    pub const fn value(&self) -> Option<char> {
        self.value
    }

    /// Tags in the order they were added
    #[inline]
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    #[inline]
    #[must_use]
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    /// Empty and untagged
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.value.is_none() && self.tags.is_empty()
    }

    /// Scored colour of the cell, `None` until its row is submitted
    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        if self.has_tag(Tag::Correct) {
            Some(Feedback::Correct)
        } else if self.has_tag(Tag::Shifted) {
            Some(Feedback::Shifted)
        } else if self.has_tag(Tag::Guessed) {
            Some(Feedback::Absent)
        } else {
            None
        }
    }

    pub(crate) fn fill(&mut self, letter: char) {
        self.value = Some(letter);
        self.tags.push(Tag::Guessing);
    }

    pub(crate) fn clear(&mut self) {
        self.value = None;
        self.tags.pop();
    }

    pub(crate) fn push_tag(&mut self, tag: Tag) {
        self.tags.push(tag);
    }
}

/// Fixed-size grid of cells: one row per allowed guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create an empty grid of `height` rows with `width` cells each
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            rows: vec![vec![Cell::default(); width]; height],
        }
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Cells of one row
    ///
    /// # Panics
    /// Panics if `row >= self.height()`
    #[must_use]
    pub fn row(&self, row: usize) -> &[Cell] {
        &self.rows[row]
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [Cell] {
        &mut self.rows[row]
    }

    /// Get a cell, or `None` when out of bounds
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|cells| cells.get(col))
    }

    pub(crate) fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.rows.get_mut(row).and_then(|cells| cells.get_mut(col))
    }

    /// Iterate over all rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Concatenated letters of a row; empty cells are skipped
    #[must_use]
    pub fn row_text(&self, row: usize) -> String {
        self.rows
            .get(row)
            .map(|cells| cells.iter().filter_map(Cell::value).collect())
            .unwrap_or_default()
    }
}
