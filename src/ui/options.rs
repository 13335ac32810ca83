use std::sync::Arc;

use snafu::prelude::*;

use crate::ui::element::Element;

/// Class carried by the currently selected option card.
const SELECTED_CLASS: &str = "selected";

/// Handles to one answer option: the visible card and its radio input.
#[derive(Clone)]
pub struct QuizOption {
    pub card: Arc<dyn Element>,
    pub input: Arc<dyn Element>,
}

/// Single-choice selection across the answer options of one question card.
///
/// Selecting an option clears the highlight from every other card, marks the
/// chosen one and checks its radio input, so the recorded choice and the
/// visible one can never diverge.
pub struct OptionGroup {
    options: Vec<QuizOption>,
    selected: Option<usize>,
}

impl OptionGroup {
    /// Creates a new [`OptionGroup`] with nothing selected.
    pub fn new(options: Vec<QuizOption>) -> Self {
        Self {
            options,
            selected: None,
        }
    }

    /// Select the option at `index`, replacing any previous selection.
    ///
    /// # Errors
    ///
    /// This function will return an error if the index is out of range.
    pub fn select(&mut self, index: usize) -> Result<(), SelectOptionError> {
        ensure!(
            index < self.options.len(),
            OutOfRangeSnafu {
                index,
                count: self.options.len(),
            }
        );

        for option in &self.options {
            option.card.remove_class(SELECTED_CLASS);
        }

        let chosen = &self.options[index];
        chosen.card.add_class(SELECTED_CLASS);
        chosen.input.set_checked(true);
        self.selected = Some(index);

        Ok(())
    }

    /// Index of the currently selected option, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }
}

/// An error type of selecting an answer option.
#[derive(Debug, Clone, Snafu, PartialEq, Eq)]
#[non_exhaustive]
pub enum SelectOptionError {
    #[snafu(display("Option index {index} is out of range for {count} options"))]
    #[non_exhaustive]
    OutOfRange { index: usize, count: usize },
}
