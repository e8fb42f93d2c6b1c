//! In-memory select control.

use crate::state::State;
use crate::target::{OptionTarget, SelectOption};

/// State of a single-choice select control.
///
/// Holds the option list, the selected value and whether the dropdown is
/// open.
///
/// # Example
///
/// ```
/// use dropdown::{SelectOption, SelectState};
///
/// let country = SelectState::new([
///     ("us", "United States"),
///     ("uk", "United Kingdom"),
/// ])
/// .with_value("uk");
///
/// assert_eq!(country.selected_label(), Some("United Kingdom"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectState {
    /// Whether the dropdown is open.
    pub open: bool,
    /// The currently selected value, if any.
    pub value: Option<String>,
    /// Available options in display order.
    pub options: Vec<SelectOption>,
}

impl SelectState {
    /// Create a new SelectState with the given options and nothing selected.
    pub fn new(options: impl IntoIterator<Item = impl Into<SelectOption>>) -> Self {
        Self {
            open: false,
            value: None,
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Set the initial selected value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Label of the selected option, if the selected value is present.
    pub fn selected_label(&self) -> Option<&str> {
        let value = self.value.as_deref()?;
        self.options
            .iter()
            .find(|opt| opt.value == value)
            .map(|opt| opt.label.as_str())
    }

    // A rebuilt list starts at its first entry and closed, like a browser
    // select after its contents are replaced.
    fn reset_selection(&mut self) {
        self.open = false;
        self.value = self.options.first().map(|opt| opt.value.clone());
    }
}

impl OptionTarget for SelectState {
    fn clear_options(&mut self) {
        self.options.clear();
        self.value = None;
        self.open = false;
    }

    fn append_option(&mut self, value: &str, label: &str) {
        self.options.push(SelectOption::new(value, label));
        if self.value.is_none() {
            self.value = Some(value.to_string());
        }
    }

    fn replace_options(&mut self, options: Vec<SelectOption>) {
        self.options = options;
        self.reset_selection();
    }
}

/// A select control shared with the UI layer.
pub type SharedSelect = State<SelectState>;

impl OptionTarget for State<SelectState> {
    fn clear_options(&mut self) {
        self.update(SelectState::clear_options);
    }

    fn append_option(&mut self, value: &str, label: &str) {
        self.update(|s| s.append_option(value, label));
    }

    /// Swaps the list under one write lock, so other handles never see a
    /// half-built list.
    fn replace_options(&mut self, options: Vec<SelectOption>) {
        log::trace!("SharedSelect::replace_options count={}", options.len());
        self.update(|s| s.replace_options(options));
    }
}
