//! Option list builder.
//!
//! Rebuilds a select control as one sentinel option (empty value, caller
//! label) followed by one option per result, in result order. Inputs are
//! validated and the complete list computed before the target is touched, so
//! a failed call leaves the control as it was.

use serde_json::Value;

use crate::collection::ResultCollection;
use crate::error::{DropdownError, Result};
use crate::item::OptionSource;
use crate::target::{OptionTarget, SelectOption};

/// Rebuilds `target` from `results`.
///
/// `target` is optional so callers holding a control that may not have been
/// mounted yet can pass it through; `None` fails with
/// [`DropdownError::MissingTarget`] and nothing is changed.
///
/// # Example
///
/// ```
/// use dropdown::{ResultCollection, ResultItem, SelectOption, build_dropdown};
///
/// let results = ResultCollection::from(vec![ResultItem::new(1, "Alice")]);
/// let mut options: Vec<SelectOption> = Vec::new();
/// build_dropdown(&results, Some(&mut options), "-- choose --").unwrap();
///
/// assert_eq!(options[0], SelectOption::sentinel("-- choose --"));
/// assert_eq!(options[1], SelectOption::new("1", "Alice"));
/// ```
pub fn build_dropdown<T>(
    results: &ResultCollection,
    target: Option<&mut T>,
    empty_label: &str,
) -> Result<()>
where
    T: OptionTarget + ?Sized,
{
    let target = target.ok_or(DropdownError::MissingTarget)?;
    Dropdown::new(empty_label).build(results, target);
    Ok(())
}

/// Builds option lists with a fixed empty label.
///
/// Holds nothing but the label; every build starts from scratch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dropdown {
    empty_label: String,
}

impl Dropdown {
    pub fn new(empty_label: impl Into<String>) -> Self {
        Self {
            empty_label: empty_label.into(),
        }
    }

    pub fn empty_label(&self) -> &str {
        &self.empty_label
    }

    /// The option list `results` renders to, without touching any control.
    pub fn options(&self, results: &ResultCollection) -> Vec<SelectOption> {
        self.options_from(results.iter())
    }

    /// Replaces every option of `target`.
    pub fn build<T>(&self, results: &ResultCollection, target: &mut T)
    where
        T: OptionTarget + ?Sized,
    {
        self.install(self.options(results), target);
    }

    /// Replaces every option of `target` with options taken from any source
    /// items, in iteration order.
    pub fn build_from<I, T>(&self, items: I, target: &mut T)
    where
        I: IntoIterator,
        I::Item: OptionSource,
        T: OptionTarget + ?Sized,
    {
        self.install(self.options_from(items), target);
    }

    /// Decodes a fetched JSON payload and rebuilds `target` from it.
    ///
    /// The payload is fully validated first; on error `target` is unchanged.
    pub fn build_json<T>(&self, payload: &Value, target: &mut T) -> Result<()>
    where
        T: OptionTarget + ?Sized,
    {
        let results = ResultCollection::from_json(payload)?;
        self.build(&results, target);
        Ok(())
    }

    fn options_from<I>(&self, items: I) -> Vec<SelectOption>
    where
        I: IntoIterator,
        I::Item: OptionSource,
    {
        std::iter::once(SelectOption::sentinel(self.empty_label.as_str()))
            .chain(
                items
                    .into_iter()
                    .map(|item| SelectOption::new(item.option_value(), item.option_label())),
            )
            .collect()
    }

    fn install<T>(&self, options: Vec<SelectOption>, target: &mut T)
    where
        T: OptionTarget + ?Sized,
    {
        log::debug!(
            "Dropdown::build empty_label={:?} options_count={}",
            self.empty_label,
            options.len()
        );
        target.replace_options(options);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::item::ResultItem;

    #[test]
    fn test_options_sentinel_first() {
        let dropdown = Dropdown::new("None");
        let results = ResultCollection::from(vec![ResultItem::new("a", "A")]);
        assert_eq!(
            dropdown.options(&results),
            vec![SelectOption::sentinel("None"), SelectOption::new("a", "A")]
        );
    }

    #[test]
    fn test_missing_target() {
        let results = ResultCollection::Empty;
        let err = build_dropdown::<Vec<SelectOption>>(&results, None, "x").unwrap_err();
        assert!(matches!(err, DropdownError::MissingTarget));
    }

    #[test]
    fn test_build_json_rejects_without_touching_target() {
        let mut target = vec![SelectOption::new("9", "Stale")];
        let err = Dropdown::new("x")
            .build_json(&json!({"id": 1}), &mut target)
            .unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(target, vec![SelectOption::new("9", "Stale")]);
    }

    #[test]
    fn test_build_from_tuples() {
        let mut target: Vec<SelectOption> = Vec::new();
        Dropdown::new("").build_from([("hs", "Human"), ("mm", "Mouse")], &mut target);
        assert_eq!(target.len(), 3);
        assert_eq!(target[2], SelectOption::new("mm", "Mouse"));
    }
}
