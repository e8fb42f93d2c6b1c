//! The write interface of a select control.

use serde::{Deserialize, Serialize};

/// One entry of a select control: the submitted value and the shown label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// The "no selection" entry: empty value, caller-chosen label.
    pub fn sentinel(label: impl Into<String>) -> Self {
        Self::new(String::new(), label)
    }

    pub fn is_sentinel(&self) -> bool {
        self.value.is_empty()
    }
}

impl<A: Into<String>, B: Into<String>> From<(A, B)> for SelectOption {
    fn from((value, label): (A, B)) -> Self {
        Self::new(value, label)
    }
}

/// A control whose option list can be rebuilt.
///
/// Only two primitives are required. Controls that can swap their whole list
/// in one step should also override [`replace_options`](Self::replace_options);
/// with the provided default, each append is applied separately and a reader
/// on another handle may observe a partially rebuilt list during the call.
pub trait OptionTarget {
    /// Removes every option.
    fn clear_options(&mut self);

    /// Adds an option after the existing ones.
    fn append_option(&mut self, value: &str, label: &str);

    /// Replaces the whole option list with `options`, in order.
    fn replace_options(&mut self, options: Vec<SelectOption>) {
        self.clear_options();
        for option in &options {
            self.append_option(&option.value, &option.label);
        }
    }
}

impl OptionTarget for Vec<SelectOption> {
    fn clear_options(&mut self) {
        self.clear();
    }

    fn append_option(&mut self, value: &str, label: &str) {
        self.push(SelectOption::new(value, label));
    }

    fn replace_options(&mut self, options: Vec<SelectOption>) {
        *self = options;
    }
}

impl<T: OptionTarget + ?Sized> OptionTarget for &mut T {
    fn clear_options(&mut self) {
        (**self).clear_options();
    }

    fn append_option(&mut self, value: &str, label: &str) {
        (**self).append_option(value, label);
    }

    fn replace_options(&mut self, options: Vec<SelectOption>) {
        (**self).replace_options(options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records the primitive calls it receives.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl OptionTarget for Recorder {
        fn clear_options(&mut self) {
            self.calls.push("clear".into());
        }

        fn append_option(&mut self, value: &str, label: &str) {
            self.calls.push(format!("append {value}={label}"));
        }
    }

    #[test]
    fn test_default_replace_clears_then_appends() {
        let mut target = Recorder::default();
        target.replace_options(vec![SelectOption::sentinel("None"), ("1", "A").into()]);
        assert_eq!(target.calls, ["clear", "append =None", "append 1=A"]);
    }

    #[test]
    fn test_vec_target() {
        let mut target = vec![SelectOption::new("9", "Stale")];
        target.clear_options();
        target.append_option("", "x");
        assert_eq!(target, vec![SelectOption::sentinel("x")]);
    }

    #[test]
    fn test_sentinel() {
        assert!(SelectOption::sentinel("pick").is_sentinel());
        assert!(!SelectOption::new("0", "zero").is_sentinel());
    }
}
