//! Select-control option lists rebuilt from fetched results.
//!
//! A dropdown is always rebuilt whole: one sentinel option with an empty value
//! and a caller-chosen label, followed by one option per result item in order.

pub mod builder;
pub mod collection;
pub mod error;
pub mod item;
pub mod select;
pub mod state;
pub mod target;

pub use builder::{Dropdown, build_dropdown};
pub use collection::ResultCollection;
pub use error::{DropdownError, Result};
pub use item::{ItemId, OptionSource, ResultItem};
pub use select::{SelectState, SharedSelect};
pub use state::State;
pub use target::{OptionTarget, SelectOption};

pub mod prelude {
    pub use crate::builder::{Dropdown, build_dropdown};
    pub use crate::collection::ResultCollection;
    pub use crate::error::{DropdownError, Result};
    pub use crate::item::{ItemId, OptionSource, ResultItem};
    pub use crate::select::{SelectState, SharedSelect};
    pub use crate::state::State;
    pub use crate::target::{OptionTarget, SelectOption};
}
