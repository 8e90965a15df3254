//! Builder API for transition tables and state/trigger vocabularies.
//!
//! `TransitionTableBuilder` is the only way to obtain a
//! `TransitionTable`, and `build()` checks the whole table before handing
//! it out. The `state_enum!` and `trigger_enum!` macros declare the
//! vocabularies a table is written in.

pub mod error;
pub mod macros;
pub mod table;

pub use error::{BuildError, TableIssue};
pub use table::TransitionTableBuilder;
