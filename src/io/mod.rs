//! Instance loading and result writing.
//!
//! # Input Format
//!
//! Whitespace separated, one record per line:
//!
//! ```text
//! C P
//! <contributor name> N          ─┐ C times
//! <skill> <level>    (N lines)  ─┘
//! <project name> days score best_before R   ─┐ P times
//! <skill> <level>    (R lines)               ─┘
//! ```
//!
//! # Output Format
//!
//! ```text
//! <number of completed projects>
//! <project name>
//! <contributor> <contributor> ...   (one per role, role order)
//! ```

mod reader;
mod writer;

pub use reader::{parse_instance, read_instance, ParseError};
pub use writer::{format_results, write_results, write_results_file};
