//! Collection helpers for provider resource logic.
//!
//! Three independent, pure components that resource code calls around an API request:
//!
//! - **`expand`**: Optional collection to `Vec<String>` (or "nothing to send")
//! - **`diagnostic`**: Backtick-quoted, comma-separated lists for error messages
//! - **`containment`**: Whether a required identifier set is contained in an observed one

pub mod containment;
pub mod diagnostic;
pub mod expand;

pub use containment::{contains_all, missing_elements};
pub use diagnostic::{QuotedList, format_quoted_list};
pub use expand::{expand, expand_with_policy, try_expand};
