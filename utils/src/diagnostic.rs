//! Quoted list rendering for diagnostic messages.
//!
//! Output is meant for humans and is never parsed back, so a backtick inside
//! an element is not escaped.

use std::fmt;

const QUOTE: char = '`';
const SEPARATOR: &str = ", ";

/// Renders `items` as `` `a`, `b` `` in input order. Empty input renders as "".
#[must_use]
pub fn format_quoted_list<S: AsRef<str>>(items: &[S]) -> String {
    QuotedList::new(items).to_string()
}

/// Borrowing [`fmt::Display`] adapter with the same output as [`format_quoted_list`].
///
/// ```
/// use provkit_utils::QuotedList;
///
/// let missing = ["admin", "owner"];
/// let message = format!("roles not assigned: {}", QuotedList::new(&missing));
/// assert_eq!(message, "roles not assigned: `admin`, `owner`");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct QuotedList<'a, S> {
    items: &'a [S],
}

impl<'a, S: AsRef<str>> QuotedList<'a, S> {
    #[must_use]
    pub fn new(items: &'a [S]) -> Self {
        Self { items }
    }
}

impl<S: AsRef<str>> fmt::Display for QuotedList<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(SEPARATOR)?;
            }
            write!(f, "{QUOTE}{}{QUOTE}", item.as_ref())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{QuotedList, format_quoted_list};

    #[test]
    fn empty_renders_empty() {
        assert_eq!(format_quoted_list::<&str>(&[]), "");
    }

    #[test]
    fn single_has_no_separator() {
        assert_eq!(format_quoted_list(&["viewer"]), "`viewer`");
    }

    #[test]
    fn pair_joined_in_order() {
        assert_eq!(format_quoted_list(&["a", "b"]), "`a`, `b`");
    }

    #[test]
    fn regions_scenario() {
        let regions = vec!["us-east-1".to_string(), "eu-west-1".to_string()];
        assert_eq!(format_quoted_list(&regions), "`us-east-1`, `eu-west-1`");
    }

    #[test]
    fn quote_inside_element_is_not_escaped() {
        assert_eq!(format_quoted_list(&["a`b"]), "`a`b`");
    }

    #[test]
    fn display_adapter_matches() {
        let items = ["x", "y", "z"];
        assert_eq!(
            format!("[{}]", QuotedList::new(&items)),
            format!("[{}]", format_quoted_list(&items))
        );
    }

    proptest! {
        #[test]
        fn formatting_is_idempotent_and_leaves_input(items in prop::collection::vec("[a-z ]{0,8}", 0..10)) {
            let before = items.clone();
            let first = format_quoted_list(&items);
            let second = format_quoted_list(&items);
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(&items, &before);

            let expected_len: usize = items.iter().map(|s| s.len() + 2).sum::<usize>()
                + items.len().saturating_sub(1) * 2;
            prop_assert_eq!(first.len(), expected_len);
        }
    }
}
