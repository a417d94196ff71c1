//! Collection expansion.
//!
//! Converts an [`OptionalCollection`] into the ordered `Vec<String>` a
//! downstream API call takes. `None` means "nothing to send": the collection
//! was absent, unknown, or (in [`DecodePolicy::Omit`] mode) an element failed
//! to decode. A present collection with no elements expands to `Some(vec![])`.

use provkit_types::{DecodeError, DecodePolicy, ElementDecoder, OptionalCollection};

/// Expand a collection, collapsing decode failures into `None`.
///
/// The swallowed [`DecodeError`] is logged at debug level.
#[must_use]
pub fn expand<D: ElementDecoder>(
    collection: &OptionalCollection,
    decoder: D,
) -> Option<Vec<String>> {
    match try_expand(collection, decoder) {
        Ok(expanded) => expanded,
        Err(err) => {
            tracing::debug!(index = err.index(), "collection expansion omitted: {err}");
            None
        }
    }
}

/// Expand a collection, surfacing decode failures.
///
/// Absent and unknown collections are `Ok(None)`. Decoding stops at the
/// first failing element; no partial sequence is returned.
pub fn try_expand<D: ElementDecoder>(
    collection: &OptionalCollection,
    decoder: D,
) -> Result<Option<Vec<String>>, DecodeError> {
    let Some(elements) = collection.elements() else {
        return Ok(None);
    };

    elements
        .iter()
        .enumerate()
        .map(|(index, value)| decoder.decode(index, value))
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

/// Expand a collection, handling decode failures as `policy` says.
pub fn expand_with_policy<D: ElementDecoder>(
    collection: &OptionalCollection,
    decoder: D,
    policy: DecodePolicy,
) -> Result<Option<Vec<String>>, DecodeError> {
    match policy {
        DecodePolicy::Omit => Ok(expand(collection, decoder)),
        DecodePolicy::Reject => try_expand(collection, decoder),
    }
}
