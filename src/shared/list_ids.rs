use std::cmp::Ordering;
use std::collections::HashSet;

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ListIdError {
    #[error("item at position {0} has an empty id")]
    Empty(usize),
    #[error("duplicate id '{0}'")]
    Duplicate(String),
}

/// Ids of a replace-all list must be non-blank and distinct.
pub fn validate_list_ids<'a, I>(ids: I) -> Result<(), ListIdError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for (position, id) in ids.into_iter().enumerate() {
        if id.trim().is_empty() {
            return Err(ListIdError::Empty(position));
        }
        if !seen.insert(id) {
            return Err(ListIdError::Duplicate(id.to_string()));
        }
    }
    Ok(())
}

/// Display order for text ids. Numeric ids compare as numbers and sort
/// before the rest, which compare as text.
pub fn compare_list_ids(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<u64>(), b.trim().parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
