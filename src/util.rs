use crate::constants::SCHEME_SEPARATOR;

/// Strips everything up to and including the first `://`.
///
/// Returns `None` when the value carries no scheme separator.
pub fn strip_scheme(value: &str) -> Option<&str> {
    value
        .find(SCHEME_SEPARATOR)
        .map(|index| &value[index + SCHEME_SEPARATOR.len()..])
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

/// `true` when `referer` is `allowed` followed by a path separator.
pub(crate) fn has_origin_prefix(referer: &str, allowed: &str) -> bool {
    referer
        .strip_prefix(allowed)
        .is_some_and(|rest| rest.starts_with('/'))
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
