/// Fragment normalization
///
/// All functions are **pure**: given same input, always produce same output
/// with no side effects.

use std::borrow::Cow;

/// Characters a browser fragment may carry before the path proper: the hash
/// marker, the legacy hashbang marker, and redundant separators.
const FRAGMENT_MARKERS: [char; 3] = ['#', '!', '/'];

/// Validates whether a fragment is already in canonical form
///
/// # Rules
///
/// - Must start with `/`
/// - The character after the leading `/` must not be another separator or
///   fragment marker
/// - The empty string is not canonical (it normalizes to `/`)
///
/// # Examples
///
/// ```
/// use hashline_router::path::is_canonical_fragment;
///
/// assert!(is_canonical_fragment("/"));
/// assert!(is_canonical_fragment("/about"));
/// assert!(is_canonical_fragment("/item/1"));
///
/// assert!(!is_canonical_fragment(""));
/// assert!(!is_canonical_fragment("#/about"));
/// assert!(!is_canonical_fragment("//about"));
/// assert!(!is_canonical_fragment("about"));
/// ```
pub fn is_canonical_fragment(fragment: &str) -> bool {
    let mut chars = fragment.chars();
    if chars.next() != Some('/') {
        return false;
    }
    !chars.next().is_some_and(|c| FRAGMENT_MARKERS.contains(&c))
}

/// Normalize a raw browser fragment to a canonical path
///
/// **Pure function** with zero-copy optimization using `Cow<'_, str>`:
/// returns `Cow::Borrowed` when the input is already canonical.
///
/// Strips the leading run of fragment markers (`#`, `!`) and separators and
/// re-attaches exactly one leading `/`. An empty or marker-only fragment
/// normalizes to the root path `/`. Idempotent: normalizing a canonical path
/// returns it unchanged.
///
/// # Examples
///
/// ```
/// use hashline_router::path::normalize_fragment;
/// use std::borrow::Cow;
///
/// // Canonical paths: zero allocations
/// let path = normalize_fragment("/about");
/// assert!(matches!(path, Cow::Borrowed("/about")));
///
/// assert_eq!(normalize_fragment("#/item/1"), "/item/1");
/// assert_eq!(normalize_fragment("#!/item/1"), "/item/1");
/// assert_eq!(normalize_fragment("///about"), "/about");
/// assert_eq!(normalize_fragment(""), "/");
/// assert_eq!(normalize_fragment("#"), "/");
/// ```
pub fn normalize_fragment(fragment: &str) -> Cow<'_, str> {
    if is_canonical_fragment(fragment) {
        return Cow::Borrowed(fragment);
    }

    let trimmed = fragment.trim_start_matches(FRAGMENT_MARKERS);
    if trimmed.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{trimmed}"))
    }
}
