use std::borrow::Cow;

use crate::error::Result;
use crate::patterns::{group, patterns};

/// Check if `haystack` contains any of `needles` (memchr substring search)
fn contains_any<S: AsRef<str>>(haystack: &str, needles: &[S]) -> bool {
    needles.iter().map(AsRef::as_ref).any(|needle| {
        !needle.is_empty() && memchr::memmem::find(haystack.as_bytes(), needle.as_bytes()).is_some()
    })
}

/// Split an opaque hier-part into authority and path.
///
/// Without a scheme or `//` marker the text before the first `/` could be a
/// host or the start of a relative path. Two corrections move it to the path:
/// an authority carrying one of `extensions` (`index.php`), and a bare `.` or
/// `..` followed by a path segment.
pub(crate) fn split_authority<'a, S: AsRef<str>>(
    opaque: &'a str,
    extensions: &[S],
) -> Result<(Cow<'a, str>, Cow<'a, str>)> {
    let caps = patterns()?.authority_path.captures(opaque);
    let caps = caps.as_ref();

    let mut authority = Cow::Borrowed(group(caps, "authority"));
    let mut path = Cow::Borrowed(group(caps, "path"));

    if contains_any(&authority, extensions) {
        log::trace!("[laxurl::authority]: filename {authority:?} moved to path");
        let mut joined = format!("{authority}{path}");
        if !joined.contains('/') && !joined.contains("./") {
            joined.insert_str(0, "./");
        }
        path = Cow::Owned(joined);
        authority = Cow::Borrowed("");
    }

    if matches!(&*authority, "." | "..") && path.starts_with('/') {
        log::trace!("[laxurl::authority]: directory reference {authority:?} moved to path");
        path = Cow::Owned(format!("{authority}{path}"));
        authority = Cow::Borrowed("");
    }

    Ok((authority, path))
}
