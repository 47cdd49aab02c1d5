use std::borrow::Cow;

use crate::error::Result;
use crate::patterns::{group, patterns};

/// The five top-level components of a URL string.
///
/// Every field is a raw substring of the input. `opaque` is only owned when a
/// reserved scheme token had to be folded back into it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Components<'a> {
    pub scheme: &'a str,
    /// `"//"` or empty
    pub double_slash: &'a str,
    pub opaque: Cow<'a, str>,
    pub query: &'a str,
    pub fragment: &'a str,
}

/// Split `input` into scheme, double slash, opaque, query and fragment.
///
/// A captured scheme equal to one of `reserved` is not a scheme: it is
/// prepended to the opaque part and the scheme is cleared, so that
/// `localhost:8080` stays a host and port.
pub(crate) fn split_components<'a, S: AsRef<str>>(
    input: &'a str,
    reserved: &[S],
) -> Result<Components<'a>> {
    let caps = patterns()?.components.captures(input);
    let caps = caps.as_ref();

    let prefix = group(caps, "prefix");
    let mut components = Components {
        scheme: group(caps, "scheme"),
        double_slash: group(caps, "double_slash"),
        opaque: Cow::Borrowed(group(caps, "opaque")),
        query: group(caps, "query"),
        fragment: group(caps, "fragment"),
    };

    if let Some(token) = reserved
        .iter()
        .map(AsRef::as_ref)
        .find(|token| !token.is_empty() && *token == components.scheme)
    {
        let fold = if prefix.strip_suffix(':') == Some(token) {
            prefix
        } else {
            token
        };
        log::trace!("[laxurl::split]: reserved scheme {token:?} folded into opaque");
        components.opaque = Cow::Owned(format!("{fold}{}", components.opaque));
        components.scheme = "";
    }

    Ok(components)
}
