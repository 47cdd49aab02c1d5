//! Process-wide compiled matchers, one per pipeline stage.
//!
//! None of the patterns is end-anchored: a match covers the longest prefix
//! the groups accept and whatever follows is dropped.
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::error::Result;

/// Letters, digits, hyphen or dot, zero or more, and nothing else
const PRIMITIVE_PATH: &str = r"^[a-zA-Z0-9.-]*$";

/// `scheme:` `//` opaque `?query` `#fragment`, every group optional
const COMPONENTS: &str = concat!(
    r"^(?P<prefix>(?P<scheme>[^:?/.]+):)?",
    r"(?P<double_slash>(?://)?)",
    r"(?P<opaque>[^?#]+)?",
    r"(?:\?(?P<query>[^#]+))?",
    r"(?:#(?P<fragment>.*))?",
);

/// Authority up to the first `/`, path from it onwards
const AUTHORITY_PATH: &str = r"(?P<authority>[^/]+)?(?P<path>/.*)?";

/// Bracketed literal or plain host, then an all-digit port
const HOST_PORT: &str = r"(?:\[(?P<host6>[^\]]+)\]|(?P<host>[^:]+))?(?::(?P<port>[0-9]+))?";

/// The compiled matcher set
#[derive(Debug)]
pub(crate) struct Patterns {
    pub primitive_path: Regex,
    pub components: Regex,
    pub authority_path: Regex,
    pub host_port: Regex,
}

impl Patterns {
    fn compile() -> Result<Self> {
        Ok(Self {
            primitive_path: Regex::new(PRIMITIVE_PATH)?,
            components: Regex::new(COMPONENTS)?,
            authority_path: Regex::new(AUTHORITY_PATH)?,
            host_port: Regex::new(HOST_PORT)?,
        })
    }
}

static PATTERNS: Lazy<Result<Patterns>> = Lazy::new(|| {
    let patterns = Patterns::compile();
    if let Err(err) = &patterns {
        log::error!("[laxurl::patterns]: failed to build matcher set: {err}");
    }
    patterns
});

/// Get the shared matcher set, building it on first use
pub(crate) fn patterns() -> Result<&'static Patterns> {
    match &*PATTERNS {
        Ok(patterns) => Ok(patterns),
        Err(err) => Err(err.clone()),
    }
}

/// Text of a named group, empty when the group did not participate
pub(crate) fn group<'h>(caps: Option<&Captures<'h>>, name: &str) -> &'h str {
    caps.and_then(|caps| caps.name(name))
        .map_or("", |m| m.as_str())
}
