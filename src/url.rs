use crate::checkers::parse_port;

/// Username and password of a URL authority.
///
/// `username` is always present, possibly empty. A password is only recorded
/// when the text after the first `:` is non-empty, so `user:@host` and
/// `user@host` both report no password. The password is everything after
/// that first `:`, so `user:pa:ss@host` has password `pa:ss` rather than
/// stopping at the second colon.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Userinfo {
    pub(crate) username: String,
    pub(crate) password: Option<String>,
}

impl Userinfo {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Check if a non-empty password was supplied
    pub fn password_set(&self) -> bool {
        self.password.is_some()
    }
}

/// A decomposed URL.
///
/// All components are raw, un-decoded substrings of the input. Produced by
/// [`decompose`](crate::decompose) or [`Decomposer::decompose`](crate::Decomposer::decompose)
/// and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Url {
    pub(crate) input: String,

    pub(crate) scheme: String,
    pub(crate) double_slash: String,
    pub(crate) opaque: String,
    pub(crate) query: String,
    pub(crate) fragment: String,

    pub(crate) authority: String,
    pub(crate) path: String,

    pub(crate) user: Userinfo,
    pub(crate) host: String,
    pub(crate) port: String,

    pub(crate) relative: bool,
}

impl Url {
    /// Record for a bare relative filename: only the path is set
    pub(crate) fn primitive_path(input: &str) -> Self {
        Self {
            input: input.to_string(),
            path: format!("./{input}"),
            relative: true,
            ..Self::default()
        }
    }

    /// Get the original input, verbatim
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Get the scheme, without the trailing `:`
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Get the double slash marker, `"//"` or empty
    pub fn double_slash(&self) -> &str {
        &self.double_slash
    }

    /// Get the hier-part between the scheme/`//` marker and `?`/`#`
    pub fn opaque(&self) -> &str {
        &self.opaque
    }

    /// Get the query, without the leading `?`
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Get the fragment, without the leading `#`
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn authority(&self) -> &str {
        &self.authority
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn user(&self) -> &Userinfo {
        &self.user
    }

    /// Get the host; IPv6 literals are returned without brackets
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Get the port string (all digits, or empty)
    pub fn port(&self) -> &str {
        &self.port
    }

    /// Get the port as a number, `None` if empty or out of range
    pub fn port_number(&self) -> Option<u16> {
        parse_port(&self.port)
    }

    /// Check if the URL has no scheme, `//` marker, authority or port.
    ///
    /// A bare `host:port` is not relative.
    pub fn is_relative(&self) -> bool {
        self.relative
    }
}

/// Classify a URL as relative from its already split components
pub(crate) fn is_relative(scheme: &str, double_slash: &str, authority: &str, port: &str) -> bool {
    scheme.is_empty() && double_slash.is_empty() && authority.is_empty() && port.is_empty()
}

impl core::fmt::Display for Url {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.input)
    }
}
