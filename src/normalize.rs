use enumset::{EnumSet, EnumSetType, enum_set};

use crate::checkers::{NumericHost, numeric_host};
use crate::decomposer::decompose;
use crate::error::Result;
use crate::generic::host_with_port;
use crate::ipv4::{parse_ipv4, serialize_ipv4};
use crate::scheme::SchemeType;
use crate::unicode::idna::domain_to_unicode;
use crate::unicode::percent_encode::{
    FRAGMENT_SET, PATH_SET, QUERY_SET, decode_unnecessary, encode_necessary, uppercase_escapes,
};
use crate::url::Url;

/// A single normalization step
#[derive(EnumSetType, Debug)]
pub enum Normalization {
    /// `http://host:80/` becomes `http://host/`
    RemoveDefaultPort,
    /// `http://3232235777/` becomes `http://192.168.1.1/`
    DecodeDwordHost,
    /// `http://0300.0250.01.01/` becomes `http://192.168.1.1/`
    DecodeOctalHost,
    /// `http://0xC0A80101/` becomes `http://192.168.1.1/`
    DecodeHexHost,
    /// `http://host.com./` becomes `http://host.com/`
    RemoveUnnecessaryHostDots,
    /// `http://host/a/./b/../c` becomes `http://host/a/c`
    RemoveDotSegments,
    /// `http://host//a///b` becomes `http://host/a/b`
    RemoveDuplicateSlashes,
    /// `%3a` becomes `%3A`
    UppercaseEscapes,
    /// `%7Euser` becomes `~user`
    DecodeUnnecessaryEscapes,
    /// `/a b` becomes `/a%20b`
    EncodeNecessaryEscapes,
    /// `?b=2&a=1` becomes `?a=1&b=2`
    SortQuery,
}

/// Every normalization step
pub const DEFAULT_NORMALIZATION: EnumSet<Normalization> = enum_set!(
    Normalization::RemoveDefaultPort
        | Normalization::DecodeDwordHost
        | Normalization::DecodeOctalHost
        | Normalization::DecodeHexHost
        | Normalization::RemoveUnnecessaryHostDots
        | Normalization::RemoveDotSegments
        | Normalization::RemoveDuplicateSlashes
        | Normalization::UppercaseEscapes
        | Normalization::DecodeUnnecessaryEscapes
        | Normalization::EncodeNecessaryEscapes
        | Normalization::SortQuery
);

/// A configurable URL normalizer.
///
/// The host is always decoded from Punycode and lowercased together with the
/// scheme; the remaining steps are selected by a set of [`Normalization`]
/// flags. Userinfo is not part of the output. A URL without authority keeps
/// its opaque part verbatim.
///
/// # Examples
///
/// ```
/// use laxurl::{Normalization, Normalizer, enum_set};
///
/// let url = laxurl::decompose("HTTP://Example.COM:80/a/./b/../c?b=2&a=1").unwrap();
/// assert_eq!(
///     Normalizer::new().normalize(&url).unwrap(),
///     "http://example.com/a/c?a=1&b=2"
/// );
///
/// let only_sort = Normalizer::with_flags(enum_set!(Normalization::SortQuery));
/// assert_eq!(
///     only_sort.normalize(&url).unwrap(),
///     "http://example.com:80/a/./b/../c?a=1&b=2"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalizer {
    flags: EnumSet<Normalization>,
}

impl Normalizer {
    /// Create a normalizer running every step
    pub fn new() -> Self {
        Self::with_flags(DEFAULT_NORMALIZATION)
    }

    /// Create a normalizer running only the given steps
    pub fn with_flags(flags: EnumSet<Normalization>) -> Self {
        Self { flags }
    }

    /// Enable or disable a single step
    #[must_use]
    pub fn flag(mut self, flag: Normalization, enabled: bool) -> Self {
        if enabled {
            self.flags.insert(flag);
        } else {
            self.flags.remove(flag);
        }
        self
    }

    pub fn flags(&self) -> EnumSet<Normalization> {
        self.flags
    }

    fn has(&self, flag: Normalization) -> bool {
        self.flags.contains(flag)
    }

    /// Normalize `url` into a URL string.
    ///
    /// Fails if the host carries a malformed Punycode label; no partial result
    /// is produced in that case.
    pub fn normalize(&self, url: &Url) -> Result<String> {
        let host = domain_to_unicode(url.host())?.to_lowercase();
        let scheme = url.scheme().to_ascii_lowercase();

        let mut generic = url.to_generic();
        generic.host = self.host(&scheme, host, url.port());
        generic.scheme = scheme;

        let path = self.path(&generic.raw_path, !generic.host.is_empty());
        generic.path.clone_from(&path);
        generic.raw_path = path;
        generic.raw_query = self.query(&generic.raw_query);
        generic.fragment = self.escapes(&generic.fragment, FRAGMENT_SET);

        let normalized = generic.to_string();
        log::trace!("[laxurl::normalize]: {:?} -> {normalized:?}", url.input());
        Ok(normalized)
    }

    fn host(&self, scheme: &str, mut host: String, mut port: &str) -> String {
        if host.is_empty() {
            return host;
        }

        if self.has(Normalization::RemoveUnnecessaryHostDots) {
            host.truncate(host.trim_end_matches('.').len());
        }

        // A dword is one decimal number even with leading zeros
        let decoded = match numeric_host(&host) {
            Some(NumericHost::Dword) if self.has(Normalization::DecodeDwordHost) => {
                host.parse::<u32>().ok()
            }
            Some(NumericHost::Octal) if self.has(Normalization::DecodeOctalHost) => {
                parse_ipv4(&host)
            }
            Some(NumericHost::Hex) if self.has(Normalization::DecodeHexHost) => parse_ipv4(&host),
            _ => None,
        };
        if let Some(ipv4) = decoded {
            host = serialize_ipv4(ipv4);
        }

        if self.has(Normalization::RemoveDefaultPort)
            && SchemeType::from_scheme(scheme).default_port() == Some(port)
        {
            port = "";
        }

        host_with_port(&host, port)
    }

    fn path(&self, path: &str, has_host: bool) -> String {
        let mut path = self.escapes(path, PATH_SET);
        if self.has(Normalization::RemoveDotSegments) {
            path = remove_dot_segments(&path, has_host);
        }
        if self.has(Normalization::RemoveDuplicateSlashes) {
            path = remove_duplicate_slashes(&path);
        }
        path
    }

    fn query(&self, query: &str) -> String {
        let query = self.escapes(query, QUERY_SET);
        if self.has(Normalization::SortQuery) {
            sort_query(&query)
        } else {
            query
        }
    }

    fn escapes(&self, input: &str, encode_set: &'static percent_encoding::AsciiSet) -> String {
        let mut output = input.to_string();
        if self.has(Normalization::DecodeUnnecessaryEscapes) {
            output = decode_unnecessary(&output);
        }
        if self.has(Normalization::EncodeNecessaryEscapes) {
            output = encode_necessary(&output, encode_set);
        }
        if self.has(Normalization::UppercaseEscapes) {
            output = uppercase_escapes(&output);
        }
        output
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Url {
    /// Normalize with every [`Normalization`] step enabled
    pub fn normalize(&self) -> Result<String> {
        Normalizer::new().normalize(self)
    }
}

/// Decompose and normalize `input` in one go
pub fn normalize_str(input: &str) -> Result<String> {
    decompose(input)?.normalize()
}

/// Drop `.` segments and let `..` pop the previous one.
/// A path ending on a dot segment keeps a trailing `/`.
fn remove_dot_segments(path: &str, has_host: bool) -> String {
    if path.is_empty() {
        return String::new();
    }

    let mut segments = Vec::new();
    let mut last_is_dot = false;
    for segment in path.split('/') {
        match segment {
            ".." => {
                segments.pop();
            }
            "." => {}
            _ => segments.push(segment),
        }
        last_is_dot = matches!(segment, "." | "..");
    }

    let mut output = segments.join("/");
    if has_host && !output.starts_with('/') {
        output.insert(0, '/');
    }
    if last_is_dot && !output.ends_with('/') {
        output.push('/');
    }
    output
}

fn remove_duplicate_slashes(path: &str) -> String {
    let mut output = String::with_capacity(path.len());
    for c in path.chars() {
        if c == '/' && output.ends_with('/') {
            continue;
        }
        output.push(c);
    }
    output
}

/// Stable sort of `&`-separated pairs by raw key; nothing is decoded
fn sort_query(query: &str) -> String {
    let mut pairs: Vec<&str> = query.split('&').filter(|pair| !pair.is_empty()).collect();
    pairs.sort_by(|a, b| query_key(a).cmp(query_key(b)));
    pairs.join("&")
}

fn query_key(pair: &str) -> &str {
    pair.split_once('=').map_or(pair, |(key, _)| key)
}
