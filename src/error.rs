/// Errors that can occur while decomposing or normalizing a URL.
///
/// Decomposition itself never rejects input; the only failures are internal
/// ones (the matcher set could not be built) and, on the normalization
/// boundary, a host that cannot be decoded from punycode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The compiled matcher set could not be constructed
    Pattern(String),
    /// IDNA decoding of the host failed
    Idna(String),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Pattern(msg) => write!(f, "Pattern engine failure: {msg}"),
            Self::Idna(host) => write!(f, "IDNA decoding failed for host {host:?}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Self::Pattern(err.to_string())
    }
}

/// Result type for decomposition and normalization
pub type Result<T> = core::result::Result<T, Error>;
