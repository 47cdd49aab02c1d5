use crate::error::{Error, Result};

/// Check if 4 bytes match "xn--" (case insensitive)
fn is_punycode_prefix(slice: &[u8]) -> bool {
    slice.len() >= 4
        && matches!(slice[0], b'x' | b'X')
        && matches!(slice[1], b'n' | b'N')
        && slice[2] == b'-'
        && slice[3] == b'-'
}

/// Check if domain contains Punycode (xn-- prefix, case insensitive)
pub fn has_punycode(domain: &str) -> bool {
    let bytes = domain.as_bytes();
    if bytes.len() < 4 {
        return false;
    }

    if is_punycode_prefix(bytes) {
        return true;
    }

    memchr::memchr_iter(b'.', bytes).any(|pos| is_punycode_prefix(&bytes[pos + 1..]))
}

/// Decode the Punycode labels of a host to Unicode.
///
/// Hosts without an `xn--` label are returned unchanged, so IPv6 literal
/// content and registered names in plain ASCII never reach the IDNA
/// processor. A malformed Punycode label is an error.
pub fn domain_to_unicode(domain: &str) -> Result<String> {
    if !has_punycode(domain) {
        return Ok(domain.to_string());
    }

    let (decoded, status) = idna::domain_to_unicode(domain);
    status.map_err(|_| Error::Idna(domain.to_string()))?;
    Ok(decoded)
}
