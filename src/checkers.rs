/// Parse a port string to u16.
/// Returns None if empty, contains non-digit characters, or is out of range.
pub fn parse_port(port: &str) -> Option<u16> {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    port.parse::<u16>().ok()
}

/// Numeric host notations that normalization can rewrite as dotted decimal
#[cfg(feature = "normalize")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericHost {
    /// A single decimal number: `3232235777`
    Dword,
    /// A single hexadecimal number: `0xC0A80101`
    Hex,
    /// Four dotted parts, each with a leading zero: `0300.0250.01.01`
    Octal,
}

/// Classify a host written in one of the numeric IPv4 notations.
/// Plain dotted decimal returns None, as it needs no rewriting.
#[cfg(feature = "normalize")]
pub fn numeric_host(host: &str) -> Option<NumericHost> {
    if host.is_empty() {
        return None;
    }

    if host.bytes().all(|b| b.is_ascii_digit()) {
        return Some(NumericHost::Dword);
    }

    if let Some(hex) = host.strip_prefix("0x").or_else(|| host.strip_prefix("0X")) {
        return (!hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit()))
            .then_some(NumericHost::Hex);
    }

    let mut parts = 0;
    for part in host.split('.') {
        if !part.starts_with('0') || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        parts += 1;
    }

    (parts == 4).then_some(NumericHost::Octal)
}
