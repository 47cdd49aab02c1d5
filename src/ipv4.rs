//! Numeric IPv4 host decoding: decimal, octal, and hexadecimal notation.

/// Parse an IPv4 host in any numeric notation into a u32.
/// Supports:
/// - Dword: 3232235777
/// - Hex: 0xC0A80101
/// - Octal: 0300.0250.01.01
/// - Mixed: 192.0x00A80001
///
/// Returns None if the host is not a valid IPv4 address.
pub fn parse_ipv4(input: &str) -> Option<u32> {
    let input = input.strip_suffix('.').unwrap_or(input);
    if input.is_empty() {
        return None;
    }

    let numbers = input
        .split('.')
        .map(parse_ipv4_number)
        .collect::<Option<Vec<u64>>>()?;
    let (&last, leading) = numbers.split_last()?;
    if leading.len() > 3 {
        return None;
    }

    // The last number fills the bytes the leading ones leave free
    let max = 256u64.pow(4 - leading.len() as u32);
    if last >= max || leading.iter().any(|&num| num >= 256) {
        return None;
    }

    let mut ipv4 = last as u32;
    for (i, &number) in leading.iter().enumerate() {
        ipv4 |= (number as u32) << ((3 - i) * 8);
    }

    Some(ipv4)
}

/// Parse a single IPv4 number component (supports decimal, hex, octal).
fn parse_ipv4_number(input: &str) -> Option<u64> {
    if input.is_empty() {
        return None;
    }

    if let Some(hex_part) = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
    {
        return u64::from_str_radix(hex_part, 16).ok();
    }

    // Octal (starts with 0 but not just "0")
    if input.len() >= 2 && input.starts_with('0') {
        return u64::from_str_radix(&input[1..], 8).ok();
    }

    input.parse::<u64>().ok()
}

/// Serialize an IPv4 address (u32) to dotted decimal notation
pub fn serialize_ipv4(ipv4: u32) -> String {
    format!(
        "{}.{}.{}.{}",
        (ipv4 >> 24) & 0xFF,
        (ipv4 >> 16) & 0xFF,
        (ipv4 >> 8) & 0xFF,
        ipv4 & 0xFF
    )
}
