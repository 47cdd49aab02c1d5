/// Unreserved characters: ALPHA / DIGIT / "-" / "." / "_" / "~"
const UNRESERVED_TABLE: [bool; 256] = {
    let mut table = [false; 256];

    let mut i = b'a';
    while i <= b'z' {
        table[i as usize] = true;
        i += 1;
    }
    let mut i = b'A';
    while i <= b'Z' {
        table[i as usize] = true;
        i += 1;
    }
    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] = true;
        i += 1;
    }
    table[b'-' as usize] = true;
    table[b'.' as usize] = true;
    table[b'_' as usize] = true;
    table[b'~' as usize] = true;

    table
};

/// Check if a byte never needs to be percent-encoded
pub fn is_unreserved(b: u8) -> bool {
    UNRESERVED_TABLE[b as usize]
}

/// Value of an ASCII hex digit
pub fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_unreserved() {
        for b in b"azAZ09-._~" {
            assert!(is_unreserved(*b));
        }
        for b in b"%/?#@:!$&'()*+,;= " {
            assert!(!is_unreserved(*b));
        }
        assert!(!is_unreserved(0xC3));
    }

    #[test]
    fn test_hex_value() {
        assert_eq!(hex_value(b'7'), Some(7));
        assert_eq!(hex_value(b'c'), Some(12));
        assert_eq!(hex_value(b'F'), Some(15));
        assert_eq!(hex_value(b'g'), None);
    }
}
