use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::character_sets::{hex_value, is_unreserved};

// `%` is in none of the sets: existing escapes pass through untouched

/// Fragment percent-encode set
/// C0 control + space, ", <, >, \`
pub const FRAGMENT_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`');

/// Path percent-encode set
/// Fragment + #, ?, ^, {, }
pub const PATH_SET: &AsciiSet = &FRAGMENT_SET
    .add(b'#')
    .add(b'?')
    .add(b'^')
    .add(b'{')
    .add(b'}');

/// Query percent-encode set
/// C0 control + space, ", #, <, >
pub const QUERY_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>');

/// Percent-encode the characters of `encode_set` and all non-ASCII characters
pub fn encode_necessary(input: &str, encode_set: &'static AsciiSet) -> String {
    let mut buffer = String::with_capacity(input.len());
    for chunk in utf8_percent_encode(input, encode_set) {
        buffer.push_str(chunk);
    }
    buffer
}

/// Walk the `%XX` escapes of `input`, letting `rewrite` replace each one.
/// Anything that is not a well-formed escape is copied as is.
fn rewrite_escapes(input: &str, mut rewrite: impl FnMut(&mut String, u8, &str)) -> String {
    let bytes = input.as_bytes();
    let mut buffer = String::with_capacity(input.len());
    let mut last = 0;

    for pos in memchr::memchr_iter(b'%', bytes) {
        let (Some(&hi), Some(&lo)) = (bytes.get(pos + 1), bytes.get(pos + 2)) else {
            break;
        };
        let (Some(hi), Some(lo)) = (hex_value(hi), hex_value(lo)) else {
            continue;
        };
        buffer.push_str(&input[last..pos]);
        rewrite(&mut buffer, (hi << 4) | lo, &input[pos..pos + 3]);
        last = pos + 3;
    }

    buffer.push_str(&input[last..]);
    buffer
}

/// Decode escapes of unreserved characters: `%7Euser` becomes `~user`
pub fn decode_unnecessary(input: &str) -> String {
    rewrite_escapes(input, |buffer, byte, escape| {
        if is_unreserved(byte) {
            buffer.push(byte as char);
        } else {
            buffer.push_str(escape);
        }
    })
}

/// Uppercase the hex digits of escapes: `%3a` becomes `%3A`
pub fn uppercase_escapes(input: &str) -> String {
    rewrite_escapes(input, |buffer, _, escape| {
        buffer.push_str(&escape.to_ascii_uppercase());
    })
}
