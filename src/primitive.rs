use crate::error::Result;
use crate::patterns::patterns;

/// Check if input is a bare relative filename with no structural delimiters.
///
/// Only ASCII letters, digits, `-` and `.` are accepted. The empty string
/// matches as well.
pub fn is_primitive_path(input: &str) -> Result<bool> {
    Ok(patterns()?.primitive_path.is_match(input))
}
