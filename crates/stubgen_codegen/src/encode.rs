use std::fmt::Write;

/// Escape every UTF-16 code unit of the source as a fixed-width
/// `\uXXXX` sequence, making the output representable in any 7-bit
/// text encoding. Characters outside the basic plane escape as their
/// surrogate pair, which javac reassembles when it decodes the
/// escapes.
pub fn encode(source: &str) -> String {
    let mut escaped = String::with_capacity(source.len() * 6);
    for unit in source.encode_utf16() {
        // Writing into a String cannot fail.
        let _ = write!(escaped, "\\u{:04x}", unit);
    }
    escaped
}
