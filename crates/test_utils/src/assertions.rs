//! Custom Test Assertions
//!
//! Provides assertion helpers that give more meaningful failure messages
//! than bare `assert!` calls.

/// PNG file signature
const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// Asserts that `excerpt` is the first `max_chars` characters of `source`
///
/// # Panics
///
/// Panics if the excerpt is longer than allowed or is not a prefix of the
/// source.
pub fn assert_excerpt_of(excerpt: &str, source: &str, max_chars: usize) {
    let expected: String = source.chars().take(max_chars).collect();
    assert_eq!(
        excerpt, expected,
        "Excerpt mismatch: expected the first {} characters of the source",
        max_chars
    );
}

/// Asserts that `bytes` start with the PNG signature
///
/// # Panics
///
/// Panics if the signature is missing
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.starts_with(PNG_SIGNATURE),
        "Expected PNG data, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..bytes.len().min(8)]
    );
}
