use unicode_normalization::UnicodeNormalization;

/// Normalize Unicode text to NFC form and collapse whitespace.
///
/// Accented characters come out precomposed whatever the page used, and
/// every run of whitespace (including non-breaking spaces and newlines left
/// over from the markup) becomes a single ASCII space.
pub fn normalize_text(input: &str) -> String {
    let nfc: String = input.nfc().collect();
    collapse_whitespace(&nfc)
}

/// Collapse runs of whitespace into single spaces and trim both ends.
pub fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}
