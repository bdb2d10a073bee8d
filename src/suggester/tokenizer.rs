/// Normalizes input text into its keyword token sequence.
///
/// Lowercases the input and splits it into maximal alphanumeric runs, so
/// punctuation never sticks to a token. Order and duplicates are preserved:
/// repeated mentions are stronger evidence, and the sequence itself is part
/// of the engine's observable output, not an internal detail.
///
/// # Examples
///
/// ```
/// use fieldtag::suggester::extract_keywords;
///
/// assert_eq!(
///     extract_keywords("Rusted valve found near compressor 2"),
///     ["rusted", "valve", "found", "near", "compressor", "2"]
/// );
/// assert_eq!(extract_keywords("leak, leak!"), ["leak", "leak"]);
/// assert!(extract_keywords("").is_empty());
/// ```
pub fn extract_keywords(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
