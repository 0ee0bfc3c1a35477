//! Word fragments: the building blocks of abbreviation candidates.

/// N-gram sizes taken from each word, in output order.
pub const NGRAM_SIZES: [usize; 2] = [1, 2];

/// Expand a word into its fragments.
///
/// Every single character left to right, then every overlapping
/// two-character window left to right.
///
/// ```
/// use ryaku_core::abbreviate::fragments::expand;
///
/// assert_eq!(expand("大学"), vec!["大", "学", "大学"]);
/// ```
pub fn expand(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    NGRAM_SIZES
        .iter()
        .flat_map(|&n| chars.windows(n).map(|window| window.iter().collect()))
        .collect()
}

/// Number of fragments [`expand`] yields for a word of `len` characters.
pub const fn fragment_count(len: usize) -> usize {
    len + len.saturating_sub(1)
}

/// Per-word option lists for candidate generation.
///
/// Every word after the first also gets an empty option, meaning the word is
/// left out of the candidate.
pub fn option_lists<S: AsRef<str>>(words: &[S]) -> Vec<Vec<String>> {
    words
        .iter()
        .enumerate()
        .map(|(idx, word)| {
            let mut fragments = expand(word.as_ref());
            if idx > 0 {
                fragments.push(String::new());
            }
            fragments
        })
        .collect()
}
