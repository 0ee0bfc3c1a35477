//! Candidate generation over per-word fragment choices.

use super::fragments::option_lists;

/// Lazy Cartesian product of per-word fragment options.
///
/// Yields the concatenation of one choice per word, in lexicographic product
/// order (the last word varies fastest). Identical strings produced by
/// different choices are all yielded.
///
/// With [`Candidates::with_max_len`], branches whose prefix is already longer
/// than the limit are skipped; the remaining items keep their relative order.
#[derive(Debug, Clone)]
pub struct Candidates {
    options: Vec<Vec<String>>,
    max_len: Option<usize>,
    /// Option index chosen at each depth of the current prefix.
    choice: Vec<usize>,
    prefix: String,
    prefix_chars: usize,
    next_index: usize,
    done: bool,
}

impl Candidates {
    /// Generate over explicit option lists.
    pub fn new(options: Vec<Vec<String>>) -> Self {
        let done = options.is_empty();
        Self {
            choice: Vec::with_capacity(options.len()),
            options,
            max_len: None,
            prefix: String::new(),
            prefix_chars: 0,
            next_index: 0,
            done,
        }
    }

    /// Generate over the fragments of `words`.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        Self::new(option_lists(words))
    }

    /// Skip every candidate longer than `max_len` characters.
    #[must_use]
    pub const fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    /// Number of candidates the unbounded product contains.
    pub fn total(&self) -> usize {
        if self.options.is_empty() {
            return 0;
        }
        self.options
            .iter()
            .fold(1usize, |acc, list| acc.saturating_mul(list.len()))
    }

    /// Undo the deepest choice and move on to its next sibling.
    fn backtrack(&mut self) {
        if let Some(idx) = self.choice.pop() {
            let fragment = &self.options[self.choice.len()][idx];
            self.prefix.truncate(self.prefix.len() - fragment.len());
            self.prefix_chars -= fragment.chars().count();
            self.next_index = idx + 1;
        }
    }
}

impl Iterator for Candidates {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while !self.done {
            let depth = self.choice.len();

            if depth == self.options.len() {
                let item = self.prefix.clone();
                self.backtrack();
                return Some(item);
            }

            if self.next_index >= self.options[depth].len() {
                if depth == 0 {
                    self.done = true;
                } else {
                    self.backtrack();
                }
                continue;
            }

            let fragment = &self.options[depth][self.next_index];
            let len = self.prefix_chars + fragment.chars().count();
            if self.max_len.is_some_and(|max| len > max) {
                self.next_index += 1;
                continue;
            }

            self.prefix.push_str(fragment);
            self.prefix_chars = len;
            self.choice.push(self.next_index);
            self.next_index = 0;
        }
        None
    }
}
