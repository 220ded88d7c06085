//! Compressed prefix tree (radix trie) mapping reserved words to their kinds.
//!
//! Each node owns one segment of a key. Siblings always start with distinct
//! characters, so lookup follows at most one child per node.

use super::tokens::{TokenKind, KEYWORDS};

#[derive(Debug, Clone)]
struct TrieNode {
    segment: String,
    kind: Option<TokenKind>,
    children: Vec<TrieNode>,
}

impl TrieNode {
    fn new(segment: &str, kind: Option<TokenKind>) -> Self {
        TrieNode {
            segment: segment.to_string(),
            kind,
            children: vec![],
        }
    }

    #[cfg(test)]
    fn is_terminal(&self) -> bool {
        self.kind.is_some()
    }

    fn child_starting_with(&self, first: char) -> Option<usize> {
        self.children
            .iter()
            .position(|child| child.segment.starts_with(first))
    }
}

/// Length in bytes of the longest common prefix of `a` and `b`.
fn common_prefix(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .map(|(x, _)| x.len_utf8())
        .sum()
}

#[derive(Debug, Clone)]
pub struct KeywordTrie {
    root: TrieNode,
}

impl Default for KeywordTrie {
    fn default() -> Self {
        KeywordTrie::new()
    }
}

impl KeywordTrie {
    pub fn new() -> Self {
        KeywordTrie {
            root: TrieNode::new("", None),
        }
    }

    /// Builds the trie holding the language's reserved words.
    pub fn with_keywords() -> Self {
        let mut trie = KeywordTrie::new();
        for (word, kind) in KEYWORDS {
            trie.insert(word, kind);
        }
        trie
    }

    /// Inserts `word`, or re-marks it with `kind` if already present.
    pub fn insert(&mut self, word: &str, kind: TokenKind) {
        if word.is_empty() {
            return;
        }

        let mut current = &mut self.root;
        let mut rest = word;

        loop {
            let matched = common_prefix(&current.segment, rest);

            if matched < current.segment.len() {
                // Partial match: split the node at the common prefix.
                let tail = TrieNode {
                    segment: current.segment[matched..].to_string(),
                    kind: current.kind.take(),
                    children: std::mem::take(&mut current.children),
                };
                current.segment.truncate(matched);
                current.children.push(tail);

                if matched == rest.len() {
                    current.kind = Some(kind);
                } else {
                    current.children.push(TrieNode::new(&rest[matched..], Some(kind)));
                }
                return;
            }

            if matched == rest.len() {
                current.kind = Some(kind);
                return;
            }

            rest = &rest[matched..];
            let Some(first) = rest.chars().next() else {
                return;
            };

            match current.child_starting_with(first) {
                Some(index) => current = &mut current.children[index],
                None => {
                    current.children.push(TrieNode::new(rest, Some(kind)));
                    return;
                }
            }
        }
    }

    /// Returns the keyword kind for an exact match, `Identifier` otherwise.
    pub fn search(&self, word: &str) -> TokenKind {
        let mut current = &self.root;
        let mut rest = word;

        loop {
            let matched = common_prefix(&current.segment, rest);

            if matched < current.segment.len() {
                return TokenKind::Identifier;
            }

            if matched == rest.len() {
                return current.kind.unwrap_or(TokenKind::Identifier);
            }

            rest = &rest[matched..];
            let next = rest
                .chars()
                .next()
                .and_then(|first| current.child_starting_with(first));

            match next {
                Some(index) => current = &current.children[index],
                None => return TokenKind::Identifier,
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, word: &str) -> bool {
        self.search(word) != TokenKind::Identifier
    }

    /// Number of distinct words stored.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        fn count(node: &TrieNode) -> usize {
            usize::from(node.is_terminal()) + node.children.iter().map(count).sum::<usize>()
        }
        count(&self.root)
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[cfg(test)]
    pub(crate) fn siblings_are_distinct(&self) -> bool {
        fn check(node: &TrieNode) -> bool {
            let mut firsts: Vec<char> = node
                .children
                .iter()
                .filter_map(|child| child.segment.chars().next())
                .collect();
            let count = firsts.len();
            firsts.sort_unstable();
            firsts.dedup();
            firsts.len() == count
                && node.children.len() == count
                && node.children.iter().all(check)
        }
        check(&self.root)
    }
}
