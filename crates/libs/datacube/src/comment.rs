//! Paragraph-based text annotations.
//!
//! A [`Comment`] is an ordered sequence of paragraphs attached to files,
//! images and similar data. It is plain sequence bookkeeping; lookups on
//! missing paragraphs or indices report `None`/`false` instead of failing.

/// An ordered sequence of text paragraphs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Comment {
    paragraphs: Vec<String>,
}

impl Comment {
    /// Creates an empty comment.
    pub const fn new() -> Self {
        Self {
            paragraphs: Vec::new(),
        }
    }

    /// Returns the number of paragraphs.
    pub fn len(&self) -> usize { self.paragraphs.len() }

    /// Returns `true` when the comment holds no paragraphs.
    pub fn is_empty(&self) -> bool { self.paragraphs.is_empty() }

    /// Removes all paragraphs.
    pub fn clear(&mut self) { self.paragraphs.clear(); }

    /// Appends a paragraph at the end.
    pub fn append(&mut self, paragraph: impl Into<String>) {
        self.paragraphs.push(paragraph.into());
    }

    /// Inserts a paragraph at the given index, shifting subsequent
    /// paragraphs towards the end.
    ///
    /// # Panics
    ///
    /// Panics when `index > len()`, following `Vec::insert`.
    pub fn insert(&mut self, index: usize, paragraph: impl Into<String>) {
        self.paragraphs.insert(index, paragraph.into());
    }

    /// Inserts a paragraph directly before the first occurrence of
    /// `successor`. Returns `false` when `successor` is not present.
    pub fn insert_before(&mut self, successor: &str, paragraph: impl Into<String>) -> bool {
        match self.find(successor) {
            Some(index) => {
                self.paragraphs.insert(index, paragraph.into());
                true
            },
            None => false,
        }
    }

    /// Inserts a paragraph directly after the first occurrence of
    /// `predecessor`. Returns `false` when `predecessor` is not present.
    pub fn insert_after(&mut self, predecessor: &str, paragraph: impl Into<String>) -> bool {
        match self.find(predecessor) {
            Some(index) => {
                self.paragraphs.insert(index + 1, paragraph.into());
                true
            },
            None => false,
        }
    }

    /// Removes and returns the paragraph at the given index, or `None`
    /// when the index is past the end.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.paragraphs.len()).then(|| self.paragraphs.remove(index))
    }

    /// Removes and returns the first occurrence of the given paragraph, or
    /// `None` when it is not present.
    pub fn remove_paragraph(&mut self, paragraph: &str) -> Option<String> {
        self.find(paragraph).map(|index| self.paragraphs.remove(index))
    }

    /// Returns the paragraph at the given index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.paragraphs.get(index).map(String::as_str)
    }

    /// Returns a mutable reference to the paragraph at the given index.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut String> {
        self.paragraphs.get_mut(index)
    }

    /// Returns the index of the first occurrence of the given paragraph.
    pub fn find(&self, paragraph: &str) -> Option<usize> {
        self.paragraphs.iter().position(|p| p == paragraph)
    }

    /// Returns `true` when the given paragraph is present.
    pub fn contains(&self, paragraph: &str) -> bool { self.find(paragraph).is_some() }

    /// Returns an iterator over the paragraphs in order.
    pub fn iter(&self) -> std::slice::Iter<String> { self.paragraphs.iter() }
}

impl From<&str> for Comment {
    fn from(paragraph: &str) -> Self {
        Self {
            paragraphs: vec![paragraph.to_owned()],
        }
    }
}

impl From<String> for Comment {
    fn from(paragraph: String) -> Self {
        Self {
            paragraphs: vec![paragraph],
        }
    }
}

impl<S: Into<String>> FromIterator<S> for Comment {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            paragraphs: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_length() {
        let mut comment = Comment::new();
        assert!(comment.is_empty());
        comment.append("first");
        comment.append("second");
        assert_eq!(comment.len(), 2);
        assert_eq!(comment.get(0), Some("first"));
        assert_eq!(comment.get(1), Some("second"));
        assert_eq!(comment.get(2), None);
    }

    #[test]
    fn test_insert_relative() {
        let mut comment: Comment = ["a", "c"].into_iter().collect();
        assert!(comment.insert_before("c", "b"));
        assert!(comment.insert_after("c", "d"));
        let collected = comment.iter().map(String::as_str).collect::<Vec<_>>();
        assert_eq!(collected, ["a", "b", "c", "d"]);

        // Missing anchors leave the comment untouched.
        assert!(!comment.insert_before("missing", "x"));
        assert!(!comment.insert_after("missing", "x"));
        assert_eq!(comment.len(), 4);
    }

    #[test]
    fn test_insert_at_index() {
        let mut comment = Comment::from("end");
        comment.insert(0, "start");
        assert_eq!(comment.get(0), Some("start"));
        assert_eq!(comment.get(1), Some("end"));
    }

    #[test]
    fn test_remove() {
        let mut comment: Comment = ["a", "b", "c"].into_iter().collect();
        assert_eq!(comment.remove(1), Some("b".to_owned()));
        assert_eq!(comment.remove(5), None);
        assert_eq!(comment.remove_paragraph("c"), Some("c".to_owned()));
        assert_eq!(comment.remove_paragraph("c"), None);
        assert_eq!(comment.len(), 1);
    }

    #[test]
    fn test_find_and_contains() {
        let comment: Comment = ["one", "two", "two"].into_iter().collect();
        assert_eq!(comment.find("two"), Some(1));
        assert_eq!(comment.find("three"), None);
        assert!(comment.contains("one"));
        assert!(!comment.contains("three"));
    }

    #[test]
    fn test_clear() {
        let mut comment = Comment::from("something");
        comment.clear();
        assert!(comment.is_empty());
    }

    #[test]
    fn test_clone_is_independent() {
        let original: Comment = ["a", "b"].into_iter().collect();
        let mut copy = original.clone();
        *copy.get_mut(0).unwrap() = "changed".to_owned();
        assert_eq!(original.get(0), Some("a"));
        assert_ne!(original, copy);
    }
}
