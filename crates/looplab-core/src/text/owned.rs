//! Owned text buffer with explicit move semantics

use std::fmt;
use std::ops::Add;

/// An exclusively owned text buffer
///
/// A thin wrapper over the standard owned string that keeps the classic
/// value-type contract observable: cloning deep-copies the buffer into a
/// distinct allocation, [`TextBuf::take`] transfers the buffer out and leaves
/// the source empty with length zero, equality compares byte content, and
/// concatenation produces a new owned buffer. Rust's compile-time moves make
/// the moved-from state unobservable, so the transfer is exposed as an
/// explicit method instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuf {
    data: String,
}

impl TextBuf {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// View the content
    pub fn as_str(&self) -> &str {
        &self.data
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds no content
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Transfer the buffer out, leaving this instance empty
    ///
    /// The returned value owns the original allocation; afterwards `self`
    /// reads as the empty string with length zero.
    pub fn take(&mut self) -> TextBuf {
        TextBuf {
            data: std::mem::take(&mut self.data),
        }
    }
}

impl From<&str> for TextBuf {
    fn from(s: &str) -> Self {
        Self { data: s.to_string() }
    }
}

impl From<String> for TextBuf {
    fn from(s: String) -> Self {
        Self { data: s }
    }
}

impl fmt::Display for TextBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data)
    }
}

impl Add for &TextBuf {
    type Output = TextBuf;

    /// Concatenate into a new owned buffer; neither operand is consumed
    fn add(self, other: &TextBuf) -> TextBuf {
        let mut data = String::with_capacity(self.data.len() + other.data.len());
        data.push_str(&self.data);
        data.push_str(&other.data);
        TextBuf { data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let s = TextBuf::new();
        assert_eq!(s.as_str(), "");
        assert_eq!(s.len(), 0);
        assert!(s.is_empty());
    }

    #[test]
    fn test_construct_from_str() {
        let s = TextBuf::from("hello");
        assert_eq!(s.as_str(), "hello");
        assert_eq!(s.len(), 5);
    }

    #[test]
    fn test_clone_is_a_deep_copy() {
        let a = TextBuf::from("test");
        let b = a.clone();

        assert_eq!(b.as_str(), "test");
        assert_eq!(a, b);
        // Distinct allocations behind identical content
        assert_ne!(a.as_str().as_ptr(), b.as_str().as_ptr());
    }

    #[test]
    fn test_take_transfers_ownership() {
        let mut a = TextBuf::from("moved");
        let original_ptr = a.as_str().as_ptr();

        let b = a.take();

        assert_eq!(b.as_str(), "moved");
        assert_eq!(b.as_str().as_ptr(), original_ptr);
        assert_eq!(a.as_str(), "");
        assert_eq!(a.len(), 0);
    }

    #[test]
    fn test_equality_is_by_content() {
        let a = TextBuf::from("abc");
        let b = TextBuf::from("abc");
        let c = TextBuf::from("def");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_concatenation_produces_new_buffer() {
        let a = TextBuf::from("hello");
        let b = TextBuf::from("world");

        let c = &a + &b;

        assert_eq!(c.as_str(), "helloworld");
        assert_eq!(c.len(), 10);
        // Operands are untouched
        assert_eq!(a.as_str(), "hello");
        assert_eq!(b.as_str(), "world");
    }

    #[test]
    fn test_display() {
        let s = TextBuf::from("hello");
        assert_eq!(format!("{s}"), "hello");
    }
}
