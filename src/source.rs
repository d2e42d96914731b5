//! The fixed-size source sequence every strategy scans.

/// Placeholder element type. Values are never read, only counted.
pub type Element = u32;

/// Canonical source length.
pub const CANONICAL_LEN: usize = 100_000;

/// Ordered, immutable sequence of placeholder elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceArray {
    elements: Vec<Element>,
}

impl SourceArray {
    /// Create a source of `len` zeroed elements.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            elements: vec![0; len],
        }
    }

    /// The canonical 100,000 element source.
    #[must_use]
    pub fn canonical() -> Self {
        Self::new(CANONICAL_LEN)
    }

    /// One element longer than canonical. Still yields 50,000 results.
    #[must_use]
    pub fn canonical_off_by_one() -> Self {
        Self::new(CANONICAL_LEN + 1)
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the source has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Borrow the elements.
    #[must_use]
    pub fn as_slice(&self) -> &[Element] {
        &self.elements
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    /// Length every correct strategy must produce: `floor(len / 2)`.
    #[must_use]
    pub fn expected_result_len(&self) -> usize {
        self.len() / 2
    }

    /// The exact output every correct strategy must produce: `[1, 2, ..., floor(len / 2)]`.
    #[must_use]
    pub fn expected_result(&self) -> Vec<f64> {
        (1..=self.expected_result_len()).map(|v| v as f64).collect()
    }
}

impl<'a> IntoIterator for &'a SourceArray {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_lengths() {
        assert_eq!(SourceArray::canonical().len(), 100_000);
        assert_eq!(SourceArray::canonical().expected_result_len(), 50_000);
        assert_eq!(SourceArray::canonical_off_by_one().len(), 100_001);
        assert_eq!(
            SourceArray::canonical_off_by_one().expected_result_len(),
            50_000
        );
    }

    #[test]
    fn test_expected_result() {
        let source = SourceArray::new(7);
        assert_eq!(source.expected_result(), vec![1.0, 2.0, 3.0]);
        assert!(SourceArray::new(1).expected_result().is_empty());
        assert!(SourceArray::new(0).is_empty());
    }

    #[test]
    fn test_elements_are_placeholders() {
        let source = SourceArray::new(16);
        assert!(source.iter().all(|&e| e == 0));
    }
}
