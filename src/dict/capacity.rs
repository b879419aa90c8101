use super::Dict;
use crate::raw::RawDict;

impl Dict {
    /// Creates an empty dict with room for at least `capacity` entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_dict::Dict;
    ///
    /// let dict = Dict::with_capacity(32);
    /// assert!(dict.is_empty());
    /// assert!(dict.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Dict {
            raw: RawDict::with_capacity(capacity),
        }
    }

    /// Returns how many entries the dict can hold before its entry storage
    /// reallocates. Removed entries leave reusable slots behind, so this never
    /// shrinks on its own.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
