//! Presence tracking for the optional fields of API objects.
//!
//! Every generated object and builder carries a [`FieldSet`]. A field is
//! considered present iff its bit is set. The set grows on demand, so the
//! number of optional fields an object can declare is not bounded by the
//! width of an integer.

use std::fmt;

const WORD_BITS: usize = u64::BITS as usize;

/// A growable bitset indexed by field number.
#[derive(Clone, Default)]
pub struct FieldSet {
    words: Vec<u64>,
}

impl FieldSet {
    /// Create an empty set.
    pub const fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Mark field `idx` as present.
    pub fn insert(&mut self, idx: usize) {
        let word = idx / WORD_BITS;
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
        self.words[word] |= 1u64 << (idx % WORD_BITS);
    }

    /// Mark field `idx` as absent.
    pub fn remove(&mut self, idx: usize) {
        if let Some(w) = self.words.get_mut(idx / WORD_BITS) {
            *w &= !(1u64 << (idx % WORD_BITS));
        }
    }

    /// Set or clear field `idx` depending on `present`.
    pub fn set(&mut self, idx: usize, present: bool) {
        if present {
            self.insert(idx);
        } else {
            self.remove(idx);
        }
    }

    /// Check whether field `idx` is present.
    pub fn contains(&self, idx: usize) -> bool {
        self.words
            .get(idx / WORD_BITS)
            .is_some_and(|w| w & (1u64 << (idx % WORD_BITS)) != 0)
    }

    /// True if no field is present.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| *w == 0)
    }

    /// True if no field with index `>= start` is present.
    ///
    /// Linkable objects use `start == 1` so the link flag alone does not
    /// make an object non-empty.
    pub fn is_empty_from(&self, start: usize) -> bool {
        self.iter().all(|idx| idx < start)
    }

    /// Number of present fields.
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Iterate over the indices of present fields in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(word, bits)| {
            (0..WORD_BITS)
                .filter(move |bit| bits & (1u64 << bit) != 0)
                .map(move |bit| word * WORD_BITS + bit)
        })
    }

    /// Remove every field.
    pub fn clear(&mut self) {
        self.words.clear();
    }
}

// Trailing zero words do not change the contents of the set.
impl PartialEq for FieldSet {
    fn eq(&self, other: &Self) -> bool {
        let len = self.words.len().max(other.words.len());
        (0..len).all(|i| {
            self.words.get(i).copied().unwrap_or(0) == other.words.get(i).copied().unwrap_or(0)
        })
    }
}

impl Eq for FieldSet {}

impl fmt::Debug for FieldSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<usize> for FieldSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = FieldSet::new();
        for idx in iter {
            set.insert(idx);
        }
        set
    }
}
