use super::{GetAll, InvalidContentLength, iter::Iter};
use crate::frame;

/// STOMP Header Multimap.
///
/// Maps header keys to one or more values. A STOMP header normally has a
/// single value, but the standard allows a key to repeat for diagnostic
/// purposes, so every key holds an ordered sequence of values.
///
/// This type is close to a MIME header map. The main difference is that
/// STOMP header keys are case-sensitive: `"foo"` and `"Foo"` are distinct
/// entries.
///
/// ```rust
/// use stomp::Header;
///
/// let mut header = Header::new();
/// header.append("destination", "/queue/a");
/// header.append("destination", "/queue/b");
///
/// assert_eq!(header.get("destination"), Some("/queue/a"));
/// assert_eq!(header.get_all("destination").count(), 2);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Header {
    entries: Vec<Entry>,
}

/// `values` is never empty: an entry is created with one value and removed
/// as a whole.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct Entry {
    pub(super) key: String,
    pub(super) values: Vec<String>,
}

impl Default for Header {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    /// Create new empty [`Header`].
    ///
    /// This function does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create new empty [`Header`] with at least the specified key capacity.
    ///
    /// If the `capacity` is `0`, this function does not allocate.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of recorded values across all keys.
    pub fn len(&self) -> usize {
        self.entries.iter().map(|e| e.values.len()).sum()
    }

    /// Returns the number of distinct keys.
    #[inline]
    pub fn keys_len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the header has no entry.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(super) fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

// ===== Lookup =====

impl Header {
    fn entry(&self, key: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.key == key)
    }

    fn entry_mut(&mut self, key: &str) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.key == key)
    }

    /// Returns the first value recorded for the given key.
    ///
    /// Returns [`None`] when the key is absent. Absence is distinct from a
    /// key recorded with an empty value, which returns `Some("")`.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&str> {
        match self.entry(key) {
            Some(entry) => Some(entry.values[0].as_str()),
            None => None,
        }
    }

    /// Returns `true` if the header records at least one value for the
    /// given key.
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entry(key).is_some()
    }

    /// Returns an iterator over every value recorded for the given key, in
    /// append order.
    ///
    /// The iterator is empty when the key is absent.
    #[inline]
    pub fn get_all(&self, key: &str) -> GetAll<'_> {
        match self.entry(key) {
            Some(entry) => GetAll::new(&entry.values),
            None => GetAll::empty(),
        }
    }

    /// Returns an iterator over headers as key and value pair.
    ///
    /// Keys come out in insertion order; a key with multiple values yields
    /// one pair per value before moving to the next key.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }
}

// ===== Mutation =====

impl Header {
    /// Appends a key and value pair into the header.
    ///
    /// Any value already recorded for the key is kept; the new value lands
    /// after it.
    pub fn append<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        match self.entry_mut(&key) {
            Some(entry) => entry.values.push(value.into()),
            None => self.entries.push(Entry {
                key,
                values: vec![value.into()],
            }),
        }
    }

    /// Sets the sequence recorded for the key to the single given value.
    ///
    /// If the key was present, the previous first value is returned and the
    /// rest of the duplicate values are dropped.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<String>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        match self.entry_mut(&key) {
            Some(entry) => {
                let prev = std::mem::replace(&mut entry.values, vec![value.into()]);
                prev.into_iter().next()
            }
            None => {
                self.entries.push(Entry {
                    key,
                    values: vec![value.into()],
                });
                None
            }
        }
    }

    /// Removes a key and every value recorded for it, returning the first
    /// value if the key was present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.entries.iter().position(|e| e.key == key)?;
        let entry = self.entries.remove(index);
        // the rest of the duplicate values are dropped
        entry.values.into_iter().next()
    }

    /// Clear the header, removing all keys and values.
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

// ===== Content length =====

impl Header {
    /// Looks up the `content-length` header.
    ///
    /// Returns `Ok(None)` when the header is absent or empty: the frame
    /// body length is unspecified and the body runs up to the null
    /// terminator. Returns `Ok(Some(n))` when the value is a valid unsigned
    /// base-10 integer fitting in 32 bits.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidContentLength`] when the recorded value is present
    /// but malformed. This includes negative numbers, non-numeric text and
    /// overflow.
    pub fn content_length(&self) -> Result<Option<u32>, InvalidContentLength> {
        match self.get(frame::CONTENT_LENGTH) {
            None | Some("") => Ok(None),
            Some(text) => match text.parse::<u32>() {
                Ok(n) => Ok(Some(n)),
                Err(source) => Err(InvalidContentLength::new(text, source)),
            },
        }
    }
}

// ===== Traits =====

impl std::fmt::Debug for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Extend<(K, V)> for Header
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.append(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Header
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut header = Self::new();
        header.extend(iter);
        header
    }
}
