use super::{Header, map::Entry};

impl<'a> IntoIterator for &'a Header {
    type Item = <Iter<'a> as Iterator>::Item;

    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator returned from [`Header::iter`], yielding key and value pairs.
#[derive(Debug)]
pub struct Iter<'a> {
    entries: std::slice::Iter<'a, Entry>,
    current: Option<(&'a str, std::slice::Iter<'a, String>)>,
}

impl<'a> Iter<'a> {
    pub(super) fn new(header: &'a Header) -> Self {
        let mut entries = header.entries().iter();
        Self {
            current: entries.next().map(|e| (e.key.as_str(), e.values.iter())),
            entries,
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((key, values)) = &mut self.current
                && let Some(value) = values.next()
            {
                return Some((key, value.as_str()));
            }

            let entry = self.entries.next()?;
            self.current = Some((entry.key.as_str(), entry.values.iter()));
        }
    }
}

// ===== GetAll =====

/// Iterator returned from [`Header::get_all`], yielding every value
/// recorded for one key in append order.
#[derive(Debug)]
pub struct GetAll<'a> {
    values: std::slice::Iter<'a, String>,
}

impl<'a> GetAll<'a> {
    pub(super) fn new(values: &'a [String]) -> Self {
        Self {
            values: values.iter(),
        }
    }

    pub(super) fn empty() -> Self {
        Self {
            values: Default::default(),
        }
    }
}

impl<'a> Iterator for GetAll<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.values.next().map(String::as_str)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl DoubleEndedIterator for GetAll<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.values.next_back().map(String::as_str)
    }
}

impl ExactSizeIterator for GetAll<'_> {}
