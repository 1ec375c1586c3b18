use crate::core::GrowVec;
use crate::cursor::Cursor;

/// Forward iterator over the elements of a [`GrowVec`].
pub struct GrowVecIter<'a, T> {
    vec: &'a GrowVec<T>,
    cursor: Cursor,
}

impl<'a, T> GrowVecIter<'a, T> {
    pub(crate) fn new(vec: &'a GrowVec<T>) -> Self {
        Self {
            vec,
            cursor: vec.begin(),
        }
    }
}

impl<'a, T> Iterator for GrowVecIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.vec.cursor_get(self.cursor)?;
        self.cursor.advance(1);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pos = self.cursor.position().unwrap_or(self.vec.len());
        let remaining = self.vec.len().saturating_sub(pos);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for GrowVecIter<'_, T> {}

impl<'a, T> IntoIterator for &'a GrowVec<T> {
    type Item = &'a T;
    type IntoIter = GrowVecIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        GrowVecIter::new(self)
    }
}
