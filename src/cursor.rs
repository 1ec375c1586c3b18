use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A forward position marker into a [`GrowVec`](crate::GrowVec).
///
/// A cursor is a plain slot index and never borrows the container it points
/// into, so it cannot dangle. After a structural edit (insert, erase,
/// resize) a previously issued cursor may refer past the live range; the
/// container APIs that consume cursors treat such positions as out of range.
///
/// The default cursor is *detached*: it holds no position at all. Navigating
/// a detached cursor is a caller error and panics.
///
/// Offset arithmetic returns a new cursor (`c + 2`), while the assignment
/// forms (`c += 2`) and [`advance`](Cursor::advance)/[`retreat`](Cursor::retreat)
/// mutate in place. Subtracting two cursors yields the signed distance
/// between them; both must address the same container for the distance to
/// be meaningful.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cursor {
    pos: Option<usize>,
}

impl Cursor {
    /// Cursor at the given slot position.
    #[must_use]
    pub const fn at(pos: usize) -> Self {
        Self { pos: Some(pos) }
    }

    /// The detached cursor.
    #[must_use]
    pub const fn sentinel() -> Self {
        Self { pos: None }
    }

    /// Slot position, or `None` for a detached cursor.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        self.pos
    }

    #[must_use]
    pub const fn is_sentinel(&self) -> bool {
        self.pos.is_none()
    }

    /// Moves the cursor `n` slots forward.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is detached.
    pub fn advance(&mut self, n: usize) {
        let pos = self.expect_position();
        self.pos = Some(pos + n);
    }

    /// Moves the cursor `n` slots backward.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is detached or would move before position 0.
    pub fn retreat(&mut self, n: usize) {
        let pos = self.expect_position();
        assert!(
            n <= pos,
            "cursor cannot retreat {n} slots from position {pos}"
        );
        self.pos = Some(pos - n);
    }

    /// Signed distance from `self` to `other`, in slots.
    ///
    /// Positive when `other` is ahead of `self`.
    ///
    /// # Panics
    ///
    /// Panics if either cursor is detached.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn distance_to(&self, other: Cursor) -> isize {
        other.expect_position() as isize - self.expect_position() as isize
    }

    fn expect_position(&self) -> usize {
        match self.pos {
            Some(pos) => pos,
            None => panic!("cursor is detached: no position to resolve"),
        }
    }
}

impl Add<usize> for Cursor {
    type Output = Cursor;

    fn add(mut self, n: usize) -> Cursor {
        self.advance(n);
        self
    }
}

impl Sub<usize> for Cursor {
    type Output = Cursor;

    fn sub(mut self, n: usize) -> Cursor {
        self.retreat(n);
        self
    }
}

impl AddAssign<usize> for Cursor {
    fn add_assign(&mut self, n: usize) {
        self.advance(n);
    }
}

impl SubAssign<usize> for Cursor {
    fn sub_assign(&mut self, n: usize) {
        self.retreat(n);
    }
}

/// `a - b` is the signed number of slots from `b` to `a`.
impl Sub for Cursor {
    type Output = isize;

    fn sub(self, other: Cursor) -> isize {
        other.distance_to(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_arithmetic_returns_new_values() {
        let c = Cursor::at(3);
        assert_eq!((c + 2).position(), Some(5));
        assert_eq!((c - 1).position(), Some(2));
        // the original is untouched
        assert_eq!(c.position(), Some(3));
    }

    #[test]
    fn assignment_forms_mutate() {
        let mut c = Cursor::at(0);
        c += 4;
        c -= 1;
        assert_eq!(c.position(), Some(3));
    }

    #[test]
    fn distance_is_signed() {
        let a = Cursor::at(2);
        let b = Cursor::at(7);
        assert_eq!(b - a, 5);
        assert_eq!(a - b, -5);
        assert_eq!(a.distance_to(b), 5);
    }

    #[test]
    fn default_is_sentinel() {
        let c = Cursor::default();
        assert!(c.is_sentinel());
        assert_eq!(c, Cursor::sentinel());
        assert_ne!(c, Cursor::at(0));
    }

    #[test]
    #[should_panic(expected = "cursor is detached")]
    fn sentinel_navigation_panics() {
        let mut c = Cursor::sentinel();
        c.advance(1);
    }

    #[test]
    #[should_panic(expected = "cannot retreat")]
    fn retreat_past_zero_panics() {
        let mut c = Cursor::at(1);
        c.retreat(2);
    }
}
