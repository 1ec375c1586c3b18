//! Relational and arithmetic semantics over the container's payload.
//!
//! All operations here are pure: they read both operands and produce a new
//! container or a boolean. Container-with-container forms are implemented on
//! references (`&a + &b`); scalar forms are the `*_scalar` methods.

use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Sub};

use crate::core::GrowVec;
use crate::error::GrowVecError;

impl<T: PartialEq> PartialEq for GrowVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowVec<T> {}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for GrowVec<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other
    }
}

/// Length-primary ordering: a shorter container sorts before a longer one
/// regardless of element values; elements break ties only between equal
/// lengths, pairwise left to right.
impl<T: PartialOrd> PartialOrd for GrowVec<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.len() != other.len() {
            return Some(self.len().cmp(&other.len()));
        }
        for (left, right) in self.iter().zip(other.iter()) {
            match left.partial_cmp(right)? {
                Ordering::Equal => continue,
                unequal => return Some(unequal),
            }
        }
        Some(Ordering::Equal)
    }
}

impl<T: Ord> Ord for GrowVec<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.len()
            .cmp(&other.len())
            .then_with(|| self.as_slice().cmp(other.as_slice()))
    }
}

impl<T: Clone> Add for &GrowVec<T> {
    type Output = GrowVec<T>;

    /// Concatenation: the left operand's elements followed by the right's.
    fn add(self, other: &GrowVec<T>) -> GrowVec<T> {
        let mut result = GrowVec::new();
        result.reserve(self.len() + other.len());
        result.extend(self.iter().cloned());
        result.extend(other.iter().cloned());
        result
    }
}

impl<T> Sub for &GrowVec<T>
where
    T: Sub<Output = T> + Clone + Default,
{
    type Output = GrowVec<T>;

    /// Element-wise difference over the longer of the two operands; the
    /// shorter operand is padded with `T::default()`.
    fn sub(self, other: &GrowVec<T>) -> GrowVec<T> {
        let len = self.len().max(other.len());
        let mut result = GrowVec::new();
        result.reserve(len);
        for i in 0..len {
            let left = self.get(i).cloned().unwrap_or_default();
            let right = other.get(i).cloned().unwrap_or_default();
            result.push(left - right);
        }
        result
    }
}

impl<T> Mul for &GrowVec<T>
where
    T: Mul<Output = T> + Clone,
{
    type Output = GrowVec<T>;

    /// Element-wise product.
    ///
    /// # Panics
    ///
    /// Panics when the lengths differ; use [`GrowVec::try_mul`] for the
    /// checked form.
    fn mul(self, other: &GrowVec<T>) -> GrowVec<T> {
        match self.try_mul(other) {
            Ok(result) => result,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> Div for &GrowVec<T>
where
    T: Div<Output = T> + Clone,
{
    type Output = GrowVec<T>;

    /// Element-wise quotient. Division by zero follows the payload type's
    /// own semantics.
    ///
    /// # Panics
    ///
    /// Panics when the lengths differ; use [`GrowVec::try_div`] for the
    /// checked form.
    fn div(self, other: &GrowVec<T>) -> GrowVec<T> {
        match self.try_div(other) {
            Ok(result) => result,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> GrowVec<T> {
    /// Element-wise product of two equally sized containers.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::SizeMismatch` when the lengths differ; no
    /// element is computed in that case.
    pub fn try_mul(&self, other: &Self) -> Result<Self, GrowVecError>
    where
        T: Mul<Output = T> + Clone,
    {
        self.check_same_len(other)?;
        Ok(self
            .iter()
            .zip(other.iter())
            .map(|(left, right)| left.clone() * right.clone())
            .collect())
    }

    /// Element-wise quotient of two equally sized containers.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::SizeMismatch` when the lengths differ; no
    /// element is computed in that case.
    pub fn try_div(&self, other: &Self) -> Result<Self, GrowVecError>
    where
        T: Div<Output = T> + Clone,
    {
        self.check_same_len(other)?;
        Ok(self
            .iter()
            .zip(other.iter())
            .map(|(left, right)| left.clone() / right.clone())
            .collect())
    }

    /// Element-wise `element + scalar`, same length as the input.
    #[must_use]
    pub fn add_scalar(&self, scalar: &T) -> Self
    where
        T: Add<Output = T> + Clone,
    {
        self.iter()
            .map(|value| value.clone() + scalar.clone())
            .collect()
    }

    /// Element-wise `element - scalar`.
    #[must_use]
    pub fn sub_scalar(&self, scalar: &T) -> Self
    where
        T: Sub<Output = T> + Clone,
    {
        self.iter()
            .map(|value| value.clone() - scalar.clone())
            .collect()
    }

    /// Element-wise `element * scalar`.
    #[must_use]
    pub fn mul_scalar(&self, scalar: &T) -> Self
    where
        T: Mul<Output = T> + Clone,
    {
        self.iter()
            .map(|value| value.clone() * scalar.clone())
            .collect()
    }

    /// Element-wise `element / scalar`. Division by zero follows the
    /// payload type's own semantics.
    #[must_use]
    pub fn div_scalar(&self, scalar: &T) -> Self
    where
        T: Div<Output = T> + Clone,
    {
        self.iter()
            .map(|value| value.clone() / scalar.clone())
            .collect()
    }

    fn check_same_len(&self, other: &Self) -> Result<(), GrowVecError> {
        if self.len() == other.len() {
            Ok(())
        } else {
            Err(GrowVecError::SizeMismatch {
                left: self.len(),
                right: other.len(),
            })
        }
    }
}
