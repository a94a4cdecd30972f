//! Cartesian product over an ordered list of qualifier axes.
//!
//! The first axis varies slowest and the last axis fastest, i.e. the order of
//! nested loops with the first axis outermost. This order is part of the output
//! contract: downstream consumers diff generated files across versions.

use super::axis::QualifierAxis;
use std::iter::FusedIterator;

/// One token drawn from each axis, in axis order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Combination<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> Combination<'a> {
    pub fn new(tokens: Vec<&'a str>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[&'a str] {
        &self.tokens
    }

    /// True when every axis contributes its absent token.
    pub fn is_unqualified(&self) -> bool {
        self.tokens.iter().all(|token| token.is_empty())
    }
}

/// Number of combinations of `axes`, or `None` if it does not fit in `usize`.
pub fn product_len(axes: &[QualifierAxis]) -> Option<usize> {
    axes.iter()
        .try_fold(1usize, |total, axis| total.checked_mul(axis.len()))
}

/// Lazy iterator over every combination of `axes`.
///
/// Cloning yields an independent iterator at the same position, so a fresh
/// pass is just another call to [`combinations`].
#[derive(Debug, Clone)]
pub struct Combinations<'a> {
    axes: &'a [QualifierAxis],
    // None once exhausted
    cursor: Option<Vec<usize>>,
    // None when the product exceeds usize
    remaining: Option<usize>,
}

/// Enumerate the full product of `axes`.
///
/// Zero axes produce a single empty combination. Any axis without tokens
/// makes the product empty.
pub fn combinations(axes: &[QualifierAxis]) -> Combinations<'_> {
    let cursor = axes
        .iter()
        .all(|axis| !axis.is_empty())
        .then(|| vec![0; axes.len()]);
    Combinations {
        axes,
        cursor,
        remaining: product_len(axes),
    }
}

impl<'a> Iterator for Combinations<'a> {
    type Item = Combination<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.cursor.as_mut()?;
        let axes = self.axes;

        let tokens = cursor
            .iter()
            .zip(axes)
            .map(|(&index, axis)| axis.token(index))
            .collect();

        // Odometer step, last axis fastest
        let mut wrapped = true;
        for (position, axis) in cursor.iter_mut().zip(axes).rev() {
            *position += 1;
            if *position < axis.len() {
                wrapped = false;
                break;
            }
            *position = 0;
        }
        if wrapped {
            self.cursor = None;
        }

        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
        }
        Some(Combination::new(tokens))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Combinations<'_> {}
