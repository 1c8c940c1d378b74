use std::{iter::Copied, slice::Iter};

use smallvec::SmallVec;

use super::*;

/// Sorted, duplicate-free set of successors of a single node.
///
/// Uses `SmallVec<[Node; 4]>` as most nodes of the graphs we care about have only a handful of
/// successors.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Neighborhood(SmallVec<[Node; 4]>);

impl Neighborhood {
    /// Creates a neighborhood from an already sorted and deduplicated sequence
    pub fn from_sorted<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        let nbs: SmallVec<[Node; 4]> = nodes.into_iter().collect();
        debug_assert!(nbs.windows(2).all(|w| w[0] < w[1]));
        Self(nbs)
    }

    /// Creates a neighborhood from an arbitrary sequence; duplicates are merged
    pub fn from_unsorted<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        let mut nbs: SmallVec<[Node; 4]> = nodes.into_iter().collect();
        nbs.sort_unstable();
        nbs.dedup();
        Self(nbs)
    }

    /// Returns the number of successors
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns *true* if there are no successors
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over all successors in ascending order
    pub fn neighbors(&self) -> Copied<Iter<'_, Node>> {
        self.0.iter().copied()
    }

    /// Returns *true* if `v` is a successor
    pub fn has_neighbor(&self, v: Node) -> bool {
        self.0.binary_search(&v).is_ok()
    }

    /// Returns the successors as a sorted slice
    pub fn as_slice(&self) -> &[Node] {
        &self.0
    }

    /// Appends `v` which must be larger than every present successor.
    /// Returns *false* (and does nothing) if `v` is already the last successor.
    pub(crate) fn push_sorted(&mut self, v: Node) -> bool {
        match self.0.last() {
            Some(&last) if last == v => false,
            Some(&last) => {
                debug_assert!(last < v);
                self.0.push(v);
                true
            }
            None => {
                self.0.push(v);
                true
            }
        }
    }
}
