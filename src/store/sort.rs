//! List quicksort by booking date
//!
//! Reorders a linked chain in place. Nodes are only relinked, never copied
//! or moved between slots.
//!
//! ## Partition
//! The range tail is the pivot. Walking from the head, every node is
//! detached and appended, in encounter order, to one of three chains:
//!
//! ```text
//!   less     date <  pivot      (sorted further)
//!   ties     date == pivot      (pivot appended last; already sorted)
//!   greater  date >  pivot      (sorted further)
//! ```
//!
//! and the result is spliced as `less -> ties -> greater`. Because every
//! chain keeps encounter order and the pivot was the last of its ties, the
//! sort is stable.
//!
//! Sub-ranges wait on an explicit work stack instead of the call stack.
//! A tail pivot still costs O(n^2) on already-sorted distinct dates; only
//! the stack depth is bounded by the heap.

use std::cmp::Ordering;

use super::arena::{Arena, SlotId};

/// Counters reported by a sort run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Records in the sorted chain
    pub records: usize,

    /// Partition passes performed
    pub partitions: usize,
}

/// A non-empty linked range whose tail has no successor
#[derive(Debug, Clone, Copy)]
struct Span {
    head: SlotId,
    tail: SlotId,
    len: usize,
}

/// A chain under construction
#[derive(Debug, Default, Clone, Copy)]
struct Chain {
    head: Option<SlotId>,
    tail: Option<SlotId>,
    len: usize,
}

impl Chain {
    /// Append one detached node.
    fn push(&mut self, arena: &mut Arena, slot: SlotId) {
        self.append(
            arena,
            Span {
                head: slot,
                tail: slot,
                len: 1,
            },
        );
    }

    /// Splice a whole span onto the end.
    fn append(&mut self, arena: &mut Arena, span: Span) {
        match self.tail {
            Some(tail) => arena.set_next(tail, Some(span.head)),
            None => self.head = Some(span.head),
        }
        self.tail = Some(span.tail);
        self.len += span.len;
    }

    fn span(&self) -> Option<Span> {
        Some(Span {
            head: self.head?,
            tail: self.tail?,
            len: self.len,
        })
    }
}

#[derive(Debug, Default)]
struct Partition {
    less: Chain,
    ties: Chain,
    greater: Chain,
}

enum Pending {
    /// Needs partitioning
    Unsorted(Span),

    /// Ready to splice as-is
    Sorted(Span),
}

/// Sort the chain starting at `head`, returning the new head.
pub(crate) fn sort_by_date(arena: &mut Arena, head: Option<SlotId>) -> (Option<SlotId>, SortStats) {
    let mut stats = SortStats::default();

    let Some(range) = span_from(arena, head) else {
        return (None, stats);
    };
    stats.records = range.len;

    let mut pending = vec![Pending::Unsorted(range)];
    let mut sorted = Chain::default();

    while let Some(job) = pending.pop() {
        match job {
            Pending::Sorted(span) => sorted.append(arena, span),
            Pending::Unsorted(span) if span.head == span.tail => sorted.append(arena, span),
            Pending::Unsorted(span) => {
                stats.partitions += 1;
                let parts = partition(arena, span);

                // LIFO: push in reverse splice order
                if let Some(greater) = parts.greater.span() {
                    pending.push(Pending::Unsorted(greater));
                }
                if let Some(ties) = parts.ties.span() {
                    pending.push(Pending::Sorted(ties));
                }
                if let Some(less) = parts.less.span() {
                    pending.push(Pending::Unsorted(less));
                }
            }
        }
    }

    debug_assert_eq!(sorted.len, stats.records);
    (sorted.head, stats)
}

/// Split `span` around its tail. Every node ends up in exactly one chain.
fn partition(arena: &mut Arena, span: Span) -> Partition {
    let pivot = span.tail;
    let pivot_date = arena.date(pivot);
    let mut parts = Partition::default();

    let mut cursor = Some(span.head);
    while let Some(slot) = cursor {
        if slot == pivot {
            break;
        }
        cursor = arena.take_next(slot);

        let chain = match arena.date(slot).cmp(&pivot_date) {
            Ordering::Less => &mut parts.less,
            Ordering::Equal => &mut parts.ties,
            Ordering::Greater => &mut parts.greater,
        };
        chain.push(arena, slot);
    }

    arena.set_next(pivot, None);
    parts.ties.push(arena, pivot);

    debug_assert_eq!(
        parts.less.len + parts.ties.len + parts.greater.len,
        span.len
    );
    parts
}

/// Walk from `head` to find the tail and length.
fn span_from(arena: &Arena, head: Option<SlotId>) -> Option<Span> {
    let head = head?;
    let mut tail = head;
    let mut len = 1;

    while let Some(next) = arena.next(tail) {
        tail = next;
        len += 1;
    }

    Some(Span { head, tail, len })
}
