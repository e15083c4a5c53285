use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::chain::{Chain, Reclaim};
use crate::iter::Zip;
use crate::link::Slot;
use crate::sort;

/// The rich list flavor.
///
/// Carries the full [`Chain`] operation set plus ordering, pairing,
/// run-deduplication and handle aliasing. The handle holds nothing but the
/// head reference; it owns the chain topology, never the element memory.
pub struct List<S: Slot> {
    head: Option<NonNull<S::Elem>>,
    _slot: PhantomData<S>,
}

impl<S: Slot> List<S> {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        List {
            head: None,
            _slot: PhantomData,
        }
    }

    /// Reorder the chain in place so the comparator finds every adjacent
    /// pair in order. O(n log n) time, O(log n) stack.
    ///
    /// Merge sort over the links: stable, no allocation, no random access.
    /// Elements comparing `Equal` keep their original relative order.
    pub fn sort_by<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&S::Elem, &S::Elem) -> Ordering,
    {
        self.head = sort::merge_sort::<S, F>(self.head, &mut cmp);
    }

    /// Pair this chain with another, position by position, stopping at the
    /// shorter one. The pairing is lazy and borrows both handles; restart it
    /// by calling `zip` again.
    ///
    /// # Safety
    ///
    /// Neither list may be structurally modified while the iterator is alive.
    pub unsafe fn zip<'a, S2: Slot>(&'a self, other: &'a List<S2>) -> Zip<'a, S, S2> {
        unsafe { Zip::new(self, other) }
    }

    /// Unlink consecutive duplicates under `eq`, keeping the first of each
    /// run and disposing of the rest per `reclaim`. O(n).
    ///
    /// Runs are consecutive only: sort or group the chain first for a full
    /// deduplication.
    pub fn dedup_by<E>(&mut self, mut eq: E, mut reclaim: Reclaim<'_, S::Elem>)
    where
        E: FnMut(&S::Elem, &S::Elem) -> bool,
    {
        let Some(mut keep) = self.head else {
            return;
        };
        loop {
            let Some(next) = S::next(unsafe { keep.as_ref() }) else {
                break;
            };
            if eq(unsafe { keep.as_ref() }, unsafe { next.as_ref() }) {
                unsafe { S::link_mut(keep.as_mut()).set_next(S::next(next.as_ref())) };
                reclaim.dispose(next);
            } else {
                keep = next;
            }
        }
    }

    /// A second handle over the same chain. O(1).
    ///
    /// Chain mutation through either handle is visible through both; the
    /// caller carries the burden of not reclaiming an element both handles
    /// still reach.
    pub fn alias(&self) -> List<S> {
        List {
            head: self.head,
            _slot: PhantomData,
        }
    }
}

impl<S: Slot> Chain<S> for List<S> {
    #[inline]
    fn head(&self) -> Option<NonNull<S::Elem>> {
        self.head
    }

    #[inline]
    fn set_head(&mut self, head: Option<NonNull<S::Elem>>) {
        self.head = head;
    }
}

impl<S: Slot> Default for List<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Slot> fmt::Debug for List<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List").field("head", &self.head).finish()
    }
}

unsafe impl<S: Slot> Send for List<S> where S::Elem: Send {}
unsafe impl<S: Slot> Sync for List<S> where S::Elem: Sync {}
