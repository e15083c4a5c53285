use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::chain::Chain;
use crate::link::Slot;

/// The minimal list flavor.
///
/// Carries the structural [`Chain`] operation set and nothing else — no
/// sorting, pairing, deduplication or aliasing. Chains move between the two
/// flavors through [`Chain::detach`] and [`Chain::attach`].
pub struct SlimList<S: Slot> {
    head: Option<NonNull<S::Elem>>,
    _slot: PhantomData<S>,
}

impl<S: Slot> SlimList<S> {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        SlimList {
            head: None,
            _slot: PhantomData,
        }
    }
}

impl<S: Slot> Chain<S> for SlimList<S> {
    #[inline]
    fn head(&self) -> Option<NonNull<S::Elem>> {
        self.head
    }

    #[inline]
    fn set_head(&mut self, head: Option<NonNull<S::Elem>>) {
        self.head = head;
    }
}

impl<S: Slot> Default for SlimList<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Slot> fmt::Debug for SlimList<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlimList").field("head", &self.head).finish()
    }
}

unsafe impl<S: Slot> Send for SlimList<S> where S::Elem: Send {}
unsafe impl<S: Slot> Sync for SlimList<S> where S::Elem: Sync {}
