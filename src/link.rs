use core::fmt;
use core::ptr::NonNull;

/// A forward link embedded inside a list element.
///
/// One `Link<T>` field per list the element can join. The field holds either
/// a reference to the successor element or nothing, and every chain must end
/// in a link holding nothing.
pub struct Link<T> {
    next: Option<NonNull<T>>,
}

impl<T> Link<T> {
    /// Creates an unlinked field.
    pub const fn new() -> Self {
        Link { next: None }
    }

    /// Get the successor element, if any.
    #[inline]
    pub fn next(&self) -> Option<NonNull<T>> {
        self.next
    }

    /// Set the successor element.
    #[inline]
    pub fn set_next(&mut self, next: Option<NonNull<T>>) {
        self.next = next;
    }
}

impl<T> Default for Link<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Link<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Link").field("next", &self.next).finish()
    }
}

unsafe impl<T: Send> Send for Link<T> {}
unsafe impl<T: Sync> Sync for Link<T> {}

/// Names one link field of an element type.
///
/// A slot is a zero-sized type standing for "the `Link` field called X inside
/// element type E". Lists are parameterized by a slot rather than by the
/// element alone, so an element carrying several link fields can sit in
/// several lists at the same time, one slot per list.
///
/// Implementations are normally generated with [`derive(Slots)`], one slot
/// type per `#[slot]` field:
///
/// ```
/// use core::ptr::NonNull;
/// use slink::{Chain, Link, List, Slots};
///
/// #[derive(Slots)]
/// struct Job {
///     #[slot]
///     queue: Link<Job>,
///     id: u32,
/// }
///
/// let mut pending = List::<JobQueue>::new();
/// let mut job = Job { queue: Link::new(), id: 7 };
/// pending.push(NonNull::from(&mut job));
/// assert_eq!(pending.len(), 1);
/// ```
///
/// [`derive(Slots)`]: crate::Slots
pub trait Slot {
    /// The element type carrying the link field.
    type Elem;

    /// Borrow the named link field of an element.
    fn link(elem: &Self::Elem) -> &Link<Self::Elem>;

    /// Mutably borrow the named link field of an element.
    fn link_mut(elem: &mut Self::Elem) -> &mut Link<Self::Elem>;

    /// Get the element's successor through this slot, if any.
    #[inline]
    fn next(elem: &Self::Elem) -> Option<NonNull<Self::Elem>> {
        Self::link(elem).next()
    }
}
