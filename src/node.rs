use slink_derive::Slots;

use crate::link::Link;

/// A ready-made element wrapping an arbitrary payload.
///
/// For callers who want list semantics without declaring their own element
/// struct. The slot type for its single link field is [`NodeNext`].
#[derive(Slots)]
#[slots(crate_path = "crate")]
pub struct Node<T> {
    #[slot]
    next: Link<Node<T>>,
    data: T,
}

impl<T> Node<T> {
    /// Creates an unlinked node holding `data`.
    pub const fn new(data: T) -> Self {
        Node {
            next: Link::new(),
            data,
        }
    }

    /// Get the payload.
    #[inline]
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Get a mutable reference to the payload.
    #[inline]
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Take the payload out of an unlinked node.
    pub fn into_data(self) -> T {
        self.data
    }
}

impl<T: Default> Default for Node<T> {
    fn default() -> Self {
        Node {
            next: Link::new(),
            data: T::default(),
        }
    }
}
