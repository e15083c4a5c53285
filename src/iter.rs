use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::chain::Chain;
use crate::link::{Link, Slot};

/// An iterator over the elements of one chain.
pub struct Iter<'a, S: Slot> {
    current: Option<NonNull<S::Elem>>,
    _chain: PhantomData<&'a Link<S::Elem>>,
}

impl<'a, S: Slot> Iter<'a, S> {
    /// Creates an iterator starting at the given chain's head.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the chain is not structurally modified
    /// while the iterator is alive.
    pub unsafe fn new<C: Chain<S>>(chain: &'a C) -> Self {
        Self {
            current: chain.head(),
            _chain: PhantomData,
        }
    }
}

impl<S: Slot> Iterator for Iter<'_, S> {
    type Item = NonNull<S::Elem>;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.inspect(|e| {
            self.current = S::next(unsafe { e.as_ref() });
        })
    }
}

unsafe impl<S: Slot> Send for Iter<'_, S> where S::Elem: Send {}
unsafe impl<S: Slot> Sync for Iter<'_, S> where S::Elem: Sync {}

/// An iterator pairing two chains position by position.
///
/// Ends at the shorter chain's length. It borrows both handles without
/// consuming them, so a fresh pairing can be restarted from the same lists at
/// any time.
pub struct Zip<'a, A: Slot, B: Slot> {
    left: Option<NonNull<A::Elem>>,
    right: Option<NonNull<B::Elem>>,
    _chains: PhantomData<(&'a Link<A::Elem>, &'a Link<B::Elem>)>,
}

impl<'a, A: Slot, B: Slot> Zip<'a, A, B> {
    /// Creates a pairing iterator over two chains.
    ///
    /// # Safety
    ///
    /// The caller must ensure that neither chain is structurally modified
    /// while the iterator is alive.
    pub unsafe fn new<CA, CB>(left: &'a CA, right: &'a CB) -> Self
    where
        CA: Chain<A>,
        CB: Chain<B>,
    {
        Self {
            left: left.head(),
            right: right.head(),
            _chains: PhantomData,
        }
    }
}

impl<A: Slot, B: Slot> Iterator for Zip<'_, A, B> {
    type Item = (NonNull<A::Elem>, NonNull<B::Elem>);

    fn next(&mut self) -> Option<Self::Item> {
        let a = self.left?;
        let b = self.right?;
        self.left = A::next(unsafe { a.as_ref() });
        self.right = B::next(unsafe { b.as_ref() });
        Some((a, b))
    }
}

unsafe impl<A: Slot, B: Slot> Send for Zip<'_, A, B>
where
    A::Elem: Send,
    B::Elem: Send,
{
}

unsafe impl<A: Slot, B: Slot> Sync for Zip<'_, A, B>
where
    A::Elem: Sync,
    B::Elem: Sync,
{
}
