//! Comparator-driven merge sort over a chain of links.
//!
//! Top-down: split the chain into near-equal halves with a slow/fast walk,
//! sort each half, relink the two sorted halves into one. O(n log n) time,
//! O(log n) stack, no allocation, no element copies.

use core::cmp::Ordering;
use core::ptr::NonNull;

use crate::link::Slot;

pub(crate) fn merge_sort<S, F>(
    head: Option<NonNull<S::Elem>>,
    cmp: &mut F,
) -> Option<NonNull<S::Elem>>
where
    S: Slot,
    F: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    let first = head?;
    if S::next(unsafe { first.as_ref() }).is_none() {
        return head;
    }
    let back = split::<S>(first);
    let front = merge_sort::<S, F>(Some(first), cmp);
    let back = merge_sort::<S, F>(back, cmp);
    merge::<S, F>(front, back, cmp)
}

/// Cut the chain after its midpoint and return the back half's head.
///
/// The fast cursor advances two links per step, the slow one link, so the
/// slow cursor sits on the last element of the front half when the fast one
/// runs off the end.
fn split<S: Slot>(head: NonNull<S::Elem>) -> Option<NonNull<S::Elem>> {
    let mut slow = head;
    let mut fast = head;
    loop {
        let Some(step) = S::next(unsafe { fast.as_ref() }) else {
            break;
        };
        let Some(step) = S::next(unsafe { step.as_ref() }) else {
            break;
        };
        fast = step;
        if let Some(next) = S::next(unsafe { slow.as_ref() }) {
            slow = next;
        }
    }
    let back = S::next(unsafe { slow.as_ref() });
    unsafe { S::link_mut(slow.as_mut()).set_next(None) };
    back
}

/// Relink two sorted chains into one. Ties take the left element first, which
/// is what keeps the sort stable.
fn merge<S, F>(
    mut left: Option<NonNull<S::Elem>>,
    mut right: Option<NonNull<S::Elem>>,
    cmp: &mut F,
) -> Option<NonNull<S::Elem>>
where
    S: Slot,
    F: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    let mut head: Option<NonNull<S::Elem>> = None;
    let mut tail: Option<NonNull<S::Elem>> = None;
    loop {
        let take = match (left, right) {
            (Some(l), Some(r)) => {
                if cmp(unsafe { l.as_ref() }, unsafe { r.as_ref() }) != Ordering::Greater {
                    left = S::next(unsafe { l.as_ref() });
                    l
                } else {
                    right = S::next(unsafe { r.as_ref() });
                    r
                }
            }
            (rest_left, rest_right) => {
                let rest = rest_left.or(rest_right);
                match tail {
                    Some(mut t) => unsafe { S::link_mut(t.as_mut()).set_next(rest) },
                    None => head = rest,
                }
                break;
            }
        };
        match tail {
            Some(mut t) => unsafe { S::link_mut(t.as_mut()).set_next(Some(take)) },
            None => head = Some(take),
        }
        tail = Some(take);
    }
    head
}
