//! Identity comparison. Every form compares the thin address of the
//! referenced object, null being the lowest. No count is touched.

use core::{
    cmp::Ordering,
    hash::{Hash, Hasher},
    ptr::NonNull,
};

use crate::mem::countable::Countable;

use super::{addr, AutoPtr};

impl<C: ?Sized + Countable> PartialEq for AutoPtr<C> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl<C: ?Sized + Countable> Eq for AutoPtr<C> {}

impl<C: ?Sized + Countable> PartialOrd for AutoPtr<C> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: ?Sized + Countable> Ord for AutoPtr<C> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        self.addr().cmp(&other.addr())
    }
}

impl<C: ?Sized + Countable> Hash for AutoPtr<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state)
    }
}

trait Addr {
    fn thin(&self) -> *const ();
}

impl<C: ?Sized> Addr for *const C {
    #[inline(always)]
    fn thin(&self) -> *const () {
        self.cast()
    }
}

impl<C: ?Sized> Addr for *mut C {
    #[inline(always)]
    fn thin(&self) -> *const () {
        self.cast_const().cast()
    }
}

impl<C: ?Sized> Addr for NonNull<C> {
    #[inline(always)]
    fn thin(&self) -> *const () {
        addr(Some(*self))
    }
}

macro_rules! raw_cmp {
    ($($raw:ty),*) => {$(
        impl<C: ?Sized + Countable> PartialEq<$raw> for AutoPtr<C> {
            #[inline(always)]
            fn eq(&self, other: &$raw) -> bool {
                self.addr() == other.thin()
            }
        }

        impl<C: ?Sized + Countable> PartialEq<AutoPtr<C>> for $raw {
            #[inline(always)]
            fn eq(&self, other: &AutoPtr<C>) -> bool {
                other == self
            }
        }

        impl<C: ?Sized + Countable> PartialOrd<$raw> for AutoPtr<C> {
            #[inline(always)]
            fn partial_cmp(&self, other: &$raw) -> Option<Ordering> {
                Some(self.addr().cmp(&other.thin()))
            }
        }

        impl<C: ?Sized + Countable> PartialOrd<AutoPtr<C>> for $raw {
            #[inline(always)]
            fn partial_cmp(&self, other: &AutoPtr<C>) -> Option<Ordering> {
                other.partial_cmp(self).map(Ordering::reverse)
            }
        }
    )*};
}

raw_cmp!(*const C, *mut C, NonNull<C>);
