use core::{
    cell::Cell,
    sync::atomic::{fence, AtomicIsize, Ordering},
};

use super::ref_counter_update::RefCounterUpdate;

/// Storage for an object's own reference count.
pub trait RefCounter: Sized {
    // required
    fn with_count(count: isize) -> Self;
    /// Applies `i` and returns the value before the update.
    unsafe fn ref_counter_update(&self, i: RefCounterUpdate) -> isize;
    //
    #[inline(always)]
    fn ref_count(&self) -> isize {
        unsafe { self.ref_counter_update(RefCounterUpdate::Read) }
    }
}

impl RefCounter for Cell<isize> {
    #[inline(always)]
    fn with_count(count: isize) -> Self {
        Cell::new(count)
    }
    #[inline(always)]
    unsafe fn ref_counter_update(&self, i: RefCounterUpdate) -> isize {
        let result = self.get();
        self.set(result + i as isize);
        result
    }
}

impl RefCounter for AtomicIsize {
    #[inline(always)]
    fn with_count(count: isize) -> Self {
        AtomicIsize::new(count)
    }
    #[inline(always)]
    unsafe fn ref_counter_update(&self, i: RefCounterUpdate) -> isize {
        match i {
            RefCounterUpdate::AddRef => self.fetch_add(1, Ordering::Relaxed),
            RefCounterUpdate::Read => self.load(Ordering::Acquire),
            RefCounterUpdate::Release => {
                let result = self.fetch_sub(1, Ordering::Release);
                // the last owner must see all writes made through other owners.
                if result == 1 {
                    fence(Ordering::Acquire);
                }
                result
            }
        }
    }
}
