use core::{alloc::Layout, marker::PhantomData, ops::Deref};

use super::{
    countable::{Countable, Delete},
    manager::Dealloc,
    ref_counter::RefCounter,
    ref_counter_update::RefCounterUpdate,
};

/// Block = (Header, Object)
///
/// A countable object allocated by a memory manager. The header is the
/// object's own reference count.
#[repr(C)]
pub struct Block<T, D: Dealloc> {
    header: D::RefCounter,
    object: T,
    _0: PhantomData<D>,
}

impl<T, D: Dealloc> Block<T, D> {
    pub const LAYOUT: Layout = Layout::new::<Self>();
    /// A block holding one unit of ownership.
    #[inline(always)]
    pub fn new(object: T) -> Self {
        Self {
            header: <D::RefCounter as RefCounter>::with_count(1),
            object,
            _0: PhantomData,
        }
    }
    #[inline(always)]
    pub fn ref_count(&self) -> isize {
        self.header.ref_count()
    }
    #[inline(always)]
    pub fn object(&self) -> &T {
        &self.object
    }
    unsafe fn delete(p: *mut u8) {
        (p as *mut Self).drop_in_place();
        D::dealloc(p, Self::LAYOUT);
    }
}

unsafe impl<T, D: Dealloc> Countable for Block<T, D> {
    #[inline(always)]
    fn duplicate(&self) {
        unsafe { self.header.ref_counter_update(RefCounterUpdate::AddRef) };
    }
    #[inline(always)]
    unsafe fn release(&self) -> Option<Delete> {
        if self.header.ref_counter_update(RefCounterUpdate::Release) == 1 {
            Some(Self::delete as Delete)
        } else {
            None
        }
    }
}

impl<T, D: Dealloc> Deref for Block<T, D> {
    type Target = T;
    #[inline(always)]
    fn deref(&self) -> &T {
        &self.object
    }
}
