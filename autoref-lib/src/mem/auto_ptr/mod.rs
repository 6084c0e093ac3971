mod cast;
mod cmp;

use core::{
    fmt,
    marker::PhantomData,
    mem::{forget, replace},
    ops::{Deref, Not},
    ptr::{self, NonNull},
};

use super::countable::{release, Countable};

/// A counted handle to an object that keeps its own reference count.
///
/// The handle stores only the reference. It calls [`Countable::duplicate`]
/// when it takes an additional unit of ownership and [`Countable::release`]
/// when it gives one up. When the last unit is given up, the handle runs the
/// object's deleter through the pointer it holds.
///
/// `AutoPtr` does no synchronization. It is `Send`/`Sync` only when the object
/// is, which requires the object's counting to be thread-safe.
#[repr(transparent)]
pub struct AutoPtr<C: ?Sized + Countable> {
    ptr: Option<NonNull<C>>,
    _0: PhantomData<C>,
}

unsafe impl<C: ?Sized + Countable + Send + Sync> Send for AutoPtr<C> {}

unsafe impl<C: ?Sized + Countable + Send + Sync> Sync for AutoPtr<C> {}

impl<C: ?Sized + Countable> AutoPtr<C> {
    #[inline(always)]
    pub const fn null() -> Self {
        Self {
            ptr: None,
            _0: PhantomData,
        }
    }
    /// Takes over one unit of ownership already held by the caller.
    #[inline(always)]
    pub const unsafe fn adopt(ptr: Option<NonNull<C>>) -> Self {
        Self {
            ptr,
            _0: PhantomData,
        }
    }
    /// Takes an additional unit of ownership.
    #[inline(always)]
    pub unsafe fn share(ptr: Option<NonNull<C>>) -> Self {
        if let Some(p) = ptr {
            p.as_ref().duplicate();
        }
        Self::adopt(ptr)
    }
    #[inline(always)]
    pub unsafe fn from_raw(ptr: *const C) -> Self {
        Self::adopt(NonNull::new(ptr as *mut C))
    }
    #[inline(always)]
    pub unsafe fn from_raw_shared(ptr: *const C) -> Self {
        Self::share(NonNull::new(ptr as *mut C))
    }
    /// Gives the unit of ownership back to the caller.
    #[inline(always)]
    pub fn into_raw(self) -> Option<NonNull<C>> {
        let result = self.ptr;
        forget(self);
        result
    }
    //
    /// Reseats without incrementing. A no-op when `ptr` is already referenced.
    pub unsafe fn assign_raw(&mut self, ptr: *const C) -> &mut Self {
        let ptr = NonNull::new(ptr as *mut C);
        if !same(self.ptr, ptr) {
            self.reseat(ptr);
        }
        self
    }
    /// Reseats and increments the new reference. A no-op when `ptr` is already
    /// referenced.
    pub unsafe fn assign_raw_shared(&mut self, ptr: *const C) -> &mut Self {
        let ptr = NonNull::new(ptr as *mut C);
        if !same(self.ptr, ptr) {
            if let Some(p) = ptr {
                p.as_ref().duplicate();
            }
            self.reseat(ptr);
        }
        self
    }
    /// Shares the reference held by `other`.
    pub fn assign(&mut self, other: &Self) -> &mut Self {
        if !ptr::eq(self, other) {
            unsafe {
                if let Some(p) = other.ptr {
                    p.as_ref().duplicate();
                }
                self.reseat(other.ptr);
            }
        }
        self
    }
    #[inline(always)]
    pub fn reset(&mut self) {
        unsafe { self.reseat(None) }
    }
    /// Stores `ptr` and then releases the previous reference.
    #[inline(always)]
    unsafe fn reseat(&mut self, ptr: Option<NonNull<C>>) {
        if let Some(old) = replace(&mut self.ptr, ptr) {
            release(old);
        }
    }
    //
    #[inline(always)]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.ptr, &mut other.ptr);
    }
    #[inline(always)]
    pub fn is_null(&self) -> bool {
        self.ptr.is_none()
    }
    #[inline(always)]
    pub fn as_ptr(&self) -> Option<NonNull<C>> {
        self.ptr
    }
    #[inline(always)]
    pub fn get(&self) -> Option<&C> {
        self.ptr.map(|p| unsafe { &*p.as_ptr() })
    }
    /// # Safety
    ///
    /// The handle must not be null.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self) -> &C {
        &*self.ptr.unwrap_unchecked().as_ptr()
    }
    /// Adds one unit of ownership for the caller and returns the reference.
    /// The caller becomes responsible for releasing it.
    pub fn duplicate(&self) -> Option<NonNull<C>> {
        if let Some(p) = self.ptr {
            unsafe { p.as_ref().duplicate() };
        }
        self.ptr
    }
    #[inline(always)]
    fn addr(&self) -> *const () {
        addr(self.ptr)
    }
}

impl<C: Countable> AutoPtr<C> {
    #[inline(always)]
    pub fn as_raw(&self) -> *const C {
        self.ptr.map_or(ptr::null(), |p| p.as_ptr() as *const C)
    }
}

#[inline(always)]
fn addr<C: ?Sized>(ptr: Option<NonNull<C>>) -> *const () {
    ptr.map_or(ptr::null(), |p| p.cast::<()>().as_ptr() as *const ())
}

#[inline(always)]
fn same<C: ?Sized>(a: Option<NonNull<C>>, b: Option<NonNull<C>>) -> bool {
    addr(a) == addr(b)
}

impl<C: ?Sized + Countable> Default for AutoPtr<C> {
    #[inline(always)]
    fn default() -> Self {
        Self::null()
    }
}

impl<C: ?Sized + Countable> Clone for AutoPtr<C> {
    #[inline(always)]
    fn clone(&self) -> Self {
        unsafe { Self::share(self.ptr) }
    }
    #[inline(always)]
    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

impl<C: ?Sized + Countable> Drop for AutoPtr<C> {
    fn drop(&mut self) {
        if let Some(p) = self.ptr {
            unsafe { release(p) }
        }
    }
}

impl<C: ?Sized + Countable> Deref for AutoPtr<C> {
    type Target = C;
    #[inline(always)]
    fn deref(&self) -> &C {
        match self.get() {
            Some(c) => c,
            None => null_deref(),
        }
    }
}

#[cold]
#[inline(never)]
fn null_deref() -> ! {
    panic!("null AutoPtr dereference")
}

impl<C: ?Sized + Countable> Not for &AutoPtr<C> {
    type Output = bool;
    #[inline(always)]
    fn not(self) -> bool {
        self.is_null()
    }
}

impl<C: ?Sized + Countable> fmt::Debug for AutoPtr<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AutoPtr").field(&self.addr()).finish()
    }
}

impl<C: ?Sized + Countable> fmt::Pointer for AutoPtr<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Pointer::fmt(&self.addr(), f)
    }
}
