use core::{any::Any, ptr::NonNull};

/// Destroys an object whose count reached zero. The argument is the thin
/// address of the object.
pub type Delete = unsafe fn(*mut u8);

/// An object that keeps its own reference count.
///
/// # Safety
///
/// The implementation must keep the count balanced: every `duplicate` adds one
/// unit of ownership, every `release` removes one, and only the `release` that
/// takes the count from 1 to 0 returns the deleter. The deleter must destroy
/// the object exactly once.
pub unsafe trait Countable {
    fn duplicate(&self);
    /// Removes one unit of ownership. Returns the deleter when no owner is left;
    /// the caller must then run it on the object's address and never touch the
    /// object again.
    #[must_use]
    unsafe fn release(&self) -> Option<Delete>;
}

/// Removes one unit of ownership from `p` and destroys the object through `p`
/// when it was the last one.
#[inline(always)]
pub unsafe fn release<C: ?Sized + Countable>(p: NonNull<C>) {
    if let Some(delete) = p.as_ref().release() {
        delete(p.cast::<u8>().as_ptr());
    }
}

/// Runtime type information for a checked cast.
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    #[inline(always)]
    fn as_any(&self) -> &dyn Any {
        self
    }
}
