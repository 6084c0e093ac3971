use core::ptr::NonNull;

use crate::mem::countable::{AsAny, Countable};

use super::AutoPtr;

impl<C: ?Sized + Countable + AsAny> AutoPtr<C> {
    /// Checked cast. Returns a new handle sharing the object when it is a `T`,
    /// a null handle otherwise. The receiver is not changed.
    ///
    /// ```
    /// # use autoref_lib::mem::{block::Block, global::{Global, GLOBAL}, manager::Manager};
    /// let a = GLOBAL.new(42u32);
    /// let b = a.cast::<Block<u32, Global>>();
    /// assert_eq!(a, b);
    /// assert!(a.cast::<Block<i64, Global>>().is_null());
    /// ```
    pub fn cast<T: Countable + 'static>(&self) -> AutoPtr<T> {
        let ptr = self
            .get()
            .and_then(|c| AsAny::as_any(c).downcast_ref::<T>())
            .map(NonNull::from);
        unsafe { AutoPtr::share(ptr) }
    }
}

impl<C: ?Sized + Countable> AutoPtr<C> {
    /// Unchecked cast. Returns a new handle sharing the object, reinterpreted
    /// as a `T`.
    ///
    /// # Safety
    ///
    /// The referenced object must be a `T`.
    pub unsafe fn unsafe_cast<T: Countable>(&self) -> AutoPtr<T> {
        AutoPtr::share(self.as_ptr().map(NonNull::cast))
    }
}
