use core::{alloc::Layout, cell::Cell};
use std::alloc::{alloc, dealloc};

use super::manager::{Dealloc, Manager};

/// The system allocator with a single-threaded counter.
#[derive(Debug, Clone, Copy)]
pub struct Global();

pub const GLOBAL: Global = Global();

impl Dealloc for Global {
    type RefCounter = Cell<isize>;
    #[inline(always)]
    unsafe fn dealloc(ptr: *mut u8, layout: Layout) {
        dealloc(ptr, layout)
    }
}

impl Manager for Global {
    type Dealloc = Global;
    #[inline(always)]
    unsafe fn alloc(self, layout: Layout) -> *mut u8 {
        alloc(layout)
    }
}

#[cfg(test)]
mod test {
    use core::cell::Cell;

    use wasm_bindgen_test::wasm_bindgen_test;

    use crate::mem::{block::Block, manager::Manager};

    use super::{Global, GLOBAL};

    #[test]
    #[wasm_bindgen_test]
    fn test_i32() {
        let x = GLOBAL.new(5);
        assert_eq!(**x, 5);
        assert_eq!(x.ref_count(), 1);
        let y = x.clone();
        assert_eq!(y.ref_count(), 2);
        assert_eq!(x.cast::<Block<i32, Global>>(), y);
    }

    struct X<'a>(&'a Cell<i32>);

    impl Drop for X<'_> {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    #[wasm_bindgen_test]
    fn test_x() {
        let i = Cell::new(0);
        {
            let a = GLOBAL.new(X(&i));
            let mut b = a.clone();
            b.reset();
            assert_eq!(i.get(), 0);
        }
        assert_eq!(i.get(), 1);
    }
}
