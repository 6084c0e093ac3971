use core::alloc::Layout;
use std::alloc::handle_alloc_error;

use super::{auto_ptr::AutoPtr, block::Block, ref_counter::RefCounter};

pub trait Dealloc {
    type RefCounter: RefCounter;
    unsafe fn dealloc(ptr: *mut u8, layout: Layout);
}

pub trait Manager: Sized {
    // required:
    type Dealloc: Dealloc;
    /// Returns null when the allocation fails.
    unsafe fn alloc(self, layout: Layout) -> *mut u8;
    // optional:
    /// Allocates a block for `object`. The handle adopts the block's only unit
    /// of ownership.
    fn new<T>(self, object: T) -> AutoPtr<Block<T, Self::Dealloc>> {
        let layout = Block::<T, Self::Dealloc>::LAYOUT;
        unsafe {
            let p = self.alloc(layout) as *mut Block<T, Self::Dealloc>;
            if p.is_null() {
                handle_alloc_error(layout)
            }
            p.write(Block::new(object));
            AutoPtr::from_raw(p)
        }
    }
}
