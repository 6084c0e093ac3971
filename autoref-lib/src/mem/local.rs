use core::{
    alloc::Layout,
    sync::atomic::{AtomicIsize, AtomicUsize, Ordering},
};
use std::alloc::handle_alloc_error;

use super::{
    global::{Global, GLOBAL},
    manager::{Dealloc, Manager},
};

/// An allocator that keeps track of its live blocks. Counters are atomic, so
/// handles to its blocks can be shared between threads.
#[derive(Debug)]
pub struct Local {
    counter: AtomicUsize,
    size: AtomicUsize,
}

impl Default for Local {
    #[inline(always)]
    fn default() -> Self {
        Self {
            counter: AtomicUsize::new(0),
            size: AtomicUsize::new(0),
        }
    }
}

type Header = *const Local;

impl Local {
    /// The number of live blocks.
    pub fn counter(&self) -> usize {
        self.counter.load(Ordering::Relaxed)
    }
    /// The number of live bytes, including headers.
    pub fn size(&self) -> usize {
        self.size.load(Ordering::Relaxed)
    }
    /// (full layout, block offset)
    fn layout(block_layout: Layout) -> (Layout, usize) {
        match Layout::new::<Header>().extend(block_layout) {
            Ok(result) => result,
            Err(_) => handle_alloc_error(block_layout),
        }
    }
}

impl Dealloc for &Local {
    type RefCounter = AtomicIsize;
    unsafe fn dealloc(block_p: *mut u8, block_layout: Layout) {
        let (layout, offset) = Local::layout(block_layout);
        let p = block_p.sub(offset);
        {
            let local = &**(p as *const Header);
            local.counter.fetch_sub(1, Ordering::Relaxed);
            local.size.fetch_sub(layout.size(), Ordering::Relaxed);
        }
        Global::dealloc(p, layout);
    }
}

impl<'a> Manager for &'a Local {
    type Dealloc = Self;
    unsafe fn alloc(self, block_layout: Layout) -> *mut u8 {
        let (layout, offset) = Local::layout(block_layout);
        let p = GLOBAL.alloc(layout);
        if p.is_null() {
            return p;
        }
        (p as *mut Header).write(self);
        self.counter.fetch_add(1, Ordering::Relaxed);
        self.size.fetch_add(layout.size(), Ordering::Relaxed);
        p.add(offset)
    }
}
