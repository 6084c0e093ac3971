//! Instrumented countable objects for tests.

use core::{cell::Cell, ptr::NonNull};
use std::rc::Rc;

use super::countable::{AsAny, Countable, Delete};

#[derive(Default, Debug)]
pub struct Log {
    pub duplicates: Cell<usize>,
    pub releases: Cell<usize>,
    pub drops: Cell<usize>,
}

impl Log {
    pub fn new() -> Rc<Self> {
        Rc::default()
    }
    pub fn calls(&self) -> usize {
        self.duplicates.get() + self.releases.get()
    }
}

pub struct Probe<T = ()> {
    count: Cell<isize>,
    log: Rc<Log>,
    pub value: T,
}

impl<T: 'static> Probe<T> {
    /// Allocates a probe holding one unit of ownership.
    pub fn new(log: &Rc<Log>, value: T) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Self {
            count: Cell::new(1),
            log: log.clone(),
            value,
        })))
    }
    pub fn ref_count(&self) -> isize {
        self.count.get()
    }
    unsafe fn delete(p: *mut u8) {
        drop(Box::from_raw(p as *mut Self));
    }
}

unsafe impl<T: 'static> Countable for Probe<T> {
    fn duplicate(&self) {
        let log = &self.log.duplicates;
        log.set(log.get() + 1);
        self.count.set(self.count.get() + 1);
    }
    unsafe fn release(&self) -> Option<Delete> {
        let log = &self.log.releases;
        log.set(log.get() + 1);
        let count = self.count.get() - 1;
        assert!(count >= 0);
        self.count.set(count);
        if count == 0 {
            Some(Self::delete as Delete)
        } else {
            None
        }
    }
}

impl<T> Drop for Probe<T> {
    fn drop(&mut self) {
        let log = &self.log.drops;
        log.set(log.get() + 1);
    }
}

pub trait Shape: Countable + AsAny {
    fn area(&self) -> f64;
}

pub struct Circle(pub f64);

pub struct Square(pub f64);

impl Shape for Probe<Circle> {
    fn area(&self) -> f64 {
        3.0 * self.value.0 * self.value.0
    }
}

impl Shape for Probe<Square> {
    fn area(&self) -> f64 {
        self.value.0 * self.value.0
    }
}

pub fn shape<T: 'static>(log: &Rc<Log>, value: T) -> NonNull<dyn Shape>
where
    Probe<T>: Shape,
{
    Probe::new(log, value)
}
