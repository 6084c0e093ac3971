#![allow(clippy::assertions_on_constants)]
#![allow(clippy::missing_safety_doc)]
pub mod app;
pub mod console;
pub mod mem;
