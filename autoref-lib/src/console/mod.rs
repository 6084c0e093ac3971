//! Diagnostic text output for primitive values, simple geometry and handles.

use core::fmt::{self, Write};

use crate::mem::{auto_ptr::AutoPtr, countable::Countable};

pub const RET: &str = "\r\n";

pub const LINE: &str = "---------------------------------\r\n";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub cx: i32,
    pub cy: i32,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn width(&self) -> i32 {
        self.right - self.left
    }
    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

pub trait WriteConsole: Write {
    fn write_int(&mut self, n: i64) -> fmt::Result {
        write!(self, "{n}")
    }

    /// Six decimals at single precision.
    fn write_float(&mut self, n: f64) -> fmt::Result {
        write!(self, "{:.6}", n as f32)
    }

    fn write_hex(&mut self, n: u32) -> fmt::Result {
        write!(self, "0x{n:08X}")
    }

    fn write_point(&mut self, p: Point) -> fmt::Result {
        write!(self, "x:{}, y:{}{RET}", p.x, p.y)
    }

    fn write_size(&mut self, s: Size) -> fmt::Result {
        write!(self, "w:{}, h:{}{RET}", s.cx, s.cy)
    }

    fn write_rect(&mut self, r: Rect) -> fmt::Result {
        write!(
            self,
            "l:{}, t:{}, r:{} b:{}, w:{}, h:{}{RET}",
            r.left,
            r.top,
            r.right,
            r.bottom,
            r.width(),
            r.height()
        )
    }

    fn write_ret(&mut self) -> fmt::Result {
        self.write_str(RET)
    }

    fn write_line(&mut self) -> fmt::Result {
        self.write_str(LINE)
    }

    fn write_handle<C: ?Sized + Countable>(&mut self, h: &AutoPtr<C>) -> fmt::Result {
        if h.is_null() {
            self.write_str("null")
        } else {
            write!(self, "{:p}", *h)
        }
    }
}

impl<T: Write> WriteConsole for T {}
