use core::fmt::{self, Write};
use io_trait::Io;
use std::io::{self, Error};

use crate::{
    console::{Rect, WriteConsole},
    mem::{
        auto_ptr::AutoPtr,
        block::Block,
        countable::Countable,
        global::{Global, GLOBAL},
        local::Local,
        manager::Manager,
    },
};

fn step<C: ?Sized + Countable>(
    w: &mut impl Write,
    name: &str,
    h: &AutoPtr<C>,
    count: isize,
) -> fmt::Result {
    write!(w, "{name}: ")?;
    w.write_handle(h)?;
    w.write_str(", count: ")?;
    w.write_int(count as i64)?;
    w.write_ret()
}

/// Adopt, copy, reseat, cast and swap handles, logging every step.
///
/// Lifetime steps run on `local`. A checked cast needs a `'static` object, so
/// the cast steps use a block from the global manager.
fn scenario(w: &mut impl Write, local: &Local) -> fmt::Result {
    let rect = Rect {
        left: 0,
        top: 0,
        right: 4,
        bottom: 3,
    };
    w.write_line()?;
    let mut h1 = local.new(rect);
    step(w, "adopt h1", &h1, h1.ref_count())?;
    w.write_rect(**h1)?;
    let mut h2 = h1.clone();
    step(w, "copy h2", &h2, h2.ref_count())?;
    h1.reset();
    step(w, "reset h1", &h1, h2.ref_count())?;
    w.write_line()?;
    let g = GLOBAL.new(rect);
    let miss = g.cast::<Block<u32, Global>>();
    step(w, "cast u32", &miss, g.ref_count())?;
    let hit = g.cast::<Block<Rect, Global>>();
    step(w, "cast rect", &hit, g.ref_count())?;
    drop((hit, g));
    w.write_line()?;
    let mut h3 = local.new(rect);
    h2.swap(&mut h3);
    step(w, "swap h2", &h2, h2.ref_count())?;
    step(w, "swap h3", &h3, h3.ref_count())?;
    h1.assign(&h3);
    step(w, "assign h1", &h1, h3.ref_count())?;
    w.write_line()?;
    drop((h1, h2, h3));
    w.write_str("live: ")?;
    w.write_int(local.counter() as i64)?;
    w.write_ret()
}

/// Fails when `local` still has live blocks.
fn balance(local: &Local) -> io::Result<()> {
    match local.counter() {
        0 => Ok(()),
        n => Err(Error::other(format!(
            "unbalanced lifetime: {n} live blocks, {} bytes",
            local.size()
        ))),
    }
}

pub fn run(io: &impl Io) -> io::Result<()> {
    let mut a = io.args();
    a.next();
    let output = match a.next() {
        Some(output) => output,
        None => return Err(Error::other("usage: autoref <output>")),
    };
    let local = Local::default();
    let mut log = String::new();
    scenario(&mut log, &local).map_err(Error::other)?;
    balance(&local)?;
    io.write(&output, log.as_bytes())
}

#[cfg(test)]
mod test {
    use io_test::VirtualIo;
    use io_trait::Io;
    use wasm_bindgen_test::wasm_bindgen_test;

    use crate::mem::{local::Local, manager::Manager};

    use super::{balance, run, scenario};

    #[test]
    #[wasm_bindgen_test]
    fn test_run() {
        let io: VirtualIo = VirtualIo::new(&["log.txt"]);
        let result = run(&io);
        assert!(result.is_ok());
        let output_vec = io.read("log.txt").unwrap();
        let s = String::from_utf8(output_vec).unwrap();
        assert!(s.ends_with("live: 0\r\n"));
    }

    #[test]
    #[wasm_bindgen_test]
    fn test_no_output() {
        let io: VirtualIo = VirtualIo::new(&[]);
        assert!(run(&io).is_err());
    }

    #[test]
    #[wasm_bindgen_test]
    fn test_unbalanced() {
        let local = Local::default();
        assert!(balance(&local).is_ok());
        let a = local.new(7u32);
        let b = a.clone();
        drop(a);
        let e = balance(&local).unwrap_err();
        assert!(e.to_string().starts_with("unbalanced lifetime: 1 live blocks"));
        drop(b);
        assert!(balance(&local).is_ok());
    }

    #[test]
    #[wasm_bindgen_test]
    fn test_scenario() {
        let local = Local::default();
        let mut s = String::new();
        scenario(&mut s, &local).unwrap();
        assert_eq!(local.counter(), 0);
        assert_eq!(local.size(), 0);
        let lines: Vec<&str> = s.split("\r\n").collect();
        assert!(lines[1].starts_with("adopt h1: 0x"));
        assert!(lines[1].ends_with(", count: 1"));
        assert_eq!(lines[2], "l:0, t:0, r:4 b:3, w:4, h:3");
        assert!(lines[3].ends_with(", count: 2"));
        assert_eq!(lines[4], "reset h1: null, count: 1");
        assert_eq!(lines[6], "cast u32: null, count: 1");
        assert!(lines[7].starts_with("cast rect: 0x"));
        assert!(lines[7].ends_with(", count: 2"));
        assert!(lines[9].ends_with(", count: 1"));
        assert!(lines[10].ends_with(", count: 1"));
        assert!(lines[11].ends_with(", count: 2"));
        assert_eq!(lines[13], "live: 0");
    }
}
