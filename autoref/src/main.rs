use autoref_lib::app::run;
use io_impl::RealIo;

fn main() {
    if let Err(err) = run(&RealIo()) {
        eprintln!("err {}", err);
    }
}
