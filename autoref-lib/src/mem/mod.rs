pub mod auto_ptr;
pub mod block;
pub mod countable;
pub mod global;
pub mod local;
pub mod manager;
#[cfg(test)]
mod probe;
pub mod ref_counter;
pub mod ref_counter_update;
