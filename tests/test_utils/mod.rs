pub mod shared_buffer;

pub mod fixtures;

#[allow(unused_imports)]
pub use shared_buffer::{SharedBuf, read_output};
