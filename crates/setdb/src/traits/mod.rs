mod bytes;
mod persist;
mod set_like;

pub use bytes::*;
pub use persist::*;
pub use set_like::*;
