#![doc = include_str!("../README.md")]

#[cfg(feature = "derive")]
pub use setdb_derive::Persist;

mod archive;
mod category;
mod containers;
mod encoding;
mod error;
mod load;
mod options;
mod registry;
mod reserve;
mod save;
mod traits;
mod version;

pub use archive::*;
pub use category::*;
pub use containers::*;
pub use encoding::*;
pub use error::*;
pub use load::*;
pub use options::*;
pub use registry::*;
pub use reserve::*;
pub use save::*;
pub use traits::*;
pub use version::*;

const SIZE_OF_U64: usize = std::mem::size_of::<u64>();
