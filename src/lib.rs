pub mod data;
pub mod decode;
pub mod download;
pub mod error;
pub mod fields;
pub mod index;
pub mod matcher;
pub mod source;
pub mod tree;

pub use data::{App, AppCategory};
pub use error::{Error, Result};
pub use source::{create, create_with, load, parse};
