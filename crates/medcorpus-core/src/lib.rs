#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod config;
pub mod error;
pub mod loader;
pub mod registry;
pub mod render;
pub mod traits;
pub mod types;
pub mod validation;

pub use error::{Error, Result};
pub use registry::Registry;
pub use traits::Record;
