#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod error;
pub mod registry;
pub mod syntax;
pub mod transform;

pub use error::TransformError;
pub use registry::{AssetRecord, AssetRegistry};
pub use transform::{AssetMacro, AssetTransformer};
