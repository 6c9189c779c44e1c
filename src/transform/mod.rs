//! The rewriting pass over parsed source files.
//!
//! Responsibilities are split into focused submodules so each stage can be
//! tested on its own: `recognize` decides whether a node is one of the
//! asset macro calls, `arguments` reduces an argument node to a literal
//! match key, `replace` synthesizes the replacement node, and `driver`
//! walks whole files applying the three in pre-order.

mod arguments;
mod driver;
mod recognize;
mod replace;

pub use arguments::literal_text;
pub use driver::{AssetTransformer, transformer};
pub use recognize::{AssetMacro, CallSite, recognize_call};
pub use replace::replacement_for;
