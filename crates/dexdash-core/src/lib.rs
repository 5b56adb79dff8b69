pub mod document;
pub mod error;
pub mod types;

pub use document::*;
pub use error::{DexDashError, Result};
pub use types::*;
