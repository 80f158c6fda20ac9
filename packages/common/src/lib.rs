pub mod diagnostics;
pub mod error;
pub mod result;
pub mod shared;

pub use diagnostics::*;
pub use error::*;
pub use result::*;
pub use shared::*;
