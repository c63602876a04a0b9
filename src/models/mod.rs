pub mod error;
pub mod score;
pub mod tier;

pub use error::*;
pub use score::*;
pub use tier::*;
