pub mod session;
pub mod statement;

pub use session::*;
pub use statement::*;
