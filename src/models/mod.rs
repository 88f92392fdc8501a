mod fields;
mod session;

pub use fields::*;
pub use session::*;
