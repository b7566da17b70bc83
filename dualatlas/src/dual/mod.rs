pub mod functions;
pub mod number;
pub mod promote;
pub mod traits;

pub use number::Dual;
pub use promote::{promote, Promote};
