mod health_check;
mod root;

pub use health_check::*;
pub use root::*;
