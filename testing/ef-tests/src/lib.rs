mod macros;
pub mod utils;
