pub mod street;
pub use street::*;

pub mod table;
pub use table::*;
