pub mod category;
pub use category::*;

pub mod evaluation;
pub use evaluation::*;

pub mod evaluator;
pub use evaluator::*;

pub mod tally;
pub use tally::*;
