pub mod diamonds;
pub use diamonds::*;

pub mod estimator;
pub use estimator::*;

pub mod trips;
pub use trips::*;
