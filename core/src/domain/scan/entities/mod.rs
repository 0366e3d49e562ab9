pub mod product;
pub mod verdict;

pub use product::*;
pub use verdict::*;
