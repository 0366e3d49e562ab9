pub mod common;
pub mod scan;
