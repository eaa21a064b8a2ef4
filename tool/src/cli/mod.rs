pub mod convert;
pub mod eval;
pub mod report;
pub mod vector;
