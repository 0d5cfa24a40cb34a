pub mod extraction;
pub mod iteration;
