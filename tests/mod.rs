pub mod macros;
pub mod outcome;

#[cfg(feature = "serde")]
pub mod serde_rep;

#[cfg(feature = "async")]
pub mod async_ext;
