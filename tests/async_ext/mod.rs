
#[cfg(feature = "async-retry")]
pub mod retry_tests;

#[cfg(feature = "async-tokio")]
pub mod tokio_tests;

#[cfg(feature = "tracing")]
pub mod tracing_tests;
