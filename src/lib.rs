//! cline-test — sample greeting, summation and user-lookup operations (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod env;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod sample;

pub use error::{ErrorKind, SampleError};
pub use sample::{calculate_sum, get_user_info, hello_world, sum_integers};
