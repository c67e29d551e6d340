//! Utilities shared across the payment gateway crates.

pub mod consts;
pub mod errors;
pub mod fp_utils;
pub mod pii;
pub mod request;
pub mod types;

pub use errors::CustomResult;
