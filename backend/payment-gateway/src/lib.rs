pub mod cli;
pub mod configs;
pub mod error;
pub mod logger;
pub mod payments;

#[macro_export]
macro_rules! service_name {
    () => {
        env!("CARGO_PKG_NAME")
    };
}
