pub mod sequence;
pub mod service;
