pub mod adyen;

pub use self::adyen::Adyen;

pub mod macros;
