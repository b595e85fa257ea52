pub mod analysis;
pub mod error;
pub mod models;
pub mod provider;
pub mod utils;

pub use error::ScreenerError;
