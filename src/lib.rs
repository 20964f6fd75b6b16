pub mod error;
pub mod export;
pub mod scorer;
pub mod store;
pub mod table;

pub use error::{BcResult, BuildcheckError};
