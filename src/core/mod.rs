pub mod config;
pub mod error;
pub mod types;

pub use config::{ArsenalConfig, UnknownFlagPolicy};
pub use error::{ArsenalError, Result};
pub use types::{Hexes, RangeBand, RangeTable};
