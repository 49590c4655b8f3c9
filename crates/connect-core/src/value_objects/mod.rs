//! Value objects - immutable types that represent domain concepts

mod mention;
mod snowflake;
mod year;

pub use mention::extract_mentions;
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
pub use year::{Year, YearParseError};
