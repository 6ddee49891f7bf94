//! Data model types

mod column;
mod filter;
mod row;
mod sort;
mod strategy;
mod value;

pub use column::*;
pub use filter::*;
pub use row::*;
pub use sort::*;
pub use strategy::*;
pub use value::Value;
pub(crate) use value::number_to_string;
