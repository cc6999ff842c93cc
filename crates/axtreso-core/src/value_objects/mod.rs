//! Value objects - immutable types that represent domain concepts

mod city;
mod date_range;
mod role;

pub use city::City;
pub use date_range::DateRange;
pub use role::Role;
