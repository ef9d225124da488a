//! Tankful: a vehicle whose fuel tank guards its own capacity.
//!
//! A [`Vehicle`] starts empty and can be filled up, driven, or set to an
//! explicit fuel level. Every operation that has something to say writes a
//! single [`Notice`] line to the sink it is given, so callers decide whether
//! the text lands on stdout, in a buffer, or nowhere.

mod notice;
mod vehicle;

pub use notice::Notice;
pub use vehicle::{FuelUpdate, Vehicle};

/// Quantity of fuel. Fractional and negative levels are both representable.
pub type Fuel = f64;

/// Capacity of every vehicle's gas tank.
pub const GAS_TANK_SIZE: Fuel = 14.0;
