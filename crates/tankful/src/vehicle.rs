use std::io::{self, Write};

use anodized::spec;

use crate::{Fuel, GAS_TANK_SIZE, Notice};

/// Outcome of [`Vehicle::update_fuel_level`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuelUpdate {
    /// The new level was within capacity and is now in effect.
    Accepted,
    /// The new level was above capacity, or not comparable to it (NaN);
    /// the tank was left as it was.
    ExceededCapacity,
}

/// A car with a fixed-size gas tank.
///
/// `fuel_level` never exceeds `gas_tank_size`. There is no lower bound:
/// a negative level is accepted like any other value within capacity.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    brand: String,
    model: String,
    trim: String,
    gas_tank_size: Fuel,
    fuel_level: Fuel,
}

impl Vehicle {
    /// Creates a vehicle with an empty tank of [`GAS_TANK_SIZE`].
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        trim: impl Into<String>,
    ) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            trim: trim.into(),
            gas_tank_size: GAS_TANK_SIZE,
            fuel_level: 0.0,
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Trim level, e.g. `"SE"`.
    pub fn trim(&self) -> &str {
        &self.trim
    }

    pub fn gas_tank_size(&self) -> Fuel {
        self.gas_tank_size
    }

    pub fn fuel_level(&self) -> Fuel {
        self.fuel_level
    }

    /// Fills the tank to capacity and announces it on `out`.
    ///
    /// The tank is full even if the announcement fails to write.
    #[spec(
        maintains: self.fuel_level <= self.gas_tank_size,
    )]
    pub fn fuel_up<W: Write + ?Sized>(&mut self, out: &mut W) -> io::Result<()> {
        self.fuel_level = self.gas_tank_size;
        log::debug!("{} {}: fuel level set to {}", self.brand, self.model, self.fuel_level);
        writeln!(out, "{}", Notice::TankFull)
    }

    /// Announces on `out` that the vehicle is driving. Leaves all state alone.
    pub fn drive<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        let notice = Notice::Driving {
            model: self.model.clone(),
        };
        writeln!(out, "{notice}")
    }

    /// Sets the fuel level to `new_level` if it fits in the tank.
    ///
    /// A level above capacity is not an error: the tank is left unchanged,
    /// `Exceeded capacity` is written to `out`, and
    /// [`FuelUpdate::ExceededCapacity`] is returned. The only error is a
    /// failed write.
    #[spec(
        maintains: self.fuel_level <= self.gas_tank_size,
    )]
    pub fn update_fuel_level<W: Write + ?Sized>(
        &mut self,
        new_level: Fuel,
        out: &mut W,
    ) -> io::Result<FuelUpdate> {
        if new_level <= self.gas_tank_size {
            self.fuel_level = new_level;
            log::debug!("{} {}: fuel level set to {}", self.brand, self.model, new_level);
            Ok(FuelUpdate::Accepted)
        } else {
            log::warn!(
                "{} {}: rejected fuel level {} above capacity {}",
                self.brand,
                self.model,
                new_level,
                self.gas_tank_size
            );
            writeln!(out, "{}", Notice::ExceededCapacity)?;
            Ok(FuelUpdate::ExceededCapacity)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anodized::spec;

    impl Vehicle {
        #[spec(
            maintains: self.fuel_level <= self.gas_tank_size,
        )]
        fn overfill(&mut self) {
            self.fuel_level = self.gas_tank_size + 1.0;
        }
    }

    #[test]
    fn test_new_stores_descriptive_fields() {
        let car = Vehicle::new("Ford", "Taurus", "SE");
        assert_eq!(car.brand(), "Ford");
        assert_eq!(car.model(), "Taurus");
        assert_eq!(car.trim(), "SE");
    }

    #[test]
    fn test_rejection_writes_nothing_else() {
        let mut car = Vehicle::new("Ford", "Taurus", "SE");
        let mut out = Vec::new();
        car.update_fuel_level(100.0, &mut out).unwrap();
        assert_eq!(out, b"Exceeded capacity\n");
    }

    #[test]
    fn test_accepted_update_is_silent() {
        let mut car = Vehicle::new("Ford", "Taurus", "SE");
        let mut out = Vec::new();
        car.update_fuel_level(3.0, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    #[should_panic(expected = "Post-invariant failed")]
    fn test_overfilling_violates_invariant() {
        let mut car = Vehicle::new("Ford", "Taurus", "SE");
        car.overfill();
    }

    #[test]
    #[should_panic(expected = "Pre-invariant failed")]
    fn test_fuel_up_rejects_overfilled_tank() {
        let mut car = Vehicle::new("Ford", "Taurus", "SE");
        car.fuel_level = 20.0; // above capacity before the call
        car.fuel_up(&mut std::io::sink()).unwrap();
    }
}
