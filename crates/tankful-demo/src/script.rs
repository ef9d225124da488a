use std::io::Write;

use tankful::{Fuel, Vehicle};

use crate::{DemoConfig, Result};

/// Runs the demo script against `out` and returns the final fuel level.
///
/// A requested level above capacity is reported by the vehicle itself and
/// does not stop the script.
pub fn run_script<W: Write + ?Sized>(config: &DemoConfig, out: &mut W) -> Result<Fuel> {
    let mut car = Vehicle::new(
        config.brand.as_str(),
        config.model.as_str(),
        config.trim.as_str(),
    );
    log::info!("created {} {} {}", car.brand(), car.model(), car.trim());

    car.fuel_up(out)?;
    car.drive(out)?;
    car.update_fuel_level(config.new_level, out)?;

    writeln!(out, "{}", car.fuel_level())?;
    out.flush()?;
    Ok(car.fuel_level())
}
