use pretty_assertions::assert_eq;
use tankful::Vehicle;

#[test]
fn ford_taurus_scenario() {
    let mut out = Vec::new();

    let mut car = Vehicle::new("Ford", "Taurus", "SE");
    car.fuel_up(&mut out).unwrap();
    assert_eq!(car.fuel_level(), 14.0);

    car.drive(&mut out).unwrap();
    car.update_fuel_level(12.0, &mut out).unwrap();
    assert_eq!(car.fuel_level(), 12.0);

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Gas tank is now full.\nThe Taurus is now driving.\n"
    );
}
