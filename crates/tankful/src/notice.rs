use std::fmt;

/// A line of status text emitted by a [`Vehicle`](crate::Vehicle).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The tank was filled to capacity.
    TankFull,
    /// The vehicle set off.
    Driving { model: String },
    /// A requested fuel level was above capacity and got rejected.
    ExceededCapacity,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::TankFull => f.write_str("Gas tank is now full."),
            Notice::Driving { model } => write!(f, "The {model} is now driving."),
            Notice::ExceededCapacity => f.write_str("Exceeded capacity"),
        }
    }
}
