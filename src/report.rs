use std::fmt;

use conversions::convert;
use serde::Serialize;

/// One distance expressed in both units.
#[derive(Debug, PartialEq, Serialize)]
pub struct Conversion {
    pub miles: f64,
    pub kilometers: f64,
}

impl Conversion {
    pub fn from_miles(miles: f64) -> Self {
        let kilometers = convert::miles_to_kilometers(miles);
        tracing::debug!(miles, kilometers, "converted miles to kilometers");
        Self { miles, kilometers }
    }

    pub fn from_kilometers(kilometers: f64) -> Self {
        let miles = convert::kilometers_to_miles(kilometers);
        tracing::debug!(kilometers, miles, "converted kilometers to miles");
        Self { miles, kilometers }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mi = {} km", self.miles, self.kilometers)
    }
}
