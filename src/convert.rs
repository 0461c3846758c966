/// Kilometers in one international mile (exact by definition).
pub const KILOMETERS_PER_MILE: f64 = 1.609344;

pub fn miles_to_kilometers(miles: f64) -> f64 {
    miles * KILOMETERS_PER_MILE
}

pub fn kilometers_to_miles(kilometers: f64) -> f64 {
    kilometers / KILOMETERS_PER_MILE
}
