pub mod convert;

pub use convert::{KILOMETERS_PER_MILE, kilometers_to_miles, miles_to_kilometers};
