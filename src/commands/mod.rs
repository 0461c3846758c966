use std::io::Write;

use crate::error::Error;
use crate::report::Conversion;

pub mod to_kilometers;
pub mod to_miles;

/// Write the conversion to stdout, either as a plain-text line or as JSON.
pub fn print_report(conversion: &Conversion, json: bool) -> Result<(), Error> {
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    if json {
        writeln!(stdout, "{}", serde_json::to_string(conversion)?)?;
    } else {
        writeln!(stdout, "{}", conversion)?;
    }

    Ok(())
}
