use crate::report::Conversion;

#[derive(clap::Parser)]
pub struct Opts {
    /// Distance in miles. Negative values are valid distances here.
    #[clap(allow_hyphen_values = true)]
    value: f64,
    /// Print the result as a JSON object instead of plain text.
    #[clap(long)]
    json: bool,
}

pub fn execute(opts: Opts) -> Result<(), crate::error::Error> {
    let conversion = Conversion::from_miles(opts.value);
    super::print_report(&conversion, opts.json)
}
