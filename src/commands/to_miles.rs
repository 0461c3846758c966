use crate::report::Conversion;

#[derive(clap::Parser)]
pub struct Opts {
    /// Distance in kilometers. Negative values are valid distances here.
    #[clap(allow_hyphen_values = true)]
    value: f64,
    /// Print the result as a JSON object instead of plain text.
    #[clap(long)]
    json: bool,
}

pub fn execute(opts: Opts) -> Result<(), crate::error::Error> {
    let conversion = Conversion::from_kilometers(opts.value);
    super::print_report(&conversion, opts.json)
}
