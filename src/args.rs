use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "election-scrape")]
#[command(
    about = "Downloads municipal election results and saves them as a semicolon-separated CSV file"
)]
#[command(version)]
pub struct Args {
    /// <election_location_url> <result_output_csv_file>
    ///
    /// Index page listing the municipalities, then a bare output file name ending in .csv
    #[arg(
        value_name = "INPUTS",
        num_args = 0..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub inputs: Vec<String>,
}
