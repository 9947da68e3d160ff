use clap::Parser;
use election_scrape::console::{print_input_error, print_nok, print_ok, print_termination};
use election_scrape::validate::validate_inputs;
use election_scrape::{Scraper, WebSource, output};

mod args;
use args::Args;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let argv0 = std::env::args()
        .next()
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
    let args = Args::parse();

    println!("\nVALIDATING INPUTS");
    let inputs = match validate_inputs(&args.inputs) {
        Ok(inputs) => inputs,
        Err(e) => {
            print_input_error(&e.to_string(), &argv0);
            print_nok();
            print_termination(&argv0);
            std::process::exit(1);
        }
    };
    print_ok();

    println!("DOWNLOADING DATA FROM SPECIFIED URL: {}", inputs.source_url);
    let scraper = Scraper::new(WebSource::new()?);
    let start_time = std::time::Instant::now();
    let records = match scraper.collect(&inputs.source_url).await {
        Ok(records) => records,
        Err(e) if e.is_discovery() => {
            println!(
                "Downloading data from '{}' did not succeed. {}",
                inputs.source_url, e
            );
            print_nok();
            print_termination(&argv0);
            std::process::exit(1);
        }
        // Transport and page-structure failures end the run with the raw error
        Err(e) => return Err(e.into()),
    };
    ::log::info!(
        "Collected {} municipalities in {:.2} seconds",
        records.len(),
        start_time.elapsed().as_secs_f64()
    );
    print_ok();

    println!("SAVING DATA TO FILE: {}", inputs.output_file);
    output::save_to_file(&inputs.output_file, &records)?;
    print_ok();

    print_termination(&argv0);
    Ok(())
}
