//! User-facing progress markers printed by the binary.

use std::path::Path;

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

pub fn ok_marker() -> String {
    format!("{GREEN}[OK]{RESET}")
}

pub fn nok_marker() -> String {
    format!("{RED}[NOK]{RESET}")
}

pub fn print_ok() {
    println!("{}", ok_marker());
}

pub fn print_nok() {
    println!("{}", nok_marker());
}

/// Name of the running program without its directory
pub fn program_name(argv0: &str) -> String {
    Path::new(argv0)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| argv0.to_string())
}

pub fn usage(argv0: &str) -> String {
    format!(
        "To run '{}' write: {} <election_location_url> <result_output_csv_file>",
        program_name(argv0),
        argv0
    )
}

/// Reason for rejecting the inputs followed by a usage reminder
pub fn print_input_error(reason: &str, argv0: &str) {
    println!("{reason}");
    println!("{}", usage(argv0));
}

pub fn print_termination(argv0: &str) {
    println!("\nTERMINATING {}\n", program_name(argv0));
}
