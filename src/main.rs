//! Footprint Calc - CO2 footprint estimation for transportation
//!
//! A CLI tool that estimates CO2 emissions, compares them against a coal
//! baseline and a green energy mix, and discusses the results with Gemini.

use clap::Parser;
use footprint_calc::cli::Cli;
use footprint_calc::commands;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
