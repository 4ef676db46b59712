//! Command-line wrapper around the conversion core

use std::process::ExitCode;

use uuc::convert::{convert_request, units_for};
use uuc::models::{Category, ConversionRequest};
use uuc::tools::units;

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  convert <category> <from> <to> <value>   convert a value");
    eprintln!("  convert <category>                       list units of a category");
    eprintln!();
    eprintln!("Categories:");
    for category in Category::all() {
        let symbols: Vec<&str> = units_for(*category).iter().map(|u| u.symbol()).collect();
        eprintln!("  {:<12} {}", category.as_str(), symbols.join(", "));
    }
    eprintln!();
    eprintln!("Example:");
    eprintln!("  convert temperature celsius fahrenheit 100");
}

fn run(args: &[String]) -> Result<(), String> {
    match args {
        [category] => {
            let listing = units::list_units(category).map_err(|e| e.to_string())?;
            println!("{} units:", listing.category);
            for unit in &listing.units {
                println!("  {:<12} {}", unit.name, unit.symbol);
            }
            Ok(())
        }
        [category, from, to, value] => {
            let request =
                ConversionRequest::parse(category, from, to, value).map_err(|e| e.to_string())?;
            let result = convert_request(&request).map_err(|e| e.to_string())?;
            println!(
                "{} {} = {} {}",
                request.value, result.from, result.formatted_value, result.to
            );
            Ok(())
        }
        _ => Err("expected 1 or 4 arguments".to_string()),
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        None => {
            print_usage();
            return ExitCode::FAILURE;
        }
        Some("--help") | Some("-h") => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        _ => {}
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage();
            ExitCode::FAILURE
        }
    }
}
