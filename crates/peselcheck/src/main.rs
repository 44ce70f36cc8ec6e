use clap::Parser;
use colored::*;
use logging::LogLevel;
use std::process;
use validators::validate_pesel;

#[derive(Debug, Parser)]
#[command(
    name = "peselcheck",
    about = "PESEL number validator",
    version,
    long_about = "Validates a Polish national identification number (PESEL) and decodes the\nbirth date and sex it encodes.\n\nExamples:\n  peselcheck 90051200009             # Validate a PESEL\n  peselcheck --json 90051200009      # Print the result as JSON\n  peselcheck --verbose 90051200009   # Show the decode trace"
)]
struct Peselcheck {
    /// PESEL number to validate (11 digits)
    pesel: String,

    /// Print the validation result as JSON
    #[arg(long)]
    json: bool,

    /// Run in verbose mode with detailed output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Peselcheck::parse();

    if cli.verbose {
        logging::set_log_level(LogLevel::Debug);
    }

    logging::debug(&format!(
        "Validating candidate of {} character(s)",
        cli.pesel.chars().count()
    ));

    let result = validate_pesel(&cli.pesel);

    logging::debug(&format!(
        "Validation finished with {} finding(s)",
        result.errors.len()
    ));

    if cli.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                logging::error(&format!("Failed to serialize result: {}", e));
                process::exit(2);
            }
        }
    } else if result.is_valid {
        println!("✅ {}: {}", "Valid".green(), cli.pesel);
        if let Some(birth_date) = result.birth_date {
            println!("   Birth date: {}", birth_date);
        }
        if let Some(sex) = result.sex {
            println!("   Sex: {}", sex);
        }
    } else {
        println!("❌ {}: {}", "Invalid".red(), cli.pesel);
        for (i, error) in result.errors.iter().enumerate() {
            println!("   {}. {}", i + 1, error);
        }
    }

    if !result.is_valid {
        process::exit(1);
    }
}
