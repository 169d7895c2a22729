use clap::{Parser, Subcommand};
use serde_json::Value;
use skycast_core::convert::{
    format_time, kelvin_map_to, kelvin_to, TemperatureUnit, TimeFormat, TimeValue,
};
use skycast_core::errors::SkycastError;
use skycast_core::logging::init_tracing;
use skycast_core::serde_utils::{from_json_str, to_pretty_json};
use skycast_core::SkycastConfig;

mod output;

use output::{
    print_readings, print_temperature, print_time, ReadingsReport, TemperatureReport, TimeReport,
};

#[derive(Parser)]
#[command(name = "skycast")]
#[command(about = "Skycast - time and temperature conversions for weather data", long_about = None)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, env = "SKYCAST_LOG")]
    log: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a UNIX epoch or an ISO8601 string (YYYY-MM-DD HH:MM:SS+00)
    Time {
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Output format: unix, iso or date
        #[arg(short, long)]
        format: Option<TimeFormat>,
    },
    /// Convert a Kelvin temperature
    Temp {
        #[arg(allow_hyphen_values = true)]
        kelvin: f64,
        /// Target unit: kelvin, celsius or fahrenheit
        #[arg(short, long)]
        unit: Option<TemperatureUnit>,
    },
    /// Convert a JSON object of named Kelvin readings, e.g. '{"temp": 293.4}'
    Temps {
        readings: String,
        #[arg(short, long)]
        unit: Option<TemperatureUnit>,
    },
    /// Show version information
    Version,
}

/// Numbers given on the command line are epochs (or rejected floats),
/// anything else is ISO8601 text.
fn parse_time_argument(raw: &str) -> Result<TimeValue, SkycastError> {
    let value = serde_json::from_str::<Value>(raw.trim())
        .ok()
        .filter(Value::is_number)
        .unwrap_or_else(|| Value::String(raw.to_string()));
    Ok(TimeValue::from_json(&value)?)
}

fn main() -> Result<(), SkycastError> {
    let cli = Cli::parse();
    let config = SkycastConfig::from_env()?;
    init_tracing(&config, cli.log.as_deref())?;
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Time { value, format } => {
            let format = format.unwrap_or(config.time_format);
            let formatted = format_time(parse_time_argument(&value)?, format)?;
            let report = TimeReport {
                input: &value,
                format,
                value: formatted,
            };
            if cli.json {
                println!("{}", to_pretty_json(&report)?);
            } else {
                print_time(&report);
            }
        }
        Commands::Temp { kelvin, unit } => {
            let unit = unit.unwrap_or(config.temperature_unit);
            let report = TemperatureReport {
                kelvin,
                unit,
                value: kelvin_to(kelvin, unit)?,
            };
            if cli.json {
                println!("{}", to_pretty_json(&report)?);
            } else {
                print_temperature(&report);
            }
        }
        Commands::Temps { readings, unit } => {
            let unit = unit.unwrap_or(config.temperature_unit);
            let readings = from_json_str(&readings)?;
            let report = ReadingsReport {
                unit,
                readings: kelvin_map_to(&readings, unit)?,
            };
            if cli.json {
                println!("{}", to_pretty_json(&report)?);
            } else {
                print_readings(&report);
            }
        }
        Commands::Version => {
            println!("Skycast v{}", env!("CARGO_PKG_VERSION"));
            println!("Time and temperature conversions for weather data");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn numeric_arguments_are_epochs() {
        assert_eq!(parse_time_argument("60").unwrap(), TimeValue::Epoch(60));
        assert_eq!(
            parse_time_argument("2021-01-01 00:00:00+00").unwrap(),
            TimeValue::Iso8601("2021-01-01 00:00:00+00".into())
        );
    }

    #[test]
    fn float_argument_is_type_error() {
        let err = parse_time_argument("3.14").unwrap_err();
        let SkycastError::Convert(inner) = err else {
            panic!("expected a conversion error");
        };
        assert!(inner.is_type_error());
    }
}
