use std::collections::BTreeMap;

use colored::*;
use serde::Serialize;
use skycast_core::convert::{FormattedTime, TemperatureUnit, TimeFormat};

#[derive(Debug, Serialize)]
pub struct TimeReport<'a> {
    pub input: &'a str,
    pub format: TimeFormat,
    pub value: FormattedTime,
}

#[derive(Debug, Serialize)]
pub struct TemperatureReport {
    pub kelvin: f64,
    pub unit: TemperatureUnit,
    pub value: f64,
}

#[derive(Debug, Serialize)]
pub struct ReadingsReport {
    pub unit: TemperatureUnit,
    pub readings: BTreeMap<String, f64>,
}

pub fn print_time(report: &TimeReport<'_>) {
    println!(
        "{} {}",
        "✔ Time:".green().bold(),
        report.value.to_string().bold()
    );
    println!("  Input: {}", report.input);
    println!("  Format: {:?}", report.format);
}

pub fn print_temperature(report: &TemperatureReport) {
    println!(
        "{} {} {}",
        "✔ Temperature:".green().bold(),
        report.value.to_string().bold(),
        report.unit.symbol()
    );
    println!("  Kelvin: {}", report.kelvin);
}

pub fn print_readings(report: &ReadingsReport) {
    println!(
        "{} {}",
        "✔ Readings converted to".green().bold(),
        report.unit.to_string().bold()
    );
    for (key, value) in &report.readings {
        println!("  {key}: {value} {}", report.unit.symbol());
    }
}
