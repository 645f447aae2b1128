//! # Densimet CLI Application
//!
//! Terminal front end for the density calculation engine. Prompts for an
//! Archimedes measurement, reports the measured density and compactness
//! ratio, and shows a composition blend from the built-in element catalog.

use std::io::{self, BufRead, Write};

use met_core::calculations::specific_density;
use met_core::composition::resolve_for_part;
use met_core::materials::{builtin_elements, AlloyDb};
use met_core::parts::{CompositionEntry, Part};
use met_core::requests::{
    compactness, measured_density, ArchimedesQuery, CompactnessQuery,
};
use uuid::Uuid;

fn prompt_line(prompt: &str, default: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn main() {
    println!("Densimet CLI - Metallurgical Density Calculator");
    println!("===============================================");
    println!();

    let mass_in_air = prompt_line("Sample mass in air (g) [50.0]: ", "50.0");
    let mass_in_fluid = prompt_line("Sample mass in fluid (g) [44.0]: ", "44.0");
    let fluid_density = prompt_line("Fluid density (g/cm³) [1.0]: ", "1.0");
    let attachment_present = prompt_line("Attachment used? (yes/no) [no]: ", "no");
    let (attachment_mass_in_air, attachment_mass_in_fluid) =
        if attachment_present.eq_ignore_ascii_case("yes") {
            (
                Some(prompt_line("Attachment mass in air (g) [0.0]: ", "0.0")),
                Some(prompt_line("Attachment mass in fluid (g) [0.0]: ", "0.0")),
            )
        } else {
            (None, None)
        };
    let theoretical_density = prompt_line("Theoretical density (g/cm³) [7.87]: ", "7.87");

    println!();

    let query = ArchimedesQuery {
        mass_in_air,
        mass_in_fluid,
        fluid_density,
        attachment_mass_in_air,
        attachment_mass_in_fluid,
        attachment_present,
    };

    match measured_density(&query) {
        Ok(report) => {
            println!("═══════════════════════════════════════");
            println!("  DENSITY MEASUREMENT RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Measured density: {} g/cm³", report.density);

            let compactness_query = CompactnessQuery {
                measured_density: report.density.clone(),
                theoretical_density,
            };
            match compactness(&compactness_query) {
                Ok(ratio) => {
                    println!("Compactness:      {} %", ratio.compactness_ratio);
                    println!();
                    println!("JSON Output (for LLM/API use):");
                    if let Ok(json) = serde_json::to_string_pretty(&report) {
                        println!("{}", json);
                    }
                    if let Ok(json) = serde_json::to_string_pretty(&ratio) {
                        println!("{}", json);
                    }
                }
                Err(e) => print_error(&e),
            }
        }
        Err(e) => print_error(&e),
    }

    println!();
    demo_blend();
}

/// Show a composition blend against the built-in element catalog.
fn demo_blend() {
    let elements = builtin_elements();
    let alloys = AlloyDb::new();

    let part = Part::new_custom(
        "DEMO-1",
        "70/30 Iron-Nickel Blend",
        Uuid::new_v4(),
        vec![
            CompositionEntry::new("Fe", 70.0),
            CompositionEntry::new("Ni", 30.0),
        ],
    );

    println!("═══════════════════════════════════════");
    println!("  BUILT-IN CATALOG DEMO");
    println!("═══════════════════════════════════════");
    println!();
    println!("Part: {}", part.part_name);

    match resolve_for_part(&part, &alloys, &elements).and_then(|r| specific_density(&r)) {
        Ok(density) => println!("Specific density: {:.3} g/cm³", density),
        Err(e) => print_error(&e),
    }
}

fn print_error(e: &met_core::MetError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}
