//! # Beam CLI Application
//!
//! Terminal frontend for the simply-supported beam calculator. Prompts for
//! the five inputs, refuses to forward entries that are not positive
//! numbers, and prints the closed-form results plus a JSON echo for
//! LLM/API use.
//!
//! Units are whatever the user types, as long as they are consistent;
//! the defaults are SI (m, N, N/m, Pa, m⁴).

use std::io::{self, BufRead, Write};

use beam_core::{calculate, BeamInput, LoadType};

/// Parse user text as a strictly positive number.
///
/// Blank, non-numeric, and non-positive entries all return None; the
/// caller decides whether that means "use the default" or "ask again".
fn parse_positive(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let value: f64 = trimmed.parse().ok()?;
    (value > 0.0 && value.is_finite()).then_some(value)
}

fn prompt_positive(prompt: &str, default: f64) -> f64 {
    loop {
        print!("{}", prompt);
        if io::stdout().flush().is_err() {
            return default;
        }

        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input).is_err() {
            return default;
        }

        if input.trim().is_empty() {
            return default;
        }
        match parse_positive(&input) {
            Some(value) => return value,
            None => println!("  Please enter a number greater than 0."),
        }
    }
}

fn prompt_load_type() -> LoadType {
    println!("Load cases:");
    for (i, load_type) in LoadType::ALL.iter().enumerate() {
        println!("  {} - {}", i, load_type.description());
    }

    loop {
        print!("Select load case [0]: ");
        if io::stdout().flush().is_err() {
            return LoadType::PointLoadCenter;
        }

        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input).is_err() {
            return LoadType::PointLoadCenter;
        }

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return LoadType::PointLoadCenter;
        }

        // Selection goes through the same discriminant boundary foreign
        // callers use, so out-of-range numbers get the structured rejection
        match trimmed.parse::<u32>() {
            Ok(discriminant) => match LoadType::try_from(discriminant) {
                Ok(load_type) => return load_type,
                Err(e) => println!("  {}", e),
            },
            Err(_) => println!("  Please enter 0 or 1."),
        }
    }
}

fn main() {
    println!("Beam CLI - Simply Supported Beam Calculator");
    println!("===========================================");
    println!();
    println!("Closed-form check: center point load or full-span uniform load.");
    println!("Use one consistent unit system; blank input keeps the default.");
    println!();

    let load_type = prompt_load_type();
    let length = prompt_positive("Beam length L [10]: ", 10.0);
    let load = prompt_positive(
        if load_type.is_distributed() {
            "Load magnitude w [1000]: "
        } else {
            "Load magnitude P [1000]: "
        },
        1000.0,
    );
    let youngs_modulus = prompt_positive("Young's modulus E [200e9]: ", 200e9);
    let moment_of_inertia = prompt_positive("Moment of inertia I [1e-6]: ", 1e-6);

    let input = BeamInput {
        length,
        load_type,
        load,
        youngs_modulus,
        moment_of_inertia,
    };

    match calculate(&input) {
        Ok(result) => {
            println!();
            println!("═══════════════════════════════════════");
            println!("  BEAM CALCULATION RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  Case:   {}", input.load_type.description());
            println!("  L = {}", input.length);
            println!("  {} = {}", input.load_type.code(), input.load);
            println!("  E = {:e}", input.youngs_modulus);
            println!("  I = {:e}", input.moment_of_inertia);
            println!();
            println!("Results (at mid-span):");
            println!("  M_max = {:.6}", result.max_moment);
            println!("  δ_max = {:.6e}", result.max_deflection);

            println!();
            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}
