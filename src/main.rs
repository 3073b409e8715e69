// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use diatonic::config::ScaleFile;
use diatonic::{DiatonicInterval, DiatonicPrototype, Scale, ScaleLibrary};

fn print_usage() {
    println!("DIATONIC - Interval and scale calculator");
    println!();
    println!("Usage: diatonic [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --add <A> <B>             Add two intervals, e.g. --add p3+ p3+");
    println!("  --resolve <FILE> [NAME]   Build a scale file and spell its scales");
    println!("  --modes <NAME> [FILE]     Spell every mode of a scale");
    println!("  --list [FILE]             List known scale names");
    println!("  --help                    Show this help message");
    println!();
    println!("Set RUST_LOG=debug for diagnostic output.");
}

fn spell(scale: &Scale) -> Result<String> {
    Ok(scale
        .absolute_scale_repr()?
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(" "))
}

fn library_from(file: Option<&String>) -> Result<ScaleLibrary> {
    match file {
        Some(path) => ScaleFile::load(path)?.build(),
        None => Ok(ScaleLibrary::with_builtins(Arc::new(DiatonicPrototype::major()))?),
    }
}

fn lookup<'a>(library: &'a ScaleLibrary, name: &str) -> Result<&'a Scale> {
    library
        .get(name)
        .ok_or_else(|| anyhow!("Unknown scale '{}'. Use --list to see known scales", name))
}

fn add_intervals(a: &str, b: &str) -> Result<()> {
    let prototype = Arc::new(DiatonicPrototype::major());
    let a = DiatonicInterval::parse(a, &prototype)
        .with_context(|| format!("Invalid interval: {}", a))?;
    let b = DiatonicInterval::parse(b, &prototype)
        .with_context(|| format!("Invalid interval: {}", b))?;

    let sum = a.semitones() + b.semitones();
    println!("{} + {} = {} semitones", a, b, sum.size());
    for candidate in a.add(&b) {
        println!("  {:<6} {}", candidate.to_string(), candidate.long_name());
    }
    if let Some(preferred) = a.preferred_sum(&b) {
        println!("Preferred spelling: {} ({})", preferred, preferred.conventional_name());
    }
    Ok(())
}

fn resolve_file(path: &str, name: Option<&String>) -> Result<()> {
    let file = ScaleFile::load(path)?;
    let library = file.build()?;

    let names: Vec<String> = match name {
        Some(name) => vec![name.clone()],
        None => file.scales.iter().map(|d| d.name.clone()).collect(),
    };
    for name in names {
        let scale = lookup(&library, &name)?;
        println!("{}: {}", name, spell(scale)?);
    }
    Ok(())
}

fn print_modes(name: &str, file: Option<&String>) -> Result<()> {
    let library = library_from(file)?;
    let scale = lookup(&library, name)?;
    for mode in 1..=scale.length() as i32 {
        let rotated = scale.get_mode(mode)?;
        println!("Mode {}: {}", mode, spell(&rotated)?);
    }
    Ok(())
}

fn list_scales(file: Option<&String>) -> Result<()> {
    let library = library_from(file)?;
    for name in library.names() {
        println!("{}", name);
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("DIATONIC - Interval and scale calculator");
        println!("Run with --help for usage information");
        return Ok(());
    }

    match args[1].as_str() {
        "--add" => {
            if args.len() < 4 {
                eprintln!("Error: --add requires two intervals");
                std::process::exit(1);
            }
            add_intervals(&args[2], &args[3])?;
        }
        "--resolve" => {
            if args.len() < 3 {
                eprintln!("Error: --resolve requires a scale file");
                std::process::exit(1);
            }
            resolve_file(&args[2], args.get(3))?;
        }
        "--modes" => {
            if args.len() < 3 {
                eprintln!("Error: --modes requires a scale name");
                std::process::exit(1);
            }
            print_modes(&args[2], args.get(3))?;
        }
        "--list" => {
            list_scales(args.get(2))?;
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Unknown option: {}", args[1]);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
