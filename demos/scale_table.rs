//! Prints every named scale for a handful of tonics, plus any extra
//! `tonic pattern` pairs given on the command line.
//!
//! Run with: cargo run --example scale_table -- d MmMMMmM

use color_eyre::eyre::{eyre, WrapErr};
use saavy_scales::{find_chromatic_scale, scale, scale_named, select_spelling, NamedScale};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    println!("=== Chromatic ===\n");
    for tonic in ["C", "F", "d", "A"] {
        let notes = find_chromatic_scale(tonic)?;
        println!("{:>3} ({:>5}): {}", tonic, select_spelling(tonic), notes.join(" "));
    }

    println!("\n=== Named scales ===\n");
    for tonic in ["C", "a", "Eb"] {
        for named in NamedScale::ALL {
            let notes = scale_named(tonic, named)?;
            println!("{:>3} {:<6} {}", tonic, named.short_name(), notes.join(" "));
        }
        println!();
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        println!("=== Custom ===\n");
    }
    for pair in args.chunks(2) {
        let [tonic, pattern] = pair else {
            return Err(eyre!("expected `tonic pattern` pairs, got a lone {:?}", pair[0]));
        };
        let notes = scale(tonic, pattern)
            .wrap_err_with(|| format!("building {} {}", tonic, pattern))?;
        println!("{:>3} {}: {}", tonic, pattern, notes.join(" "));
    }

    Ok(())
}
