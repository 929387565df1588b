//! Compares every method on one cooling request.
//!
//! # Usage
//!
//! ```text
//! cargo run --example compare
//! cargo run --example compare -- 20 60
//! cargo run --example compare -- 20 60 euler rk4
//! ```
//!
//! The first two arguments are the segment count and time range; any further
//! arguments name the methods to compute (all four by default). The request is
//! submitted to a dispatcher, and the table is printed once the completion
//! arrives.

use std::{error::Error, process};

use cooling_core::{MethodKind, Parameters};
use cooling_dispatch::{Completion, Config, Dispatcher};

fn main() -> Result<(), Box<dyn Error>> {
    let params = parse_args().unwrap_or_else(|message| {
        eprintln!("{message}");
        eprintln!("Usage: compare [segments [time_range [method...]]]");
        process::exit(1);
    });

    let dispatcher = Dispatcher::new(&Config::default())?;
    dispatcher.subscribe(|completion: &Completion| {
        println!(
            "submission {} finished with {} samples",
            completion.id,
            completion.solution.len()
        );
    });

    let completion = dispatcher.submit(params)?.wait_blocking()?;
    let solution = &completion.solution;
    let methods: Vec<MethodKind> = solution.methods().collect();

    print!("{:>10}", "t");
    for method in &methods {
        print!("{:>16}", method.name());
    }
    println!();

    for sample in solution.samples() {
        print!("{:>10.3}", sample.time);
        for &method in &methods {
            match sample.value(method) {
                Some(value) => print!("{value:>16.6}"),
                None => print!("{:>16}", "-"),
            }
        }
        println!();
    }

    println!();
    for (method, series) in solution.approximation_data() {
        if let Some(max_error) = series.max_error() {
            println!(
                "{:<14} standard deviation {:.3e}, max error {:.3e}",
                method.name(),
                series.standard_deviation(),
                max_error
            );
        }
    }
    if let Some(best) = solution.most_accurate() {
        println!("most accurate: {best}");
    }

    Ok(())
}

fn parse_args() -> Result<Parameters, String> {
    let mut args = std::env::args().skip(1);
    let mut params = Parameters::default();

    if let Some(segments) = args.next() {
        params.segment_count = segments
            .parse()
            .map_err(|_| format!("Invalid segment count: {segments}"))?;
    }
    if let Some(range) = args.next() {
        params.time_range = range
            .parse()
            .map_err(|_| format!("Invalid time range: {range}"))?;
    }

    let methods = args
        .map(|name| name.parse::<MethodKind>().map_err(|err| err.to_string()))
        .collect::<Result<Vec<_>, _>>()?;
    if !methods.is_empty() {
        params = params.with_methods(methods);
    }

    Ok(params)
}
