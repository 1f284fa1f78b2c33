//! Minimizes the number of conflicts of a graph coloring using a fixed number of colors.

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]

use clap::{App, load_yaml};
use log::error;

use ga_color::solver::{create_rng, solve};
use ga_color::util::{init_logger, read_params, export_results, report_statistics};


/**
reads an instance, builds a greedy coloring, improves it with the genetic algorithm
and writes the result in `<instance name>.output`.
*/
fn run() -> anyhow::Result<()> {
    // parse arguments
    let yaml = load_yaml!("main_args.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let params = read_params(&main_args)?;
    let mut rng = create_rng(params.config.seed);
    // solve it
    let report = solve(&params.instance, params.nb_colors, &params.config, &mut rng)?;
    println!("fewest number of conflicts: {}", report.nb_conflicts);
    // export results
    let stats = report_statistics(&params, &report);
    export_results(&params, &report.coloring, &stats)?;
    println!("Graph has now been optimized.");
    Ok(())
}

/// entry point: exits with status 1 on failure
pub fn main() {
    init_logger();
    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
