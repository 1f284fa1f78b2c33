use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use log::info;
use serde_json::{json, Value};

use crate::color::{checker, CheckerResult, Color, Instance};
use crate::config::SolverConfig;
use crate::dimacs::read_dimacs;
use crate::plain::{output_filename, read_plain, write_output};
use crate::solver::Report;

/// parameters of an executable, read from the command line
#[derive(Debug)]
pub struct Params {
    /// instance file
    pub inst_filename: String,
    /// instance read
    pub instance: Instance,
    /// number of colors available
    pub nb_colors: usize,
    /// solver parameters
    pub config: SolverConfig,
    /// file receiving the coloring
    pub sol_file: PathBuf,
    /// optional file receiving the statistics (json)
    pub perf_file: Option<String>,
}

/// initializes the logger (level given by RUST_LOG, info by default)
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

/// asks the instance filename on the standard input
fn prompt_filename() -> Result<String> {
    println!("Enter filename");
    io::stdout().flush().context("unable to flush stdout")?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).context("unable to read the filename")?;
    let filename = line.trim().to_string();
    if filename.is_empty() {
        bail!("no instance filename given");
    }
    Ok(filename)
}

/// parses an optional command-line value
fn parse_value<T:std::str::FromStr>(main_args:&ArgMatches, name:&str) -> Result<Option<T>>
where T::Err: std::error::Error + Send + Sync + 'static {
    match main_args.value_of(name) {
        None => Ok(None),
        Some(e) => Ok(Some(
            e.parse::<T>().with_context(|| format!("unable to parse --{} '{}'", name, e))?
        )),
    }
}

/** reads command line input: instance, number of colors, solver configuration and output files.
Command-line values override the values of the configuration file.
*/
pub fn read_params(main_args:&ArgMatches) -> Result<Params> {
    let inst_filename = match main_args.value_of("instance") {
        Some(e) => e.to_string(),
        None => prompt_filename()?,
    };
    let instance_type = main_args.value_of("type").unwrap_or("plain");
    // read the configuration
    let mut config = match main_args.value_of("config") {
        None => SolverConfig::default(),
        Some(e) => {
            info!("reading configuration: {}", e);
            SolverConfig::from_json_file(e)?
        }
    };
    if let Some(t) = parse_value::<f32>(main_args, "time")? { config.time_limit = t; }
    if let Some(p) = parse_value::<usize>(main_args, "population")? { config.population_size = Some(p); }
    if let Some(s) = parse_value::<usize>(main_args, "stagnation")? { config.stagnation_limit = s; }
    if let Some(g) = parse_value::<usize>(main_args, "generations")? { config.max_generations = Some(g); }
    if let Some(s) = parse_value::<u64>(main_args, "seed")? { config.seed = Some(s); }
    if main_args.is_present("local-search") { config.local_search = true; }
    config.validate()?;
    // read instance file
    info!("reading instance: {}...", inst_filename);
    let colors_arg = parse_value::<usize>(main_args, "colors")?;
    let (file_colors, instance) = match instance_type {
        "plain" => {
            let (k, inst) = read_plain(&inst_filename)
                .with_context(|| format!("cannot open {}", inst_filename))?;
            (Some(k), inst)
        },
        "dimacs" => {
            let inst = read_dimacs(&inst_filename)
                .with_context(|| format!("cannot open {}", inst_filename))?;
            (None, inst)
        },
        _ => bail!("instance type unknown {} (valid: 'plain', 'dimacs')", instance_type),
    };
    let nb_colors = match colors_arg.or(file_colors) {
        Some(k) if k > 0 => k,
        Some(_) => bail!("the number of colors must be positive"),
        None => bail!("the number of colors is required for DIMACS instances (--colors)"),
    };
    instance.display_statistics();
    info!("\t{} \t colors", nb_colors);
    // read value of the solution filename
    let sol_file = match main_args.value_of("output") {
        None => output_filename(&inst_filename),
        Some(e) => PathBuf::from(e),
    };
    info!("printing solutions in: {}", sol_file.display());
    let perf_file = main_args.value_of("perf").map(|e| {
        info!("printing perfs in: {}", e);
        e.to_string()
    });
    Ok(Params { inst_filename, instance, nb_colors, config, sol_file, perf_file })
}

/// statistics of a pipeline run (exported in the perf file)
pub fn report_statistics(params:&Params, report:&Report) -> Value {
    json!({
        "inst_name": params.inst_filename,
        "nb_vertices": params.instance.n(),
        "nb_edges": params.instance.m(),
        "nb_colors": params.nb_colors,
        "config": params.config,
        "greedy_conflicts": report.greedy_conflicts,
        "genetic_conflicts": report.genetic_conflicts,
        "nb_conflicts": report.nb_conflicts,
        "nb_generations": report.genetic.nb_generations,
        "termination": report.genetic.termination,
        "time_searched": report.genetic.elapsed,
        "generation_best": report.genetic.history,
    })
}

/// checks and exports the coloring and the statistics to files
pub fn export_results(
    params:&Params,
    coloring:&[Color],
    stats:&Value,
) -> Result<()> {
    // check the coloring before writing it
    let nb_conflicts = match checker(&params.instance, coloring, params.nb_colors) {
        CheckerResult::Ok(c) => c,
        other => bail!("invalid solution (reason: {:?})", other),
    };
    write_output(&params.sol_file, coloring, nb_conflicts)?;
    // export statistics
    if let Some(filename) = &params.perf_file {
        let content = serde_json::to_string_pretty(stats)?;
        std::fs::write(filename, content)
            .with_context(|| format!("couldn't write {}", filename))?;
    }
    Ok(())
}
