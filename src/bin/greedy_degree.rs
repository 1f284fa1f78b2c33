use std::time::Instant;

use clap::{App, load_yaml};
use dogs::search_algorithm::TimeStoppingCriterion;
use log::{error, info};
use serde_json::json;

use ga_color::color::nb_conflicts;
use ga_color::search::greedy_degree::greedy_degree;
use ga_color::search::two_opt::two_opt_until;
use ga_color::solver::create_rng;
use ga_color::util::{init_logger, read_params, export_results};


/** colors an instance using the greedy by decreasing degree (and optionally a 2-opt descent) */
fn run() -> anyhow::Result<()> {
    // parse arguments
    let yaml = load_yaml!("greedy_degree.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let params = read_params(&main_args)?;
    let mut rng = create_rng(params.config.seed);
    let time_init = Instant::now();
    // solve it
    let mut coloring = greedy_degree(&params.instance, params.nb_colors, &mut rng);
    let greedy_conflicts = nb_conflicts(&params.instance, &coloring);
    info!(
        "greedy found {} conflicts in {:.3} seconds",
        greedy_conflicts, time_init.elapsed().as_secs_f32()
    );
    if params.config.local_search {
        let stopping_criterion = TimeStoppingCriterion::new(params.config.time_budget());
        coloring = two_opt_until(&params.instance, &coloring, &stopping_criterion);
    }
    let final_conflicts = nb_conflicts(&params.instance, &coloring);
    println!("fewest number of conflicts: {}", final_conflicts);
    let stats = json!({
        "inst_name": params.inst_filename,
        "nb_vertices": params.instance.n(),
        "nb_edges": params.instance.m(),
        "nb_colors": params.nb_colors,
        "greedy_conflicts": greedy_conflicts,
        "nb_conflicts": final_conflicts,
        "time_searched": time_init.elapsed().as_secs_f32(),
    });
    // export results
    export_results(&params, &coloring, &stats)?;
    Ok(())
}

pub fn main() {
    init_logger();
    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
