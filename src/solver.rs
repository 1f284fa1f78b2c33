use dogs::search_algorithm::TimeStoppingCriterion;
use log::{info, warn};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use crate::color::{Coloring, Instance, nb_conflicts};
use crate::config::SolverConfig;
use crate::error::{ColorError, Result};
use crate::search::genetic::{genetic, GeneticResult};
use crate::search::greedy_degree::greedy_degree;
use crate::search::two_opt::two_opt_until;

/// creates the random number generator of a run (seeded from the OS if no seed is given)
pub fn create_rng(seed:Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

/// outcome of the whole pipeline
#[derive(Debug, Clone)]
pub struct Report {
    /// best coloring found
    pub coloring: Coloring,
    /// its number of conflicts (counted twice per edge)
    pub nb_conflicts: usize,
    /// number of conflicts of the greedy seed
    pub greedy_conflicts: usize,
    /// number of conflicts after the genetic algorithm
    pub genetic_conflicts: usize,
    /// statistics of the genetic algorithm
    pub genetic: GeneticResult,
}

/**
runs the pipeline: greedy_degree builds a seed, the genetic algorithm improves it,
and optionally a 2-opt descent polishes the result.

# Errors
 - if nb_colors is 0
 - if the configuration is invalid
*/
pub fn solve<R:Rng + ?Sized>(inst:&Instance, nb_colors:usize, config:&SolverConfig, rng:&mut R) -> Result<Report> {
    if nb_colors == 0 {
        return Err(ColorError::InvalidConfig("the number of colors must be positive".to_string()));
    }
    config.validate()?;
    if nb_colors == 1 && inst.m() > 0 {
        warn!("a single color is available: every edge is a conflict");
    }
    let seed = greedy_degree(inst, nb_colors, rng);
    let greedy_conflicts = nb_conflicts(inst, &seed);
    info!("greedy found {} conflicts", greedy_conflicts);
    let genetic_result = genetic(inst, &seed, nb_colors, config, rng);
    let genetic_conflicts = genetic_result.best.nb_conflicts();
    let mut coloring = genetic_result.best.coloring().to_vec();
    let mut final_conflicts = genetic_conflicts;
    if config.local_search && final_conflicts > 0 {
        // the descent gets the remaining budget
        let remaining = (config.time_budget() - genetic_result.elapsed).max(0.);
        coloring = two_opt_until(inst, &coloring, &TimeStoppingCriterion::new(remaining));
        final_conflicts = nb_conflicts(inst, &coloring);
        info!("2-opt: {} -> {} conflicts", genetic_conflicts, final_conflicts);
    }
    Ok(Report {
        coloring,
        nb_conflicts: final_conflicts,
        greedy_conflicts,
        genetic_conflicts,
        genetic: genetic_result,
    })
}

/**
optimizes the coloring of inst with nb_colors colors, returns (coloring, nb_conflicts).

# Errors
 - if nb_colors is 0
 - if the configuration is invalid
*/
pub fn optimize<R:Rng + ?Sized>(inst:&Instance, nb_colors:usize, config:&SolverConfig, rng:&mut R) -> Result<(Coloring, usize)> {
    let report = solve(inst, nb_colors, config, rng)?;
    Ok((report.coloring, report.nb_conflicts))
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::plain::read_plain;
    use crate::search::genetic::Termination;

    #[test]
    fn test_zero_colors() {
        let inst = Instance::from_edges(2, &[(0,1)]);
        let res = optimize(&inst, 0, &SolverConfig::default(), &mut create_rng(Some(1)));
        assert!(matches!(res, Err(ColorError::InvalidConfig(_))));
    }

    #[test]
    fn test_report_consistency() {
        let (k, inst) = read_plain("insts/plain/petersen.input").unwrap();
        let config = SolverConfig::default().with_time_limit(10.).with_local_search(true);
        let report = solve(&inst, k, &config, &mut create_rng(Some(21))).unwrap();
        assert_eq!(report.nb_conflicts, nb_conflicts(&inst, &report.coloring));
        assert!(report.genetic_conflicts <= report.greedy_conflicts);
        assert!(report.nb_conflicts <= report.genetic_conflicts);
    }

    #[test]
    fn test_same_seed_same_result_with_generation_budget() {
        let (k, inst) = read_plain("insts/plain/petersen.input").unwrap();
        let config = SolverConfig::default()
            .with_time_limit(60.)
            .with_seed(5)
            .with_stagnation_limit(0)
            .with_max_generations(20);
        let a = solve(&inst, k-1, &config, &mut create_rng(config.seed)).unwrap();
        let b = solve(&inst, k-1, &config, &mut create_rng(config.seed)).unwrap();
        assert_ne!(a.genetic.termination, Termination::TimeLimit);
        assert_ne!(b.genetic.termination, Termination::TimeLimit);
        assert_eq!(a.coloring, b.coloring);
        assert_eq!(a.nb_conflicts, b.nb_conflicts);
        assert_eq!(a.genetic.history, b.genetic.history);
    }

    #[test]
    fn test_huge_time_limit() {
        let (k, inst) = read_plain("insts/plain/triangle.input").unwrap();
        let config = SolverConfig::default()
            .with_time_limit(1e30)
            .with_max_generations(10)
            .with_local_search(true);
        let (coloring, conflicts) = optimize(&inst, k, &config, &mut create_rng(Some(2))).unwrap();
        assert_eq!(conflicts, nb_conflicts(&inst, &coloring));
        let config = config.with_time_limit(f32::INFINITY);
        let res = optimize(&inst, k, &config, &mut create_rng(Some(2)));
        assert!(matches!(res, Err(ColorError::InvalidConfig(_))));
    }
}
