use std::time::Instant;

use dogs::search_algorithm::{StoppingCriterion, TimeStoppingCriterion};
use log::{debug, info, warn};
use rand::Rng;
use serde::Serialize;

use crate::color::{Color, Coloring, Instance, nb_conflicts};
use crate::config::SolverConfig;
use crate::search::greedy_degree::greedy_degree;

/**
A coloring and its number of conflicts (lower is better).
The number of conflicts is recomputed every time the coloring changes.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    /// coloring[v]: color of vertex v
    coloring: Coloring,
    /// nb_conflicts(inst, coloring)
    nb_conflicts: usize,
}

impl Individual {
    /// evaluates a coloring
    pub fn new(inst:&Instance, coloring:Coloring) -> Self {
        let nb_conflicts = nb_conflicts(inst, &coloring);
        Self { coloring, nb_conflicts }
    }

    /// coloring of the individual
    pub fn coloring(&self) -> &[Color] { &self.coloring }

    /// number of conflicts (fitness)
    pub fn nb_conflicts(&self) -> usize { self.nb_conflicts }

    /// returns the coloring, dropping the fitness
    pub fn into_coloring(self) -> Coloring { self.coloring }

    /// re-evaluates the individual after a change
    fn evaluate(&mut self, inst:&Instance) {
        self.nb_conflicts = nb_conflicts(inst, &self.coloring);
    }
}

/**
changes the color of a random vertex to a random different color.
With a single color (or no vertex), the individual is returned unchanged.
*/
pub fn mutate<R:Rng + ?Sized>(inst:&Instance, mut ind:Individual, nb_colors:usize, rng:&mut R) -> Individual {
    let n = ind.coloring.len();
    if n == 0 || nb_colors < 2 {
        return ind;
    }
    let s = rng.gen_range(0..n);
    let current = ind.coloring[s];
    // uniform over the nb_colors-1 other colors
    let mut c = rng.gen_range(0..nb_colors-1);
    if c >= current { c += 1; }
    ind.coloring[s] = c;
    ind.evaluate(inst);
    ind
}

/**
one-point crossover: the child takes the colors of a for vertices < s
and the colors of b for vertices >= s (s chosen at random).
*/
pub fn crossover<R:Rng + ?Sized>(inst:&Instance, mut a:Individual, b:&Individual, rng:&mut R) -> Individual {
    let n = a.coloring.len();
    if n == 0 {
        return a;
    }
    let s = rng.gen_range(0..n);
    a.coloring[s..].copy_from_slice(&b.coloring[s..]);
    a.evaluate(inst);
    a
}

/**
consumes the parents in order and pushes the children in creation order.
Operations alternate, starting with a mutation:
 - mutation of the next parent (one child)
 - crossover of the next two parents (one child); a lone last parent is mutated instead

P parents give P - P/3 children (integer division).
*/
pub fn next_generation<R:Rng + ?Sized>(
    inst:&Instance,
    parents:&mut Vec<Individual>,
    children:&mut Vec<Individual>,
    nb_colors:usize,
    rng:&mut R,
) {
    let mut remaining = parents.drain(..);
    let mut parity:usize = 0;
    while let Some(first) = remaining.next() {
        let child = if parity % 2 == 0 {
            mutate(inst, first, nb_colors, rng)
        } else {
            match remaining.next() {
                Some(second) => crossover(inst, first, &second, rng),
                None => mutate(inst, first, nb_colors, rng),
            }
        };
        parity += 1;
        children.push(child);
    }
}

/// reason why the genetic algorithm stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// a coloring without conflicts was found
    Solved,
    /// the best conflict count of the generations did not change
    Stagnation,
    /// the time budget is exhausted
    TimeLimit,
    /// the maximum number of generations was reached
    GenerationLimit,
}

/// result of the genetic algorithm
#[derive(Debug, Clone)]
pub struct GeneticResult {
    /// best individual seen during the search
    pub best: Individual,
    /// number of generations performed
    pub nb_generations: usize,
    /// why the search stopped
    pub termination: Termination,
    /// history[g]: number of conflicts of the best child of generation g+1
    pub history: Vec<usize>,
    /// time spent (seconds)
    pub elapsed: f32,
}

/**
Genetic algorithm minimizing the number of conflicts.

The initial population contains the seed coloring and `config.population_size_for(n)` colorings
built by greedy_degree. At each generation, parents are consumed in order, alternating between:
 - a mutation of the next parent
 - a crossover of the next two parents
The children are sorted by number of conflicts and become the parents of the next generation.

Stops when a coloring without conflicts is found, when the best child of a generation has the same
number of conflicts for `config.stagnation_limit` consecutive generations, when the time budget
is exhausted, or when `config.max_generations` is reached.
The returned individual is never worse than the seed.
*/
pub fn genetic<R:Rng + ?Sized>(
    inst:&Instance,
    seed:&[Color],
    nb_colors:usize,
    config:&SolverConfig,
    rng:&mut R,
) -> GeneticResult {
    let time_init = Instant::now();
    let stopping_criterion = TimeStoppingCriterion::new(config.time_budget());
    let population_size = config.population_size_for(inst.n());
    // initial population
    let seed_individual = Individual::new(inst, seed.to_vec());
    let mut best = seed_individual.clone();
    let mut parents:Vec<Individual> = Vec::new();
    parents.push(seed_individual);
    for _ in 0..population_size {
        if stopping_criterion.is_finished() {
            warn!(
                "genetic: time limit reached while building the population ({} / {} individuals)",
                parents.len()-1, population_size
            );
            break;
        }
        let ind = Individual::new(inst, greedy_degree(inst, nb_colors, rng));
        if ind.nb_conflicts < best.nb_conflicts {
            best = ind.clone();
        }
        parents.push(ind);
    }
    info!(
        "genetic: {} individuals, best initial conflicts: {} (seed: {})",
        parents.len(), best.nb_conflicts, parents[0].nb_conflicts
    );
    let mut children:Vec<Individual> = Vec::with_capacity(parents.len());
    let mut previous_best:usize = best.nb_conflicts;
    let mut nb_stagnating:usize = 0;
    let mut history:Vec<usize> = Vec::new();
    let termination = loop {
        if best.nb_conflicts == 0 {
            break Termination::Solved;
        }
        if stopping_criterion.is_finished() {
            break Termination::TimeLimit;
        }
        if config.max_generations.map_or(false, |max| history.len() >= max) {
            break Termination::GenerationLimit;
        }
        next_generation(inst, &mut parents, &mut children, nb_colors, rng);
        // selection: the sorted children replace the parents (stable: ties keep creation order)
        children.sort_by_key(Individual::nb_conflicts);
        std::mem::swap(&mut parents, &mut children);
        let generation_best = parents[0].nb_conflicts;
        if generation_best < best.nb_conflicts {
            best = parents[0].clone();
        }
        history.push(generation_best);
        debug!(
            "generation {:<8} size: {:<10} generation best: {:<8} best: {:<8} time: {:.3}",
            history.len(), parents.len(), generation_best, best.nb_conflicts, time_init.elapsed().as_secs_f32()
        );
        if best.nb_conflicts == 0 {
            break Termination::Solved;
        }
        if generation_best == previous_best {
            nb_stagnating += 1;
        } else {
            nb_stagnating = 0;
        }
        previous_best = generation_best;
        if config.stagnation_limit > 0 && nb_stagnating >= config.stagnation_limit {
            break Termination::Stagnation;
        }
    };
    let elapsed = time_init.elapsed().as_secs_f32();
    info!(
        "genetic: {:?} after {} generations ({:.3} seconds), best conflicts: {}",
        termination, history.len(), elapsed, best.nb_conflicts
    );
    GeneticResult {
        best,
        nb_generations: history.len(),
        termination,
        history,
        elapsed,
    }
}
