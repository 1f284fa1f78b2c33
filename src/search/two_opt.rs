use dogs::search_algorithm::{NeverStoppingCriterion, StoppingCriterion};
use log::debug;

use crate::color::{Color, Coloring, Instance, nb_conflicts};

/** 2-opt steepest descent (see two_opt_until), runs until a local optimum is reached */
pub fn two_opt(inst:&Instance, coloring:&[Color]) -> Coloring {
    two_opt_until(inst, coloring, &NeverStoppingCriterion::default())
}

/**
Local search that swaps the colors of two distinct vertices.
At each round, every pair (u,v) is evaluated and the best swap among all pairs is kept.
If it strictly decreases the number of conflicts, it is applied and a new round starts.
Otherwise the coloring is a local optimum and is returned unchanged.

The stopping criterion is checked between rounds.
Each round costs O(n².(n+m)).
*/
pub fn two_opt_until<Stopping:StoppingCriterion>(inst:&Instance, coloring:&[Color], stopping_criterion:&Stopping) -> Coloring {
    let n = inst.n();
    let mut current:Coloring = coloring.to_vec();
    let mut current_conflicts = nb_conflicts(inst, &current);
    let mut nb_rounds:usize = 0;
    while current_conflicts > 0 && !stopping_criterion.is_finished() {
        let mut best_swap:Option<(usize,usize)> = None;
        let mut best_conflicts = current_conflicts;
        for u in 0..n {
            for v in u+1..n {
                if current[u] == current[v] { continue; } // swapping does not change anything
                current.swap(u, v);
                let conflicts = nb_conflicts(inst, &current);
                current.swap(u, v);
                if conflicts < best_conflicts {
                    best_conflicts = conflicts;
                    best_swap = Some((u,v));
                }
            }
        }
        match best_swap {
            None => break, // local optimum
            Some((u,v)) => {
                current.swap(u, v);
                current_conflicts = best_conflicts;
                nb_rounds += 1;
                debug!(
                    "2-opt round {:<8} swap ({}, {}) \t conflicts: {}",
                    nb_rounds, u, v, current_conflicts
                );
            }
        }
    }
    current
}
