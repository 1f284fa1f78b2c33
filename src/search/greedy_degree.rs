use log::trace;
use priority_queue::PriorityQueue;
use rand::Rng;

use crate::color::{Coloring, Instance, VertexId};
use crate::search::candidates::candidate_colors;

/** implements a randomized greedy that colors vertices by decreasing degree.
    1. choose the uncolored vertex with the largest degree (break ties by the largest id)
    2. compute the colors not used by its neighbors
    3. pick one of them uniformly at random, or any color if all are used
    4. repeat until every vertex is colored

The degrees are computed once. Vertices that are not colored yet hold the color 0,
which is considered as used by their neighbors.

parameters:
 - inst: reference to an instance
 - nb_colors: palette size (at least 1)
 - rng: random number generator
*/
pub fn greedy_degree<R:Rng + ?Sized>(inst:&Instance, nb_colors:usize, rng:&mut R) -> Coloring {
    assert!(nb_colors > 0, "greedy_degree: the palette is empty");
    let n:usize = inst.n();
    // (degree, id) is the priority: the max is popped first
    let mut remaining_vertices:PriorityQueue<VertexId, (usize, VertexId)> = PriorityQueue::with_capacity(n);
    for v in inst.vertices() {
        remaining_vertices.push(v, (inst.degree(v), v));
    }
    let mut coloring:Coloring = vec![0 ; n];
    while let Some((v,_)) = remaining_vertices.pop() {
        let mask = candidate_colors(inst, v, &coloring, nb_colors);
        coloring[v] = if mask.is_empty() {
            trace!("greedy_degree: no free color for vertex {}", v);
            rng.gen_range(0..nb_colors)
        } else {
            loop {
                let c = rng.gen_range(0..nb_colors);
                if mask.is_allowed(c) { break c; }
            }
        };
    }
    coloring
}


#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::color::nb_conflicts;
    use crate::plain::read_plain;

    #[test]
    fn test_colors_in_palette() {
        let (_, inst) = read_plain("insts/plain/petersen.input").unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for nb_colors in 1..5 {
            let coloring = greedy_degree(&inst, nb_colors, &mut rng);
            assert_eq!(coloring.len(), inst.n());
            assert!(coloring.iter().all(|c| *c < nb_colors));
        }
    }

    #[test]
    fn test_empty_graph() {
        let inst = Instance::from_edges(0, &[]);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(greedy_degree(&inst, 3, &mut rng).is_empty());
    }

    #[test]
    fn test_single_color() {
        let inst = Instance::from_edges(3, &[(0,1), (1,2)]);
        let mut rng = StdRng::seed_from_u64(7);
        let coloring = greedy_degree(&inst, 1, &mut rng);
        assert_eq!(coloring, vec![0,0,0]);
        assert_eq!(nb_conflicts(&inst, &coloring), 4);
    }

    #[test]
    fn test_highest_degree_avoids_color_zero() {
        // star centered on 0: the center is colored first and its leaves still hold color 0
        let inst = Instance::from_edges(4, &[(0,1), (0,2), (0,3)]);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let coloring = greedy_degree(&inst, 3, &mut rng);
            assert_ne!(coloring[0], 0);
            assert_eq!(nb_conflicts(&inst, &coloring), 0);
        }
    }

    #[test]
    fn test_same_seed_same_coloring() {
        let (_, inst) = read_plain("insts/plain/petersen.input").unwrap();
        let a = greedy_degree(&inst, 3, &mut StdRng::seed_from_u64(11));
        let b = greedy_degree(&inst, 3, &mut StdRng::seed_from_u64(11));
        assert_eq!(a, b);
    }
}
