use bit_set::BitSet;

use crate::color::{Color, Instance, VertexId};

/**
Colors a vertex may take without creating a conflict with its neighbors.
Stores the colors used by the neighbors; a color is allowed iff it is not used.
*/
#[derive(Debug, Clone)]
pub struct CandidateMask {
    /// colors seen in the neighborhood
    used: BitSet,
    /// palette size
    nb_colors: usize,
}

impl CandidateMask {
    /// true if c is not used by a neighbor
    pub fn is_allowed(&self, c:Color) -> bool {
        c < self.nb_colors && !self.used.contains(c)
    }

    /// number of allowed colors
    pub fn nb_allowed(&self) -> usize {
        self.nb_colors - self.used.len()
    }

    /// true if every color is used by some neighbor
    pub fn is_empty(&self) -> bool { self.nb_allowed() == 0 }

    /// boolean view of the mask: res[c] is false iff c is used by a neighbor
    pub fn to_vec(&self) -> Vec<bool> {
        (0..self.nb_colors).map(|c| self.is_allowed(c)).collect()
    }
}

/**
computes the colors that are not used by the neighbors of v.
Neighbors that are not colored yet still hold their default color (0),
so they mark color 0 as used.
*/
pub fn candidate_colors(inst:&Instance, v:VertexId, coloring:&[Color], nb_colors:usize) -> CandidateMask {
    // grows with the largest neighbor color, not with the palette
    let mut used = BitSet::new();
    for u in inst.adj(v) {
        if coloring[*u] < nb_colors {
            used.insert(coloring[*u]);
        }
    }
    CandidateMask { used, nb_colors }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_block_their_colors() {
        let inst = Instance::from_edges(4, &[(0,1), (0,2), (0,3)]);
        let mask = candidate_colors(&inst, 0, &[3,0,1,2], 4);
        assert_eq!(mask.to_vec(), vec![false, false, false, true]);
        assert_eq!(mask.nb_allowed(), 1);
        assert!(!mask.is_empty());
    }

    #[test]
    fn test_own_color_is_not_blocked() {
        // neighbors use {1,2}, vertex 0 itself holds color 0
        let inst = Instance::from_edges(4, &[(0,1), (0,2), (0,3)]);
        let mask = candidate_colors(&inst, 0, &[0,1,2,1], 4);
        assert_eq!(mask.to_vec(), vec![true, false, false, true]);
        assert_eq!(mask.nb_allowed(), 2);
    }

    #[test]
    fn test_all_colors_used() {
        let inst = Instance::from_edges(3, &[(0,1), (0,2)]);
        let mask = candidate_colors(&inst, 0, &[0,0,1], 2);
        assert!(mask.is_empty());
        assert_eq!(mask.to_vec(), vec![false, false]);
    }

    #[test]
    fn test_uncolored_neighbor_blocks_color_zero() {
        // vertex 1 is not colored yet (default value 0)
        let inst = Instance::from_edges(2, &[(0,1)]);
        let mask = candidate_colors(&inst, 0, &[0,0], 3);
        assert!(!mask.is_allowed(0));
        assert!(mask.is_allowed(1));
        assert!(mask.is_allowed(2));
    }

    #[test]
    fn test_huge_palette() {
        let inst = Instance::from_edges(2, &[(0,1)]);
        let mask = candidate_colors(&inst, 0, &[0,5], usize::MAX);
        assert!(!mask.is_allowed(5));
        assert!(mask.is_allowed(usize::MAX - 1));
        assert_eq!(mask.nb_allowed(), usize::MAX - 1);
    }

    #[test]
    fn test_only_neighbors_are_consulted() {
        let inst = Instance::from_edges(3, &[(0,1)]);
        let mask = candidate_colors(&inst, 0, &[2,1,0], 3);
        assert_eq!(mask.to_vec(), vec![true, false, true]);
    }
}
