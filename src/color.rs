use bit_set::BitSet;
use log::info;

use crate::error::{ColorError, Result};

/** Vertex Id */
pub type VertexId = usize;

/** Color (in 0..nb_colors) */
pub type Color = usize;

/** Coloring of a graph: coloring[v] is the color of the vertex v */
pub type Coloring = Vec<Color>;

/** models a Graph Coloring instance */
#[derive(Debug, Clone)]
pub struct Instance {
    /// nb vertices
    n: usize,
    /// nb edges
    m: usize,
    /// edges of the graph
    edges: Vec<(VertexId,VertexId)>,
    /// adj_list[i]: list of vertices adjacent to i
    adj_list: Vec<Vec<VertexId>>,
    /// if exists: adj_matrix[i] represents a bitset of its neighbors
    adj_matrix: Option<Vec<BitSet>>,
}


impl Instance {

    /// number of vertices
    pub fn n(&self) -> usize { self.n }

    /// number of edges
    pub fn m(&self) -> usize { self.m }

    /// iterator over the vertices
    pub fn vertices(&self) -> std::ops::Range<VertexId> { 0..self.n }

    /// list of vertices adjacent to vertex i
    pub fn adj(&self, i:VertexId) -> &[VertexId] {
        &self.adj_list[i]
    }

    /// number of edges incident to i
    pub fn degree(&self, i:VertexId) -> usize { self.adj_list[i].len() }

    /// edge list
    pub fn edges(&self) -> &[(VertexId, VertexId)] {
        &self.edges
    }

    /// builds the edge list (self-loops are not listed)
    fn build_edges(adj_list:&[Vec<VertexId>]) -> Vec<(VertexId,VertexId)> {
        let mut res = Vec::new();
        for (i,l) in adj_list.iter().enumerate() {
            for j in l {
                if i < *j {
                    res.push((i,*j));
                }
            }
        }
        res
    }

    /** constructor using an adjacency list.
    The adjacency list is expected to be symmetric (j in adj[i] iff i in adj[j]).
    */
    pub fn new(adj_list:Vec<Vec<VertexId>>) -> Self {
        let n = adj_list.len();
        // compute nb edges
        let mut m = 0;
        for e in &adj_list { // at the end: m = ∑ d(v)
            m += e.len();
        }
        m /= 2; // m = (∑ d(v)) / 2
        let edges = Self::build_edges(&adj_list);
        Self { n,m, edges, adj_list, adj_matrix:None }
    }

    /** constructor from a list of undirected edges (j,k).
    Duplicated edges and self-loops are kept as given.

    # Panics
    if an endpoint is not in 0..n (readers check this before)
    */
    pub fn from_edges(n:usize, edges:&[(VertexId,VertexId)]) -> Self {
        let mut adj_list = vec![Vec::new() ; n];
        for (j,k) in edges {
            adj_list[*j].push(*k);
            adj_list[*k].push(*j);
        }
        Self::new(adj_list)
    }

    /** same as from_edges, for untrusted inputs.

    # Errors
    - TooManyVertices if the adjacency list of n vertices cannot be allocated
    - VertexOutOfRange if an endpoint is not in 0..n
    */
    pub fn try_from_edges(n:usize, edges:&[(VertexId,VertexId)]) -> Result<Self> {
        let mut adj_list = empty_adj_list(n)?;
        for (j,k) in edges {
            for v in [*j,*k] {
                if v >= n {
                    return Err(ColorError::VertexOutOfRange { vertex: v, n });
                }
            }
            adj_list[*j].push(*k);
            adj_list[*k].push(*j);
        }
        Ok(Self::new(adj_list))
    }

    /// logs statistics of the instance
    pub fn display_statistics(&self) {
        info!("\t{} \t vertices", self.n());
        info!("\t{} \t edges", self.m());
        let degrees = self.vertices().map(|i| self.degree(i));
        if let (Some(min), Some(max)) = (degrees.clone().min(), degrees.max()) {
            info!("\t{} \t min degree", min);
            info!("\t{} \t max degree", max);
        }
        if self.adj_matrix.is_some() {
            info!("\tadj matrix computed");
        }
    }

    /// if called, populate the adj_matrix
    pub fn populate_adj_matrix(&mut self) {
        let mut res = vec![BitSet::default(); self.n];
        for (a,resa) in res.iter_mut().enumerate() {
            for b in &self.adj_list[a] {
                resa.insert(*b);
            }
        }
        self.adj_matrix = Some(res);
    }

    /** returns if a and b are adjacent
    if the adjacency matrix is defined: O(1)
    otherwise: O(Δ(G))
    */
    pub fn are_adjacent(&self, a:VertexId, b:VertexId) -> bool {
        match &self.adj_matrix {
            None => {
                self.adj(a).iter().any(|c| &b==c)
            },
            Some(matrix) => { matrix[a].contains(b) }
        }
    }
}


/** adjacency list of n isolated vertices, fails instead of aborting if n is too large */
pub fn empty_adj_list(n:usize) -> Result<Vec<Vec<VertexId>>> {
    let mut res:Vec<Vec<VertexId>> = Vec::new();
    res.try_reserve_exact(n).map_err(|_| ColorError::TooManyVertices { n })?;
    res.resize(n, Vec::new());
    Ok(res)
}

/**
returns the number of conflicts of a coloring.
Iterates over the adjacency list of every vertex, so each conflicting edge is counted twice.
Does not allocate: it is called for every individual of every generation.
*/
pub fn nb_conflicts(inst:&Instance, coloring:&[Color]) -> usize {
    let mut res = 0;
    for v in inst.vertices() {
        for u in inst.adj(v) {
            if coloring[*u] == coloring[v] {
                res += 1;
            }
        }
    }
    res
}

/** returns the list of conflicting edges (each undirected edge appears once) */
pub fn conflicting_edges(inst:&Instance, coloring:&[Color]) -> Vec<(VertexId,VertexId)> {
    inst.edges().iter()
        .filter(|(u,v)| coloring[*u] == coloring[*v])
        .cloned().collect()
}

/** result of the checker */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerResult {
    /// well-formed coloring, with its number of conflicts (counted twice per edge)
    Ok(usize),
    /// the coloring does not assign exactly one color per vertex
    WrongLength {
        /// length of the coloring
        found: usize,
        /// number of vertices
        expected: usize,
    },
    /// a vertex uses a color that is not in the palette
    ColorOutOfRange {
        /// vertex id
        vertex: VertexId,
        /// color used
        color: Color,
    },
}

/**
checks that a coloring is well-formed (one color in 0..nb_colors per vertex)
and returns its number of conflicts.
*/
pub fn checker(inst:&Instance, coloring:&[Color], nb_colors:usize) -> CheckerResult {
    if coloring.len() != inst.n() {
        return CheckerResult::WrongLength { found: coloring.len(), expected: inst.n() };
    }
    if let Some((vertex, color)) = coloring.iter().enumerate().find(|(_,c)| **c >= nb_colors) {
        return CheckerResult::ColorOutOfRange { vertex, color: *color };
    }
    CheckerResult::Ok(nb_conflicts(inst, coloring))
}
