//! Plain instance format and its output file.
//!
//! ```text
//! 3        <- number of colors
//! 3 3      <- number of vertices, number of edges
//! 0 1      <- one line per edge (vertices start at 0)
//! 1 2
//! 2 0
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use nom::IResult;
use nom::character::complete::{digit1, multispace0};
use nom::combinator::map_res;
use nom::sequence::{pair, preceded};

use crate::color::{Color, Instance, VertexId};
use crate::error::{ColorError, Result};


/// reads a plain instance file, returns (nb_colors, instance)
pub fn read_plain<P:AsRef<Path>>(filename:P) -> Result<(usize, Instance)> {
    let path = filename.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| ColorError::io(path, e))?;
    parse_plain(path, &content)
}

/// parses the content of a plain instance file, returns (nb_colors, instance)
pub fn parse_plain(path:&Path, content:&str) -> Result<(usize, Instance)> {
    let line_of = |rest:&str| content[..content.len()-rest.len()].matches('\n').count() + 1;
    let parse_error = |rest:&str, message:&str| ColorError::Parse {
        path: path.to_path_buf(),
        line: line_of(rest.trim_start()),
        message: message.to_string(),
    };
    let (s1, nb_colors) = integer(content)
        .map_err(|_| parse_error(content, "expected the number of colors"))?;
    let (mut s2, (n, e)) = pair(integer, integer)(s1)
        .map_err(|_| parse_error(s1, "expected '<nb vertices> <nb edges>'"))?;
    // e comes from the file: no preallocation
    let mut edges:Vec<(VertexId,VertexId)> = Vec::new();
    while edges.len() < e {
        match pair(integer, integer)(s2) {
            Ok((rest, (j,k))) => {
                for v in [j,k] {
                    if v >= n {
                        return Err(ColorError::VertexOutOfRange { vertex: v, n });
                    }
                }
                edges.push((j,k));
                s2 = rest;
            }
            Err(_) if s2.trim().is_empty() => {
                return Err(ColorError::EdgeCountMismatch { declared: e, found: edges.len() });
            }
            Err(_) => return Err(parse_error(s2, "expected an edge '<j> <k>'")),
        }
    }
    Ok((nb_colors, Instance::try_from_edges(n, &edges)?))
}

/// reads a non-negative integer, skipping the whitespace before it
fn integer(s:&str) -> IResult<&str, usize> {
    preceded(multispace0, map_res(digit1, |d:&str| d.parse::<usize>()))(s)
}

/// default output file of an instance: `<instance name>.output`
pub fn output_filename(inst_filename:&str) -> PathBuf {
    Path::new(inst_filename).with_extension("output")
}

/** writes a string encoding the coloring (use this to export the solution) */
pub fn output_to_string(coloring:&[Color], nb_conflicts:usize) -> String {
    let mut res = format!("fewest number of conflicts: {}\n", nb_conflicts);
    for (v,c) in coloring.iter().enumerate() {
        res += format!("node {} color: {}\n", v, c).as_str();
    }
    res
}

/** writes the coloring into a file */
pub fn write_output<P:AsRef<Path>>(filename:P, coloring:&[Color], nb_conflicts:usize) -> Result<()> {
    let path = filename.as_ref();
    fs::write(path, output_to_string(coloring, nb_conflicts))
        .map_err(|e| ColorError::io(path, e))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_triangle() {
        let (k, inst) = read_plain("insts/plain/triangle.input").unwrap();
        assert_eq!(k, 3);
        assert_eq!(inst.n(), 3);
        assert_eq!(inst.m(), 3);
        assert_eq!(inst.adj(2), &[1,0]);
    }

    #[test]
    fn test_read_isolated_vertices() {
        let (k, inst) = read_plain("insts/plain/isolated2.input").unwrap();
        assert_eq!(k, 1);
        assert_eq!(inst.n(), 2);
        assert_eq!(inst.m(), 0);
    }

    #[test]
    fn test_tokens_on_one_line() {
        let (k, inst) = parse_plain(Path::new("mem"), "2 4 3 0 1 1 2 2 3").unwrap();
        assert_eq!(k, 2);
        assert_eq!(inst.edges(), &[(0,1), (1,2), (2,3)]);
    }

    #[test]
    fn test_vertex_out_of_range() {
        let res = parse_plain(Path::new("mem"), "2\n2 1\n0 2\n");
        assert!(matches!(res, Err(ColorError::VertexOutOfRange { vertex: 2, n: 2 })));
    }

    #[test]
    fn test_missing_edges() {
        let res = parse_plain(Path::new("mem"), "2\n3 2\n0 1\n");
        assert!(matches!(res, Err(ColorError::EdgeCountMismatch { declared: 2, found: 1 })));
    }

    #[test]
    fn test_huge_edge_count() {
        let res = parse_plain(Path::new("mem"), "2\n2 18446744073709551615\n0 1\n");
        assert!(matches!(res, Err(ColorError::EdgeCountMismatch { declared: usize::MAX, found: 1 })));
    }

    #[test]
    fn test_huge_vertex_count() {
        let res = parse_plain(Path::new("mem"), "2\n18446744073709551615 0\n");
        assert!(matches!(res, Err(ColorError::TooManyVertices { .. })));
    }

    #[test]
    fn test_garbage_line() {
        let res = parse_plain(Path::new("mem"), "2\n3 2\n0 1\nx y\n");
        assert!(matches!(res, Err(ColorError::Parse { line: 4, .. })));
    }

    #[test]
    fn test_missing_file() {
        let res = read_plain("insts/plain/does-not-exist.input");
        assert!(matches!(res, Err(ColorError::Io { .. })));
    }

    #[test]
    fn test_output_format() {
        assert_eq!(
            output_to_string(&[0,1,0], 0),
            "fewest number of conflicts: 0\nnode 0 color: 0\nnode 1 color: 1\nnode 2 color: 0\n"
        );
        assert_eq!(output_filename("graphs/color12-3.input"), PathBuf::from("graphs/color12-3.output"));
    }
}
