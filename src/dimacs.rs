use std::fs;
use std::path::Path;

use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::{tag, take_until};
use nom::character::complete::{digit1, line_ending, space0, space1};
use nom::combinator::{map_res, opt};
use nom::sequence::{preceded, separated_pair, terminated, tuple};

use crate::color::{empty_adj_list, Instance, VertexId};
use crate::error::{ColorError, Result};


/// creates an instance from a DIMACS file (vertices are 1-indexed in the file)
pub fn read_dimacs<P:AsRef<Path>>(filename:P) -> Result<Instance> {
    let path = filename.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| ColorError::io(path, e))?
        .replace("\r","");
    let (n, adj_list) = parse_dimacs(path, &content)?;
    debug_assert_eq!(n, adj_list.len());
    Ok(Instance::new(adj_list))
}

/// parses the content of a DIMACS file, returns (n, adj_list)
pub fn parse_dimacs(path:&Path, content:&str) -> Result<(usize, Vec<Vec<VertexId>>)> {
    let line_of = |rest:&str| content[..content.len()-rest.len()].matches('\n').count() + 1;
    let s1 = skip_comments(content).map(|(rest,_)| rest).unwrap_or(content);
    let (mut s2,(n,m)) = read_header(s1).map_err(|_| ColorError::Parse {
        path: path.to_path_buf(),
        line: line_of(s1),
        message: "expected a header 'p edge <n> <m>'".to_string(),
    })?;
    let mut adj_list = empty_adj_list(n)?;
    let mut nb_edges = 0;
    loop {
        s2 = s2.trim_start();
        s2 = skip_comments(s2).map(|(rest,_)| rest).unwrap_or(s2);
        match read_edge(s2) {
            Ok((rest,(a,b))) => {
                for v in [a,b] {
                    if v == 0 {
                        return Err(ColorError::Parse {
                            path: path.to_path_buf(),
                            line: line_of(s2),
                            message: "DIMACS vertices start at 1".to_string(),
                        });
                    }
                    if v > n {
                        return Err(ColorError::VertexOutOfRange { vertex: v-1, n });
                    }
                }
                adj_list[a-1].push(b-1);
                adj_list[b-1].push(a-1);
                nb_edges += 1;
                s2 = rest;
            }
            Err(_) => break,
        }
    }
    if !s2.trim().is_empty() {
        return Err(ColorError::Parse {
            path: path.to_path_buf(),
            line: line_of(s2),
            message: "expected an edge line 'e <u> <v>'".to_string(),
        });
    }
    // some generators count each edge twice in the header
    if nb_edges != m && 2*nb_edges != m {
        return Err(ColorError::EdgeCountMismatch { declared: m, found: nb_edges });
    }
    Ok((n, adj_list))
}

/// skips a single comment
fn skip_comment(s:&str) -> IResult<&str, &str> {
    terminated(preceded(tag("c"), take_until("\n")), line_ending)(s)
}

/// skips all comments
pub fn skip_comments(s:&str) -> IResult<&str, Vec<&str>> {
    nom::multi::many0(skip_comment)(s)
}

/// reads a non-negative integer
fn integer(s:&str) -> IResult<&str, usize> {
    map_res(digit1, |d:&str| d.parse::<usize>())(s)
}

/// reads two numbers separated by spaces, and the end of the line if any
fn read_two_integers(s:&str) -> IResult<&str, (usize,usize)> {
    terminated(
        separated_pair(integer, space1, integer),
        tuple((space0, opt(line_ending)))
    )(s)
}

/// reads header containing (n,m)
pub fn read_header(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(alt((tag("p edge "), tag("p col "))), read_two_integers)(s)
}

/// reads edge line (WARNING: indices start at 1 in the DIMACS format)
pub fn read_edge(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(tag("e "), read_two_integers)(s)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_instance() {
        let inst = read_dimacs("insts/dimacs/grid2x2.col").unwrap();
        assert_eq!(inst.n(), 4);
        assert_eq!(inst.m(), 4);
        assert_eq!(inst.adj(0), &[1,2]);
    }

    #[test]
    fn test_read_petersen() {
        let inst = read_dimacs("insts/dimacs/petersen.col").unwrap();
        assert_eq!(inst.n(), 10);
        assert_eq!(inst.m(), 15);
        assert!(inst.vertices().all(|v| inst.degree(v) == 3));
    }

    #[test]
    fn test_read_comment1() {
        let s = "c this is a test comment\np edge 2 1\ne 1 2";
        assert_eq!(
            skip_comments(s),
            Ok((
                "p edge 2 1\ne 1 2",
                vec![" this is a test comment"]
            ))
        );
    }

    #[test]
    fn test_read_header() {
        let s = "p edge 2 1\ne 1 2";
        assert_eq!(read_header(s).unwrap().0, "e 1 2");
        assert_eq!(read_header(s).unwrap().1, (2,1));
    }

    #[test]
    fn test_read_header_col() {
        let s = "p col 2 1\ne 1 2";
        assert_eq!(read_header(s).unwrap().0, "e 1 2");
        assert_eq!(read_header(s).unwrap().1, (2,1));
    }

    #[test]
    fn test_read_edge() {
        let s = "e 1 2\n";
        assert_eq!(read_edge(s).unwrap().1, (1,2));
        assert_eq!(read_edge(s).unwrap().0, "");
    }

    #[test]
    fn test_edge_out_of_range() {
        let res = parse_dimacs(Path::new("mem"), "p edge 2 1\ne 1 3\n");
        assert!(matches!(res, Err(ColorError::VertexOutOfRange { vertex: 2, n: 2 })));
    }

    #[test]
    fn test_edge_count_mismatch() {
        let res = parse_dimacs(Path::new("mem"), "p edge 3 3\ne 1 2\ne 2 3\n");
        assert!(matches!(res, Err(ColorError::EdgeCountMismatch { declared: 3, found: 2 })));
    }

    #[test]
    fn test_huge_vertex_count() {
        let res = parse_dimacs(Path::new("mem"), "p edge 18446744073709551615 0\n");
        assert!(matches!(res, Err(ColorError::TooManyVertices { .. })));
    }

    #[test]
    fn test_missing_header() {
        let res = parse_dimacs(Path::new("mem"), "c only a comment\ne 1 2\n");
        assert!(matches!(res, Err(ColorError::Parse { line: 2, .. })));
    }
}
