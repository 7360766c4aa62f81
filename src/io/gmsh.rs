//! Gmsh I/O

use crate::{
    error::{Error, Result},
    grid::Grid,
    matrix::Matrix,
    traits::{GmshExport, GmshImport},
    types::RealScalar,
};
use itertools::izip;
use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

/// Gmsh element type of a three-node triangle
const GMSH_TRIANGLE: usize = 2;

impl<T: RealScalar + Display> GmshExport for Grid<T> {
    fn to_gmsh_string(&self) -> String {
        let node_count = self.vertex_count();
        let cell_count = self.triangle_count();
        let vertices = self.vertices();
        let xs = &vertices.data()[..node_count];
        let ys = &vertices.data()[node_count..];

        let mut gmsh_s = String::from("");
        gmsh_s.push_str("$MeshFormat\n");
        gmsh_s.push_str("4.1 0 8\n");
        gmsh_s.push_str("$EndMeshFormat\n");
        gmsh_s.push_str("$Nodes\n");
        gmsh_s.push_str(&format!("1 {node_count} 1 {node_count}\n"));
        gmsh_s.push_str(&format!("2 1 0 {node_count}\n"));
        for i in 0..node_count {
            gmsh_s.push_str(&format!("{}\n", i + 1));
        }
        for (x, y) in izip!(xs, ys) {
            gmsh_s.push_str(&format!("{x} {y} 0\n"));
        }
        gmsh_s.push_str("$EndNodes\n");
        gmsh_s.push_str("$Elements\n");
        gmsh_s.push_str(&format!("1 {cell_count} 1 {cell_count}\n"));
        gmsh_s.push_str(&format!("2 1 {GMSH_TRIANGLE} {cell_count}\n"));
        for (i, [a, b, c]) in self.triangle_iter().enumerate() {
            gmsh_s.push_str(&format!("{} {} {} {}\n", i + 1, a + 1, b + 1, c + 1));
        }
        gmsh_s.push_str("$EndElements\n");

        gmsh_s
    }
}

/// Get a section from a gmsh string
fn gmsh_section<'a>(s: &'a str, section: &str) -> Result<&'a str> {
    let start = format!("${section}\n");
    let end = format!("$End{section}");
    let body = s
        .split_once(&start)
        .ok_or_else(|| Error::Gmsh(format!("section not found: {section}")))?
        .1;
    let body = body
        .split_once(&end)
        .ok_or_else(|| Error::Gmsh(format!("section not terminated: {section}")))?
        .0;
    Ok(body)
}

fn parse_line<V: FromStr>(line: Option<&&str>) -> Result<Vec<V>> {
    let line = line.ok_or_else(|| Error::Gmsh(String::from("unexpected end of section")))?;
    line.split_whitespace()
        .map(|i| {
            i.parse::<V>()
                .map_err(|_| Error::Gmsh(format!("could not parse line: {line}")))
        })
        .collect()
}

fn parse_header<const N: usize>(line: Option<&&str>) -> Result<[usize; N]> {
    parse_line::<usize>(line)?
        .try_into()
        .map_err(|_| Error::Gmsh(String::from("unrecognised gmsh format")))
}

/// Check that a block of `count` lines starting at line `start` lies within the section
fn check_block_fits(line_count: usize, start: usize, count: usize) -> Result<()> {
    if count > line_count.saturating_sub(start) {
        return Err(Error::Gmsh(format!(
            "block of {count} lines starting at line {start} runs past the end of the section"
        )));
    }
    Ok(())
}

impl<T: RealScalar + FromStr> GmshImport for Grid<T> {
    fn from_gmsh_string(s: &str) -> Result<Self> {
        let format = gmsh_section(s, "MeshFormat")?;
        let [version, ascii_mode, _data_size] = format.split_whitespace().collect::<Vec<_>>()[..]
        else {
            return Err(Error::Gmsh(String::from("unrecognised gmsh format")));
        };
        if version != "4.1" {
            return Err(Error::Gmsh(format!("unsupported gmsh version {version}")));
        }
        if ascii_mode != "0" {
            return Err(Error::Gmsh(String::from(
                "non-ASCII gmsh files are not supported",
            )));
        }

        // Load nodes
        let nodes = gmsh_section(s, "Nodes")?.lines().collect::<Vec<_>>();
        let [num_entity_blocks, num_nodes, _min_node_tag, _max_node_tag] =
            parse_header::<4>(nodes.first())?;
        let mut tags_to_indices = HashMap::with_capacity(num_nodes.min(nodes.len()));
        let mut coordinates = Vec::with_capacity(num_nodes.min(nodes.len()));
        let mut line_n = 1;
        for _ in 0..num_entity_blocks {
            let [_entity_dim, _entity_tag, parametric, num_nodes_in_block] =
                parse_header::<4>(nodes.get(line_n))?;
            if parametric == 1 {
                return Err(Error::Gmsh(String::from(
                    "parametric nodes are not supported",
                )));
            }
            line_n += 1;
            // Tags and coordinates: one line each per node
            check_block_fits(nodes.len(), line_n, num_nodes_in_block)?;
            check_block_fits(nodes.len(), line_n, 2 * num_nodes_in_block)?;
            for k in 0..num_nodes_in_block {
                let [tag] = parse_header::<1>(nodes.get(line_n + k))?;
                let c = parse_line::<T>(nodes.get(line_n + num_nodes_in_block + k))?;
                if c.len() < 2 {
                    return Err(Error::Gmsh(format!("node {tag} has too few coordinates")));
                }
                tags_to_indices.insert(tag, coordinates.len());
                coordinates.push([c[0], c[1]]);
            }
            line_n += 2 * num_nodes_in_block;
        }

        // Load elements
        let elements = gmsh_section(s, "Elements")?.lines().collect::<Vec<_>>();
        let [num_entity_blocks, num_elements, _min_element_tag, _max_element_tag] =
            parse_header::<4>(elements.first())?;
        let mut cells = Vec::with_capacity(num_elements.min(elements.len()));
        let mut line_n = 1;
        for _ in 0..num_entity_blocks {
            let [_entity_dim, _entity_tag, element_type, num_elements_in_block] =
                parse_header::<4>(elements.get(line_n))?;
            line_n += 1;
            check_block_fits(elements.len(), line_n, num_elements_in_block)?;
            // Only triangles are read: points and lines on the boundary are skipped
            if element_type == GMSH_TRIANGLE {
                for k in 0..num_elements_in_block {
                    let [_tag, a, b, c] = parse_header::<4>(elements.get(line_n + k))?;
                    let mut cell = [0; 3];
                    for (i, node) in [a, b, c].iter().enumerate() {
                        cell[i] = *tags_to_indices
                            .get(node)
                            .ok_or_else(|| Error::Gmsh(format!("unknown node {node}")))?;
                    }
                    cells.push(cell);
                }
            }
            line_n += num_elements_in_block;
        }

        let vertex_count = coordinates.len();
        let mut vertices = Matrix::new(vertex_count, 2);
        for (i, [x, y]) in coordinates.into_iter().enumerate() {
            vertices.set(i, 0, x)?;
            vertices.set(i, 1, y)?;
        }
        let mut triangles = Matrix::new(cells.len(), 3);
        for (i, cell) in cells.iter().enumerate() {
            for (corner, v) in cell.iter().enumerate() {
                triangles.set(i, corner, *v)?;
            }
        }
        Grid::new(vertices, triangles)
    }
}
