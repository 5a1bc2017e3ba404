use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::index::IndexType;
use crate::traverse::TreeShape;
use crate::tree::IntervalTree;

/// Write `shape` as a Graphviz digraph. Edges are labelled `L` or `R`.
pub fn write_dot<S, W>(shape: &S, out: &mut W) -> io::Result<()>
where
    S: TreeShape,
    S::Bound: Display,
    W: Write,
{
    writeln!(out, "digraph {{")?;
    writeln!(out, "    node [shape=box];")?;
    if let Some(root) = shape.root() {
        let mut next_id = 0;
        let _root_id = write_node(shape, root, out, &mut next_id)?;
    }
    writeln!(out, "}}")
}

/// Writes the subtree of `x` and returns the id assigned to `x`.
fn write_node<S, W>(shape: &S, x: S::Index, out: &mut W, next_id: &mut usize) -> io::Result<usize>
where
    S: TreeShape,
    S::Bound: Display,
    W: Write,
{
    let id = *next_id;
    *next_id += 1;
    if let Some((interval, max)) = shape.value(x) {
        writeln!(
            out,
            "    n{id} [label=\"[{}, {}]\\nmax={}\"];",
            interval.start, interval.end, max
        )?;
    }
    let (left, right) = shape.children(x);
    for (child, side) in [(left, "L"), (right, "R")] {
        if let Some(child) = child {
            let child_id = write_node(shape, child, out, next_id)?;
            writeln!(out, "    n{id} -> n{child_id} [label=\"{side}\"];")?;
        }
    }
    Ok(id)
}

impl<T, Ix> IntervalTree<T, Ix>
where
    T: Ord + Display,
    Ix: IndexType,
{
    /// Draw the tree into a Graphviz dot file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be created or written
    pub fn draw(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        write_dot(self, &mut out)?;
        out.flush()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dot_output_links_children() {
        let tree = IntervalTree::<i32>::from_bounds([(1, 2), (3, 9), (5, 6)]).unwrap();
        let mut out = Vec::new();
        write_dot(&tree, &mut out).unwrap();
        let dot = String::from_utf8(out).unwrap();
        assert!(dot.starts_with("digraph {"));
        assert!(dot.contains("n0 [label=\"[3, 9]\\nmax=9\"];"));
        assert!(dot.contains("n0 -> n1 [label=\"L\"];"));
        assert!(dot.contains("n0 -> n2 [label=\"R\"];"));
    }

    #[test]
    fn draw_empty_tree_is_ok() {
        let tree = IntervalTree::<i32>::default();
        let path = std::env::temp_dir().join(format!(
            "static_interval_tree_empty_{}.dot",
            std::process::id()
        ));
        tree.draw(&path).unwrap();
        let dot = std::fs::read_to_string(&path).unwrap();
        assert_eq!(dot, "digraph {\n    node [shape=box];\n}\n");
        let _ignore = std::fs::remove_file(path);
    }
}
