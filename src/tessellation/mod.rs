//! Polygon triangulation via constrained Delaunay.
//!
//! Outlines (and hole rings) are inserted as constraint loops; interior faces
//! are found with an even-odd flood fill from the outer face, so holes fall
//! out of the same parity rule that governs point containment.

use std::collections::{HashMap, HashSet, VecDeque};

use spade::handles::FixedFaceHandle;
use spade::{
    ConstrainedDelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation,
};

use crate::error::{Result, TessellationError};
use crate::geometry::TriangleSolid;
use crate::math::Point;

type Cdt = ConstrainedDelaunayTriangulation<SpadePoint2<f64>>;

/// Vertex count for a circle approximated at `quality`.
///
/// Doubles per level from a triangle at quality 1 (hexagon at 2, 12-gon
/// at 3), clamped below at 3.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn circle_vertex_count(quality: f64) -> usize {
    let n = (3.0 * 2.0_f64.powf(quality - 1.0)).round();
    (n.max(3.0)) as usize
}

/// Sample count per curve segment at `quality`.
///
/// Doubles per level from 4 samples at quality 1, clamped below at 2.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn curve_sample_count(quality: f64) -> usize {
    let n = (4.0 * 2.0_f64.powf(quality - 1.0)).round();
    (n.max(2.0)) as usize
}

/// Triangulates a simple polygon ring.
///
/// Rings with fewer than 3 vertices triangulate to nothing.
///
/// # Errors
///
/// Returns an error if a vertex cannot be inserted into the triangulation
/// (non-finite or out-of-range coordinates).
pub fn triangulate_polygon(points: &[Point]) -> Result<Vec<TriangleSolid>> {
    triangulate_with_holes(points, &[])
}

/// Triangulates a polygon ring with hole rings punched out.
///
/// Hole rings with fewer than 3 vertices are ignored. A ring nested inside a
/// hole flips back to solid, matching even-odd filling.
///
/// # Errors
///
/// Returns an error if a vertex cannot be inserted into the triangulation.
pub fn triangulate_with_holes(
    exterior: &[Point],
    holes: &[Vec<Point>],
) -> Result<Vec<TriangleSolid>> {
    if exterior.len() < 3 {
        return Ok(Vec::new());
    }

    let mut cdt = Cdt::new();
    insert_constraint_loop(&mut cdt, exterior)?;
    for hole in holes {
        if hole.len() >= 3 {
            insert_constraint_loop(&mut cdt, hole)?;
        }
    }

    let interior = classify_interior_faces(&cdt);

    let mut triangles = Vec::new();
    for face in cdt.inner_faces() {
        if !interior.contains(&face.fix().index()) {
            continue;
        }
        let [a, b, c] = face.vertices().map(|v| {
            let pos = v.position();
            Point::new(pos.x, pos.y)
        });
        triangles.push(TriangleSolid::new(a, b, c));
    }
    Ok(triangles)
}

fn insert_constraint_loop(cdt: &mut Cdt, points: &[Point]) -> Result<()> {
    let mut handles = Vec::with_capacity(points.len());
    for p in points {
        let h = cdt
            .insert(SpadePoint2::new(p.x, p.y))
            .map_err(|e: InsertionError| TessellationError::Failed(format!("CDT insert: {e}")))?;
        handles.push(h);
    }

    for i in 0..handles.len() {
        let from = handles[i];
        let to = handles[(i + 1) % handles.len()];
        if from != to {
            cdt.add_constraint(from, to);
        }
    }

    Ok(())
}

/// Classifies which inner faces of the CDT lie inside the filled region.
///
/// Starts from faces adjacent to the outer (infinite) face at depth 0. Each
/// time a constraint edge is crossed, depth increments. Odd depth = interior.
fn classify_interior_faces(cdt: &Cdt) -> HashSet<usize> {
    let mut interior = HashSet::new();
    let mut depth_map: HashMap<usize, u32> = HashMap::new();
    let mut queue: VecDeque<(FixedFaceHandle<spade::handles::InnerTag>, u32)> = VecDeque::new();

    let outer_fix = cdt.outer_face().fix();

    // Seed: inner faces adjacent to the outer face via directed edges
    for edge in cdt.directed_edges() {
        if edge.face().fix() == outer_fix {
            let rev_face = edge.rev().face();
            if let Some(inner) = rev_face.as_inner() {
                let idx = inner.fix().index();
                if depth_map.contains_key(&idx) {
                    continue;
                }
                let depth = u32::from(cdt.is_constraint_edge(edge.as_undirected().fix()));
                depth_map.insert(idx, depth);
                if depth % 2 == 1 {
                    interior.insert(idx);
                }
                queue.push_back((inner.fix(), depth));
            }
        }
    }

    // BFS flood-fill
    while let Some((face_fix, depth)) = queue.pop_front() {
        let face = cdt.face(face_fix);
        for edge in face.adjacent_edges() {
            let neighbor = edge.rev().face();
            if let Some(inner_neighbor) = neighbor.as_inner() {
                let n_idx = inner_neighbor.fix().index();
                if depth_map.contains_key(&n_idx) {
                    continue;
                }
                let new_depth = if cdt.is_constraint_edge(edge.as_undirected().fix()) {
                    depth + 1
                } else {
                    depth
                };
                depth_map.insert(n_idx, new_depth);
                if new_depth % 2 == 1 {
                    interior.insert(n_idx);
                }
                queue.push_back((inner_neighbor.fix(), new_depth));
            }
        }
    }

    interior
}
