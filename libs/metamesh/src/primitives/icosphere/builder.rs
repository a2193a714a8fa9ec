//! Recursive icosahedron subdivision.
//!
//! Each level wraps the previous one: every triangle is split into four and
//! the new edge midpoints are pushed back onto the unit sphere.

use glam::DVec3;
use std::collections::HashMap;

const BASE_FACES: [[u32; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Unit-sphere vertices and outward-wound triangles of one subdivision level.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct IcosphereBuilder {
    pub vertices: Vec<DVec3>,
    pub triangles: Vec<[u32; 3]>,
}

impl IcosphereBuilder {
    /// Level 1: the regular icosahedron.
    pub fn icosahedron() -> Self {
        let t = (1.0 + 5.0_f64.sqrt()) / 2.0;
        let vertices = [
            DVec3::new(-1.0, t, 0.0),
            DVec3::new(1.0, t, 0.0),
            DVec3::new(-1.0, -t, 0.0),
            DVec3::new(1.0, -t, 0.0),
            DVec3::new(0.0, -1.0, t),
            DVec3::new(0.0, 1.0, t),
            DVec3::new(0.0, -1.0, -t),
            DVec3::new(0.0, 1.0, -t),
            DVec3::new(t, 0.0, -1.0),
            DVec3::new(t, 0.0, 1.0),
            DVec3::new(-t, 0.0, -1.0),
            DVec3::new(-t, 0.0, 1.0),
        ]
        .into_iter()
        .map(DVec3::normalize)
        .collect();

        Self {
            vertices,
            triangles: BASE_FACES.to_vec(),
        }
    }

    /// Builds the next level from `previous`.
    pub fn subdivide(previous: IcosphereBuilder) -> Self {
        let IcosphereBuilder {
            mut vertices,
            triangles: previous_triangles,
        } = previous;
        let mut midpoints: HashMap<(u32, u32), u32> = HashMap::new();
        let mut triangles = Vec::with_capacity(previous_triangles.len() * 4);

        let mut midpoint = |a: u32, b: u32| -> u32 {
            let key = if a < b { (a, b) } else { (b, a) };
            *midpoints.entry(key).or_insert_with(|| {
                let mid = (vertices[a as usize] + vertices[b as usize]).normalize();
                vertices.push(mid);
                (vertices.len() - 1) as u32
            })
        };

        for [a, b, c] in previous_triangles {
            let ab = midpoint(a, b);
            let bc = midpoint(b, c);
            let ca = midpoint(c, a);
            triangles.push([a, ab, ca]);
            triangles.push([b, bc, ab]);
            triangles.push([c, ca, bc]);
            triangles.push([ab, bc, ca]);
        }

        Self {
            vertices,
            triangles,
        }
    }

    /// Builds the given level, 1 being the icosahedron itself.
    pub fn level(subdivision: u32) -> Self {
        (1..subdivision).fold(Self::icosahedron(), |builder, _| Self::subdivide(builder))
    }
}
