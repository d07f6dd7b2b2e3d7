use super::operation::*;
use super::triangle::*;
use crate::core::base::*;
use crate::core::scene::*;

const CUBE_VERTICES: [[Float; 3]; 8] = [
    [-0.5, -0.5, -0.5],
    [0.5, -0.5, -0.5],
    [-0.5, 0.5, -0.5],
    [0.5, 0.5, -0.5],
    [-0.5, -0.5, 0.5],
    [0.5, -0.5, 0.5],
    [-0.5, 0.5, 0.5],
    [0.5, 0.5, 0.5],
];

// Two triangles per face.
const CUBE_INDICES: [[usize; 3]; 12] = [
    [0, 4, 6],
    [0, 6, 2],
    [1, 3, 7],
    [1, 7, 5],
    [0, 1, 5],
    [0, 5, 4],
    [2, 6, 7],
    [2, 7, 3],
    [0, 2, 3],
    [0, 3, 1],
    [4, 5, 7],
    [4, 7, 6],
];

/// Unit cube centred at the origin, made of 12 triangles.
#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    pub triangles: Vec<Triangle>,
}

impl Cube {
    pub fn new(material: &Material) -> Self {
        let triangles = CUBE_INDICES
            .iter()
            .map(|idx| {
                Triangle::new(
                    [
                        Point3f::from(CUBE_VERTICES[idx[0]]),
                        Point3f::from(CUBE_VERTICES[idx[1]]),
                        Point3f::from(CUBE_VERTICES[idx[2]]),
                    ],
                    *material,
                )
            })
            .collect();
        Cube { triangles }
    }

    pub fn records(&self) -> Vec<PrimitiveRecord> {
        return self.triangles.iter().map(|t| t.record()).collect();
    }
}

impl Transformable for Cube {
    fn apply(&self, op: &Operation) -> Self {
        Cube {
            triangles: self.triangles.iter().map(|t| t.apply(op)).collect(),
        }
    }
}
