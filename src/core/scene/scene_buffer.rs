use super::record::*;
use crate::core::base::*;
use crate::core::error::*;

use log::*;

/// Flat, ordered, validated collection of primitive records plus bounding
/// metadata.
///
/// Immutable once built: scene edits construct a new buffer which the render
/// loop swaps in between frames.
#[derive(Debug, Clone)]
pub struct SceneBuffer {
    records: Vec<PrimitiveRecord>,
    world_bound: Bounds3f,
    warnings: Vec<DegenerateGeometryWarning>,
}

impl SceneBuffer {
    /// Validates every record; the first violation aborts the whole load.
    pub fn new(records: Vec<PrimitiveRecord>) -> Result<Self, SceneLoadError> {
        let mut world_bound = Bounds3f::empty();
        let mut warnings = Vec::new();
        let mut n_triangles = 0;
        let mut n_spheres = 0;
        let mut n_unknown = 0;
        for (index, record) in records.iter().enumerate() {
            match record.primitive() {
                Primitive::Triangle(t) => {
                    t.validate()
                        .map_err(|violation| SceneLoadError { index, violation })?;
                    let area = t.area();
                    if area < DEGENERATE_AREA {
                        warnings.push(DegenerateGeometryWarning { index, area });
                    } else {
                        world_bound = world_bound.union(&t.world_bound());
                    }
                    n_triangles += 1;
                }
                Primitive::Sphere(s) => {
                    s.validate()
                        .map_err(|violation| SceneLoadError { index, violation })?;
                    world_bound = world_bound.union(&s.world_bound());
                    n_spheres += 1;
                }
                Primitive::Unknown(kind) => {
                    debug!("primitive {}: unknown tag {}, it will never be hit", index, kind);
                    n_unknown += 1;
                }
            }
        }
        for w in warnings.iter() {
            warn!("{}", w);
        }
        info!(
            "Loaded scene: {} triangles, {} spheres, {} unknown records",
            n_triangles, n_spheres, n_unknown
        );
        Ok(SceneBuffer {
            records,
            world_bound,
            warnings,
        })
    }

    /// Decodes a buffer laid out as consecutive `RECORD_STRIDE`-byte records.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TracerError> {
        if bytes.len() % RECORD_STRIDE != 0 {
            return Err(TracerError::from(LayoutError::BadLength {
                len: bytes.len(),
                stride: RECORD_STRIDE,
            }));
        }
        let records: Vec<PrimitiveRecord> = bytemuck::pod_collect_to_vec(bytes);
        return Ok(Self::new(records)?);
    }

    /// The scene exactly as it is handed to a compute stage.
    pub fn as_bytes(&self) -> &[u8] {
        return bytemuck::cast_slice(&self.records);
    }

    pub fn count(&self) -> usize {
        return self.records.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.records.is_empty();
    }

    pub fn intersectable_at(&self, index: usize) -> Option<Primitive<'_>> {
        return self.records.get(index).map(|r| r.primitive());
    }

    pub fn primitives(&self) -> impl Iterator<Item = Primitive<'_>> {
        return self.records.iter().map(|r| r.primitive());
    }

    pub fn records(&self) -> &[PrimitiveRecord] {
        return &self.records;
    }

    /// Bound of every intersectable primitive; empty if there is none.
    pub fn world_bound(&self) -> Bounds3f {
        return self.world_bound;
    }

    pub fn warnings(&self) -> &[DegenerateGeometryWarning] {
        return &self.warnings;
    }
}
