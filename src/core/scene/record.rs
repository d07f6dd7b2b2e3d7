use crate::core::base::*;
use crate::core::error::*;
use crate::core::spectrum::*;

use bytemuck::{Pod, Zeroable};

/// Tag values of the `kind` field shared by every record.
///
/// `0` is reserved and, like any tag not listed here, decodes to
/// [`Primitive::Unknown`].
pub const PRIMITIVE_UNKNOWN: i32 = 0;
pub const PRIMITIVE_TRIANGLE: i32 = 1;
pub const PRIMITIVE_SPHERE: i32 = 2;

/// Every record occupies the same number of bytes so the scene is a plain
/// array that a compute stage can index directly.
pub const RECORD_STRIDE: usize = 64;

/// One slot of the flat scene buffer: a tag followed by an opaque payload.
///
/// The payload is only meaningful through the typed view selected by `kind`
/// (see [`PrimitiveRecord::primitive`]).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct PrimitiveRecord {
    pub kind: i32,
    pub payload: [u32; 15],
}

/// Triangle payload. Counter-clockwise winding (seen from the front)
/// defines the normal `(v1 - v0) x (v2 - v0)`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct TriangleRecord {
    pub kind: i32,
    pub vertices: [[f32; 3]; 3],
    pub color: [f32; 3],
    pub reflectiveness: f32,
    pub emits: i32,
    pub _pad: i32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct SphereRecord {
    pub kind: i32,
    pub center: [f32; 3],
    pub radius: f32,
    pub color: [f32; 3],
    pub reflectiveness: f32,
    pub emits: i32,
    pub _pad: [i32; 6],
}

const _: () = assert!(std::mem::size_of::<PrimitiveRecord>() == RECORD_STRIDE);
const _: () = assert!(std::mem::size_of::<TriangleRecord>() == RECORD_STRIDE);
const _: () = assert!(std::mem::size_of::<SphereRecord>() == RECORD_STRIDE);

/// Shading attributes shared by every primitive kind.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Material {
    pub color: Spectrum,
    pub reflectiveness: Float,
    pub emits: bool,
}

impl Material {
    /// Radiance leaving an emitting surface; zero when it does not emit.
    pub fn emission(&self) -> Spectrum {
        if self.emits {
            return self.color;
        } else {
            return Spectrum::zero();
        }
    }
}

/// Read-only typed view of a record, resolved from its tag.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Primitive<'a> {
    Triangle(&'a TriangleRecord),
    Sphere(&'a SphereRecord),
    Unknown(i32),
}

impl<'a> Primitive<'a> {
    pub fn material(&self) -> Option<Material> {
        match self {
            Primitive::Triangle(t) => Some(t.material()),
            Primitive::Sphere(s) => Some(s.material()),
            Primitive::Unknown(_) => None,
        }
    }
}

impl PrimitiveRecord {
    /// A record carrying only a tag, for kinds this build does not know.
    pub fn unknown(kind: i32) -> Self {
        PrimitiveRecord {
            kind,
            payload: [0; 15],
        }
    }

    pub fn primitive(&self) -> Primitive<'_> {
        match self.kind {
            PRIMITIVE_TRIANGLE => Primitive::Triangle(bytemuck::cast_ref(self)),
            PRIMITIVE_SPHERE => Primitive::Sphere(bytemuck::cast_ref(self)),
            kind => Primitive::Unknown(kind),
        }
    }
}

impl From<TriangleRecord> for PrimitiveRecord {
    fn from(value: TriangleRecord) -> Self {
        bytemuck::cast(value)
    }
}

impl From<SphereRecord> for PrimitiveRecord {
    fn from(value: SphereRecord) -> Self {
        bytemuck::cast(value)
    }
}

fn encode_emits(emits: bool) -> i32 {
    if emits {
        1
    } else {
        0
    }
}

fn validate_material(
    color: &[f32; 3],
    reflectiveness: f32,
    emits: i32,
) -> Result<(), InvariantViolation> {
    for (channel, value) in color.iter().enumerate() {
        if !in_unit_interval(*value) {
            return Err(InvariantViolation::ColorOutOfRange {
                channel,
                value: *value,
            });
        }
    }
    if !in_unit_interval(reflectiveness) {
        return Err(InvariantViolation::ReflectivenessOutOfRange(reflectiveness));
    }
    if emits != 0 && emits != 1 {
        return Err(InvariantViolation::InvalidEmitsFlag(emits));
    }
    return Ok(());
}

impl TriangleRecord {
    pub fn new(vertices: &[Point3f; 3], material: &Material) -> Self {
        TriangleRecord {
            kind: PRIMITIVE_TRIANGLE,
            vertices: [
                vertices[0].to_array(),
                vertices[1].to_array(),
                vertices[2].to_array(),
            ],
            color: material.color.to_rgb(),
            reflectiveness: material.reflectiveness,
            emits: encode_emits(material.emits),
            _pad: 0,
        }
    }

    #[inline]
    pub fn vertex(&self, i: usize) -> Point3f {
        return Point3f::from(self.vertices[i]);
    }

    pub fn material(&self) -> Material {
        Material {
            color: Spectrum::from(self.color),
            reflectiveness: self.reflectiveness,
            emits: self.emits != 0,
        }
    }

    pub fn validate(&self) -> Result<(), InvariantViolation> {
        for i in 0..3 {
            if !self.vertex(i).is_finite() {
                return Err(InvariantViolation::NonFinite { what: "vertex" });
            }
        }
        return validate_material(&self.color, self.reflectiveness, self.emits);
    }
}

impl SphereRecord {
    pub fn new(center: &Point3f, radius: Float, material: &Material) -> Self {
        SphereRecord {
            kind: PRIMITIVE_SPHERE,
            center: center.to_array(),
            radius,
            color: material.color.to_rgb(),
            reflectiveness: material.reflectiveness,
            emits: encode_emits(material.emits),
            _pad: [0; 6],
        }
    }

    #[inline]
    pub fn center(&self) -> Point3f {
        return Point3f::from(self.center);
    }

    pub fn material(&self) -> Material {
        Material {
            color: Spectrum::from(self.color),
            reflectiveness: self.reflectiveness,
            emits: self.emits != 0,
        }
    }

    pub fn validate(&self) -> Result<(), InvariantViolation> {
        if !self.center().is_finite() {
            return Err(InvariantViolation::NonFinite { what: "center" });
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(InvariantViolation::NonPositiveRadius(self.radius));
        }
        return validate_material(&self.color, self.reflectiveness, self.emits);
    }
}
