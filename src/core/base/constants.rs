use super::types::Float;

pub const FLOAT_ONE_MINUS_EPSILON: f32 = 0.99999994;
pub const ONE_MINUS_EPSILON: Float = FLOAT_ONE_MINUS_EPSILON;

pub const PI: Float = std::f32::consts::PI; //3.14159265358979323846;
pub const INV_PI: Float = std::f32::consts::FRAC_1_PI; //0.31830988618379067154;
pub const PI_OVER_2: Float = PI / 2.0; //1.57079632679489661923
pub const PI_OVER_4: Float = PI / 4.0; //0.78539816339744830961

/// Default lower bound of the parametric ray range, keeps secondary rays
/// from re-hitting the surface they were spawned on.
pub const RAY_EPSILON: Float = 1e-4;

/// Hit distances closer together than this are treated as a tie.
pub const TIE_EPSILON: Float = 1e-6;

/// Triangles whose area is below this are skipped by the intersector.
pub const DEGENERATE_AREA: Float = 1e-12;
