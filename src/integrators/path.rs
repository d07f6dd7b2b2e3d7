use crate::accelerators::*;
use crate::core::base::*;
use crate::core::geometry::*;
use crate::core::sampler::*;
use crate::core::sampling::*;
use crate::core::scene::*;
use crate::core::spectrum::*;

/// Why a path stopped.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Termination {
    /// Reached an emitting surface.
    Emitted,
    /// Left the scene; the background term was applied.
    Escaped,
    /// Ran out of bounces without reaching a light.
    DepthExhausted,
}

/// Result of tracing one camera ray.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PathSample {
    pub radiance: Spectrum,
    pub termination: Termination,
    /// Surfaces scattered off before the path ended.
    pub bounces: u32,
}

/// Unidirectional path tracer with emitter-hit termination.
///
/// Lights are only found by hitting them; there is no explicit light
/// sampling. A non-emitting surface reflects specularly with probability
/// `reflectiveness` and diffusely otherwise, attenuating the path by its
/// color.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PathIntegrator {
    pub max_depth: u32,
    pub background: Spectrum,
}

impl PathIntegrator {
    pub fn new(max_depth: u32, background: &Spectrum) -> Self {
        PathIntegrator {
            max_depth,
            background: *background,
        }
    }

    /// Traces with the integrator's own depth limit.
    pub fn li(&self, r: &Ray, scene: &SceneBuffer, sampler: &PathSampler) -> PathSample {
        return self.trace(r, scene, self.max_depth, sampler);
    }

    /// Follows `r` through at most `depth_budget` surface interactions.
    ///
    /// Every random number is drawn from `sampler.bounce(i)` for the i-th
    /// segment, so the result is a pure function of its arguments.
    pub fn trace(
        &self,
        r: &Ray,
        scene: &SceneBuffer,
        depth_budget: u32,
        sampler: &PathSampler,
    ) -> PathSample {
        let mut ray = *r;
        let mut beta = Spectrum::one();
        let mut bounces = 0;
        while bounces < depth_budget {
            let isect = match intersect(&ray, scene) {
                Intersection::Hit(h) => h,
                Intersection::Miss => {
                    return PathSample {
                        radiance: beta * self.background,
                        termination: Termination::Escaped,
                        bounces,
                    };
                }
            };

            let material = isect.material;
            if material.emits {
                return PathSample {
                    radiance: beta * material.emission(),
                    termination: Termination::Emitted,
                    bounces,
                };
            }

            // Choose between the mirror and the diffuse lobe
            let mut s = sampler.bounce(bounces);
            let choice = s.get_1d();
            let wi = if choice < material.reflectiveness {
                ray.d.reflect(&isect.n)
            } else {
                cosine_sample_around(&isect.n, &s.get_2d())
            };

            beta *= material.color;
            if beta.is_black() {
                return PathSample {
                    radiance: Spectrum::zero(),
                    termination: Termination::DepthExhausted,
                    bounces: bounces + 1,
                };
            }
            ray = ray.spawn(&isect.p, &wi.normalize());
            bounces += 1;
        }
        return PathSample {
            radiance: Spectrum::zero(),
            termination: Termination::DepthExhausted,
            bounces,
        };
    }
}
