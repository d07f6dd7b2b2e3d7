use super::frame_stats::*;
use crate::core::base::*;
use crate::core::camera::*;
use crate::core::error::*;
use crate::core::film::*;
use crate::core::options::*;
use crate::core::sampler::*;
use crate::core::scene::*;
use crate::core::spectrum::*;
use crate::integrators::*;

use log::*;
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

fn validate_radiance_result(l: Spectrum, pixel: &Point2i) -> Option<Spectrum> {
    if !l.is_valid() {
        error!(
            "Not-a-number or infinite radiance value returned for pixel ({}, {}). Setting to black.",
            pixel.x, pixel.y
        );
        return None;
    }
    if l.y() < -1e-5 {
        error!(
            "Negative luminance value, {}, returned for pixel ({}, {}). Setting to black.",
            l.y(),
            pixel.x,
            pixel.y
        );
        return None;
    }
    return Some(l);
}

/// Drives one progressive render: traces a frame per call and folds it into
/// the accumulated image.
///
/// The scene is shared read-only with the worker threads for the duration of
/// a frame; [`RenderLoop::replace_scene`] takes `&mut self`, so a swap can
/// only land between frames.
pub struct RenderLoop {
    scene: Arc<SceneBuffer>,
    options: RenderOptions,
    integrator: PathIntegrator,
    accumulator: FrameAccumulator,
    camera: Option<Camera>,
    image: Arc<[Spectrum]>,
    cancel: Arc<AtomicBool>,
}

impl RenderLoop {
    pub fn new(scene: Arc<SceneBuffer>, options: RenderOptions) -> Self {
        let integrator = PathIntegrator::new(options.max_depth, &options.background());
        let accumulator = FrameAccumulator::new(0, 0, options.out_of_order);
        RenderLoop {
            scene,
            options,
            integrator,
            accumulator,
            camera: None,
            image: Arc::from(Vec::new()),
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn options(&self) -> &RenderOptions {
        return &self.options;
    }

    pub fn scene(&self) -> Arc<SceneBuffer> {
        return self.scene.clone();
    }

    /// Installs a new scene for the next frame and drops the accumulated
    /// history, which no longer matches it.
    pub fn replace_scene(&mut self, scene: Arc<SceneBuffer>) {
        info!("Replacing scene ({} records -> {} records)", self.scene.count(), scene.count());
        self.scene = scene;
        self.reset();
    }

    /// Clears the accumulated history; the next frame starts a new average.
    pub fn reset(&mut self) {
        self.accumulator.reset();
        self.image = Arc::from(vec![Spectrum::zero(); self.image.len()]);
    }

    /// Flag shared with other threads. Setting it abandons the frame in
    /// flight; the flag is cleared once that frame has been discarded.
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        return self.cancel.clone();
    }

    /// Last committed image, row-major. Never observes a partial frame.
    pub fn image(&self) -> Arc<[Spectrum]> {
        return self.image.clone();
    }

    pub fn width(&self) -> u32 {
        return self.accumulator.width();
    }

    pub fn height(&self) -> u32 {
        return self.accumulator.height();
    }

    /// Last committed image as interleaved RGB.
    pub fn to_rgb(&self) -> Vec<Float> {
        return self.image.iter().flat_map(|s| s.to_rgb()).collect();
    }

    fn trace_pixel(&self, camera: &Camera, uniforms: &Uniforms, p: &Point2i) -> PathSample {
        let sampler = PathSampler::new(p, uniforms.frame_number);
        let offset = if self.options.jitter {
            sampler.camera().get_2d()
        } else {
            Point2f::new(0.5, 0.5)
        };
        let mut ray = camera.generate_ray(
            &CameraSample::new(p, &offset),
            uniforms.width,
            uniforms.height,
        );
        ray.t_min = self.options.t_min;
        return self.integrator.li(&ray, &self.scene, &sampler);
    }

    /// Traces every pixel for `uniforms.frame_number` and commits the frame.
    ///
    /// History is dropped first if the resolution or the camera changed.
    /// Nothing is committed when the frame is cancelled or rejected by the
    /// accumulator.
    pub fn render_frame(&mut self, uniforms: &Uniforms) -> Result<FrameStats, TracerError> {
        let (width, height) = (uniforms.width, uniforms.height);
        if width == 0 || height == 0 {
            return Err(TracerError::InvalidResolution { width, height });
        }
        if width != self.accumulator.width() || height != self.accumulator.height() {
            debug!("Resizing accumulation buffer to {}x{}", width, height);
            self.accumulator.resize(width, height);
            self.image = Arc::from(vec![Spectrum::zero(); uniforms.pixel_count()]);
        } else if self.camera.is_some_and(|c| c != uniforms.camera) {
            debug!("Camera moved, dropping accumulated history");
            self.reset();
        }
        self.camera = Some(uniforms.camera);

        let camera = uniforms.camera;
        let mut samples = vec![Spectrum::zero(); uniforms.pixel_count()];
        let stats = {
            let this = &*self;
            let cancel = this.cancel.as_ref();
            samples
                .par_chunks_mut(width as usize)
                .enumerate()
                .map(|(y, row)| {
                    let mut stats = FrameStats::new(uniforms.frame_number);
                    if cancel.load(Ordering::Relaxed) {
                        return stats;
                    }
                    for (x, out) in row.iter_mut().enumerate() {
                        let p = Point2i::new(x as i32, y as i32);
                        let sample = this.trace_pixel(&camera, uniforms, &p);
                        stats.record(&sample);
                        *out = match validate_radiance_result(sample.radiance, &p) {
                            Some(l) => l,
                            None => {
                                stats.rejected += 1;
                                Spectrum::zero()
                            }
                        };
                    }
                    stats
                })
                .reduce(|| FrameStats::new(uniforms.frame_number), |a, b| a.merge(&b))
        };

        if self.cancel.swap(false, Ordering::AcqRel) {
            info!("Frame {} cancelled, discarding its samples", uniforms.frame_number);
            return Err(TracerError::Cancelled(uniforms.frame_number));
        }

        self.accumulator.accumulate_frame(&samples, uniforms.frame_number)?;
        self.image = Arc::from(self.accumulator.estimates());
        debug!("{}", stats);
        return Ok(stats);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backdrop(color: &Spectrum) -> Arc<SceneBuffer> {
        let sphere = SphereRecord::new(
            &Point3f::new(0.0, 0.0, 0.0),
            100.0,
            &Material {
                color: *color,
                reflectiveness: 0.0,
                emits: true,
            },
        );
        Arc::new(SceneBuffer::new(vec![PrimitiveRecord::from(sphere)]).unwrap())
    }

    fn uniforms(frame_number: u32) -> Uniforms {
        let camera = Camera::new(&Point3f::zero(), &Vector3f::new(0.5, 0.5, 1.0));
        Uniforms::new(4, 3, frame_number, &camera)
    }

    #[test]
    fn test_001() {
        let c = Spectrum::new(0.25, 0.5, 0.75);
        let mut r = RenderLoop::new(backdrop(&c), RenderOptions::default());
        let stats = r.render_frame(&uniforms(0)).unwrap();
        assert_eq!(stats.pixels, 12);
        assert_eq!(stats.emitted, 12);
        assert_eq!(r.width(), 4);
        assert!(r.image().iter().all(|s| *s == c));
        assert_eq!(r.to_rgb().len(), 36);
    }

    #[test]
    fn test_002() {
        let mut r = RenderLoop::new(backdrop(&Spectrum::one()), RenderOptions::default());
        r.render_frame(&uniforms(0)).unwrap();
        let before = r.image();
        r.cancel_handle().store(true, Ordering::SeqCst);
        let err = r.render_frame(&uniforms(1)).unwrap_err();
        assert!(matches!(err, TracerError::Cancelled(1)));
        assert_eq!(&*r.image(), &*before);
        // The flag is consumed by the discarded frame.
        assert!(r.render_frame(&uniforms(1)).is_ok());
    }

    #[test]
    fn test_003() {
        let mut r = RenderLoop::new(backdrop(&Spectrum::one()), RenderOptions::default());
        let err = r.render_frame(&Uniforms::new(0, 4, 0, &uniforms(0).camera)).unwrap_err();
        assert!(matches!(err, TracerError::InvalidResolution { width: 0, height: 4 }));

        r.render_frame(&uniforms(0)).unwrap();
        r.render_frame(&uniforms(1)).unwrap();
        let err = r.render_frame(&uniforms(1)).unwrap_err();
        assert!(matches!(err, TracerError::Accumulation(AccumulationError::OutOfOrder { .. })));

        let red = Spectrum::new(1.0, 0.0, 0.0);
        r.replace_scene(backdrop(&red));
        r.render_frame(&uniforms(2)).unwrap();
        assert!(r.image().iter().all(|s| *s == red));
    }
}
