use pathtrace::core::prelude::*;

fn near_equal(a: Float, b: Float, e: Float) -> bool {
    (a - b).abs() < e
}

#[test]
fn accumulate_running_mean() {
    let mut acc = FrameAccumulator::new(3, 2, OutOfOrderPolicy::Reject);
    let p = Point2i::new(2, 1);
    let mut rng = RNG::new_sequence(17);
    let mut sum = [0.0f64; 3];
    for frame in 0..64u32 {
        let s = Spectrum::new(rng.uniform_float(), rng.uniform_float(), rng.uniform_float());
        for c in 0..3 {
            sum[c] += s[c] as f64;
        }
        let e = acc.accumulate(&p, &s, frame).unwrap();
        let n = (frame + 1) as f64;
        for c in 0..3 {
            assert!(near_equal(e[c], (sum[c] / n) as Float, 1e-5));
        }
    }
}

#[test]
fn accumulate_frame_zero_resets() {
    let mut acc = FrameAccumulator::new(2, 2, OutOfOrderPolicy::Reject);
    for frame in 0..5 {
        let samples = vec![Spectrum::new(frame as Float, 0.0, 1.0); 4];
        acc.accumulate_frame(&samples, frame).unwrap();
    }
    assert!(acc.estimates().iter().all(|e| near_equal(e[0], 2.0, 1e-6)));

    let fresh = vec![Spectrum::new(0.125, 0.25, 0.5); 4];
    acc.accumulate_frame(&fresh, 0).unwrap();
    assert_eq!(acc.estimates(), fresh);
}

#[test]
fn accumulate_out_of_order_rejected() {
    let mut acc = FrameAccumulator::new(1, 1, OutOfOrderPolicy::Reject);
    let p = Point2i::new(0, 0);
    acc.accumulate(&p, &Spectrum::one(), 0).unwrap();
    acc.accumulate(&p, &Spectrum::one(), 1).unwrap();
    acc.accumulate(&p, &Spectrum::one(), 2).unwrap();
    let err = acc.accumulate(&p, &Spectrum::zero(), 1).unwrap_err();
    assert_eq!(
        err,
        AccumulationError::OutOfOrder {
            pixel: p,
            frame_number: 1,
            last_frame: 2
        }
    );
    // History is preserved; later frames keep averaging.
    assert_eq!(acc.estimate(&p), Some(Spectrum::one()));
    assert_eq!(acc.accumulate(&p, &Spectrum::one(), 3).unwrap(), Spectrum::one());
}

#[test]
fn accumulate_out_of_order_reset() {
    let mut acc = FrameAccumulator::new(1, 1, OutOfOrderPolicy::Reset);
    let p = Point2i::new(0, 0);
    acc.accumulate(&p, &Spectrum::one(), 0).unwrap();
    acc.accumulate(&p, &Spectrum::one(), 7).unwrap();
    let half = Spectrum::new(0.5, 0.5, 0.5);
    assert_eq!(acc.accumulate(&p, &half, 2).unwrap(), half);
    // The restarted history is the mean of the samples since the restart.
    let e = acc.accumulate(&p, &Spectrum::one(), 3).unwrap();
    assert!(near_equal(e[0], 0.75, 1e-6));
}

#[test]
fn accumulate_explicit_reset() {
    let mut acc = FrameAccumulator::new(2, 1, OutOfOrderPolicy::Reject);
    acc.accumulate_frame(&[Spectrum::one(), Spectrum::one()], 0).unwrap();
    acc.accumulate_frame(&[Spectrum::one(), Spectrum::one()], 1).unwrap();
    acc.reset();
    assert!(acc.estimates().iter().all(|e| e.is_black()));
    // After a reset any frame number starts a new average.
    let s = Spectrum::new(0.2, 0.2, 0.2);
    acc.accumulate_frame(&[s, s], 1).unwrap();
    assert_eq!(acc.estimates(), vec![s, s]);
}

#[test]
fn accumulate_mean_after_reset() {
    let mut acc = FrameAccumulator::new(2, 1, OutOfOrderPolicy::Reject);
    for frame in 0..5 {
        acc.accumulate_frame(&[Spectrum::one(), Spectrum::one()], frame)
            .unwrap();
    }
    acc.reset();
    let samples = [0.0, 3.0, 6.0, 1.0];
    for (i, v) in samples.iter().enumerate() {
        let s = Spectrum::new(*v, *v, *v);
        acc.accumulate_frame(&[s, s], 5 + i as u32).unwrap();
    }
    let mean = samples.iter().sum::<Float>() / samples.len() as Float;
    for e in acc.estimates() {
        assert!(near_equal(e[0], mean, 1e-6));
    }
}
