use pathtrace::accelerators::*;
use pathtrace::core::prelude::*;
use pathtrace::shapes::*;

fn near_equal(a: Float, b: Float, e: Float) -> bool {
    (a - b).abs() < e
}

fn diffuse(c: Float) -> Material {
    Material {
        color: Spectrum::new(c, c, c),
        reflectiveness: 0.0,
        emits: false,
    }
}

fn triangle(z: Float, c: Float) -> Triangle {
    Triangle::new(
        [
            Point3f::new(-1.0, -1.0, z),
            Point3f::new(1.0, -1.0, z),
            Point3f::new(0.0, 1.0, z),
        ],
        diffuse(c),
    )
}

#[test]
fn intersect_triangle_analytic() {
    let scene = Group::new().with(triangle(4.0, 0.5)).build().unwrap();
    for (x, y) in [(0.0, 0.0), (0.5, -0.5), (-0.25, 0.25)] {
        let ray = Ray::new(&Point3f::new(x, y, 0.0), &Vector3f::new(0.0, 0.0, 1.0));
        let hit = *intersect(&ray, &scene).hit().unwrap();
        assert!(near_equal(hit.t, 4.0, 1e-5));
        assert!(near_equal(hit.p.x, x, 1e-5));
        assert!(near_equal(hit.p.y, y, 1e-5));
        assert_eq!(hit.index, 0);
    }
    // Oblique ray: the hit distance scales with 1 / cos(theta)
    let d = Vector3f::new(0.0, 0.1, 1.0).normalize();
    let ray = Ray::new(&Point3f::zero(), &d);
    let hit = *intersect(&ray, &scene).hit().unwrap();
    assert!(near_equal(hit.t, 4.0 / d.z, 1e-4));
}

#[test]
fn intersect_sphere_analytic() {
    let material = diffuse(0.5);
    let scene = Group::new()
        .with(Sphere::new(Point3f::new(0.0, 0.0, 10.0), 2.0, material))
        .build()
        .unwrap();
    let ray = Ray::new(&Point3f::zero(), &Vector3f::new(0.0, 0.0, 1.0));
    let hit = *intersect(&ray, &scene).hit().unwrap();
    assert!(near_equal(hit.t, 8.0, 1e-5));
    assert!(hit.front_face);
    assert!(near_equal(hit.n.z, -1.0, 1e-5));

    // Offset ray: |o_y| = 1 gives t = 10 - sqrt(3)
    let ray = Ray::new(&Point3f::new(0.0, 1.0, 0.0), &Vector3f::new(0.0, 0.0, 1.0));
    let hit = *intersect(&ray, &scene).hit().unwrap();
    assert!(near_equal(hit.t, 10.0 - Float::sqrt(3.0), 1e-4));
}

#[test]
fn intersect_miss() {
    let scene = Group::new()
        .with(triangle(4.0, 0.5))
        .with(Sphere::new(Point3f::new(0.0, 0.0, 10.0), 2.0, diffuse(0.5)))
        .build()
        .unwrap();
    let away = Ray::new(&Point3f::zero(), &Vector3f::new(0.0, 0.0, -1.0));
    assert_eq!(intersect(&away, &scene), Intersection::Miss);
    let beside = Ray::new(&Point3f::new(5.0, 0.0, 0.0), &Vector3f::new(0.0, 0.0, 1.0));
    assert_eq!(intersect(&beside, &scene), Intersection::Miss);
    let short = Ray::with_range(&Point3f::zero(), &Vector3f::new(0.0, 0.0, 1.0), RAY_EPSILON, 3.0);
    assert_eq!(intersect(&short, &scene), Intersection::Miss);
}

#[test]
fn intersect_nearest_wins() {
    let scene = Group::new()
        .with(Sphere::new(Point3f::new(0.0, 0.0, 10.0), 2.0, diffuse(0.1)))
        .with(triangle(6.0, 0.2))
        .with(triangle(4.0, 0.3))
        .with(triangle(5.0, 0.4))
        .build()
        .unwrap();
    let ray = Ray::new(&Point3f::zero(), &Vector3f::new(0.0, 0.0, 1.0));
    let hit = *intersect(&ray, &scene).hit().unwrap();
    assert_eq!(hit.index, 2);
    assert_eq!(hit.material.color, Spectrum::new(0.3, 0.3, 0.3));
}

#[test]
fn intersect_tie_break_is_lowest_index() {
    let scene = Group::new()
        .with(triangle(4.0, 0.1))
        .with(triangle(4.0, 0.9))
        .build()
        .unwrap();
    let reversed = Group::new()
        .with(triangle(4.0, 0.9))
        .with(triangle(4.0, 0.1))
        .build()
        .unwrap();
    let ray = Ray::new(&Point3f::new(0.1, 0.1, 0.0), &Vector3f::new(0.0, 0.0, 1.0));
    for _ in 0..4 {
        assert_eq!(intersect(&ray, &scene).hit().unwrap().index, 0);
        assert_eq!(intersect(&ray, &scene).hit().unwrap().material, diffuse(0.1));
        assert_eq!(intersect(&ray, &reversed).hit().unwrap().material, diffuse(0.9));
    }
}

#[test]
fn intersect_unknown_primitive_is_transparent() {
    let plain = Group::new().with(triangle(4.0, 0.5)).build().unwrap();
    let mixed = Group::new()
        .with(PrimitiveRecord::unknown(0))
        .with(triangle(4.0, 0.5))
        .with(PrimitiveRecord::unknown(77))
        .build()
        .unwrap();
    for (x, y) in [(0.0, 0.0), (0.9, 0.9), (-0.5, -0.9)] {
        let ray = Ray::new(&Point3f::new(x, y, 0.0), &Vector3f::new(0.0, 0.0, 1.0));
        let a = intersect(&ray, &plain);
        let b = intersect(&ray, &mixed);
        match (a, b) {
            (Intersection::Hit(a), Intersection::Hit(b)) => {
                assert_eq!(a.t, b.t);
                assert_eq!(a.n, b.n);
                assert_eq!(a.material, b.material);
                assert_eq!(b.index, 1);
            }
            (Intersection::Miss, Intersection::Miss) => {}
            other => panic!("results differ: {:?}", other),
        }
    }
}

#[test]
fn intersect_degenerate_triangle_is_skipped() {
    let flat = Triangle::new(
        [
            Point3f::new(-1.0, 0.0, 2.0),
            Point3f::new(0.0, 0.0, 2.0),
            Point3f::new(1.0, 0.0, 2.0),
        ],
        diffuse(0.5),
    );
    let scene = Group::new().with(flat).with(triangle(4.0, 0.5)).build().unwrap();
    assert_eq!(scene.warnings().len(), 1);
    let ray = Ray::new(&Point3f::zero(), &Vector3f::new(0.0, 0.0, 1.0));
    let hit = *intersect(&ray, &scene).hit().unwrap();
    assert_eq!(hit.index, 1);
    assert!(hit.t.is_finite());
}

#[test]
fn scene_load_is_atomic() {
    let mut bad = diffuse(0.5);
    bad.reflectiveness = 1.5;
    let err = Group::new()
        .with(triangle(4.0, 0.5))
        .with(Sphere::new(Point3f::zero(), 1.0, bad))
        .build()
        .unwrap_err();
    assert_eq!(err.index, 1);
    assert_eq!(err.violation, InvariantViolation::ReflectivenessOutOfRange(1.5));

    let err = Group::new()
        .with(Sphere::new(Point3f::zero(), 0.0, diffuse(0.5)))
        .build()
        .unwrap_err();
    assert_eq!(err.violation, InvariantViolation::NonPositiveRadius(0.0));
}
