use crate::core::base::*;
use crate::core::error::*;
use crate::core::scene::*;
use crate::core::spectrum::palette::*;
use crate::core::spectrum::*;
use crate::shapes::*;

/// Names accepted by [`create_scene`].
pub const SCENE_NAMES: [&str; 4] = ["ring", "redcube", "room", "backdrop"];

fn matte(color: &Spectrum) -> Material {
    Material {
        color: *color,
        reflectiveness: 0.0,
        emits: false,
    }
}

fn cube() -> Cube {
    Cube::new(&matte(&WHITE))
}

/// A ring of blue cubes around the viewer, standing on a wide glowing slab.
pub fn ring_of_cubes() -> Group {
    let mut group = Group::new();
    for i in -10..10 {
        group.add(
            cube()
                .scale_uniform(0.25)
                .translate_on(1.0, Axis::Z)
                .rotate(radians(18.0 * i as Float), Axis::Y)
                .color(&BLUE),
        );
    }
    // light
    group.add(
        cube()
            .scale_on(50.0, Axis::X)
            .scale_on(0.1, Axis::Y)
            .scale_on(50.0, Axis::Z)
            .translate_on(-0.25, Axis::Y)
            .emit(),
    );
    return group;
}

/// A red cube in a closed white room, lit by a tilted glowing cube.
pub fn red_cube_room() -> Group {
    Group::new()
        .with(
            cube()
                .scale_uniform(0.5)
                .rotate(radians(45.0), Axis::Y)
                .translate_on(-0.4, Axis::Y)
                .color(&RED),
        )
        .with(cube().reverse_normals().scale_uniform(1.25))
        .with(
            cube()
                .scale_uniform(0.25)
                .rotate(radians(45.0), Axis::X)
                .rotate(radians(45.0), Axis::Y)
                .rotate(radians(45.0), Axis::Z)
                .translate_on(0.4, Axis::Y)
                .emit(),
        )
        .translate_on(2.0, Axis::Z)
}

fn wall(size: (Float, Float, Float), offset: Float, axis: Axis, color: &Spectrum) -> Cube {
    cube()
        .scale_on(size.0, Axis::X)
        .scale_on(size.1, Axis::Y)
        .scale_on(size.2, Axis::Z)
        .translate_on(offset, axis)
        .color(color)
}

/// A white cube in an open box with red, blue, green and grey walls, lit by
/// a large panel behind the viewer.
pub fn colored_room() -> Group {
    Group::new()
        .with(
            cube()
                .scale_on(50.0, Axis::X)
                .scale_on(50.0, Axis::Y)
                .scale_on(0.1, Axis::Z)
                .translate_on(-2.1, Axis::Z)
                .emit(),
        )
        .with(
            cube()
                .scale_uniform(0.5)
                .rotate(radians(45.0), Axis::Y)
                .translate_on(-0.4, Axis::Y),
        )
        .with(wall((0.01, 1.25, 1.25), -0.625, Axis::X, &RED))
        .with(wall((0.01, 1.25, 1.25), 0.625, Axis::X, &BLUE))
        .with(wall((1.25, 0.01, 1.25), -0.625, Axis::Y, &GREEN))
        .with(wall((1.25, 0.01, 1.25), 0.625, Axis::Y, &WHITE))
        .with(wall((1.25, 1.25, 0.01), 0.625, Axis::Z, &GREY))
        .translate_on(2.0, Axis::Z)
}

/// One large emitting sphere enclosing the viewer; every camera ray sees
/// its color directly.
pub fn emissive_backdrop() -> Group {
    let backdrop = Sphere::new(Point3f::new(0.0, 0.0, 0.0), 100.0, matte(&TEAL)).emit();
    return Group::new().with(backdrop);
}

pub fn create_scene(name: &str) -> Result<Group, TracerError> {
    match name {
        "ring" => Ok(ring_of_cubes()),
        "redcube" => Ok(red_cube_room()),
        "room" => Ok(colored_room()),
        "backdrop" => Ok(emissive_backdrop()),
        _ => Err(TracerError::UnknownScene(String::from(name))),
    }
}

/// Builds and validates a named scene.
pub fn load_scene(name: &str) -> Result<SceneBuffer, TracerError> {
    let group = create_scene(name)?;
    return Ok(group.build()?);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        for name in SCENE_NAMES.iter() {
            let scene = load_scene(name).unwrap();
            assert!(scene.count() > 0);
            assert!(scene.warnings().is_empty());
            assert!(scene.primitives().any(|p| p.material().is_some_and(|m| m.emits)));
        }
        assert!(matches!(load_scene("teapot"), Err(TracerError::UnknownScene(_))));
    }

    #[test]
    fn test_002() {
        assert_eq!(load_scene("ring").unwrap().count(), 21 * 12);
        assert_eq!(load_scene("redcube").unwrap().count(), 3 * 12);
        assert_eq!(load_scene("room").unwrap().count(), 7 * 12);
        assert_eq!(load_scene("backdrop").unwrap().count(), 1);
    }
}
