use super::cube::*;
use super::operation::*;
use super::sphere::*;
use super::triangle::*;
use crate::core::scene::*;

/// Anything that can be placed into a scene.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneNode {
    Triangle(Triangle),
    Sphere(Sphere),
    Cube(Cube),
    Group(Group),
    /// A pre-encoded record, passed through untouched (e.g. a tag this build
    /// does not know).
    Raw(PrimitiveRecord),
}

impl SceneNode {
    fn append_records(&self, out: &mut Vec<PrimitiveRecord>) {
        match self {
            SceneNode::Triangle(t) => out.push(t.record()),
            SceneNode::Sphere(s) => out.push(s.record()),
            SceneNode::Cube(c) => out.extend(c.records()),
            SceneNode::Group(g) => {
                for node in g.nodes.iter() {
                    node.append_records(out);
                }
            }
            SceneNode::Raw(r) => out.push(*r),
        }
    }
}

impl Transformable for SceneNode {
    fn apply(&self, op: &Operation) -> Self {
        match self {
            SceneNode::Triangle(t) => SceneNode::Triangle(t.apply(op)),
            SceneNode::Sphere(s) => SceneNode::Sphere(s.apply(op)),
            SceneNode::Cube(c) => SceneNode::Cube(c.apply(op)),
            SceneNode::Group(g) => SceneNode::Group(g.apply(op)),
            SceneNode::Raw(r) => SceneNode::Raw(*r),
        }
    }
}

impl From<Triangle> for SceneNode {
    fn from(value: Triangle) -> Self {
        SceneNode::Triangle(value)
    }
}

impl From<Sphere> for SceneNode {
    fn from(value: Sphere) -> Self {
        SceneNode::Sphere(value)
    }
}

impl From<Cube> for SceneNode {
    fn from(value: Cube) -> Self {
        SceneNode::Cube(value)
    }
}

impl From<Group> for SceneNode {
    fn from(value: Group) -> Self {
        SceneNode::Group(value)
    }
}

impl From<PrimitiveRecord> for SceneNode {
    fn from(value: PrimitiveRecord) -> Self {
        SceneNode::Raw(value)
    }
}

/// Ordered collection of renderables; edits apply to every member.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    pub nodes: Vec<SceneNode>,
}

impl Group {
    pub fn new() -> Self {
        Group { nodes: Vec::new() }
    }

    pub fn add<T: Into<SceneNode>>(&mut self, node: T) {
        self.nodes.push(node.into());
    }

    pub fn with<T: Into<SceneNode>>(mut self, node: T) -> Self {
        self.add(node);
        self
    }

    /// Flattens the tree into records, in insertion order.
    pub fn records(&self) -> Vec<PrimitiveRecord> {
        let mut out = Vec::new();
        for node in self.nodes.iter() {
            node.append_records(&mut out);
        }
        return out;
    }

    pub fn build(&self) -> Result<SceneBuffer, crate::core::error::SceneLoadError> {
        return SceneBuffer::new(self.records());
    }
}

impl Transformable for Group {
    fn apply(&self, op: &Operation) -> Self {
        Group {
            nodes: self.nodes.iter().map(|n| n.apply(op)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::base::*;
    use crate::core::spectrum::*;

    fn white() -> Material {
        Material {
            color: Spectrum::one(),
            reflectiveness: 0.0,
            emits: false,
        }
    }

    #[test]
    fn test_001() {
        let group = Group::new()
            .with(Sphere::new(Point3f::zero(), 1.0, white()))
            .with(Cube::new(&white()))
            .with(PrimitiveRecord::unknown(9));
        let records = group.records();
        assert_eq!(records.len(), 14);
        assert_eq!(records[0].kind, PRIMITIVE_SPHERE);
        assert_eq!(records[1].kind, PRIMITIVE_TRIANGLE);
        assert_eq!(records[13].kind, 9);
    }

    #[test]
    fn test_002() {
        let inner = Group::new().with(Sphere::new(Point3f::zero(), 1.0, white()));
        let group = Group::new()
            .with(inner)
            .translate_on(2.0, Axis::Z)
            .color(&Spectrum::new(0.2, 0.4, 0.6));
        let scene = group.build().unwrap();
        match scene.intersectable_at(0) {
            Some(Primitive::Sphere(s)) => {
                assert_eq!(s.center(), Point3f::new(0.0, 0.0, 2.0));
                assert_eq!(s.color, [0.2, 0.4, 0.6]);
            }
            other => panic!("unexpected primitive {:?}", other),
        }
    }
}
