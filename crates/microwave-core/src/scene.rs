//! Minimal retained scene graph for flat shapes.
//!
//! Nodes live in an arena owned by `SceneGraph`; each node refers to its
//! parent by `NodeId` only, which is enough to compose transforms from leaf to
//! root without any shared ownership.

use crate::constants::ELLIPSE_SEGMENTS;
use glam::Vec3;
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Group,
    Rect { width: f32, height: f32 },
    Ellipse { diameter: f32 },
}

/// What to paint when a shape faces away from the viewer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Backface {
    Same,
    Hidden,
    Color(&'static str),
}

pub type Path = SmallVec<[Vec3; 4]>;

#[derive(Clone, Debug)]
pub struct Node {
    pub shape: Shape,
    pub translate: Vec3,
    /// Euler angles, applied z then y then x.
    pub rotate: Vec3,
    pub stroke: f32,
    pub color: &'static str,
    pub backface: Backface,
    pub fill: bool,
    parent: Option<NodeId>,
    path: Path,
}

impl Node {
    fn with_shape(shape: Shape) -> Self {
        Self {
            shape,
            translate: Vec3::ZERO,
            rotate: Vec3::ZERO,
            stroke: 1.0,
            color: "#333333",
            backface: Backface::Same,
            fill: false,
            parent: None,
            path: build_path(shape),
        }
    }

    pub fn group() -> Self {
        Self::with_shape(Shape::Group)
    }

    pub fn rect() -> Self {
        Self::with_shape(Shape::Rect {
            width: 1.0,
            height: 1.0,
        })
    }

    pub fn ellipse() -> Self {
        Self::with_shape(Shape::Ellipse { diameter: 1.0 })
    }

    pub fn color(mut self, color: &'static str) -> Self {
        self.color = color;
        self
    }

    pub fn backface(mut self, backface: Backface) -> Self {
        self.backface = backface;
        self
    }

    pub fn filled(mut self) -> Self {
        self.fill = true;
        self
    }

    pub fn rotated(mut self, rotate: Vec3) -> Self {
        self.rotate = rotate;
        self
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Local-space outline as of the last `SceneGraph::update_path`.
    pub fn path(&self) -> &[Vec3] {
        &self.path
    }

    pub fn is_group(&self) -> bool {
        matches!(self.shape, Shape::Group)
    }
}

#[derive(Clone, Debug, Default)]
pub struct SceneGraph {
    nodes: Vec<Node>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `node` under `parent` (or at the root) and return its id.
    pub fn add(&mut self, mut node: Node, parent: Option<NodeId>) -> NodeId {
        node.parent = parent;
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Rebuild the outline of `id` after its shape dimensions changed.
    pub fn update_path(&mut self, id: NodeId) {
        let node = &mut self.nodes[id.0];
        node.path = build_path(node.shape);
    }

    /// Carry a local point of `id` through every ancestor's transform.
    pub fn to_world(&self, id: NodeId, point: Vec3) -> Vec3 {
        let mut p = point;
        let mut cursor = Some(id);
        while let Some(c) = cursor {
            let n = &self.nodes[c.0];
            p = rotate_zyx(p, n.rotate) + n.translate;
            cursor = n.parent;
        }
        p
    }

    /// Like `to_world` but for directions: rotations only.
    pub fn direction_to_world(&self, id: NodeId, dir: Vec3) -> Vec3 {
        let mut d = dir;
        let mut cursor = Some(id);
        while let Some(c) = cursor {
            let n = &self.nodes[c.0];
            d = rotate_zyx(d, n.rotate);
            cursor = n.parent;
        }
        d
    }
}

impl Index<NodeId> for SceneGraph {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}

impl IndexMut<NodeId> for SceneGraph {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }
}

fn build_path(shape: Shape) -> Path {
    match shape {
        Shape::Group => Path::new(),
        Shape::Rect { width, height } => {
            let (x, y) = (width * 0.5, height * 0.5);
            smallvec::smallvec![
                Vec3::new(-x, -y, 0.0),
                Vec3::new(x, -y, 0.0),
                Vec3::new(x, y, 0.0),
                Vec3::new(-x, y, 0.0),
            ]
        }
        Shape::Ellipse { diameter } => {
            let r = diameter * 0.5;
            (0..ELLIPSE_SEGMENTS)
                .map(|i| {
                    let a = i as f32 / ELLIPSE_SEGMENTS as f32 * std::f32::consts::TAU;
                    Vec3::new(r * a.cos(), r * a.sin(), 0.0)
                })
                .collect()
        }
    }
}

#[inline]
fn rotate_pair(a: f32, b: f32, angle: f32) -> (f32, f32) {
    let (sin, cos) = angle.sin_cos();
    (a * cos - b * sin, b * cos + a * sin)
}

/// Rotate `v` about z, then y, then x.
#[inline]
pub fn rotate_zyx(v: Vec3, r: Vec3) -> Vec3 {
    let mut out = v;
    if r.z != 0.0 {
        (out.x, out.y) = rotate_pair(out.x, out.y, r.z);
    }
    if r.y != 0.0 {
        (out.x, out.z) = rotate_pair(out.x, out.z, r.y);
    }
    if r.x != 0.0 {
        (out.y, out.z) = rotate_pair(out.y, out.z, r.x);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_inherits_parent_translation() {
        let mut g = SceneGraph::new();
        let mut parent = Node::group();
        parent.translate = Vec3::new(10.0, 0.0, 0.0);
        let p = g.add(parent, None);
        let c = g.add(Node::rect(), Some(p));
        assert_eq!(g[c].parent(), Some(p));
        let w = g.to_world(c, Vec3::ZERO);
        assert!((w - Vec3::new(10.0, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn update_path_follows_shape_changes() {
        let mut g = SceneGraph::new();
        let id = g.add(Node::rect(), None);
        g[id].shape = Shape::Rect {
            width: 20.0,
            height: 10.0,
        };
        assert_eq!(g[id].path()[1], Vec3::new(0.5, -0.5, 0.0));
        g.update_path(id);
        assert_eq!(g[id].path()[1], Vec3::new(10.0, -5.0, 0.0));
    }

    #[test]
    fn quarter_turn_about_y_maps_x_to_z() {
        let v = rotate_zyx(Vec3::X, Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0));
        assert!((v - Vec3::Z).length() < 1e-6);
    }
}
