use crate::scene::{rotate_zyx, Backface, SceneGraph};
use glam::{Vec2, Vec3};
use smallvec::SmallVec;

/// Root transform of the illustration: whole-scene rotation and zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct View {
    pub rotate: Vec3,
    pub zoom: f32,
}

impl Default for View {
    fn default() -> Self {
        Self {
            rotate: Vec3::ZERO,
            zoom: 1.0,
        }
    }
}

/// One flat shape in screen space, centred on the canvas origin with y down.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawCommand {
    pub points: SmallVec<[Vec2; 4]>,
    pub color: &'static str,
    /// Line width in screen units; zero means fill only.
    pub stroke: f32,
    pub fill: bool,
    /// Mean view-space z of the outline; larger is nearer.
    pub depth: f32,
}

/// Project every shape of `scene` and order the result back to front.
pub fn project(scene: &SceneGraph, view: &View) -> Vec<DrawCommand> {
    let mut out = Vec::with_capacity(scene.len());
    for (id, node) in scene.iter() {
        if node.is_group() || node.path().is_empty() {
            continue;
        }
        let facing = rotate_zyx(scene.direction_to_world(id, Vec3::Z), view.rotate);
        let color = if facing.z < 0.0 {
            match node.backface {
                Backface::Same => node.color,
                Backface::Hidden => continue,
                Backface::Color(c) => c,
            }
        } else {
            node.color
        };

        let mut depth_sum = 0.0;
        let points = node
            .path()
            .iter()
            .map(|p| {
                let v = rotate_zyx(scene.to_world(id, *p), view.rotate) * view.zoom;
                depth_sum += v.z;
                v.truncate()
            })
            .collect::<SmallVec<[Vec2; 4]>>();
        let depth = depth_sum / points.len() as f32;

        out.push(DrawCommand {
            points,
            color,
            stroke: node.stroke.max(0.0) * view.zoom,
            fill: node.fill,
            depth,
        });
    }
    out.sort_by(|a, b| a.depth.total_cmp(&b.depth));
    out
}
