use crate::animation::FrameOutput;
use crate::constants::{palette::*, DOOR_REST_ANGLE, TURN};
use crate::geometry::{Geometry, Placement};
use crate::projection::{project, DrawCommand, View};
use crate::scene::{Backface, Node, NodeId, SceneGraph, Shape};
use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

/// The microwave's scene graph plus handles to every node that geometry or
/// animation updates touch.
#[derive(Clone, Debug)]
pub struct MicrowaveScene {
    graph: SceneGraph,
    view: View,
    back: NodeId,
    bottom: NodeId,
    top: NodeId,
    left: NodeId,
    right: NodeId,
    control_group: NodeId,
    control_panel: NodeId,
    button_top: NodeId,
    button_bottom: NodeId,
    door_group: NodeId,
    door_panel: NodeId,
    door_glass: NodeId,
}

impl MicrowaveScene {
    pub fn build(geometry: &Geometry) -> Self {
        let mut g = SceneGraph::new();
        let lay_flat = Vec3::new(FRAC_PI_2, 0.0, 0.0);
        let stand_side = Vec3::new(0.0, FRAC_PI_2, 0.0);

        let back = g.add(
            Node::rect()
                .filled()
                .color(INSIDE_LIGHT)
                .backface(Backface::Color(OUTSIDE_DARK)),
            None,
        );
        let bottom = g.add(
            Node::rect()
                .filled()
                .color(INSIDE_LIGHTEST)
                .backface(Backface::Color(OUTSIDE_DARK))
                .rotated(lay_flat),
            None,
        );
        let top = g.add(
            Node::rect()
                .filled()
                .color(OUTSIDE_LIGHT)
                .backface(Backface::Color(INSIDE_DARK))
                .rotated(lay_flat),
            None,
        );
        let left = g.add(
            Node::rect()
                .filled()
                .color(OUTSIDE_LIGHT)
                .backface(Backface::Color(INSIDE_DARK))
                .rotated(stand_side),
            None,
        );
        let right = g.add(
            Node::rect()
                .filled()
                .color(INSIDE_LIGHT)
                .backface(Backface::Color(OUTSIDE_DARK))
                .rotated(stand_side),
            None,
        );

        let control_group = g.add(Node::group(), None);
        let control_panel = g.add(
            Node::rect()
                .filled()
                .color(OUTSIDE_LIGHT)
                .backface(Backface::Hidden),
            Some(control_group),
        );
        let button_top = g.add(
            Node::ellipse().filled().color(DARK_DETAILS),
            Some(control_group),
        );
        let button_bottom = g.add(
            Node::ellipse().filled().color(DARK_DETAILS),
            Some(control_group),
        );

        let door_group = g.add(
            Node::group().rotated(Vec3::new(0.0, DOOR_REST_ANGLE as f32, 0.0)),
            None,
        );
        let door_panel = g.add(
            Node::rect()
                .filled()
                .color(OUTSIDE_LIGHT)
                .backface(Backface::Color(INSIDE_LIGHTEST)),
            Some(door_group),
        );
        let door_glass = g.add(
            Node::rect()
                .filled()
                .color(DARK_DETAILS)
                .backface(Backface::Hidden),
            Some(door_group),
        );

        let mut scene = Self {
            graph: g,
            view: View::default(),
            back,
            bottom,
            top,
            left,
            right,
            control_group,
            control_panel,
            button_top,
            button_bottom,
            door_group,
            door_panel,
            door_glass,
        };
        scene.apply_geometry(geometry);
        scene
    }

    /// Push freshly derived sizes and offsets into the graph and rebuild the
    /// affected outlines.
    pub fn apply_geometry(&mut self, geo: &Geometry) {
        let stroke = geo.stroke as f32;
        for (id, placement) in [
            (self.back, geo.back),
            (self.bottom, geo.bottom),
            (self.top, geo.top),
            (self.left, geo.left),
            (self.right, geo.right),
            (self.control_panel, geo.control_panel),
            (self.door_panel, geo.door_panel),
            (self.door_glass, geo.door_glass),
        ] {
            self.place_rect(id, placement, stroke);
        }

        self.graph[self.control_group].translate = geo.control_group.as_vec3();
        self.graph[self.door_group].translate = geo.door_group.as_vec3();

        for (id, at) in [
            (self.button_top, geo.button_top),
            (self.button_bottom, geo.button_bottom),
        ] {
            let node = &mut self.graph[id];
            node.shape = Shape::Ellipse {
                diameter: geo.button_diameter as f32,
            };
            node.stroke = stroke;
            node.translate = at.as_vec3();
            self.graph.update_path(id);
        }
    }

    fn place_rect(&mut self, id: NodeId, p: Placement, stroke: f32) {
        let node = &mut self.graph[id];
        node.shape = Shape::Rect {
            width: p.width as f32,
            height: p.height as f32,
        };
        node.stroke = stroke;
        node.translate = p.translate.as_vec3();
        self.graph.update_path(id);
    }

    /// Write one frame's transforms into the live fields.
    pub fn apply_frame(&mut self, frame: &FrameOutput) {
        // the spin target grows without bound; wrap before narrowing to f32
        self.view.rotate = Vec3::new(
            frame.rotation.x.rem_euclid(TURN) as f32,
            frame.rotation.y.rem_euclid(TURN) as f32,
            0.0,
        );
        self.view.zoom = frame.zoom as f32;
        self.graph[self.door_group].rotate.y = frame.door_angle as f32;
    }

    pub fn render(&self) -> Vec<DrawCommand> {
        project(&self.graph, &self.view)
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    pub fn door_group(&self) -> NodeId {
        self.door_group
    }

    pub fn door_glass(&self) -> NodeId {
        self.door_glass
    }

    pub fn back(&self) -> NodeId {
        self.back
    }
}
