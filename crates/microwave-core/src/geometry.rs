//! Derived sizes and offsets of every microwave part.

use crate::constants::*;
use crate::state::Dimensions;
use glam::DVec3;

/// Size and placement of one flat part, relative to its parent node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub width: f64,
    pub height: f64,
    pub translate: DVec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    pub stroke: f64,
    pub back: Placement,
    pub bottom: Placement,
    pub top: Placement,
    pub left: Placement,
    pub right: Placement,
    /// Origin of the control group (panel plus buttons) on the front face.
    pub control_group: DVec3,
    pub control_panel: Placement,
    pub button_diameter: f64,
    pub button_top: DVec3,
    pub button_bottom: DVec3,
    /// Hinge of the door group, at the front-left edge.
    pub door_group: DVec3,
    pub door_panel: Placement,
    pub door_glass: Placement,
}

impl Geometry {
    pub fn from_dimensions(d: &Dimensions) -> Self {
        let half_w = d.width * 0.5;
        let half_h = d.height * 0.5;
        let half_d = d.depth * 0.5;

        let control_width = d.width * CONTROL_WIDTH_RATIO;
        let control_height = d.height;
        let button_diameter = control_width * BUTTON_DIAMETER_RATIO;
        let button_z = d.stroke * 0.5;

        let door_width = d.width - control_width;
        let glass_width = door_width * GLASS_WIDTH_RATIO;
        let glass_height = d.height * GLASS_HEIGHT_RATIO;

        Self {
            stroke: d.stroke,
            back: Placement {
                width: d.width,
                height: d.height,
                translate: DVec3::new(0.0, 0.0, -half_d),
            },
            bottom: Placement {
                width: d.width,
                height: d.depth,
                translate: DVec3::new(0.0, half_h, 0.0),
            },
            top: Placement {
                width: d.width,
                height: d.depth,
                translate: DVec3::new(0.0, -half_h, 0.0),
            },
            left: Placement {
                width: d.depth,
                height: d.height,
                translate: DVec3::new(-half_w, 0.0, 0.0),
            },
            right: Placement {
                width: d.depth,
                height: d.height,
                translate: DVec3::new(half_w, 0.0, 0.0),
            },
            control_group: DVec3::new(door_width * 0.5, 0.0, half_d),
            control_panel: Placement {
                width: control_width,
                height: control_height,
                translate: DVec3::ZERO,
            },
            button_diameter,
            button_top: DVec3::new(0.0, -control_height * BUTTON_OFFSET_RATIO, button_z),
            button_bottom: DVec3::new(0.0, control_height * BUTTON_OFFSET_RATIO, button_z),
            door_group: DVec3::new(-half_w, 0.0, half_d),
            door_panel: Placement {
                width: door_width,
                height: d.height,
                translate: DVec3::new(door_width * 0.5, 0.0, 0.0),
            },
            door_glass: Placement {
                width: glass_width,
                height: glass_height,
                translate: DVec3::new(door_width * 0.5, 0.0, d.stroke * 0.5),
            },
        }
    }
}
