// Host-side tests for resize geometry and the projected microwave.

use glam::Vec3;
use microwave_core::constants::palette::*;
use microwave_core::{
    Defaults, Dimensions, EditTier, Field, FieldValue, FrameOutput, Geometry, Illustration,
    MicrowaveScene, PanelEvent, Pose, Shape,
};

fn dims(width: f64, height: f64, depth: f64, stroke: f64) -> Dimensions {
    Dimensions {
        width,
        height,
        depth,
        stroke,
    }
}

#[test]
fn default_geometry_matches_layout_ratios() {
    let g = Geometry::from_dimensions(&dims(200.0, 100.0, 100.0, 10.0));

    assert_eq!(g.control_panel.width, 40.0);
    assert_eq!(g.control_panel.height, 100.0);
    assert_eq!(g.door_panel.width, 160.0);
    assert!((g.button_diameter - 40.0 / 3.0).abs() < 1e-12);
    assert_eq!(g.door_glass.width, 120.0);
    assert!((g.door_glass.height - 200.0 / 3.0).abs() < 1e-12);

    assert_eq!(g.back.translate.z, -50.0);
    assert_eq!(g.bottom.translate.y, 50.0);
    assert_eq!(g.top.translate.y, -50.0);
    assert_eq!(g.left.translate.x, -100.0);
    assert_eq!(g.right.translate.x, 100.0);
    assert_eq!((g.left.width, g.left.height), (100.0, 100.0));

    assert_eq!(g.control_group.x, 80.0);
    assert_eq!(g.control_group.z, 50.0);
    assert_eq!(g.button_top.y, -20.0);
    assert_eq!(g.button_bottom.y, 20.0);
    assert_eq!(g.button_top.z, 5.0);

    assert_eq!(g.door_group.x, -100.0);
    assert_eq!(g.door_group.z, 50.0);
    assert_eq!(g.door_panel.translate.x, 80.0);
    assert_eq!(g.door_glass.translate.z, 5.0);
}

#[test]
fn control_and_door_fill_the_front_face() {
    let g = Geometry::from_dimensions(&dims(330.0, 210.0, 150.0, 4.0));
    let door_right = g.door_group.x + g.door_panel.width;
    let control_left = g.control_group.x - g.control_panel.width * 0.5;
    assert!((door_right - control_left).abs() < 1e-9);
    assert!((g.control_group.x + g.control_panel.width * 0.5 - 165.0).abs() < 1e-9);
}

#[test]
fn resize_rebuilds_outlines() {
    let mut illo = Illustration::new(Defaults::default(), 0.0);
    let back = illo.scene().back();
    let before = illo.scene().graph()[back].path()[2];
    assert_eq!(before, Vec3::new(100.0, 50.0, 0.0));

    illo.edit(
        PanelEvent {
            field: Field::Width,
            value: FieldValue::Number(300.0),
            tier: EditTier::Live,
        },
        0.0,
    )
    .unwrap();
    let node = &illo.scene().graph()[back];
    assert_eq!(
        node.shape,
        Shape::Rect {
            width: 300.0,
            height: 100.0
        }
    );
    assert_eq!(node.path()[2], Vec3::new(150.0, 50.0, 0.0));
}

#[test]
fn front_view_draws_back_panel_first_and_glass_last() {
    let mut illo = Illustration::new(Defaults::default(), 0.0);
    let cmds = illo.frame(0.0);
    assert!(!cmds.is_empty());

    let back = cmds
        .iter()
        .position(|c| c.color == INSIDE_LIGHT && c.depth < 0.0)
        .expect("back panel drawn");
    let glass = cmds
        .iter()
        .rposition(|c| c.color == DARK_DETAILS && c.points.len() == 4)
        .expect("door glass drawn");
    assert!(back < glass);
    for w in cmds.windows(2) {
        assert!(w[0].depth <= w[1].depth);
    }
}

#[test]
fn zoom_scales_screen_extent() {
    let geometry = Geometry::from_dimensions(&Defaults::default().dimensions);
    let mut scene = MicrowaveScene::build(&geometry);
    let extent = |scene: &MicrowaveScene| {
        scene
            .render()
            .iter()
            .flat_map(|c| c.points.iter())
            .map(|p| p.x.abs())
            .fold(0.0_f32, f32::max)
    };

    scene.apply_frame(&FrameOutput {
        rotation: Pose::default(),
        zoom: 1.0,
        door_angle: 0.0,
    });
    let one = extent(&scene);
    scene.apply_frame(&FrameOutput {
        rotation: Pose::default(),
        zoom: 2.0,
        door_angle: 0.0,
    });
    let two = extent(&scene);
    assert!((two - 2.0 * one).abs() < 1e-3, "{one} {two}");
}

#[test]
fn door_angle_swings_the_door_group() {
    let mut illo = Illustration::new(Defaults::default(), 0.0);
    illo.frame(0.0);
    let door = illo.scene().door_group();
    let expected = 0.25 * std::f32::consts::FRAC_PI_2;
    let got = illo.scene().graph()[door].rotate.y;
    assert!((got - expected).abs() < 1e-6);

    let glass = illo.scene().door_glass();
    assert_eq!(illo.scene().graph()[glass].parent(), Some(door));
}

fn frame_at(x: f64, y: f64) -> FrameOutput {
    FrameOutput {
        rotation: Pose::new(x, y),
        zoom: 1.0,
        door_angle: 0.5,
    }
}

#[test]
fn long_running_spin_renders_like_its_wrapped_angle() {
    // eight hours at one turn per second, plus a small offset
    let base = 8.0 * 3600.0 * std::f64::consts::TAU + 0.3;
    let geometry = Geometry::from_dimensions(&Defaults::default().dimensions);

    let mut unwrapped = MicrowaveScene::build(&geometry);
    unwrapped.apply_frame(&frame_at(-base.sin(), base));
    let mut wrapped = MicrowaveScene::build(&geometry);
    wrapped.apply_frame(&frame_at(
        (-base.sin()).rem_euclid(std::f64::consts::TAU),
        base.rem_euclid(std::f64::consts::TAU),
    ));

    let a = unwrapped.render();
    let b = wrapped.render();
    assert_eq!(a.len(), b.len());
    for (ca, cb) in a.iter().zip(&b) {
        for (pa, pb) in ca.points.iter().zip(&cb.points) {
            assert!((*pa - *pb).length() < 1e-3, "{pa:?} vs {pb:?}");
        }
    }
}

#[test]
fn view_rotation_stays_within_one_turn() {
    let geometry = Geometry::from_dimensions(&Defaults::default().dimensions);
    let mut scene = MicrowaveScene::build(&geometry);
    let tau = std::f32::consts::TAU;

    for (x, y) in [(0.4, 181_000.0), (-0.4, -181_000.0), (-1.0, -0.25)] {
        scene.apply_frame(&frame_at(x, y));
        let rotate = scene.view().rotate;
        assert!((0.0..=tau).contains(&rotate.x), "x {}", rotate.x);
        assert!((0.0..=tau).contains(&rotate.y), "y {}", rotate.y);
    }

    // small steps still move the view at large angles
    let big = 8.0 * 3600.0 * std::f64::consts::TAU + 0.3;
    scene.apply_frame(&frame_at(0.0, big));
    let first = scene.view().rotate.y;
    scene.apply_frame(&frame_at(0.0, big + 0.001));
    assert!((scene.view().rotate.y - first - 0.001).abs() < 1e-4);
}
