use crate::drag::DragRotator;
use crate::geometry::Geometry;
use crate::microwave::MicrowaveScene;
use crate::panel::{EditEffect, EditTier, Field, FieldError, FieldValue, Panel, PanelEvent};
use crate::projection::DrawCommand;
use crate::state::{Defaults, ParameterStore};
use glam::DVec2;

/// Everything one running illustration owns: the parameter store, the scene
/// it drives, the drag rotator and the panel model.
///
/// All entry points take the host time explicitly so the same sequence of
/// calls always produces the same frames.
#[derive(Clone, Debug)]
pub struct Illustration {
    store: ParameterStore,
    scene: MicrowaveScene,
    rotator: DragRotator,
    panel: Panel,
}

impl Illustration {
    pub fn new(defaults: Defaults, now_ms: f64) -> Self {
        let store = ParameterStore::new(defaults, now_ms);
        let scene = MicrowaveScene::build(&Geometry::from_dimensions(&store.dimensions));
        Self {
            store,
            scene,
            rotator: DragRotator::default(),
            panel: Panel::new(),
        }
    }

    pub fn store(&self) -> &ParameterStore {
        &self.store
    }

    pub fn scene(&self) -> &MicrowaveScene {
        &self.scene
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    /// Advance the animation to `now_ms` and return what to paint.
    pub fn frame(&mut self, now_ms: f64) -> Vec<DrawCommand> {
        let out = self.store.step(now_ms);
        self.scene.apply_frame(&out);
        self.scene.render()
    }

    /// Recompute every derived size from the current dimensions.
    pub fn resize(&mut self) {
        let geometry = Geometry::from_dimensions(&self.store.dimensions);
        self.scene.apply_geometry(&geometry);
    }

    pub fn pointer_down(&mut self, pointer: DVec2, display_size: f64) {
        self.rotator.begin(pointer, self.store.rotation.current, display_size);
        self.store.on_drag_start();
    }

    /// Returns `true` when the move belonged to a drag.
    pub fn pointer_move(&mut self, pointer: DVec2) -> bool {
        match self.rotator.rotation_at(pointer) {
            Some(live) => {
                self.store.on_drag_move(live);
                true
            }
            None => false,
        }
    }

    pub fn pointer_up(&mut self, now_ms: f64) {
        if !self.rotator.is_active() {
            return;
        }
        self.rotator.end();
        self.store.on_drag_end(now_ms);
    }

    pub fn edit(&mut self, event: PanelEvent, now_ms: f64) -> Result<EditEffect, FieldError> {
        let effect = self.panel.apply(&mut self.store, event, now_ms)?;
        if effect.geometry_changed {
            self.resize();
        }
        Ok(effect)
    }

    /// Flip a boolean field as a committed edit (keyboard shortcuts).
    pub fn toggle(&mut self, field: Field, now_ms: f64) -> Result<EditEffect, FieldError> {
        let value = match field.get(&self.store) {
            FieldValue::Bool(b) => FieldValue::Bool(!b),
            FieldValue::Number(_) => {
                return Err(FieldError::WrongKind {
                    field: field.key(),
                    expected: "boolean",
                })
            }
        };
        self.edit(
            PanelEvent {
                field,
                value,
                tier: EditTier::Commit,
            },
            now_ms,
        )
    }

    pub fn reset(&mut self, now_ms: f64) {
        self.panel.clear_staged();
        self.store.reset(now_ms);
        self.resize();
    }

    /// The host may have stopped calling `frame` while hidden; pick the spin
    /// up again from the last targeted angle.
    pub fn on_visible(&mut self, now_ms: f64) {
        self.store.resync_anchor(now_ms);
    }
}
