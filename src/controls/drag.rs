//! Pointer drag handling: picking, helper-plane projection, axis choice.

use glam::{Vec2, Vec3};

use super::{ControlsObserver, GestureController, InteractionState, MoveOrigin, RotationKind};
use crate::geometry::{
    round_to_quarter_turn, sign, snap_to_axis, DragPlane, PlaneAxis, Ray, EIGHTH_TURN,
    QUARTER_TURN,
};
use crate::input::PointerSample;
use crate::puzzle::layer::{select_layer, LayerReference};
use crate::puzzle::PieceId;

/// State of the one gesture in flight.
#[derive(Debug, Clone)]
pub(super) struct DragContext {
    /// Plane the pointer is projected onto.
    pub(super) plane: DragPlane,
    pub(super) kind: RotationKind,
    /// Face normal in the assembly frame (layer drags only).
    normal: Vec3,
    /// Piece under the pointer at drag start (layer drags only).
    piece: Option<PieceId>,
    /// Last pointer position in the plane frame.
    current: Vec2,
    /// Accumulated displacement in the plane frame.
    total: Vec2,
    /// Dominant plane axis, fixed once rotating.
    pub(super) direction: PlaneAxis,
    /// Rotation axis (assembly frame for layers, world for the cube).
    pub(super) axis: Vec3,
    /// Pieces of the selected layer.
    layer: Vec<PieceId>,
    /// Signed angle turned so far.
    pub(super) angle: f32,
}

/// Whole-cube rotation axis for a drag whose dominant plane axis is
/// `direction`; `right_half` is whether the pointer is in the right half of
/// the viewport.
#[must_use]
pub fn whole_cube_axis(direction: PlaneAxis, right_half: bool) -> Vec3 {
    match (direction, right_half) {
        (PlaneAxis::X, _) => Vec3::Y,
        (PlaneAxis::Y, true) => Vec3::Z,
        (PlaneAxis::Y, false) => Vec3::NEG_X,
    }
}

/// Quarter-turn multiple a released drag snaps to.
///
/// A flick (fast release before a full quarter turn) is biased an eighth
/// turn further in the direction of travel before rounding.
#[must_use]
pub fn commit_angle(angle: f32, momentum: f32, flick_momentum: f32) -> f32 {
    let flick = momentum.abs() > flick_momentum && angle.abs() < QUARTER_TURN;
    if flick {
        round_to_quarter_turn(angle + sign(angle) * EIGHTH_TURN)
    } else {
        round_to_quarter_turn(angle)
    }
}

impl<O: ControlsObserver> GestureController<O> {
    /// World ray under a pixel position.
    #[must_use]
    pub fn pointer_ray(&self, pixel: Vec2) -> Ray {
        self.camera.ray_through(self.viewport.to_ndc(pixel))
    }

    /// Pointer went down.
    pub fn drag_start(&mut self, sample: &PointerSample) {
        if self.scramble.is_some() || !self.enabled {
            log::trace!("drag start ignored");
            return;
        }
        if matches!(
            self.state,
            InteractionState::Preparing | InteractionState::Rotating
        ) {
            return;
        }
        self.getting_drag = self.state == InteractionState::Animating;

        let ray = self.pointer_ray(sample.current);
        let edge = self.cube.intersect_edges(&ray);
        let piece = edge.and_then(|_| self.cube.intersect_pieces(&ray));

        let (kind, normal, plane, piece) = match (edge, piece) {
            (Some(hit), Some((id, _))) => (
                RotationKind::Layer,
                hit.normal,
                DragPlane::facing(
                    hit.normal,
                    self.cube.size().half_extent(),
                    self.cube.assembly(),
                ),
                Some(id),
            ),
            _ => (
                RotationKind::WholeCube,
                Vec3::Z,
                DragPlane::whole_cube_default(),
                None,
            ),
        };

        let Some(point) = plane.intersect(&ray) else {
            log::trace!("drag start missed the helper plane");
            self.getting_drag = false;
            return;
        };

        self.momentum.clear();
        self.drag = Some(DragContext {
            plane,
            kind,
            normal,
            piece,
            current: plane.world_to_local(point),
            total: Vec2::ZERO,
            direction: PlaneAxis::X,
            axis: Vec3::ZERO,
            layer: Vec::new(),
            angle: 0.0,
        });
        if self.state == InteractionState::Still {
            self.state = InteractionState::Preparing;
        }
        log::debug!("drag start: {kind:?}, state {:?}", self.state);
    }

    /// Pointer moved while down.
    pub fn drag_move(&mut self, sample: &PointerSample) {
        if self.scramble.is_some() {
            return;
        }
        let state = self.state;
        if state == InteractionState::Still
            || (state == InteractionState::Animating && !self.getting_drag)
        {
            return;
        }
        let ray = self.pointer_ray(sample.current);
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        let Some(point) = drag.plane.intersect(&ray) else {
            return;
        };

        let local = drag.plane.world_to_local(point);
        let delta = local - drag.current;
        drag.total += delta;
        drag.current = local;
        self.momentum.push(delta, sample.timestamp);

        if state == InteractionState::Preparing
            && drag.total.length() > self.options.drag_threshold
        {
            self.begin_rotation(sample.current);
        } else if state == InteractionState::Rotating {
            let rotation = drag.direction.component(delta);
            match drag.kind {
                RotationKind::Layer => self.cube.rotate_layer(drag.axis, rotation),
                RotationKind::WholeCube => {
                    self.cube.rotate_assembly_world(drag.axis, rotation);
                }
            }
            drag.angle += rotation;
        }
    }

    /// Pointer released.
    pub fn drag_end(&mut self, sample: &PointerSample) {
        if self.scramble.is_some() {
            return;
        }
        match self.state {
            InteractionState::Rotating => {}
            InteractionState::Animating => {
                // A tap during playback: forget it, let the animation settle.
                self.getting_drag = false;
                self.drag = None;
                return;
            }
            InteractionState::Still | InteractionState::Preparing => {
                self.getting_drag = false;
                self.drag = None;
                self.state = InteractionState::Still;
                return;
            }
        }
        let Some(drag) = self.drag.take() else {
            self.state = InteractionState::Still;
            return;
        };
        let momentum = drag
            .direction
            .component(self.momentum.momentum(sample.timestamp));
        self.commit(&drag, momentum);
    }

    /// Fix the dominant axis, rotation axis and (for layer drags) the layer.
    fn begin_rotation(&mut self, pointer: Vec2) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        drag.direction = PlaneAxis::dominant(drag.total);

        match drag.kind {
            RotationKind::Layer => {
                let world_dir = drag.plane.direction_to_world(drag.direction);
                let object_dir =
                    snap_to_axis(self.cube.assembly().rotation.inverse() * world_dir);
                drag.axis = -object_dir.cross(drag.normal);

                let layer = drag.piece.and_then(|piece| {
                    select_layer(
                        &self.cube,
                        LayerReference::Piece {
                            axis: drag.axis,
                            piece,
                        },
                    )
                });
                let Some(layer) = layer else {
                    log::warn!("layer drag without a resolvable piece; dropping it");
                    self.drag = None;
                    self.getting_drag = false;
                    self.state = InteractionState::Still;
                    return;
                };
                self.cube.select_layer(&layer.pieces);
                drag.layer = layer.pieces;
            }
            RotationKind::WholeCube => {
                drag.axis = whole_cube_axis(
                    drag.direction,
                    self.viewport.is_right_half(pointer),
                );
            }
        }

        drag.angle = 0.0;
        self.state = InteractionState::Rotating;
        log::debug!(
            "rotating {:?} about {} ({} pieces)",
            drag.kind,
            drag.axis,
            drag.layer.len()
        );
    }

    /// Snap a released (or interrupted) drag to a quarter turn and animate
    /// the rest of the way.
    pub(super) fn commit(&mut self, drag: &DragContext, momentum: f32) {
        let target =
            commit_angle(drag.angle, momentum, self.options.flick_momentum);
        self.state = InteractionState::Animating;
        log::debug!(
            "commit {:?}: {:.3} -> {:.3} rad",
            drag.kind,
            drag.angle,
            target
        );
        self.start_rotation(drag.kind, drag.axis, target - drag.angle, MoveOrigin::Gesture);
    }
}
