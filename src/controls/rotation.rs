//! Committed rotation playback and settling.

use glam::Vec3;

use super::{ControlsObserver, GestureController, InteractionState, MoveOrigin, RotationKind};
use crate::animation::{BounceCorrection, Tween, TweenFrame};
use crate::options::FlipStyle;
use crate::puzzle::Cube;

/// Scheduler payload for one committed rotation.
#[derive(Debug, Clone)]
pub(super) struct RotationJob {
    kind: RotationKind,
    axis: Vec3,
    /// Total angle this job adds.
    rotation: f32,
    origin: MoveOrigin,
    bounce: Option<BounceCorrection>,
}

impl RotationJob {
    /// Apply one tween step to the cube.
    pub(super) fn advance(&mut self, cube: &mut Cube, frame: &TweenFrame) {
        let delta = frame.delta * self.rotation;
        match self.kind {
            RotationKind::Layer => {
                cube.rotate_layer(self.axis, delta);
                let correction = self
                    .bounce
                    .as_mut()
                    .and_then(|b| b.correction(frame.value, delta, self.rotation));
                if let Some(correction) = correction {
                    cube.rotate_assembly_local(self.axis, correction);
                }
            }
            RotationKind::WholeCube => cube.rotate_assembly_world(self.axis, delta),
        }
    }
}

impl<O: ControlsObserver> GestureController<O> {
    /// Schedule the animated remainder of a rotation.
    pub(super) fn start_rotation(
        &mut self,
        kind: RotationKind,
        axis: Vec3,
        rotation: f32,
        origin: MoveOrigin,
    ) {
        let style = if origin == MoveOrigin::Scramble {
            FlipStyle::Snappy
        } else {
            self.options.flip_style
        };
        let profile = match kind {
            RotationKind::Layer => style.layer_profile(),
            RotationKind::WholeCube => style.whole_cube_profile(),
        };
        let job = RotationJob {
            kind,
            axis,
            rotation,
            origin,
            bounce: profile.bounce.then(BounceCorrection::new),
        };
        let _ = self
            .scheduler
            .start(Tween::new(profile.duration, profile.easing), job);
    }

    /// Settle a finished rotation and run its completion logic.
    pub(super) fn finish(&mut self, job: &RotationJob) {
        match job.kind {
            RotationKind::Layer => self.cube.settle(),
            RotationKind::WholeCube => self.cube.snap_containers(),
        }

        if job.origin == MoveOrigin::Scramble {
            self.observer.rotation_settled(job.origin);
            self.advance_scramble();
            return;
        }

        let layer_move = job.kind == RotationKind::Layer;
        if layer_move {
            self.observer.moved();
        }
        self.state = if self.getting_drag && self.drag.is_some() {
            InteractionState::Preparing
        } else {
            self.drag = None;
            InteractionState::Still
        };
        self.getting_drag = false;
        log::debug!("{:?} rotation settled, state {:?}", job.kind, self.state);

        if layer_move {
            let _ = self.check_solved();
        }
        self.observer.rotation_settled(job.origin);
    }
}
