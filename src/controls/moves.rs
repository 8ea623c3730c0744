//! Keyboard moves and scramble playback.

use std::collections::VecDeque;

use super::{ControlsObserver, GestureController, InteractionState, MoveOrigin, RotationKind};
use crate::error::TurnError;
use crate::geometry::{Axis, QUARTER_TURN};
use crate::input::{KeyAction, KeyCommand};
use crate::puzzle::layer::{select_layer, Layer};
use crate::puzzle::notation::{face_move, LayerMove};
use crate::puzzle::PuzzleSize;

/// A rotation requested without a gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgrammaticMove {
    /// Turn the layer at `position`.
    Layer(LayerMove),
    /// Turn the whole cube about a world axis.
    WholeCube {
        /// Rotation axis.
        axis: Axis,
        /// Signed number of quarter turns.
        quarter_turns: i32,
    },
}

impl ProgrammaticMove {
    /// Move bound to a key action. `inverted` primes layer turns and
    /// reverses cube rotations.
    ///
    /// # Errors
    ///
    /// [`TurnError::UnknownMove`] for an action that is neither a face turn
    /// nor a cube rotation.
    pub fn from_action(
        action: KeyAction,
        size: PuzzleSize,
        inverted: bool,
    ) -> Result<Self, TurnError> {
        if let Some(face) = action.face() {
            return face_move(face, size, inverted).map(Self::Layer);
        }
        let axis = action
            .cube_axis()
            .ok_or_else(|| TurnError::UnknownMove(format!("{action:?}")))?;
        Ok(Self::WholeCube {
            axis,
            quarter_turns: if inverted { 1 } else { -1 },
        })
    }
}

// ── Keyboard ──

impl<O: ControlsObserver> GestureController<O> {
    /// Start a move without going through drag detection.
    ///
    /// Returns `Ok(false)` if the controller is disabled, busy, or playing
    /// a scramble.
    ///
    /// # Errors
    ///
    /// [`TurnError::InvalidMove`] for a layer move that does not name a
    /// layer of this puzzle. Nothing is changed in that case.
    pub fn keyboard_move(&mut self, mv: ProgrammaticMove) -> Result<bool, TurnError> {
        if !self.enabled || self.state != InteractionState::Still || self.scramble.is_some() {
            log::warn!("move {mv:?} rejected in state {:?}", self.state);
            return Ok(false);
        }
        match mv {
            ProgrammaticMove::Layer(layer_move) => {
                let layer = self.resolve_layer(&layer_move)?;
                self.state = InteractionState::Rotating;
                self.begin_layer_move(&layer, &layer_move, MoveOrigin::Keyboard);
            }
            ProgrammaticMove::WholeCube {
                axis,
                quarter_turns,
            } => {
                self.state = InteractionState::Rotating;
                self.start_rotation(
                    RotationKind::WholeCube,
                    axis.unit(),
                    quarter_turns as f32 * QUARTER_TURN,
                    MoveOrigin::Keyboard,
                );
            }
        }
        self.state = InteractionState::Animating;
        Ok(true)
    }

    /// Run the move bound to a key command.
    ///
    /// # Errors
    ///
    /// Same as [`keyboard_move`](Self::keyboard_move).
    pub fn key_command(&mut self, command: KeyCommand) -> Result<bool, TurnError> {
        let mv = ProgrammaticMove::from_action(
            command.action,
            self.cube.size(),
            command.inverted,
        )?;
        self.keyboard_move(mv)
    }

    /// The full layer a move turns.
    fn resolve_layer(&self, layer_move: &LayerMove) -> Result<Layer, TurnError> {
        let size = self.cube.size();
        let reference = layer_move.layer_reference(size)?;
        let expected = usize::from(size.get()).pow(2);
        match select_layer(&self.cube, reference) {
            Some(layer) if layer.pieces.len() == expected => Ok(layer),
            layer => Err(TurnError::InvalidMove(format!(
                "{}: layer holds {} of {expected} pieces",
                layer_move.name,
                layer.map_or(0, |l| l.pieces.len())
            ))),
        }
    }

    fn begin_layer_move(&mut self, layer: &Layer, layer_move: &LayerMove, origin: MoveOrigin) {
        self.cube.select_layer(&layer.pieces);
        log::debug!("{} turns {} pieces", layer_move.name, layer.pieces.len());
        self.start_rotation(
            RotationKind::Layer,
            layer.axis.unit(),
            layer_move.angle(),
            origin,
        );
    }
}

// ── Scramble ──

impl<O: ControlsObserver> GestureController<O> {
    /// Queue `moves` and play them back one after another.
    ///
    /// Allowed while disabled. Returns `Ok(false)` if a scramble is already
    /// running, the controller is busy, or `moves` is empty.
    ///
    /// # Errors
    ///
    /// [`TurnError::InvalidMove`] if any queued move does not name a layer
    /// of this puzzle. The whole queue is refused and nothing is changed.
    pub fn scramble(
        &mut self,
        moves: impl IntoIterator<Item = LayerMove>,
    ) -> Result<bool, TurnError> {
        if self.scramble.is_some() || self.state != InteractionState::Still {
            log::warn!("scramble rejected in state {:?}", self.state);
            return Ok(false);
        }
        let queue: VecDeque<LayerMove> = moves.into_iter().collect();
        let size = self.cube.size();
        for layer_move in &queue {
            let _ = layer_move.layer_reference(size)?;
        }
        if queue.is_empty() {
            return Ok(false);
        }
        log::info!("scrambling with {} moves", queue.len());
        self.drag = None;
        self.getting_drag = false;
        self.scramble = Some(queue);
        self.state = InteractionState::Animating;
        self.advance_scramble();
        Ok(true)
    }

    /// Start the next queued move, or finish playback.
    pub(super) fn advance_scramble(&mut self) {
        while let Some(next) = self.scramble.as_mut().and_then(VecDeque::pop_front) {
            match self.resolve_layer(&next) {
                Ok(layer) => {
                    self.begin_layer_move(&layer, &next, MoveOrigin::Scramble);
                    return;
                }
                Err(e) => log::warn!("skipping scramble move: {e}"),
            }
        }
        if self.scramble.take().is_some() {
            self.state = InteractionState::Still;
            log::info!("scramble finished");
            self.observer.scramble_finished();
        }
    }
}
