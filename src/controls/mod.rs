//! Gesture controller: turns drags and key presses into puzzle rotations.
//!
//! The controller owns the interaction state machine, the single in-flight
//! drag context, the momentum tracker and the animation scheduler.
//! Everything runs on one thread: input entry points mutate state
//! immediately, and [`GestureController::tick`] advances committed
//! rotations once per frame.
//!
//! ```text
//! STILL ──drag start──▶ PREPARING ──past threshold──▶ ROTATING
//!   ▲                                                    │
//!   │                                                drag end
//!   └──── rotation settled (PREPARING if a new ◀── ANIMATING
//!         drag started meanwhile)
//! ```

mod drag;
mod moves;
mod rotation;

use std::collections::VecDeque;

pub use drag::{commit_angle, whole_cube_axis};
pub use moves::ProgrammaticMove;
use web_time::Duration;

use self::drag::DragContext;
use self::rotation::RotationJob;
use crate::animation::Scheduler;
use crate::camera::{Camera, Viewport};
use crate::input::{DragEvent, MomentumTracker};
use crate::options::{CameraOptions, ControlsOptions, FlipStyle, Options};
use crate::puzzle::notation::LayerMove;
use crate::puzzle::Cube;

/// Interaction state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionState {
    /// Idle.
    Still,
    /// A drag started but has not moved far enough to pick an axis.
    Preparing,
    /// A drag is turning a layer or the whole cube.
    Rotating,
    /// A committed rotation is playing back.
    Animating,
}

/// What a rotation turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationKind {
    /// One layer of pieces.
    Layer,
    /// The whole assembly (a change of viewing angle).
    WholeCube,
}

/// Where a settled rotation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOrigin {
    /// Pointer drag.
    Gesture,
    /// Key press or other programmatic move.
    Keyboard,
    /// Scramble playback.
    Scramble,
}

/// Receives controller notifications. Every method defaults to a no-op.
pub trait ControlsObserver {
    /// A user layer move (gesture or keyboard) finished.
    fn moved(&mut self) {}

    /// The puzzle is solved after a user layer move.
    fn solved(&mut self) {}

    /// Any rotation finished and the puzzle is settled again.
    fn rotation_settled(&mut self, _origin: MoveOrigin) {}

    /// The last queued scramble move settled.
    fn scramble_finished(&mut self) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ControlsObserver for NoopObserver {}

/// Drives a [`Cube`] from pointer and keyboard input.
pub struct GestureController<O: ControlsObserver = NoopObserver> {
    cube: Cube,
    camera: Camera,
    viewport: Viewport,
    camera_options: CameraOptions,
    options: ControlsOptions,
    state: InteractionState,
    enabled: bool,
    /// The single in-flight gesture.
    drag: Option<DragContext>,
    /// A drag started while a rotation was animating.
    getting_drag: bool,
    momentum: MomentumTracker,
    scheduler: Scheduler<RotationJob>,
    /// Remaining scramble moves while playback is active.
    scramble: Option<VecDeque<LayerMove>>,
    observer: O,
}

impl<O: ControlsObserver> GestureController<O> {
    /// Controller for `cube` viewed through a camera fitted to `viewport`.
    ///
    /// Starts disabled: call [`enable`](Self::enable) before feeding input.
    #[must_use]
    pub fn new(
        cube: Cube,
        viewport: Viewport,
        options: &Options,
        observer: O,
    ) -> Self {
        Self {
            cube,
            camera: Camera::for_viewport(viewport, &options.camera),
            viewport,
            camera_options: options.camera.clone(),
            options: options.controls.clone(),
            state: InteractionState::Still,
            enabled: false,
            drag: None,
            getting_drag: false,
            momentum: MomentumTracker::new(options.controls.momentum_window()),
            scheduler: Scheduler::new(),
            scramble: None,
            observer,
        }
    }
}

// ── Accessors ──

impl<O: ControlsObserver> GestureController<O> {
    /// Current interaction state.
    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Whether pointer and keyboard input are accepted.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether scramble playback is running.
    #[must_use]
    pub fn is_scrambling(&self) -> bool {
        self.scramble.is_some()
    }

    /// Whether any rotation is still playing back.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.scheduler.is_empty()
    }

    /// Kind of the in-flight drag, if any.
    #[must_use]
    pub fn drag_kind(&self) -> Option<RotationKind> {
        self.drag.as_ref().map(|d| d.kind)
    }

    /// The puzzle.
    #[must_use]
    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    /// The picking camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The pointer viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The observer.
    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Mutable access to the observer.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Change how committed rotations animate. Running rotations keep their
    /// profile.
    pub fn set_flip_style(&mut self, style: FlipStyle) {
        self.options.flip_style = style;
    }

    /// Refit the camera to a resized viewport.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.camera = Camera::for_viewport(viewport, &self.camera_options);
    }
}

// ── Lifecycle ──

impl<O: ControlsObserver> GestureController<O> {
    /// Accept input.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Stop accepting input.
    ///
    /// A drag that has not picked an axis yet is dropped; one that is already
    /// rotating is committed as if released, without flick.
    pub fn disable(&mut self) {
        self.enabled = false;
        match self.state {
            InteractionState::Preparing => {
                self.drag = None;
                self.getting_drag = false;
                self.state = InteractionState::Still;
            }
            InteractionState::Rotating => {
                if let Some(drag) = self.drag.take() {
                    self.commit(&drag, 0.0);
                }
            }
            InteractionState::Animating => {
                self.drag = None;
                self.getting_drag = false;
            }
            InteractionState::Still => {}
        }
    }

    /// Route a drag event to its handler.
    pub fn handle_drag(&mut self, event: DragEvent) {
        match event {
            DragEvent::Start(sample) => self.drag_start(&sample),
            DragEvent::Move(sample) => self.drag_move(&sample),
            DragEvent::End(sample) => self.drag_end(&sample),
        }
    }

    /// Advance running rotations by one frame and settle the ones that
    /// finished.
    pub fn tick(&mut self, dt: Duration) {
        let Self {
            scheduler, cube, ..
        } = self;
        let completed = scheduler.tick(dt, |job, frame| job.advance(cube, frame));
        for job in completed {
            self.finish(&job);
        }
    }

    /// Evaluate the solved state and notify the observer if solved.
    ///
    /// Returns `false` without evaluating while a layer is detached or a
    /// drag is rotating.
    pub fn check_solved(&mut self) -> bool {
        if self.state == InteractionState::Rotating || !self.cube.is_settled() {
            return false;
        }
        let solved = self.cube.is_solved();
        if solved {
            log::info!("puzzle solved");
            self.observer.solved();
        }
        solved
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use glam::{Vec2, Vec3};
    use web_time::{Duration, Instant};

    use super::{ControlsObserver, GestureController, InteractionState, MoveOrigin};
    use crate::camera::Viewport;
    use crate::input::{DragEvent, PointerSample};
    use crate::options::Options;
    use crate::puzzle::{Cube, PuzzleSize};

    pub(crate) const FRAME: Duration = Duration::from_millis(16);

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) enum Event {
        Moved,
        Solved,
        Settled(MoveOrigin),
        ScrambleFinished,
    }

    #[derive(Debug, Default)]
    pub(crate) struct Recorder {
        pub(crate) events: Vec<Event>,
    }

    impl Recorder {
        pub(crate) fn count(&self, event: Event) -> usize {
            self.events.iter().filter(|e| **e == event).count()
        }
    }

    impl ControlsObserver for Recorder {
        fn moved(&mut self) {
            self.events.push(Event::Moved);
        }
        fn solved(&mut self) {
            self.events.push(Event::Solved);
        }
        fn rotation_settled(&mut self, origin: MoveOrigin) {
            self.events.push(Event::Settled(origin));
        }
        fn scramble_finished(&mut self) {
            self.events.push(Event::ScrambleFinished);
        }
    }

    pub(crate) fn controller() -> GestureController<Recorder> {
        let mut controller = GestureController::new(
            Cube::new(PuzzleSize::default()),
            Viewport::new(800.0, 600.0),
            &Options::default(),
            Recorder::default(),
        );
        controller.enable();
        controller
    }

    /// Pixel position of a world point.
    pub(crate) fn pixel_of(
        controller: &GestureController<Recorder>,
        world: Vec3,
    ) -> Vec2 {
        controller
            .viewport()
            .from_ndc(controller.camera().project(world))
    }

    /// Scripted drag through world points, one sample every 10ms.
    pub(crate) struct DragScript {
        sample: PointerSample,
    }

    impl DragScript {
        pub(crate) fn start(
            controller: &mut GestureController<Recorder>,
            world: Vec3,
            at: Instant,
        ) -> Self {
            let sample = PointerSample::start(pixel_of(controller, world), at);
            controller.handle_drag(DragEvent::Start(sample));
            Self { sample }
        }

        pub(crate) fn move_to(
            &mut self,
            controller: &mut GestureController<Recorder>,
            world: Vec3,
        ) {
            let at = self.sample.timestamp + Duration::from_millis(10);
            self.sample = self.sample.moved_to(pixel_of(controller, world), at);
            controller.handle_drag(DragEvent::Move(self.sample));
        }

        pub(crate) fn end(
            self,
            controller: &mut GestureController<Recorder>,
            after: Duration,
        ) {
            let at = self.sample.timestamp + after;
            let sample = self.sample.moved_to(self.sample.current, at);
            controller.handle_drag(DragEvent::End(sample));
        }
    }

    pub(crate) fn settle(controller: &mut GestureController<Recorder>) {
        for _ in 0..500 {
            if controller.state() != InteractionState::Animating {
                break;
            }
            controller.tick(FRAME);
        }
    }
}
