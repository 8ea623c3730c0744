// -- Lint policy ---------------------------------------------------------
// Group levels and allowances live in Cargo.toml `[workspace.lints]`.

// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Documentation and hygiene (warn so new code can land incrementally)
#![warn(missing_docs)]
#![warn(unused_results)]
#![warn(unused_qualifications)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]

//! Gesture core for twisty cube puzzles.
//!
//! Cubeturn turns pointer drags, key presses and scramble sequences into
//! animated layer and whole-cube rotations of an N×N×N puzzle (N in 2..=5),
//! and reports when the puzzle is solved. It has no renderer: the host
//! feeds input events and frame ticks, then draws the piece poses it reads
//! back from the [`puzzle::Cube`].
//!
//! # Key entry points
//!
//! - [`controls::GestureController`] - the interaction state machine
//! - [`puzzle::Cube`] - the piece hierarchy and layer selection
//! - [`input::InputProcessor`] - raw events to drag events and key commands
//! - [`options::Options`] - runtime configuration (puzzle size, flip style,
//!   camera, key bindings)
//! - [`animation`] - tweens and the frame-driven scheduler
//!
//! # Frame loop
//!
//! ```ignore
//! let mut controller = GestureController::new(cube, viewport, &options, observer);
//! controller.enable();
//! // per input event:
//! if let Some(drag) = input.handle_event(event, Instant::now()) {
//!     controller.handle_drag(drag);
//! }
//! // per frame:
//! controller.tick(clock.tick(Instant::now()));
//! ```

pub mod animation;
pub mod camera;
pub mod controls;
pub mod error;
pub mod geometry;
pub mod input;
pub mod options;
pub mod puzzle;
pub mod util;

pub use controls::{ControlsObserver, GestureController, InteractionState, NoopObserver};
pub use error::TurnError;
pub use options::Options;
pub use puzzle::{Cube, PuzzleSize};
