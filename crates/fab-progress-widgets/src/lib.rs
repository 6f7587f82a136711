//! Progress-arc widgets for a floating action button.
//!
//! [`FabProgressCircle`] wraps exactly one [`FloatingActionButton`], spins an
//! indeterminate arc around it while work runs, and on completion closes the
//! arc and fades in a tinted overlay with a final icon.

pub mod arc_controller;
pub mod button;
pub mod complete_overlay;
pub mod error;
pub mod fab_progress_circle;
pub mod progress_arc;
pub mod style;

pub use arc_controller::{ArcAngles, ArcController, ArcObserver, ArcPhase};
pub use button::{FabClicked, FloatingActionButton};
pub use complete_overlay::{CompleteOverlay, OverlayEvent};
pub use error::{FabProgressError, Result};
pub use fab_progress_circle::{FabProgressCircle, FabProgressCircleBuilder, FabProgressListener};
pub use progress_arc::{ArcViewEvent, ProgressArc};
pub use style::{ArcDurations, CircleSize, FabProgressStyle, FinalIcon, SweepRange};
