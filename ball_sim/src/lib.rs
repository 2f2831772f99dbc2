//! Ball Gravity Simulation
//!
//! A handful of point masses attract each other through an inverse-square
//! law with G = 1. Motion is integrated in fixed time slices by
//! [`SimulationClock`], which is ticked on its own schedule, while the
//! render side periodically paints a snapshot of ball positions.
//!
//! - [`vector`]: immutable, always-finite 2D vectors
//! - [`body`]: point masses with force application and motion
//! - [`attraction`]: pairwise gravitational force
//! - [`clock`]: move-then-force step and the per-tick driver
//! - [`run`]: owner of the bodies for the lifetime of a scenario
//! - [`render`]: erase-and-redraw of ball circles onto a drawing surface

pub mod attraction;
pub mod body;
pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod render;
pub mod run;
pub mod scenario;
pub mod ticker;
pub mod vector;

pub use attraction::{AttractionModel, InverseSquare};
pub use body::Body;
pub use clock::SimulationClock;
pub use config::SimConfig;
pub use error::{SimError, SimResult};
pub use render::{BallPainter, CircleList, DrawingSurface, Rect};
pub use run::{BallShape, SharedRun, SimulationRun};
pub use scenario::{BodySpec, Scenario};
pub use ticker::FixedTicker;
pub use vector::Vector;
