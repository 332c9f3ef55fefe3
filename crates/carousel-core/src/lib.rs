pub mod clock;
pub mod config;
pub mod error;
pub mod geometry;
pub mod host;
pub mod items;
pub mod motion;
pub mod slider;
pub mod trace;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{AppConfig, EasingType, SliderConfig};
pub use error::{Error, Result};
pub use geometry::TrackMetrics;
pub use host::{GeometryProvider, SliderHost, TrackSurface, Transition};
pub use items::{ItemCollection, ItemSet};
pub use motion::AnimatedTrack;
pub use slider::{Direction, Edge, GesturePhase, GestureState, Pulled, Settlement, Slider};
pub use trace::{GestureTrace, ReplayReport, TraceEvent};
