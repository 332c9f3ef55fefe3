//! Settle animation support
//!
//! Hosts with native transitions (CSS and the like) only need
//! [`Transition::css`](crate::host::Transition::css). Hosts that draw the
//! track themselves use [`AnimatedTrack`] as their [`SliderHost`](crate::host::SliderHost).
//!
//! - `easing` - timing functions (CSS keyword curves, cubic, quintic)
//! - `timing` - progress and interpolation helpers
//! - `animation` - animated track surface combining the two
//!
//! # Usage
//!
//! ```ignore
//! use carousel_core::{AnimatedTrack, ItemCollection, Slider, SliderConfig, SystemClock};
//!
//! let clock = SystemClock::new();
//! let track = AnimatedTrack::new(clock);
//! let mut slider = Slider::with_clock(SliderConfig::default(), track, ItemCollection::from_cells(12), clock);
//!
//! slider.on_pointer_move(x);
//! slider.on_pointer_up(false);
//!
//! // In the render loop
//! let offset = slider.host_mut().update();
//! ```

pub mod animation;
pub mod easing;
pub mod timing;

pub use animation::AnimatedTrack;
pub use easing::{EasingType, EasingTypeExt};
