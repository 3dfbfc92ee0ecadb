//! Two-lane path drawing game core.
//!
//! The player drags a line from one of two cars through a gate between lane
//! markings. When both cars have a valid path they drive along them together,
//! then the scene fades and resets. Rendering and tween playback live behind
//! the [`scene::Scene`] and [`timeline::Timeline`] traits.

pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod logging;
pub mod scene;
pub mod sequencer;
pub mod spatial_index;
pub mod timeline;
pub mod types;
pub mod watchdog;

pub use controller::{ExitRequest, GameController};
