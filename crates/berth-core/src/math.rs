//! Vector math re-exported from [`glam`].
//!
//! Pointer positions, window origins and layout offsets are all carried as
//! [`Vec2`] so the rest of the engine never depends on `glam` directly.
//!
//! ```
//! use berth_core::math::Vec2;
//!
//! let pointer = Vec2::new(120.0, 48.0);
//! let window_origin = Vec2::new(100.0, 40.0);
//! assert_eq!(pointer - window_origin, Vec2::new(20.0, 8.0));
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::{Vec2, vec2};
