//! Test utilities for the Berth docking engine.
//!
//! - [`MockHost`] implements [`berth_dock::Host`] and records every call so
//!   tests can assert on cursor changes, relayout requests and window
//!   lifecycle.
//! - [`fixtures`] builds common window layouts in a few lines.
//!
//! # Example
//!
//! ```rust
//! use berth_dock::{Cursor, Host};
//! use berth_test_utils::{HostCall, MockHost};
//!
//! let mut host = MockHost::new();
//! host.set_cursor(Cursor::Dnd);
//!
//! assert_eq!(host.cursor(), Cursor::Dnd);
//! assert_eq!(host.calls(), &[HostCall::SetCursor(Cursor::Dnd)]);
//! ```

pub mod fixtures;
pub mod mock_host;

pub use fixtures::*;
pub use mock_host::*;
