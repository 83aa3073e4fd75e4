//! Parallax star field: an endlessly scrolling field of stars where near
//! stars are larger, brighter and faster than distant ones.
//!
//! [`starfield::StarField`] is the simulation. It is driven by two calls,
//! [`tick`](starfield::StarField::tick) and
//! [`snapshot_for_render`](starfield::StarField::snapshot_for_render), and
//! never touches a display. [`draw`] and [`clock`] are the pieces the
//! windowed host uses to show it.

pub mod appearance;
pub mod clock;
pub mod config;
pub mod draw;
pub mod error;
pub mod star;
pub mod starfield;
pub mod types;

pub use config::StarFieldConfig;
pub use error::{ConfigError, Error};
pub use star::Star;
pub use starfield::{StarField, StarSprite};
