//! Render scheduling.
//!
//! Property writes request renders; [`single_render`] coalesces the requests
//! made inside it into one render pass.
//!
//! - [`request_render`]: mark a component stale.
//! - [`single_render`]: batch several writes into one pass.
//! - [`take_dirty`]: drain stale components for the next render.

pub mod scheduler;

pub use scheduler::{
    has_dirty, is_batching, render_passes, request_render, reset, single_render, take_dirty,
};
