//! Minimal terminal runtime: an [`App`] trait driven by a tick timer and terminal events.

pub use self::{app::App, runtime::Runtime};

mod app;
mod event;
mod event_loop;
mod runtime;
