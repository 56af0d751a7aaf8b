//! Single-threaded scheduler driving an [`App`] from gravity ticks, renders
//! and terminal input.

pub use self::{app::App, runtime::Runtime};

mod app;
mod event_loop;
mod runtime;
