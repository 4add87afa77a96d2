//! Upload-and-render controller and the page contract it drives

mod controller;
mod dom;
mod render;

pub use controller::{BusyGuard, UploadController};
pub use dom::{ids, PageState, View};
pub use render::{format_percent, percent, render_result, to_fixed, DetailRow, ResultDetails};
