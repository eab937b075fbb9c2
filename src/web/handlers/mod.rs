//! HTML template rendering handlers.

mod home;
mod stats;

pub use home::{create_link_handler, home_handler};
pub use stats::stats_handler;
