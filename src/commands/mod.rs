//! Subcommand handlers.

mod head;
mod home;
mod theme;

pub use head::print_head;
pub use home::print_home;
pub use theme::run_theme;
