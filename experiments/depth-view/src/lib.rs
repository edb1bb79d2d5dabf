//! Interactive depth viewer: colorized depth in a window, distance under the
//! cursor on the console.

pub mod app;
pub mod cli;
pub mod error;
pub mod supervise;
pub mod viewer;
pub mod window;

pub use app::*;
pub use cli::*;
pub use error::ViewerError;
pub use supervise::*;
pub use viewer::*;
pub use window::*;
