pub mod apps;
pub mod error;
pub mod geometry;
pub mod interop;
pub mod notify;
pub mod panel;
pub mod screen;
pub mod storage;

pub use error::*;
pub use notify::*;
pub use panel::*;
pub use screen::*;
