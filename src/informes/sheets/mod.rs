pub mod compare;
pub mod config;
pub mod error;
pub mod io;
pub mod matrix;
pub mod report;

pub use error::{Result, ToolError};
