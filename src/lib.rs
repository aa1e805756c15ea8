//! Core library for the informes-sheets command line application.
//!
//! The library compares the worksheet structure of a fixed set of generated
//! financial reports. Workbook IO lives under [`informes::sheets::io`], the
//! group definitions in [`informes::sheets::config`], the presence matrix in
//! [`informes::sheets::matrix`], table rendering in [`informes::sheets::report`],
//! and the orchestration in [`informes::sheets::compare`].

pub mod informes;

pub use informes::sheets::{Result, ToolError, compare, config, error, io, matrix, report};
