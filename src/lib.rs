//! # SQL Splitter Library
//!
//! Splits SQL text into statements for display and keeps a de-duplicated
//! statement history.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod history;
pub mod output;
pub mod splitter;
