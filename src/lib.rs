//! sccop - client library and CLI for the IBM Security and Compliance Center
//!
//! The [`client`] module is the SDK: one request options type per
//! operation, a shared request pipeline, and typed response models. The
//! remaining modules back the `sccop` binary.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod output;

pub use client::{ClientOptions, SecurityComplianceApi, SecurityComplianceClient};
pub use error::{Error, Result};
