//! Core types and configuration for rebuildr.
//!
//! This crate defines the `rebuildr.toml` schema ([`RebuildrConfig`]),
//! the container image reference type ([`ImageRef`]), and shared error
//! types.

pub mod config;
pub mod error;
pub mod image;

pub use config::{ImageConfig, RebuildrConfig, SourceConfig};
pub use error::{Error, Result};
pub use image::ImageRef;
