//! Docker operations for rebuildr: image build, push, and local
//! inspection.

pub mod client;
pub mod error;
pub mod executor;

pub use client::DockerClient;
pub use error::DockerError;
pub use executor::{DockerExecutor, RealDockerExecutor};
