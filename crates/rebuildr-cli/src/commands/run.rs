use std::error::Error as _;
use std::path::Path;

use rebuildr_core::RebuildrConfig;
use rebuildr_docker::DockerClient;
use rebuildr_git::GitClient;
use rebuildr_pipeline::{banner, Outcome, Runner};

/// Execute the rebuild pipeline.
///
/// On a pipeline failure the process exits with the failing tool's own
/// status when known, so callers see the same code the tool reported.
pub async fn run(rebuild_override: Option<bool>) -> anyhow::Result<()> {
    let config = RebuildrConfig::load(Path::new("."))?;
    let runner = Runner::new(GitClient::new(), DockerClient::new(), config);

    match runner.run(rebuild_override).await {
        Ok(Outcome::UpToDate) => {
            println!("Source is current — nothing to do.");
            Ok(())
        }
        Ok(Outcome::Rebuilt { image }) => {
            println!();
            println!("{}", banner(&image));
            Ok(())
        }
        Err(e) => {
            eprintln!("error: {e}");
            if let Some(source) = e.source() {
                eprintln!("  {source}");
            }
            std::process::exit(e.exit_code());
        }
    }
}

/// Accepts the boolean-like forms of the rebuild override.
pub fn parse_override(s: &str) -> Result<bool, String> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(format!("expected true/false, 1/0, or yes/no, got '{other}'")),
    }
}
