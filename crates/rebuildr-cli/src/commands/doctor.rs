use std::path::Path;

use rebuildr_core::RebuildrConfig;
use rebuildr_docker::DockerClient;
use rebuildr_git::GitClient;
use rebuildr_pipeline::{CheckResult, Runner};

pub async fn doctor() -> anyhow::Result<()> {
    let loaded = RebuildrConfig::load(Path::new("."));

    // Diagnostics must run even when rebuildr.toml is missing or invalid.
    let config_check = match (&loaded, Path::new("rebuildr.toml").exists()) {
        (Ok(_), true) => CheckResult::ok("Found"),
        (Ok(_), false) => CheckResult::fail("Not found — run `rebuildr init`"),
        (Err(e), _) => CheckResult::fail(&e.to_string()),
    };
    let config = loaded.unwrap_or_default();

    let runner = Runner::new(GitClient::new(), DockerClient::new(), config);
    let mut report = runner.doctor().await;
    report.config_file = config_check;

    println!();
    println!("{report}");

    if !report.all_passed() {
        anyhow::bail!("some checks failed — see above for details");
    }

    Ok(())
}
