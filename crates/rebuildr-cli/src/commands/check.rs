use std::path::Path;

use rebuildr_core::RebuildrConfig;
use rebuildr_git::GitClient;

/// Report whether the working copy is behind its remote, without
/// rebuilding anything.
pub async fn check() -> anyhow::Result<()> {
    let config = RebuildrConfig::load(Path::new("."))?;
    let client = GitClient::new();

    let stale = client
        .is_stale(&config.source.dir, &config.source.remote)
        .await?;

    if stale {
        println!(
            "Working copy is behind {remote} — run `rebuildr run` to rebuild.",
            remote = config.source.remote
        );
    } else {
        println!(
            "Working copy is up to date with {remote}.",
            remote = config.source.remote
        );
    }

    Ok(())
}
