use std::path::Path;

/// Write a rebuildr.toml skeleton into the current directory.
pub async fn init() -> anyhow::Result<()> {
    let path = Path::new("rebuildr.toml");
    if path.exists() {
        anyhow::bail!("rebuildr.toml already exists — refusing to overwrite");
    }

    let skeleton = r#"[source]
# Working copy that is kept in sync with its remote.
dir = "."
# remote = "origin"

[image]
name = "mqtt-exporter"
# tag = "latest"
# registry = "registry.example.com/homelab"
# dockerfile = "Dockerfile"
# context = "."
"#;
    std::fs::write(path, skeleton)?;

    println!("Created rebuildr.toml");
    println!();
    println!("Next steps:");
    println!("  1. Point [source].dir at the git working copy to watch.");
    println!("  2. Name the image to build and push under [image].");
    println!("  3. Run `rebuildr doctor` to verify git and docker are ready.");

    Ok(())
}
