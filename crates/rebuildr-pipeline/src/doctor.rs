use std::fmt;

use rebuildr_docker::DockerExecutor;
use rebuildr_git::GitExecutor;

use crate::runner::Runner;

impl<G: GitExecutor, D: DockerExecutor> Runner<G, D> {
    /// Run all diagnostic checks without early return.
    /// Returns a report with pass/fail for each check item.
    pub async fn doctor(&self) -> DoctorReport {
        let mut report = DoctorReport::default();

        // 1. git CLI
        match self.git.version().await {
            Ok(v) => report.git = CheckResult::ok(&v),
            Err(e) => report.git = CheckResult::fail(&e.to_string()),
        }

        // 2. docker daemon
        match self.docker.version().await {
            Ok(v) => report.docker = CheckResult::ok(&format!("server {v}")),
            Err(e) => report.docker = CheckResult::fail(&e.to_string()),
        }

        // 3. working copy
        let dir = &self.config.source.dir;
        if self.git.is_work_tree(dir).await {
            report.work_tree = CheckResult::ok(&dir.display().to_string());
        } else {
            report.work_tree =
                CheckResult::fail(&format!("{} is not a git work tree", dir.display()));
        }

        // 4. local image (informational: a fresh setup has none yet)
        let image = self.config.image_ref().to_string();
        match self.docker.image_created(dir, &image).await {
            Some(created) => report.image = CheckResult::ok(&format!("{image} (built {created})")),
            None => report.image = CheckResult::ok(&format!("{image} — not built yet")),
        }

        report
    }
}

#[derive(Debug, Default)]
pub struct DoctorReport {
    pub git: CheckResult,
    pub docker: CheckResult,
    pub work_tree: CheckResult,
    pub image: CheckResult,
    pub config_file: CheckResult,
}

impl DoctorReport {
    pub fn all_passed(&self) -> bool {
        self.git.passed
            && self.docker.passed
            && self.work_tree.passed
            && self.image.passed
            && self.config_file.passed
    }
}

impl fmt::Display for DoctorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = [
            ("git", &self.git),
            ("docker", &self.docker),
            ("work tree", &self.work_tree),
            ("image", &self.image),
            ("config file", &self.config_file),
        ];
        for (name, check) in rows {
            writeln!(f, "[{}] {name:<12} {}", check.icon(), check.detail)?;
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct CheckResult {
    pub passed: bool,
    pub detail: String,
}

impl CheckResult {
    pub fn ok(detail: &str) -> Self {
        Self {
            passed: true,
            detail: detail.to_owned(),
        }
    }

    pub fn fail(detail: &str) -> Self {
        Self {
            passed: false,
            detail: detail.to_owned(),
        }
    }

    pub fn icon(&self) -> &'static str {
        if self.passed { "OK" } else { "NG" }
    }
}
