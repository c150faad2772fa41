use std::path::Path;
use std::sync::{Arc, Mutex};

use mockall::mock;
use rebuildr_core::RebuildrConfig;
use rebuildr_docker::client::DockerClient;
use rebuildr_docker::error::DockerError;
use rebuildr_docker::executor::DockerExecutor;
use rebuildr_git::client::GitClient;
use rebuildr_git::error::GitError;
use rebuildr_git::executor::GitExecutor;
use rebuildr_pipeline::{banner, Outcome, RunError, Runner};

mock! {
    GitExec {}

    impl GitExecutor for GitExec {
        async fn exec(&self, dir: &Path, args: &[String]) -> Result<String, GitError>;
        async fn exec_streaming(&self, dir: &Path, args: &[String]) -> Result<(), GitError>;
    }
}

mock! {
    DockerExec {}

    impl DockerExecutor for DockerExec {
        async fn exec(&self, dir: &Path, args: &[String]) -> Result<String, DockerError>;
        async fn exec_streaming(&self, dir: &Path, args: &[String]) -> Result<(), DockerError>;
    }
}

const REMOTE_SHOW_STALE: &str = "\
* remote origin
  HEAD branch: main
  Local ref configured for 'git push':
    main pushes to main (local out of date)
";

const REMOTE_SHOW_CURRENT: &str = "\
* remote origin
  HEAD branch: main
  Local ref configured for 'git push':
    main pushes to main (up to date)
";

fn runner(git: MockGitExec, docker: MockDockerExec) -> Runner<MockGitExec, MockDockerExec> {
    Runner::new(
        GitClient::with_executor(git),
        DockerClient::with_executor(docker),
        RebuildrConfig::default(),
    )
}

// Unexpected mock calls panic, so a mock without expectations proves the
// corresponding tool was never invoked.

#[tokio::test]
async fn override_false_invokes_nothing() {
    let run = runner(MockGitExec::new(), MockDockerExec::new())
        .run(Some(false))
        .await
        .unwrap();

    assert_eq!(run, Outcome::UpToDate);
}

#[tokio::test]
async fn override_true_runs_sync_build_publish_in_order() {
    let calls = Arc::new(Mutex::new(Vec::new()));

    let mut git = MockGitExec::new();
    let log = Arc::clone(&calls);
    git.expect_exec_streaming()
        .withf(|_, args| args == ["pull", "origin"])
        .returning(move |_, _| {
            log.lock().unwrap().push("sync".to_owned());
            Ok(())
        });

    let mut docker = MockDockerExec::new();
    let log = Arc::clone(&calls);
    docker.expect_exec_streaming().returning(move |_, args| {
        match args.first().map(String::as_str) {
            Some("build") => log.lock().unwrap().push("build".to_owned()),
            Some("push") => log.lock().unwrap().push("publish".to_owned()),
            other => panic!("unexpected docker command: {other:?}"),
        }
        Ok(())
    });

    let run = runner(git, docker).run(Some(true)).await.unwrap();

    assert_eq!(
        run,
        Outcome::Rebuilt {
            image: "mqtt-exporter:latest".to_owned()
        }
    );
    assert_eq!(*calls.lock().unwrap(), ["sync", "build", "publish"]);
}

#[tokio::test]
async fn override_skips_the_staleness_probe() {
    let mut git = MockGitExec::new();
    // Only the pull is expected; a probe would panic the mock.
    git.expect_exec_streaming().returning(|_, _| Ok(()));

    let mut docker = MockDockerExec::new();
    docker.expect_exec_streaming().returning(|_, _| Ok(()));

    runner(git, docker).run(Some(true)).await.unwrap();
}

#[tokio::test]
async fn stale_remote_triggers_full_rebuild() {
    let mut git = MockGitExec::new();
    git.expect_exec()
        .withf(|_, args| args == ["remote", "show", "origin"])
        .returning(|_, _| Ok(REMOTE_SHOW_STALE.to_owned()));
    git.expect_exec_streaming()
        .withf(|_, args| args == ["pull", "origin"])
        .returning(|_, _| Ok(()));

    let mut docker = MockDockerExec::new();
    docker.expect_exec_streaming().times(2).returning(|_, _| Ok(()));

    let run = runner(git, docker).run(None).await.unwrap();

    assert!(matches!(run, Outcome::Rebuilt { .. }));
}

#[tokio::test]
async fn current_remote_is_a_no_op() {
    let mut git = MockGitExec::new();
    git.expect_exec()
        .withf(|_, args| args == ["remote", "show", "origin"])
        .returning(|_, _| Ok(REMOTE_SHOW_CURRENT.to_owned()));

    let run = runner(git, MockDockerExec::new()).run(None).await.unwrap();

    assert_eq!(run, Outcome::UpToDate);
}

#[tokio::test]
async fn probe_failure_is_reported_as_such() {
    let mut git = MockGitExec::new();
    git.expect_exec().returning(|_, args| {
        Err(GitError::CommandFailed {
            args: args.to_vec(),
            stderr: "fatal: unable to access remote".to_owned(),
            code: Some(128),
        })
    });

    let err = runner(git, MockDockerExec::new())
        .run(None)
        .await
        .unwrap_err();

    assert!(matches!(err, RunError::Probe { .. }));
    assert_eq!(err.exit_code(), 128);
}

#[tokio::test]
async fn sync_failure_aborts_before_build() {
    let mut git = MockGitExec::new();
    git.expect_exec_streaming().returning(|_, args| {
        Err(GitError::CommandFailed {
            args: args.to_vec(),
            stderr: "error: Your local changes would be overwritten by merge".to_owned(),
            code: Some(1),
        })
    });

    // No docker expectations: build and publish must never run.
    let err = runner(git, MockDockerExec::new())
        .run(Some(true))
        .await
        .unwrap_err();

    assert!(matches!(err, RunError::Sync { .. }));
    assert_eq!(err.exit_code(), 1);
}

#[tokio::test]
async fn build_failure_skips_publish() {
    let mut git = MockGitExec::new();
    git.expect_exec_streaming().returning(|_, _| Ok(()));

    let mut docker = MockDockerExec::new();
    // Only the build is expected; a push would panic the mock.
    docker
        .expect_exec_streaming()
        .withf(|_, args| args.first().map(String::as_str) == Some("build"))
        .returning(|_, args| {
            Err(DockerError::CommandFailed {
                args: args.to_vec(),
                stderr: "exit code: exit status: 2".to_owned(),
                code: Some(2),
            })
        });

    let err = runner(git, docker).run(Some(true)).await.unwrap_err();

    assert!(matches!(err, RunError::Build { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[tokio::test]
async fn publish_failure_surfaces_after_build() {
    let mut git = MockGitExec::new();
    git.expect_exec_streaming().returning(|_, _| Ok(()));

    let mut docker = MockDockerExec::new();
    docker
        .expect_exec_streaming()
        .withf(|_, args| args.first().map(String::as_str) == Some("build"))
        .returning(|_, _| Ok(()));
    docker
        .expect_exec_streaming()
        .withf(|_, args| args.first().map(String::as_str) == Some("push"))
        .returning(|_, args| {
            Err(DockerError::CommandFailed {
                args: args.to_vec(),
                stderr: "denied: authentication required".to_owned(),
                code: Some(1),
            })
        });

    let err = runner(git, docker).run(Some(true)).await.unwrap_err();

    assert!(matches!(err, RunError::Publish { .. }));
}

#[tokio::test]
async fn decide_prefers_override_to_probe() {
    // A probe would panic: no expectations are set.
    let decision = runner(MockGitExec::new(), MockDockerExec::new())
        .decide(Some(true))
        .await
        .unwrap();

    assert!(decision);
}

#[test]
fn banner_names_image_and_run_command() {
    let text = banner("ghcr.io/acme/exporter:latest");

    assert!(text.contains("ghcr.io/acme/exporter:latest"));
    assert!(text.contains("docker run --rm ghcr.io/acme/exporter:latest"));
}
