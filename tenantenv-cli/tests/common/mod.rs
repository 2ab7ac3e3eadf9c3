//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers that isolate tests from the caller's env vars
//! - Test data fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The tenant description used by most tests.
#[allow(dead_code)]
pub const ONE_POOL_TENANT: &str = "name: tenant
namespace: ns-x
pools:
  - name: pool-0
    servers: 4
    volumesPerServer: 4
consoleDomain: http://console.minio
env:
  - name: TEST
    value: value
";

/// Persisted text holding credentials set outside the tenant description.
#[allow(dead_code)]
pub const PRIOR_SECRET: &str = "export S3_ROOT_USER=\"minio\"
export S3_ROOT_PASSWORD=\"minio123\"
export S3_STORAGE_CLASS_STANDARD=\"EC:2\"
export S3_BROWSER=\"on\"
";

/// Expected `render` output for [`ONE_POOL_TENANT`] with [`PRIOR_SECRET`].
#[allow(dead_code)]
pub const ONE_POOL_RENDERED: &str = "export S3_ARGS=\"https://tenant-pool-0-{0...3}.tenant-hl.ns-x.svc.cluster.local/export{0...3}\"
export S3_BROWSER=\"on\"
export S3_BROWSER_REDIRECT_URL=\"http://console.minio\"
export S3_PROMETHEUS_JOB_ID=\"minio-job\"
export S3_ROOT_PASSWORD=\"minio123\"
export S3_ROOT_USER=\"minio\"
export S3_SERVER_URL=\"https://minio.ns-x.svc.cluster.local:443\"
export S3_STORAGE_CLASS_STANDARD=\"EC:2\"
export S3_UPDATE=\"on\"
export S3_UPDATE_MINISIGN_PUBKEY=\"RWTx5Zr1tiHQLwG9keckT0c45M3AGeHD6IvimQHpyRywVWGbP1aVSGav\"
export TEST=\"value\"
";

/// Test environment with an isolated temporary directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder for the tenantenv binary.
    ///
    /// Environment variables that the CLI reads are cleared so tests do not
    /// pick up settings from the developer's shell.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("tenantenv").expect("Failed to find tenantenv binary");
        cmd.env_remove("TENANTENV_TENANT")
            .env_remove("TENANTENV_PRIOR")
            .env_remove("TENANTENV_OUTPUT_FORMAT")
            .env_remove("TENANTENV_LOG_MODE")
            .current_dir(&self.temp_path);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file under the temporary directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write the standard one-pool tenant description.
    pub fn one_pool_tenant(&self) -> PathBuf {
        self.write_file("tenant.yaml", ONE_POOL_TENANT)
    }

    /// Write the standard prior secret.
    pub fn prior_secret(&self) -> PathBuf {
        self.write_file("prior.env", PRIOR_SECRET)
    }

    /// Run `render` and return stdout.
    ///
    /// # Panics
    /// Panics if the command fails.
    pub fn render(&self, tenant: &Path, prior: Option<&Path>) -> String {
        let mut cmd = self.command();
        cmd.arg("render").arg("--tenant").arg(tenant);
        if let Some(prior) = prior {
            cmd.arg("--prior").arg(prior);
        }
        let output = cmd.output().expect("Failed to run render command");

        assert!(
            output.status.success(),
            "Render failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}
