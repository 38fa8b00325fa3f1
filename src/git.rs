use crate::error::{GitsumError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

pub struct GitRepo {
    path: PathBuf,
}

impl GitRepo {
    /// Open a repository at `path`, or current dir if `None`
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let path = path
            .map(|p| p.as_ref().to_path_buf())
            .unwrap_or(std::env::current_dir()?);

        let output = Command::new("git")
            .args(["rev-parse", "--git-dir"])
            .current_dir(&path)
            .output()?;
        if !output.status.success() {
            return Err(GitsumError::NotARepository(path.display().to_string()));
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run `git log` with the header/numstat format the parser expects and
    /// return its raw stdout.
    pub fn log_numstat(&self, since: &str, show_progress: bool) -> Result<String> {
        let pb = if show_progress {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            pb.set_message("Reading git history...");
            pb.enable_steady_tick(Duration::from_millis(100));
            Some(pb)
        } else {
            None
        };

        let output = Command::new("git")
            .arg("log")
            .arg(format!("--since={since}"))
            .arg("--pretty=format:%H|%ai|%an")
            .arg("--numstat")
            .current_dir(&self.path)
            .output()?;

        if let Some(pb) = pb {
            pb.finish_and_clear();
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            // a repository with no commits yet is empty history, not a failure
            if stderr.contains("does not have any commits") {
                return Ok(String::new());
            }
            return Err(GitsumError::GitCommand(stderr));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
