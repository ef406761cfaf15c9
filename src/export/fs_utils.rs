use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Check whether a file may be created or overwritten.
///
/// - File does not exist → Ok
/// - File exists and `force` is set → Ok
/// - File exists otherwise → ask the user; declining cancels the export
///   (reported as an error so nothing downstream runs, but no state is
///   lost).
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer).map_err(AppError::from)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "cancelled: existing file not overwritten".into(),
        ))
    }
}

/// Guard against overlapping export runs on the same output file.
/// Holds a `<file>.lock` marker for its lifetime; a second export against
/// the same target fails fast instead of racing the first.
pub(crate) struct ExportGuard {
    lock_path: PathBuf,
}

impl ExportGuard {
    pub(crate) fn acquire(target: &Path) -> AppResult<Self> {
        let lock_path = target.with_extension("lock");

        match OpenOptions::new().write(true).create_new(true).open(&lock_path) {
            Ok(_) => Ok(Self { lock_path }),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Err(AppError::Export(format!(
                "another export to '{}' is already in progress",
                target.display()
            ))),
            Err(e) => Err(e.into()),
        }
    }
}

impl Drop for ExportGuard {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.lock_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn guard_blocks_second_acquire_until_dropped() {
        let mut target = env::temp_dir();
        target.push("stz_guard_test.pdf");

        let first = ExportGuard::acquire(&target).unwrap();
        assert!(ExportGuard::acquire(&target).is_err());
        drop(first);
        let again = ExportGuard::acquire(&target).unwrap();
        drop(again);
    }
}
