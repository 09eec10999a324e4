//! Scratch area for fetched catalogs
//!
//! A [`ScratchArea`] is removed when dropped. Live areas are also tracked in a
//! process-wide list so that a Ctrl-C arriving mid-fetch still removes them
//! before the process exits.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, Once, PoisonError};

use tempfile::TempDir;

use crate::error::{Result, write_failed};

/// Exit code used when the process is interrupted
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

static LIVE_AREAS: Mutex<Vec<PathBuf>> = Mutex::new(Vec::new());

/// Directory under which scratch areas are created
///
/// Never relative, so scratch areas never land under the current directory
/// (e.g. when TMPDIR=tmp).
pub fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        return t;
    }
    #[cfg(windows)]
    {
        env::var("TEMP")
            .or_else(|_| env::var("TMP"))
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
    }
    #[cfg(not(windows))]
    {
        PathBuf::from("/tmp")
    }
}

/// Temporary directory with guaranteed removal
#[derive(Debug)]
pub struct ScratchArea {
    dir: TempDir,
}

impl ScratchArea {
    pub fn create() -> Result<Self> {
        install_interrupt_handler();

        let base = temp_dir_base();
        let dir = tempfile::Builder::new()
            .prefix("skilldeploy-")
            .tempdir_in(&base)
            .map_err(|e| write_failed(&base, &e))?;

        register(dir.path());
        tracing::debug!(path = %dir.path().display(), "created scratch area");
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

impl Drop for ScratchArea {
    fn drop(&mut self) {
        // TempDir removes the directory right after this
        deregister(self.dir.path());
        tracing::debug!(path = %self.dir.path().display(), "removing scratch area");
    }
}

fn live_areas() -> std::sync::MutexGuard<'static, Vec<PathBuf>> {
    LIVE_AREAS.lock().unwrap_or_else(PoisonError::into_inner)
}

fn register(path: &Path) {
    live_areas().push(path.to_path_buf());
}

fn deregister(path: &Path) {
    live_areas().retain(|p| p != path);
}

/// Remove every live scratch area; used on interrupt
pub fn remove_live_areas() {
    for path in live_areas().drain(..) {
        if let Err(e) = std::fs::remove_dir_all(&path) {
            tracing::warn!(path = %path.display(), error = %e, "failed to remove scratch area");
        }
    }
}

/// Watch for Ctrl-C on a background thread
///
/// The watcher only runs once a scratch area exists. On interrupt it removes
/// all live areas and exits with [`INTERRUPTED_EXIT_CODE`].
fn install_interrupt_handler() {
    static INSTALLED: Once = Once::new();

    INSTALLED.call_once(|| {
        let spawned = std::thread::Builder::new()
            .name("skilldeploy-interrupt".to_string())
            .spawn(|| {
                let runtime = match tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                {
                    Ok(runtime) => runtime,
                    Err(e) => {
                        tracing::warn!(error = %e, "interrupt watcher unavailable");
                        return;
                    }
                };

                if runtime.block_on(tokio::signal::ctrl_c()).is_ok() {
                    remove_live_areas();
                    eprintln!();
                    std::process::exit(INTERRUPTED_EXIT_CODE);
                }
            });

        if let Err(e) = spawned {
            tracing::warn!(error = %e, "failed to start interrupt watcher");
        }
    });
}
