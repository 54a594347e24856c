// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Completable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Log sink setup.
//!
//! The terminal UI owns stdout and stderr, so log lines only go to a file.

use std::{
    error::Error,
    fs::OpenOptions,
    path::{Path, PathBuf},
    sync::Mutex,
};

use tracing_subscriber::EnvFilter;

/// Filter directives, e.g. `completable=debug`.
pub const LOG_FILTER_ENV: &str = "COMPLETABLE_LOG";
/// Path of the file log lines are appended to.
pub const LOG_FILE_ENV: &str = "COMPLETABLE_LOG_FILE";

const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber when a log file is configured. Returns the file in use.
pub fn init_from_env() -> Result<Option<PathBuf>, Box<dyn Error>> {
    let Some(path) = std::env::var_os(LOG_FILE_ENV).map(PathBuf::from) else {
        return Ok(None);
    };
    if path.as_os_str().is_empty() {
        return Ok(None);
    }

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    init_to_file(&path, filter)?;
    Ok(Some(path))
}

/// Appends log lines passing `filter` to `path`. Fails if a global subscriber is already set.
pub fn init_to_file(path: &Path, filter: EnvFilter) -> Result<(), Box<dyn Error>> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| err as Box<dyn Error>)?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tracing_subscriber::EnvFilter;

    use super::init_to_file;

    #[test]
    fn file_subscriber_is_installed_once() {
        let path = std::env::temp_dir().join(format!(
            "completable-log-test-{}.log",
            std::process::id()
        ));
        init_to_file(&path, EnvFilter::new("info")).expect("first install");
        tracing::info!("after install");

        let second = init_to_file(&path, EnvFilter::new("info"));
        assert!(second.is_err());

        let log = fs::read_to_string(&path).expect("read log");
        let _ = fs::remove_file(&path);
        assert!(log.contains("logging started"), "{log:?}");
        assert!(log.contains("after install"), "{log:?}");
    }
}
