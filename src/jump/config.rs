//! # State Directory Discovery
//!
//! The only configuration jump has is where it keeps its files. Resolution
//! order:
//!
//! 1. An explicit directory (the `--dir` flag).
//! 2. `$JUMP_HOME`.
//! 3. `~/.jump`, but only if it already exists. Older installs keep working.
//! 4. `$XDG_CONFIG_HOME/jump`.
//! 5. The platform configuration directory (via `directories`) joined with `jump`.
//!
//! Resolution is split into [`DirsEnv`], a snapshot of the environment, and the
//! pure [`resolve_config_dir`], so it can be tested without mutating the
//! process environment.

use crate::error::{JumpError, Result};
use directories::BaseDirs;
use std::env;
use std::path::{Path, PathBuf};

pub const HOME_ENV: &str = "JUMP_HOME";
pub const XDG_CONFIG_ENV: &str = "XDG_CONFIG_HOME";

const DEFAULT_HOME_DIR: &str = ".jump";
const DEFAULT_CONFIG_DIR: &str = "jump";

/// The bits of the environment that decide where state lives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirsEnv {
    pub jump_home: Option<PathBuf>,
    pub home: Option<PathBuf>,
    pub xdg_config_home: Option<PathBuf>,
    pub platform_config: Option<PathBuf>,
}

impl DirsEnv {
    pub fn from_process() -> Self {
        let base = BaseDirs::new();
        Self {
            jump_home: non_empty_var(HOME_ENV),
            home: base.as_ref().map(|b| b.home_dir().to_path_buf()),
            xdg_config_home: non_empty_var(XDG_CONFIG_ENV),
            platform_config: base.as_ref().map(|b| b.config_dir().to_path_buf()),
        }
    }
}

fn non_empty_var(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Find the state directory for this process.
pub fn find_config_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    resolve_config_dir(explicit, &DirsEnv::from_process())
}

pub fn resolve_config_dir(explicit: Option<&Path>, env: &DirsEnv) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = &env.jump_home {
        return Ok(dir.clone());
    }

    let home = env.home.as_ref().ok_or_else(|| {
        JumpError::Config(format!(
            "cannot determine the home directory; set ${} to choose a state directory",
            HOME_ENV
        ))
    })?;

    let legacy = home.join(DEFAULT_HOME_DIR);
    if legacy.exists() {
        return Ok(legacy);
    }

    if let Some(xdg) = &env.xdg_config_home {
        return Ok(xdg.join(DEFAULT_CONFIG_DIR));
    }

    match &env.platform_config {
        Some(config) => Ok(config.join(DEFAULT_CONFIG_DIR)),
        None => Ok(legacy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn env_with_home(home: &Path) -> DirsEnv {
        DirsEnv {
            home: Some(home.to_path_buf()),
            platform_config: Some(home.join(".config")),
            ..DirsEnv::default()
        }
    }

    #[test]
    fn explicit_dir_wins() {
        let temp = TempDir::new().unwrap();
        let mut env = env_with_home(temp.path());
        env.jump_home = Some(PathBuf::from("/from/env"));

        let dir = resolve_config_dir(Some(Path::new("/explicit")), &env).unwrap();
        assert_eq!(dir, PathBuf::from("/explicit"));
    }

    #[test]
    fn jump_home_beats_home_lookup() {
        let env = DirsEnv {
            jump_home: Some(PathBuf::from("/from/env")),
            ..DirsEnv::default()
        };
        assert_eq!(
            resolve_config_dir(None, &env).unwrap(),
            PathBuf::from("/from/env")
        );
    }

    #[test]
    fn existing_legacy_dir_is_kept() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".jump")).unwrap();
        let mut env = env_with_home(temp.path());
        env.xdg_config_home = Some(temp.path().join("xdg"));

        let dir = resolve_config_dir(None, &env).unwrap();
        assert_eq!(dir, temp.path().join(".jump"));
    }

    #[test]
    fn new_install_prefers_xdg() {
        let temp = TempDir::new().unwrap();
        let mut env = env_with_home(temp.path());
        env.xdg_config_home = Some(temp.path().join("xdg"));

        let dir = resolve_config_dir(None, &env).unwrap();
        assert_eq!(dir, temp.path().join("xdg").join("jump"));
    }

    #[test]
    fn falls_back_to_platform_config() {
        let temp = TempDir::new().unwrap();
        let env = env_with_home(temp.path());

        let dir = resolve_config_dir(None, &env).unwrap();
        assert_eq!(dir, temp.path().join(".config").join("jump"));
    }

    #[test]
    fn missing_home_is_a_config_error() {
        let err = resolve_config_dir(None, &DirsEnv::default()).unwrap_err();
        assert!(matches!(err, JumpError::Config(_)));
    }
}
