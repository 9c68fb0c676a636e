mod config;

use tempfile::TempDir;

/// Restores the previous value of an environment variable on drop.
pub(crate) struct EnvGuard {
    name: String,
    previous: Option<String>,
}

impl EnvGuard {
    pub fn set(name: &str, value: &str) -> Self {
        let previous = std::env::var(name).ok();
        unsafe { std::env::set_var(name, value) };
        Self {
            name: name.to_string(),
            previous,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.previous {
            Some(value) => unsafe { std::env::set_var(&self.name, value) },
            None => unsafe { std::env::remove_var(&self.name) },
        }
    }
}

/// Point ST_CONFIG_DIR at a fresh temp directory for the duration of a test.
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = tempfile::tempdir().unwrap();
    let guard = EnvGuard::set("ST_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}
