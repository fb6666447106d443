mod config;

use std::env;

use tempfile::TempDir;

pub(crate) const TEST_SECRET: &str = "12345678901234567890123456789012";

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory and set PLANETARY_CONFIG_DIR
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set(crate::CONFIG_DIR_ENV, temp.path().to_str().unwrap());
    (temp, guard)
}

/// Config dir plus a valid JWT secret, so validate() passes by default
pub(crate) fn setup_valid_config_dir() -> (TempDir, EnvGuard, EnvGuard) {
    let (temp, dir_guard) = setup_config_dir();
    let secret_guard = EnvGuard::set("PLANETARY_AUTH_JWT_SECRET", TEST_SECRET);
    (temp, dir_guard, secret_guard)
}

pub(crate) fn write_config(temp: &TempDir, contents: &str) {
    std::fs::write(temp.path().join(crate::CONFIG_FILE_NAME), contents).unwrap();
}
