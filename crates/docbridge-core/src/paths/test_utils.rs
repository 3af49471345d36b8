//! Scoped overrides of the docbridge environment variables for tests.

use std::env;
use std::ffi::{OsStr, OsString};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{DATA_DIR_ENV, DEFAULT_ROOT_ENV};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Exclusive access to the process environment for the life of the value.
///
/// Both docbridge variables are cleared on entry, so a developer's own
/// `DOCBRIDGE_DEFAULT_ROOT` never leaks into a test. Every variable touched
/// is restored on drop, before the lock is released.
///
/// ```ignore
/// let _env = ScopedEnv::acquire().set(DATA_DIR_ENV, temp.path());
/// ```
pub struct ScopedEnv {
    saved: Vec<(&'static str, Option<OsString>)>,
    _lock: MutexGuard<'static, ()>,
}

impl ScopedEnv {
    pub fn acquire() -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let mut scoped = Self {
            saved: Vec::new(),
            _lock: lock,
        };
        for key in [DATA_DIR_ENV, DEFAULT_ROOT_ENV] {
            scoped.replace(key, None);
        }
        scoped
    }

    pub fn set(mut self, key: &'static str, value: impl AsRef<OsStr>) -> Self {
        self.replace(key, Some(value.as_ref()));
        self
    }

    #[allow(unsafe_code)]
    fn replace(&mut self, key: &'static str, value: Option<&OsStr>) {
        if !self.saved.iter().any(|(k, _)| *k == key) {
            self.saved.push((key, env::var_os(key)));
        }
        // SAFETY: ENV_LOCK serializes every test that touches these variables.
        unsafe {
            match value {
                Some(value) => env::set_var(key, value),
                None => env::remove_var(key),
            }
        }
    }
}

impl Drop for ScopedEnv {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        for (key, previous) in self.saved.drain(..).rev() {
            // SAFETY: the lock is still held; `_lock` drops after this body.
            unsafe {
                match previous {
                    Some(value) => env::set_var(key, value),
                    None => env::remove_var(key),
                }
            }
        }
    }
}
