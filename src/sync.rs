#[cfg(not(all(test, feature = "loom")))]
use core::sync::atomic::{AtomicU8, Ordering};

#[cfg(all(test, feature = "loom"))]
use loom::sync::atomic::{AtomicU8, Ordering};

use crate::levels::Level;

/// Level threshold shared between a [`Logger`](crate::Logger) and every backend it
/// builds, so changing the level never requires a rebuild.
pub(crate) struct AtomicLevel {
    inner: AtomicU8,
}

impl core::fmt::Debug for AtomicLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("AtomicLevel").field(&self.load()).finish()
    }
}

impl AtomicLevel {
    pub fn new(level: Level) -> Self {
        Self {
            inner: AtomicU8::new(level as u8),
        }
    }

    pub fn load(&self) -> Level {
        // Only `store` writes, and it only writes valid discriminants.
        Level::from_u8(self.inner.load(Ordering::Acquire)).unwrap_or(Level::Debug)
    }

    pub fn store(&self, level: Level) {
        self.inner.store(level as u8, Ordering::Release);
    }

    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.load()
    }
}
