// apps/panel/src/ui/mount.rs
use common::{Error, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// Tracks whether a CVATH panel is currently mounted in the host.
///
/// Owned by the host app and shared by clone; at most one guard exists at a time.
#[derive(Clone, Default)]
pub struct PanelRegistry {
    mounted: Arc<Mutex<bool>>,
}

impl PanelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        *self.mounted.lock()
    }

    pub fn acquire(&self) -> Result<MountGuard> {
        let mut mounted = self.mounted.lock();
        if *mounted {
            return Err(Error::AlreadyMounted);
        }
        *mounted = true;

        Ok(MountGuard {
            mounted: self.mounted.clone(),
        })
    }
}

/// Releases the mount when dropped
pub struct MountGuard {
    mounted: Arc<Mutex<bool>>,
}

impl Drop for MountGuard {
    fn drop(&mut self) {
        *self.mounted.lock() = false;
    }
}
