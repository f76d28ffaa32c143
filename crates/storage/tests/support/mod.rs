#![forbid(unsafe_code)]
#![allow(dead_code)]

use cpt_storage::CustomTextStore;
use std::path::PathBuf;

pub(crate) struct StorageGuard {
    dir: PathBuf,
}

impl Drop for StorageGuard {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}

pub(crate) fn open_initialized(test_name: &str) -> (CustomTextStore, StorageGuard) {
    let (store, guard) = open_raw(test_name);
    store.initialize().expect("initialize store");
    (store, guard)
}

pub(crate) fn open_raw(test_name: &str) -> (CustomTextStore, StorageGuard) {
    let dir = temp_dir(test_name);
    let store = CustomTextStore::open(&dir).expect("open store");
    (store, StorageGuard { dir })
}

fn temp_dir(test_name: &str) -> PathBuf {
    let base = std::env::temp_dir();
    let pid = std::process::id();
    let nonce = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    base.join(format!("cpt_storage_{test_name}_{pid}_{nonce}"))
}
