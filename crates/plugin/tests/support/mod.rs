#![forbid(unsafe_code)]
#![allow(dead_code)]

use cpt_plugin::admin::PostTitles;
use cpt_storage::CustomTextStore;
use std::collections::HashMap;
use std::path::PathBuf;

pub(crate) struct StorageGuard {
    dir: PathBuf,
}

impl Drop for StorageGuard {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}

pub(crate) fn open_store(test_name: &str) -> (CustomTextStore, StorageGuard) {
    let (store, guard) = open_raw(test_name);
    store.initialize().expect("initialize store");
    (store, guard)
}

pub(crate) fn open_raw(test_name: &str) -> (CustomTextStore, StorageGuard) {
    let dir = temp_dir(test_name);
    let store = CustomTextStore::open(&dir).expect("open store");
    (store, StorageGuard { dir })
}

// Host post-title collaborator backed by a fixed map.
pub(crate) struct FixedTitles(HashMap<i64, String>);

impl FixedTitles {
    pub(crate) fn new(entries: &[(i64, &str)]) -> Self {
        Self(
            entries
                .iter()
                .map(|(post_id, title)| (*post_id, (*title).to_string()))
                .collect(),
        )
    }

    pub(crate) fn empty() -> Self {
        Self(HashMap::new())
    }
}

impl PostTitles for FixedTitles {
    fn title(&self, post_id: i64) -> Option<String> {
        self.0.get(&post_id).cloned()
    }
}

fn temp_dir(test_name: &str) -> PathBuf {
    let base = std::env::temp_dir();
    let pid = std::process::id();
    let nonce = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    base.join(format!("cpt_plugin_{test_name}_{pid}_{nonce}"))
}
