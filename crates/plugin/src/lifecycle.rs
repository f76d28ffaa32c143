#![forbid(unsafe_code)]

use cpt_storage::{CustomTextStore, StoreError};

// Activation hook: provision the backing table. Repeated activations are
// no-ops and never lose entries.
pub fn activate(store: &CustomTextStore) -> Result<(), StoreError> {
    store.initialize()
}

// Uninstall hook: drop the table and every entry with it. Irreversible.
pub fn uninstall(store: &CustomTextStore) -> Result<(), StoreError> {
    store.teardown()
}
