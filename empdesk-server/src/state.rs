//! Application state shared across handlers

use std::sync::Arc;

use crate::store::EmployeeStore;

/// Shared application state
///
/// Holds the injected record store; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn EmployeeStore>,
}

impl AppState {
    pub fn new(store: impl EmployeeStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn from_shared(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn EmployeeStore {
        self.store.as_ref()
    }
}
