use std::collections::BTreeSet;

use crate::types::{application_address, Address, AppId};

/// Resolves application ids to their accounts.
pub trait AppDirectory {
    /// `None` if no application with this id exists.
    fn app_address(&self, app: AppId) -> Option<Address>;
}

/// In-memory set of created applications.
#[derive(Debug, Default, Clone)]
pub struct Applications {
    created: BTreeSet<AppId>,
}

impl Applications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `app` and returns its account address.
    pub fn create(&mut self, app: AppId) -> Address {
        self.created.insert(app);
        application_address(app)
    }

    pub fn contains(&self, app: AppId) -> bool {
        self.created.contains(&app)
    }
}

impl AppDirectory for Applications {
    fn app_address(&self, app: AppId) -> Option<Address> {
        self.contains(app).then(|| application_address(app))
    }
}

impl<T: AppDirectory + ?Sized> AppDirectory for &T {
    fn app_address(&self, app: AppId) -> Option<Address> {
        (**self).app_address(app)
    }
}
