
use crate::SessionStore;

use bd_config::UnauthorizedPolicy;
use bd_storage::{MemoryStorage, SessionRepository};

use std::sync::Arc;

pub(crate) use fake_auth_api::{FakeAuthApi, Reply};

pub(crate) struct Harness {
    pub api: Arc<FakeAuthApi>,
    pub storage: Arc<MemoryStorage>,
    pub repository: SessionRepository,
    pub store: SessionStore,
}

pub(crate) fn harness() -> Harness {
    harness_with_policy(UnauthorizedPolicy::ForceLogout)
}

pub(crate) fn harness_with_policy(policy: UnauthorizedPolicy) -> Harness {
    let api = Arc::new(FakeAuthApi::default());
    let storage = Arc::new(MemoryStorage::new());
    let repository = SessionRepository::new(storage.clone());
    let store = SessionStore::new(api.clone(), repository.clone(), policy);
    Harness {
        api,
        storage,
        repository,
        store,
    }
}
