use crate::fixtures::FixtureStore;
use crate::graphql::types::ID;

use super::User;

/// Extension used to decorate the FixtureStore with specialized methods for User
#[async_trait::async_trait]
pub trait FixtureStoreUserExt {
    async fn scan_user(&self) -> Vec<User>;
    async fn get_user(&self, id: &ID) -> Option<User>;
}

#[async_trait::async_trait]
impl FixtureStoreUserExt for FixtureStore {
    async fn scan_user(&self) -> Vec<User> {
        self.users().to_vec()
    }

    // Linear scan, first match wins. Fine at fixture sizes.
    async fn get_user(&self, id: &ID) -> Option<User> {
        self.users().iter().find(|user| user.id == *id).cloned()
    }
}
