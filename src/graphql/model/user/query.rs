use async_graphql::{Context, Object};

use crate::fixtures::FixtureStore;

use super::extensions::FixtureStoreUserExt;
use super::User;

#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
    async fn get_all_users(&self, ctx: &Context<'_>) -> Vec<User> {
        let store = ctx.data_unchecked::<FixtureStore>();
        store.scan_user().await
    }
}
