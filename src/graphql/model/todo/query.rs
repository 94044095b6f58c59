use async_graphql::{Context, Object};

use crate::fixtures::FixtureStore;

use super::extensions::FixtureStoreTodoExt;
use super::Todo;

#[derive(Default)]
pub struct TodoQuery;

#[Object]
impl TodoQuery {
    async fn get_todos(&self, ctx: &Context<'_>) -> Vec<Todo> {
        let store = ctx.data_unchecked::<FixtureStore>();
        store.scan_todo().await
    }
}
