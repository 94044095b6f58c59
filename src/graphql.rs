use async_graphql::extensions::Tracing;
use async_graphql::{EmptyMutation, EmptySubscription, MergedObject, Schema};

use crate::fixtures::FixtureStore;
use crate::graphql::model::todo::query::TodoQuery;
use crate::graphql::model::user::query::UserQuery;

pub mod model;
pub mod types;

#[derive(MergedObject, Default)]
pub struct Query(TodoQuery, UserQuery);

pub type GraphQLSchema = Schema<Query, EmptyMutation, EmptySubscription>;

pub fn build_schema(store: FixtureStore) -> GraphQLSchema {
    Schema::build(Query::default(), EmptyMutation, EmptySubscription)
        .data(store)
        .extension(Tracing)
        .finish()
}
