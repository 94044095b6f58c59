use async_graphql::{ComplexObject, Context, SimpleObject};

use crate::fixtures::FixtureStore;
use crate::graphql::model::user::extensions::FixtureStoreUserExt;
use crate::graphql::model::User;
use crate::graphql::types::ID;

pub mod extensions;
pub mod query;

#[derive(Debug, Clone, PartialEq, SimpleObject)]
#[graphql(complex)]
pub struct Todo {
    pub id: ID,
    pub todo: String,
    pub completed: bool,
    pub user_id: ID,
}

#[ComplexObject]
impl Todo {
    /// The assignee, or null when no user carries `userId`.
    async fn user(&self, ctx: &Context<'_>) -> Option<User> {
        let store = ctx.data_unchecked::<FixtureStore>();
        store.get_user(&self.user_id).await
    }

    /// "<firstName> <lastName>" of the assignee, empty when there is none.
    async fn full_name(&self, ctx: &Context<'_>) -> String {
        let store = ctx.data_unchecked::<FixtureStore>();
        store
            .get_user(&self.user_id)
            .await
            .map(|user| user.full_name())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::fixtures::{sample, FixtureStore};
    use crate::graphql::build_schema;

    async fn query(store: FixtureStore, query: &str) -> serde_json::Value {
        let response = build_schema(store).execute(query).await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        response.data.into_json().expect("valid json")
    }

    #[tokio::test]
    async fn resolves_assignee_full_name() {
        let store = FixtureStore::new(
            vec![sample::user(1, "Ann", "Lee")],
            vec![sample::todo(10, 1, false)],
        );

        let data = query(store, "{ getTodos { id fullName } }").await;
        assert_eq!(data, json!({ "getTodos": [{ "id": "10", "fullName": "Ann Lee" }] }));
    }

    #[tokio::test]
    async fn unknown_assignee_yields_empty_name_and_null_user() {
        let store = FixtureStore::new(
            vec![sample::user(1, "Ann", "Lee")],
            vec![sample::todo(11, 999, true)],
        );

        let data = query(store, "{ getTodos { id userId fullName user { id } } }").await;
        assert_eq!(
            data,
            json!({ "getTodos": [{ "id": "11", "userId": "999", "fullName": "", "user": null }] })
        );
    }

    #[tokio::test]
    async fn user_is_the_one_referenced_by_user_id() {
        let store = FixtureStore::load();
        let data = query(store, "{ getTodos { userId user { id } } }").await;

        for todo in data["getTodos"].as_array().expect("list") {
            if !todo["user"].is_null() {
                assert_eq!(todo["user"]["id"], todo["userId"]);
            }
        }
    }

    #[tokio::test]
    async fn full_name_matches_user_names_for_bundled_fixtures() {
        let store = FixtureStore::load();
        let expected: Vec<String> = store
            .todos()
            .iter()
            .map(|todo| {
                store
                    .users()
                    .iter()
                    .find(|user| user.id == todo.user_id)
                    .map(|user| format!("{} {}", user.first_name, user.last_name))
                    .unwrap_or_default()
            })
            .collect();

        let data = query(store, "{ getTodos { fullName } }").await;
        let names: Vec<String> = data["getTodos"]
            .as_array()
            .expect("list")
            .iter()
            .map(|todo| todo["fullName"].as_str().unwrap_or_default().to_owned())
            .collect();
        assert_eq!(names, expected);
    }
}
