use tracing::info;

use crate::graphql::model::{Todo, User};

mod data;

/// The in-memory "database": two collections built once at startup and only
/// ever read afterwards.
#[derive(Debug)]
pub struct FixtureStore {
    users: Vec<User>,
    todos: Vec<Todo>,
}

impl FixtureStore {
    pub fn new(users: Vec<User>, todos: Vec<Todo>) -> FixtureStore {
        FixtureStore { users, todos }
    }

    /// Store holding the fixtures bundled with the binary.
    pub fn load() -> FixtureStore {
        let store = FixtureStore::new(data::users(), data::todos());
        info!(
            users = store.users.len(),
            todos = store.todos.len(),
            "Fixtures loaded."
        );
        store
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }
}
