use crate::fixtures::FixtureStore;

use super::Todo;

/// Extension used to decorate the FixtureStore with specialized methods for Todo
#[async_trait::async_trait]
pub trait FixtureStoreTodoExt {
    async fn scan_todo(&self) -> Vec<Todo>;
}

#[async_trait::async_trait]
impl FixtureStoreTodoExt for FixtureStore {
    async fn scan_todo(&self) -> Vec<Todo> {
        self.todos().to_vec()
    }
}
