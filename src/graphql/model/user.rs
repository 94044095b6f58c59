use async_graphql::SimpleObject;

use crate::graphql::types::ID;

pub mod extensions;
pub mod query;

#[derive(Debug, Clone, PartialEq, SimpleObject)]
pub struct User {
    pub id: ID,
    pub first_name: String,
    pub last_name: String,
    pub age: Option<i32>,
    pub gender: String,
    pub email: String,
    pub phone: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
