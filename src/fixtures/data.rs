use crate::graphql::model::{Todo, User};
use crate::graphql::types::ID;

type UserRow = (u32, &'static str, &'static str, Option<i32>, &'static str, &'static str, &'static str);

const USERS: &[UserRow] = &[
    (1, "Emily", "Johnson", Some(28), "female", "emily.johnson@x.dummyjson.com", "+81 965-431-3024"),
    (2, "Michael", "Williams", Some(35), "male", "michael.williams@x.dummyjson.com", "+49 258-627-6644"),
    (3, "Sophia", "Brown", Some(42), "female", "sophia.brown@x.dummyjson.com", "+81 210-652-2785"),
    (4, "James", "Davis", Some(45), "male", "james.davis@x.dummyjson.com", "+49 614-958-9364"),
    (5, "Emma", "Miller", Some(30), "female", "emma.miller@x.dummyjson.com", "+91 759-776-1614"),
    (6, "Olivia", "Wilson", Some(22), "female", "olivia.wilson@x.dummyjson.com", "+91 607-295-6448"),
    (7, "Alexander", "Jones", Some(38), "male", "alexander.jones@x.dummyjson.com", "+61 260-824-4986"),
    (8, "Ava", "Taylor", None, "female", "ava.taylor@x.dummyjson.com", "+1 458-853-7877"),
];

const TODOS: &[(u32, &str, bool, u32)] = &[
    (1, "Do something nice for someone you care about", false, 1),
    (2, "Memorize a poem", true, 2),
    (3, "Watch a classic movie", true, 3),
    (4, "Watch a documentary", false, 4),
    (5, "Invest in cryptocurrency", false, 5),
    (6, "Contribute code or a monetary donation to an open-source software project", false, 6),
    (7, "Solve a Rubik's cube", true, 7),
    (8, "Bake pastries for yourself and neighbor", true, 8),
    (9, "Go see a Broadway production", false, 1),
    (10, "Write a thank you letter to an influential person in your life", true, 3),
    (11, "Invite some friends over for a game night", false, 26),
    (12, "Have a football scrimmage with some friends", false, 5),
    (13, "Text a friend you haven't talked to in a long time", false, 2),
    (14, "Organize pantry", true, 54),
    (15, "Buy a new house decoration", false, 7),
];

pub fn users() -> Vec<User> {
    USERS
        .iter()
        .map(|&(id, first_name, last_name, age, gender, email, phone)| User {
            id: ID::new(id),
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            age,
            gender: gender.to_owned(),
            email: email.to_owned(),
            phone: phone.to_owned(),
        })
        .collect()
}

pub fn todos() -> Vec<Todo> {
    TODOS
        .iter()
        .map(|&(id, todo, completed, user_id)| Todo {
            id: ID::new(id),
            todo: todo.to_owned(),
            completed,
            user_id: ID::new(user_id),
        })
        .collect()
}
