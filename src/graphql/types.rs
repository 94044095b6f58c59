pub mod id;

pub use id::ID;
