pub mod user;

pub use user::{MockUserRepository, UserRepository};
