pub mod recipe;
pub mod user;

pub use recipe::PostgresRecipeRepository;
pub use user::PostgresUserRepository;
