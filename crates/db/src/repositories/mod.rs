pub mod book_repo;
pub mod book_request_repo;
pub mod project_repo;
pub mod user_repo;

pub use book_repo::BookRepo;
pub use book_request_repo::BookRequestRepo;
pub use project_repo::ProjectRepo;
pub use user_repo::UserRepo;
