pub mod book;
pub mod book_request;
pub mod project;
pub mod user;
