pub mod entity;
pub mod repository;

pub use entity::Post;
pub use repository::PostRepository;
