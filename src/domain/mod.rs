pub mod errors;
pub mod post;
pub mod slug;
