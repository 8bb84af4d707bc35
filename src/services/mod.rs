pub mod random_user_service;
pub mod directory_service;
pub mod search_service;

pub use random_user_service::*;
pub use directory_service::*;
