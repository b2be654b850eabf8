pub mod base_info;
pub mod collection;
pub mod user_info;

pub use base_info::update_base_info_handler;
pub use collection::user_collection_handler;
pub use user_info::user_info_handler;
