pub mod fetch_profile;
pub mod list_collection;
pub mod update_base_info;
