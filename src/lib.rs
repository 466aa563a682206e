pub mod api_backend;
pub mod cart_store;
pub mod catalog_filter;
pub mod constants;
pub mod data_types;
pub mod errors;
pub mod join_process;
pub mod registration_draft;
pub mod remote_cache;
pub mod session_store;
pub mod shared_main;
