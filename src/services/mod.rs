pub mod currency;
pub mod register_service;
pub mod render_service;
pub mod upload_service;
