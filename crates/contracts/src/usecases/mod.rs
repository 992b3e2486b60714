pub mod common;
pub mod u501_service_import;
