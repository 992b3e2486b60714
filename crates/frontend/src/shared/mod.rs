pub mod api_utils;
pub mod click_outside;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod detail_dialog;
pub mod icons;
pub mod modal;
pub mod mutation_dialog;
pub mod page_frame;
pub mod resource_list;
pub mod toast;
