pub mod bulk_bar;
pub mod filter_panel;
pub mod pagination_controls;
pub mod resource_table;
pub mod stat_card;
pub mod stats_filter;
pub mod table;
pub mod ui;
