pub mod camp_card;
pub mod camp_results;
pub mod filter_panel;
pub mod quick_filter_bar;
