pub mod use_camp_search;
