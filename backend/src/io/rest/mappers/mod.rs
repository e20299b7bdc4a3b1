pub mod camp_mapper;

pub use camp_mapper::CampMapper;
