pub mod dto;
pub mod feature;
pub mod poi;
pub mod track;
