pub mod poi;
pub mod track;
