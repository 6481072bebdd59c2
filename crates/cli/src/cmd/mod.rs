pub mod compose;
pub mod doctor;
