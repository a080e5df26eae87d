pub mod experience;
pub mod experiences;
