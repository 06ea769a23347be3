pub mod course;

pub use course::{Course, ModelError, load_courses, sample_courses};
