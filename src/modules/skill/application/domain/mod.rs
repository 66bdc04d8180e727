pub mod proficiency;
