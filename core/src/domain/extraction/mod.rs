pub mod extractor;
pub mod value_objects;

pub use extractor::{extract, inspect};
pub use value_objects::Extraction;
