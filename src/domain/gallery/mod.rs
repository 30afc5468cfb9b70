pub mod entity;
pub mod invariants;

pub use entity::GalleryCollection;
pub use invariants::validate_gallery;
