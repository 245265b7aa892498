pub mod read;
pub mod write;

pub use read::read_image;
pub use write::write_image;
