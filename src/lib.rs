/// Batch cover generation from a plain-text book list
pub mod batch;

mod colour;
pub use colour::*;

mod cover;
pub use cover::*;

pub mod coversize;

mod error;
pub use error::*;

mod font;
pub use font::*;

/// Utility functions and structures to lay out text on covers
pub mod layout;

mod units;
pub use units::*;

/// Re-export id-arena, which provides the arena that fonts live in
pub use id_arena;

/// Re-export image functionality, mostly for working with rasterized covers
pub use image;
