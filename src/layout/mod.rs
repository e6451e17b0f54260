//! Text layout utilities for positioning a title and byline on a cover.
//!
//! [`wrap_words`](crate::layout::wrap_words) breaks a title into lines that
//! fit within the cover's content width, and
//! [`layout_cover`](crate::layout::layout_cover) places the wrapped title
//! and the author byline as centered spans. Layout only produces
//! [`SpanLayout`](crate::SpanLayout) instructions; turning them into pixels
//! happens separately in [`Cover::rasterize`](crate::Cover::rasterize).
//!
//! # Example
//!
//! ```
//! use cover_gen::{Cover, CoverSpec, Font, Px, SpanFont};
//! use cover_gen::layout::layout_cover;
//! use id_arena::Arena;
//!
//! let mut fonts = Arena::new();
//! let font = fonts.alloc(Font::built_in());
//!
//! let mut cover = Cover::new(CoverSpec::default());
//! layout_cover(
//!     &fonts,
//!     &mut cover,
//!     "A Tale of Two Cities",
//!     "Charles Dickens",
//!     SpanFont { id: font, size: Px(60.0) },
//!     SpanFont { id: font, size: Px(40.0) },
//! );
//!
//! let image = cover.rasterize(&fonts);
//! assert_eq!(image.dimensions(), (600, 900));
//! ```

mod margins;
mod text;

pub use margins::*;
pub use text::*;
