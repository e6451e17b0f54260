//! Pre-defined cover sizes for common publishing targets.
//!
//! All sizes are provided in portrait orientation as (width, height) in
//! pixels.
//!
//! # Example
//!
//! ```
//! use cover_gen::coversize;
//!
//! let (width, height) = coversize::DEFAULT;
//! assert!(width < height);
//! ```

use crate::units::*;

/// Cover dimensions as (width, height) in pixels.
pub type CoverSize = (Px, Px);

/// The classic 2:3 paperback-shaped canvas
pub const DEFAULT: CoverSize = (Px(600.0), Px(900.0));

// ebook storefront recommendations
pub const KINDLE: CoverSize = (Px(1600.0), Px(2560.0));
pub const KOBO: CoverSize = (Px(1600.0), Px(2400.0));

/// Square artwork as used for audiobooks
pub const AUDIOBOOK: CoverSize = (Px(2400.0), Px(2400.0));
