use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum CoverError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font tables
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [ab_glyph] rejected the font for rasterization
    InvalidFont(#[from] ab_glyph::InvalidFont),

    #[error(transparent)]
    /// [image] failed to encode or write the cover
    Image(#[from] image::ImageError),
}
