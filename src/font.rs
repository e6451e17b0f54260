use crate::{CoverError, Px};
use ab_glyph::{Font as _, FontVec, PxScale};
use owned_ttf_parser::{AsFaceRef, OwnedFace};
use std::path::Path;

/// A parsed font. Fonts can be TTF or OTF fonts and are held in two
/// representations parsed from the same bytes: an [OwnedFace] for metrics and
/// text measurement, and an [ab_glyph::FontVec] for rasterizing glyphs onto
/// the cover.
///
/// Typically fonts are referred to throughout user applications by their
/// [id_arena::Id] within the font arena, and not by any typed references.
pub struct Font {
    pub face: OwnedFace,
    pub raster: FontVec,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if
    /// the font could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, CoverError> {
        let raster = FontVec::try_from_vec(bytes.clone())?;
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face, raster })
    }

    /// Load a font from a file on disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Font, CoverError> {
        let bytes = std::fs::read(path)?;
        Font::load(bytes)
    }

    /// The face that ships inside the binary (DejaVu Sans), always available
    /// regardless of what fonts the host system has installed
    pub fn built_in() -> Font {
        const BYTES: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");
        Font::load(BYTES.to_vec()).expect("bundled font parses")
    }

    /// Load the font at `path`, falling back to the built-in face when no
    /// path is given or the file cannot be read or parsed. Fallback is logged
    /// as a warning rather than surfaced as an error, so callers always end
    /// up with a usable face.
    pub fn load_or_default(path: Option<&Path>) -> Font {
        match path {
            Some(path) => match Font::from_file(path) {
                Ok(font) => font,
                Err(err) => {
                    log::warn!(
                        "could not load font {}: {err}; using the built-in face",
                        path.display()
                    );
                    Font::built_in()
                }
            },
            None => Font::built_in(),
        }
    }

    /// Obtain the full name of the font, if the font carries one
    pub fn name(&self) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FULL_NAME && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: Px) -> Px {
        let scaling: Px = size / self.face.as_face_ref().units_per_em() as f32;
        scaling * self.face.as_face_ref().ascender() as f32
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the given font size.
    /// Note: this is usually negative
    pub fn descent(&self, size: Px) -> Px {
        let scaling: Px = size / self.face.as_face_ref().units_per_em() as f32;
        scaling * self.face.as_face_ref().descender() as f32
    }

    /// Calculate the leading (extra space between lines) for the given font size
    pub fn leading(&self, size: Px) -> Px {
        let scaling: Px = size / self.face.as_face_ref().units_per_em() as f32;
        scaling * self.face.as_face_ref().line_gap() as f32
    }

    /// Calculate the default line height of the font for the given size. The returned value is
    /// how much to vertically offset a second row of text below a first row of text.
    pub fn line_height(&self, size: Px) -> Px {
        let scaling: Px = size / self.face.as_face_ref().units_per_em() as f32;
        let leading: Px = scaling * self.face.as_face_ref().line_gap() as f32;
        let ascent: Px = scaling * self.face.as_face_ref().ascender() as f32;
        let descent: Px = scaling * self.face.as_face_ref().descender() as f32;
        leading + ascent - descent
    }

    /// Convert a font size (pixels per em) into the rasterizer's scale.
    /// [ab_glyph] scales text against the face's ascent-descent height rather
    /// than its em square, so passing the size through unconverted would draw
    /// glyphs smaller than the metrics above assume.
    pub fn px_scale(&self, size: Px) -> PxScale {
        let height = self.raster.height_unscaled();
        let upem = self.raster.units_per_em().unwrap_or(height);
        PxScale::from(size.0 * height / upem)
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face.as_face_ref().glyph_index(ch).map(|i| i.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ab_glyph::Font as _;

    #[test]
    fn built_in_face_has_sane_metrics() {
        let font = Font::built_in();
        let size = Px(60.0);
        assert!(font.ascent(size) > Px(0.0));
        assert!(font.descent(size) < Px(0.0));
        assert!(font.line_height(size) >= font.ascent(size) - font.descent(size));
        assert!(font.glyph_id('A').is_some());
    }

    #[test]
    fn line_height_is_leading_ascent_descent() {
        let font = Font::built_in();
        let size = Px(40.0);
        let expected = font.leading(size) + font.ascent(size) - font.descent(size);
        assert!((font.line_height(size) - expected).0.abs() < 1e-3);
    }

    #[test]
    fn rasterizer_scale_preserves_em_size() {
        let font = Font::built_in();
        let scale = font.px_scale(Px(60.0));
        assert_eq!(scale.x, scale.y);
        // scaled back to font units, an em should span units_per_em
        let upem = font.face.as_face_ref().units_per_em() as f32;
        let per_unit = scale.y / font.raster.height_unscaled();
        assert!((per_unit * upem - 60.0).abs() < 1e-3);
    }

    #[test]
    fn missing_font_file_falls_back_to_built_in() {
        let font = Font::load_or_default(Some(Path::new("/definitely/not/here.ttf")));
        assert!(font.glyph_id('A').is_some());
    }

    #[test]
    fn garbage_bytes_are_rejected() {
        assert!(Font::load(vec![0u8; 32]).is_err());
    }
}
