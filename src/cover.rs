use crate::colour::{colours, Colour};
use crate::coversize::{self, CoverSize};
use crate::font::Font;
use crate::layout::Margins;
use crate::units::Px;
use crate::CoverError;
use id_arena::{Arena, Id};
use image::RgbImage;
use imageproc::drawing::draw_text_mut;
use std::path::Path;

/// Which face and size a span is set in. The id refers into the font arena
/// the cover is rasterized with.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub id: Id<Font>,
    pub size: Px,
}

/// A single positioned run of text. `coords` is the top-left corner of the
/// span's line box; the baseline sits one ascent below it.
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (Px, Px),
}

/// Describes the canvas a cover is rendered onto: its size, the margins text
/// layout should respect, and the colours of the background and text
#[derive(Clone, PartialEq, Debug)]
pub struct CoverSpec {
    pub size: CoverSize,
    pub margins: Margins,
    pub background: Colour,
    pub title_colour: Colour,
    pub author_colour: Colour,
}

impl Default for CoverSpec {
    fn default() -> Self {
        CoverSpec {
            size: coversize::DEFAULT,
            margins: Margins::all(40.0),
            background: colours::BISQUE,
            title_colour: colours::BLACK,
            author_colour: colours::BLACK,
        }
    }
}

impl CoverSpec {
    /// A spec with the given size and the default margins and colours
    pub fn with_size(size: CoverSize) -> CoverSpec {
        CoverSpec {
            size,
            ..Default::default()
        }
    }

    pub fn width(&self) -> Px {
        self.size.0
    }

    pub fn height(&self) -> Px {
        self.size.1
    }

    /// The width available for text between the horizontal margins
    pub fn content_width(&self) -> Px {
        self.size.0 - self.margins.left - self.margins.right
    }
}

/// A cover is an ordered list of laid-out text spans over a [CoverSpec].
/// Build it up with [Cover::add_span] (usually through
/// [layout_cover](crate::layout::layout_cover)), then turn it into pixels
/// with [Cover::rasterize] or write it straight to disk with [Cover::save].
pub struct Cover {
    pub spec: CoverSpec,
    pub contents: Vec<SpanLayout>,
}

impl Cover {
    pub fn new(spec: CoverSpec) -> Cover {
        Cover {
            spec,
            contents: Vec::default(),
        }
    }

    pub fn add_span(&mut self, span: SpanLayout) {
        self.contents.push(span);
    }

    /// Paint the background colour and draw every span in insertion order.
    /// Span coordinates are rounded to whole pixels here; spans that extend
    /// past the canvas are cropped at the edges by the drawing primitive.
    pub fn rasterize(&self, fonts: &Arena<Font>) -> RgbImage {
        let width = self.spec.width().0 as u32;
        let height = self.spec.height().0 as u32;
        let mut canvas = RgbImage::from_pixel(width, height, self.spec.background.into());

        for span in self.contents.iter() {
            let font = fonts.get(span.font.id).expect("span font is in the arena");
            draw_text_mut(
                &mut canvas,
                span.colour.into(),
                span.coords.0.round(),
                span.coords.1.round(),
                font.px_scale(span.font.size),
                &font.raster,
                &span.text,
            );
        }

        canvas
    }

    /// Rasterize the cover and write it to `path`. The image format is
    /// inferred from the file extension.
    pub fn save<P: AsRef<Path>>(&self, fonts: &Arena<Font>, path: P) -> Result<(), CoverError> {
        let image = self.rasterize(fonts);
        image.save(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_spec_matches_the_classic_canvas() {
        let spec = CoverSpec::default();
        assert_eq!(spec.size, (Px(600.0), Px(900.0)));
        assert_eq!(spec.margins, Margins::all(40.0));
        assert_eq!(spec.background, colours::BISQUE);
        assert_eq!(spec.content_width(), Px(520.0));
    }

    #[test]
    fn empty_cover_rasterizes_to_solid_background() {
        let fonts: Arena<Font> = Arena::new();
        let cover = Cover::new(CoverSpec::default());
        let image = cover.rasterize(&fonts);

        assert_eq!(image.dimensions(), (600, 900));
        let background = image::Rgb([255u8, 228, 196]);
        assert_eq!(*image.get_pixel(0, 0), background);
        assert_eq!(*image.get_pixel(599, 899), background);
        assert_eq!(*image.get_pixel(300, 450), background);
    }

    #[test]
    fn drawing_a_span_changes_pixels() {
        let mut fonts = Arena::new();
        let font = fonts.alloc(Font::built_in());

        let mut cover = Cover::new(CoverSpec::default());
        cover.add_span(SpanLayout {
            text: "Hello".to_string(),
            font: SpanFont {
                id: font,
                size: Px(60.0),
            },
            colour: colours::BLACK,
            coords: (Px(40.0), Px(100.0)),
        });

        let image = cover.rasterize(&fonts);
        let background = image::Rgb([255u8, 228, 196]);
        assert!(image.pixels().any(|&p| p != background));
        // the corner stays untouched
        assert_eq!(*image.get_pixel(0, 0), background);
    }

    #[test]
    fn off_canvas_spans_are_cropped_not_fatal() {
        let mut fonts = Arena::new();
        let font = fonts.alloc(Font::built_in());

        let mut cover = Cover::new(CoverSpec::default());
        cover.add_span(SpanLayout {
            text: "Overflowing far past the right edge of the canvas".to_string(),
            font: SpanFont {
                id: font,
                size: Px(60.0),
            },
            colour: colours::BLACK,
            coords: (Px(500.0), Px(850.0)),
        });

        let image = cover.rasterize(&fonts);
        assert_eq!(image.dimensions(), (600, 900));
    }
}
