use std::collections::VecDeque;

use crate::cover::{Cover, SpanFont, SpanLayout};
use crate::font::Font;
use crate::units::Px;
use id_arena::Arena;
use owned_ttf_parser::AsFaceRef;

/// Vertical space between the baseline of the last title line and the top of
/// the author byline
pub const AUTHOR_GAP: Px = Px(80.0);

/// Calculate the width of a given string of text given the font and font size.
/// Characters with no glyph in the face contribute no width.
pub fn width_of_text(text: &str, font: &Font, size: Px) -> Px {
    let scaling = size / font.face.as_face_ref().units_per_em() as f32;
    text.chars()
        .filter_map(|ch| font.glyph_id(ch))
        .map(|gid| {
            scaling
                * font
                    .face
                    .as_face_ref()
                    .glyph_hor_advance(owned_ttf_parser::GlyphId(gid))
                    .unwrap_or_default() as f32
        })
        .sum()
}

/// The x coordinate that centers a run of the given width on a canvas of the
/// given width
pub fn centered_x(canvas_width: Px, line_width: Px) -> Px {
    (canvas_width - line_width) / 2.0
}

/// Break text into lines no wider than `max_width` when set in the given font
/// and size.
///
/// Words (whitespace-separated) are kept intact: each is appended to the
/// current line while the line, a separating space, and the word still fit
/// within `max_width`, and otherwise starts the next line. A single word
/// wider than `max_width` still gets a line of its own and will overflow when
/// drawn. Consecutive whitespace collapses, so joining the returned lines
/// with single spaces reproduces the whitespace-normalized input.
pub fn wrap_words(text: &str, font: &Font, size: Px, max_width: Px) -> Vec<String> {
    struct Word<'a> {
        word: &'a str,
        width: Px,
    }

    // split the text into words, measuring each once
    let mut words: VecDeque<Word> = VecDeque::default();
    for word in text.split_whitespace() {
        let width = width_of_text(word, font, size);
        words.push_back(Word { word, width });
    }

    let space_width = width_of_text(" ", font, size);
    let mut lines: Vec<String> = Vec::default();

    while !words.is_empty() {
        let mut line: Vec<&str> = Vec::default();
        let mut line_width = Px(0.0);

        'line: while let Some(word) = words.pop_front() {
            let candidate = if line.is_empty() {
                word.width
            } else {
                line_width + space_width + word.width
            };

            if !line.is_empty() && candidate > max_width {
                // doesn't fit; move the word back to start the next line
                words.push_front(word);
                break 'line;
            }

            line.push(word.word);
            line_width = candidate;
        }

        lines.push(line.join(" "));
    }

    lines
}

/// Lay a title and author byline out on the cover.
///
/// The title is wrapped to the cover's content width and every line is
/// centered horizontally. The title block starts a third of the way down the
/// canvas height that the block itself does not occupy, and its lines stack
/// at the font's natural line height. The author byline sits a fixed
/// [AUTHOR_GAP] below the baseline of the last title line (or below the
/// block start when the title produced no lines) and is centered as well.
///
/// Nothing is clipped or shrunk to fit: a title that is too large for the
/// canvas will overflow it, and the rasterizer crops whatever falls outside.
///
/// Returns the y coordinate just below the byline, where further content
/// could start.
pub fn layout_cover(
    fonts: &Arena<Font>,
    cover: &mut Cover,
    title: &str,
    author: &str,
    title_font: SpanFont,
    author_font: SpanFont,
) -> Px {
    let font = fonts.get(title_font.id).expect("can get font");
    let lines = wrap_words(title, font, title_font.size, cover.spec.content_width());

    let canvas_width = cover.spec.width();
    let title_colour = cover.spec.title_colour;
    let author_colour = cover.spec.author_colour;

    let line_height = font.line_height(title_font.size);
    let ascent = font.ascent(title_font.size);
    let block_top = (cover.spec.height() - line_height * (lines.len() as f32)) / 3.0;

    let mut y = block_top;
    let mut author_top = block_top + AUTHOR_GAP;
    for line in lines {
        let line_width = width_of_text(&line, font, title_font.size);
        let span = SpanLayout {
            text: line,
            font: title_font,
            colour: title_colour,
            coords: (centered_x(canvas_width, line_width), y),
        };
        cover.add_span(span);

        author_top = y + ascent + AUTHOR_GAP;
        y += line_height;
    }

    let font = fonts.get(author_font.id).expect("can get font");
    if !author.is_empty() {
        let author_width = width_of_text(author, font, author_font.size);
        let span = SpanLayout {
            text: author.to_string(),
            font: author_font,
            colour: author_colour,
            coords: (centered_x(canvas_width, author_width), author_top),
        };
        cover.add_span(span);
    }

    author_top + font.line_height(author_font.size)
}
