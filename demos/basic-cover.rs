use cover_gen::layout;
use cover_gen::Cover;
use cover_gen::CoverSpec;
use cover_gen::Font;
use cover_gen::{Px, SpanFont};
use id_arena::Arena;

fn main() {
    // the built-in face works out of the box; Font::from_file can load any
    // TTF or OTF file instead
    let font = Font::built_in();

    // fonts live in an arena, and spans refer to them by id
    let mut fonts = Arena::new();
    let font = fonts.alloc(font);

    // a cover on the default 600x900 canvas with the classic bisque background
    let mut cover = Cover::new(CoverSpec::default());

    // wrap the title, center everything, and hang the byline below the title
    layout::layout_cover(
        &fonts,
        &mut cover,
        "The Art of Doing Nothing",
        "A. N. Author",
        SpanFont {
            id: font,
            size: Px(60.0),
        },
        SpanFont {
            id: font,
            size: Px(40.0),
        },
    );

    // rasterize the spans and write the result out as a PNG
    cover.save(&fonts, "basic-cover.png").expect("can save cover");
}
