use cover_gen::layout;
use cover_gen::{Cover, CoverSpec, Font, Px, SpanFont};
use id_arena::Arena;

fn main() {
    let mut fonts = Arena::new();
    let font = fonts.alloc(Font::built_in());

    // a title this long has to wrap across several centered lines
    let mut cover = Cover::new(CoverSpec::default());
    layout::layout_cover(
        &fonts,
        &mut cover,
        &lipsum::lipsum(8),
        "Lorem Ipsum",
        SpanFont {
            id: font,
            size: Px(60.0),
        },
        SpanFont {
            id: font,
            size: Px(40.0),
        },
    );

    cover
        .save(&fonts, "wrapped-title.png")
        .expect("can save cover");
}
