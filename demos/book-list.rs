use cover_gen::{batch, CoverSpec, Font};

fn main() {
    // the sample list that ships next to this demo; covers land in a
    // covers/ directory beside it
    let input = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/books.txt");

    let written = batch::generate(input, &CoverSpec::default(), Font::built_in())
        .expect("can generate covers");
    println!("Generated {} covers", written.len());
}
