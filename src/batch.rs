use crate::cover::{Cover, CoverSpec, SpanFont};
use crate::font::Font;
use crate::layout::layout_cover;
use crate::units::Px;
use crate::CoverError;
use id_arena::Arena;
use std::path::{Path, PathBuf};

/// Size the title is set in, in pixels per em
pub const TITLE_SIZE: Px = Px(60.0);

/// Size the author byline is set in, in pixels per em
pub const AUTHOR_SIZE: Px = Px(40.0);

/// A title/author pair parsed from a book list
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BookEntry {
    pub title: String,
    pub author: String,
}

/// Parse the book list format: a title line followed by an author line per
/// book. Lines are trimmed and blank lines are skipped before pairing; a
/// trailing title with no author line is dropped.
pub fn parse_book_list(contents: &str) -> Vec<BookEntry> {
    let lines: Vec<&str> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() % 2 != 0 {
        log::debug!(
            "dropping unpaired trailing line {:?}",
            lines[lines.len() - 1]
        );
    }

    lines
        .chunks_exact(2)
        .map(|pair| BookEntry {
            title: pair[0].to_string(),
            author: pair[1].to_string(),
        })
        .collect()
}

/// Make a title safe to use as a file name: Unicode alphanumerics, spaces,
/// hyphens, and underscores pass through, everything else becomes an
/// underscore.
pub fn sanitize_filename(title: &str) -> String {
    title
        .chars()
        .map(|ch| {
            if ch.is_alphanumeric() || ch == ' ' || ch == '-' || ch == '_' {
                ch
            } else {
                '_'
            }
        })
        .collect()
}

/// Generate one cover per book listed in `input`, into a `covers` directory
/// created next to the input file.
///
/// Titles and bylines are set in the given font at [TITLE_SIZE] and
/// [AUTHOR_SIZE]. One progress line is printed per completed cover; a cover
/// that cannot be written aborts the rest of the batch. Books whose titles
/// sanitize to the same file name overwrite each other, last one wins.
///
/// Returns the paths written, in input order.
pub fn generate<P: AsRef<Path>>(
    input: P,
    spec: &CoverSpec,
    font: Font,
) -> Result<Vec<PathBuf>, CoverError> {
    let input = input.as_ref();
    let contents = std::fs::read_to_string(input)?;
    let entries = parse_book_list(&contents);

    let out_dir = input
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join("covers");
    std::fs::create_dir_all(&out_dir)?;

    let mut fonts = Arena::new();
    let id = fonts.alloc(font);
    let title_font = SpanFont {
        id,
        size: TITLE_SIZE,
    };
    let author_font = SpanFont {
        id,
        size: AUTHOR_SIZE,
    };

    let mut written = Vec::with_capacity(entries.len());
    for entry in entries {
        let path = out_dir.join(format!("{}.png", sanitize_filename(&entry.title)));

        let mut cover = Cover::new(spec.clone());
        layout_cover(
            &fonts,
            &mut cover,
            &entry.title,
            &entry.author,
            title_font,
            author_font,
        );
        cover.save(&fonts, &path)?;

        println!(
            "Created cover for '{}' by {} at {}",
            entry.title,
            entry.author,
            path.display()
        );
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pairs_lines_into_entries() {
        let entries = parse_book_list("Title A\nAuthor A\nTitle B\nAuthor B\n");
        assert_eq!(
            entries,
            vec![
                BookEntry {
                    title: "Title A".to_string(),
                    author: "Author A".to_string(),
                },
                BookEntry {
                    title: "Title B".to_string(),
                    author: "Author B".to_string(),
                },
            ]
        );
    }

    #[test]
    fn trims_lines_and_skips_blanks() {
        let entries = parse_book_list("  The Title  \n\n\n   The Author\t\n\n");
        assert_eq!(
            entries,
            vec![BookEntry {
                title: "The Title".to_string(),
                author: "The Author".to_string(),
            }]
        );
    }

    #[test]
    fn odd_line_counts_drop_the_trailing_line() {
        let entries = parse_book_list("T1\nA1\nT2\nA2\nT3\n");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].title, "T2");
    }

    #[test]
    fn empty_input_parses_to_no_entries() {
        assert!(parse_book_list("").is_empty());
        assert!(parse_book_list("\n \n\t\n").is_empty());
    }

    #[test]
    fn sanitize_replaces_special_characters() {
        assert_eq!(sanitize_filename("My: Book!"), "My_ Book_");
        assert_eq!(sanitize_filename("plain title"), "plain title");
        assert_eq!(sanitize_filename("semi-colons; and/slashes"), "semi-colons_ and_slashes");
    }

    #[test]
    fn sanitize_keeps_unicode_letters() {
        assert_eq!(sanitize_filename("Çatalhöyük 100%"), "Çatalhöyük 100_");
    }

    #[test]
    fn generate_writes_one_cover_per_entry() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        let input = dir.path().join("books.txt");
        std::fs::write(&input, "First Book\nSome Author\nSecond Book\nOther Author\n")
            .expect("can write book list");

        let written = generate(&input, &CoverSpec::default(), Font::built_in())
            .expect("batch generation succeeds");

        assert_eq!(
            written,
            vec![
                dir.path().join("covers").join("First Book.png"),
                dir.path().join("covers").join("Second Book.png"),
            ]
        );
        for path in written.iter() {
            assert!(path.is_file());
        }
    }

    #[test]
    fn generate_fails_on_missing_input() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        let missing = dir.path().join("nope.txt");
        assert!(generate(&missing, &CoverSpec::default(), Font::built_in()).is_err());
    }
}
