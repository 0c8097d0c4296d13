use bookfind_core::{CurrentSearch, SearchViewModel};
use bookfind_engine::{BookDoc, ResultsSnapshot, SearchResults};

const COVER_URL_BASE: &str = "https://covers.openlibrary.org/b/olid";

pub const USAGE: &str = "Type a title to search. Commands: :page N, :next, :prev, :help, :quit";

pub fn status_line(view: &SearchViewModel) -> String {
    // The draft fields mirror the active search whenever one exists; they are
    // what the search box and paginator would display.
    if view.current.is_some() {
        format!(
            "Searching '{}' (page {}, {} per page)",
            view.search_text, view.page, view.page_size
        )
    } else {
        format!("No active search ({} per page).", view.page_size)
    }
}

pub fn results(snapshot: &ResultsSnapshot, current: Option<&CurrentSearch>) -> String {
    match snapshot {
        None => "No search yet. Type a title to begin.".to_string(),
        Some(Err(err)) => format!("Search failed: {err}"),
        Some(Ok(results)) => format_results(results, current),
    }
}

fn format_results(results: &SearchResults, current: Option<&CurrentSearch>) -> String {
    if results.num_found == 0 {
        return "No matching books found.".to_string();
    }

    let mut lines = vec![format!(
        "Found {} works",
        format_with_commas(results.num_found)
    )];
    for (index, doc) in results.docs.iter().enumerate() {
        lines.push(format_doc_row(index, doc));
        if let Some(key) = &doc.cover_edition_key {
            lines.push(format!("      cover: {COVER_URL_BASE}/{key}-M.jpg"));
        }
    }
    if let Some(current) = current {
        lines.push(format!(
            "Page {} of {}",
            current.page,
            total_pages(results.num_found, current.page_size)
        ));
    }
    lines.join("\n")
}

fn format_doc_row(index: usize, doc: &BookDoc) -> String {
    let authors = if doc.author_name.is_empty() {
        "Unknown author".to_string()
    } else {
        doc.author_name.join(", ")
    };
    format!("{:>3}. {} — {}", index + 1, doc.title, authors)
}

fn total_pages(num_found: u64, page_size: u32) -> u64 {
    num_found.div_ceil(u64::from(page_size.max(1)))
}

fn format_with_commas(value: u64) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookfind_engine::SearchError;
    use pretty_assertions::assert_eq;

    fn current(text: &str, page: u32, page_size: u32) -> CurrentSearch {
        CurrentSearch {
            search_text: text.to_string(),
            page,
            page_size,
        }
    }

    fn doc(title: &str, authors: &[&str], cover: Option<&str>) -> BookDoc {
        BookDoc {
            title: title.to_string(),
            author_name: authors.iter().map(|name| name.to_string()).collect(),
            cover_edition_key: cover.map(|key| key.to_string()),
        }
    }

    #[test]
    fn status_line_reads_the_view_model_fields() {
        let view = SearchViewModel {
            search_text: "dune".to_string(),
            page: 3,
            page_size: 5,
            current: Some(current("dune", 3, 5)),
            dirty: true,
        };

        assert_eq!(status_line(&view), "Searching 'dune' (page 3, 5 per page)");
    }

    #[test]
    fn status_line_shows_the_page_size_when_idle() {
        let view = SearchViewModel {
            search_text: String::new(),
            page: 1,
            page_size: 10,
            current: None,
            dirty: false,
        };

        assert_eq!(status_line(&view), "No active search (10 per page).");
    }

    #[test]
    fn renders_docs_with_authors_and_cover_links() {
        let snapshot = Some(Ok(SearchResults {
            num_found: 12,
            docs: vec![
                doc("Dune", &["Frank Herbert"], Some("OL27214493M")),
                doc("Dune Messiah", &["Frank Herbert"], None),
            ],
        }));

        let text = results(&snapshot, Some(&current("dune", 1, 5)));

        let expected = [
            "Found 12 works",
            "  1. Dune — Frank Herbert",
            "      cover: https://covers.openlibrary.org/b/olid/OL27214493M-M.jpg",
            "  2. Dune Messiah — Frank Herbert",
            "Page 1 of 3",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn renders_unknown_author_when_none_is_listed() {
        let row = format_doc_row(0, &doc("Anonymous Work", &[], None));

        assert_eq!(row, "  1. Anonymous Work — Unknown author");
    }

    #[test]
    fn renders_the_error_snapshot() {
        let snapshot = Some(Err(SearchError::Status(500)));

        let text = results(&snapshot, None);

        assert_eq!(text, "Search failed: search endpoint returned http status 500");
    }

    #[test]
    fn renders_the_idle_snapshot() {
        assert_eq!(results(&None, None), "No search yet. Type a title to begin.");
    }

    #[test]
    fn renders_zero_matches_without_a_page_line() {
        let snapshot = Some(Ok(SearchResults {
            num_found: 0,
            docs: Vec::new(),
        }));

        let text = results(&snapshot, Some(&current("zzzz", 1, 5)));

        assert_eq!(text, "No matching books found.");
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(total_pages(11, 5), 3);
        assert_eq!(total_pages(10, 5), 2);
        assert_eq!(total_pages(1, 5), 1);
    }

    #[test]
    fn large_counts_read_with_commas() {
        assert_eq!(format_with_commas(1_234_567), "1,234,567");
        assert_eq!(format_with_commas(42), "42");
    }
}
