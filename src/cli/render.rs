use std::fmt::Write;

use crate::sort::{SortKey, SortState};
use crate::stories::{StoriesState, Story};

const TITLE_WIDTH: usize = 48;
const AUTHOR_WIDTH: usize = 20;

/// Full screen: input echo, status line, then the list in display order.
pub fn render_screen(
    search_term: &str,
    state: &StoriesState,
    visible: &[Story],
    sort: SortState,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Searching for {}.", search_term);

    if state.is_error() {
        let _ = writeln!(out, "Something went wrong ...");
    }

    if state.is_loading() {
        let _ = writeln!(out, "Loading ...");
        return out;
    }

    let _ = writeln!(out, "{}", header_row(sort));
    for story in visible {
        let _ = writeln!(out, "{}", story_row(story));
    }
    if !visible.is_empty() {
        let _ = writeln!(
            out,
            "{} stories, page {} (type 'more' for the next page)",
            visible.len(),
            state.page
        );
    }
    out
}

pub fn render_history(terms: &[String]) -> String {
    if terms.is_empty() {
        return "No previous searches.\n".to_string();
    }
    let mut out = String::new();
    for (i, term) in terms.iter().enumerate() {
        let _ = writeln!(out, "{:>2}. {}", i + 1, term);
    }
    out
}

fn header_row(sort: SortState) -> String {
    let marker = |key: SortKey, label: &str| -> String {
        if sort.key == key && key != SortKey::None {
            let arrow = if sort.reverse { '^' } else { 'v' };
            format!("{label}{arrow}")
        } else {
            label.to_string()
        }
    };
    format!(
        "{:<10} {:<tw$} {:<aw$} {:>9} {:>7}",
        "ID",
        marker(SortKey::Title, "Title"),
        marker(SortKey::Author, "Author"),
        marker(SortKey::Comment, "Comments"),
        marker(SortKey::Point, "Points"),
        tw = TITLE_WIDTH,
        aw = AUTHOR_WIDTH,
    )
}

fn story_row(story: &Story) -> String {
    format!(
        "{:<10} {:<tw$} {:<aw$} {:>9} {:>7}",
        story.id,
        truncate(&story.title, TITLE_WIDTH),
        truncate(&story.author, AUTHOR_WIDTH),
        story.num_comments,
        story.points,
        tw = TITLE_WIDTH,
        aw = AUTHOR_WIDTH,
    )
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let kept: String = text.chars().take(width.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
