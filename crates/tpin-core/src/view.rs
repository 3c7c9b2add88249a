//! Text rendering of the session menu.
//!
//! Lines end in `\r\n` so the output stays aligned while the terminal is in
//! raw mode.

use std::fmt::Write;

use crate::cursor::Region;
use crate::keymap;

/// Numbered rows for `names`, with `>` on the row at `cursor` (section-local).
pub fn render_rows(names: &[String], cursor: Option<usize>) -> String {
    let mut out = String::new();
    for (i, name) in names.iter().enumerate() {
        let marker = if cursor == Some(i) { '>' } else { ' ' };
        let _ = write!(out, "{marker} [{}] {name}\r\n", i + 1);
    }
    out
}

/// The full menu: pinned section, other sessions, optional status, key help.
pub fn render_menu(
    pinned: &[String],
    unpinned: &[String],
    cursor: usize,
    status: Option<&str>,
) -> String {
    let all = pinned.len() + unpinned.len();
    let mut out = String::new();

    let _ = write!(out, "*** Pinned Sessions ({}/{all}) ***\r\n", pinned.len());
    out.push_str(&render_rows(pinned, Some(cursor)));

    let _ = write!(out, "\r\n*** Other Sessions ({}/{all}) ***\r\n", unpinned.len());
    out.push_str(&render_rows(unpinned, cursor.checked_sub(pinned.len())));

    if let Some(status) = status {
        let _ = write!(out, "\r\n{status}\r\n");
    }

    let region = Region::of(cursor, pinned.len());
    let _ = write!(out, "\r\n{}\r\n", keymap::help_line(region));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn rows_are_one_based_with_marker() {
        let out = render_rows(&names(&["a", "b"]), Some(1));
        assert_eq!(out, "  [1] a\r\n> [2] b\r\n");
    }

    #[test]
    fn rows_without_cursor() {
        assert_eq!(render_rows(&names(&["a"]), None), "  [1] a\r\n");
    }

    #[test]
    fn menu_marks_unpinned_cursor() {
        let out = render_menu(&names(&["a"]), &names(&["x", "y"]), 2, None);
        assert!(out.starts_with("*** Pinned Sessions (1/3) ***\r\n  [1] a\r\n"));
        assert!(out.contains("*** Other Sessions (2/3) ***\r\n  [1] x\r\n> [2] y\r\n"));
        assert!(out.contains(" p pin "));
    }

    #[test]
    fn menu_shows_status() {
        let out = render_menu(
            &[],
            &names(&["x"]),
            0,
            Some("Session with name 'x' already existed"),
        );
        assert!(out.contains("\r\nSession with name 'x' already existed\r\n"));
    }
}
