use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use zettelapp::api::{CmdMessage, CmdResult, MessageLevel};
use zettelapp::collection::AnnotatedNote;
use zettelapp::id::level;

const LINE_WIDTH: usize = 100;
const INDENT: &str = "  ";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_outline(notes: &[AnnotatedNote], use_toc_title: bool) {
    print!("{}", render_outline(notes, use_toc_title));
}

/// Prints a minted identifier alone on stdout so it can be captured by scripts.
pub(super) fn print_allocated(result: &CmdResult) {
    match &result.allocated_id {
        Some(id) => println!("{}", id),
        None => print_messages(&result.messages),
    }
}

/// One line per note, indented by depth, with a blank line wherever the outline
/// returns to the top level.
fn render_outline(notes: &[AnnotatedNote], use_toc_title: bool) -> String {
    let mut out = String::new();
    for (i, row) in notes.iter().enumerate() {
        if i > 0 && row.split_level == Some(1) {
            out.push('\n');
        }

        let title = row.note.display_title(use_toc_title);
        let (prefix, label) = match row.note.id() {
            Some(id) => (INDENT.repeat(level(id).saturating_sub(1)), format!("{} ", id)),
            None => (String::new(), "- ".to_string()),
        };

        let fixed = prefix.width() + label.width();
        let title = truncate_to_width(title, LINE_WIDTH.saturating_sub(fixed));
        let label = match row.note.id() {
            Some(_) => label.yellow(),
            None => label.dimmed(),
        };
        out.push_str(&format!("{}{}{}\n", prefix, label, title));
    }
    out
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}
