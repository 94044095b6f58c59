use colored::Colorize;

use super::TodoItem;

const BAR_FILLED: char = '█';
const BAR_EMPTY: char = '░';

/// Narrowest card body that still fits the status label.
pub const MIN_CARD_WIDTH: usize = 16;

/// Boxed terminal card for one todo. Every line it renders has the same
/// visible width: `inner_width` plus the border and one space of padding on
/// each side.
pub struct TodoCard<'a> {
    todo: &'a TodoItem,
}

impl<'a> TodoCard<'a> {
    pub fn new(todo: &'a TodoItem) -> TodoCard<'a> {
        TodoCard { todo }
    }

    pub fn outer_width(inner_width: usize) -> usize {
        inner_width.max(MIN_CARD_WIDTH) + 4
    }

    pub fn lines(&self, inner_width: usize) -> Vec<String> {
        let width = inner_width.max(MIN_CARD_WIDTH);
        let mut lines = vec![format!("┌{}┐", "─".repeat(width + 2))];

        for line in wrap(&self.todo.todo, width) {
            lines.push(row(pad(&line, width).bold().to_string()));
        }

        let assignee = format!("Assigned to: {}", self.todo.full_name.as_deref().unwrap_or(""));
        for line in wrap_keeping_label(&assignee, width) {
            lines.push(row(pad(&line, width).dimmed().to_string()));
        }

        lines.push(row(" ".repeat(width)));
        let status = if self.todo.completed {
            pad("Completed ✔", width).green()
        } else {
            pad("Not Completed ✖", width).red()
        };
        lines.push(row(status.to_string()));
        lines.push(row(self.progress_bar(width)));

        lines.push(format!("└{}┘", "─".repeat(width + 2)));
        lines
    }

    /// Completion is binary: the bar is either full or empty.
    fn progress_bar(&self, width: usize) -> String {
        if self.todo.completed {
            BAR_FILLED.to_string().repeat(width).green().to_string()
        } else {
            BAR_EMPTY.to_string().repeat(width).red().dimmed().to_string()
        }
    }
}

fn row(content: String) -> String {
    format!("│ {} │", content)
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.chars().take(width).collect()
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}

/// Greedy word wrap; words longer than `width` are split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            lines.push(word.drain(..width).collect());
        }
        if word.is_empty() {
            continue;
        }

        let needed = if line.is_empty() { word.len() } else { line.chars().count() + 1 + word.len() };
        if needed > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.extend(word);
    }

    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

// "Assigned to: " keeps its trailing space even when no name follows.
fn wrap_keeping_label(text: &str, width: usize) -> Vec<String> {
    if text.chars().count() <= width {
        vec![text.to_owned()]
    } else {
        wrap(text, width)
    }
}
