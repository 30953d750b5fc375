//! Text rendering for todo snapshots.

use std::io::{self, Write};
use todo_core::Todo;

pub const NO_DESCRIPTION: &str = "(no description)";

pub fn description_text(todo: &Todo) -> &str {
    if todo.has_description() {
        &todo.description
    } else {
        NO_DESCRIPTION
    }
}

/// Writes the multi-line detail block shown after add/update.
pub fn write_details(out: &mut impl Write, todo: &Todo) -> io::Result<()> {
    writeln!(out, "  ID: {}", todo.id)?;
    writeln!(out, "  Title: {}", todo.title)?;
    writeln!(out, "  Description: {}", description_text(todo))
}

/// Writes one entry of the todo listing.
pub fn write_list_entry(out: &mut impl Write, todo: &Todo) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "  [{}] {}", todo.id, todo.title)?;
    writeln!(out, "      Description: {}", description_text(todo))
}

#[cfg(test)]
mod tests {
    use super::{write_list_entry, NO_DESCRIPTION};
    use todo_core::{InMemoryTodoRepository, TodoRepository};

    #[test]
    fn empty_description_renders_placeholder() {
        let mut repo = InMemoryTodoRepository::new();
        let todo = repo.create_todo("Test title", "").unwrap();

        let mut out = Vec::new();
        write_list_entry(&mut out, &todo).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            format!("\n  [1] Test title\n      Description: {NO_DESCRIPTION}\n")
        );
    }
}
