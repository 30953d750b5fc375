//! Interactive menu loop.
//!
//! # Responsibility
//! - Map menu choices to one service call each and render the outcome.
//! - Turn store errors into user-facing messages and keep looping.
//!
//! # Invariants
//! - Only end of input at the menu prompt or the exit option ends a session.
//! - No business rules live here; raw strings go straight to the service.

use crate::prompt::Prompter;
use crate::render::{write_details, write_list_entry};
use log::debug;
use std::io::{self, BufRead, Write};
use todo_core::{RepoError, TodoRepository, TodoService};

const RULE_WIDTH: usize = 40;
/// Entered for the description during update to clear it. A description
/// consisting of the literal text `-` therefore cannot be set from the menu.
pub const CLEAR_DESCRIPTION_TOKEN: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Update,
    Delete,
    Exit,
}

impl MenuChoice {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::View),
            "3" => Some(Self::Update),
            "4" => Some(Self::Delete),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// One interactive session over a todo service.
pub struct Session<R, W, S: TodoRepository> {
    prompter: Prompter<R, W>,
    service: TodoService<S>,
}

impl<R: BufRead, W: Write, S: TodoRepository> Session<R, W, S> {
    pub fn new(input: R, output: W, service: TodoService<S>) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            service,
        }
    }

    /// Runs the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        self.prompter
            .say("Welcome to the in-memory Todo App!")?;
        self.prompter
            .say("All data is stored in memory and will be lost when you exit.")?;

        loop {
            self.display_menu()?;
            let Some(answer) = self.prompter.read_input("Select an option (1-5): ")? else {
                self.prompter.say("\nGoodbye!")?;
                break;
            };

            let choice = MenuChoice::parse(&answer);
            debug!("event=menu_select module=cli choice={:?}", choice);
            match choice {
                Some(MenuChoice::Add) => self.add_flow()?,
                Some(MenuChoice::View) => self.view_flow()?,
                Some(MenuChoice::Update) => self.update_flow()?,
                Some(MenuChoice::Delete) => self.delete_flow()?,
                Some(MenuChoice::Exit) => {
                    self.prompter.say("\nThank you for using the Todo App!")?;
                    self.prompter
                        .say("All data has been discarded as expected for in-memory storage.")?;
                    break;
                }
                None => self
                    .prompter
                    .say("Invalid option. Please select a number between 1 and 5.")?,
            }
        }

        self.prompter.say("Application terminated.")?;
        self.prompter.output().flush()
    }

    fn display_menu(&mut self) -> io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        self.prompter.say(format!("\n{rule}"))?;
        self.prompter.say("         TODO APP - MAIN MENU")?;
        self.prompter.say(&rule)?;
        self.prompter.say("1. Add Todo")?;
        self.prompter.say("2. View Todos")?;
        self.prompter.say("3. Update Todo")?;
        self.prompter.say("4. Delete Todo")?;
        self.prompter.say("5. Exit")?;
        self.prompter.say(&rule)
    }

    fn add_flow(&mut self) -> io::Result<()> {
        self.prompter.say("\n--- Add New Todo ---")?;

        let Some(title) = self.prompter.read_input("Enter todo title (required): ")? else {
            return Ok(());
        };
        let Some(description) = self
            .prompter
            .read_input("Enter todo description (optional, press Enter to skip): ")?
        else {
            return Ok(());
        };

        match self.service.add_todo(&title, &description) {
            Ok(todo) => {
                self.prompter
                    .say(format!("Success: Todo added with ID {}", todo.id))?;
                write_details(self.prompter.output(), &todo)
            }
            Err(err) => self.report_error(&err),
        }
    }

    fn view_flow(&mut self) -> io::Result<()> {
        self.prompter.say("\n--- View All Todos ---")?;

        let todos = self.service.view_todos();
        if todos.is_empty() {
            return self.prompter.say("No todos available.");
        }

        self.prompter.say(format!("Found {} todo(s):", todos.len()))?;
        for todo in &todos {
            write_list_entry(self.prompter.output(), todo)?;
        }
        Ok(())
    }

    fn update_flow(&mut self) -> io::Result<()> {
        self.prompter.say("\n--- Update Todo ---")?;

        let Some(id) = self
            .prompter
            .read_id("Enter the ID of the todo to update: ")?
        else {
            return Ok(());
        };
        let Some(current) = self.service.get_todo(id) else {
            return self.report_error(&RepoError::NotFound(id));
        };

        let Some(title) = self.prompter.read_input(&format!(
            "Enter new title (current: '{}', press Enter to keep current): ",
            current.title
        ))?
        else {
            return Ok(());
        };
        let Some(description) = self.prompter.read_input(&format!(
            "Enter new description (current: '{}', press Enter to keep current, '{}' to clear): ",
            current.description, CLEAR_DESCRIPTION_TOKEN
        ))?
        else {
            return Ok(());
        };

        let new_title = (!title.is_empty()).then_some(title.as_str());
        let new_description = match description.as_str() {
            "" => None,
            CLEAR_DESCRIPTION_TOKEN => Some(""),
            other => Some(other),
        };

        match self.service.update_todo(id, new_title, new_description) {
            Ok(todo) => {
                self.prompter.say("Success: Todo updated!")?;
                write_details(self.prompter.output(), &todo)
            }
            Err(err) => self.report_error(&err),
        }
    }

    fn delete_flow(&mut self) -> io::Result<()> {
        self.prompter.say("\n--- Delete Todo ---")?;

        let Some(id) = self
            .prompter
            .read_id("Enter the ID of the todo to delete: ")?
        else {
            return Ok(());
        };

        if self.service.delete_todo(id) {
            self.prompter
                .say(format!("Success: Todo with ID {id} has been deleted."))
        } else {
            self.report_error(&RepoError::NotFound(id))
        }
    }

    fn report_error(&mut self, err: &RepoError) -> io::Result<()> {
        self.prompter.say(format!("Error: {err}."))
    }
}

#[cfg(test)]
mod tests {
    use super::{MenuChoice, Session};
    use todo_core::{InMemoryTodoRepository, TodoService};

    fn run_session(input: &str) -> String {
        run_session_bytes(input.as_bytes())
    }

    fn run_session_bytes(input: &[u8]) -> String {
        let mut output = Vec::new();
        let service = TodoService::new(InMemoryTodoRepository::new());
        Session::new(input, &mut output, service)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn menu_choice_parses_known_options_only() {
        assert_eq!(MenuChoice::parse(" 1 "), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("6"), None);
        assert_eq!(MenuChoice::parse("add"), None);
    }

    #[test]
    fn exit_option_ends_session() {
        let output = run_session("5\n");
        assert!(output.contains("TODO APP - MAIN MENU"));
        assert!(output.contains("Thank you for using the Todo App!"));
        assert!(output.ends_with("Application terminated.\n"));
    }

    #[test]
    fn end_of_input_at_menu_ends_session() {
        let output = run_session("");
        assert!(output.contains("Goodbye!"));
        assert!(output.contains("Application terminated."));
    }

    #[test]
    fn invalid_option_loops_back_to_menu() {
        let output = run_session("9\n5\n");
        assert!(output.contains("Invalid option. Please select a number between 1 and 5."));
        assert_eq!(output.matches("TODO APP - MAIN MENU").count(), 2);
    }

    #[test]
    fn add_then_view_lists_item() {
        let output = run_session("1\n Buy milk \n\n2\n5\n");
        assert!(output.contains("Success: Todo added with ID 1"));
        assert!(output.contains("  Title: Buy milk"));
        assert!(output.contains("Found 1 todo(s):"));
        assert!(output.contains("  [1] Buy milk\n      Description: (no description)"));
    }

    #[test]
    fn add_with_blank_title_reports_error_and_continues() {
        let output = run_session("1\n   \n\n2\n5\n");
        assert!(output.contains("Error: title cannot be empty."));
        assert!(output.contains("No todos available."));
    }

    #[test]
    fn update_keeps_fields_on_enter_and_clears_description_with_token() {
        let output = run_session("1\nWrite report\ndraft\n3\n1\n\n-\n2\n5\n");
        assert!(output.contains("Success: Todo updated!"));
        assert!(output.contains("  [1] Write report\n      Description: (no description)"));
    }

    #[test]
    fn update_with_unknown_id_reports_missing() {
        let output = run_session("3\nabc\n7\n5\n");
        assert!(output.contains("Error: Please enter a valid number."));
        assert!(output.contains("Error: todo with id 7 does not exist."));
    }

    #[test]
    fn delete_reports_success_then_missing() {
        let output = run_session("1\nTemp\n\n4\n1\n4\n1\n5\n");
        assert!(output.contains("Success: Todo with ID 1 has been deleted."));
        assert!(output.contains("Error: todo with id 1 does not exist."));
    }

    #[test]
    fn end_of_input_inside_flow_cancels_then_exits() {
        let output = run_session("1\nHalf entered\n");
        assert!(output.contains("Operation cancelled by user."));
        assert!(output.contains("Goodbye!"));
        assert!(!output.contains("Success"));
    }

    #[test]
    fn non_utf8_input_line_does_not_end_session() {
        let output = run_session_bytes(b"1\ncaf\xe9\n\n2\n5\n");
        assert!(output.contains("Success: Todo added with ID 1"));
        assert!(output.contains("[1] caf\u{FFFD}"));
        assert!(output.contains("Thank you for using the Todo App!"));
        assert!(output.ends_with("Application terminated.\n"));
    }

    #[test]
    fn scripted_session_matches_expected_listing() {
        let output = run_session(
            "1\nWrite report\n\n1\nReview PR\nurgent\n3\n1\nWrite final report\n\n4\n2\n2\n5\n",
        );
        let listing = output
            .rsplit("--- View All Todos ---")
            .next()
            .unwrap();
        assert!(listing.contains("Found 1 todo(s):"));
        assert!(listing.contains("[1] Write final report"));
        assert!(!listing.contains("Review PR"));
    }
}
