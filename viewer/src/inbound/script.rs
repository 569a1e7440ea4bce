//! Line-oriented event scripts.
//!
//! A script replays a session of clicks and keystrokes without a browser.
//! One event per line; blank lines and lines starting with `#` are skipped.
//! A `#` anywhere else is ordinary text, so comments cannot trail a command.
//!
//! ```text
//! # a short session
//! owner Anna
//! search ice cr
//! category 3
//! sort product
//! clear-search
//! all-categories
//! all-owners
//! reset
//! ```
//!
//! `search` takes the rest of the line verbatim. `owner` names an existing
//! user exactly, `category` takes a category id, and `sort` takes a column
//! label.

use catalog_fixtures::CategoryId;
use thiserror::Error;

use super::events::UiEvent;
use super::html::Column;
use crate::domain::Catalog;

/// Errors raised while parsing an event script. Line numbers start at 1.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    /// The first word is not a known command.
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand {
        /// Offending line.
        line: usize,
        /// Command word as written.
        command: String,
    },
    /// A command that needs an argument was given none.
    #[error("line {line}: '{command}' needs an argument")]
    MissingArgument {
        /// Offending line.
        line: usize,
        /// Command missing its argument.
        command: &'static str,
    },
    /// A command that takes no argument was given one.
    #[error("line {line}: '{command}' takes no argument")]
    UnexpectedArgument {
        /// Offending line.
        line: usize,
        /// Command that was given an argument.
        command: &'static str,
    },
    /// The category argument is not a number.
    #[error("line {line}: invalid category id '{value}'")]
    InvalidCategoryId {
        /// Offending line.
        line: usize,
        /// Raw argument.
        value: String,
    },
    /// No category has the given id.
    #[error("line {line}: no category with id {id}")]
    UnknownCategory {
        /// Offending line.
        line: usize,
        /// Requested id.
        id: CategoryId,
    },
    /// No user has the given name.
    #[error("line {line}: no user named '{name}'")]
    UnknownOwner {
        /// Offending line.
        line: usize,
        /// Requested name.
        name: String,
    },
    /// The sort argument is not a column label.
    #[error("line {line}: unknown column '{value}'")]
    UnknownColumn {
        /// Offending line.
        line: usize,
        /// Raw argument.
        value: String,
    },
}

/// Parse a script into events, resolving names and ids against `catalog`.
///
/// # Errors
///
/// Returns the first [`ScriptError`] found; nothing is returned for a
/// partially valid script.
///
/// # Examples
///
/// ```
/// use catalog_fixtures::Dataset;
/// use catalog_viewer::domain::Catalog;
/// use catalog_viewer::inbound::events::UiEvent;
/// use catalog_viewer::inbound::script::parse_script;
///
/// let catalog = Catalog::build(&Dataset::bundled().expect("dataset")).expect("catalog");
/// let events = parse_script("owner Anna\nsearch ap\n", &catalog).expect("valid script");
///
/// assert_eq!(events, vec![
///     UiEvent::FilterUser("Anna".to_owned()),
///     UiEvent::SearchInput("ap".to_owned()),
/// ]);
/// ```
pub fn parse_script(source: &str, catalog: &Catalog) -> Result<Vec<UiEvent>, ScriptError> {
    source
        .lines()
        .enumerate()
        .filter_map(|(index, raw)| {
            let trimmed = raw.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                Some(parse_line(index + 1, trimmed, catalog))
            }
        })
        .collect()
}

fn parse_line(line: usize, text: &str, catalog: &Catalog) -> Result<UiEvent, ScriptError> {
    let (command, raw_argument) = text.split_once(' ').unwrap_or((text, ""));
    let argument = raw_argument.trim();

    match command {
        "all-owners" => no_argument(line, "all-owners", argument, UiEvent::FilterAllUsers),
        "owner" => {
            let name = required(line, "owner", argument)?;
            catalog
                .find_user_by_name(name)
                .map(|user| UiEvent::FilterUser(user.name.clone()))
                .ok_or_else(|| ScriptError::UnknownOwner {
                    line,
                    name: name.to_owned(),
                })
        }
        "search" => Ok(UiEvent::SearchInput(raw_argument.to_owned())),
        "clear-search" => no_argument(line, "clear-search", argument, UiEvent::ClearButton),
        "all-categories" => no_argument(line, "all-categories", argument, UiEvent::AllCategories),
        "category" => {
            let value = required(line, "category", argument)?;
            let id = value
                .parse::<u32>()
                .map(CategoryId::new)
                .map_err(|_| ScriptError::InvalidCategoryId {
                    line,
                    value: value.to_owned(),
                })?;
            catalog
                .find_category(id)
                .map(|category| UiEvent::Category(category.clone()))
                .ok_or(ScriptError::UnknownCategory { line, id })
        }
        "reset" => no_argument(line, "reset", argument, UiEvent::ResetAllButton),
        "sort" => {
            let value = required(line, "sort", argument)?;
            Column::from_label(value)
                .map(UiEvent::SortIcon)
                .ok_or_else(|| ScriptError::UnknownColumn {
                    line,
                    value: value.to_owned(),
                })
        }
        other => Err(ScriptError::UnknownCommand {
            line,
            command: other.to_owned(),
        }),
    }
}

const fn required<'a>(
    line: usize,
    command: &'static str,
    argument: &'a str,
) -> Result<&'a str, ScriptError> {
    if argument.is_empty() {
        Err(ScriptError::MissingArgument { line, command })
    } else {
        Ok(argument)
    }
}

fn no_argument(
    line: usize,
    command: &'static str,
    argument: &str,
    event: UiEvent,
) -> Result<UiEvent, ScriptError> {
    if argument.is_empty() {
        Ok(event)
    } else {
        Err(ScriptError::UnexpectedArgument { line, command })
    }
}

#[cfg(test)]
mod tests {
    use catalog_fixtures::Dataset;
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn catalog() -> Catalog {
        Catalog::build(&Dataset::bundled().expect("bundled dataset")).expect("catalog")
    }

    fn single(source: &str, catalog: &Catalog) -> Result<UiEvent, ScriptError> {
        parse_script(source, catalog).map(|mut events| {
            assert_eq!(events.len(), 1, "expected one event from {source:?}");
            events.remove(0)
        })
    }

    #[rstest]
    #[case("all-owners", UiEvent::FilterAllUsers)]
    #[case("owner Anna", UiEvent::FilterUser("Anna".to_owned()))]
    #[case("owner   Max  ", UiEvent::FilterUser("Max".to_owned()))]
    #[case("clear-search", UiEvent::ClearButton)]
    #[case("all-categories", UiEvent::AllCategories)]
    #[case("reset", UiEvent::ResetAllButton)]
    #[case("sort Category", UiEvent::SortIcon(Column::Category))]
    #[case("  reset", UiEvent::ResetAllButton)]
    fn parses_commands(catalog: Catalog, #[case] source: &str, #[case] expected: UiEvent) {
        assert_eq!(single(source, &catalog), Ok(expected));
    }

    #[rstest]
    #[case("search ice cr", "ice cr")]
    #[case("search  two  spaces ", " two  spaces ")]
    #[case("search", "")]
    #[case("search a # b", "a # b")]
    fn search_keeps_rest_of_line_verbatim(
        catalog: Catalog,
        #[case] source: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(
            single(source, &catalog),
            Ok(UiEvent::SearchInput(expected.to_owned()))
        );
    }

    #[rstest]
    fn category_resolves_by_id(catalog: Catalog) {
        let expected = catalog
            .find_category(CategoryId::new(3))
            .expect("category 3")
            .clone();

        assert_eq!(single("category 3", &catalog), Ok(UiEvent::Category(expected)));
    }

    #[rstest]
    fn skips_blank_lines_and_comments(catalog: Catalog) {
        let events = parse_script("\n# set up\n   \nreset\n  # done\n", &catalog);

        assert_eq!(events, Ok(vec![UiEvent::ResetAllButton]));
    }

    #[rstest]
    fn parses_a_session_using_every_command(catalog: Catalog) {
        let source = "# a short session\nowner Anna\nsearch ice cr\ncategory 3\n\
                      sort product\nclear-search\nall-categories\nall-owners\nreset\n";

        let events = parse_script(source, &catalog).expect("session parses");

        assert_eq!(events.len(), 8);
        assert_eq!(events.first(), Some(&UiEvent::FilterUser("Anna".to_owned())));
        assert_eq!(events.last(), Some(&UiEvent::ResetAllButton));
    }

    #[rstest]
    #[case("frobnicate", ScriptError::UnknownCommand { line: 1, command: "frobnicate".to_owned() })]
    #[case("owner", ScriptError::MissingArgument { line: 1, command: "owner" })]
    #[case("owner Nobody", ScriptError::UnknownOwner { line: 1, name: "Nobody".to_owned() })]
    #[case("owner anna", ScriptError::UnknownOwner { line: 1, name: "anna".to_owned() })]
    #[case("category x1", ScriptError::InvalidCategoryId { line: 1, value: "x1".to_owned() })]
    #[case("category 99", ScriptError::UnknownCategory { line: 1, id: CategoryId::new(99) })]
    #[case("sort price", ScriptError::UnknownColumn { line: 1, value: "price".to_owned() })]
    #[case("reset now", ScriptError::UnexpectedArgument { line: 1, command: "reset" })]
    #[case("reset # again", ScriptError::UnexpectedArgument { line: 1, command: "reset" })]
    fn reports_invalid_lines(
        catalog: Catalog,
        #[case] source: &str,
        #[case] expected: ScriptError,
    ) {
        assert_eq!(parse_script(source, &catalog), Err(expected));
    }

    #[rstest]
    fn errors_carry_source_line_numbers(catalog: Catalog) {
        let result = parse_script("reset\n\n# comment\nbogus", &catalog);

        assert_eq!(
            result,
            Err(ScriptError::UnknownCommand {
                line: 4,
                command: "bogus".to_owned()
            })
        );
    }

    #[test]
    fn error_messages_include_line() {
        let err = ScriptError::UnknownOwner {
            line: 7,
            name: "Zed".to_owned(),
        };

        assert_eq!(err.to_string(), "line 7: no user named 'Zed'");
    }
}
