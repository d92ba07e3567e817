//! Console command parsing.
//!
//! Turns one line typed at the prompt into an [`Event`]. Commands are a verb
//! followed by arguments; for `filter`, `set`, `search` and `import` the last
//! argument is the rest of the line, spaces included.
//!
//! Page numbers typed by the user are 1-based; [`Event::GoToPage`] is 0-based.

use crate::app::handler::Event;
use crate::domain::error::{HrdeskError, Result};
use crate::domain::record::RecordId;
use crate::domain::schema::ResourceKind;

/// Command reference shown by `help`.
pub const HELP: &str = "\
tab <employees|departments|leave>   switch resource tab
filter <key> [value]                set a filter (no value clears it)
clear                               clear all filters and the search
search [text]                       fuzzy quick search
page <n> | next | prev              move between pages
size <5|10|25>                      change the page size
add | edit <id>                     open the add/edit dialog
set <field> [value]                 change a field of the open dialog
save | cancel                       close the dialog
delete <id>                         delete a record (asks first)
import <json array> | @<file>       append records from JSON
help | quit";

/// Parses one console line.
///
/// # Errors
///
/// Returns [`HrdeskError::Command`] for an unknown verb or a missing or
/// malformed argument.
///
/// # Examples
///
/// ```
/// use hrdesk::app::command::parse_command;
/// use hrdesk::app::Event;
///
/// assert_eq!(parse_command("page 2")?, Event::GoToPage(1));
/// assert_eq!(
///     parse_command("filter department Nursing")?,
///     Event::SetFilter { key: "department".into(), value: "Nursing".into() },
/// );
/// # Ok::<(), hrdesk::HrdeskError>(())
/// ```
pub fn parse_command(line: &str) -> Result<Event> {
    let line = line.trim();
    let (verb, rest) = split_word(line);

    let event = match verb.to_lowercase().as_str() {
        "tab" => Event::SwitchTab(rest.parse::<ResourceKind>().map_err(HrdeskError::Command)?),
        "filter" => {
            let (key, value) = split_word(rest);
            if key.is_empty() {
                return Err(usage("filter <key> [value]"));
            }
            Event::SetFilter { key: key.to_string(), value: value.to_string() }
        }
        "clear" => Event::ClearFilters,
        "search" => Event::QuickSearch(rest.to_string()),
        "page" => match number(rest, "page <n>")? {
            0 => return Err(usage("page numbers start at 1")),
            n => Event::GoToPage(n - 1),
        },
        "next" => Event::NextPage,
        "prev" => Event::PrevPage,
        "size" => Event::SetPageSize(number(rest, "size <5|10|25>")?),
        "add" => Event::OpenAdd,
        "edit" => Event::OpenEdit(id(rest, "edit <id>")?),
        "set" => {
            let (name, value) = split_word(rest);
            if name.is_empty() {
                return Err(usage("set <field> [value]"));
            }
            Event::SetField { name: name.to_string(), value: value.to_string() }
        }
        "save" => Event::Save,
        "cancel" => Event::Cancel,
        "delete" => Event::RequestDelete(id(rest, "delete <id>")?),
        "import" => Event::Import(rest.to_string()),
        "help" | "?" => Event::Help,
        "quit" | "exit" | "q" => Event::Quit,
        "" => return Err(HrdeskError::Command("empty line".to_string())),
        other => return Err(HrdeskError::Command(format!("unknown command '{other}' (try 'help')"))),
    };

    tracing::trace!(line, event = ?event, "command parsed");
    Ok(event)
}

/// Splits off the first whitespace-delimited word; the rest is trimmed.
fn split_word(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    text.split_once(char::is_whitespace)
        .map_or((text, ""), |(word, rest)| (word, rest.trim()))
}

fn number(text: &str, usage_text: &str) -> Result<usize> {
    text.parse().map_err(|_| usage(usage_text))
}

fn id(text: &str, usage_text: &str) -> Result<RecordId> {
    text.parse().map_err(|_| usage(usage_text))
}

fn usage(text: &str) -> HrdeskError {
    HrdeskError::Command(format!("usage: {text}"))
}
