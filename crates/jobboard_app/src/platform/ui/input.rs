use jobboard_core::JobId;

pub const HELP: &str = "\
commands:
  search <text>   type into the search box (alias: type)
  page <n>        click page n
  prev | next     click Prev / Next
  open <id>       click View Details on a job card
  back            click Back to List
  help            show this text
  quit            exit";

/// A DOM-level interaction typed on stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    Search(String),
    Page(u32),
    Prev,
    Next,
    Open(JobId),
    Back,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<UserCommand, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (word, rest) = match line.trim_start().split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (line.trim(), ""),
    };
    match word.to_ascii_lowercase().as_str() {
        // The raw value is kept; trimming happens when the search settles.
        "search" | "type" => Ok(UserCommand::Search(rest.to_string())),
        "page" => rest
            .trim()
            .parse()
            .map(UserCommand::Page)
            .map_err(|_| format!("not a page number: {:?}", rest.trim())),
        "prev" => Ok(UserCommand::Prev),
        "next" => Ok(UserCommand::Next),
        "open" | "view" => rest
            .trim()
            .parse()
            .map(UserCommand::Open)
            .map_err(|_| format!("not a job id: {:?}", rest.trim())),
        "back" => Ok(UserCommand::Back),
        "help" | "?" => Ok(UserCommand::Help),
        "quit" | "exit" => Ok(UserCommand::Quit),
        "" => Err("empty command".to_string()),
        other => Err(format!("unknown command {other:?}; try help")),
    }
}
