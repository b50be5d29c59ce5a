//! Line-oriented command parsing for the interactive session.

use thiserror::Error;

/// One interactive input line, decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the expression as typed input, then submit.
    Type(String),
    /// Submit the expression as it stands.
    Submit,
    /// Typed insert at the caret, no submit.
    Insert(String),
    /// Keypad insert; the keypad never holds focus.
    Keypad(String),
    Backspace,
    ClearEntry,
    AllClear,
    Negate,
    MemoryClear,
    MemoryRecall,
    MemoryAdd,
    MemorySubtract,
    ShowHistory,
    /// Load a history entry, 1-based as listed.
    UseHistory(usize),
    ClearHistory,
    ToggleTheme,
    SetAccent(String),
    Copy,
    CaretLeft,
    CaretRight,
    CaretHome,
    CaretEnd,
    Select(usize, usize),
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command ':{0}' (try :help)")]
    Unknown(String),

    #[error(":{command} needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("'{0}' is not a valid position")]
    InvalidNumber(String),
}

pub const HELP: &str = "\
Type an expression and press Enter to evaluate it; an empty line re-submits.
  :i TEXT      insert at the caret      :k TEXT     keypad insert
  :bs :ce :ac  backspace, clear entry, all clear (:esc)
  :neg         insert a minus sign
  :mc :mr :m+ :m-   memory clear, recall, add, subtract
  :hist        list history             :use N      load history entry N
  :hclear      clear history            :copy       copy the result
  :theme       toggle theme (:f9)       :accent V   set accent colour
  :left :right :home :end :sel A B      move the caret / select
  :help  :q";

fn position(raw: &str) -> Result<usize, CommandError> {
    raw.parse()
        .map_err(|_| CommandError::InvalidNumber(raw.to_string()))
}

fn required<'a>(
    rest: &'a str,
    command: &'static str,
    what: &'static str,
) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingArgument { command, what });
    }
    Ok(rest)
}

/// Decode one input line (without its newline).
///
/// # Errors
/// Returns an error for unknown `:` commands and missing or invalid arguments.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(Command::Submit);
    }
    let Some(body) = line.trim_start().strip_prefix(':') else {
        return Ok(Command::Type(line.trim().to_string()));
    };
    let (name, rest) = match body.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (body, ""),
    };

    let command = match name {
        "i" => Command::Insert(required(rest, "i", "text")?.to_string()),
        "k" => Command::Keypad(required(rest, "k", "text")?.to_string()),
        "bs" => Command::Backspace,
        "ce" => Command::ClearEntry,
        "ac" | "esc" => Command::AllClear,
        "neg" => Command::Negate,
        "mc" => Command::MemoryClear,
        "mr" => Command::MemoryRecall,
        "m+" => Command::MemoryAdd,
        "m-" => Command::MemorySubtract,
        "hist" => Command::ShowHistory,
        "use" => Command::UseHistory(position(required(rest, "use", "an entry number")?)?),
        "hclear" => Command::ClearHistory,
        "theme" | "f9" => Command::ToggleTheme,
        "accent" => Command::SetAccent(required(rest, "accent", "a colour")?.to_string()),
        "copy" => Command::Copy,
        "left" => Command::CaretLeft,
        "right" => Command::CaretRight,
        "home" => Command::CaretHome,
        "end" => Command::CaretEnd,
        "sel" => {
            let mut parts = rest.split_whitespace();
            let (Some(start), Some(end)) = (parts.next(), parts.next()) else {
                return Err(CommandError::MissingArgument {
                    command: "sel",
                    what: "a start and an end",
                });
            };
            Command::Select(position(start)?, position(end)?)
        }
        "help" | "h" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_are_typed_expressions() {
        assert_eq!(parse_command("2+2"), Ok(Command::Type("2+2".to_string())));
        assert_eq!(
            parse_command("  sqrt(16) \r\n"),
            Ok(Command::Type("sqrt(16)".to_string()))
        );
        assert_eq!(parse_command(""), Ok(Command::Submit));
        assert_eq!(parse_command("   "), Ok(Command::Submit));
    }

    #[test]
    fn commands_with_arguments() {
        assert_eq!(parse_command(":i 3*"), Ok(Command::Insert("3*".to_string())));
        assert_eq!(parse_command(":k 7"), Ok(Command::Keypad("7".to_string())));
        assert_eq!(parse_command(":use 2"), Ok(Command::UseHistory(2)));
        assert_eq!(parse_command(":sel 1 3"), Ok(Command::Select(1, 3)));
        assert_eq!(
            parse_command(":accent  #ff8800 "),
            Ok(Command::SetAccent("#ff8800".to_string()))
        );
    }

    #[test]
    fn aliases_map_to_the_same_control() {
        assert_eq!(parse_command(":esc"), parse_command(":ac"));
        assert_eq!(parse_command(":f9"), parse_command(":theme"));
        assert_eq!(parse_command(":m+"), Ok(Command::MemoryAdd));
        assert_eq!(parse_command(":m-"), Ok(Command::MemorySubtract));
        assert_eq!(parse_command(":quit"), Ok(Command::Quit));
    }

    #[test]
    fn malformed_commands_are_reported() {
        assert_eq!(
            parse_command(":frobnicate"),
            Err(CommandError::Unknown("frobnicate".to_string()))
        );
        assert!(matches!(
            parse_command(":use"),
            Err(CommandError::MissingArgument { command: "use", .. })
        ));
        assert_eq!(
            parse_command(":use two"),
            Err(CommandError::InvalidNumber("two".to_string()))
        );
        assert!(matches!(
            parse_command(":sel 4"),
            Err(CommandError::MissingArgument { command: "sel", .. })
        ));
        assert!(matches!(
            parse_command(":i"),
            Err(CommandError::MissingArgument { command: "i", .. })
        ));
    }
}
