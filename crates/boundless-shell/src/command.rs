//! Shell command parsing.

use boundless_core::{Coords, PieceType, Player, RawKind};
use boundless_rules::{ColinearPolicy, FourDimensional};

use crate::error::ShellError;

/// Which variant `variant` loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantSpec {
    Classical,
    FourDimensional(FourDimensional),
}

/// An option adjustable through `setoption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellOption {
    /// Collect every attacker instead of stopping at the first.
    TrackAttackers(bool),
    /// What loading a variant with colinear directions does.
    ColinearPolicy(ColinearPolicy),
}

/// A parsed shell command.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// `variant classical` or `variant 4d [bx by spacing] [strong] [weakpawns]` -- load a
    /// variant on an empty board.
    Variant(VariantSpec),
    /// `place <player> <kind> <x,y>` -- put a piece on the board.
    Place(PieceType, Coords),
    /// `remove <x,y>` -- take a piece off the board.
    Remove(Coords),
    /// `clear` -- empty the board, keeping the variant.
    Clear,
    /// `check <player>` -- is that player in check?
    Check(Player),
    /// `attacked <x,y> <player>` -- is the square attacked by anyone but that player?
    Attacked(Coords, Player),
    /// `colinear` -- report colinear declared directions.
    Colinear,
    /// `show` -- list the pieces.
    Show,
    /// `validate` -- re-derive the index invariants.
    Validate,
    /// `setoption name <Name> value <v>`.
    SetOption(ShellOption),
    /// `quit` -- leave the shell.
    Quit,
    /// Unrecognized command.
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ShellError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    let args = &tokens[1..];
    match tokens[0] {
        "variant" => parse_variant(args),
        "place" => parse_place(args),
        "remove" => Ok(Command::Remove(parse_coords(args.first(), "remove")?)),
        "clear" => Ok(Command::Clear),
        "check" => Ok(Command::Check(parse_player(args.first(), "check")?)),
        "attacked" => Ok(Command::Attacked(
            parse_coords(args.first(), "attacked")?,
            parse_player(args.get(1), "attacked")?,
        )),
        "colinear" => Ok(Command::Colinear),
        "show" => Ok(Command::Show),
        "validate" => Ok(Command::Validate),
        "setoption" => parse_setoption(args),
        "quit" => Ok(Command::Quit),
        _ => Ok(Command::Unknown(tokens[0].to_string())),
    }
}

/// Parse the `variant` command arguments.
///
/// Supports:
/// - `variant classical`
/// - `variant 4d [boards_x boards_y spacing] [strong] [weakpawns]`
fn parse_variant(tokens: &[&str]) -> Result<Command, ShellError> {
    let name = tokens.first().ok_or(ShellError::MissingArgument {
        command: "variant",
        argument: "variant name",
    })?;

    match *name {
        "classical" => Ok(Command::Variant(VariantSpec::Classical)),
        "4d" => {
            let mut layout = FourDimensional::default();
            let mut rest = &tokens[1..];
            if rest.first().is_some_and(|t| t.parse::<i64>().is_ok()) {
                layout.boards_x = parse_int(rest.first(), "boards_x")?;
                layout.boards_y = parse_int(rest.get(1), "boards_y")?;
                layout.spacing = parse_int(rest.get(2), "spacing")?;
                rest = rest.get(3..).unwrap_or_default();
            }
            for flag in rest {
                match *flag {
                    "strong" => layout.strong_kings_and_queens = true,
                    "weakpawns" => layout.strong_pawns = false,
                    // Unknown flag -- skip
                    _ => {}
                }
            }
            Ok(Command::Variant(VariantSpec::FourDimensional(layout)))
        }
        other => Err(ShellError::UnknownVariant {
            name: other.to_string(),
        }),
    }
}

/// Parse `place <player> <kind> <x,y>`.
fn parse_place(tokens: &[&str]) -> Result<Command, ShellError> {
    let player = parse_player(tokens.first(), "place")?;
    let kind = tokens.get(1).ok_or(ShellError::MissingArgument {
        command: "place",
        argument: "piece kind",
    })?;
    let kind = RawKind::from_name(kind).ok_or_else(|| ShellError::InvalidKind {
        value: kind.to_string(),
    })?;
    let coords = parse_coords(tokens.get(2), "place")?;
    Ok(Command::Place(PieceType::new(kind, player), coords))
}

/// Parse `setoption name <Name> value <v>`.
fn parse_setoption(tokens: &[&str]) -> Result<Command, ShellError> {
    let name_at = tokens.iter().position(|&t| t == "name");
    let value_at = tokens.iter().position(|&t| t == "value");
    let (Some(name_at), Some(value_at)) = (name_at, value_at) else {
        return Err(ShellError::MissingArgument {
            command: "setoption",
            argument: "name and value",
        });
    };
    let name = tokens.get(name_at + 1..value_at).unwrap_or_default().join(" ");
    let value = tokens.get(value_at + 1..).unwrap_or_default().join(" ");

    let invalid = || ShellError::InvalidOptionValue {
        name: name.clone(),
        value: value.clone(),
    };
    let option = match name.to_ascii_lowercase().as_str() {
        "trackattackers" => ShellOption::TrackAttackers(match value.to_ascii_lowercase().as_str() {
            "true" => true,
            "false" => false,
            _ => return Err(invalid()),
        }),
        "colinearpolicy" => {
            ShellOption::ColinearPolicy(ColinearPolicy::from_name(&value).ok_or_else(invalid)?)
        }
        _ => return Err(ShellError::UnknownOption { name }),
    };
    Ok(Command::SetOption(option))
}

fn parse_player(token: Option<&&str>, command: &'static str) -> Result<Player, ShellError> {
    let value = token.ok_or(ShellError::MissingArgument {
        command,
        argument: "player",
    })?;
    let player = match value.to_ascii_lowercase().as_str() {
        "white" => Some(Player::White),
        "black" => Some(Player::Black),
        "neutral" => Some(Player::Neutral),
        s if s.len() == 1 => s.chars().next().and_then(Player::from_letter),
        _ => None,
    };
    player.ok_or_else(|| ShellError::InvalidPlayer {
        value: value.to_string(),
    })
}

fn parse_coords(token: Option<&&str>, command: &'static str) -> Result<Coords, ShellError> {
    let value = token.ok_or(ShellError::MissingArgument {
        command,
        argument: "coordinates",
    })?;
    Ok(value.parse()?)
}

fn parse_int(token: Option<&&str>, param: &'static str) -> Result<i64, ShellError> {
    let value = token.ok_or(ShellError::MissingArgument {
        command: "variant",
        argument: param,
    })?;
    value.parse().map_err(|_| ShellError::InvalidNumber {
        param,
        value: value.to_string(),
    })
}
