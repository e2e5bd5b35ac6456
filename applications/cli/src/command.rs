//! Parsing of the interactive command line.

use musichub_state::{ParseViewError, View};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0} (type `help`)")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Not a list position: {0}")]
    BadIndex(String),

    #[error(transparent)]
    View(#[from] ParseViewError),
}

/// One line of user input
///
/// List positions are 1-based, as printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SignUp {
        email: String,
        password: String,
        confirm: String,
    },
    SignIn {
        email: String,
        password: String,
    },
    SignOut,

    Go(View),
    /// Open a sidebar playlist
    Open(usize),
    /// Open the artist page of a listed track
    Artist(usize),
    /// Open the album page of a listed track
    Album(usize),
    Search(String),
    Type(String),

    Play(usize),
    Queue(usize),
    Next,
    Prev,
    Pause,

    Like(usize),
    New(String),
    Rename { playlist: usize, name: String },
    Delete(usize),
    Add { track: usize, playlist: usize },
    Remove(usize),
    Dismiss(u64),

    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
Account:   signup <email> <password> <confirm> | login <email> <password> | logout
Browse:    home | library | search <query> | type <text> | go <view> | open <playlist#>
           artist <track#> | album <track#> | show
Playback:  play <track#> | queue <track#> | next | prev | pause
Library:   like <track#> | new <name> | rename <playlist#> <name> | delete <playlist#>
           add <track#> <playlist#> | remove <track#> | dismiss <id>
Other:     help | quit";

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(w, r)| (w, r.trim()));
        let args: Vec<&str> = rest.split_whitespace().collect();

        let command = match word.to_ascii_lowercase().as_str() {
            "signup" => match args.as_slice() {
                [email, password, confirm] => Self::SignUp {
                    email: (*email).to_string(),
                    password: (*password).to_string(),
                    confirm: (*confirm).to_string(),
                },
                _ => return Err(CommandError::Usage("signup <email> <password> <confirm>")),
            },
            "login" => match args.as_slice() {
                [email, password] => Self::SignIn {
                    email: (*email).to_string(),
                    password: (*password).to_string(),
                },
                _ => return Err(CommandError::Usage("login <email> <password>")),
            },
            "logout" => Self::SignOut,

            "home" => Self::Go(View::Home),
            "library" => Self::Go(View::Library),
            "go" => Self::Go(rest.parse()?),
            "open" => Self::Open(position(&args, "open <playlist#>")?),
            "artist" => Self::Artist(position(&args, "artist <track#>")?),
            "album" => Self::Album(position(&args, "album <track#>")?),
            "search" => Self::Search(rest.to_string()),
            "type" => Self::Type(rest.to_string()),

            "play" => Self::Play(position(&args, "play <track#>")?),
            "queue" => Self::Queue(position(&args, "queue <track#>")?),
            "next" => Self::Next,
            "prev" => Self::Prev,
            "pause" => Self::Pause,

            "like" => Self::Like(position(&args, "like <track#>")?),
            "new" if !rest.is_empty() => Self::New(rest.to_string()),
            "new" => return Err(CommandError::Usage("new <name>")),
            "rename" => {
                let (index, name) = rest
                    .split_once(char::is_whitespace)
                    .ok_or(CommandError::Usage("rename <playlist#> <name>"))?;
                Self::Rename {
                    playlist: position(&[index], "rename <playlist#> <name>")?,
                    name: name.trim().to_string(),
                }
            }
            "delete" => Self::Delete(position(&args, "delete <playlist#>")?),
            "add" => match args.as_slice() {
                [track, playlist] => Self::Add {
                    track: position(&[*track], "add <track#> <playlist#>")?,
                    playlist: position(&[*playlist], "add <track#> <playlist#>")?,
                },
                _ => return Err(CommandError::Usage("add <track#> <playlist#>")),
            },
            "remove" => Self::Remove(position(&args, "remove <track#>")?),
            "dismiss" => {
                let id = args.first().ok_or(CommandError::Usage("dismiss <id>"))?;
                Self::Dismiss(
                    id.parse()
                        .map_err(|_| CommandError::BadIndex((*id).to_string()))?,
                )
            }

            "" | "show" | "ls" => Self::Show,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}

/// Parse a single 1-based position into a 0-based index
fn position(args: &[&str], usage: &'static str) -> Result<usize, CommandError> {
    let [arg] = args else {
        return Err(CommandError::Usage(usage));
    };
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(CommandError::BadIndex((*arg).to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use musichub_core::PlaylistId;

    #[test]
    fn positions_are_one_based() {
        assert_eq!(Command::parse("play 1"), Ok(Command::Play(0)));
        assert_eq!(
            Command::parse("play 0"),
            Err(CommandError::BadIndex("0".into()))
        );
        assert_eq!(
            Command::parse("play"),
            Err(CommandError::Usage("play <track#>"))
        );
    }

    #[test]
    fn search_keeps_the_whole_query() {
        assert_eq!(
            Command::parse("search  miles davis "),
            Ok(Command::Search("miles davis".into()))
        );
    }

    #[test]
    fn rename_takes_rest_as_name() {
        assert_eq!(
            Command::parse("rename 2 Road Trip"),
            Ok(Command::Rename {
                playlist: 1,
                name: "Road Trip".into()
            })
        );
    }

    #[test]
    fn go_parses_views() {
        assert_eq!(
            Command::parse("go playlist:abc"),
            Ok(Command::Go(View::Playlist(PlaylistId::new("abc"))))
        );
        assert!(matches!(
            Command::parse("go artist:"),
            Err(CommandError::View(ParseViewError::MissingId(_)))
        ));
    }

    #[test]
    fn empty_line_shows_screen() {
        assert_eq!(Command::parse("   "), Ok(Command::Show));
    }

    #[test]
    fn unknown_command() {
        assert_eq!(
            Command::parse("dance"),
            Err(CommandError::Unknown("dance".into()))
        );
    }
}
