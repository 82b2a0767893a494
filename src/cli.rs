use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

pub const USAGE: &str = "
Usage: mycli <command> [args]
Commands:
  read <file>           Read file content
  write <file> <content> Write content to file
  http <url>            Send HTTP GET request
  exec <bin> [args]     Execute binary with arguments
";

/// The fixed command shapes. Arguments stay `OsString` so paths and child
/// arguments reach the OS exactly as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    Read { file: PathBuf },
    Write { file: PathBuf, content: OsString },
    Http { url: String },
    Exec { bin: OsString, args: Vec<OsString> },
}

impl Commands {
    /// Match by command name and argument count only. No token, `--`
    /// included, has any meaning of its own once the name has matched.
    pub fn parse(args: &[OsString]) -> Option<Self> {
        let cmd = match args {
            [c, file] if is(c, "read") => Commands::Read { file: file.into() },
            [c, file, content] if is(c, "write") => Commands::Write {
                file: file.into(),
                content: content.clone(),
            },
            [c, url] if is(c, "http") => Commands::Http {
                url: url.to_string_lossy().into_owned(),
            },
            [c, bin, rest @ ..] if is(c, "exec") => Commands::Exec {
                bin: bin.clone(),
                args: rest.to_vec(),
            },
            _ => return None,
        };
        Some(cmd)
    }
}

fn is(arg: &OsStr, name: &str) -> bool {
    arg == name
}
