//! Command-line arguments.

use std::path::PathBuf;

use crate::select::{OptionValue, SelectOption};

pub const USAGE: &str = "\
Usage: pickbox [OPTIONS] [OPTION...]

Positional OPTION arguments define a single field; each is `label` or
`label=value`. Without them the fields come from the config file.

Options:
  -c, --config <PATH>        Config file (default: ~/.config/pickbox/config.toml)
  -m, --multiple             Allow picking several options
  -p, --placeholder <TEXT>   Text shown when nothing is selected
  -h, --help                 Print this help";

/// Parsed arguments. Unknown flags are ignored with a warning.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub multiple: bool,
    pub placeholder: Option<String>,
    pub options: Vec<SelectOption>,
    pub help: bool,
}

impl CliArgs {
    /// Parse arguments, excluding the program name.
    pub fn parse<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => match args.next() {
                    Some(path) => parsed.config = Some(PathBuf::from(path)),
                    None => eprintln!("Warning: --config requires a path argument"),
                },
                "--placeholder" | "-p" => match args.next() {
                    Some(text) => parsed.placeholder = Some(text),
                    None => eprintln!("Warning: --placeholder requires a text argument"),
                },
                "--multiple" | "-m" => parsed.multiple = true,
                "--help" | "-h" => parsed.help = true,
                flag if flag.starts_with('-') => {
                    eprintln!("Warning: ignoring unknown flag '{}'", flag);
                }
                _ => parsed.options.push(parse_option(&arg)),
            }
        }

        parsed
    }
}

/// `label=value` or a bare `label`, which doubles as its own value.
fn parse_option(arg: &str) -> SelectOption {
    match arg.split_once('=') {
        Some((label, value)) => SelectOption::new(label, OptionValue::parse(value)),
        None => SelectOption::new(arg, OptionValue::Text(arg.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_empty() {
        assert_eq!(parse(&[]), CliArgs::default());
    }

    #[test]
    fn test_flags_and_options() {
        let args = parse(&["-m", "--config", "/tmp/p.toml", "A=1", "Pear", "x=1.5", "k=v=w"]);

        assert!(args.multiple);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/p.toml")));
        assert_eq!(
            args.options,
            vec![
                SelectOption::new("A", OptionValue::Integer(1)),
                SelectOption::new("Pear", OptionValue::Text("Pear".into())),
                SelectOption::new("x", OptionValue::Float(1.5)),
                SelectOption::new("k", OptionValue::Text("v=w".into())),
            ]
        );
    }

    #[test]
    fn test_placeholder_and_help() {
        let args = parse(&["--placeholder", "Pick one", "-h"]);
        assert_eq!(args.placeholder.as_deref(), Some("Pick one"));
        assert!(args.help);
    }

    #[test]
    fn test_missing_flag_value() {
        let args = parse(&["--config"]);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_unknown_flag_ignored() {
        let args = parse(&["--verbose", "A"]);
        assert_eq!(args.options.len(), 1);
    }
}
