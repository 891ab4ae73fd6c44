use crate::config::OutputFormat;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpTopic {
    Root,
    Render,
}

#[derive(Debug, Clone)]
pub enum Command {
    Help(HelpTopic),
    Render(RenderArgs),
}

#[derive(Debug, Clone, Default)]
pub struct RenderArgs {
    /// Explicit config file; otherwise `clausekit.toml` is used if present.
    pub config: Option<PathBuf>,
    /// Overrides `output.format` from config.
    pub format: Option<OutputFormat>,
    pub verbose: bool,
    pub files: Vec<PathBuf>,
}

pub fn parse_args(args: &[String]) -> anyhow::Result<Command> {
    let mut it = args.iter().skip(1);
    let Some(first) = it.next() else {
        return Ok(Command::Help(HelpTopic::Root));
    };

    match first.as_str() {
        "-h" | "--help" => Ok(Command::Help(HelpTopic::Root)),
        "help" => match it.next().map(|s| s.as_str()) {
            None => Ok(Command::Help(HelpTopic::Root)),
            Some("render") => Ok(Command::Help(HelpTopic::Render)),
            Some(other) => anyhow::bail!("unknown help topic: {other}"),
        },
        "render" => parse_render(it.map(|s| s.as_str())),
        _ => anyhow::bail!("unknown command: {first}"),
    }
}

fn parse_render<'a>(mut it: impl Iterator<Item = &'a str>) -> anyhow::Result<Command> {
    let mut args = RenderArgs::default();

    while let Some(token) = it.next() {
        match token {
            "-h" | "--help" => return Ok(Command::Help(HelpTopic::Render)),
            "-v" | "--verbose" => args.verbose = true,
            "--config" => {
                let Some(v) = it.next() else {
                    anyhow::bail!("--config requires a value");
                };
                args.config = Some(PathBuf::from(v));
            }
            _ if token.starts_with("--config=") => {
                args.config = Some(PathBuf::from(token.trim_start_matches("--config=")));
            }
            "--format" => {
                let Some(v) = it.next() else {
                    anyhow::bail!("--format requires a value");
                };
                args.format = Some(v.parse()?);
            }
            _ if token.starts_with("--format=") => {
                args.format = Some(token.trim_start_matches("--format=").parse()?);
            }
            _ if token.starts_with('-') => anyhow::bail!("unknown option: {token}"),
            _ => args.files.push(PathBuf::from(token)),
        }
    }

    if args.files.is_empty() {
        anyhow::bail!("render requires at least one request file");
    }

    Ok(Command::Render(args))
}

pub fn print_help(topic: HelpTopic) {
    match topic {
        HelpTopic::Root => {
            println!(
                "\
clausekit - render SQL statements from request files

USAGE:
  clausekit <COMMAND> [OPTIONS]

COMMANDS:
  render        Render the statements of one or more request files
  help          Print help

Run `clausekit help <command>` for more."
            );
        }
        HelpTopic::Render => {
            println!(
                "\
USAGE:
  clausekit render [OPTIONS] <REQUEST>...

Each REQUEST is a .toml or .json file holding `statement` entries:

  [[statement]]
  kind = \"select\"          # select | insert | update | call
  table = \"member\"
  columns = [\"name\"]
  where = {{ age = 24 }}

OPTIONS:
  --config <FILE>       Config file path (default: clausekit.toml, if present)
  --format <FORMAT>     Output format: text | json (overrides config)
  -v, --verbose         Log rendered statements (RUST_LOG takes precedence)
  -h, --help            Print help"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        std::iter::once("clausekit")
            .chain(tokens.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_args_prints_root_help() {
        let cmd = parse_args(&args(&[])).unwrap();
        assert!(matches!(cmd, Command::Help(HelpTopic::Root)));
    }

    #[test]
    fn help_topics() {
        let cmd = parse_args(&args(&["help", "render"])).unwrap();
        assert!(matches!(cmd, Command::Help(HelpTopic::Render)));

        let cmd = parse_args(&args(&["render", "--help"])).unwrap();
        assert!(matches!(cmd, Command::Help(HelpTopic::Render)));

        assert!(parse_args(&args(&["help", "deploy"])).is_err());
    }

    #[test]
    fn parse_render_with_options() {
        let cmd = parse_args(&args(&[
            "render",
            "--config",
            "ci/clausekit.toml",
            "--format=json",
            "-v",
            "a.toml",
            "b.json",
        ]))
        .unwrap();
        let Command::Render(render) = cmd else {
            panic!("expected render");
        };

        assert_eq!(render.config, Some(PathBuf::from("ci/clausekit.toml")));
        assert_eq!(render.format, Some(OutputFormat::Json));
        assert!(render.verbose);
        assert_eq!(
            render.files,
            vec![PathBuf::from("a.toml"), PathBuf::from("b.json")]
        );
    }

    #[test]
    fn render_requires_files() {
        let err = parse_args(&args(&["render", "--format", "text"])).unwrap_err();
        assert!(err.to_string().contains("at least one request file"));
    }

    #[test]
    fn rejects_unknown_options_and_formats() {
        assert!(parse_args(&args(&["render", "--dry-run", "a.toml"])).is_err());
        assert!(parse_args(&args(&["render", "--format", "yaml", "a.toml"])).is_err());
        assert!(parse_args(&args(&["render", "--config"])).is_err());
        assert!(parse_args(&args(&["migrate"])).is_err());
    }
}
