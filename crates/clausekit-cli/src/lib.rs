mod cli;
mod config;
mod render;
mod trace_setup;

pub fn run(args: Vec<String>) -> anyhow::Result<()> {
    let cmd = cli::parse_args(&args)?;
    match cmd {
        cli::Command::Help(topic) => {
            cli::print_help(topic);
            Ok(())
        }
        cli::Command::Render(args) => {
            trace_setup::setup(args.verbose)?;
            render::run(args)
        }
    }
}
