use clap::Parser;

/// The generator takes no arguments; every invocation runs the full pass.
#[derive(Parser, Debug)]
#[command(name = "qualgen")]
#[command(
    about = "Print a function_info specialization for every member-function qualifier combination",
    long_about = None
)]
#[command(version)]
pub struct Cli {}

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_rejects_unknown_arguments() {
        assert!(Cli::try_parse_from(["qualgen", "--output", "x.h"]).is_err());
        assert!(Cli::try_parse_from(["qualgen"]).is_ok());
    }
}
