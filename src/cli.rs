use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "catalog-patch",
    about = "Add Firebase Analytics and Crashlytics entries to gradle/libs.versions.toml",
    version
)]
pub struct Cli {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub path: String,

    /// Apply the rules in memory and report, without writing the catalog
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Print why each rule fired or was skipped
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_targets_current_directory() {
        let cli = Cli::try_parse_from(["catalog-patch"]).unwrap();
        assert_eq!(cli.path, ".");
        assert!(!cli.dry_run);
        assert!(!cli.verbose);
    }

    #[test]
    fn parses_short_flags() {
        let cli = Cli::try_parse_from(["catalog-patch", "-p", "android", "-n", "-v"]).unwrap();
        assert_eq!(cli.path, "android");
        assert!(cli.dry_run);
        assert!(cli.verbose);
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["catalog-patch", "extra"]).is_err());
    }
}
