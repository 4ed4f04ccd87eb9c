use clap::Args;
use log::LevelFilter;

/// CLI flags controlling log verbosity, shared by every subcommand.
///
/// `-q`/`--quiet` and `-v`/`--verbose` are mutually exclusive counted flags;
/// repeating `-v` raises the level one step at a time (info -> debug -> trace).
#[derive(Args, Clone, Debug, Default)]
pub struct VerbosityFlag {
    /// Suppress all output except errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Increase verbosity; repeat for more detail (-v, -vv, -vvv).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// The resolved verbosity level, independent of how it was requested.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Debug,
    Trace,
}

impl Verbosity {
    /// Returns the [`log::LevelFilter`] corresponding to this verbosity.
    pub fn log_level_filter(&self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Error,
            Verbosity::Normal => LevelFilter::Warn,
            Verbosity::Verbose => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }
}

impl From<&VerbosityFlag> for Verbosity {
    fn from(flag: &VerbosityFlag) -> Self {
        if flag.quiet {
            Verbosity::Quiet
        } else {
            match flag.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                2 => Verbosity::Debug,
                _ => Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flag_is_normal_verbosity() {
        let flag = VerbosityFlag::default();
        assert_eq!(Verbosity::from(&flag), Verbosity::Normal);
    }

    #[test]
    fn repeated_verbose_escalates_the_level() {
        let flag = VerbosityFlag {
            quiet: false,
            verbose: 2,
        };
        assert_eq!(Verbosity::from(&flag), Verbosity::Debug);
    }

    #[test]
    fn quiet_wins_regardless_of_verbose_count() {
        let flag = VerbosityFlag {
            quiet: true,
            verbose: 0,
        };
        assert_eq!(Verbosity::from(&flag), Verbosity::Quiet);
    }
}
