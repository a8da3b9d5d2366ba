use std::path::PathBuf;

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub quiet: bool,
    pub verbose: bool,
    pub config: Option<PathBuf>,
}
