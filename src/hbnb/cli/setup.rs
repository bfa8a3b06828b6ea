use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hbnb", bin_name = "hbnb", version)]
#[command(
    about = "Interactive shell for HBnB objects",
    long_about = "Interactive shell for HBnB objects.\n\n\
        Reads commands such as `create User` or `User.show(\"<id>\")` from standard input. \
        Records are kept in a JSON file that is rewritten after every change."
)]
pub struct Cli {
    /// JSON file holding the records (overrides the config file)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Directory containing config.json
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
