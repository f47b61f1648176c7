use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct AnnotateArgs {
    /// Input CSV with guide and off-target candidate columns
    #[arg(short, long)]
    pub input: PathBuf,
    /// Output CSV with five alignment columns appended per candidate column
    #[arg(short, long)]
    pub output: PathBuf,
    /// Inclusive composite-score threshold; rows scoring above it get blank cells
    #[arg(long, default_value_t = 20)]
    pub max_score: i32,
    /// Column holding the guide (sgRNA) sequence
    #[arg(long, default_value = "on_target")]
    pub sg_col: String,
    /// First off-target candidate column
    #[arg(long, default_value = "h1")]
    pub h1_col: String,
    /// Second off-target candidate column
    #[arg(long, default_value = "h2")]
    pub h2_col: String,
    #[arg(short = 'n', long, default_value_t = 0)]
    pub num_threads: usize,
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}
