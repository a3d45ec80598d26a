//! CLI argument definitions and parsing.

pub mod types;

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{MatchIdList, RubricVariant};

/// Arguments shared by every command
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Comma-separated match IDs: `7450123456,7450198765`. Repeats are skipped.
    #[clap(long, short)]
    pub matches: MatchIdList,

    /// JSON rubric file with point weights (missing fields keep defaults).
    #[clap(long)]
    pub rubric: Option<PathBuf>,

    /// Win-bonus rubric when no rubric file is used: early-win | win-plus-early-win
    #[clap(long, default_value_t = RubricVariant::default())]
    pub variant: RubricVariant,

    /// Multiplier on each team's derived total (overrides the rubric).
    #[clap(long)]
    pub team_scale: Option<f64>,

    /// Directory for the exported CSV tables.
    #[clap(long, short, default_value = ".")]
    pub out_dir: PathBuf,

    /// Read saved match payloads from `<dir>/<match_id>.json` instead of the API.
    #[clap(long, conflicts_with = "base_url")]
    pub from_dir: Option<PathBuf>,

    /// Override the match API base URL.
    #[clap(long)]
    pub base_url: Option<String>,

    /// Print tables as JSON to stdout instead of writing CSV files.
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Player and team fantasy tables for a set of matches.
    Breakdown {
        #[clap(flatten)]
        common: CommonArgs,
    },

    /// Team table only. Team totals are halved unless `--team-scale` is given.
    Teams {
        #[clap(flatten)]
        common: CommonArgs,
    },

    /// Score league participants by the players they drafted.
    ///
    /// The first player in each participant's list counts 1.5x.
    Draft {
        #[clap(flatten)]
        common: CommonArgs,

        /// JSON file: `[{"participant": "Alex", "players": ["Yatoro", "Mira"]}]`
        #[clap(long, required_unless_present = "interactive", conflicts_with = "interactive")]
        selections: Option<PathBuf>,

        /// Prompt for participants and picks on the terminal.
        #[clap(long)]
        interactive: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "dota-fantasy", about = "Dota 2 fantasy league scoring")]
pub struct DotaFantasy {
    /// More log output (-v info, -vv debug).
    #[clap(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[clap(subcommand)]
    pub command: Commands,
}
