use clap::{Args, Parser, Subcommand};

use crate::tree::TreeState;

#[derive(Parser)]
#[command(name = "jtree")]
#[command(about = "An interactive JSON tree viewer for the terminal")]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub view: ViewArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the tree to stdout instead of opening the viewer
    Print(PrintArgs),
}

#[derive(Args)]
pub struct ViewArgs {
    /// Start with the root collapsed
    #[arg(short = 'c', long = "collapsed")]
    pub collapsed: bool,

    /// Start with the root expanded
    #[arg(short = 'x', long = "expanded", conflicts_with = "collapsed")]
    pub expanded: bool,

    pub file: Option<String>,
}

impl ViewArgs {
    pub fn initial_state(&self) -> TreeState {
        if self.collapsed {
            TreeState::Collapsed
        } else if self.expanded {
            TreeState::Expanded
        } else {
            TreeState::FirstItemExpanded
        }
    }
}

#[derive(Args)]
pub struct PrintArgs {
    /// Expand containers only down to this nesting depth
    #[arg(short = 'd', long = "depth")]
    pub depth: Option<usize>,

    pub file: String,
}
