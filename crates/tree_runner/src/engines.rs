//! Engine selection by name.

use std::fmt;

use alphabeta_engine::AlphaBeta;
use clap::ValueEnum;
use minimax_engine::Minimax;
use negamax_engine::Negamax;
use serde::{Deserialize, Serialize};
use tree_core::{GameTree, SearchAlgorithm};

/// The available search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmKind {
    Minimax,
    #[default]
    #[value(name = "alphabeta")]
    AlphaBeta,
    Negamax,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 3] = [
        AlgorithmKind::Minimax,
        AlgorithmKind::AlphaBeta,
        AlgorithmKind::Negamax,
    ];
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AlgorithmKind::Minimax => "minimax",
            AlgorithmKind::AlphaBeta => "alphabeta",
            AlgorithmKind::Negamax => "negamax",
        };
        f.write_str(name)
    }
}

/// Builds an engine that owns `tree`.
///
/// `pruning` only affects alpha-beta.
pub fn create_engine(kind: AlgorithmKind, tree: GameTree, pruning: bool) -> Box<dyn SearchAlgorithm> {
    match kind {
        AlgorithmKind::Minimax => Box::new(Minimax::engine(tree)),
        AlgorithmKind::AlphaBeta if pruning => Box::new(AlphaBeta::new().engine(tree)),
        AlgorithmKind::AlphaBeta => Box::new(AlphaBeta::without_pruning().engine(tree)),
        AlgorithmKind::Negamax => Box::new(Negamax::engine(tree)),
    }
}
