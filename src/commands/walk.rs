// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Walk command - scrubs through a search trace with next/prev moves

use super::{load_graph, Output};
use crate::navigator::StepNavigator;
use crate::search::PathSearchEngine;
use anyhow::{bail, Result};
use serde::Serialize;
use std::path::Path;

/// A single cursor move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// One step forward
    Next,
    /// One step back
    Prev,
}

impl Move {
    /// Parse a move name
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "next" | "n" | "forward" => Ok(Self::Next),
            "prev" | "p" | "back" => Ok(Self::Prev),
            other => bail!("Unknown move: {}. Valid: next, prev", other),
        }
    }
}

#[derive(Serialize)]
struct Position<'a> {
    cursor: usize,
    step_count: usize,
    step: &'a crate::types::ShortestPathStep,
    text: String,
}

/// Run the walk command
pub fn run(graph: &Path, from: &str, moves: &[String], out: Output) -> Result<()> {
    let moves = moves
        .iter()
        .map(|m| Move::parse(m))
        .collect::<Result<Vec<_>>>()?;

    let model = load_graph(graph)?;
    let mut navigator = StepNavigator::new();
    navigator.install(PathSearchEngine::new().find_all_paths(&model, from)?);

    for mv in moves {
        let moved = match mv {
            Move::Next => navigator.next(),
            Move::Prev => navigator.prev(),
        };
        if !moved {
            tracing::debug!("{:?} at cursor {} is a no-op", mv, navigator.cursor());
        }
    }

    let step = navigator.current()?;
    if out.json {
        let position = Position {
            cursor: navigator.cursor(),
            step_count: navigator.len(),
            step,
            text: step.to_string(),
        };
        println!("{}", serde_json::to_string_pretty(&position)?);
    } else {
        println!("[{}/{}] {}", navigator.cursor() + 1, navigator.len(), step);
    }
    Ok(())
}
