//! A plan is the sequence of moves a search returns. This module provides the
//! [`Plan`] struct, which represents a plan.

use crate::parsers::{Parser, SyntaxError};
use crate::search::Action;
use itertools::Itertools;
use std::fmt::{self, Display, Formatter};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("failed to read plan file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid plan: {0}")]
    Syntax(#[from] SyntaxError),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Plan {
    steps: Vec<Action>,
}

impl Plan {
    pub fn empty() -> Self {
        Self { steps: vec![] }
    }

    pub fn new(steps: Vec<Action>) -> Self {
        Self { steps }
    }

    pub fn from_path(path: &Path) -> Result<Self, PlanError> {
        let contents = std::fs::read_to_string(path).map_err(|source| PlanError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(&contents)
    }

    pub fn from_text(text: &str) -> Result<Self, PlanError> {
        Ok(<Plan as Parser>::parse_str(text)?)
    }

    pub fn steps(&self) -> &[Action] {
        &self.steps
    }
}

/// Moves separated by single spaces, e.g. `U U R R`.
impl Display for Plan {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.steps.iter().join(" "))
    }
}

impl IntoIterator for Plan {
    type Item = Action;
    type IntoIter = std::vec::IntoIter<Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl Deref for Plan {
    type Target = [Action];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}
