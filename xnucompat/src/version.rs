// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

use std::{cmp::Ordering, fmt, str::FromStr};

use crate::error::ParseError;

/// Dotted kernel version, e.g. `6153.141.1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionTuple(Vec<u64>);

impl VersionTuple {
    pub fn new(components: Vec<u64>) -> Self {
        Self(components)
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }
}

impl From<&[u64]> for VersionTuple {
    fn from(components: &[u64]) -> Self {
        Self(components.to_vec())
    }
}

impl FromStr for VersionTuple {
    type Err = ParseError;

    /// Parses every dot-separated component, failing on the first one that is
    /// not a non-negative integer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split('.')
            .map(|component| {
                component
                    .parse::<u64>()
                    .map_err(|source| ParseError::NonNumericComponent {
                        component: component.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for VersionTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{component}")?;
        }
        Ok(())
    }
}

/// Whether `version` is at or below `threshold`.
///
/// Components are compared in order and the first difference decides. If
/// `version` runs out first it counts as older; if it is longer but equal on
/// all of `threshold` it counts as newer. Identical tuples are at the
/// threshold.
pub fn is_at_or_below_threshold(threshold: &[u64], version: &[u64]) -> bool {
    for (i, &bound) in threshold.iter().enumerate() {
        let Some(&component) = version.get(i) else {
            return true;
        };

        match bound.cmp(&component) {
            Ordering::Greater => return true,
            Ordering::Less => return false,
            Ordering::Equal => {}
        }
    }

    threshold.len() == version.len()
}
