// Copyright 2025 the Pieplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported while turning datasets into wedges.

use core::fmt;

/// Errors returned by angle allocation and dataset validation.
#[derive(Debug, Clone, PartialEq)]
pub enum PieError {
    /// The values sum to zero, so there is nothing to divide the circle between.
    ZeroTotal,
    /// A dataset carries a negative value.
    NegativeValue {
        /// Index of the offending dataset.
        index: usize,
        /// The rejected value.
        value: f64,
    },
    /// A dataset carries `NaN` or an infinite value.
    NonFiniteValue {
        /// Index of the offending dataset.
        index: usize,
    },
}

impl fmt::Display for PieError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroTotal => f.write_str("dataset values sum to zero"),
            Self::NegativeValue { index, value } => {
                write!(f, "dataset {index} has negative value {value}")
            }
            Self::NonFiniteValue { index } => write!(f, "dataset {index} has a non-finite value"),
        }
    }
}

impl core::error::Error for PieError {}
