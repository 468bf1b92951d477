// Copyright 2025 the Rosette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart errors.
//!
//! All chart errors are local and recoverable: a failed layout skips that
//! frame's visual output rather than propagating out of the widget.

use thiserror::Error;

/// Reasons a chart cannot produce a layout or a frame.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    /// The item values sum to zero or the collection is empty, so angular
    /// spans are undefined.
    #[error("degenerate layout: item values sum to zero or the collection is empty")]
    DegenerateLayout,
    /// A radar series contains no items.
    #[error("radar series contains no items")]
    EmptySeries,
}
