// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use quill_view::SnapshotError;
use thiserror::Error;

/// Errors raised at the edges of a canvas: loading configuration and
/// restoring persisted layout. Gesture handling and layout commands never
/// fail.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// Configuration text is not valid JSON of the expected shape.
    #[error("invalid canvas configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration value is out of range.
    #[error("invalid setting '{key}': {reason}")]
    InvalidSetting {
        /// Dotted path of the offending setting.
        key: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// A layout snapshot could not be restored.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}
