//! Commit-frequency heatmap: matrix construction, PNG rendering and the
//! base64 transport encoding.
//!
//! - `matrix`: HeatmapMatrix, one row of per-repository commit counts
//! - `colormap`: diverging cool-to-warm colour scale
//! - `render`: plotters drawing into an in-memory PNG
//! - `encode`: EncodedImage, the text form carried through the URL

pub mod colormap;
pub mod encode;
pub mod matrix;
pub mod render;

pub use encode::EncodedImage;
pub use matrix::HeatmapMatrix;
pub use render::render_png;

use crate::error::Result;
use crate::models::CommitHistoryEntry;

/// Build the matrix for `history`, render it and encode the PNG.
pub fn generate(history: &[CommitHistoryEntry]) -> Result<(HeatmapMatrix, EncodedImage)> {
    let matrix = HeatmapMatrix::from_history(history);
    let png = render_png(&matrix)?;
    tracing::debug!(
        "Rendered heatmap: {} columns, {} PNG bytes",
        matrix.columns(),
        png.len()
    );
    Ok((matrix, EncodedImage::encode(&png)))
}
