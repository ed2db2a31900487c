// Plot Module
//
// Visual sanity checks for pipeline output. Figures are plain RGB rasters;
// callers save them as PNG or hand the bytes to whatever viewer they use.
// - figure.rs: Figure raster, blending, PNG encoding
// - colormap.rs: Viridis gradient for spectrograms
// - render.rs: show_wave, show_transform, show_spectro

pub mod colormap;
pub mod figure;
pub mod render;

pub use figure::Figure;
pub use render::{show_spectro, show_transform, show_wave};
