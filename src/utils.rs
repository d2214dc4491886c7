//! Utility functions

use crate::constants::APP_NAME;
use std::path::PathBuf;

// Three slider rails with teal handles, square viewBox
pub const LOGO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><rect x="2" y="2" width="60" height="60" rx="12" fill="#18181b" stroke="#3f3f46" stroke-width="2"/><g stroke-linecap="round" stroke-width="4"><line x1="14" y1="20" x2="50" y2="20" stroke="#115e59"/><line x1="14" y1="32" x2="50" y2="32" stroke="#115e59"/><line x1="14" y1="44" x2="50" y2="44" stroke="#115e59"/><line x1="14" y1="20" x2="40" y2="20" stroke="#2dd4bf"/><line x1="14" y1="32" x2="24" y2="32" stroke="#2dd4bf"/><line x1="14" y1="44" x2="46" y2="44" stroke="#2dd4bf"/></g><circle cx="40" cy="20" r="5" fill="#fff"/><circle cx="24" cy="32" r="5" fill="#fff"/><circle cx="46" cy="44" r="5" fill="#fff"/></svg>"##;

/// Rasterize the logo SVG to a square RGBA image (straight alpha).
/// Returns None if the SVG cannot be parsed or the size is zero.
pub fn rasterize_logo(size: u32) -> Option<(Vec<u8>, u32, u32)> {
    let tree = resvg::usvg::Tree::from_str(LOGO_SVG, &resvg::usvg::Options::default()).ok()?;
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Some((premul_to_straight(&pixmap), size, size))
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// App data directory (logs, settings.json)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logo_rasterizes_to_requested_size() {
        let (pixels, w, h) = rasterize_logo(32).unwrap();
        assert_eq!((w, h), (32, 32));
        assert_eq!(pixels.len(), 32 * 32 * 4);
        assert!(pixels.chunks(4).any(|p| p[3] == 255));
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(rasterize_logo(0).is_none());
    }

    #[test]
    fn data_dir_is_named_after_app() {
        assert!(get_data_dir().ends_with(APP_NAME));
    }
}
