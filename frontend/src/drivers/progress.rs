//! Page scroll progress for the top-of-page fill bar.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

/// Fraction of the scrollable distance covered, in `[0, 1]`.
///
/// Pages that cannot scroll report 0.
pub fn scroll_progress(metrics: &ScrollMetrics) -> f64 {
    let scrollable = metrics.scroll_height - metrics.viewport_height;
    if scrollable.is_nan() || scrollable <= 0.0 || !metrics.offset.is_finite() {
        return 0.0;
    }
    let progress = metrics.offset / scrollable;
    if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
