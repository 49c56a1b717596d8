//! Scroll synchronizer: keeps scrollbar geometry in step with the viewport.

use crate::config::ScrollbarConfig;
use crate::host::ScrollHost;
use crate::track::ScrollbarGeometry;
use tracing::trace;

/// Recomputes [`ScrollbarGeometry`] from fresh host metrics.
///
/// Geometry is replaced wholesale on every pass; nothing from a previous
/// pass feeds into the next.
#[derive(Debug, Clone, Default)]
pub struct ScrollSync {
    geometry: Option<ScrollbarGeometry>,
    passes: u64,
}

impl ScrollSync {
    /// Create a synchronizer with no geometry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read metrics from `host` and recompute both axes.
    ///
    /// Returns the new geometry, or `None` when the host has no metrics, in
    /// which case the previous geometry is kept.
    pub fn sync<H: ScrollHost + ?Sized>(
        &mut self,
        host: &H,
        config: &ScrollbarConfig,
    ) -> Option<&ScrollbarGeometry> {
        let Some(viewport) = host.metrics() else {
            trace!("sync skipped, viewport unavailable");
            return None;
        };
        let window = host.window();
        let geometry = ScrollbarGeometry::compute(&viewport, &window, config);
        self.passes += 1;
        trace!(
            pass = self.passes,
            h_offset = geometry.horizontal.thumb.offset,
            v_offset = geometry.vertical.thumb.offset,
            "scrollbars synced"
        );
        Some(self.geometry.insert(geometry))
    }

    /// Geometry from the last successful pass.
    #[must_use]
    pub const fn geometry(&self) -> Option<&ScrollbarGeometry> {
        self.geometry.as_ref()
    }

    /// Number of successful passes.
    #[must_use]
    pub const fn passes(&self) -> u64 {
        self.passes
    }

    /// Drop the geometry.
    pub fn reset(&mut self) {
        self.geometry = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryHost;
    use veneer_core::{Axis, Point, Size};

    fn host() -> MemoryHost {
        MemoryHost::new(Size::new(800.0, 300.0), Size::new(1600.0, 300.0)).at(Point::new(0.0, 100.0))
    }

    #[test]
    fn test_sync_computes_geometry() {
        let h = host();
        let mut sync = ScrollSync::new();
        let g = *sync.sync(&h, &ScrollbarConfig::default()).unwrap();
        assert_eq!(g.horizontal.thumb.length, 400.0);
        assert_eq!(sync.passes(), 1);
    }

    #[test]
    fn test_sync_is_idempotent() {
        let h = host();
        let config = ScrollbarConfig::default();
        let mut sync = ScrollSync::new();
        let first = *sync.sync(&h, &config).unwrap();
        let second = *sync.sync(&h, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_sync_follows_scroll() {
        let h = host();
        let config = ScrollbarConfig::default();
        let mut sync = ScrollSync::new();
        sync.sync(&h, &config);
        h.scroll_to(Axis::Horizontal, 600.0);
        let g = sync.sync(&h, &config).unwrap();
        assert_eq!(g.horizontal.thumb.offset, 300.0);
    }

    #[test]
    fn test_unavailable_host_keeps_previous_geometry() {
        let h = host();
        let config = ScrollbarConfig::default();
        let mut sync = ScrollSync::new();
        let before = *sync.sync(&h, &config).unwrap();
        h.detach();
        assert!(sync.sync(&h, &config).is_none());
        assert_eq!(sync.geometry(), Some(&before));
        assert_eq!(sync.passes(), 1);
    }

    #[test]
    fn test_reset_clears_geometry() {
        let mut sync = ScrollSync::new();
        sync.sync(&host(), &ScrollbarConfig::default());
        sync.reset();
        assert!(sync.geometry().is_none());
    }
}
