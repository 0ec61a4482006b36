/// Render layer: controls draw order for level surfaces.
///
/// Layers are drawn back-to-front: Background first, Foreground last.
/// Terrain strips sit between the scenery and the lava overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum RenderLayer {
    Background = 0,
    Midground = 1,
    Terrain = 2,
    #[default]
    Objects = 3,
    Foreground = 4,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_objects() {
        assert_eq!(RenderLayer::default(), RenderLayer::Objects);
    }

    #[test]
    fn ordering_is_back_to_front() {
        assert!(RenderLayer::Background < RenderLayer::Midground);
        assert!(RenderLayer::Midground < RenderLayer::Terrain);
        assert!(RenderLayer::Terrain < RenderLayer::Objects);
        assert!(RenderLayer::Objects < RenderLayer::Foreground);
    }
}
