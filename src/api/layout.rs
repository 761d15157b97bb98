//! Bucket axis layouts: which semantic inputs map onto (x, y, z).
//!
//! Callers instrument with five generic inputs - a type/slice index `t`,
//! a position (`x`, `y`), and a shape (`w`, `h`) - and derive each from
//! their own domain objects. The layout selected at build time decides
//! which of those land on the bucketed clock's grid coordinates.

/// Semantic interpretation of the bucketed clock's generic axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketLayout {
    /// x = picture/slice type; y and z unused.
    PicTypes,
    /// x, y = block position within the picture; z = picture/slice type.
    Blocks,
    /// x, y = log2 block width/height; z = picture/slice type.
    Shapes,
}

impl BucketLayout {
    /// Layout selected by this build's feature flags.
    ///
    /// `bucket-shapes` wins over `bucket-blocks`; pic-types is the
    /// default when no axis feature is enabled.
    #[cfg(feature = "bucket-shapes")]
    pub const ACTIVE: BucketLayout = BucketLayout::Shapes;

    /// Layout selected by this build's feature flags.
    ///
    /// `bucket-shapes` wins over `bucket-blocks`; pic-types is the
    /// default when no axis feature is enabled.
    #[cfg(all(feature = "bucket-blocks", not(feature = "bucket-shapes")))]
    pub const ACTIVE: BucketLayout = BucketLayout::Blocks;

    /// Layout selected by this build's feature flags.
    ///
    /// `bucket-shapes` wins over `bucket-blocks`; pic-types is the
    /// default when no axis feature is enabled.
    #[cfg(not(any(feature = "bucket-blocks", feature = "bucket-shapes")))]
    pub const ACTIVE: BucketLayout = BucketLayout::PicTypes;
}

/// Map the generic instrumentation inputs onto grid coordinates for the
/// active layout. Inputs the layout does not use are ignored.
pub fn bucket_coords(t: usize, x: usize, y: usize, w: usize, h: usize) -> (usize, usize, usize) {
    match BucketLayout::ACTIVE {
        BucketLayout::PicTypes => (t, 0, 0),
        BucketLayout::Blocks => (x, y, t),
        BucketLayout::Shapes => (w, h, t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(any(feature = "bucket-blocks", feature = "bucket-shapes")))]
    #[test]
    fn test_pic_types_layout() {
        assert_eq!(BucketLayout::ACTIVE, BucketLayout::PicTypes);
        assert_eq!(bucket_coords(3, 7, 8, 5, 6), (3, 0, 0));
    }

    #[cfg(all(feature = "bucket-blocks", not(feature = "bucket-shapes")))]
    #[test]
    fn test_blocks_layout() {
        assert_eq!(BucketLayout::ACTIVE, BucketLayout::Blocks);
        assert_eq!(bucket_coords(1, 7, 8, 5, 6), (7, 8, 1));
    }

    #[cfg(feature = "bucket-shapes")]
    #[test]
    fn test_shapes_layout() {
        assert_eq!(BucketLayout::ACTIVE, BucketLayout::Shapes);
        assert_eq!(bucket_coords(1, 7, 8, 5, 6), (5, 6, 1));
    }
}
