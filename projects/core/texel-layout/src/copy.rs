//! Size compatibility of image-to-image copies.

use crate::aspect::ImageAspects;
use crate::classify::is_multiplane;
use crate::error::{LayoutError, LayoutResult};
use crate::layout::element_size;
use crate::planes::compatible_single_plane_format;
use crate::Format;

/// The aspects one copy region reads from its source and writes to its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CopyRegion {
    /// Aspect of the source image being read.
    pub src_aspect: ImageAspects,
    /// Aspect of the destination image being written.
    pub dst_aspect: ImageAspects,
}

impl CopyRegion {
    /// Creates a region copying `src_aspect` into `dst_aspect`.
    #[inline]
    pub const fn new(src_aspect: ImageAspects, dst_aspect: ImageAspects) -> Self {
        Self {
            src_aspect,
            dst_aspect,
        }
    }

    /// A color-to-color region.
    #[inline]
    pub const fn color() -> Self {
        Self::new(ImageAspects::COLOR, ImageAspects::COLOR)
    }
}

impl Default for CopyRegion {
    fn default() -> Self {
        Self::color()
    }
}

/// Element size of one side of a copy.
///
/// Planes of multi-planar formats are measured through their compatible single-plane format.
fn copy_side_size(format: Format, aspect: ImageAspects) -> u32 {
    if is_multiplane(format) {
        element_size(
            compatible_single_plane_format(format, aspect),
            ImageAspects::COLOR,
        )
    } else {
        element_size(format, aspect)
    }
}

/// Whether every region of a copy from `src_format` to `dst_format` moves elements of equal size.
///
/// An empty region list is trivially compatible.
pub fn copy_element_sizes_match(
    src_format: Format,
    dst_format: Format,
    regions: &[CopyRegion],
) -> bool {
    regions.iter().all(|region| {
        copy_side_size(src_format, region.src_aspect)
            == copy_side_size(dst_format, region.dst_aspect)
    })
}

/// Checked variant of [`copy_element_sizes_match`] reporting the first offending region.
///
/// # Errors
///
/// - [`LayoutError::UnsizedFormat`] if a side of a region resolves to no element size.
/// - [`LayoutError::CopySizeMismatch`] if a region moves elements of differing sizes.
pub fn validate_copy_regions(
    src_format: Format,
    dst_format: Format,
    regions: &[CopyRegion],
) -> LayoutResult<()> {
    for (index, region) in regions.iter().enumerate() {
        let src_size = copy_side_size(src_format, region.src_aspect);
        if src_size == 0 {
            return Err(LayoutError::UnsizedFormat(src_format));
        }

        let dst_size = copy_side_size(dst_format, region.dst_aspect);
        if dst_size == 0 {
            return Err(LayoutError::UnsizedFormat(dst_format));
        }

        if src_size != dst_size {
            return Err(LayoutError::CopySizeMismatch {
                region: index,
                src_size,
                dst_size,
            });
        }
    }

    Ok(())
}
