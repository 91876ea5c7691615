//! C API for texel layout queries.
//!
//! Formats are passed as their raw `VkFormat` values and aspect masks as raw
//! `VkImageAspectFlags`. Unknown format values are treated as `VK_FORMAT_UNDEFINED`
//! and unknown aspect bits are ignored, so every export is total.
//!
//! # Available Functions
//!
//! - [`tl_element_size`] / [`tl_texel_size`] / [`tl_channel_count`]
//! - [`tl_texel_block_extent`]
//! - [`tl_region_byte_size`] / [`tl_try_region_byte_size`] / [`tl_image_byte_size`]
//! - [`tl_plane_count`] / [`tl_plane_divisors`] / [`tl_compatible_single_plane_format`]
//! - [`tl_copy_element_sizes_match`]
//! - [`tl_is_compressed`] / [`tl_is_multiplane`] / [`tl_is_depth_or_stencil`]

use crate::{
    channel_count, compatible_single_plane_format, copy_element_sizes_match, element_size,
    image_byte_size, is_compressed, is_depth_or_stencil, is_multiplane, plane_count,
    plane_divisors, region_byte_size, texel_block_extent, texel_size, try_region_byte_size,
    CopyRegion, Format, ImageAspects, LayoutError,
};
use core::slice;

#[inline]
fn format(raw: u32) -> Format {
    Format::from_raw_or_undefined(raw)
}

#[inline]
fn aspects(raw: u32) -> ImageAspects {
    ImageAspects::from_bits_truncate(raw)
}

/// Texel footprint of one element.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TlTexelBlockExtent {
    /// Width in texels
    pub width: u32,
    /// Height in texels
    pub height: u32,
    /// Depth in texels
    pub depth: u32,
}

/// Subsampling divisors of one plane.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TlPlaneDivisors {
    /// Horizontal divisor
    pub width_divisor: u32,
    /// Vertical divisor
    pub height_divisor: u32,
}

/// One copy region, as raw aspect masks.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TlCopyRegion {
    /// Source aspect mask
    pub src_aspect: u32,
    /// Destination aspect mask
    pub dst_aspect: u32,
}

/// Error codes returned by the checked C API functions.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlErrorCode {
    /// Operation completed successfully
    Success = 0,
    /// Compressed region is not aligned to the block extent
    UnalignedRegion = 1,
    /// Format has no element size
    UnsizedFormat = 2,
    /// Copy region element sizes differ
    CopySizeMismatch = 3,
    /// Size does not fit in 64 bits
    SizeOverflow = 4,
}

impl From<LayoutError> for TlErrorCode {
    fn from(error: LayoutError) -> Self {
        match error {
            LayoutError::UnalignedRegion { .. } => TlErrorCode::UnalignedRegion,
            LayoutError::UnsizedFormat(_) => TlErrorCode::UnsizedFormat,
            LayoutError::CopySizeMismatch { .. } => TlErrorCode::CopySizeMismatch,
            LayoutError::SizeOverflow { .. } => TlErrorCode::SizeOverflow,
        }
    }
}

/// Result of [`tl_try_region_byte_size`].
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TlSizeResult {
    /// [`TlErrorCode::Success`] if `byte_size` is valid
    pub error_code: TlErrorCode,
    /// Size in bytes; `0` on error
    pub byte_size: u64,
}

// =============================================================================
// C API Functions
// =============================================================================

/// Size in bytes of one element of the sub-image of `format` selected by `aspect_mask`.
#[unsafe(no_mangle)]
pub extern "C" fn tl_element_size(format_raw: u32, aspect_mask: u32) -> u32 {
    element_size(format(format_raw), aspects(aspect_mask))
}

/// Average size in bytes of one texel of `format`.
#[unsafe(no_mangle)]
pub extern "C" fn tl_texel_size(format_raw: u32) -> f64 {
    texel_size(format(format_raw))
}

/// Number of channels of `format`.
#[unsafe(no_mangle)]
pub extern "C" fn tl_channel_count(format_raw: u32) -> u32 {
    channel_count(format(format_raw))
}

/// Texel footprint of one element of `format`.
#[unsafe(no_mangle)]
pub extern "C" fn tl_texel_block_extent(format_raw: u32) -> TlTexelBlockExtent {
    let extent = texel_block_extent(format(format_raw));
    TlTexelBlockExtent {
        width: extent.width,
        height: extent.height,
        depth: extent.depth,
    }
}

/// Bytes needed to store a texel region of `format`.
///
/// Compressed regions must be block aligned; use [`tl_try_region_byte_size`] when the
/// region comes from untrusted input.
#[unsafe(no_mangle)]
pub extern "C" fn tl_region_byte_size(format_raw: u32, width: u32, height: u32, depth: u32) -> u64 {
    region_byte_size(format(format_raw), width, height, depth)
}

/// Checked variant of [`tl_region_byte_size`].
#[unsafe(no_mangle)]
pub extern "C" fn tl_try_region_byte_size(
    format_raw: u32,
    width: u32,
    height: u32,
    depth: u32,
) -> TlSizeResult {
    match try_region_byte_size(format(format_raw), width, height, depth) {
        Ok(byte_size) => TlSizeResult {
            error_code: TlErrorCode::Success,
            byte_size,
        },
        Err(error) => TlSizeResult {
            error_code: error.into(),
            byte_size: 0,
        },
    }
}

/// Bytes needed to store a whole image of `format`, summed over all planes.
#[unsafe(no_mangle)]
pub extern "C" fn tl_image_byte_size(format_raw: u32, width: u32, height: u32, depth: u32) -> u64 {
    image_byte_size(format(format_raw), width, height, depth)
}

/// Number of memory planes of `format`.
#[unsafe(no_mangle)]
pub extern "C" fn tl_plane_count(format_raw: u32) -> u32 {
    plane_count(format(format_raw))
}

/// Subsampling divisors of the plane of `format` selected by `aspect_mask`.
#[unsafe(no_mangle)]
pub extern "C" fn tl_plane_divisors(format_raw: u32, aspect_mask: u32) -> TlPlaneDivisors {
    let divisors = plane_divisors(format(format_raw), aspects(aspect_mask));
    TlPlaneDivisors {
        width_divisor: divisors.width_divisor,
        height_divisor: divisors.height_divisor,
    }
}

/// Raw value of the single-plane format addressing a plane of `format`.
///
/// Returns `0` (`VK_FORMAT_UNDEFINED`) for single-plane formats and invalid planes.
#[unsafe(no_mangle)]
pub extern "C" fn tl_compatible_single_plane_format(format_raw: u32, aspect_mask: u32) -> u32 {
    compatible_single_plane_format(format(format_raw), aspects(aspect_mask)).as_raw()
}

/// Whether every region of a copy moves elements of equal size.
///
/// # Parameters
/// - `regions`: Pointer to `region_count` regions; may be null if `region_count` is `0`
///
/// # Returns
/// `true` if sizes match for every region, `false` otherwise or if `regions` is null with a
/// non-zero count.
///
/// # Safety
/// - `regions` must be valid for reads of `region_count` [`TlCopyRegion`] values
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tl_copy_element_sizes_match(
    src_format_raw: u32,
    dst_format_raw: u32,
    regions: *const TlCopyRegion,
    region_count: usize,
) -> bool {
    if region_count == 0 {
        return true;
    }
    if regions.is_null() {
        return false;
    }

    let regions = unsafe { slice::from_raw_parts(regions, region_count) };
    let (src, dst) = (format(src_format_raw), format(dst_format_raw));
    regions.iter().all(|region| {
        let region = CopyRegion::new(aspects(region.src_aspect), aspects(region.dst_aspect));
        copy_element_sizes_match(src, dst, &[region])
    })
}

/// Whether `format` is block compressed.
#[unsafe(no_mangle)]
pub extern "C" fn tl_is_compressed(format_raw: u32) -> bool {
    is_compressed(format(format_raw))
}

/// Whether `format` stores its texels across several memory planes.
#[unsafe(no_mangle)]
pub extern "C" fn tl_is_multiplane(format_raw: u32) -> bool {
    is_multiplane(format(format_raw))
}

/// Whether `format` has a depth or stencil component.
#[unsafe(no_mangle)]
pub extern "C" fn tl_is_depth_or_stencil(format_raw: u32) -> bool {
    is_depth_or_stencil(format(format_raw))
}
