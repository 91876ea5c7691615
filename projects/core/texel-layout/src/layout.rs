//! Layout queries: element, texel, region and image sizes.

use crate::aspect::ImageAspects;
use crate::block::{texel_block_extent, TexelBlockExtent};
use crate::classify::{is_compressed, is_depth_and_stencil, is_multiplane};
use crate::descriptor::lookup;
use crate::error::{LayoutError, LayoutResult};
use crate::planes::{compatible_single_plane_format, plane_count, plane_divisors};
use crate::Format;

/// The depth-only format with the same depth bits as a depth/stencil format.
const fn depth_only_counterpart(format: Format) -> Format {
    match format {
        Format::D16UnormS8Uint => Format::D16Unorm,
        Format::D24UnormS8Uint => Format::X8D24UnormPack32,
        Format::D32SfloatS8Uint => Format::D32Sfloat,
        other => other,
    }
}

/// Resolves the format whose elements make up the sub-image selected by `aspects`.
///
/// Precedence: stencil, then depth of combined depth/stencil formats, then planes of
/// multi-planar formats.
fn aspect_format(format: Format, aspects: ImageAspects) -> Format {
    if aspects.contains(ImageAspects::STENCIL) {
        // Stencil is always stored as one byte per texel
        Format::S8Uint
    } else if aspects.contains(ImageAspects::DEPTH) && is_depth_and_stencil(format) {
        depth_only_counterpart(format)
    } else if is_multiplane(format) {
        compatible_single_plane_format(format, aspects)
    } else {
        format
    }
}

/// Size in bytes of one element of the sub-image of `format` selected by `aspects`.
///
/// Returns `0` if the resolved format has no descriptor, e.g. [`Format::Undefined`], or a
/// multi-planar format measured through [`ImageAspects::COLOR`] instead of a plane aspect.
pub fn element_size(format: Format, aspects: ImageAspects) -> u32 {
    lookup(aspect_format(format, aspects)).map_or(0, |descriptor| descriptor.byte_size)
}

/// Average size in bytes of one texel of `format`.
///
/// Fractional for formats where one element covers several texels, e.g. `0.5` for BC1.
pub fn texel_size(format: Format) -> f64 {
    let extent = texel_block_extent(format);
    f64::from(element_size(format, ImageAspects::COLOR)) / f64::from(extent.texel_count())
}

/// Number of channels of `format`, `0` if it has no descriptor.
pub fn channel_count(format: Format) -> u32 {
    lookup(format).map_or(0, |descriptor| descriptor.channel_count)
}

/// Product of element counts and an element size, or [`None`] if it does not fit in a `u64`.
#[inline]
fn checked_byte_size(counts: [u32; 3], element_size: u32) -> Option<u64> {
    counts
        .iter()
        .try_fold(u64::from(element_size), |bytes, &count| {
            bytes.checked_mul(u64::from(count))
        })
}

/// Element counts along each axis of a `width`x`height`x`depth` region of `format`.
fn region_element_counts(format: Format, width: u32, height: u32, depth: u32) -> [u32; 3] {
    if is_compressed(format) {
        let extent = texel_block_extent(format);
        [
            width.div_ceil(extent.width),
            height.div_ceil(extent.height),
            depth,
        ]
    } else {
        [width, height, depth]
    }
}

/// Whether a `width`x`height` region is valid for the blocks of a compressed format.
///
/// Each dimension must be a whole number of blocks, or smaller than one block (a partial block
/// at the edge of an image).
#[inline]
fn is_block_aligned(extent: TexelBlockExtent, width: u32, height: u32) -> bool {
    let aligned = |size: u32, block: u32| size % block == 0 || size < block;
    aligned(width, extent.width) && aligned(height, extent.height)
}

/// Bytes needed to store a `width`x`height`x`depth` texel region of `format`.
///
/// For compressed formats, `width` and `height` must each be a multiple of the block extent or
/// smaller than one block. Violating this is a caller error: it asserts in debug builds and the
/// result is unspecified otherwise. Use [`try_region_byte_size`] to check instead.
///
/// Uncompressed formats are sized as `width * height * depth` elements. Sizes that do not fit
/// in a `u64` saturate to [`u64::MAX`].
pub fn region_byte_size(format: Format, width: u32, height: u32, depth: u32) -> u64 {
    if is_compressed(format) {
        let extent = texel_block_extent(format);
        debug_assert!(
            is_block_aligned(extent, width, height),
            "{width}x{height} region is not aligned to the {}x{} blocks of {format}",
            extent.width,
            extent.height
        );
    }

    let counts = region_element_counts(format, width, height, depth);
    checked_byte_size(counts, element_size(format, ImageAspects::COLOR)).unwrap_or(u64::MAX)
}

/// Checked variant of [`region_byte_size`].
///
/// # Errors
///
/// - [`LayoutError::UnalignedRegion`] if a compressed region is not block aligned.
/// - [`LayoutError::UnsizedFormat`] if the format has no element size.
/// - [`LayoutError::SizeOverflow`] if the size does not fit in a `u64`.
pub fn try_region_byte_size(
    format: Format,
    width: u32,
    height: u32,
    depth: u32,
) -> LayoutResult<u64> {
    let size = element_size(format, ImageAspects::COLOR);
    if size == 0 {
        return Err(LayoutError::UnsizedFormat(format));
    }

    if is_compressed(format) {
        let extent = texel_block_extent(format);
        if !is_block_aligned(extent, width, height) {
            return Err(LayoutError::UnalignedRegion {
                format,
                width,
                height,
                block_width: extent.width,
                block_height: extent.height,
            });
        }
    }

    let counts = region_element_counts(format, width, height, depth);
    checked_byte_size(counts, size).ok_or(LayoutError::SizeOverflow {
        format,
        width,
        height,
        depth,
    })
}

/// Bytes needed to store a whole `width`x`height`x`depth` image of `format`.
///
/// Unlike [`region_byte_size`], this accepts any image size: partial blocks and shared-chroma
/// groups at the image edge are rounded up, and multi-planar formats are sized as the sum of
/// their planes at their subsampled resolution. Sizes that do not fit in a `u64` saturate to
/// [`u64::MAX`].
pub fn image_byte_size(format: Format, width: u32, height: u32, depth: u32) -> u64 {
    if is_multiplane(format) {
        return ImageAspects::PLANES[..plane_count(format) as usize]
            .iter()
            .map(|&plane| {
                let divisors = plane_divisors(format, plane);
                let counts = [
                    width.div_ceil(divisors.width_divisor),
                    height.div_ceil(divisors.height_divisor),
                    depth,
                ];
                checked_byte_size(counts, element_size(format, plane))
            })
            .try_fold(0u64, |total, plane| total.checked_add(plane?))
            .unwrap_or(u64::MAX);
    }

    let extent = texel_block_extent(format);
    let counts = [
        width.div_ceil(extent.width),
        height.div_ceil(extent.height),
        depth.div_ceil(extent.depth),
    ];
    checked_byte_size(counts, element_size(format, ImageAspects::COLOR)).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(Format::R8G8B8A8Unorm, ImageAspects::COLOR, 4)]
    #[case(Format::R32G32B32Sfloat, ImageAspects::COLOR, 12)]
    #[case(Format::BC1RgbUnormBlock, ImageAspects::COLOR, 8)]
    #[case(Format::Astc8x8SrgbBlock, ImageAspects::COLOR, 16)]
    #[case(Format::D24UnormS8Uint, ImageAspects::STENCIL, 1)]
    #[case(Format::D24UnormS8Uint, ImageAspects::DEPTH, 4)]
    #[case(Format::D16UnormS8Uint, ImageAspects::DEPTH, 2)]
    #[case(Format::D16UnormS8Uint, ImageAspects::COLOR, 3)]
    #[case(Format::D32SfloatS8Uint, ImageAspects::COLOR, 5)]
    #[case(Format::D32SfloatS8Uint, ImageAspects::DEPTH, 4)]
    #[case(Format::D32SfloatS8Uint, ImageAspects::STENCIL, 1)]
    #[case(Format::D32SfloatS8Uint, ImageAspects::DEPTH | ImageAspects::STENCIL, 1)]
    #[case(Format::D32Sfloat, ImageAspects::DEPTH, 4)]
    #[case(Format::R8G8B8A8Unorm, ImageAspects::STENCIL, 1)]
    #[case(Format::G8B8R82Plane420Unorm, ImageAspects::PLANE_0, 1)]
    #[case(Format::G8B8R82Plane420Unorm, ImageAspects::PLANE_1, 2)]
    #[case(Format::G8B8R82Plane420Unorm, ImageAspects::PLANE_2, 0)]
    #[case(Format::G8B8R82Plane420Unorm, ImageAspects::COLOR, 0)]
    #[case(Format::G16B16R163Plane444Unorm, ImageAspects::PLANE_2, 2)]
    #[case(Format::G10X6B10X6R10X62Plane420Unorm3Pack16, ImageAspects::PLANE_1, 4)]
    #[case(Format::Undefined, ImageAspects::COLOR, 0)]
    fn element_sizes(
        #[case] format: Format,
        #[case] aspects: ImageAspects,
        #[case] expected: u32,
    ) {
        assert_eq!(element_size(format, aspects), expected);
    }

    #[test]
    fn combined_depth_stencil_aspects() {
        assert_eq!(element_size(Format::D24UnormS8Uint, ImageAspects::STENCIL), 1);
        assert_eq!(
            element_size(Format::D24UnormS8Uint, ImageAspects::DEPTH),
            element_size(Format::X8D24UnormPack32, ImageAspects::COLOR)
        );
    }

    #[rstest]
    #[case(Format::R8G8B8A8Unorm, 4.0)]
    #[case(Format::BC1RgbUnormBlock, 0.5)]
    #[case(Format::BC7UnormBlock, 1.0)]
    #[case(Format::Pvrtc12BppUnormBlockImg, 0.25)]
    #[case(Format::G8B8G8R8422Unorm, 2.0)]
    #[case(Format::Astc12x12UnormBlock, 16.0 / 144.0)]
    #[case(Format::Undefined, 0.0)]
    fn texel_sizes(#[case] format: Format, #[case] expected: f64) {
        assert_eq!(texel_size(format), expected);
    }

    #[rstest]
    #[case(Format::R8G8B8A8Unorm, 4)]
    #[case(Format::R8G8Unorm, 2)]
    #[case(Format::D24UnormS8Uint, 2)]
    #[case(Format::BC4UnormBlock, 1)]
    #[case(Format::Undefined, 0)]
    fn channel_counts(#[case] format: Format, #[case] expected: u32) {
        assert_eq!(channel_count(format), expected);
    }

    #[rstest]
    #[case(Format::R8G8B8A8Unorm, 16, 16, 1, 1024)]
    #[case(Format::R16G16B16A16Sfloat, 3, 5, 2, 240)]
    #[case(Format::BC1RgbUnormBlock, 16, 16, 1, 128)]
    #[case(Format::BC3UnormBlock, 8, 4, 1, 32)]
    #[case(Format::BC1RgbUnormBlock, 2, 2, 1, 8)]
    #[case(Format::BC1RgbUnormBlock, 16, 2, 1, 32)]
    #[case(Format::Astc6x6UnormBlock, 12, 18, 1, 96)]
    #[case(Format::Pvrtc12BppUnormBlockImg, 16, 8, 1, 32)]
    #[case(Format::BC7UnormBlock, 8, 8, 3, 192)]
    #[case(Format::Undefined, 16, 16, 1, 0)]
    fn region_sizes(
        #[case] format: Format,
        #[case] width: u32,
        #[case] height: u32,
        #[case] depth: u32,
        #[case] expected: u64,
    ) {
        assert_eq!(region_byte_size(format, width, height, depth), expected);
    }

    #[test]
    fn one_block_region_is_one_element() {
        for &format in Format::all().iter().filter(|f| is_compressed(**f)) {
            let extent = texel_block_extent(format);
            assert_eq!(
                region_byte_size(format, extent.width, extent.height, 1),
                u64::from(element_size(format, ImageAspects::COLOR)),
                "{format}"
            );
        }
    }

    #[test]
    fn region_size_does_not_overflow_u32() {
        let size = region_byte_size(Format::R64G64B64A64Sfloat, 16384, 16384, 4);
        assert_eq!(size, 16384 * 16384 * 4 * 32);
    }

    #[rstest]
    #[case(Format::R64G64B64A64Sfloat, u32::MAX, u32::MAX, u32::MAX)]
    #[case(Format::R8Unorm, u32::MAX, u32::MAX, u32::MAX)]
    #[case(Format::BC7UnormBlock, 0xFFFF_FFFC, 0xFFFF_FFFC, u32::MAX)]
    fn oversized_regions_saturate(
        #[case] format: Format,
        #[case] width: u32,
        #[case] height: u32,
        #[case] depth: u32,
    ) {
        assert_eq!(region_byte_size(format, width, height, depth), u64::MAX);
        assert_eq!(image_byte_size(format, width, height, depth), u64::MAX);
        assert_eq!(
            try_region_byte_size(format, width, height, depth),
            Err(LayoutError::SizeOverflow {
                format,
                width,
                height,
                depth,
            })
        );
    }

    #[test]
    fn oversized_multiplane_images_saturate() {
        assert_eq!(
            image_byte_size(Format::G16B16R163Plane444Unorm, u32::MAX, u32::MAX, u32::MAX),
            u64::MAX
        );
    }

    #[test]
    fn largest_fitting_region_is_exact() {
        // 2^32-1 squared times 1 byte still fits
        let expected = u64::from(u32::MAX) * u64::from(u32::MAX);
        assert_eq!(
            region_byte_size(Format::R8Unorm, u32::MAX, u32::MAX, 1),
            expected
        );
        assert_eq!(
            try_region_byte_size(Format::R8Unorm, u32::MAX, u32::MAX, 1),
            Ok(expected)
        );
    }

    #[rstest]
    #[case(Format::G8B8R82Plane420Unorm)]
    #[case(Format::G16B16R163Plane444Unorm)]
    #[case(Format::G8B8G8R8422Unorm)]
    #[case(Format::R8G8B8A8Unorm)]
    fn depth_aspect_on_color_formats_is_not_substituted(#[case] format: Format) {
        assert_eq!(
            element_size(format, ImageAspects::DEPTH),
            element_size(format, ImageAspects::COLOR)
        );
    }

    #[test]
    fn try_region_rejects_unaligned_compressed_regions() {
        assert_eq!(
            try_region_byte_size(Format::BC1RgbUnormBlock, 6, 8, 1),
            Err(LayoutError::UnalignedRegion {
                format: Format::BC1RgbUnormBlock,
                width: 6,
                height: 8,
                block_width: 4,
                block_height: 4,
            })
        );
    }

    #[rstest]
    #[case(Format::Undefined)]
    #[case(Format::G8B8R83Plane420Unorm)]
    fn try_region_rejects_unsized_formats(#[case] format: Format) {
        assert_eq!(
            try_region_byte_size(format, 4, 4, 1),
            Err(LayoutError::UnsizedFormat(format))
        );
    }

    #[rstest]
    #[case(Format::BC1RgbUnormBlock, 16, 16, 128)]
    #[case(Format::BC1RgbUnormBlock, 1, 1, 8)]
    #[case(Format::R8Unorm, 7, 3, 21)]
    fn try_region_accepts_valid_regions(
        #[case] format: Format,
        #[case] width: u32,
        #[case] height: u32,
        #[case] expected: u64,
    ) {
        assert_eq!(try_region_byte_size(format, width, height, 1), Ok(expected));
    }

    #[rstest]
    #[case(Format::R8G8B8A8Unorm, 16, 16, 1, 1024)]
    #[case(Format::BC1RgbUnormBlock, 16, 16, 1, 128)]
    #[case(Format::BC1RgbUnormBlock, 5, 5, 1, 32)]
    #[case(Format::Astc10x10UnormBlock, 1920, 1080, 1, 192 * 108 * 16)]
    #[case(Format::G8B8G8R8422Unorm, 16, 16, 1, 512)]
    #[case(Format::G8B8G8R8422Unorm, 15, 1, 1, 32)]
    #[case(Format::G8B8R82Plane420Unorm, 16, 16, 1, 384)]
    #[case(Format::G8B8R83Plane420Unorm, 16, 16, 1, 384)]
    #[case(Format::G8B8R83Plane420Unorm, 15, 15, 1, 225 + 64 + 64)]
    #[case(Format::G8B8R82Plane422Unorm, 16, 16, 1, 512)]
    #[case(Format::G16B16R163Plane444Unorm, 4, 4, 1, 96)]
    #[case(Format::G10X6B10X6R10X62Plane420Unorm3Pack16, 1920, 1080, 1, 1920 * 1080 * 3)]
    #[case(Format::D24UnormS8Uint, 8, 8, 1, 256)]
    #[case(Format::Undefined, 8, 8, 1, 0)]
    fn image_sizes(
        #[case] format: Format,
        #[case] width: u32,
        #[case] height: u32,
        #[case] depth: u32,
        #[case] expected: u64,
    ) {
        assert_eq!(image_byte_size(format, width, height, depth), expected);
    }

    #[test]
    fn image_size_equals_region_size_for_aligned_single_plane_images() {
        for &format in Format::all().iter().filter(|f| !is_multiplane(**f)) {
            let extent = texel_block_extent(format);
            if extent.texel_count() > 1 && !is_compressed(format) {
                // Shared-chroma formats are sized per texel by region_byte_size
                continue;
            }
            let (width, height) = (extent.width * 3, extent.height * 2);
            assert_eq!(
                image_byte_size(format, width, height, 1),
                region_byte_size(format, width, height, 1),
                "{format}"
            );
        }
    }
}
