//! Texel block extents.

use crate::classify::is_single_plane_422;
use crate::Format;
use crate::Format::*;

/// Number of texels one element of a format covers, per dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TexelBlockExtent {
    /// Width in texels
    pub width: u32,
    /// Height in texels
    pub height: u32,
    /// Depth in texels
    pub depth: u32,
}

impl TexelBlockExtent {
    /// One element per texel.
    pub const TEXEL: Self = Self::new(1, 1, 1);

    /// Creates a new extent.
    #[inline(always)]
    pub const fn new(width: u32, height: u32, depth: u32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    #[inline(always)]
    const fn flat(width: u32, height: u32) -> Self {
        Self::new(width, height, 1)
    }

    /// Total number of texels covered by one element.
    #[inline]
    pub const fn texel_count(&self) -> u32 {
        self.width * self.height * self.depth
    }
}

impl Default for TexelBlockExtent {
    fn default() -> Self {
        Self::TEXEL
    }
}

/// The texel footprint of one element of `format`.
///
/// - Block-compressed formats report their compression block.
/// - Single-plane 4:2:2 and multi-planar 4:2:2 formats report `2x1x1`, multi-planar 4:2:0
///   formats `2x2x1`: the granularity at which texels share chroma.
/// - Everything else, including 4:4:4 multi-planar formats, reports `1x1x1`.
pub const fn texel_block_extent(format: Format) -> TexelBlockExtent {
    match format {
        BC1RgbUnormBlock | BC1RgbSrgbBlock | BC1RgbaUnormBlock | BC1RgbaSrgbBlock
        | BC2UnormBlock | BC2SrgbBlock | BC3UnormBlock | BC3SrgbBlock | BC4UnormBlock
        | BC4SnormBlock | BC5UnormBlock | BC5SnormBlock | BC6HUfloatBlock | BC6HSfloatBlock
        | BC7UnormBlock | BC7SrgbBlock => TexelBlockExtent::flat(4, 4),

        Etc2R8G8B8UnormBlock | Etc2R8G8B8SrgbBlock | Etc2R8G8B8A1UnormBlock
        | Etc2R8G8B8A1SrgbBlock | Etc2R8G8B8A8UnormBlock | Etc2R8G8B8A8SrgbBlock
        | EacR11UnormBlock | EacR11SnormBlock | EacR11G11UnormBlock | EacR11G11SnormBlock => {
            TexelBlockExtent::flat(4, 4)
        }

        Astc4x4UnormBlock | Astc4x4SrgbBlock => TexelBlockExtent::flat(4, 4),
        Astc5x4UnormBlock | Astc5x4SrgbBlock => TexelBlockExtent::flat(5, 4),
        Astc5x5UnormBlock | Astc5x5SrgbBlock => TexelBlockExtent::flat(5, 5),
        Astc6x5UnormBlock | Astc6x5SrgbBlock => TexelBlockExtent::flat(6, 5),
        Astc6x6UnormBlock | Astc6x6SrgbBlock => TexelBlockExtent::flat(6, 6),
        Astc8x5UnormBlock | Astc8x5SrgbBlock => TexelBlockExtent::flat(8, 5),
        Astc8x6UnormBlock | Astc8x6SrgbBlock => TexelBlockExtent::flat(8, 6),
        Astc8x8UnormBlock | Astc8x8SrgbBlock => TexelBlockExtent::flat(8, 8),
        Astc10x5UnormBlock | Astc10x5SrgbBlock => TexelBlockExtent::flat(10, 5),
        Astc10x6UnormBlock | Astc10x6SrgbBlock => TexelBlockExtent::flat(10, 6),
        Astc10x8UnormBlock | Astc10x8SrgbBlock => TexelBlockExtent::flat(10, 8),
        Astc10x10UnormBlock | Astc10x10SrgbBlock => TexelBlockExtent::flat(10, 10),
        Astc12x10UnormBlock | Astc12x10SrgbBlock => TexelBlockExtent::flat(12, 10),
        Astc12x12UnormBlock | Astc12x12SrgbBlock => TexelBlockExtent::flat(12, 12),

        // 2bpp PVRTC packs 8x4 texels into each 64-bit block, 4bpp packs 4x4
        Pvrtc12BppUnormBlockImg | Pvrtc12BppSrgbBlockImg | Pvrtc22BppUnormBlockImg
        | Pvrtc22BppSrgbBlockImg => TexelBlockExtent::flat(8, 4),
        Pvrtc14BppUnormBlockImg | Pvrtc14BppSrgbBlockImg | Pvrtc24BppUnormBlockImg
        | Pvrtc24BppSrgbBlockImg => TexelBlockExtent::flat(4, 4),

        G8B8R83Plane420Unorm
        | G8B8R82Plane420Unorm
        | G10X6B10X6R10X63Plane420Unorm3Pack16
        | G10X6B10X6R10X62Plane420Unorm3Pack16
        | G12X4B12X4R12X43Plane420Unorm3Pack16
        | G12X4B12X4R12X42Plane420Unorm3Pack16
        | G16B16R163Plane420Unorm
        | G16B16R162Plane420Unorm => TexelBlockExtent::flat(2, 2),

        G8B8R83Plane422Unorm
        | G8B8R82Plane422Unorm
        | G10X6B10X6R10X63Plane422Unorm3Pack16
        | G10X6B10X6R10X62Plane422Unorm3Pack16
        | G12X4B12X4R12X43Plane422Unorm3Pack16
        | G12X4B12X4R12X42Plane422Unorm3Pack16
        | G16B16R163Plane422Unorm
        | G16B16R162Plane422Unorm => TexelBlockExtent::flat(2, 1),

        _ if is_single_plane_422(format) => TexelBlockExtent::flat(2, 1),
        _ => TexelBlockExtent::TEXEL,
    }
}
