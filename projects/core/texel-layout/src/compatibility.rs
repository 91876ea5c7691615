//! Format compatibility classes.
//!
//! Two formats in the same class have bit-for-bit compatible element layouts, so an image of one
//! can be viewed as, or copied byte-for-byte into, an image of the other.

use crate::descriptor::lookup;
use crate::Format;

/// Equivalence class of formats sharing an element layout.
///
/// Each family gets its own variant; classes are only ever compared for equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CompatibilityClass {
    /// No class. Used for [`Format::Undefined`] and table misses.
    #[default]
    None,
    /// 8-bit texels
    Bit8,
    /// 16-bit texels
    Bit16,
    /// 24-bit texels
    Bit24,
    /// 32-bit texels
    Bit32,
    /// 48-bit texels
    Bit48,
    /// 64-bit texels
    Bit64,
    /// 96-bit texels
    Bit96,
    /// 128-bit texels
    Bit128,
    /// 192-bit texels
    Bit192,
    /// 256-bit texels
    Bit256,
    /// BC1 without alpha
    Bc1Rgb,
    /// BC1 with 1-bit alpha
    Bc1Rgba,
    /// BC2 (DXT2/DXT3)
    Bc2,
    /// BC3 (DXT4/DXT5)
    Bc3,
    /// BC4 single channel
    Bc4,
    /// BC5 two channel
    Bc5,
    /// BC6H HDR
    Bc6h,
    /// BC7
    Bc7,
    /// ETC2 RGB
    Etc2Rgb,
    /// ETC2 RGB with punch-through alpha
    Etc2Rgba,
    /// ETC2 RGB with EAC alpha
    Etc2EacRgba,
    /// EAC single channel
    EacR,
    /// EAC two channel
    EacRg,
    /// ASTC 4x4 blocks
    Astc4x4,
    /// ASTC 5x4 blocks
    Astc5x4,
    /// ASTC 5x5 blocks
    Astc5x5,
    /// ASTC 6x5 blocks
    Astc6x5,
    /// ASTC 6x6 blocks
    Astc6x6,
    /// ASTC 8x5 blocks
    Astc8x5,
    /// ASTC 8x6 blocks
    Astc8x6,
    /// ASTC 8x8 blocks
    Astc8x8,
    /// ASTC 10x5 blocks
    Astc10x5,
    /// ASTC 10x6 blocks
    Astc10x6,
    /// ASTC 10x8 blocks
    Astc10x8,
    /// ASTC 10x10 blocks
    Astc10x10,
    /// ASTC 12x10 blocks
    Astc12x10,
    /// ASTC 12x12 blocks
    Astc12x12,
    /// 16-bit depth
    D16,
    /// 24-bit depth
    D24,
    /// 32-bit depth
    D32,
    /// 8-bit stencil
    S8,
    /// 16-bit depth, 8-bit stencil
    D16S8,
    /// 24-bit depth, 8-bit stencil
    D24S8,
    /// 32-bit depth, 8-bit stencil
    D32S8,
    /// PVRTC1 at 2 bits per pixel
    Pvrtc1Bpp2,
    /// PVRTC1 at 4 bits per pixel
    Pvrtc1Bpp4,
    /// PVRTC2 at 2 bits per pixel
    Pvrtc2Bpp2,
    /// PVRTC2 at 4 bits per pixel
    Pvrtc2Bpp4,
    /// 32-bit GBGR 4:2:2
    G8B8G8R8Bit32,
    /// 32-bit BGRG 4:2:2
    B8G8R8G8Bit32,
    /// 64-bit RGBA with 10 significant bits
    R10G10B10A10Bit64,
    /// 64-bit GBGR 4:2:2 with 10 significant bits
    G10B10G10R10Bit64,
    /// 64-bit BGRG 4:2:2 with 10 significant bits
    B10G10R10G10Bit64,
    /// 64-bit RGBA with 12 significant bits
    R12G12B12A12Bit64,
    /// 64-bit GBGR 4:2:2 with 12 significant bits
    G12B12G12R12Bit64,
    /// 64-bit BGRG 4:2:2 with 12 significant bits
    B12G12R12G12Bit64,
    /// 64-bit GBGR 4:2:2
    G16B16G16R16Bit64,
    /// 64-bit BGRG 4:2:2
    B16G16R16G16Bit64,
    /// 8-bit, three planes, 4:2:0
    Bit8ThreePlane420,
    /// 8-bit, two planes, 4:2:0
    Bit8TwoPlane420,
    /// 8-bit, three planes, 4:2:2
    Bit8ThreePlane422,
    /// 8-bit, two planes, 4:2:2
    Bit8TwoPlane422,
    /// 8-bit, three planes, 4:4:4
    Bit8ThreePlane444,
    /// 10-bit, three planes, 4:2:0
    Bit10ThreePlane420,
    /// 10-bit, two planes, 4:2:0
    Bit10TwoPlane420,
    /// 10-bit, three planes, 4:2:2
    Bit10ThreePlane422,
    /// 10-bit, two planes, 4:2:2
    Bit10TwoPlane422,
    /// 10-bit, three planes, 4:4:4
    Bit10ThreePlane444,
    /// 12-bit, three planes, 4:2:0
    Bit12ThreePlane420,
    /// 12-bit, two planes, 4:2:0
    Bit12TwoPlane420,
    /// 12-bit, three planes, 4:2:2
    Bit12ThreePlane422,
    /// 12-bit, two planes, 4:2:2
    Bit12TwoPlane422,
    /// 12-bit, three planes, 4:4:4
    Bit12ThreePlane444,
    /// 16-bit, three planes, 4:2:0
    Bit16ThreePlane420,
    /// 16-bit, two planes, 4:2:0
    Bit16TwoPlane420,
    /// 16-bit, three planes, 4:2:2
    Bit16ThreePlane422,
    /// 16-bit, two planes, 4:2:2
    Bit16TwoPlane422,
    /// 16-bit, three planes, 4:4:4
    Bit16ThreePlane444,
}

impl Format {
    /// The compatibility class of this format, [`CompatibilityClass::None`] if it has none.
    pub fn compatibility_class(self) -> CompatibilityClass {
        lookup(self).map_or(CompatibilityClass::None, |descriptor| {
            descriptor.compatibility_class
        })
    }

    /// Whether images of `self` and `other` can alias each other's memory.
    ///
    /// Formats without a class are never compatible, not even with themselves.
    pub fn is_size_compatible_with(self, other: Format) -> bool {
        let class = self.compatibility_class();
        class != CompatibilityClass::None && class == other.compatibility_class()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(Format::R8G8B8A8Unorm, Format::B8G8R8A8Srgb)]
    #[case(Format::R8G8B8A8Unorm, Format::R32Sfloat)]
    #[case(Format::A2B10G10R10UintPack32, Format::R16G16Sfloat)]
    #[case(Format::BC1RgbUnormBlock, Format::BC1RgbSrgbBlock)]
    #[case(Format::Astc6x6UnormBlock, Format::Astc6x6SrgbBlock)]
    #[case(Format::R10X6G10X6Unorm2Pack16, Format::R16G16Unorm)]
    fn compatible_pairs(#[case] a: Format, #[case] b: Format) {
        assert!(a.is_size_compatible_with(b));
        assert!(b.is_size_compatible_with(a));
    }

    #[rstest]
    #[case(Format::R8G8B8A8Unorm, Format::R8G8B8Unorm)]
    #[case(Format::BC1RgbUnormBlock, Format::BC1RgbaUnormBlock)]
    #[case(Format::BC2UnormBlock, Format::BC3UnormBlock)]
    #[case(Format::Astc10x5UnormBlock, Format::D32Sfloat)]
    #[case(Format::D24UnormS8Uint, Format::R32Uint)]
    #[case(Format::G8B8R82Plane420Unorm, Format::G8B8R83Plane420Unorm)]
    #[case(Format::Undefined, Format::Undefined)]
    fn incompatible_pairs(#[case] a: Format, #[case] b: Format) {
        assert!(!a.is_size_compatible_with(b));
    }

    #[test]
    fn only_undefined_has_no_class() {
        for &format in Format::all() {
            let has_class = format.compatibility_class() != CompatibilityClass::None;
            assert_eq!(has_class, format != Format::Undefined, "{format}");
        }
    }

    /// ASTC 10x5 and 32-bit depth must stay distinct classes.
    #[test]
    fn astc_10x5_and_d32_are_distinct() {
        assert_eq!(
            Format::Astc10x5UnormBlock.compatibility_class(),
            CompatibilityClass::Astc10x5
        );
        assert_eq!(
            Format::D32Sfloat.compatibility_class(),
            CompatibilityClass::D32
        );
    }
}
