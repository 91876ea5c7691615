//! The format descriptor table.
//!
//! This table is the single source of truth for byte sizes. Family classification lives in
//! [`crate::classify`] and does not consult it.

use crate::compatibility::CompatibilityClass as Class;
use crate::Format;

/// Size and layout information for one element of a format.
///
/// An element is one texel for ordinary formats, one block for block-compressed formats, and one
/// shared group for packed 4:2:2 and multi-planar formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatDescriptor {
    /// Size of one element in bytes.
    pub byte_size: u32,
    /// Number of channels (components) of the format.
    pub channel_count: u32,
    /// Compatibility class of the format.
    pub compatibility_class: Class,
}

#[inline(always)]
const fn desc(byte_size: u32, channel_count: u32, class: Class) -> Option<FormatDescriptor> {
    Some(FormatDescriptor {
        byte_size,
        channel_count,
        compatibility_class: class,
    })
}

/// Looks up the descriptor of a format.
///
/// Returns [`None`] for [`Format::Undefined`]. Callers treat a miss as "size 0, no class";
/// keeping the miss visible here lets tests tell a table gap apart from a real zero.
pub const fn lookup(format: Format) -> Option<FormatDescriptor> {
    use Format::*;

    match format {
        Undefined => None,

        R4G4UnormPack8 => desc(1, 2, Class::Bit8),
        R4G4B4A4UnormPack16 | B4G4R4A4UnormPack16 => desc(2, 4, Class::Bit16),
        R5G6B5UnormPack16 | B5G6R5UnormPack16 => desc(2, 3, Class::Bit16),
        R5G5B5A1UnormPack16 | B5G5R5A1UnormPack16 | A1R5G5B5UnormPack16 => {
            desc(2, 4, Class::Bit16)
        }

        R8Unorm | R8Snorm | R8Uscaled | R8Sscaled | R8Uint | R8Sint | R8Srgb => {
            desc(1, 1, Class::Bit8)
        }
        R8G8Unorm | R8G8Snorm | R8G8Uscaled | R8G8Sscaled | R8G8Uint | R8G8Sint | R8G8Srgb => {
            desc(2, 2, Class::Bit16)
        }
        R8G8B8Unorm | R8G8B8Snorm | R8G8B8Uscaled | R8G8B8Sscaled | R8G8B8Uint | R8G8B8Sint
        | R8G8B8Srgb | B8G8R8Unorm | B8G8R8Snorm | B8G8R8Uscaled | B8G8R8Sscaled
        | B8G8R8Uint | B8G8R8Sint | B8G8R8Srgb => desc(3, 3, Class::Bit24),
        R8G8B8A8Unorm | R8G8B8A8Snorm | R8G8B8A8Uscaled | R8G8B8A8Sscaled | R8G8B8A8Uint
        | R8G8B8A8Sint | R8G8B8A8Srgb | B8G8R8A8Unorm | B8G8R8A8Snorm | B8G8R8A8Uscaled
        | B8G8R8A8Sscaled | B8G8R8A8Uint | B8G8R8A8Sint | B8G8R8A8Srgb | A8B8G8R8UnormPack32
        | A8B8G8R8SnormPack32 | A8B8G8R8UscaledPack32 | A8B8G8R8SscaledPack32
        | A8B8G8R8UintPack32 | A8B8G8R8SintPack32 | A8B8G8R8SrgbPack32 => {
            desc(4, 4, Class::Bit32)
        }
        A2R10G10B10UnormPack32 | A2R10G10B10SnormPack32 | A2R10G10B10UscaledPack32
        | A2R10G10B10SscaledPack32 | A2R10G10B10UintPack32 | A2R10G10B10SintPack32
        | A2B10G10R10UnormPack32 | A2B10G10R10SnormPack32 | A2B10G10R10UscaledPack32
        | A2B10G10R10SscaledPack32 | A2B10G10R10UintPack32 | A2B10G10R10SintPack32 => {
            desc(4, 4, Class::Bit32)
        }

        R16Unorm | R16Snorm | R16Uscaled | R16Sscaled | R16Uint | R16Sint | R16Sfloat => {
            desc(2, 1, Class::Bit16)
        }
        R16G16Unorm | R16G16Snorm | R16G16Uscaled | R16G16Sscaled | R16G16Uint | R16G16Sint
        | R16G16Sfloat => desc(4, 2, Class::Bit32),
        R16G16B16Unorm | R16G16B16Snorm | R16G16B16Uscaled | R16G16B16Sscaled
        | R16G16B16Uint | R16G16B16Sint | R16G16B16Sfloat => desc(6, 3, Class::Bit48),
        R16G16B16A16Unorm | R16G16B16A16Snorm | R16G16B16A16Uscaled | R16G16B16A16Sscaled
        | R16G16B16A16Uint | R16G16B16A16Sint | R16G16B16A16Sfloat => desc(8, 4, Class::Bit64),

        R32Uint | R32Sint | R32Sfloat => desc(4, 1, Class::Bit32),
        R32G32Uint | R32G32Sint | R32G32Sfloat => desc(8, 2, Class::Bit64),
        R32G32B32Uint | R32G32B32Sint | R32G32B32Sfloat => desc(12, 3, Class::Bit96),
        R32G32B32A32Uint | R32G32B32A32Sint | R32G32B32A32Sfloat => desc(16, 4, Class::Bit128),

        R64Uint | R64Sint | R64Sfloat => desc(8, 1, Class::Bit64),
        R64G64Uint | R64G64Sint | R64G64Sfloat => desc(16, 2, Class::Bit128),
        R64G64B64Uint | R64G64B64Sint | R64G64B64Sfloat => desc(24, 3, Class::Bit192),
        R64G64B64A64Uint | R64G64B64A64Sint | R64G64B64A64Sfloat => desc(32, 4, Class::Bit256),

        B10G11R11UfloatPack32 | E5B9G9R9UfloatPack32 => desc(4, 3, Class::Bit32),

        D16Unorm => desc(2, 1, Class::D16),
        X8D24UnormPack32 => desc(4, 1, Class::D24),
        D32Sfloat => desc(4, 1, Class::D32),
        S8Uint => desc(1, 1, Class::S8),
        D16UnormS8Uint => desc(3, 2, Class::D16S8),
        D24UnormS8Uint => desc(4, 2, Class::D24S8),
        D32SfloatS8Uint => desc(5, 2, Class::D32S8),

        BC1RgbUnormBlock | BC1RgbSrgbBlock => desc(8, 3, Class::Bc1Rgb),
        BC1RgbaUnormBlock | BC1RgbaSrgbBlock => desc(8, 4, Class::Bc1Rgba),
        BC2UnormBlock | BC2SrgbBlock => desc(16, 4, Class::Bc2),
        BC3UnormBlock | BC3SrgbBlock => desc(16, 4, Class::Bc3),
        BC4UnormBlock | BC4SnormBlock => desc(8, 1, Class::Bc4),
        BC5UnormBlock | BC5SnormBlock => desc(16, 2, Class::Bc5),
        BC6HUfloatBlock | BC6HSfloatBlock => desc(16, 3, Class::Bc6h),
        BC7UnormBlock | BC7SrgbBlock => desc(16, 4, Class::Bc7),

        Etc2R8G8B8UnormBlock | Etc2R8G8B8SrgbBlock => desc(8, 3, Class::Etc2Rgb),
        Etc2R8G8B8A1UnormBlock | Etc2R8G8B8A1SrgbBlock => desc(8, 4, Class::Etc2Rgba),
        Etc2R8G8B8A8UnormBlock | Etc2R8G8B8A8SrgbBlock => desc(16, 4, Class::Etc2EacRgba),
        EacR11UnormBlock | EacR11SnormBlock => desc(8, 1, Class::EacR),
        EacR11G11UnormBlock | EacR11G11SnormBlock => desc(16, 2, Class::EacRg),

        // Every ASTC block is 128 bits regardless of its footprint
        Astc4x4UnormBlock | Astc4x4SrgbBlock => desc(16, 4, Class::Astc4x4),
        Astc5x4UnormBlock | Astc5x4SrgbBlock => desc(16, 4, Class::Astc5x4),
        Astc5x5UnormBlock | Astc5x5SrgbBlock => desc(16, 4, Class::Astc5x5),
        Astc6x5UnormBlock | Astc6x5SrgbBlock => desc(16, 4, Class::Astc6x5),
        Astc6x6UnormBlock | Astc6x6SrgbBlock => desc(16, 4, Class::Astc6x6),
        Astc8x5UnormBlock | Astc8x5SrgbBlock => desc(16, 4, Class::Astc8x5),
        Astc8x6UnormBlock | Astc8x6SrgbBlock => desc(16, 4, Class::Astc8x6),
        Astc8x8UnormBlock | Astc8x8SrgbBlock => desc(16, 4, Class::Astc8x8),
        Astc10x5UnormBlock | Astc10x5SrgbBlock => desc(16, 4, Class::Astc10x5),
        Astc10x6UnormBlock | Astc10x6SrgbBlock => desc(16, 4, Class::Astc10x6),
        Astc10x8UnormBlock | Astc10x8SrgbBlock => desc(16, 4, Class::Astc10x8),
        Astc10x10UnormBlock | Astc10x10SrgbBlock => desc(16, 4, Class::Astc10x10),
        Astc12x10UnormBlock | Astc12x10SrgbBlock => desc(16, 4, Class::Astc12x10),
        Astc12x12UnormBlock | Astc12x12SrgbBlock => desc(16, 4, Class::Astc12x12),

        Pvrtc12BppUnormBlockImg | Pvrtc12BppSrgbBlockImg => desc(8, 4, Class::Pvrtc1Bpp2),
        Pvrtc14BppUnormBlockImg | Pvrtc14BppSrgbBlockImg => desc(8, 4, Class::Pvrtc1Bpp4),
        Pvrtc22BppUnormBlockImg | Pvrtc22BppSrgbBlockImg => desc(8, 4, Class::Pvrtc2Bpp2),
        Pvrtc24BppUnormBlockImg | Pvrtc24BppSrgbBlockImg => desc(8, 4, Class::Pvrtc2Bpp4),

        G8B8G8R8422Unorm => desc(4, 4, Class::G8B8G8R8Bit32),
        B8G8R8G8422Unorm => desc(4, 4, Class::B8G8R8G8Bit32),
        G8B8R83Plane420Unorm => desc(3, 3, Class::Bit8ThreePlane420),
        G8B8R82Plane420Unorm => desc(3, 3, Class::Bit8TwoPlane420),
        G8B8R83Plane422Unorm => desc(3, 3, Class::Bit8ThreePlane422),
        G8B8R82Plane422Unorm => desc(3, 3, Class::Bit8TwoPlane422),
        G8B8R83Plane444Unorm => desc(3, 3, Class::Bit8ThreePlane444),

        R10X6UnormPack16 => desc(2, 1, Class::Bit16),
        R10X6G10X6Unorm2Pack16 => desc(4, 2, Class::Bit32),
        R10X6G10X6B10X6A10X6Unorm4Pack16 => desc(8, 4, Class::R10G10B10A10Bit64),
        G10X6B10X6G10X6R10X6422Unorm4Pack16 => desc(8, 4, Class::G10B10G10R10Bit64),
        B10X6G10X6R10X6G10X6422Unorm4Pack16 => desc(8, 4, Class::B10G10R10G10Bit64),
        G10X6B10X6R10X63Plane420Unorm3Pack16 => desc(6, 3, Class::Bit10ThreePlane420),
        G10X6B10X6R10X62Plane420Unorm3Pack16 => desc(6, 3, Class::Bit10TwoPlane420),
        G10X6B10X6R10X63Plane422Unorm3Pack16 => desc(6, 3, Class::Bit10ThreePlane422),
        G10X6B10X6R10X62Plane422Unorm3Pack16 => desc(6, 3, Class::Bit10TwoPlane422),
        G10X6B10X6R10X63Plane444Unorm3Pack16 => desc(6, 3, Class::Bit10ThreePlane444),

        R12X4UnormPack16 => desc(2, 1, Class::Bit16),
        R12X4G12X4Unorm2Pack16 => desc(4, 2, Class::Bit32),
        R12X4G12X4B12X4A12X4Unorm4Pack16 => desc(8, 4, Class::R12G12B12A12Bit64),
        G12X4B12X4G12X4R12X4422Unorm4Pack16 => desc(8, 4, Class::G12B12G12R12Bit64),
        B12X4G12X4R12X4G12X4422Unorm4Pack16 => desc(8, 4, Class::B12G12R12G12Bit64),
        G12X4B12X4R12X43Plane420Unorm3Pack16 => desc(6, 3, Class::Bit12ThreePlane420),
        G12X4B12X4R12X42Plane420Unorm3Pack16 => desc(6, 3, Class::Bit12TwoPlane420),
        G12X4B12X4R12X43Plane422Unorm3Pack16 => desc(6, 3, Class::Bit12ThreePlane422),
        G12X4B12X4R12X42Plane422Unorm3Pack16 => desc(6, 3, Class::Bit12TwoPlane422),
        G12X4B12X4R12X43Plane444Unorm3Pack16 => desc(6, 3, Class::Bit12ThreePlane444),

        G16B16G16R16422Unorm => desc(8, 4, Class::G16B16G16R16Bit64),
        B16G16R16G16422Unorm => desc(8, 4, Class::B16G16R16G16Bit64),
        G16B16R163Plane420Unorm => desc(6, 3, Class::Bit16ThreePlane420),
        G16B16R162Plane420Unorm => desc(6, 3, Class::Bit16TwoPlane420),
        G16B16R163Plane422Unorm => desc(6, 3, Class::Bit16ThreePlane422),
        G16B16R162Plane422Unorm => desc(6, 3, Class::Bit16TwoPlane422),
        G16B16R163Plane444Unorm => desc(6, 3, Class::Bit16ThreePlane444),
    }
}

impl Format {
    /// The descriptor of this format, if it has one. See [`lookup`].
    #[inline]
    pub const fn descriptor(self) -> Option<FormatDescriptor> {
        lookup(self)
    }
}
