//! Family predicates over [`Format`].
//!
//! These answer from the identifier alone and never consult the descriptor table. Format
//! families follow the name and bit layout of a format, which is independent of its size.

use crate::planes::plane_count;
use crate::Format;
use crate::Format::*;

/// Whether `format` lies in the inclusive raw value range `first..=last`.
#[inline(always)]
const fn in_range(format: Format, first: Format, last: Format) -> bool {
    let raw = format.as_raw();
    raw >= first.as_raw() && raw <= last.as_raw()
}

/// Is this [`Format::Undefined`]?
#[inline]
pub const fn is_undefined(format: Format) -> bool {
    matches!(format, Undefined)
}

/// Has a depth aspect and no stencil aspect.
#[inline]
pub const fn is_depth_only(format: Format) -> bool {
    matches!(format, D16Unorm | X8D24UnormPack32 | D32Sfloat)
}

/// Has a stencil aspect and no depth aspect.
#[inline]
pub const fn is_stencil_only(format: Format) -> bool {
    matches!(format, S8Uint)
}

/// Has both a depth and a stencil aspect.
#[inline]
pub const fn is_depth_and_stencil(format: Format) -> bool {
    matches!(format, D16UnormS8Uint | D24UnormS8Uint | D32SfloatS8Uint)
}

/// Has a depth aspect, a stencil aspect, or both.
#[inline]
pub const fn is_depth_or_stencil(format: Format) -> bool {
    is_depth_only(format) || is_stencil_only(format) || is_depth_and_stencil(format)
}

/// Is a colour format. Multi-planar and packed YCbCr formats count as colour.
#[inline]
pub const fn is_color(format: Format) -> bool {
    !(is_undefined(format) || is_depth_or_stencil(format))
}

/// BC1 through BC7.
#[inline]
pub const fn is_compressed_block_compression(format: Format) -> bool {
    in_range(format, BC1RgbUnormBlock, BC7SrgbBlock)
}

/// ETC2 and EAC.
#[inline]
pub const fn is_compressed_etc2_eac(format: Format) -> bool {
    in_range(format, Etc2R8G8B8UnormBlock, EacR11G11SnormBlock)
}

/// ASTC with LDR profile.
#[inline]
pub const fn is_compressed_astc_ldr(format: Format) -> bool {
    in_range(format, Astc4x4UnormBlock, Astc12x12SrgbBlock)
}

/// PVRTC1 and PVRTC2.
#[inline]
pub const fn is_compressed_pvrtc(format: Format) -> bool {
    in_range(format, Pvrtc12BppUnormBlockImg, Pvrtc24BppSrgbBlockImg)
}

/// Any block-compressed format.
#[inline]
pub const fn is_compressed(format: Format) -> bool {
    is_compressed_block_compression(format)
        || is_compressed_etc2_eac(format)
        || is_compressed_astc_ldr(format)
        || is_compressed_pvrtc(format)
}

/// Components are packed into one or more machine words (`PACK8`, `PACK16`, `PACK32`).
pub const fn is_packed(format: Format) -> bool {
    matches!(
        format,
        R4G4UnormPack8
            | R4G4B4A4UnormPack16
            | B4G4R4A4UnormPack16
            | R5G6B5UnormPack16
            | B5G6R5UnormPack16
            | R5G5B5A1UnormPack16
            | B5G5R5A1UnormPack16
            | A1R5G5B5UnormPack16
            | A8B8G8R8UnormPack32
            | A8B8G8R8SnormPack32
            | A8B8G8R8UscaledPack32
            | A8B8G8R8SscaledPack32
            | A8B8G8R8UintPack32
            | A8B8G8R8SintPack32
            | A8B8G8R8SrgbPack32
            | A2R10G10B10UnormPack32
            | A2R10G10B10SnormPack32
            | A2R10G10B10UscaledPack32
            | A2R10G10B10SscaledPack32
            | A2R10G10B10UintPack32
            | A2R10G10B10SintPack32
            | A2B10G10R10UnormPack32
            | A2B10G10R10SnormPack32
            | A2B10G10R10UscaledPack32
            | A2B10G10R10SscaledPack32
            | A2B10G10R10UintPack32
            | A2B10G10R10SintPack32
            | B10G11R11UfloatPack32
            | E5B9G9R9UfloatPack32
            | X8D24UnormPack32
    ) || in_range(format, R10X6UnormPack16, G12X4B12X4R12X43Plane444Unorm3Pack16)
}

/// Stored in more than one memory plane.
#[inline]
pub const fn is_multiplane(format: Format) -> bool {
    plane_count(format) > 1
}

/// Single-plane 4:2:2 formats where two horizontally adjacent texels share chroma.
pub const fn is_single_plane_422(format: Format) -> bool {
    matches!(
        format,
        G8B8G8R8422Unorm
            | B8G8R8G8422Unorm
            | G10X6B10X6G10X6R10X6422Unorm4Pack16
            | B10X6G10X6R10X6G10X6422Unorm4Pack16
            | G12X4B12X4G12X4R12X4422Unorm4Pack16
            | B12X4G12X4R12X4G12X4422Unorm4Pack16
            | G16B16G16R16422Unorm
            | B16G16R16G16422Unorm
    )
}

/// One element is exactly one ordinary texel.
#[inline]
pub const fn element_is_texel(format: Format) -> bool {
    !(is_packed(format)
        || is_compressed(format)
        || is_single_plane_422(format)
        || is_multiplane(format))
}

/// Sampling this format needs a YCbCr conversion.
///
/// True for the whole YCbCr extension range, including its single-channel padded formats.
#[inline]
pub const fn requires_ycbcr_conversion(format: Format) -> bool {
    in_range(format, G8B8G8R8422Unorm, G16B16R163Plane444Unorm)
}

/// Unsigned normalized. Combined depth/stencil formats are mixed and not included.
pub const fn is_unorm(format: Format) -> bool {
    matches!(
        format,
        R4G4UnormPack8
            | R4G4B4A4UnormPack16
            | B4G4R4A4UnormPack16
            | R5G6B5UnormPack16
            | B5G6R5UnormPack16
            | R5G5B5A1UnormPack16
            | B5G5R5A1UnormPack16
            | A1R5G5B5UnormPack16
            | R8Unorm
            | R8G8Unorm
            | R8G8B8Unorm
            | B8G8R8Unorm
            | R8G8B8A8Unorm
            | B8G8R8A8Unorm
            | A8B8G8R8UnormPack32
            | A2R10G10B10UnormPack32
            | A2B10G10R10UnormPack32
            | R16Unorm
            | R16G16Unorm
            | R16G16B16Unorm
            | R16G16B16A16Unorm
            | D16Unorm
            | X8D24UnormPack32
            | BC1RgbUnormBlock
            | BC1RgbaUnormBlock
            | BC2UnormBlock
            | BC3UnormBlock
            | BC4UnormBlock
            | BC5UnormBlock
            | BC7UnormBlock
            | Etc2R8G8B8UnormBlock
            | Etc2R8G8B8A1UnormBlock
            | Etc2R8G8B8A8UnormBlock
            | EacR11UnormBlock
            | EacR11G11UnormBlock
            | Astc4x4UnormBlock
            | Astc5x4UnormBlock
            | Astc5x5UnormBlock
            | Astc6x5UnormBlock
            | Astc6x6UnormBlock
            | Astc8x5UnormBlock
            | Astc8x6UnormBlock
            | Astc8x8UnormBlock
            | Astc10x5UnormBlock
            | Astc10x6UnormBlock
            | Astc10x8UnormBlock
            | Astc10x10UnormBlock
            | Astc12x10UnormBlock
            | Astc12x12UnormBlock
            | Pvrtc12BppUnormBlockImg
            | Pvrtc14BppUnormBlockImg
            | Pvrtc22BppUnormBlockImg
            | Pvrtc24BppUnormBlockImg
    ) || requires_ycbcr_conversion(format)
}

/// Signed normalized.
pub const fn is_snorm(format: Format) -> bool {
    matches!(
        format,
        R8Snorm
            | R8G8Snorm
            | R8G8B8Snorm
            | B8G8R8Snorm
            | R8G8B8A8Snorm
            | B8G8R8A8Snorm
            | A8B8G8R8SnormPack32
            | A2R10G10B10SnormPack32
            | A2B10G10R10SnormPack32
            | R16Snorm
            | R16G16Snorm
            | R16G16B16Snorm
            | R16G16B16A16Snorm
            | BC4SnormBlock
            | BC5SnormBlock
            | EacR11SnormBlock
            | EacR11G11SnormBlock
    )
}

/// Unsigned integer.
pub const fn is_uint(format: Format) -> bool {
    matches!(
        format,
        R8Uint
            | R8G8Uint
            | R8G8B8Uint
            | B8G8R8Uint
            | R8G8B8A8Uint
            | B8G8R8A8Uint
            | A8B8G8R8UintPack32
            | A2R10G10B10UintPack32
            | A2B10G10R10UintPack32
            | R16Uint
            | R16G16Uint
            | R16G16B16Uint
            | R16G16B16A16Uint
            | R32Uint
            | R32G32Uint
            | R32G32B32Uint
            | R32G32B32A32Uint
            | R64Uint
            | R64G64Uint
            | R64G64B64Uint
            | R64G64B64A64Uint
            | S8Uint
    )
}

/// Signed integer.
pub const fn is_sint(format: Format) -> bool {
    matches!(
        format,
        R8Sint
            | R8G8Sint
            | R8G8B8Sint
            | B8G8R8Sint
            | R8G8B8A8Sint
            | B8G8R8A8Sint
            | A8B8G8R8SintPack32
            | A2R10G10B10SintPack32
            | A2B10G10R10SintPack32
            | R16Sint
            | R16G16Sint
            | R16G16B16Sint
            | R16G16B16A16Sint
            | R32Sint
            | R32G32Sint
            | R32G32B32Sint
            | R32G32B32A32Sint
            | R64Sint
            | R64G64Sint
            | R64G64B64Sint
            | R64G64B64A64Sint
    )
}

/// Signed or unsigned floating point.
pub const fn is_float(format: Format) -> bool {
    matches!(
        format,
        R16Sfloat
            | R16G16Sfloat
            | R16G16B16Sfloat
            | R16G16B16A16Sfloat
            | R32Sfloat
            | R32G32Sfloat
            | R32G32B32Sfloat
            | R32G32B32A32Sfloat
            | R64Sfloat
            | R64G64Sfloat
            | R64G64B64Sfloat
            | R64G64B64A64Sfloat
            | B10G11R11UfloatPack32
            | E5B9G9R9UfloatPack32
            | D32Sfloat
            | BC6HUfloatBlock
            | BC6HSfloatBlock
    )
}

/// sRGB encoded colour.
pub const fn is_srgb(format: Format) -> bool {
    matches!(
        format,
        R8Srgb
            | R8G8Srgb
            | R8G8B8Srgb
            | B8G8R8Srgb
            | R8G8B8A8Srgb
            | B8G8R8A8Srgb
            | A8B8G8R8SrgbPack32
            | BC1RgbSrgbBlock
            | BC1RgbaSrgbBlock
            | BC2SrgbBlock
            | BC3SrgbBlock
            | BC7SrgbBlock
            | Etc2R8G8B8SrgbBlock
            | Etc2R8G8B8A1SrgbBlock
            | Etc2R8G8B8A8SrgbBlock
            | Astc4x4SrgbBlock
            | Astc5x4SrgbBlock
            | Astc5x5SrgbBlock
            | Astc6x5SrgbBlock
            | Astc6x6SrgbBlock
            | Astc8x5SrgbBlock
            | Astc8x6SrgbBlock
            | Astc8x8SrgbBlock
            | Astc10x5SrgbBlock
            | Astc10x6SrgbBlock
            | Astc10x8SrgbBlock
            | Astc10x10SrgbBlock
            | Astc12x10SrgbBlock
            | Astc12x12SrgbBlock
            | Pvrtc12BppSrgbBlockImg
            | Pvrtc14BppSrgbBlockImg
            | Pvrtc22BppSrgbBlockImg
            | Pvrtc24BppSrgbBlockImg
    )
}

/// Unsigned scaled integer (converted to float without normalization).
pub const fn is_uscaled(format: Format) -> bool {
    matches!(
        format,
        R8Uscaled
            | R8G8Uscaled
            | R8G8B8Uscaled
            | B8G8R8Uscaled
            | R8G8B8A8Uscaled
            | B8G8R8A8Uscaled
            | A8B8G8R8UscaledPack32
            | A2R10G10B10UscaledPack32
            | A2B10G10R10UscaledPack32
            | R16Uscaled
            | R16G16Uscaled
            | R16G16B16Uscaled
            | R16G16B16A16Uscaled
    )
}

/// Signed scaled integer (converted to float without normalization).
pub const fn is_sscaled(format: Format) -> bool {
    matches!(
        format,
        R8Sscaled
            | R8G8Sscaled
            | R8G8B8Sscaled
            | B8G8R8Sscaled
            | R8G8B8A8Sscaled
            | B8G8R8A8Sscaled
            | A8B8G8R8SscaledPack32
            | A2R10G10B10SscaledPack32
            | A2B10G10R10SscaledPack32
            | R16Sscaled
            | R16G16Sscaled
            | R16G16B16Sscaled
            | R16G16B16A16Sscaled
    )
}

/// Normalized, signed or unsigned.
#[inline]
pub const fn is_norm(format: Format) -> bool {
    is_unorm(format) || is_snorm(format)
}

/// Integer, signed or unsigned.
#[inline]
pub const fn is_int(format: Format) -> bool {
    is_uint(format) || is_sint(format)
}
