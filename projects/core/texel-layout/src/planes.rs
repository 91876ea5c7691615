//! Plane geometry of multi-planar formats.
//!
//! A multi-planar format stores its image in two or three separately addressable planes. Each
//! plane may be subsampled horizontally and/or vertically, and its raw bytes can be addressed
//! through an ordinary single-plane format.

use crate::aspect::ImageAspects;
use crate::Format;
use crate::Format::*;

/// Maximum number of planes a format can have.
pub const MAX_PLANES: usize = 3;

/// Subsampling divisors of one plane relative to the full image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaneDivisors {
    /// Image width is divided by this to get the plane width.
    pub width_divisor: u32,
    /// Image height is divided by this to get the plane height.
    pub height_divisor: u32,
}

impl PlaneDivisors {
    /// No subsampling.
    pub const IDENTITY: Self = Self {
        width_divisor: 1,
        height_divisor: 1,
    };
}

impl Default for PlaneDivisors {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Layout of a single plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaneInfo {
    /// Subsampling of this plane.
    pub divisors: PlaneDivisors,
    /// Single-plane format addressing this plane's bytes; [`Format::Undefined`] for unused slots.
    pub compatible_format: Format,
}

/// Plane layout of a multi-planar format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaneDescriptor {
    /// Number of planes in use, 2 or 3.
    pub plane_count: u32,
    /// Per-plane layout, indexed by plane number. Slots past `plane_count` are unused.
    pub planes: [PlaneInfo; MAX_PLANES],
}

impl PlaneDescriptor {
    /// Layout of the plane at `index`, if that plane is in use.
    #[inline]
    pub const fn plane(&self, index: usize) -> Option<PlaneInfo> {
        if index < self.plane_count as usize {
            Some(self.planes[index])
        } else {
            None
        }
    }
}

const UNUSED: PlaneInfo = plane(1, 1, Undefined);

const fn plane(width_divisor: u32, height_divisor: u32, compatible_format: Format) -> PlaneInfo {
    PlaneInfo {
        divisors: PlaneDivisors {
            width_divisor,
            height_divisor,
        },
        compatible_format,
    }
}

/// Y, Cb, Cr in three planes; chroma halved in both directions.
const fn three_plane_420(channel: Format) -> PlaneDescriptor {
    PlaneDescriptor {
        plane_count: 3,
        planes: [plane(1, 1, channel), plane(2, 2, channel), plane(2, 2, channel)],
    }
}

/// Y in one plane, interleaved CbCr in another; chroma halved in both directions.
const fn two_plane_420(channel: Format, channel_pair: Format) -> PlaneDescriptor {
    PlaneDescriptor {
        plane_count: 2,
        planes: [plane(1, 1, channel), plane(2, 2, channel_pair), UNUSED],
    }
}

/// Y, Cb, Cr in three planes; chroma halved horizontally.
const fn three_plane_422(channel: Format) -> PlaneDescriptor {
    PlaneDescriptor {
        plane_count: 3,
        planes: [plane(1, 1, channel), plane(2, 1, channel), plane(2, 1, channel)],
    }
}

/// Y in one plane, interleaved CbCr in another; chroma halved horizontally.
const fn two_plane_422(channel: Format, channel_pair: Format) -> PlaneDescriptor {
    PlaneDescriptor {
        plane_count: 2,
        planes: [plane(1, 1, channel), plane(2, 1, channel_pair), UNUSED],
    }
}

/// Y, Cb, Cr in three full resolution planes.
const fn three_plane_444(channel: Format) -> PlaneDescriptor {
    PlaneDescriptor {
        plane_count: 3,
        planes: [plane(1, 1, channel), plane(1, 1, channel), plane(1, 1, channel)],
    }
}

/// Looks up the plane layout of a multi-planar format.
///
/// Returns [`None`] for every format stored in a single plane.
pub const fn plane_descriptor(format: Format) -> Option<PlaneDescriptor> {
    Some(match format {
        G8B8R83Plane420Unorm => three_plane_420(R8Unorm),
        G8B8R82Plane420Unorm => two_plane_420(R8Unorm, R8G8Unorm),
        G8B8R83Plane422Unorm => three_plane_422(R8Unorm),
        G8B8R82Plane422Unorm => two_plane_422(R8Unorm, R8G8Unorm),
        G8B8R83Plane444Unorm => three_plane_444(R8Unorm),

        G10X6B10X6R10X63Plane420Unorm3Pack16 => three_plane_420(R10X6UnormPack16),
        G10X6B10X6R10X62Plane420Unorm3Pack16 => {
            two_plane_420(R10X6UnormPack16, R10X6G10X6Unorm2Pack16)
        }
        G10X6B10X6R10X63Plane422Unorm3Pack16 => three_plane_422(R10X6UnormPack16),
        G10X6B10X6R10X62Plane422Unorm3Pack16 => {
            two_plane_422(R10X6UnormPack16, R10X6G10X6Unorm2Pack16)
        }
        G10X6B10X6R10X63Plane444Unorm3Pack16 => three_plane_444(R10X6UnormPack16),

        G12X4B12X4R12X43Plane420Unorm3Pack16 => three_plane_420(R12X4UnormPack16),
        G12X4B12X4R12X42Plane420Unorm3Pack16 => {
            two_plane_420(R12X4UnormPack16, R12X4G12X4Unorm2Pack16)
        }
        G12X4B12X4R12X43Plane422Unorm3Pack16 => three_plane_422(R12X4UnormPack16),
        G12X4B12X4R12X42Plane422Unorm3Pack16 => {
            two_plane_422(R12X4UnormPack16, R12X4G12X4Unorm2Pack16)
        }
        G12X4B12X4R12X43Plane444Unorm3Pack16 => three_plane_444(R12X4UnormPack16),

        G16B16R163Plane420Unorm => three_plane_420(R16Unorm),
        G16B16R162Plane420Unorm => two_plane_420(R16Unorm, R16G16Unorm),
        G16B16R163Plane422Unorm => three_plane_422(R16Unorm),
        G16B16R162Plane422Unorm => two_plane_422(R16Unorm, R16G16Unorm),
        G16B16R163Plane444Unorm => three_plane_444(R16Unorm),

        _ => return None,
    })
}

/// Number of memory planes of `format`: 1, 2 or 3.
#[inline]
pub const fn plane_count(format: Format) -> u32 {
    match plane_descriptor(format) {
        Some(descriptor) => descriptor.plane_count,
        None => 1,
    }
}

/// Looks up the layout of the plane selected by `aspect`.
///
/// Misses for single-plane formats, for masks that don't select exactly one plane, and for
/// planes past the format's plane count.
fn plane_info(format: Format, aspect: ImageAspects) -> Option<PlaneInfo> {
    let descriptor = plane_descriptor(format)?;
    descriptor.plane(aspect.plane_index()?)
}

/// Subsampling divisors of the plane selected by `aspect`.
///
/// Single-plane formats and invalid plane selections report [`PlaneDivisors::IDENTITY`].
pub fn plane_divisors(format: Format, aspect: ImageAspects) -> PlaneDivisors {
    plane_info(format, aspect).map_or(PlaneDivisors::IDENTITY, |info| info.divisors)
}

/// The single-plane format that addresses the raw bytes of the plane selected by `aspect`.
///
/// Returns [`Format::Undefined`] for single-plane formats and invalid plane selections.
pub fn compatible_single_plane_format(format: Format, aspect: ImageAspects) -> Format {
    plane_info(format, aspect).map_or(Undefined, |info| info.compatible_format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{is_multiplane, requires_ycbcr_conversion};
    use crate::test_prelude::*;

    const ALL_ASPECT_SELECTIONS: [ImageAspects; 8] = [
        ImageAspects::empty(),
        ImageAspects::COLOR,
        ImageAspects::DEPTH,
        ImageAspects::STENCIL,
        ImageAspects::PLANE_0,
        ImageAspects::PLANE_1,
        ImageAspects::PLANE_2,
        ImageAspects::all(),
    ];

    #[rstest]
    #[case(Format::R8G8B8A8Unorm, 1)]
    #[case(Format::G8B8G8R8422Unorm, 1)]
    #[case(Format::G8B8R82Plane420Unorm, 2)]
    #[case(Format::G8B8R83Plane420Unorm, 3)]
    #[case(Format::G10X6B10X6R10X62Plane422Unorm3Pack16, 2)]
    #[case(Format::G16B16R163Plane444Unorm, 3)]
    fn plane_counts(#[case] format: Format, #[case] expected: u32) {
        assert_eq!(plane_count(format), expected);
    }

    #[test]
    fn two_plane_420_8bit() {
        let format = Format::G8B8R82Plane420Unorm;
        assert_eq!(
            plane_divisors(format, ImageAspects::PLANE_0),
            PlaneDivisors::IDENTITY
        );
        assert_eq!(
            plane_divisors(format, ImageAspects::PLANE_1),
            PlaneDivisors {
                width_divisor: 2,
                height_divisor: 2
            }
        );
        assert_eq!(
            compatible_single_plane_format(format, ImageAspects::PLANE_0),
            Format::R8Unorm
        );
        assert_eq!(
            compatible_single_plane_format(format, ImageAspects::PLANE_1),
            Format::R8G8Unorm
        );
    }

    #[test]
    fn third_plane_of_two_plane_format_is_invalid() {
        let format = Format::G16B16R162Plane422Unorm;
        assert_eq!(
            plane_divisors(format, ImageAspects::PLANE_2),
            PlaneDivisors::IDENTITY
        );
        assert_eq!(
            compatible_single_plane_format(format, ImageAspects::PLANE_2),
            Format::Undefined
        );
    }

    #[rstest]
    #[case(Format::G8B8R83Plane422Unorm, ImageAspects::PLANE_2, 2, 1, Format::R8Unorm)]
    #[case(Format::G8B8R83Plane444Unorm, ImageAspects::PLANE_1, 1, 1, Format::R8Unorm)]
    #[case(
        Format::G10X6B10X6R10X62Plane420Unorm3Pack16,
        ImageAspects::PLANE_1,
        2,
        2,
        Format::R10X6G10X6Unorm2Pack16
    )]
    #[case(
        Format::G12X4B12X4R12X43Plane420Unorm3Pack16,
        ImageAspects::PLANE_2,
        2,
        2,
        Format::R12X4UnormPack16
    )]
    #[case(Format::G16B16R162Plane422Unorm, ImageAspects::PLANE_1, 2, 1, Format::R16G16Unorm)]
    fn plane_layouts(
        #[case] format: Format,
        #[case] aspect: ImageAspects,
        #[case] width_divisor: u32,
        #[case] height_divisor: u32,
        #[case] compatible: Format,
    ) {
        assert_eq!(
            plane_divisors(format, aspect),
            PlaneDivisors {
                width_divisor,
                height_divisor
            }
        );
        assert_eq!(compatible_single_plane_format(format, aspect), compatible);
    }

    #[test]
    fn single_plane_formats_have_identity_layout() {
        for &format in Format::all().iter().filter(|f| !is_multiplane(**f)) {
            for aspect in ALL_ASPECT_SELECTIONS {
                assert_eq!(plane_divisors(format, aspect), PlaneDivisors::IDENTITY);
                assert_eq!(
                    compatible_single_plane_format(format, aspect),
                    Format::Undefined
                );
            }
        }
    }

    #[test]
    fn multiplane_descriptors_are_well_formed() {
        for &format in Format::all() {
            let Some(descriptor) = plane_descriptor(format) else {
                continue;
            };
            assert!(requires_ycbcr_conversion(format), "{format}");
            assert!((2..=3).contains(&descriptor.plane_count), "{format}");

            for (index, info) in descriptor.planes.iter().enumerate() {
                let divisors = info.divisors;
                assert!(matches!(divisors.width_divisor, 1 | 2), "{format}");
                assert!(matches!(divisors.height_divisor, 1 | 2), "{format}");

                let in_use = index < descriptor.plane_count as usize;
                assert_eq!(info.compatible_format != Format::Undefined, in_use, "{format}");
                if in_use {
                    assert!(!is_multiplane(info.compatible_format), "{format}");
                }
            }

            // The luma plane is never subsampled
            assert_eq!(descriptor.planes[0].divisors, PlaneDivisors::IDENTITY);
        }
    }

    #[test]
    fn multiplane_format_count() {
        let count = Format::all().iter().filter(|f| is_multiplane(**f)).count();
        assert_eq!(count, 20);
    }
}
