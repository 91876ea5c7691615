//! Image aspect masks.

use crate::classify::{is_depth_and_stencil, is_depth_only, is_stencil_only, is_undefined};
use crate::planes::plane_count;
use crate::Format;

bitflags::bitflags! {
    /// Selects which logical sub-image of a format is addressed.
    ///
    /// Bit values match the graphics API's aspect flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ImageAspects: u32 {
        /// Colour aspect
        const COLOR = 1 << 0;
        /// Depth aspect
        const DEPTH = 1 << 1;
        /// Stencil aspect
        const STENCIL = 1 << 2;
        /// Metadata aspect (sparse resources)
        const METADATA = 1 << 3;
        /// First plane of a multi-planar format
        const PLANE_0 = 1 << 4;
        /// Second plane of a multi-planar format
        const PLANE_1 = 1 << 5;
        /// Third plane of a multi-planar format
        const PLANE_2 = 1 << 6;
    }
}

impl ImageAspects {
    /// Plane aspects, indexed by plane number.
    pub const PLANES: [ImageAspects; 3] = [Self::PLANE_0, Self::PLANE_1, Self::PLANE_2];

    /// Returns the plane index selected by this mask.
    ///
    /// Only a mask holding exactly one plane bit (and nothing else) selects a plane.
    pub fn plane_index(self) -> Option<usize> {
        Self::PLANES.iter().position(|plane| *plane == self)
    }

    /// Returns the aspect selecting the given plane, if the index is valid.
    pub fn from_plane_index(index: usize) -> Option<Self> {
        Self::PLANES.get(index).copied()
    }
}

impl Format {
    /// The full set of aspects an image of this format has.
    ///
    /// Multi-planar formats report [`ImageAspects::COLOR`] together with one plane bit per plane.
    pub fn aspects(self) -> ImageAspects {
        if is_undefined(self) {
            ImageAspects::empty()
        } else if is_depth_only(self) {
            ImageAspects::DEPTH
        } else if is_stencil_only(self) {
            ImageAspects::STENCIL
        } else if is_depth_and_stencil(self) {
            ImageAspects::DEPTH | ImageAspects::STENCIL
        } else {
            let planes = plane_count(self) as usize;
            let mut aspects = ImageAspects::COLOR;
            if planes > 1 {
                for plane in &ImageAspects::PLANES[..planes] {
                    aspects |= *plane;
                }
            }
            aspects
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(ImageAspects::PLANE_0, Some(0))]
    #[case(ImageAspects::PLANE_1, Some(1))]
    #[case(ImageAspects::PLANE_2, Some(2))]
    #[case(ImageAspects::COLOR, None)]
    #[case(ImageAspects::empty(), None)]
    #[case(ImageAspects::PLANE_0 | ImageAspects::PLANE_1, None)]
    #[case(ImageAspects::COLOR | ImageAspects::PLANE_1, None)]
    fn plane_index_requires_single_plane_bit(
        #[case] aspects: ImageAspects,
        #[case] expected: Option<usize>,
    ) {
        assert_eq!(aspects.plane_index(), expected);
    }

    #[test]
    fn plane_index_round_trips() {
        for index in 0..3 {
            let aspect = ImageAspects::from_plane_index(index).unwrap();
            assert_eq!(aspect.plane_index(), Some(index));
        }
        assert_eq!(ImageAspects::from_plane_index(3), None);
    }

    #[rstest]
    #[case(Format::Undefined, ImageAspects::empty())]
    #[case(Format::R8G8B8A8Unorm, ImageAspects::COLOR)]
    #[case(Format::BC7UnormBlock, ImageAspects::COLOR)]
    #[case(Format::D32Sfloat, ImageAspects::DEPTH)]
    #[case(Format::S8Uint, ImageAspects::STENCIL)]
    #[case(Format::D24UnormS8Uint, ImageAspects::DEPTH | ImageAspects::STENCIL)]
    #[case(Format::G8B8G8R8422Unorm, ImageAspects::COLOR)]
    #[case(
        Format::G8B8R82Plane420Unorm,
        ImageAspects::COLOR | ImageAspects::PLANE_0 | ImageAspects::PLANE_1
    )]
    #[case(
        Format::G16B16R163Plane444Unorm,
        ImageAspects::COLOR | ImageAspects::PLANE_0 | ImageAspects::PLANE_1 | ImageAspects::PLANE_2
    )]
    fn format_aspects(#[case] format: Format, #[case] expected: ImageAspects) {
        assert_eq!(format.aspects(), expected);
    }
}
