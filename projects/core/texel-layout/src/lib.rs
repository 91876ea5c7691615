#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod aspect;
pub mod block;
pub mod classify;
pub mod compatibility;
pub mod copy;
pub mod descriptor;
pub mod error;
pub mod format;
pub mod layout;
pub mod planes;

#[cfg(feature = "c-exports")]
pub mod c_api;

#[cfg(test)]
pub(crate) mod test_prelude;

pub use aspect::ImageAspects;
pub use block::{texel_block_extent, TexelBlockExtent};
pub use classify::*;
pub use compatibility::CompatibilityClass;
pub use copy::{copy_element_sizes_match, validate_copy_regions, CopyRegion};
pub use descriptor::{lookup, FormatDescriptor};
pub use error::{FormatError, FormatResult, LayoutError, LayoutResult};
pub use format::Format;
pub use layout::{
    channel_count, element_size, image_byte_size, region_byte_size, texel_size,
    try_region_byte_size,
};
pub use planes::{
    compatible_single_plane_format, plane_count, plane_descriptor, plane_divisors,
    PlaneDescriptor, PlaneDivisors, PlaneInfo, MAX_PLANES,
};
