//! Error types for format conversion and checked layout queries.
//!
//! The plain queries in this crate never fail; lookup misses degrade to zero sizes and identity
//! plane layouts. The checked variants ([`crate::try_region_byte_size`],
//! [`crate::validate_copy_regions`]) turn those degraded results into these errors for callers
//! that want to reject them.

use crate::Format;
use thiserror::Error;

/// Result type for format identifier conversions
pub type FormatResult<T> = Result<T, FormatError>;

/// Result type for checked layout queries
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Errors converting external values into a [`Format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The raw value is not part of the format enumeration
    #[error("Unknown format value: {0}")]
    UnknownFormatValue(u32),

    /// The name does not match any format identifier
    #[error("Unknown format name")]
    UnknownFormatName,
}

/// Errors reported by the checked layout queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A compressed region is neither block aligned nor smaller than one block
    #[error("Region {width}x{height} is not aligned to the {block_width}x{block_height} blocks of {format}")]
    UnalignedRegion {
        /// Compressed format of the region.
        format: Format,
        /// Region width in texels.
        width: u32,
        /// Region height in texels.
        height: u32,
        /// Block width of the format.
        block_width: u32,
        /// Block height of the format.
        block_height: u32,
    },

    /// The format has no size information (undefined, or missing from the descriptor table)
    #[error("Format {0} has no element size")]
    UnsizedFormat(Format),

    /// The region needs more bytes than fit in a `u64`
    #[error("Region {width}x{height}x{depth} of {format} does not fit in 64 bits")]
    SizeOverflow {
        /// Format of the region.
        format: Format,
        /// Region width in texels.
        width: u32,
        /// Region height in texels.
        height: u32,
        /// Region depth in texels.
        depth: u32,
    },

    /// Source and destination element sizes differ for a copy region
    #[error("Copy region {region}: source element size {src_size} does not match destination element size {dst_size}")]
    CopySizeMismatch {
        /// Index of the offending region.
        region: usize,
        /// Source element size in bytes.
        src_size: u32,
        /// Destination element size in bytes.
        dst_size: u32,
    },
}
