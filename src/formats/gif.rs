use crate::layout::{FieldLayout, IntField};
use crate::signatures::{FormatDescriptor, FormatSignature};
use crate::types::ImageFormat;

/// "GIF8", shared by GIF87a and GIF89a.
pub const GIF_SIGNATURE: [u8; 4] = [0x47, 0x49, 0x46, 0x38];

/// Logical screen width and height, little-endian, right after the 6-byte version tag.
pub const GIF_LAYOUT: FieldLayout = FieldLayout::new(6, IntField::U16Le);

pub const DESCRIPTOR: FormatDescriptor = FormatDescriptor::new(
    ImageFormat::Gif,
    FormatSignature::new(&GIF_SIGNATURE),
    Some(GIF_LAYOUT),
);
