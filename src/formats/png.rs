use crate::layout::{FieldLayout, IntField};
use crate::signatures::{FormatDescriptor, FormatSignature};
use crate::types::ImageFormat;

pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// IHDR width and height. The IHDR chunk always comes first, so its payload
/// starts after the signature, the chunk length and the chunk type.
pub const PNG_LAYOUT: FieldLayout = FieldLayout::new(16, IntField::U32Be);

pub const DESCRIPTOR: FormatDescriptor = FormatDescriptor::new(
    ImageFormat::Png,
    FormatSignature::new(&PNG_SIGNATURE),
    Some(PNG_LAYOUT),
);
