//! Declarative dimension field layouts.
//!
//! A [`FieldLayout`] says where a format stores its width and height and how
//! the two integers are encoded. Width comes first in the field window,
//! height immediately after it.

/// Integer encoding of a single dimension field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntField {
    U16Le,
    U16Be,
    U32Le,
    U32Be,
}

impl IntField {
    /// Size of one encoded integer in bytes.
    pub const fn size(self) -> usize {
        match self {
            IntField::U16Le | IntField::U16Be => 2,
            IntField::U32Le | IntField::U32Be => 4,
        }
    }

    /// Decodes one integer from the start of `bytes`.
    ///
    /// `bytes` must hold at least [`IntField::size`] bytes.
    #[inline]
    pub fn read(self, bytes: &[u8]) -> u32 {
        match self {
            IntField::U16Le => u16::from_le_bytes([bytes[0], bytes[1]]) as u32,
            IntField::U16Be => u16::from_be_bytes([bytes[0], bytes[1]]) as u32,
            IntField::U32Le => u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            IntField::U32Be => u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
        }
    }
}

/// Where and how a format stores its pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    /// Absolute byte offset of the field window.
    pub offset: u64,
    /// Encoding shared by the width and height fields.
    pub int: IntField,
}

impl FieldLayout {
    pub const fn new(offset: u64, int: IntField) -> Self {
        Self { offset, int }
    }

    /// Size of the field window: width followed by height.
    pub const fn window_len(&self) -> usize {
        self.int.size() * 2
    }

    /// Decodes `(width, height)` from a window of exactly [`FieldLayout::window_len`] bytes.
    pub fn decode(&self, window: &[u8]) -> (u32, u32) {
        debug_assert_eq!(window.len(), self.window_len());
        let size = self.int.size();
        (self.int.read(&window[..size]), self.int.read(&window[size..]))
    }
}
