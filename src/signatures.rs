//! Signature registry
//!
//! Maps magic byte prefixes to image formats and the layout of their
//! dimension fields. Supporting a new format means registering one more
//! [`FormatDescriptor`].

use crate::error::RegistryError;
use crate::formats::{gif, png};
use crate::layout::FieldLayout;
use crate::types::ImageFormat;

/// Number of leading bytes read to detect a format.
pub const PROBE_LEN: usize = 8;

/// Magic bytes found at the start of a file of a given format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSignature {
    bytes: &'static [u8],
}

impl FormatSignature {
    pub const fn new(bytes: &'static [u8]) -> Self {
        Self { bytes }
    }

    pub fn bytes(&self) -> &'static [u8] {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Checks whether `probe` starts with this signature.
    ///
    /// A signature as long as the probe window must equal it exactly.
    pub fn matches(&self, probe: &[u8]) -> bool {
        probe.starts_with(self.bytes)
    }

    /// Two signatures overlap when either is a prefix of the other, so some
    /// probe would match both.
    fn overlaps(&self, other: &FormatSignature) -> bool {
        self.bytes.starts_with(other.bytes) || other.bytes.starts_with(self.bytes)
    }
}

/// A registry entry: signature, format tag and optional dimension layout.
///
/// A descriptor without a layout is recognized but cannot be measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDescriptor {
    format: ImageFormat,
    signature: FormatSignature,
    layout: Option<FieldLayout>,
}

impl FormatDescriptor {
    pub const fn new(
        format: ImageFormat,
        signature: FormatSignature,
        layout: Option<FieldLayout>,
    ) -> Self {
        Self {
            format,
            signature,
            layout,
        }
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn signature(&self) -> &FormatSignature {
        &self.signature
    }

    pub fn layout(&self) -> Option<&FieldLayout> {
        self.layout.as_ref()
    }
}

/// Ordered set of format descriptors used for detection.
///
/// # Example
///
/// ```
/// use calipers::{ImageFormat, SignatureRegistry};
///
/// let registry = SignatureRegistry::default_images();
/// let probe = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
/// let found = registry.detect(&probe).unwrap();
/// assert_eq!(found.format(), ImageFormat::Png);
/// ```
#[derive(Debug, Clone)]
pub struct SignatureRegistry {
    descriptors: Vec<FormatDescriptor>,
}

impl SignatureRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            descriptors: Vec::new(),
        }
    }

    /// Creates a registry with the GIF and PNG descriptors
    pub fn default_images() -> Self {
        // The built-in signatures never overlap.
        Self {
            descriptors: vec![gif::DESCRIPTOR, png::DESCRIPTOR],
        }
    }

    /// Registers a descriptor.
    ///
    /// Fails if the signature is empty, does not fit in the probe window, or
    /// overlaps a signature already registered.
    pub fn register(&mut self, descriptor: FormatDescriptor) -> Result<(), RegistryError> {
        let format = descriptor.format();
        let signature = descriptor.signature();

        if signature.is_empty() {
            return Err(RegistryError::EmptySignature(format));
        }

        if signature.len() > PROBE_LEN {
            return Err(RegistryError::SignatureTooLong {
                format,
                len: signature.len(),
                max: PROBE_LEN,
            });
        }

        if let Some(existing) = self
            .descriptors
            .iter()
            .find(|d| d.signature().overlaps(signature))
        {
            return Err(RegistryError::Ambiguous {
                format,
                existing: existing.format(),
            });
        }

        self.descriptors.push(descriptor);
        Ok(())
    }

    /// Returns the descriptor whose signature matches the probe window.
    pub fn detect(&self, probe: &[u8]) -> Option<&FormatDescriptor> {
        self.descriptors
            .iter()
            .find(|d| d.signature().matches(probe))
    }

    pub fn descriptors(&self) -> &[FormatDescriptor] {
        &self.descriptors
    }

    /// Returns the registered formats in registration order
    pub fn formats(&self) -> impl Iterator<Item = ImageFormat> + '_ {
        self.descriptors.iter().map(FormatDescriptor::format)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl Default for SignatureRegistry {
    fn default() -> Self {
        Self::default_images()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JPEG_SOI: [u8; 3] = [0xFF, 0xD8, 0xFF];

    #[test]
    fn test_default_registry_formats() {
        let registry = SignatureRegistry::default_images();
        let formats: Vec<_> = registry.formats().collect();
        assert_eq!(formats, vec![ImageFormat::Gif, ImageFormat::Png]);
    }

    #[test]
    fn test_gif_matches_by_prefix() {
        let registry = SignatureRegistry::default_images();
        for probe in [b"GIF89a\x01\x00", b"GIF87a\xFF\xFF"] {
            let found = registry.detect(probe).unwrap();
            assert_eq!(found.format(), ImageFormat::Gif);
        }
    }

    #[test]
    fn test_png_requires_full_signature() {
        let registry = SignatureRegistry::default_images();
        let mut probe = png::PNG_SIGNATURE;
        assert!(registry.detect(&probe).is_some());

        probe[7] = 0x00;
        assert!(registry.detect(&probe).is_none());
    }

    #[test]
    fn test_jpeg_not_detected_by_default() {
        let registry = SignatureRegistry::default_images();
        let probe = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46];
        assert!(registry.detect(&probe).is_none());
    }

    #[test]
    fn test_register_layoutless_format() {
        let mut registry = SignatureRegistry::default_images();
        registry
            .register(FormatDescriptor::new(
                ImageFormat::Jpeg,
                FormatSignature::new(&JPEG_SOI),
                None,
            ))
            .unwrap();

        let probe = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46];
        let found = registry.detect(&probe).unwrap();
        assert_eq!(found.format(), ImageFormat::Jpeg);
        assert!(found.layout().is_none());
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_register_rejects_overlap() {
        let mut registry = SignatureRegistry::default_images();
        let err = registry
            .register(FormatDescriptor::new(
                ImageFormat::Jpeg,
                FormatSignature::new(b"GIF"),
                None,
            ))
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::Ambiguous {
                format: ImageFormat::Jpeg,
                existing: ImageFormat::Gif,
            }
        );
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_register_rejects_bad_lengths() {
        let mut registry = SignatureRegistry::new();
        assert_eq!(
            registry.register(FormatDescriptor::new(
                ImageFormat::Jpeg,
                FormatSignature::new(&[]),
                None,
            )),
            Err(RegistryError::EmptySignature(ImageFormat::Jpeg))
        );
        assert_eq!(
            registry.register(FormatDescriptor::new(
                ImageFormat::Jpeg,
                FormatSignature::new(&[0xAB; 9]),
                None,
            )),
            Err(RegistryError::SignatureTooLong {
                format: ImageFormat::Jpeg,
                len: 9,
                max: PROBE_LEN,
            })
        );
        assert!(registry.is_empty());
    }
}
