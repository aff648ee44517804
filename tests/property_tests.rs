use calipers::{ImageFormat, MeasureError, SignatureRegistry, measure};
use proptest::prelude::*;
use std::io::Cursor;

const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

proptest! {
    #[test]
    fn unrecognized_probe_is_unknown(probe in any::<[u8; 8]>(), tail in prop::collection::vec(any::<u8>(), 0..32)) {
        prop_assume!(!probe.starts_with(b"GIF8"));
        prop_assume!(probe != PNG_SIGNATURE);

        let mut data = probe.to_vec();
        data.extend(tail);
        let result = measure(&mut Cursor::new(data));
        prop_assert!(matches!(result, Err(MeasureError::UnknownFormat)));
    }

    #[test]
    fn gif_dimensions_ignore_version_bytes(version in any::<[u8; 2]>(), width in any::<u16>(), height in any::<u16>()) {
        let mut data = b"GIF8".to_vec();
        data.extend_from_slice(&version);
        data.extend_from_slice(&width.to_le_bytes());
        data.extend_from_slice(&height.to_le_bytes());

        let m = measure(&mut Cursor::new(data)).unwrap();
        prop_assert_eq!(m.format, ImageFormat::Gif);
        prop_assert_eq!(m.dimensions(), (width as u32, height as u32));
    }

    #[test]
    fn arbitrary_input_never_panics(data in prop::collection::vec(any::<u8>(), 0..64)) {
        let registry = SignatureRegistry::default_images();
        let detected = data.get(..8).and_then(|probe| registry.detect(probe)).map(|d| d.format());

        match measure(&mut Cursor::new(data.clone())) {
            Ok(m) => prop_assert_eq!(Some(m.format), detected),
            Err(MeasureError::Io { .. }) => prop_assert!(data.len() < 8),
            Err(MeasureError::UnknownFormat) => prop_assert!(detected.is_none()),
            Err(MeasureError::TruncatedHeader { format, .. }) => prop_assert_eq!(Some(format), detected),
            Err(MeasureError::Unsupported(_)) => prop_assert!(false, "default registry measures every format it detects"),
        }
    }
}
