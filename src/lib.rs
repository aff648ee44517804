//! Measure the dimensions of an image file by reading only its header.
//!
//! ```
//! use std::io::Cursor;
//! use calipers::ImageFormat;
//!
//! let mut gif = Cursor::new(vec![
//!     0x47, 0x49, 0x46, 0x38, 0x39, 0x61, 0x64, 0x00, 0x46, 0x00, 0x00, 0x00,
//! ]);
//! let measurement = calipers::measure(&mut gif).unwrap();
//! assert_eq!(measurement.format, ImageFormat::Gif);
//! assert_eq!(measurement.dimensions(), (100, 70));
//! ```

pub mod cli;
pub mod error;
pub mod formats;
pub mod layout;
pub mod measure;
pub mod signatures;
pub mod types;

pub use error::{IoStep, MeasureError, RegistryError, Result};
pub use layout::{FieldLayout, IntField};
pub use measure::{Measurer, measure, measure_path};
pub use signatures::{FormatDescriptor, FormatSignature, PROBE_LEN, SignatureRegistry};
pub use types::{ImageFormat, Measurement};
