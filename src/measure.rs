//! Header measurement
//!
//! Detects the format of a seekable source from its first [`PROBE_LEN`]
//! bytes, then reads the dimension fields at the offset the format's
//! [`FieldLayout`] names. Every call performs at most two seek+read round
//! trips and leaves the source positioned after the field window.

use crate::error::{IoStep, MeasureError, Result};
use crate::layout::FieldLayout;
use crate::signatures::{FormatDescriptor, PROBE_LEN, SignatureRegistry};
use crate::types::{ImageFormat, Measurement};
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;
use std::sync::LazyLock;

/// Largest field window any layout can describe: two 32-bit integers.
const MAX_FIELD_LEN: usize = 8;

static DEFAULT_MEASURER: LazyLock<Measurer> = LazyLock::new(Measurer::default);

/// Measures images against a [`SignatureRegistry`].
///
/// The measurer holds no per-call state, so one instance can serve any
/// number of sources, including from several threads. Each source must be
/// used by one call at a time since measuring moves its read position.
#[derive(Debug, Clone, Default)]
pub struct Measurer {
    registry: SignatureRegistry,
}

impl Measurer {
    pub fn new(registry: SignatureRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &SignatureRegistry {
        &self.registry
    }

    /// Opens the file at `path` and measures it. The file is closed before
    /// returning, whatever the outcome.
    pub fn measure_path(&self, path: impl AsRef<Path>) -> Result<Measurement> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(MeasureError::io(IoStep::Open))?;
        tracing::debug!(path = %path.display(), "measuring file");
        self.measure(&mut file)
    }

    /// Measures an already opened source.
    pub fn measure<R: Read + Seek>(&self, source: &mut R) -> Result<Measurement> {
        let descriptor = self.detect(source)?;
        let format = descriptor.format();

        let Some(layout) = descriptor.layout() else {
            tracing::debug!(%format, "no field layout registered");
            return Err(MeasureError::Unsupported(format));
        };

        let (width, height) = read_dimensions(source, format, layout)?;
        tracing::debug!(%format, width, height, "measured image header");

        Ok(Measurement::new(format, width, height))
    }

    /// Reads the probe window from the start of `source` and looks it up.
    pub fn detect<R: Read + Seek>(&self, source: &mut R) -> Result<&FormatDescriptor> {
        source
            .seek(SeekFrom::Start(0))
            .map_err(MeasureError::io(IoStep::SeekProbe))?;

        let mut probe = [0u8; PROBE_LEN];
        source
            .read_exact(&mut probe)
            .map_err(MeasureError::io(IoStep::ReadProbe))?;
        tracing::trace!(probe = ?probe, "read probe window");

        self.registry
            .detect(&probe)
            .ok_or(MeasureError::UnknownFormat)
    }
}

fn read_dimensions<R: Read + Seek>(
    source: &mut R,
    format: ImageFormat,
    layout: &FieldLayout,
) -> Result<(u32, u32)> {
    source
        .seek(SeekFrom::Start(layout.offset))
        .map_err(MeasureError::io(IoStep::SeekField))?;

    let mut buffer = [0u8; MAX_FIELD_LEN];
    let window = &mut buffer[..layout.window_len()];
    let read = read_full(source, window).map_err(MeasureError::io(IoStep::ReadField))?;

    if read < window.len() {
        return Err(MeasureError::TruncatedHeader {
            format,
            expected: window.len(),
            actual: read,
        });
    }

    Ok(layout.decode(window))
}

/// Reads until `buf` is full or the source hits EOF, returning the byte count.
fn read_full<R: Read>(source: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match source.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Measures `source` with the built-in GIF and PNG descriptors.
pub fn measure<R: Read + Seek>(source: &mut R) -> Result<Measurement> {
    DEFAULT_MEASURER.measure(source)
}

/// Opens and measures the file at `path` with the built-in descriptors.
pub fn measure_path(path: impl AsRef<Path>) -> Result<Measurement> {
    DEFAULT_MEASURER.measure_path(path)
}
