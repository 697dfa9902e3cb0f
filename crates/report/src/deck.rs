//! The build/save seam shared by report types.

use std::io::{Seek, Write};
use std::path::Path;

use tlab_core::Result;
use tlab_pptx::Document;

/// A report that can be laid out as a presentation document.
///
/// Reports are consumed by building: the record exists to be turned into
/// a deck exactly once.
pub trait SlideReport {
    /// Arrange the report on slides and return the assembled document.
    fn build(self) -> Result<Document>;

    /// Build and serialize to a `.pptx` file at `path`.
    fn save<P: AsRef<Path>>(self, path: P) -> Result<()>
    where
        Self: Sized,
    {
        self.build()?.save(path)
    }

    /// Build and serialize to an open writable stream.
    fn write_to<W: Write + Seek>(self, writer: W) -> Result<()>
    where
        Self: Sized,
    {
        self.build()?.write_to(writer)
    }
}
