//! Document assembly and package serialization.

use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use tlab_core::{Error, Result, Shape, Slide};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::{parts, slide_xml};

/// An assembled presentation, ready to serialize.
///
/// The document is the product of a report's `build()` step; it holds the
/// slides and the metadata title and is consumed by serialization.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Title recorded in the core document properties.
    pub title: Option<String>,

    /// Slides in presentation order.
    pub slides: Vec<Slide>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the core-properties title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Append a slide.
    pub fn add_slide(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    /// Serialize the package to a file at `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref())?;
        self.write_to(BufWriter::new(file))?;
        log::debug!("wrote deck to {}", path.as_ref().display());
        Ok(())
    }

    /// Serialize the package to an open writable stream.
    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<()> {
        let mut zip = ZipWriter::new(writer);
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

        let has_png = self.slides.iter().any(|s| s.picture_count() > 0);
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

        let put = |zip: &mut ZipWriter<W>, name: &str, bytes: &[u8]| -> Result<()> {
            zip.start_file(name, options)
                .map_err(|e| Error::ZipError(format!("Failed to create '{}': {}", name, e)))?;
            zip.write_all(bytes)?;
            Ok(())
        };

        put(
            &mut zip,
            "[Content_Types].xml",
            parts::content_types(self.slides.len(), has_png).as_bytes(),
        )?;
        put(&mut zip, "_rels/.rels", parts::package_rels().as_bytes())?;
        put(
            &mut zip,
            "docProps/core.xml",
            parts::core_props(self.title.as_deref(), &timestamp).as_bytes(),
        )?;
        put(
            &mut zip,
            "docProps/app.xml",
            parts::app_props(self.slides.len()).as_bytes(),
        )?;
        put(
            &mut zip,
            "ppt/presentation.xml",
            parts::presentation_xml(self.slides.len()).as_bytes(),
        )?;
        put(
            &mut zip,
            "ppt/_rels/presentation.xml.rels",
            parts::presentation_rels(self.slides.len()).as_bytes(),
        )?;
        put(
            &mut zip,
            "ppt/slideMasters/slideMaster1.xml",
            parts::SLIDE_MASTER_XML.as_bytes(),
        )?;
        put(
            &mut zip,
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            parts::master_rels().as_bytes(),
        )?;
        put(
            &mut zip,
            "ppt/slideLayouts/slideLayout1.xml",
            parts::SLIDE_LAYOUT_XML.as_bytes(),
        )?;
        put(
            &mut zip,
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
            parts::layout_rels().as_bytes(),
        )?;
        put(&mut zip, "ppt/theme/theme1.xml", parts::THEME_XML.as_bytes())?;

        // Media files are numbered across the whole document; each slide's
        // relationship part records where its pictures start.
        let mut media_index = 1usize;
        for (i, slide) in self.slides.iter().enumerate() {
            let n = i + 1;
            put(
                &mut zip,
                &format!("ppt/slides/slide{n}.xml"),
                &slide_xml::slide_to_xml(slide)?,
            )?;
            put(
                &mut zip,
                &format!("ppt/slides/_rels/slide{n}.xml.rels"),
                parts::slide_rels(slide.picture_count(), media_index).as_bytes(),
            )?;

            for shape in &slide.shapes {
                if let Shape::Picture { png, .. } = shape {
                    put(&mut zip, &format!("ppt/media/image{media_index}.png"), png)?;
                    media_index += 1;
                }
            }
        }

        zip.finish()
            .map_err(|e| Error::ZipError(format!("Failed to finish package: {}", e)))?;
        log::debug!(
            "serialized {} slide(s), {} image(s)",
            self.slides.len(),
            media_index - 1
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};
    use tlab_core::{Font, Rect};
    use zip::ZipArchive;

    fn sample_document() -> Document {
        let mut slide = Slide::new();
        slide.add_title(
            "Sample",
            Rect::new(0.53, 0.53, 25.25, 1.45),
            Font::new("Arial", 28.0).bold().italic(),
        );
        slide.add_picture(b"left png".to_vec(), Rect::new(0.33, 5.0, 12.0, 12.0));
        slide.add_picture(b"right png".to_vec(), Rect::new(12.33, 5.0, 12.0, 12.0));
        slide.add_text_box(
            "Frame : 10000\n",
            Rect::new(14.33, 2.5, 1.0, 1.0),
            Font::new("Arial", 18.0),
        );

        let mut doc = Document::new();
        doc.set_title("Sample");
        doc.add_slide(slide);
        doc
    }

    fn write_to_archive(doc: &Document) -> ZipArchive<Cursor<Vec<u8>>> {
        let mut buf = Cursor::new(Vec::new());
        doc.write_to(&mut buf).unwrap();
        buf.set_position(0);
        ZipArchive::new(buf).unwrap()
    }

    fn read_part(archive: &mut ZipArchive<Cursor<Vec<u8>>>, name: &str) -> String {
        let mut part = archive.by_name(name).unwrap();
        let mut content = String::new();
        part.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_package_part_names() {
        let mut archive = write_to_archive(&sample_document());
        for name in [
            "[Content_Types].xml",
            "_rels/.rels",
            "docProps/core.xml",
            "docProps/app.xml",
            "ppt/presentation.xml",
            "ppt/_rels/presentation.xml.rels",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/theme/theme1.xml",
            "ppt/slides/slide1.xml",
            "ppt/slides/_rels/slide1.xml.rels",
            "ppt/media/image1.png",
            "ppt/media/image2.png",
        ] {
            assert!(archive.by_name(name).is_ok(), "missing part: {}", name);
        }
    }

    #[test]
    fn test_media_bytes_round_trip() {
        let mut archive = write_to_archive(&sample_document());
        assert_eq!(read_part(&mut archive, "ppt/media/image1.png"), "left png");
        assert_eq!(read_part(&mut archive, "ppt/media/image2.png"), "right png");
    }

    #[test]
    fn test_slide_rels_reference_both_images() {
        let mut archive = write_to_archive(&sample_document());
        let rels = read_part(&mut archive, "ppt/slides/_rels/slide1.xml.rels");
        assert!(rels.contains(r#"Id="rId2""#));
        assert!(rels.contains("../media/image1.png"));
        assert!(rels.contains(r#"Id="rId3""#));
        assert!(rels.contains("../media/image2.png"));
    }

    #[test]
    fn test_core_title_written() {
        let mut archive = write_to_archive(&sample_document());
        let core = read_part(&mut archive, "docProps/core.xml");
        assert!(core.contains("<dc:title>Sample</dc:title>"));
    }

    #[test]
    fn test_empty_document_has_no_png_default() {
        let doc = Document::new();
        let mut archive = write_to_archive(&doc);
        let types = read_part(&mut archive, "[Content_Types].xml");
        assert!(!types.contains(r#"Extension="png""#));
    }

    #[test]
    fn test_slide_text_survives_round_trip() {
        // Parse the written slide part back and collect its run text.
        let mut archive = write_to_archive(&sample_document());
        let xml = read_part(&mut archive, "ppt/slides/slide1.xml");

        let mut reader = quick_xml::Reader::from_str(&xml);
        let mut texts = Vec::new();
        let mut in_run_text = false;
        loop {
            match reader.read_event() {
                Ok(quick_xml::events::Event::Start(ref e)) if e.name().as_ref() == b"a:t" => {
                    in_run_text = true;
                }
                Ok(quick_xml::events::Event::Text(ref e)) if in_run_text => {
                    texts.push(e.unescape().unwrap().to_string());
                }
                Ok(quick_xml::events::Event::End(ref e)) if e.name().as_ref() == b"a:t" => {
                    in_run_text = false;
                }
                Ok(quick_xml::events::Event::Eof) => break,
                Err(e) => panic!("XML parsing error: {}", e),
                _ => {}
            }
        }

        assert_eq!(texts, vec!["Sample", "Frame : 10000"]);
    }
}
