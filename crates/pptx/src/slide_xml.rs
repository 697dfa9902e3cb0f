//! Slide part generation.
//!
//! Builds `ppt/slides/slideN.xml` from the shape model using quick-xml's
//! event writer, which handles attribute and text escaping. Relationship
//! ids follow the layout reference: rId1 is the slide layout, pictures get
//! rId2, rId3, ... in shape order.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use tlab_core::slide::paragraphs;
use tlab_core::{Error, Font, LineStyle, Rect, Result, Shape, Slide};

pub const NS_DRAWING: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
pub const NS_PRESENTATION: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
pub const NS_RELATIONSHIPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

type XmlWriter = Writer<Vec<u8>>;

fn xml_err(e: impl std::fmt::Display) -> Error {
    Error::XmlError(e.to_string())
}

fn write_start(w: &mut XmlWriter, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut el = BytesStart::new(name);
    for attr in attrs {
        el.push_attribute(*attr);
    }
    w.write_event(Event::Start(el)).map_err(xml_err)
}

fn write_empty(w: &mut XmlWriter, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut el = BytesStart::new(name);
    for attr in attrs {
        el.push_attribute(*attr);
    }
    w.write_event(Event::Empty(el)).map_err(xml_err)
}

fn write_end(w: &mut XmlWriter, name: &str) -> Result<()> {
    w.write_event(Event::End(BytesEnd::new(name))).map_err(xml_err)
}

fn write_text(w: &mut XmlWriter, text: &str) -> Result<()> {
    w.write_event(Event::Text(BytesText::new(text))).map_err(xml_err)
}

/// Serialize one slide to XML bytes.
///
/// Picture shapes are referenced by `r:embed`; the caller is responsible
/// for emitting matching relationship entries and media parts.
pub fn slide_to_xml(slide: &Slide) -> Result<Vec<u8>> {
    let mut w = Writer::new(Vec::new());

    w.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
        .map_err(xml_err)?;

    write_start(
        &mut w,
        "p:sld",
        &[
            ("xmlns:a", NS_DRAWING),
            ("xmlns:r", NS_RELATIONSHIPS),
            ("xmlns:p", NS_PRESENTATION),
        ],
    )?;
    write_start(&mut w, "p:cSld", &[])?;
    write_start(&mut w, "p:spTree", &[])?;

    // The shape tree group itself is always id 1 with empty properties.
    write_start(&mut w, "p:nvGrpSpPr", &[])?;
    write_empty(&mut w, "p:cNvPr", &[("id", "1"), ("name", "")])?;
    write_empty(&mut w, "p:cNvGrpSpPr", &[])?;
    write_empty(&mut w, "p:nvPr", &[])?;
    write_end(&mut w, "p:nvGrpSpPr")?;
    write_empty(&mut w, "p:grpSpPr", &[])?;

    // Slide shapes start at id 2; pictures take rId2, rId3, ... (rId1 is
    // the layout reference).
    let mut shape_id = 2u32;
    let mut rel_id = 2u32;
    for shape in &slide.shapes {
        match shape {
            Shape::Title { text, rect, font } => {
                write_title(&mut w, shape_id, text, rect, font)?;
            }
            Shape::TextBox { text, rect, font } => {
                write_text_box(&mut w, shape_id, text, rect, font)?;
            }
            Shape::Picture { rect, .. } => {
                write_picture(&mut w, shape_id, rel_id, rect)?;
                rel_id += 1;
            }
            Shape::HorizontalRule { rect, line } => {
                write_rule(&mut w, shape_id, rect, line)?;
            }
        }
        shape_id += 1;
    }

    write_end(&mut w, "p:spTree")?;
    write_end(&mut w, "p:cSld")?;
    write_start(&mut w, "p:clrMapOvr", &[])?;
    write_empty(&mut w, "a:masterClrMapping", &[])?;
    write_end(&mut w, "p:clrMapOvr")?;
    write_end(&mut w, "p:sld")?;

    Ok(w.into_inner())
}

/// Write `a:xfrm` with offset and extent from a centimeter rect.
fn write_xfrm(w: &mut XmlWriter, rect: &Rect) -> Result<()> {
    let (x, y) = (rect.left.emu().to_string(), rect.top.emu().to_string());
    let (cx, cy) = (rect.width.emu().to_string(), rect.height.emu().to_string());
    write_start(w, "a:xfrm", &[])?;
    write_empty(w, "a:off", &[("x", x.as_str()), ("y", y.as_str())])?;
    write_empty(w, "a:ext", &[("cx", cx.as_str()), ("cy", cy.as_str())])?;
    write_end(w, "a:xfrm")
}

fn run_props_attrs(font: &Font) -> (String, &'static str, &'static str) {
    let sz = font.size.centipoints().to_string();
    let b = if font.bold { "1" } else { "0" };
    let i = if font.italic { "1" } else { "0" };
    (sz, b, i)
}

/// Write the paragraphs of a text shape, applying the font to every run.
/// Empty lines carry the font on `a:endParaRPr` so the cursor keeps it.
fn write_paragraphs(w: &mut XmlWriter, text: &str, font: &Font) -> Result<()> {
    let (sz, b, i) = run_props_attrs(font);
    let attrs: [(&str, &str); 5] = [
        ("lang", "en-US"),
        ("sz", sz.as_str()),
        ("b", b),
        ("i", i),
        ("dirty", "0"),
    ];

    for line in paragraphs(text) {
        write_start(w, "a:p", &[])?;
        if line.is_empty() {
            write_start(w, "a:endParaRPr", &attrs)?;
            write_empty(w, "a:latin", &[("typeface", font.name.as_str())])?;
            write_end(w, "a:endParaRPr")?;
        } else {
            write_start(w, "a:r", &[])?;
            write_start(w, "a:rPr", &attrs)?;
            write_empty(w, "a:latin", &[("typeface", font.name.as_str())])?;
            write_end(w, "a:rPr")?;
            write_start(w, "a:t", &[])?;
            write_text(w, line)?;
            write_end(w, "a:t")?;
            write_end(w, "a:r")?;
        }
        write_end(w, "a:p")?;
    }
    Ok(())
}

fn write_title(w: &mut XmlWriter, id: u32, text: &str, rect: &Rect, font: &Font) -> Result<()> {
    let id_str = id.to_string();
    let name = format!("Title {}", id - 1);

    write_start(w, "p:sp", &[])?;
    write_start(w, "p:nvSpPr", &[])?;
    write_empty(w, "p:cNvPr", &[("id", id_str.as_str()), ("name", name.as_str())])?;
    write_start(w, "p:cNvSpPr", &[])?;
    write_empty(w, "a:spLocks", &[("noGrp", "1")])?;
    write_end(w, "p:cNvSpPr")?;
    write_start(w, "p:nvPr", &[])?;
    write_empty(w, "p:ph", &[("type", "title")])?;
    write_end(w, "p:nvPr")?;
    write_end(w, "p:nvSpPr")?;

    write_start(w, "p:spPr", &[])?;
    write_xfrm(w, rect)?;
    write_end(w, "p:spPr")?;

    write_start(w, "p:txBody", &[])?;
    write_empty(w, "a:bodyPr", &[])?;
    write_empty(w, "a:lstStyle", &[])?;
    write_paragraphs(w, text, font)?;
    write_end(w, "p:txBody")?;
    write_end(w, "p:sp")
}

fn write_text_box(w: &mut XmlWriter, id: u32, text: &str, rect: &Rect, font: &Font) -> Result<()> {
    let id_str = id.to_string();
    let name = format!("TextBox {}", id - 1);

    write_start(w, "p:sp", &[])?;
    write_start(w, "p:nvSpPr", &[])?;
    write_empty(w, "p:cNvPr", &[("id", id_str.as_str()), ("name", name.as_str())])?;
    write_empty(w, "p:cNvSpPr", &[("txBox", "1")])?;
    write_empty(w, "p:nvPr", &[])?;
    write_end(w, "p:nvSpPr")?;

    write_start(w, "p:spPr", &[])?;
    write_xfrm(w, rect)?;
    write_start(w, "a:prstGeom", &[("prst", "rect")])?;
    write_empty(w, "a:avLst", &[])?;
    write_end(w, "a:prstGeom")?;
    write_empty(w, "a:noFill", &[])?;
    write_end(w, "p:spPr")?;

    write_start(w, "p:txBody", &[])?;
    write_start(w, "a:bodyPr", &[("wrap", "none")])?;
    write_empty(w, "a:spAutoFit", &[])?;
    write_end(w, "a:bodyPr")?;
    write_empty(w, "a:lstStyle", &[])?;
    write_paragraphs(w, text, font)?;
    write_end(w, "p:txBody")?;
    write_end(w, "p:sp")
}

fn write_picture(w: &mut XmlWriter, id: u32, rel_id: u32, rect: &Rect) -> Result<()> {
    let id_str = id.to_string();
    let name = format!("Picture {}", id - 1);
    let embed = format!("rId{rel_id}");

    write_start(w, "p:pic", &[])?;
    write_start(w, "p:nvPicPr", &[])?;
    write_empty(w, "p:cNvPr", &[("id", id_str.as_str()), ("name", name.as_str())])?;
    write_start(w, "p:cNvPicPr", &[])?;
    write_empty(w, "a:picLocks", &[("noChangeAspect", "1")])?;
    write_end(w, "p:cNvPicPr")?;
    write_empty(w, "p:nvPr", &[])?;
    write_end(w, "p:nvPicPr")?;

    write_start(w, "p:blipFill", &[])?;
    write_empty(w, "a:blip", &[("r:embed", embed.as_str())])?;
    write_start(w, "a:stretch", &[])?;
    write_empty(w, "a:fillRect", &[])?;
    write_end(w, "a:stretch")?;
    write_end(w, "p:blipFill")?;

    write_start(w, "p:spPr", &[])?;
    write_xfrm(w, rect)?;
    write_start(w, "a:prstGeom", &[("prst", "rect")])?;
    write_empty(w, "a:avLst", &[])?;
    write_end(w, "a:prstGeom")?;
    write_end(w, "p:spPr")?;
    write_end(w, "p:pic")
}

fn write_rule(w: &mut XmlWriter, id: u32, rect: &Rect, line: &LineStyle) -> Result<()> {
    let id_str = id.to_string();
    let name = format!("Rule {}", id - 1);
    let width = line.width.emu().to_string();
    let color = line.color.hex();

    write_start(w, "p:sp", &[])?;
    write_start(w, "p:nvSpPr", &[])?;
    write_empty(w, "p:cNvPr", &[("id", id_str.as_str()), ("name", name.as_str())])?;
    write_empty(w, "p:cNvSpPr", &[])?;
    write_empty(w, "p:nvPr", &[])?;
    write_end(w, "p:nvSpPr")?;

    write_start(w, "p:spPr", &[])?;
    write_xfrm(w, rect)?;
    write_start(w, "a:prstGeom", &[("prst", "lineInv")])?;
    write_empty(w, "a:avLst", &[])?;
    write_end(w, "a:prstGeom")?;
    write_start(w, "a:ln", &[("w", width.as_str())])?;
    write_start(w, "a:solidFill", &[])?;
    write_empty(w, "a:srgbClr", &[("val", color.as_str())])?;
    write_end(w, "a:solidFill")?;
    write_end(w, "a:ln")?;
    // Empty effect list keeps the shape from inheriting the theme shadow.
    write_empty(w, "a:effectLst", &[])?;
    write_end(w, "p:spPr")?;

    write_start(w, "p:txBody", &[])?;
    write_empty(w, "a:bodyPr", &[])?;
    write_empty(w, "a:lstStyle", &[])?;
    write_empty(w, "a:p", &[])?;
    write_end(w, "p:txBody")?;
    write_end(w, "p:sp")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tlab_core::{Font, Rect};

    fn sample_slide() -> Slide {
        let mut slide = Slide::new();
        slide.add_title(
            "Sample & Test",
            Rect::new(0.53, 0.53, 25.25, 1.45),
            Font::new("Arial", 28.0).bold().italic(),
        );
        slide.add_picture(vec![0x89, 0x50, 0x4E, 0x47], Rect::new(0.33, 5.0, 12.0, 12.0));
        slide.add_text_box(
            "line one\nline two\n",
            Rect::new(2.33, 2.5, 1.0, 1.0),
            Font::new("Arial", 18.0),
        );
        slide
    }

    #[test]
    fn test_escapes_reserved_characters() {
        let xml = slide_to_xml(&sample_slide()).unwrap();
        let xml = String::from_utf8(xml).unwrap();
        assert!(xml.contains("Sample &amp; Test"));
        assert!(!xml.contains("Sample & Test"));
    }

    #[test]
    fn test_title_geometry_in_emu() {
        let xml = slide_to_xml(&sample_slide()).unwrap();
        let xml = String::from_utf8(xml).unwrap();
        // Cm(0.53) = 190800 EMU, Cm(25.25) = 9090000 EMU.
        assert!(xml.contains(r#"<a:off x="190800" y="190800"/>"#));
        assert!(xml.contains(r#"<a:ext cx="9090000" cy="522000"/>"#));
    }

    #[test]
    fn test_title_run_properties() {
        let xml = slide_to_xml(&sample_slide()).unwrap();
        let xml = String::from_utf8(xml).unwrap();
        assert!(xml.contains(r#"sz="2800" b="1" i="1""#));
        assert!(xml.contains(r#"<a:latin typeface="Arial"/>"#));
        assert!(xml.contains(r#"<p:ph type="title"/>"#));
    }

    #[test]
    fn test_picture_embed_relationship() {
        let xml = slide_to_xml(&sample_slide()).unwrap();
        let xml = String::from_utf8(xml).unwrap();
        assert!(xml.contains(r#"<a:blip r:embed="rId2"/>"#));
    }

    #[test]
    fn test_trailing_newline_gives_empty_paragraph() {
        let xml = slide_to_xml(&sample_slide()).unwrap();
        let xml = String::from_utf8(xml).unwrap();
        assert!(xml.contains("<a:endParaRPr"));
        assert!(xml.contains("<a:t>line two</a:t>"));
    }

    #[test]
    fn test_rule_line_style() {
        let mut slide = Slide::new();
        slide.add_rule(
            Rect::new(0.67, 2.0, 24.0, 0.0),
            tlab_core::LineStyle {
                width: tlab_core::Pt(3.5),
                color: tlab_core::RgbColor(255, 51, 0),
            },
        );
        let xml = String::from_utf8(slide_to_xml(&slide).unwrap()).unwrap();
        assert!(xml.contains(r#"<a:prstGeom prst="lineInv">"#));
        assert!(xml.contains(r#"<a:ln w="44450">"#));
        assert!(xml.contains(r#"<a:srgbClr val="FF3300"/>"#));
        assert!(xml.contains("<a:effectLst/>"));
    }
}
