//! Fixed package parts and relationship files.
//!
//! The theme, slide master, and "Title Only" layout never change between
//! decks, so they are static templates. Content types and relationship
//! parts vary with the slide and picture count and are built here.

use quick_xml::escape::escape;

pub const CONTENT_TYPES_NS: &str =
    "http://schemas.openxmlformats.org/package/2006/content-types";
pub const PACKAGE_RELS_NS: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships";
pub const DOC_RELS_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

const XML_DECL: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\r\n";

/// `[Content_Types].xml`. The png default is only declared when the deck
/// actually embeds pictures.
pub fn content_types(slide_count: usize, has_png: bool) -> String {
    let mut out = String::from(XML_DECL);
    out.push_str(&format!(r#"<Types xmlns="{CONTENT_TYPES_NS}">"#));
    out.push_str(
        r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
    );
    out.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);
    if has_png {
        out.push_str(r#"<Default Extension="png" ContentType="image/png"/>"#);
    }
    out.push_str(
        r#"<Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>"#,
    );
    out.push_str(
        r#"<Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>"#,
    );
    out.push_str(
        r#"<Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>"#,
    );
    for n in 1..=slide_count {
        out.push_str(&format!(
            r#"<Override PartName="/ppt/slides/slide{n}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#,
        ));
    }
    out.push_str(
        r#"<Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>"#,
    );
    out.push_str(
        r#"<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>"#,
    );
    out.push_str(
        r#"<Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>"#,
    );
    out.push_str("</Types>");
    out
}

fn relationships(entries: &[(String, String, String)]) -> String {
    let mut out = String::from(XML_DECL);
    out.push_str(&format!(r#"<Relationships xmlns="{PACKAGE_RELS_NS}">"#));
    for (id, rel_type, target) in entries {
        out.push_str(&format!(
            r#"<Relationship Id="{id}" Type="{rel_type}" Target="{target}"/>"#,
        ));
    }
    out.push_str("</Relationships>");
    out
}

/// `_rels/.rels`.
pub fn package_rels() -> String {
    relationships(&[
        (
            "rId1".into(),
            format!("{DOC_RELS_NS}/officeDocument"),
            "ppt/presentation.xml".into(),
        ),
        (
            "rId2".into(),
            "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties"
                .into(),
            "docProps/core.xml".into(),
        ),
        (
            "rId3".into(),
            format!("{DOC_RELS_NS}/extended-properties"),
            "docProps/app.xml".into(),
        ),
    ])
}

/// `ppt/_rels/presentation.xml.rels`: the master first, then slides.
pub fn presentation_rels(slide_count: usize) -> String {
    let mut entries = vec![(
        "rId1".to_string(),
        format!("{DOC_RELS_NS}/slideMaster"),
        "slideMasters/slideMaster1.xml".to_string(),
    )];
    for n in 1..=slide_count {
        entries.push((
            format!("rId{}", n + 1),
            format!("{DOC_RELS_NS}/slide"),
            format!("slides/slide{n}.xml"),
        ));
    }
    relationships(&entries)
}

/// `ppt/slideMasters/_rels/slideMaster1.xml.rels`.
pub fn master_rels() -> String {
    relationships(&[
        (
            "rId1".into(),
            format!("{DOC_RELS_NS}/slideLayout"),
            "../slideLayouts/slideLayout1.xml".into(),
        ),
        (
            "rId2".into(),
            format!("{DOC_RELS_NS}/theme"),
            "../theme/theme1.xml".into(),
        ),
    ])
}

/// `ppt/slideLayouts/_rels/slideLayout1.xml.rels`.
pub fn layout_rels() -> String {
    relationships(&[(
        "rId1".into(),
        format!("{DOC_RELS_NS}/slideMaster"),
        "../slideMasters/slideMaster1.xml".into(),
    )])
}

/// `ppt/slides/_rels/slideN.xml.rels`: the layout plus one image entry
/// per picture, numbered into the document-wide media store.
pub fn slide_rels(picture_count: usize, first_media_index: usize) -> String {
    let mut entries = vec![(
        "rId1".to_string(),
        format!("{DOC_RELS_NS}/slideLayout"),
        "../slideLayouts/slideLayout1.xml".to_string(),
    )];
    for i in 0..picture_count {
        entries.push((
            format!("rId{}", i + 2),
            format!("{DOC_RELS_NS}/image"),
            format!("../media/image{}.png", first_media_index + i),
        ));
    }
    relationships(&entries)
}

/// `ppt/presentation.xml` with PowerPoint's default 4:3 slide size.
pub fn presentation_xml(slide_count: usize) -> String {
    let mut out = String::from(XML_DECL);
    out.push_str(&format!(
        r#"<p:presentation xmlns:a="{a}" xmlns:r="{r}" xmlns:p="{p}">"#,
        a = crate::slide_xml::NS_DRAWING,
        r = crate::slide_xml::NS_RELATIONSHIPS,
        p = crate::slide_xml::NS_PRESENTATION,
    ));
    out.push_str(
        r#"<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>"#,
    );
    out.push_str("<p:sldIdLst>");
    for n in 0..slide_count {
        out.push_str(&format!(
            r#"<p:sldId id="{}" r:id="rId{}"/>"#,
            256 + n,
            n + 2
        ));
    }
    out.push_str("</p:sldIdLst>");
    out.push_str(r#"<p:sldSz cx="9144000" cy="6858000" type="screen4x3"/>"#);
    out.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
    out.push_str("</p:presentation>");
    out
}

/// `docProps/core.xml` with the deck title and creation stamp.
pub fn core_props(title: Option<&str>, timestamp: &str) -> String {
    let mut out = String::from(XML_DECL);
    out.push_str(concat!(
        r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties""#,
        r#" xmlns:dc="http://purl.org/dc/elements/1.1/""#,
        r#" xmlns:dcterms="http://purl.org/dc/terms/""#,
        r#" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
    ));
    if let Some(title) = title {
        out.push_str(&format!("<dc:title>{}</dc:title>", escape(title)));
    }
    out.push_str("<dc:creator>tlab-pptx</dc:creator>");
    out.push_str(&format!(
        r#"<dcterms:created xsi:type="dcterms:W3CDTF">{timestamp}</dcterms:created>"#,
    ));
    out.push_str(&format!(
        r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{timestamp}</dcterms:modified>"#,
    ));
    out.push_str("</cp:coreProperties>");
    out
}

/// `docProps/app.xml`.
pub fn app_props(slide_count: usize) -> String {
    let mut out = String::from(XML_DECL);
    out.push_str(concat!(
        r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties""#,
        r#" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
    ));
    out.push_str("<Application>tlab-pptx</Application>");
    out.push_str(&format!("<Slides>{slide_count}</Slides>"));
    out.push_str("</Properties>");
    out
}

/// `ppt/slideMasters/slideMaster1.xml`: empty shape tree, default color
/// map, one layout.
pub const SLIDE_MASTER_XML: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\r\n",
    r#"<p:sldMaster xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#,
    r#"<p:cSld><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/></p:spTree></p:cSld>"#,
    r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#,
    r#"<p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst>"#,
    r#"</p:sldMaster>"#,
);

/// `ppt/slideLayouts/slideLayout1.xml`: the "Title Only" layout the
/// summary slide builds on.
pub const SLIDE_LAYOUT_XML: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\r\n",
    r#"<p:sldLayout xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" type="titleOnly" preserve="1">"#,
    r#"<p:cSld name="Title Only"><p:spTree>"#,
    r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/>"#,
    r#"<p:sp><p:nvSpPr><p:cNvPr id="2" name="Title 1"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph type="title"/></p:nvPr></p:nvSpPr>"#,
    r#"<p:spPr/><p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:r><a:rPr lang="en-US"/><a:t>Click to edit Master title style</a:t></a:r></a:p></p:txBody></p:sp>"#,
    r#"</p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sldLayout>"#,
);

/// `ppt/theme/theme1.xml`: a condensed Office theme. PowerPoint requires
/// the full scheme structure even though every shape on the summary slide
/// carries explicit formatting.
pub const THEME_XML: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\r\n",
    r#"<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Office Theme"><a:themeElements>"#,
    r#"<a:clrScheme name="Office">"#,
    r#"<a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>"#,
    r#"<a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>"#,
    r#"<a:dk2><a:srgbClr val="44546A"/></a:dk2>"#,
    r#"<a:lt2><a:srgbClr val="E7E6E6"/></a:lt2>"#,
    r#"<a:accent1><a:srgbClr val="4472C4"/></a:accent1>"#,
    r#"<a:accent2><a:srgbClr val="ED7D31"/></a:accent2>"#,
    r#"<a:accent3><a:srgbClr val="A5A5A5"/></a:accent3>"#,
    r#"<a:accent4><a:srgbClr val="FFC000"/></a:accent4>"#,
    r#"<a:accent5><a:srgbClr val="5B9BD5"/></a:accent5>"#,
    r#"<a:accent6><a:srgbClr val="70AD47"/></a:accent6>"#,
    r#"<a:hlink><a:srgbClr val="0563C1"/></a:hlink>"#,
    r#"<a:folHlink><a:srgbClr val="954F72"/></a:folHlink>"#,
    r#"</a:clrScheme>"#,
    r#"<a:fontScheme name="Office">"#,
    r#"<a:majorFont><a:latin typeface="Calibri Light"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>"#,
    r#"<a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>"#,
    r#"</a:fontScheme>"#,
    r#"<a:fmtScheme name="Office">"#,
    r#"<a:fillStyleLst>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    r#"</a:fillStyleLst>"#,
    r#"<a:lnStyleLst>"#,
    r#"<a:ln w="6350"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
    r#"<a:ln w="12700"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
    r#"<a:ln w="19050"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
    r#"</a:lnStyleLst>"#,
    r#"<a:effectStyleLst>"#,
    r#"<a:effectStyle><a:effectLst/></a:effectStyle>"#,
    r#"<a:effectStyle><a:effectLst/></a:effectStyle>"#,
    r#"<a:effectStyle><a:effectLst/></a:effectStyle>"#,
    r#"</a:effectStyleLst>"#,
    r#"<a:bgFillStyleLst>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    r#"</a:bgFillStyleLst>"#,
    r#"</a:fmtScheme>"#,
    r#"</a:themeElements></a:theme>"#,
);
