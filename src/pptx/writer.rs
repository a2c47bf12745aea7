//! PPTX package writer implementation.

use crate::error::{Error, Result};
use crate::model::{Metadata, Presentation, Slide};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use super::parts;

/// First slide ID in `p:sldIdLst`; IDs below 256 are reserved.
const FIRST_SLIDE_ID: usize = 256;

/// Writer that serializes a [`Presentation`] into a `.pptx` package.
///
/// The package is assembled entirely in memory: one slide master, the two
/// built-in layouts, the theme, and one slide part per model slide. Parts
/// whose content never varies come from [`parts`]; everything derived from
/// the model is generated here.
pub struct PptxWriter<'a> {
    presentation: &'a Presentation,
}

impl<'a> PptxWriter<'a> {
    /// Create a writer for the given presentation.
    pub fn new(presentation: &'a Presentation) -> Self {
        Self { presentation }
    }

    /// Serialize the presentation into PPTX package bytes.
    pub fn write(&self) -> Result<Vec<u8>> {
        if self.presentation.is_empty() {
            return Err(Error::EmptyPresentation);
        }

        let n = self.presentation.len();
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();

        let mut put = |name: &str, data: &[u8]| -> Result<()> {
            zip.start_file(name, options)?;
            zip.write_all(data)?;
            Ok(())
        };

        put("[Content_Types].xml", self.content_types_xml(n).as_bytes())?;
        put("_rels/.rels", parts::PACKAGE_RELS.as_bytes())?;
        put(
            "docProps/core.xml",
            &core_properties_xml(&self.presentation.metadata)?,
        )?;
        put(
            "docProps/app.xml",
            self.app_properties_xml(n).as_bytes(),
        )?;
        put("ppt/presentation.xml", self.presentation_xml(n).as_bytes())?;
        put(
            "ppt/_rels/presentation.xml.rels",
            self.presentation_rels_xml(n).as_bytes(),
        )?;
        put(
            "ppt/slideMasters/slideMaster1.xml",
            parts::SLIDE_MASTER_XML.as_bytes(),
        )?;
        put(
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            parts::SLIDE_MASTER_RELS.as_bytes(),
        )?;
        put(
            "ppt/slideLayouts/slideLayout1.xml",
            parts::SLIDE_LAYOUT_TITLE_XML.as_bytes(),
        )?;
        put(
            "ppt/slideLayouts/slideLayout2.xml",
            parts::SLIDE_LAYOUT_BODY_XML.as_bytes(),
        )?;
        put(
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
            parts::SLIDE_LAYOUT_RELS.as_bytes(),
        )?;
        put(
            "ppt/slideLayouts/_rels/slideLayout2.xml.rels",
            parts::SLIDE_LAYOUT_RELS.as_bytes(),
        )?;
        put("ppt/theme/theme1.xml", parts::THEME_XML.as_bytes())?;

        for (idx, slide) in self.presentation.slides.iter().enumerate() {
            let num = idx + 1;
            put(&format!("ppt/slides/slide{}.xml", num), &slide_xml(slide)?)?;
            put(
                &format!("ppt/slides/_rels/slide{}.xml.rels", num),
                slide_rels_xml(slide).as_bytes(),
            )?;
        }

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }

    /// Build `[Content_Types].xml` with one override per slide part.
    fn content_types_xml(&self, slide_count: usize) -> String {
        let mut xml = String::with_capacity(1024 + slide_count * 128);
        xml.push_str(parts::XML_DECL);
        xml.push('\n');
        xml.push_str(&format!(
            r#"<Types xmlns="{}">"#,
            parts::NS_CONTENT_TYPES
        ));
        xml.push_str(
            r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
        );
        xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);

        let overrides = [
            ("/ppt/presentation.xml", parts::CT_PRESENTATION),
            ("/ppt/slideMasters/slideMaster1.xml", parts::CT_SLIDE_MASTER),
            ("/ppt/slideLayouts/slideLayout1.xml", parts::CT_SLIDE_LAYOUT),
            ("/ppt/slideLayouts/slideLayout2.xml", parts::CT_SLIDE_LAYOUT),
            ("/ppt/theme/theme1.xml", parts::CT_THEME),
            ("/docProps/core.xml", parts::CT_CORE_PROPERTIES),
            ("/docProps/app.xml", parts::CT_EXTENDED_PROPERTIES),
        ];
        for (part, ct) in overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                part, ct
            ));
        }
        for num in 1..=slide_count {
            xml.push_str(&format!(
                r#"<Override PartName="/ppt/slides/slide{}.xml" ContentType="{}"/>"#,
                num,
                parts::CT_SLIDE
            ));
        }
        xml.push_str("</Types>");
        xml
    }

    /// Build `ppt/presentation.xml`: master reference, slide ID list, sizes.
    fn presentation_xml(&self, slide_count: usize) -> String {
        let mut xml = String::with_capacity(512 + slide_count * 48);
        xml.push_str(parts::XML_DECL);
        xml.push('\n');
        xml.push_str(&format!(
            r#"<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
            parts::NS_DRAWINGML,
            parts::NS_RELATIONSHIPS,
            parts::NS_PRESENTATIONML
        ));
        xml.push_str(
            r#"<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>"#,
        );
        xml.push_str("<p:sldIdLst>");
        for idx in 0..slide_count {
            // Slide rIds follow the master (rId1), in slide order.
            xml.push_str(&format!(
                r#"<p:sldId id="{}" r:id="rId{}"/>"#,
                FIRST_SLIDE_ID + idx,
                idx + 2
            ));
        }
        xml.push_str("</p:sldIdLst>");
        xml.push_str(&format!(
            r#"<p:sldSz cx="{}" cy="{}" type="screen4x3"/>"#,
            parts::SLIDE_WIDTH_EMU,
            parts::SLIDE_HEIGHT_EMU
        ));
        xml.push_str(&format!(
            r#"<p:notesSz cx="{}" cy="{}"/>"#,
            parts::SLIDE_HEIGHT_EMU,
            parts::SLIDE_WIDTH_EMU
        ));
        xml.push_str("</p:presentation>");
        xml
    }

    /// Build `ppt/_rels/presentation.xml.rels`.
    fn presentation_rels_xml(&self, slide_count: usize) -> String {
        let mut xml = String::with_capacity(512 + slide_count * 160);
        xml.push_str(parts::XML_DECL);
        xml.push('\n');
        xml.push_str(&format!(
            r#"<Relationships xmlns="{}">"#,
            parts::NS_PACKAGE_RELATIONSHIPS
        ));
        xml.push_str(&format!(
            r#"<Relationship Id="rId1" Type="{}" Target="slideMasters/slideMaster1.xml"/>"#,
            parts::REL_SLIDE_MASTER
        ));
        for num in 1..=slide_count {
            xml.push_str(&format!(
                r#"<Relationship Id="rId{}" Type="{}" Target="slides/slide{}.xml"/>"#,
                num + 1,
                parts::REL_SLIDE,
                num
            ));
        }
        xml.push_str("</Relationships>");
        xml
    }

    /// Build `docProps/app.xml`.
    fn app_properties_xml(&self, slide_count: usize) -> String {
        let application = self
            .presentation
            .metadata
            .application
            .as_deref()
            .unwrap_or("deckgen");
        format!(
            concat!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
                "\n",
                r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
                r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
                "<Application>{}</Application>",
                "<Slides>{}</Slides>",
                "<PresentationFormat>On-screen Show (4:3)</PresentationFormat>",
                "</Properties>"
            ),
            escape(application),
            slide_count
        )
    }
}

/// Escape text destined for an XML attribute or element built by hand.
fn escape(text: &str) -> String {
    quick_xml::escape::escape(text).into_owned()
}

fn xml_err(e: impl std::fmt::Display) -> Error {
    Error::XmlWrite(e.to_string())
}

/// Build `docProps/core.xml` from presentation metadata.
///
/// Only the fields that are set produce elements; text content goes through
/// quick-xml so titles with markup-significant characters stay intact.
fn core_properties_xml(meta: &Metadata) -> Result<Vec<u8>> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
        .map_err(xml_err)?;

    let mut root = BytesStart::new("cp:coreProperties");
    root.push_attribute((
        "xmlns:cp",
        "http://schemas.openxmlformats.org/package/2006/metadata/core-properties",
    ));
    root.push_attribute(("xmlns:dc", "http://purl.org/dc/elements/1.1/"));
    root.push_attribute(("xmlns:dcterms", "http://purl.org/dc/terms/"));
    root.push_attribute(("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"));
    writer.write_event(Event::Start(root)).map_err(xml_err)?;

    let mut text_element = |name: &str, value: &Option<String>| -> Result<()> {
        if let Some(value) = value {
            writer
                .write_event(Event::Start(BytesStart::new(name)))
                .map_err(xml_err)?;
            writer
                .write_event(Event::Text(BytesText::new(value)))
                .map_err(xml_err)?;
            writer
                .write_event(Event::End(BytesEnd::new(name)))
                .map_err(xml_err)?;
        }
        Ok(())
    };

    text_element("dc:title", &meta.title)?;
    text_element("dc:subject", &meta.subject)?;
    text_element("dc:creator", &meta.author)?;
    text_element("cp:lastModifiedBy", &meta.author)?;

    let mut dated_element = |name: &str, value: &Option<String>| -> Result<()> {
        if let Some(value) = value {
            let mut start = BytesStart::new(name);
            start.push_attribute(("xsi:type", "dcterms:W3CDTF"));
            writer.write_event(Event::Start(start)).map_err(xml_err)?;
            writer
                .write_event(Event::Text(BytesText::new(value)))
                .map_err(xml_err)?;
            writer
                .write_event(Event::End(BytesEnd::new(name)))
                .map_err(xml_err)?;
        }
        Ok(())
    };

    dated_element("dcterms:created", &meta.created)?;
    dated_element("dcterms:modified", &meta.modified)?;

    writer
        .write_event(Event::End(BytesEnd::new("cp:coreProperties")))
        .map_err(xml_err)?;

    Ok(writer.into_inner().into_inner())
}

/// Build `ppt/slides/slideN.xml` for one slide.
///
/// The shape tree holds exactly two placeholder shapes: the title and the
/// body region of the slide's layout. Body lines become one `a:p` each, an
/// empty line becoming an empty paragraph.
fn slide_xml(slide: &Slide) -> Result<Vec<u8>> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
        .map_err(xml_err)?;

    let mut sld = BytesStart::new("p:sld");
    sld.push_attribute(("xmlns:a", parts::NS_DRAWINGML));
    sld.push_attribute(("xmlns:r", parts::NS_RELATIONSHIPS));
    sld.push_attribute(("xmlns:p", parts::NS_PRESENTATIONML));
    writer.write_event(Event::Start(sld)).map_err(xml_err)?;

    writer
        .write_event(Event::Start(BytesStart::new("p:cSld")))
        .map_err(xml_err)?;
    writer
        .write_event(Event::Start(BytesStart::new("p:spTree")))
        .map_err(xml_err)?;

    // Root group shape of the tree.
    writer
        .write_event(Event::Start(BytesStart::new("p:nvGrpSpPr")))
        .map_err(xml_err)?;
    let mut group_cnvpr = BytesStart::new("p:cNvPr");
    group_cnvpr.push_attribute(("id", "1"));
    group_cnvpr.push_attribute(("name", ""));
    writer
        .write_event(Event::Empty(group_cnvpr))
        .map_err(xml_err)?;
    writer
        .write_event(Event::Empty(BytesStart::new("p:cNvGrpSpPr")))
        .map_err(xml_err)?;
    writer
        .write_event(Event::Empty(BytesStart::new("p:nvPr")))
        .map_err(xml_err)?;
    writer
        .write_event(Event::End(BytesEnd::new("p:nvGrpSpPr")))
        .map_err(xml_err)?;

    writer
        .write_event(Event::Start(BytesStart::new("p:grpSpPr")))
        .map_err(xml_err)?;
    writer
        .write_event(Event::Start(BytesStart::new("a:xfrm")))
        .map_err(xml_err)?;
    for name in ["a:off", "a:chOff"] {
        let mut e = BytesStart::new(name);
        e.push_attribute(("x", "0"));
        e.push_attribute(("y", "0"));
        writer.write_event(Event::Empty(e)).map_err(xml_err)?;
    }
    for name in ["a:ext", "a:chExt"] {
        let mut e = BytesStart::new(name);
        e.push_attribute(("cx", "0"));
        e.push_attribute(("cy", "0"));
        writer.write_event(Event::Empty(e)).map_err(xml_err)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new("a:xfrm")))
        .map_err(xml_err)?;
    writer
        .write_event(Event::End(BytesEnd::new("p:grpSpPr")))
        .map_err(xml_err)?;

    let title_paragraphs = [slide.title.clone()];
    write_placeholder_shape(
        &mut writer,
        "2",
        "Title 1",
        slide.layout.title_ph_type(),
        None,
        &title_paragraphs,
    )?;
    write_placeholder_shape(
        &mut writer,
        "3",
        "Body 2",
        slide.layout.body_ph_type(),
        Some("1"),
        &slide.body,
    )?;

    writer
        .write_event(Event::End(BytesEnd::new("p:spTree")))
        .map_err(xml_err)?;
    writer
        .write_event(Event::End(BytesEnd::new("p:cSld")))
        .map_err(xml_err)?;

    writer
        .write_event(Event::Start(BytesStart::new("p:clrMapOvr")))
        .map_err(xml_err)?;
    writer
        .write_event(Event::Empty(BytesStart::new("a:masterClrMapping")))
        .map_err(xml_err)?;
    writer
        .write_event(Event::End(BytesEnd::new("p:clrMapOvr")))
        .map_err(xml_err)?;

    writer
        .write_event(Event::End(BytesEnd::new("p:sld")))
        .map_err(xml_err)?;

    Ok(writer.into_inner().into_inner())
}

/// Write one placeholder shape (`p:sp`) with its text body.
fn write_placeholder_shape<W: Write>(
    writer: &mut Writer<W>,
    id: &str,
    name: &str,
    ph_type: &str,
    ph_idx: Option<&str>,
    paragraphs: &[String],
) -> Result<()> {
    writer
        .write_event(Event::Start(BytesStart::new("p:sp")))
        .map_err(xml_err)?;

    writer
        .write_event(Event::Start(BytesStart::new("p:nvSpPr")))
        .map_err(xml_err)?;
    let mut cnvpr = BytesStart::new("p:cNvPr");
    cnvpr.push_attribute(("id", id));
    cnvpr.push_attribute(("name", name));
    writer.write_event(Event::Empty(cnvpr)).map_err(xml_err)?;
    writer
        .write_event(Event::Start(BytesStart::new("p:cNvSpPr")))
        .map_err(xml_err)?;
    let mut locks = BytesStart::new("a:spLocks");
    locks.push_attribute(("noGrp", "1"));
    writer.write_event(Event::Empty(locks)).map_err(xml_err)?;
    writer
        .write_event(Event::End(BytesEnd::new("p:cNvSpPr")))
        .map_err(xml_err)?;
    writer
        .write_event(Event::Start(BytesStart::new("p:nvPr")))
        .map_err(xml_err)?;
    let mut ph = BytesStart::new("p:ph");
    ph.push_attribute(("type", ph_type));
    if let Some(idx) = ph_idx {
        ph.push_attribute(("idx", idx));
    }
    writer.write_event(Event::Empty(ph)).map_err(xml_err)?;
    writer
        .write_event(Event::End(BytesEnd::new("p:nvPr")))
        .map_err(xml_err)?;
    writer
        .write_event(Event::End(BytesEnd::new("p:nvSpPr")))
        .map_err(xml_err)?;

    // Geometry is inherited from the layout placeholder.
    writer
        .write_event(Event::Empty(BytesStart::new("p:spPr")))
        .map_err(xml_err)?;

    writer
        .write_event(Event::Start(BytesStart::new("p:txBody")))
        .map_err(xml_err)?;
    writer
        .write_event(Event::Empty(BytesStart::new("a:bodyPr")))
        .map_err(xml_err)?;
    writer
        .write_event(Event::Empty(BytesStart::new("a:lstStyle")))
        .map_err(xml_err)?;

    for paragraph in paragraphs {
        if paragraph.is_empty() {
            writer
                .write_event(Event::Empty(BytesStart::new("a:p")))
                .map_err(xml_err)?;
            continue;
        }
        writer
            .write_event(Event::Start(BytesStart::new("a:p")))
            .map_err(xml_err)?;
        writer
            .write_event(Event::Start(BytesStart::new("a:r")))
            .map_err(xml_err)?;
        writer
            .write_event(Event::Start(BytesStart::new("a:t")))
            .map_err(xml_err)?;
        writer
            .write_event(Event::Text(BytesText::new(paragraph)))
            .map_err(xml_err)?;
        writer
            .write_event(Event::End(BytesEnd::new("a:t")))
            .map_err(xml_err)?;
        writer
            .write_event(Event::End(BytesEnd::new("a:r")))
            .map_err(xml_err)?;
        writer
            .write_event(Event::End(BytesEnd::new("a:p")))
            .map_err(xml_err)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("p:txBody")))
        .map_err(xml_err)?;
    writer
        .write_event(Event::End(BytesEnd::new("p:sp")))
        .map_err(xml_err)?;

    Ok(())
}

/// Build `ppt/slides/_rels/slideN.xml.rels` pointing at the slide's layout.
fn slide_rels_xml(slide: &Slide) -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            "\n",
            r#"<Relationships xmlns="{}">"#,
            r#"<Relationship Id="rId1" Type="{}" Target="../slideLayouts/slideLayout{}.xml"/>"#,
            "</Relationships>"
        ),
        parts::NS_PACKAGE_RELATIONSHIPS,
        parts::REL_SLIDE_LAYOUT,
        slide.layout.part_index()
    )
}
