//! PPTX package writer.
//!
//! Produces a minimal but complete PresentationML package: one slide
//! master, one blank layout, one theme, and one part per slide. Images are
//! embedded under `ppt/media/`; linked video becomes an external hyperlink.
//! Part XML is built as strings; every `write!` failure surfaces as
//! [`ExportError::Xml`].

use crate::element::{
    Background, Element, ElementContent, ExportSlide, ImageFormat, ImageSource, TextRun,
};
use crate::error::ExportError;
use sg_core::TextAlign;
use std::fmt::Write as FmtWrite;
use std::io::{Cursor, Write};
use std::path::PathBuf;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;
const NS_P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_PKG_RELS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

const REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const REL_SLIDE_MASTER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
const REL_SLIDE_LAYOUT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
const REL_SLIDE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
const REL_THEME: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";
const REL_PRES_PROPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/presProps";
const REL_IMAGE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";
const REL_HYPERLINK: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink";

const CT_PRESENTATION: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";
const CT_SLIDE: &str = "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";
const CT_SLIDE_MASTER: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml";
const CT_SLIDE_LAYOUT: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml";
const CT_THEME: &str = "application/vnd.openxmlformats-officedocument.theme+xml";
const CT_PRES_PROPS: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presProps+xml";
const CT_RELS: &str = "application/vnd.openxmlformats-package.relationships+xml";

/// Fill used for placeholder boxes without a fill of their own.
const PLACEHOLDER_FILL: &str = "D9D9D9";

/// Escape XML special characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// One relationship of a part.
struct Relationship {
    id: String,
    kind: &'static str,
    target: String,
    external: bool,
}

fn rels_xml(rels: &[Relationship]) -> Result<String, ExportError> {
    let mut xml = String::with_capacity(256 + rels.len() * 160);
    xml.push_str(XML_DECL);
    write!(xml, r#"<Relationships xmlns="{NS_PKG_RELS}">"#)?;
    for rel in rels {
        write!(
            xml,
            r#"<Relationship Id="{}" Type="{}" Target="{}"{}/>"#,
            rel.id,
            rel.kind,
            escape_xml(&rel.target),
            if rel.external {
                r#" TargetMode="External""#
            } else {
                ""
            }
        )?;
    }
    xml.push_str("</Relationships>");
    Ok(xml)
}

/// Writes [`ExportSlide`]s as a `.pptx` package.
#[derive(Debug, Clone, Copy)]
pub struct PptxWriter {
    /// Canvas size in inches.
    width: f64,
    height: f64,
}

impl PptxWriter {
    pub fn new(canvas: (f64, f64)) -> Self {
        Self {
            width: canvas.0,
            height: canvas.1,
        }
    }

    /// Serialize the whole package into memory.
    pub fn write(&self, slides: &[ExportSlide]) -> Result<Vec<u8>, ExportError> {
        let mut parts: Vec<(String, Vec<u8>)> = Vec::new();
        let mut overrides: Vec<(String, &'static str)> = Vec::new();
        let mut media_count = 0usize;

        for (index, slide) in slides.iter().enumerate() {
            let number = index + 1;
            let mut rels = vec![Relationship {
                id: "rId1".into(),
                kind: REL_SLIDE_LAYOUT,
                target: "../slideLayouts/slideLayout1.xml".into(),
                external: false,
            }];
            let mut media = Vec::new();
            let xml = self.slide_xml(slide, &mut rels, &mut |image: &ImageSource| {
                media_count += 1;
                let name = format!("image{media_count}.{}", image.format.extension());
                media.push((format!("ppt/media/{name}"), image.data.clone()));
                format!("../media/{name}")
            })?;

            let path = format!("ppt/slides/slide{number}.xml");
            overrides.push((format!("/{path}"), CT_SLIDE));
            parts.push((path, xml.into_bytes()));
            parts.push((
                format!("ppt/slides/_rels/slide{number}.xml.rels"),
                rels_xml(&rels)?.into_bytes(),
            ));
            parts.extend(media);
        }

        parts.push((
            "ppt/presentation.xml".into(),
            self.presentation_xml(slides.len())?.into_bytes(),
        ));
        parts.push((
            "ppt/_rels/presentation.xml.rels".into(),
            rels_xml(&presentation_rels(slides.len()))?.into_bytes(),
        ));
        parts.push(("ppt/presProps.xml".into(), pres_props_xml()?.into_bytes()));
        parts.push(("ppt/slideMasters/slideMaster1.xml".into(), slide_master_xml()?.into_bytes()));
        parts.push((
            "ppt/slideMasters/_rels/slideMaster1.xml.rels".into(),
            rels_xml(&[
                Relationship {
                    id: "rId1".into(),
                    kind: REL_SLIDE_LAYOUT,
                    target: "../slideLayouts/slideLayout1.xml".into(),
                    external: false,
                },
                Relationship {
                    id: "rId2".into(),
                    kind: REL_THEME,
                    target: "../theme/theme1.xml".into(),
                    external: false,
                },
            ])?
            .into_bytes(),
        ));
        parts.push(("ppt/slideLayouts/slideLayout1.xml".into(), slide_layout_xml()?.into_bytes()));
        parts.push((
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels".into(),
            rels_xml(&[Relationship {
                id: "rId1".into(),
                kind: REL_SLIDE_MASTER,
                target: "../slideMasters/slideMaster1.xml".into(),
                external: false,
            }])?
            .into_bytes(),
        ));
        parts.push(("ppt/theme/theme1.xml".into(), theme_xml()?.into_bytes()));
        parts.push((
            "_rels/.rels".into(),
            rels_xml(&[Relationship {
                id: "rId1".into(),
                kind: REL_OFFICE_DOCUMENT,
                target: "ppt/presentation.xml".into(),
                external: false,
            }])?
            .into_bytes(),
        ));

        overrides.extend([
            ("/ppt/presentation.xml".to_string(), CT_PRESENTATION),
            ("/ppt/presProps.xml".to_string(), CT_PRES_PROPS),
            ("/ppt/slideMasters/slideMaster1.xml".to_string(), CT_SLIDE_MASTER),
            ("/ppt/slideLayouts/slideLayout1.xml".to_string(), CT_SLIDE_LAYOUT),
            ("/ppt/theme/theme1.xml".to_string(), CT_THEME),
        ]);

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        add_part(
            &mut zip,
            options,
            "[Content_Types].xml",
            content_types_xml(&overrides)?.as_bytes(),
        )?;
        for (path, data) in &parts {
            add_part(&mut zip, options, path, data)?;
        }
        Ok(zip.finish()?.into_inner())
    }

    fn presentation_xml(&self, slide_count: usize) -> Result<String, ExportError> {
        let mut xml = String::with_capacity(1024 + slide_count * 48);
        xml.push_str(XML_DECL);
        write!(
            xml,
            r#"<p:presentation xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}" saveSubsetFonts="1">"#
        )?;
        xml.push_str(
            r#"<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>"#,
        );
        if slide_count > 0 {
            xml.push_str("<p:sldIdLst>");
            for i in 0..slide_count {
                write!(xml, r#"<p:sldId id="{}" r:id="rId{}"/>"#, 256 + i, i + 2)?;
            }
            xml.push_str("</p:sldIdLst>");
        }
        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            inches_to_emu(self.width),
            inches_to_emu(self.height)
        )?;
        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");
        Ok(xml)
    }

    fn slide_xml(
        &self,
        slide: &ExportSlide,
        rels: &mut Vec<Relationship>,
        embed: &mut dyn FnMut(&ImageSource) -> String,
    ) -> Result<String, ExportError> {
        let next_rel = |rels: &mut Vec<Relationship>, kind, target, external| {
            let id = format!("rId{}", rels.len() + 1);
            rels.push(Relationship {
                id: id.clone(),
                kind,
                target,
                external,
            });
            id
        };

        let mut xml = String::with_capacity(4096);
        xml.push_str(XML_DECL);
        write!(xml, r#"<p:sld xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}">"#)?;
        xml.push_str("<p:cSld>");

        // Background must precede the shape tree.
        match &slide.background {
            Some(Background::Color(color)) => {
                write!(
                    xml,
                    r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="{color}"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>"#
                )?;
            }
            Some(Background::Image(image)) => {
                let target = embed(image);
                let rid = next_rel(rels, REL_IMAGE, target, false);
                write!(
                    xml,
                    r#"<p:bg><p:bgPr><a:blipFill dpi="0" rotWithShape="1"><a:blip r:embed="{rid}"/><a:stretch><a:fillRect/></a:stretch></a:blipFill><a:effectLst/></p:bgPr></p:bg>"#
                )?;
            }
            None => {}
        }

        xml.push_str("<p:spTree>");
        xml.push_str(
            r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
        );
        xml.push_str(
            r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#,
        );

        for (i, element) in slide.elements.iter().enumerate() {
            // Group shape uses id 1.
            let shape_id = i + 2;
            let xfrm = self.xfrm(element)?;
            match &element.content {
                ElementContent::Text(run) => {
                    write_text_shape(
                        &mut xml,
                        shape_id,
                        "Text Box",
                        &xfrm,
                        element.fill.as_deref(),
                        run,
                        None,
                        false,
                    )?;
                }
                ElementContent::Image(image) => {
                    let target = embed(image);
                    let rid = next_rel(rels, REL_IMAGE, target, false);
                    write_picture(&mut xml, shape_id, &xfrm, element.fill.as_deref(), &rid)?;
                }
                ElementContent::LinkedMedia { url } => {
                    let rid = next_rel(rels, REL_HYPERLINK, url.clone(), true);
                    let run = TextRun::plain(format!("▶ {url}"), 14.0);
                    write_text_shape(
                        &mut xml,
                        shape_id,
                        "Video Link",
                        &xfrm,
                        element.fill.as_deref(),
                        &run,
                        Some(&rid),
                        true,
                    )?;
                }
                ElementContent::Placeholder { label } => {
                    let run = TextRun {
                        align: TextAlign::Center,
                        color: Some("595959".into()),
                        ..TextRun::plain(label.clone(), 14.0)
                    };
                    let fill = element.fill.as_deref().unwrap_or(PLACEHOLDER_FILL);
                    write_text_shape(
                        &mut xml,
                        shape_id,
                        "Placeholder",
                        &xfrm,
                        Some(fill),
                        &run,
                        None,
                        true,
                    )?;
                }
            }
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");
        Ok(xml)
    }

    /// `<a:xfrm>` for an element, resolving percentages against the canvas.
    fn xfrm(&self, element: &Element) -> Result<String, ExportError> {
        let f = &element.frame;
        let mut xml = String::with_capacity(96);
        write!(
            xml,
            r#"<a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm>"#,
            f.x.to_emu(self.width),
            f.y.to_emu(self.height),
            f.w.to_emu(self.width).max(0),
            f.h.to_emu(self.height).max(0)
        )?;
        Ok(xml)
    }
}

fn inches_to_emu(inches: f64) -> i64 {
    (inches * crate::units::EMU_PER_INCH).round() as i64
}

fn add_part(
    zip: &mut ZipWriter<Cursor<Vec<u8>>>,
    options: SimpleFileOptions,
    path: &str,
    data: &[u8],
) -> Result<(), ExportError> {
    zip.start_file(path, options)?;
    zip.write_all(data).map_err(|source| ExportError::Io {
        path: PathBuf::from(path),
        source,
    })
}

fn algn(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "l",
        TextAlign::Center => "ctr",
        TextAlign::Right => "r",
        TextAlign::Justify => "just",
    }
}

fn write_fill(xml: &mut String, fill: Option<&str>) -> Result<(), ExportError> {
    match fill {
        Some(color) => write!(xml, r#"<a:solidFill><a:srgbClr val="{color}"/></a:solidFill>"#)?,
        None => xml.push_str("<a:noFill/>"),
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn write_text_shape(
    xml: &mut String,
    shape_id: usize,
    name: &str,
    xfrm: &str,
    fill: Option<&str>,
    run: &TextRun,
    hyperlink: Option<&str>,
    centered: bool,
) -> Result<(), ExportError> {
    xml.push_str("<p:sp>");
    write!(
        xml,
        r#"<p:nvSpPr><p:cNvPr id="{shape_id}" name="{name} {shape_id}"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr>"#
    )?;
    xml.push_str("<p:spPr>");
    xml.push_str(xfrm);
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
    write_fill(xml, fill)?;
    xml.push_str("</p:spPr>");

    xml.push_str("<p:txBody>");
    write!(
        xml,
        r#"<a:bodyPr wrap="square" rtlCol="0"{}><a:normAutofit/></a:bodyPr>"#,
        if centered { r#" anchor="ctr""# } else { "" }
    )?;
    xml.push_str("<a:lstStyle/>");

    let size = (run.font_size * 100.0).round().clamp(100.0, 400_000.0) as u32;
    for line in run.text.split('\n') {
        write!(xml, r#"<a:p><a:pPr algn="{}"/>"#, algn(run.align))?;
        write!(xml, r#"<a:r><a:rPr lang="en-US" sz="{size}""#)?;
        if run.bold {
            xml.push_str(r#" b="1""#);
        }
        if run.italic {
            xml.push_str(r#" i="1""#);
        }
        if hyperlink.is_some() {
            xml.push_str(r#" u="sng""#);
        }
        xml.push_str(r#" dirty="0">"#);
        // Child order: fill, latin, hlinkClick.
        if let Some(color) = &run.color {
            write!(xml, r#"<a:solidFill><a:srgbClr val="{color}"/></a:solidFill>"#)?;
        }
        if let Some(font) = &run.font_family {
            write!(xml, r#"<a:latin typeface="{}"/>"#, escape_xml(font))?;
        }
        if let Some(rid) = hyperlink {
            write!(xml, r#"<a:hlinkClick r:id="{rid}"/>"#)?;
        }
        xml.push_str("</a:rPr>");
        write!(xml, "<a:t>{}</a:t></a:r></a:p>", escape_xml(line.trim_end_matches('\r')))?;
    }
    xml.push_str("</p:txBody>");
    xml.push_str("</p:sp>");
    Ok(())
}

fn write_picture(
    xml: &mut String,
    shape_id: usize,
    xfrm: &str,
    fill: Option<&str>,
    rid: &str,
) -> Result<(), ExportError> {
    xml.push_str("<p:pic>");
    write!(
        xml,
        r#"<p:nvPicPr><p:cNvPr id="{shape_id}" name="Picture {shape_id}"/><p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr><p:nvPr/></p:nvPicPr>"#
    )?;
    write!(
        xml,
        r#"<p:blipFill><a:blip r:embed="{rid}"/><a:stretch><a:fillRect/></a:stretch></p:blipFill>"#
    )?;
    xml.push_str("<p:spPr>");
    xml.push_str(xfrm);
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
    if fill.is_some() {
        write_fill(xml, fill)?;
    }
    xml.push_str("</p:spPr>");
    xml.push_str("</p:pic>");
    Ok(())
}

fn presentation_rels(slide_count: usize) -> Vec<Relationship> {
    let mut rels = vec![Relationship {
        id: "rId1".into(),
        kind: REL_SLIDE_MASTER,
        target: "slideMasters/slideMaster1.xml".into(),
        external: false,
    }];
    for i in 0..slide_count {
        rels.push(Relationship {
            id: format!("rId{}", i + 2),
            kind: REL_SLIDE,
            target: format!("slides/slide{}.xml", i + 1),
            external: false,
        });
    }
    rels.push(Relationship {
        id: format!("rId{}", slide_count + 2),
        kind: REL_THEME,
        target: "theme/theme1.xml".into(),
        external: false,
    });
    rels.push(Relationship {
        id: format!("rId{}", slide_count + 3),
        kind: REL_PRES_PROPS,
        target: "presProps.xml".into(),
        external: false,
    });
    rels
}

fn content_types_xml(overrides: &[(String, &'static str)]) -> Result<String, ExportError> {
    let mut xml = String::with_capacity(1024 + overrides.len() * 160);
    xml.push_str(XML_DECL);
    xml.push_str(r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#);
    write!(xml, r#"<Default Extension="rels" ContentType="{CT_RELS}"/>"#)?;
    xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);
    for format in ImageFormat::ALL {
        write!(
            xml,
            r#"<Default Extension="{}" ContentType="{}"/>"#,
            format.extension(),
            format.content_type()
        )?;
    }
    for (part, content_type) in overrides {
        write!(xml, r#"<Override PartName="{part}" ContentType="{content_type}"/>"#)?;
    }
    xml.push_str("</Types>");
    Ok(xml)
}

fn pres_props_xml() -> Result<String, ExportError> {
    let mut xml = String::from(XML_DECL);
    write!(xml, r#"<p:presentationPr xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}"/>"#)?;
    Ok(xml)
}

const EMPTY_SP_TREE: &str = r#"<p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr></p:spTree>"#;

fn slide_master_xml() -> Result<String, ExportError> {
    let mut xml = String::from(XML_DECL);
    write!(xml, r#"<p:sldMaster xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}">"#)?;
    xml.push_str(r#"<p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>"#);
    xml.push_str(EMPTY_SP_TREE);
    xml.push_str("</p:cSld>");
    xml.push_str(
        r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#,
    );
    xml.push_str(
        r#"<p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst>"#,
    );
    xml.push_str("</p:sldMaster>");
    Ok(xml)
}

fn slide_layout_xml() -> Result<String, ExportError> {
    let mut xml = String::from(XML_DECL);
    write!(
        xml,
        r#"<p:sldLayout xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}" type="blank" preserve="1">"#
    )?;
    xml.push_str(r#"<p:cSld name="Blank">"#);
    xml.push_str(EMPTY_SP_TREE);
    xml.push_str("</p:cSld>");
    xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
    xml.push_str("</p:sldLayout>");
    Ok(xml)
}

fn theme_xml() -> Result<String, ExportError> {
    let mut xml = String::with_capacity(4096);
    xml.push_str(XML_DECL);
    write!(xml, r#"<a:theme xmlns:a="{NS_A}" name="Office Theme"><a:themeElements>"#)?;

    xml.push_str(r#"<a:clrScheme name="Office">"#);
    xml.push_str(r#"<a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>"#);
    xml.push_str(r#"<a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>"#);
    for (slot, rgb) in [
        ("dk2", "44546A"),
        ("lt2", "E7E6E6"),
        ("accent1", "4472C4"),
        ("accent2", "ED7D31"),
        ("accent3", "A5A5A5"),
        ("accent4", "FFC000"),
        ("accent5", "5B9BD5"),
        ("accent6", "70AD47"),
        ("hlink", "0563C1"),
        ("folHlink", "954F72"),
    ] {
        write!(xml, r#"<a:{slot}><a:srgbClr val="{rgb}"/></a:{slot}>"#)?;
    }
    xml.push_str("</a:clrScheme>");

    xml.push_str(r#"<a:fontScheme name="Office">"#);
    for (kind, face) in [("majorFont", "Calibri Light"), ("minorFont", "Calibri")] {
        write!(
            xml,
            r#"<a:{kind}><a:latin typeface="{face}"/><a:ea typeface=""/><a:cs typeface=""/></a:{kind}>"#
        )?;
    }
    xml.push_str("</a:fontScheme>");

    let solid = r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#;
    xml.push_str(r#"<a:fmtScheme name="Office">"#);
    write!(xml, "<a:fillStyleLst>{}</a:fillStyleLst>", solid.repeat(3))?;
    xml.push_str("<a:lnStyleLst>");
    for width in [6350, 12700, 19050] {
        write!(xml, r#"<a:ln w="{width}">{solid}</a:ln>"#)?;
    }
    xml.push_str("</a:lnStyleLst>");
    write!(
        xml,
        "<a:effectStyleLst>{}</a:effectStyleLst>",
        "<a:effectStyle><a:effectLst/></a:effectStyle>".repeat(3)
    )?;
    write!(xml, "<a:bgFillStyleLst>{}</a:bgFillStyleLst>", solid.repeat(3))?;
    xml.push_str("</a:fmtScheme>");

    xml.push_str("</a:themeElements></a:theme>");
    Ok(xml)
}
