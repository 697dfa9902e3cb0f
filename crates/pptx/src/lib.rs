//! Minimal PPTX (Office Open XML) package writer.
//!
//! A .pptx file is a ZIP archive of XML parts plus media. This crate
//! serializes the [`tlab_core::Slide`] shape model into such a package:
//! fixed parts (theme, slide master, "Title Only" layout) are static
//! templates, slide parts are generated with quick-xml.

pub mod document;
pub mod parts;
pub mod slide_xml;

pub use document::Document;
