//! Inspection pipeline integration tests
//!
//! Drives a clipboard snapshot through rendering and the report layer.

use clipscope::core::{ImageSignature, Payload, Renderer, StaticSource, TempImageStore};
use clipscope::inspect::{inspect, InspectSummary};
use clipscope::report::{CapturePresenter, ConsolePresenter, Emphasis};
use proptest::prelude::*;
use tempfile::TempDir;

const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\x0dIHDR\x00\x00\x00\x01";

fn office_snapshot() -> StaticSource {
    StaticSource::new()
        .with_bytes(
            "HTML Format",
            b"Version:0.9\r\nStartHTML:0000000105\r\n<html><body>hi</body></html>".to_vec(),
        )
        .with_bytes("Locale", vec![0x09, 0x04, 0x00, 0x00])
        .with_bytes("OneNote 2016 Internal", vec![0xDE, 0xAD, 0xBE, 0xEF])
        .with_missing("EnhancedMetafile")
        .with_bytes("PNG", PNG.to_vec())
        .with_bytes("Text", b"hello".to_vec())
}

#[test]
fn test_full_report_without_saving() {
    let source = office_snapshot();
    let mut capture = CapturePresenter::new();

    let summary = inspect(&source, &Renderer::new(false), false, &mut capture).unwrap();

    assert_eq!(
        summary,
        InspectSummary {
            formats: 6,
            rendered: 5,
            skipped: 1,
            failed: 0
        }
    );

    assert_eq!(
        capture.with_emphasis(Emphasis::FormatList),
        vec!["HTML Format, Locale, OneNote 2016 Internal, EnhancedMetafile, PNG, Text"]
    );
    assert_eq!(
        capture.with_emphasis(Emphasis::Content),
        vec![
            "<html><body>hi</body></html>",
            "1033",
            "<< internal >>",
            "<< image: Png >>",
            "hello",
        ]
    );
    assert_eq!(
        capture.with_emphasis(Emphasis::Preamble),
        vec!["Version:0.9\r\nStartHTML:0000000105\r\n"]
    );

    let text = capture.text();
    assert!(text.contains("\nLocale - 4 chars (bytes)\n[1033]\n"));
    assert!(text.contains(
        "\nText - 5 chars (bytes)\nBytes 0..9 { 0x68 0x65 0x6c 0x6c 0x6f }\n[hello]\n"
    ));
    assert!(!text.contains("EnhancedMetafile -"));
}

#[test]
fn test_save_images_to_directory() {
    let dir = TempDir::new().unwrap();
    let mut dib = vec![0x28, 0x00, 0x00, 0x00];
    dib.extend_from_slice(&[0u8; 36]);

    let source = StaticSource::new()
        .with_bytes("PNG", PNG.to_vec())
        .with_bytes("DeviceIndependentBitmap", dib.clone());

    let renderer = Renderer::with_sink(true, TempImageStore::in_dir(dir.path()));
    let mut capture = CapturePresenter::new();
    let summary = inspect(&source, &renderer, false, &mut capture).unwrap();
    assert_eq!(summary.rendered, 2);

    let mut saved: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    saved.sort_by_key(|path| path.extension().map(|ext| ext.to_owned()));
    assert_eq!(saved.len(), 2);

    let (dib_path, png_path) = (&saved[0], &saved[1]);
    assert_eq!(dib_path.extension().unwrap(), "dib");
    assert_eq!(png_path.extension().unwrap(), "png");
    assert_eq!(std::fs::read(png_path).unwrap(), PNG);
    assert_eq!(std::fs::read(dib_path).unwrap(), dib);

    let contents = capture.with_emphasis(Emphasis::Content);
    assert_eq!(contents[0], format!("<< image: Png @ {} >>", png_path.display()));
    assert_eq!(contents[1], format!("<< image: Bmp @ {} >>", dib_path.display()));
}

#[test]
fn test_no_file_written_when_not_saving() {
    let dir = TempDir::new().unwrap();
    let jpeg = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];
    let renderer = Renderer::with_sink(false, TempImageStore::in_dir(dir.path()));

    let item = renderer.render("JFIF", &Payload::Bytes(jpeg)).unwrap();

    assert_eq!(item.content, "<< image: Jpeg >>");
    assert_eq!(item.signature, ImageSignature::Jpeg);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_auto_convert_produces_values() {
    let source = StaticSource::new()
        .with_bytes("text/plain;charset=utf-8", "naïve".as_bytes().to_vec())
        .with_bytes("text/uri-list", b"# copied\r\nfile:///home/u/a.png\r\n".to_vec())
        .with_bytes("image/png", PNG.to_vec());
    let mut capture = CapturePresenter::new();

    inspect(&source, &Renderer::new(false), true, &mut capture).unwrap();

    assert_eq!(
        capture.with_emphasis(Emphasis::Heading),
        vec![
            "text/plain;charset=utf-8 - 5 chars (text)",
            "text/uri-list - 20 chars (file-list)",
            "image/png - 20 chars (bytes)",
        ]
    );
    // Decoded values carry no byte preview
    assert_eq!(capture.with_emphasis(Emphasis::Preview).len(), 1);
}

#[test]
fn test_xml_prettified_in_report() {
    let source = StaticSource::new()
        .with_bytes("application/xml", b"<a><b/></a>".to_vec())
        .with_bytes("text/html", b"<p><br></p>".to_vec())
        .with_bytes("application/xhtml+xml", b"<p>Hello <b>world</b> again</p>".to_vec())
        .with_bytes("image/svg+xml", b"<svg w h=\"1\"/>".to_vec());
    let mut console = ConsolePresenter::new(Vec::new(), false);

    inspect(&source, &Renderer::new(false), false, &mut console).unwrap();

    let out = String::from_utf8(console.into_inner().unwrap()).unwrap();
    assert!(out.contains("[<a>\n  <b/>\n</a>]"));
    assert!(out.contains("[<p><br></p>]"));
    assert!(out.contains("[<p>Hello <b>world</b> again</p>]"));
    assert!(out.contains("[<svg w h=\"1\"/>]"));
}

proptest! {
    #[test]
    fn prop_any_payload_renders(
        format in "[A-Za-z /]{1,24}",
        data in proptest::collection::vec(any::<u8>(), 0..256),
    ) {
        let item = Renderer::new(false).render(&format, &Payload::Bytes(data.clone())).unwrap();
        prop_assert_eq!(item.byte_length, data.len());
        prop_assert!(item.saved_path.is_none());
        if let Some(preview) = &item.byte_preview {
            let pairs = if preview.is_empty() { 0 } else { preview.split(' ').count() };
            prop_assert_eq!(pairs, data.len().min(10));
        }
    }
}
