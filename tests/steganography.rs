use std::fs;

use lsb_stego::processing::{
    embed_text_bytes, extract_text_bytes, Extraction, ImageCodec, NotFoundReason, OutputFormat,
    PixelBuffer, PixelCodec,
};
use tempfile::TempDir;

fn cover(width: u32, height: u32) -> PixelBuffer {
    let samples = (0..width * height * 4).map(|i| (i * 31 % 256) as u8).collect();
    PixelBuffer::new(width, height, samples).unwrap()
}

fn cover_png(width: u32, height: u32) -> Vec<u8> {
    ImageCodec::default()
        .encode_buffer_to_image(&cover(width, height))
        .unwrap()
}

#[test]
fn test_embed_and_extract_png_bytes() {
    let image = cover_png(32, 32);

    let encoded = embed_text_bytes(&image, "Secret message").unwrap();
    let extraction = extract_text_bytes(&encoded).unwrap();

    assert_eq!(extraction, Extraction::Found("Secret message".to_string()));
}

#[test]
fn test_embed_keeps_dimensions() {
    let image = cover_png(10, 6);
    let encoded = embed_text_bytes(&image, "hi").unwrap();

    let pixels = ImageCodec::default().decode_image_to_buffer(&encoded).unwrap();
    assert_eq!((pixels.width(), pixels.height()), (10, 6));
}

#[test]
fn test_embed_too_large_for_image() {
    // 2x2 RGBA = 16 samples, room for one byte.
    let image = cover_png(2, 2);
    assert!(embed_text_bytes(&image, "too long").is_err());
}

#[test]
fn test_extract_from_non_image_fails() {
    assert!(extract_text_bytes(b"definitely not a png").is_err());
}

#[test]
fn test_extract_from_plain_image() {
    let samples = vec![0xFF; 8 * 8 * 4];
    let pixels = PixelBuffer::new(8, 8, samples).unwrap();
    let image = ImageCodec::default().encode_buffer_to_image(&pixels).unwrap();

    assert_eq!(
        extract_text_bytes(&image).unwrap(),
        Extraction::NotFound(NotFoundReason::Unterminated)
    );
}

#[test]
fn test_save_and_open_lossless_formats() {
    let dir = TempDir::new().unwrap();

    for format in [OutputFormat::Png, OutputFormat::Bmp, OutputFormat::Tiff] {
        let mut pixels = cover(12, 12);
        lsb_stego::processing::embed_text(&mut pixels, "across formats").unwrap();

        let path = dir.path().join(format!("fingerprint.{}", format.extension()));
        pixels.save(&path, format).unwrap();

        let reopened = PixelBuffer::open(&path).unwrap();
        assert_eq!(reopened, pixels, "{} did not preserve samples", format);
        assert_eq!(
            lsb_stego::processing::extract_text(&reopened),
            Extraction::Found("across formats".to_string())
        );
    }
}

#[test]
fn test_save_rejects_jpeg() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.jpg");

    assert!(cover(4, 4).save(&path, OutputFormat::Jpeg).is_err());
    assert!(fs::metadata(&path).is_err());
}
