use std::fs::{self, File};

use scout_core::MediaType;
use scout_engine::{encode_bytes, encode_file, EncodeError, MAX_ATTACHMENT_BYTES};
use tempfile::TempDir;

#[test]
fn bytes_use_padded_standard_alphabet() {
    let attachment = encode_bytes(&[0xfb, 0xff, 0x01], MediaType::Png);
    assert_eq!(attachment.data, "+/8B");
    assert_eq!(attachment.media_type, MediaType::Png);

    assert_eq!(encode_bytes(b"%PDF-", MediaType::Pdf).data, "JVBERi0=");
}

#[tokio::test]
async fn file_content_is_encoded() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("resume.pdf");
    fs::write(&path, b"%PDF-1.7").unwrap();

    let attachment = encode_file(&path, MediaType::Pdf).await.unwrap();
    assert_eq!(attachment.data, "JVBERi0xLjc=");
    assert_eq!(attachment.media_type.mime(), "application/pdf");
}

#[tokio::test]
async fn missing_file_is_a_read_error() {
    let temp = TempDir::new().unwrap();
    let err = encode_file(&temp.path().join("absent.pdf"), MediaType::Pdf)
        .await
        .unwrap_err();
    assert!(matches!(err, EncodeError::Read { .. }));
}

#[tokio::test]
async fn empty_file_is_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("blank.png");
    fs::write(&path, b"").unwrap();

    let err = encode_file(&path, MediaType::Png).await.unwrap_err();
    assert!(matches!(err, EncodeError::Empty { .. }));
}

#[tokio::test]
async fn oversized_file_is_rejected_before_reading() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("scan.pdf");
    File::create(&path)
        .unwrap()
        .set_len(MAX_ATTACHMENT_BYTES + 1)
        .unwrap();

    match encode_file(&path, MediaType::Pdf).await.unwrap_err() {
        EncodeError::TooLarge {
            actual, max_bytes, ..
        } => {
            assert_eq!(actual, MAX_ATTACHMENT_BYTES + 1);
            assert_eq!(max_bytes, MAX_ATTACHMENT_BYTES);
        }
        other => panic!("unexpected error {other:?}"),
    }
}
