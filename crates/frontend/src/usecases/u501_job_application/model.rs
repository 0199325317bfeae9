use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use contracts::shared::metadata::Attachment;
use wasm_bindgen_futures::JsFuture;

/// Browsers leave `File.type` empty for some Office formats
pub fn mime_for(file_name: &str, reported: &str) -> String {
    if !reported.is_empty() {
        return reported.to_string();
    }
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
    .to_string()
}

/// Read the picked file and encode it for the JSON request
pub async fn read_attachment(file: web_sys::File) -> Result<Attachment, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read file: {:?}", e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let file_name = file.name();

    Ok(Attachment {
        mime_type: mime_for(&file_name, &file.type_()),
        file_name,
        size_bytes: bytes.len() as u64,
        content_base64: STANDARD.encode(&bytes),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for_prefers_reported_type() {
        assert_eq!(mime_for("cv.pdf", "application/pdf"), "application/pdf");
        assert_eq!(mime_for("cv.bin", "text/plain"), "text/plain");
    }

    #[test]
    fn test_mime_for_guesses_from_extension() {
        assert_eq!(mime_for("CV.DOC", ""), "application/msword");
        assert_eq!(
            mime_for("cv.docx", ""),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
        assert_eq!(mime_for("cv", ""), "application/octet-stream");
    }
}
