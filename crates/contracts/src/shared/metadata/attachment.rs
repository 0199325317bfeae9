use serde::{Deserialize, Serialize};

/// Файл, приложенный к форме (резюме)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    /// Base64 file content; empty in summaries
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content_base64: String,
}

impl Attachment {
    /// Lowercased extension without the dot
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.file_name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_lowercase())
    }
}

/// Rules for an attached file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachmentRules {
    pub required: bool,
    pub allowed_extensions: &'static [&'static str],
    pub allowed_mime_types: &'static [&'static str],
    pub max_size_bytes: u64,
}

impl AttachmentRules {
    pub fn validate(&self, attachment: Option<&Attachment>, field_label: &str) -> Result<(), String> {
        let file = match attachment {
            Some(f) => f,
            None if self.required => return Err(format!("{} is required", field_label)),
            None => return Ok(()),
        };

        let ext_ok = file
            .extension()
            .map(|ext| self.allowed_extensions.iter().any(|allowed| *allowed == ext))
            .unwrap_or(false);
        let mime = file.mime_type.to_lowercase();
        let mime_ok = self.allowed_mime_types.iter().any(|allowed| *allowed == mime);
        if !ext_ok || !mime_ok {
            return Err(format!(
                "{} must be one of: {}",
                field_label,
                self.allowed_extensions.join(", ")
            ));
        }

        if file.size_bytes == 0 {
            return Err(format!("{} is empty", field_label));
        }
        if file.size_bytes > self.max_size_bytes {
            return Err(format!(
                "{} must be smaller than {} MB",
                field_label,
                self.max_size_bytes / (1024 * 1024)
            ));
        }

        Ok(())
    }
}
