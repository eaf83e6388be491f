//! `multipart/form-data` payloads.
//!
//! A `FormData` is sent as-is: the executor never JSON-encodes it. The
//! transport renders it with `reqwest::multipart`, which picks the boundary
//! and writes the matching `Content-Type` itself.

/// One named field of a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        filename: String,
        content_type: String,
        bytes: Vec<u8>,
    },
}

/// Builder for a multipart form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    parts: Vec<FormPart>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(FormPart::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn file(
        mut self,
        name: impl Into<String>,
        filename: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        self.parts.push(FormPart::File {
            name: name.into(),
            filename: filename.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        });
        self
    }

    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Build the reqwest form. Fails when a file part's content type is not
    /// a valid MIME type.
    pub fn to_multipart(&self) -> Result<reqwest::multipart::Form, reqwest::Error> {
        let mut form = reqwest::multipart::Form::new();
        for part in &self.parts {
            form = match part {
                FormPart::Text { name, value } => form.text(name.clone(), value.clone()),
                FormPart::File {
                    name,
                    filename,
                    content_type,
                    bytes,
                } => {
                    let part = reqwest::multipart::Part::bytes(bytes.clone())
                        .file_name(filename.clone())
                        .mime_str(content_type)?;
                    form.part(name.clone(), part)
                }
            };
        }
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts_keep_insertion_order() {
        let form = FormData::new()
            .text("title", "report")
            .file("upload", "a.txt", "text/plain", b"hello".to_vec());
        assert_eq!(form.len(), 2);
        assert!(!form.is_empty());
        assert_eq!(
            form.parts()[0],
            FormPart::Text {
                name: "title".to_string(),
                value: "report".to_string(),
            }
        );
        assert!(matches!(&form.parts()[1], FormPart::File { filename, .. } if filename == "a.txt"));
    }

    #[test]
    fn multipart_boundary_is_chosen_by_reqwest() {
        let form = FormData::new()
            .text("title", "report")
            .file("upload", "a.txt", "text/plain", b"hello".to_vec())
            .to_multipart()
            .unwrap();
        assert!(!form.boundary().is_empty());
    }

    #[test]
    fn content_type_with_line_break_is_rejected() {
        let result = FormData::new()
            .file("f", "a.txt", "text/plain\r\nX-Injected: 1", b"x".to_vec())
            .to_multipart();
        assert!(result.is_err());
    }

    #[test]
    fn empty_form_converts() {
        assert!(FormData::new().to_multipart().is_ok());
    }
}
