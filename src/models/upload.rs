/// One field of a submitted upload form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormField {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        content_type: Option<String>,
        data: Vec<u8>,
    },
}

impl FormField {
    pub fn name(&self) -> &str {
        match self {
            FormField::Text { name, .. } | FormField::File { name, .. } => name,
        }
    }
}

/// Every field of the upload form, in submission order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadForm {
    pub fields: Vec<FormField>,
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        content_type: Option<String>,
        data: Vec<u8>,
    ) -> Self {
        self.fields.push(FormField::File {
            name: name.into(),
            file_name: file_name.into(),
            content_type,
            data,
        });
        self
    }

    pub fn with_text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(FormField::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Total bytes of file content carried by the form.
    pub fn file_bytes(&self) -> usize {
        self.fields
            .iter()
            .map(|f| match f {
                FormField::File { data, .. } => data.len(),
                FormField::Text { .. } => 0,
            })
            .sum()
    }
}
