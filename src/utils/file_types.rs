// Lista blanca de justificativos aceptados al crear una nota

const ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];
const ALLOWED_MIME_TYPES: [&str; 3] = ["image/jpeg", "image/jpg", "image/png"];

/// Extensión en minúsculas, sin el punto
pub fn extension(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Extensión y tipo MIME deben estar ambos en la lista blanca
pub fn is_allowed(file_name: &str, content_type: &str) -> bool {
    let ext_ok = extension(file_name)
        .map(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false);
    let mime_ok = ALLOWED_MIME_TYPES.contains(&content_type.to_ascii_lowercase().as_str());
    ext_ok && mime_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_images() {
        assert!(is_allowed("test.png", "image/png"));
        assert!(is_allowed("scan.JPG", "image/jpeg"));
        assert!(is_allowed("facture.jpeg", "image/jpeg"));
    }

    #[test]
    fn rejects_documents_and_spoofed_names() {
        assert!(!is_allowed("test.pdf", "application/pdf"));
        assert!(!is_allowed("text.txt", "text/plain"));
        assert!(!is_allowed("test.png", "application/pdf"));
        assert!(!is_allowed("png", "image/png"));
        assert!(!is_allowed(".png", "image/png"));
    }
}
