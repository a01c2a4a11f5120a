//! Helpers shared by the integration tests.

use std::io::{Cursor, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Build a minimal `.docx` whose body is the given `word/document.xml`.
pub fn docx_minimo(document_xml: &str) -> Vec<u8> {
    let mut escritor = ZipWriter::new(Cursor::new(Vec::new()));
    let opcoes = SimpleFileOptions::default();

    escritor.start_file("[Content_Types].xml", opcoes).unwrap();
    escritor
        .write_all(br#"<?xml version="1.0"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"/>"#)
        .unwrap();

    escritor.start_file("word/document.xml", opcoes).unwrap();
    escritor.write_all(document_xml.as_bytes()).unwrap();

    escritor.finish().unwrap().into_inner()
}

/// Write a minimal template at `caminho`, creating parent directories.
pub fn gravar_template(caminho: &Path, document_xml: &str) {
    if let Some(pai) = caminho.parent() {
        std::fs::create_dir_all(pai).unwrap();
    }
    std::fs::write(caminho, docx_minimo(document_xml)).unwrap();
}
