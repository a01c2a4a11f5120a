//! In-memory ZIP packaging of a rendered batch.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::{DocGenError, DocumentoGerado};

/// Archive packaging seam; `ZipArchiver` is the in-tree implementation.
pub trait Archiver {
    fn pack(&self, documentos: &[DocumentoGerado]) -> Result<Vec<u8>, DocGenError>;
}

pub struct ZipArchiver;

impl Archiver for ZipArchiver {
    /// Bundle every rendered document into one deflate-compressed archive.
    ///
    /// An empty batch still packs to a valid, entryless ZIP; deciding what
    /// an empty batch means is the caller's job, not a packaging failure.
    fn pack(&self, documentos: &[DocumentoGerado]) -> Result<Vec<u8>, DocGenError> {
        let mut escritor = ZipWriter::new(Cursor::new(Vec::new()));
        let opcoes = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for documento in documentos {
            escritor.start_file(documento.nome.as_str(), opcoes)?;
            escritor
                .write_all(&documento.bytes)
                .map_err(|e| DocGenError::Archive(e.into()))?;
        }

        Ok(escritor.finish()?.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    #[test]
    fn test_pack_nomeia_entradas_pelo_documento() {
        let documentos = vec![
            DocumentoGerado {
                nome: "Ficha_Atendimento.docx".to_string(),
                bytes: b"um".to_vec(),
            },
            DocumentoGerado {
                nome: "Recibo.docx".to_string(),
                bytes: b"dois".to_vec(),
            },
        ];
        let bytes = ZipArchiver.pack(&documentos).unwrap();

        let mut zip = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(zip.len(), 2);
        let mut primeiro = zip.by_index(0).unwrap();
        assert_eq!(primeiro.name(), "Ficha_Atendimento.docx");
        let mut conteudo = Vec::new();
        primeiro.read_to_end(&mut conteudo).unwrap();
        assert_eq!(conteudo, b"um");
    }

    #[test]
    fn test_pack_lote_vazio_gera_zip_valido() {
        let bytes = ZipArchiver.pack(&[]).unwrap();
        let zip = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(zip.len(), 0);
    }
}
