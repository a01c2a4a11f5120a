//! Template rendering engine.
//!
//! A `.docx` template is a ZIP of XML parts. The engine rewrites the text
//! parts (body, headers, footers, notes), substituting `{{TAG}}` markers
//! with the batch's placeholder values, and copies every other entry
//! through untouched.

use std::io::{Cursor, Read, Write};

use lazy_static::lazy_static;
use regex::Regex;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use super::placeholders::PlaceholderMap;
use super::DocGenError;

/// Substitution engine seam. Any conformant implementation may stand in;
/// `DocxRenderer` is the in-tree one.
pub trait Renderer {
    fn render(&self, template: &[u8], campos: &PlaceholderMap) -> Result<Vec<u8>, DocGenError>;
}

lazy_static! {
    // Word splits text runs arbitrarily, so a tag may arrive as
    // `{{NO</w:t>...<w:t>ME}}`; the pattern lets XML markup sit between the
    // braces and the markup is stripped before the name is resolved.
    static ref TAG_RE: Regex = Regex::new(r"\{\{((?:[^{}<]|<[^>]*>)*?)\}\}").unwrap();
    static ref XML_MARKUP_RE: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// Stateless engine rendering `.docx` templates in memory.
pub struct DocxRenderer;

impl Renderer for DocxRenderer {
    fn render(&self, template: &[u8], campos: &PlaceholderMap) -> Result<Vec<u8>, DocGenError> {
        let mut origem = ZipArchive::new(Cursor::new(template))
            .map_err(|e| DocGenError::Render(format!("invalid docx container: {e}")))?;
        let mut saida = ZipWriter::new(Cursor::new(Vec::new()));
        let opcoes = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for indice in 0..origem.len() {
            let mut entrada = origem
                .by_index(indice)
                .map_err(|e| DocGenError::Render(e.to_string()))?;
            let nome = entrada.name().to_string();

            if entrada.is_dir() {
                saida
                    .add_directory(nome, opcoes)
                    .map_err(|e| DocGenError::Render(e.to_string()))?;
                continue;
            }

            let mut bytes = Vec::with_capacity(entrada.size() as usize);
            entrada
                .read_to_end(&mut bytes)
                .map_err(|e| DocGenError::Render(format!("cannot read part {nome}: {e}")))?;

            let conteudo = if parte_de_texto(&nome) {
                let xml = String::from_utf8(bytes).map_err(|_| {
                    DocGenError::Render(format!("part {nome} is not valid UTF-8"))
                })?;
                substituir_tags(&xml, campos)
                    .map_err(DocGenError::Render)?
                    .into_bytes()
            } else {
                bytes
            };

            saida
                .start_file(nome, opcoes)
                .map_err(|e| DocGenError::Render(e.to_string()))?;
            saida
                .write_all(&conteudo)
                .map_err(|e| DocGenError::Render(e.to_string()))?;
        }

        let cursor = saida
            .finish()
            .map_err(|e| DocGenError::Render(e.to_string()))?;
        Ok(cursor.into_inner())
    }
}

/// Parts that carry document text and therefore placeholder tags.
fn parte_de_texto(nome: &str) -> bool {
    nome == "word/document.xml"
        || nome == "word/footnotes.xml"
        || nome == "word/endnotes.xml"
        || (nome.starts_with("word/header") && nome.ends_with(".xml"))
        || (nome.starts_with("word/footer") && nome.ends_with(".xml"))
}

/// Substitute every `{{TAG}}` in one XML part.
///
/// A tag naming something outside the vocabulary, or a stray `{{` / `}}`
/// left over in the template, is a render failure carried up as a message.
fn substituir_tags(xml: &str, campos: &PlaceholderMap) -> Result<String, String> {
    let mut saida = String::with_capacity(xml.len());
    let mut ultimo = 0;

    for captura in TAG_RE.captures_iter(xml) {
        let inteiro = captura.get(0).expect("group 0 always present");
        let bruto = captura.get(1).expect("group 1 always present").as_str();
        let interno = XML_MARKUP_RE.replace_all(bruto, "");
        let nome = interno.trim();
        let valor = campos
            .get(nome)
            .ok_or_else(|| format!("unresolved tag {{{{{nome}}}}}"))?;

        let intervalo = &xml[ultimo..inteiro.start()];
        checar_delimitador_solto(intervalo)?;
        saida.push_str(intervalo);
        saida.push_str(&valor_para_xml(valor));
        ultimo = inteiro.end();
    }

    let resto = &xml[ultimo..];
    checar_delimitador_solto(resto)?;
    saida.push_str(resto);
    Ok(saida)
}

fn checar_delimitador_solto(trecho: &str) -> Result<(), String> {
    if trecho.contains("{{") || trecho.contains("}}") {
        return Err("unbalanced {{ }} delimiter in template".to_string());
    }
    Ok(())
}

/// Escape a placeholder value for insertion into a `<w:t>` run, turning
/// newlines into explicit run breaks.
fn valor_para_xml(valor: &str) -> String {
    let escapado = escape_xml(&valor.replace('\r', ""));
    escapado.replace('\n', "</w:t><w:br/><w:t xml:space=\"preserve\">")
}

fn escape_xml(texto: &str) -> String {
    texto
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
