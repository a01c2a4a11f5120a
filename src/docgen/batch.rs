//! Batch aggregation: one pass over the requested documents.

use std::path::Path;

use chrono::NaiveDate;

use crate::atendimento::models::ClienteData;
use crate::config::ModoLote;

use super::catalogo::DocumentoPedido;
use super::locator::{locate_template, TemplateFs};
use super::placeholders::{build_placeholders, PlaceholderMap};
use super::renderer::Renderer;
use super::{DocGenError, DocumentoGerado};

/// Render every requested document, in the caller-supplied order.
///
/// The placeholder map is built once per batch, so every document shares
/// the same field values and the same long-form date. In `Tolerante` mode a
/// document whose template cannot be located or rendered is logged and
/// skipped; `Estrito` aborts the batch on the first failure. An empty
/// return means nothing was generated — the caller decides what that means.
pub fn generate_batch<F: TemplateFs, R: Renderer>(
    pedidos: &[DocumentoPedido],
    cliente: &ClienteData,
    raiz: &Path,
    fs: &F,
    renderer: &R,
    hoje: NaiveDate,
    modo: ModoLote,
) -> Result<Vec<DocumentoGerado>, DocGenError> {
    let campos = build_placeholders(cliente, hoje);
    let mut gerados = Vec::with_capacity(pedidos.len());

    for pedido in pedidos {
        match render_pedido(pedido, &campos, raiz, fs, renderer) {
            Ok(documento) => gerados.push(documento),
            Err(e) => match modo {
                ModoLote::Estrito => return Err(e),
                ModoLote::Tolerante => {
                    log::warn!("pulando documento '{}': {}", pedido.nome_arquivo, e);
                }
            },
        }
    }

    Ok(gerados)
}

fn render_pedido<F: TemplateFs, R: Renderer>(
    pedido: &DocumentoPedido,
    campos: &PlaceholderMap,
    raiz: &Path,
    fs: &F,
    renderer: &R,
) -> Result<DocumentoGerado, DocGenError> {
    let caminho = locate_template(fs, raiz, Path::new(&pedido.template))
        .ok_or_else(|| DocGenError::TemplateNotFound(pedido.template.clone()))?;
    let template = fs.ler(&caminho).map_err(|fonte| DocGenError::TemplateIo {
        caminho: caminho.display().to_string(),
        fonte,
    })?;
    let bytes = renderer.render(&template, campos)?;

    Ok(DocumentoGerado {
        nome: format!("{}.docx", sanitize_filename::sanitize(&pedido.nome_arquivo)),
        bytes,
    })
}
