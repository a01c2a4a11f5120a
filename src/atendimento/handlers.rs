//! HTTP boundary for the generation pipeline.

use std::path::PathBuf;

use actix_web::{web, HttpResponse, Responder};
use chrono::Local;
use uuid::Uuid;

use crate::docgen::archive::{Archiver, ZipArchiver};
use crate::docgen::batch::generate_batch;
use crate::docgen::catalogo::{catalogo, DocumentoPedido};
use crate::docgen::delivery::{deliver, DestinoFixo, NOME_ARQUIVO_PADRAO};
use crate::docgen::locator::RealTemplateFs;
use crate::docgen::renderer::DocxRenderer;
use crate::docgen::ResultadoGeracao;
use crate::{AppState, ErrorResponse};

use super::models::GerarDocumentosRequest;
use super::validation::validate_cliente;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/documentos/gerar").route(web::post().to(gerar_documentos)))
        .service(web::resource("/documentos/catalogo").route(web::get().to(listar_catalogo)));
}

#[utoipa::path(
    context_path = "/api",
    tag = "Documentos",
    get,
    path = "/documentos/catalogo",
    responses(
        (status = 200, description = "Catálogo fixo de documentos geráveis", body = [DocumentoPedido])
    )
)]
pub async fn listar_catalogo() -> impl Responder {
    HttpResponse::Ok().json(catalogo())
}

#[utoipa::path(
    context_path = "/api",
    tag = "Documentos",
    post,
    path = "/documentos/gerar",
    request_body = GerarDocumentosRequest,
    responses(
        (status = 200, description = "Arquivo ZIP (download) ou ResultadoGeracao (com salvar_em)", body = ResultadoGeracao),
        (status = 400, description = "Dados inválidos ou nenhum documento selecionado", body = ErrorResponse),
        (status = 409, description = "Já existe uma geração em andamento", body = ErrorResponse),
        (status = 422, description = "Lote abortado em modo estrito", body = ResultadoGeracao)
    )
)]
pub async fn gerar_documentos(
    req: web::Json<GerarDocumentosRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    if let Err(mensagem) = validate_cliente(&req.cliente) {
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request(&mensagem));
    }

    let pedidos = req.documentos.pedidos();
    if pedidos.is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request(
            "Selecione pelo menos um tipo de documento para gerar",
        ));
    }

    // One batch at a time; the form also disables its submit while waiting.
    let Some(_guarda) = data.lote_em_andamento.try_lock() else {
        return HttpResponse::Conflict().json(ErrorResponse::conflict(
            "Já existe uma geração de documentos em andamento",
        ));
    };

    let lote_id = Uuid::new_v4();
    log::info!("[{lote_id}] gerando lote com {} documento(s)", pedidos.len());

    // Single clock read per batch; the whole pipeline sees the same day.
    let hoje = Local::now().date_naive();

    let documentos = match generate_batch(
        &pedidos,
        &req.cliente,
        &data.config.templates_dir,
        &RealTemplateFs,
        &DocxRenderer,
        hoje,
        data.config.modo,
    ) {
        Ok(documentos) => documentos,
        Err(e) => {
            log::error!("[{lote_id}] lote abortado: {e}");
            return HttpResponse::UnprocessableEntity().json(ResultadoGeracao::Falha {
                mensagem: e.to_string(),
            });
        }
    };

    if documentos.is_empty() {
        log::warn!("[{lote_id}] nenhum documento gerado");
        return HttpResponse::Ok().json(ResultadoGeracao::Vazio);
    }

    let arquivo = match ZipArchiver.pack(&documentos) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::error!("[{lote_id}] falha ao montar o arquivo: {e}");
            return HttpResponse::InternalServerError().json(ResultadoGeracao::Falha {
                mensagem: e.to_string(),
            });
        }
    };
    log::info!(
        "[{lote_id}] {} documento(s) empacotado(s) ({} bytes)",
        documentos.len(),
        arquivo.len()
    );

    match req.salvar_em {
        Some(caminho) => {
            let resultado = deliver(&arquivo, &DestinoFixo(PathBuf::from(caminho)));
            HttpResponse::Ok().json(resultado)
        }
        None => HttpResponse::Ok()
            .content_type("application/zip")
            .insert_header((
                "Content-Disposition",
                format!("attachment; filename=\"{NOME_ARQUIVO_PADRAO}\""),
            ))
            .body(arquivo),
    }
}
