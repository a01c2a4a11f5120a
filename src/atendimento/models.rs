//! Intake form data as the UI submits it.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::docgen::catalogo::DocumentosSelecionados;

/// One client's intake record, snapshotted at submit time.
///
/// Every field is a string; the form sends empty strings for whatever was
/// left blank, and absent JSON fields default to the same, so a blank field
/// can never reach a document as a "missing" marker. Date fields carry the
/// ISO form the date inputs produce. Records are never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ClienteData {
    pub nome_completo: String,
    pub cpf: String,
    pub rg: String,
    pub cep: String,
    pub cidade: String,
    pub bairro: String,
    pub rua: String,
    pub numero: String,
    pub complemento: String,
    pub telefone: String,
    pub estado_civil: String,
    pub sexo: String,
    pub uf: String,
    /// ISO date (`YYYY-MM-DD`).
    pub data_nascimento: String,
    /// ISO date; the form fills it with the submission day.
    pub data_atendimento: String,
    pub profissao: String,
    /// Objeto / pretensão da ação.
    pub pretensao: String,
    pub fatos: String,
    pub doc_rg_cpf: String,
    pub doc_comprovatorios: String,
    pub doc_comprov_residencia: String,
    pub acao: String,
    /// ISO date do retorno/acompanhamento, se houver.
    pub retorno: String,
}

/// One "generate" action: the record, the checked boxes and, when the UI
/// already ran its save dialog, the confirmed destination.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct GerarDocumentosRequest {
    pub cliente: ClienteData,
    #[serde(default)]
    pub documentos: DocumentosSelecionados,
    /// Destination path; absent means the caller wants the archive streamed
    /// back as a download instead.
    #[serde(default)]
    pub salvar_em: Option<String>,
}
