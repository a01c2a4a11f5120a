//! Document generation pipeline.
//!
//! Turns one validated intake record plus a list of requested documents into
//! a single ZIP archive of rendered `.docx` files:
//! - `locator` finds a template inside the nested templates tree
//! - `placeholders` maps the record into the `{{TAG}}` vocabulary
//! - `renderer` substitutes the tags into the template bytes
//! - `batch` drives the three above, one document at a time
//! - `archive` bundles the rendered documents
//! - `delivery` writes the archive where the user asked for it

pub mod archive;
pub mod batch;
pub mod catalogo;
pub mod common;
pub mod delivery;
pub mod locator;
pub mod placeholders;
pub mod renderer;

pub use archive::{Archiver, ZipArchiver};
pub use batch::generate_batch;
pub use catalogo::{catalogo, DocumentoPedido, DocumentosSelecionados};
pub use delivery::{deliver, DestinoFixo, SavePrompt};
pub use locator::{locate_template, RealTemplateFs, TemplateFs};
pub use placeholders::{build_placeholders, PlaceholderMap};
pub use renderer::{DocxRenderer, Renderer};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Errors that can occur while generating a batch of documents.
#[derive(Debug, Error)]
pub enum DocGenError {
    #[error("template not found: {0}")]
    TemplateNotFound(String),
    #[error("failed to read template {caminho}: {fonte}")]
    TemplateIo {
        caminho: String,
        #[source]
        fonte: std::io::Error,
    },
    #[error("failed to render document: {0}")]
    Render(String),
    #[error("failed to build archive: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("failed to write archive: {0}")]
    Delivery(#[source] std::io::Error),
}

/// One successfully rendered document, ready to enter the archive.
#[derive(Debug, Clone)]
pub struct DocumentoGerado {
    /// Archive entry name, with the `.docx` extension.
    pub nome: String,
    pub bytes: Vec<u8>,
}

/// Outcome of one generation action, as reported back to the UI.
///
/// Mirrors the notification channel the form listens on: exactly one
/// variant holds per invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResultadoGeracao {
    /// Archive written to the confirmed destination.
    Sucesso { path: String },
    /// The save prompt was dismissed; nothing was written.
    Cancelado,
    /// Every requested document failed locate or render.
    Vazio,
    Falha { mensagem: String },
}
