//! Delivery of the finished archive.

use std::path::PathBuf;

use super::ResultadoGeracao;

/// Default name offered in the save prompt.
pub const NOME_ARQUIVO_PADRAO: &str = "documentos.zip";
/// The single extension the prompt accepts.
pub const EXTENSAO_ARQUIVO: &str = "zip";

/// Save-location prompt seam.
///
/// The interactive dialog lives in the UI; the pipeline only sees its
/// outcome. `None` means the user dismissed the prompt.
pub trait SavePrompt {
    fn escolher(&self, nome_padrao: &str, extensao: &str) -> Option<PathBuf>;
}

/// Prompt whose answer was already given, used when the UI ran its own
/// dialog and handed us the confirmed destination.
pub struct DestinoFixo(pub PathBuf);

impl SavePrompt for DestinoFixo {
    fn escolher(&self, _nome_padrao: &str, _extensao: &str) -> Option<PathBuf> {
        Some(self.0.clone())
    }
}

/// Write the archive to the destination the prompt yields.
///
/// Cancelling writes nothing; a filesystem failure surfaces with the
/// underlying message and the archive bytes are discarded, never retried.
pub fn deliver(arquivo: &[u8], prompt: &dyn SavePrompt) -> ResultadoGeracao {
    let Some(destino) = prompt.escolher(NOME_ARQUIVO_PADRAO, EXTENSAO_ARQUIVO) else {
        log::info!("gravação cancelada pelo usuário");
        return ResultadoGeracao::Cancelado;
    };

    match std::fs::write(&destino, arquivo) {
        Ok(()) => {
            log::info!("arquivo gravado em {}", destino.display());
            ResultadoGeracao::Sucesso {
                path: destino.display().to_string(),
            }
        }
        Err(e) => {
            log::error!("falha ao gravar {}: {}", destino.display(), e);
            ResultadoGeracao::Falha {
                mensagem: format!("falha ao gravar o arquivo: {e}"),
            }
        }
    }
}
