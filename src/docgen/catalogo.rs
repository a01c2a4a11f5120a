//! The fixed catalog of documents the office can generate.
//!
//! Twelve entries, each gated by one checkbox of the intake form. The
//! template paths name the category subfolders the office keeps its
//! `.docx` models in; the locator falls back to a recursive search when a
//! model gets moved.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One requested document: archive display name + template relative path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DocumentoPedido {
    pub nome_arquivo: String,
    pub template: String,
}

const CATALOGO: [(&str, &str); 12] = [
    ("Ficha_Atendimento", "ficha-modelo.docx"),
    ("Procuração", "procuracao-modelo.docx"),
    (
        "Procuração_INSS_Efigenia_Camilo",
        "procuracao_inss/PROCURACAO_INSS_EFIGENIA.docx",
    ),
    (
        "Procuração_INSS_Marta_Silva",
        "procuracao_inss/PROCURACAO_INSS_MARTA_SILVA.docx",
    ),
    (
        "Contrato_Entrada_INSS",
        "contrato_inss/CONTRATO_INSS_JUDICIAL_Entrada_modelo.docx",
    ),
    (
        "Contrato_Planejamento_INSS",
        "contrato_inss/CONTRATO_INSS_JUDICIAL_Planejamento_modelo.docx",
    ),
    (
        "Contrato_30%_INSS",
        "contrato_inss/CONTRATO_INSS_JUDICIAL_30_modelo.docx",
    ),
    (
        "Contrato_RMI_INSS",
        "contrato_inss/CONTRATO_INSS_JUDICIAL_RMIs_modelo.docx",
    ),
    ("Termo_OAB_INSS", "termo_oab_inss/TERMO_OAB_INSS.docx"),
    ("Declaração_INSS", "declaracao_inss/DECLARACAO_INSS.docx"),
    (
        "Requerimento",
        "requerimento_inss/REQUERIMENTO_INSS_TEMPLATE.docx",
    ),
    ("Recibo", "recibo/RECIBO.docx"),
];

/// The full catalog, in the fixed order the form lists it.
pub fn catalogo() -> Vec<DocumentoPedido> {
    CATALOGO
        .iter()
        .map(|(nome_arquivo, template)| DocumentoPedido {
            nome_arquivo: nome_arquivo.to_string(),
            template: template.to_string(),
        })
        .collect()
}

/// The form's generation checkboxes, one flag per catalog entry.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct DocumentosSelecionados {
    pub ficha_atendimento: bool,
    pub procuracao: bool,
    pub procuracao_inss_efigenia: bool,
    pub procuracao_inss_marta: bool,
    pub contrato_entrada: bool,
    pub contrato_planejamento: bool,
    pub contrato_30: bool,
    pub contrato_rmi: bool,
    pub termo_oab_inss: bool,
    pub declaracao_inss: bool,
    pub requerimento: bool,
    pub recibo: bool,
}

impl DocumentosSelecionados {
    /// The selected documents, in catalog order.
    pub fn pedidos(&self) -> Vec<DocumentoPedido> {
        let marcados = [
            self.ficha_atendimento,
            self.procuracao,
            self.procuracao_inss_efigenia,
            self.procuracao_inss_marta,
            self.contrato_entrada,
            self.contrato_planejamento,
            self.contrato_30,
            self.contrato_rmi,
            self.termo_oab_inss,
            self.declaracao_inss,
            self.requerimento,
            self.recibo,
        ];
        catalogo()
            .into_iter()
            .zip(marcados)
            .filter(|(_, marcado)| *marcado)
            .map(|(pedido, _)| pedido)
            .collect()
    }

    /// The "select all" toggle of the form.
    pub fn todos() -> Self {
        Self {
            ficha_atendimento: true,
            procuracao: true,
            procuracao_inss_efigenia: true,
            procuracao_inss_marta: true,
            contrato_entrada: true,
            contrato_planejamento: true,
            contrato_30: true,
            contrato_rmi: true,
            termo_oab_inss: true,
            declaracao_inss: true,
            requerimento: true,
            recibo: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogo_tem_doze_entradas() {
        assert_eq!(catalogo().len(), 12);
    }

    #[test]
    fn test_nenhuma_selecao_nenhum_pedido() {
        assert!(DocumentosSelecionados::default().pedidos().is_empty());
    }

    #[test]
    fn test_todos_cobre_o_catalogo() {
        assert_eq!(DocumentosSelecionados::todos().pedidos(), catalogo());
    }

    #[test]
    fn test_pedidos_preservam_ordem_do_catalogo() {
        let selecao = DocumentosSelecionados {
            recibo: true,
            ficha_atendimento: true,
            contrato_30: true,
            ..DocumentosSelecionados::default()
        };
        let pedidos = selecao.pedidos();
        let nomes: Vec<&str> = pedidos.iter().map(|p| p.nome_arquivo.as_str()).collect();
        assert_eq!(nomes, ["Ficha_Atendimento", "Contrato_30%_INSS", "Recibo"]);
    }

    #[test]
    fn test_desserializa_flags_parciais() {
        let selecao: DocumentosSelecionados =
            serde_json::from_str(r#"{"procuracao": true}"#).unwrap();
        let pedidos = selecao.pedidos();
        assert_eq!(pedidos.len(), 1);
        assert_eq!(pedidos[0].template, "procuracao-modelo.docx");
    }
}
