//! Builds the placeholder map one template tag at a time.
//!
//! The vocabulary is fixed: every tag the templates know gets a value here,
//! empty string when the form field was left blank. A blank field must never
//! leak a "missing" marker into a rendered document.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::atendimento::models::ClienteData;

use super::common::{format_cpf, format_data_br, format_data_extenso, format_rg};

/// Tag name -> substitution value for one batch.
pub type PlaceholderMap = BTreeMap<String, String>;

/// Derive the full placeholder map from one intake record.
///
/// `hoje` is injected by the caller (a single clock read per batch) so the
/// long-form DATA_EXTENSO is identical across every document of the batch
/// and reproducible in tests.
pub fn build_placeholders(cliente: &ClienteData, hoje: NaiveDate) -> PlaceholderMap {
    let mut campos = PlaceholderMap::new();
    let mut poe = |nome: &str, valor: String| {
        campos.insert(nome.to_string(), valor);
    };

    poe("NOME", cliente.nome_completo.trim().to_uppercase());
    poe("CPF", format_cpf(&cliente.cpf));
    poe("RG", format_rg(&cliente.rg));
    poe("CEP", cliente.cep.trim().to_string());
    poe("CIDADE", cliente.cidade.trim().to_string());
    poe("BAIRRO", cliente.bairro.trim().to_string());
    poe("RUA", cliente.rua.trim().to_string());
    poe("NUMERO", cliente.numero.trim().to_string());
    poe("TELEFONE", cliente.telefone.trim().to_string());
    poe("ESTADO_CIVIL", cliente.estado_civil.trim().to_string());
    poe("SEXO", cliente.sexo.trim().to_string());
    poe("UF", cliente.uf.trim().to_string());
    poe("DATA_NASC", format_data_br(&cliente.data_nascimento));
    poe("DATA_ATENDIMENTO", format_data_br(&cliente.data_atendimento));
    poe("PROFISSAO", cliente.profissao.trim().to_string());
    poe("PRETENSAO", cliente.pretensao.trim().to_string());
    poe("FATOS", cliente.fatos.trim().to_string());
    poe("DOC_RG_CPF", cliente.doc_rg_cpf.trim().to_string());
    poe(
        "DOC_COMPROVATORIOS",
        cliente.doc_comprovatorios.trim().to_string(),
    );
    poe(
        "DOC_COMPROV_RESIDENCIA",
        cliente.doc_comprov_residencia.trim().to_string(),
    );
    poe("ACAO", cliente.acao.trim().to_string());
    poe("RETORNO", format_data_br(&cliente.retorno));
    poe("ENDERECO_COMPLETO", endereco_completo(cliente));
    poe("DATA_EXTENSO", format_data_extenso(hoje));

    campos
}

/// Compose the one-line full address, skipping every blank segment so no
/// dangling ", " or " - " separator survives.
fn endereco_completo(cliente: &ClienteData) -> String {
    let mut endereco = String::new();

    let rua = cliente.rua.trim();
    if !rua.is_empty() {
        endereco.push_str(rua);
    }
    let numero = cliente.numero.trim();
    if !numero.is_empty() {
        if !endereco.is_empty() {
            endereco.push_str(", ");
        }
        endereco.push_str(numero);
    }
    let complemento = cliente.complemento.trim();
    if !complemento.is_empty() {
        if !endereco.is_empty() {
            endereco.push_str(" - ");
        }
        endereco.push_str(complemento);
    }
    for segmento in [
        cliente.bairro.trim(),
        cliente.cidade.trim(),
        cliente.cep.trim(),
    ] {
        if !segmento.is_empty() {
            if !endereco.is_empty() {
                endereco.push_str(", ");
            }
            endereco.push_str(segmento);
        }
    }

    endereco
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hoje() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    fn cliente_base() -> ClienteData {
        ClienteData {
            nome_completo: "Maria da Silva".to_string(),
            cpf: "12345678901".to_string(),
            cep: "12345-678".to_string(),
            telefone: "(11) 98765-4321".to_string(),
            ..ClienteData::default()
        }
    }

    #[test]
    fn test_vocabulario_completo_sem_marcadores_de_ausencia() {
        let campos = build_placeholders(&ClienteData::default(), hoje());
        assert_eq!(campos.len(), 24);
        for (nome, valor) in &campos {
            assert_ne!(valor, "undefined", "campo {nome}");
            assert_ne!(valor, "null", "campo {nome}");
        }
        // Blank record -> blank values, not errors.
        assert_eq!(campos["NOME"], "");
        assert_eq!(campos["DATA_NASC"], "");
        assert_eq!(campos["ENDERECO_COMPLETO"], "");
    }

    #[test]
    fn test_nome_em_caixa_alta() {
        let campos = build_placeholders(&cliente_base(), hoje());
        assert_eq!(campos["NOME"], "MARIA DA SILVA");
    }

    #[test]
    fn test_cpf_formatado() {
        let campos = build_placeholders(&cliente_base(), hoje());
        assert_eq!(campos["CPF"], "123.456.789-01");
    }

    #[test]
    fn test_datas_formatadas() {
        let mut cliente = cliente_base();
        cliente.data_nascimento = "1990-01-03".to_string();
        cliente.data_atendimento = "2026-08-06".to_string();
        cliente.retorno = "nunca".to_string();
        let campos = build_placeholders(&cliente, hoje());
        assert_eq!(campos["DATA_NASC"], "03/01/1990");
        assert_eq!(campos["DATA_ATENDIMENTO"], "06/08/2026");
        assert_eq!(campos["RETORNO"], "");
    }

    #[test]
    fn test_data_extenso_vem_do_relogio_injetado() {
        let campos = build_placeholders(&cliente_base(), hoje());
        assert_eq!(campos["DATA_EXTENSO"], "6 de agosto de 2026");
        // Same injected date -> same value, however many times we build.
        let de_novo = build_placeholders(&ClienteData::default(), hoje());
        assert_eq!(campos["DATA_EXTENSO"], de_novo["DATA_EXTENSO"]);
    }

    #[test]
    fn test_endereco_completo() {
        let mut cliente = cliente_base();
        cliente.rua = "Avenida Getúlio Vargas".to_string();
        cliente.numero = "123".to_string();
        cliente.complemento = "Apto 45".to_string();
        cliente.bairro = "Centro".to_string();
        cliente.cidade = "Belo Horizonte".to_string();
        cliente.cep = "30000-000".to_string();
        let campos = build_placeholders(&cliente, hoje());
        assert_eq!(
            campos["ENDERECO_COMPLETO"],
            "Avenida Getúlio Vargas, 123 - Apto 45, Centro, Belo Horizonte, 30000-000"
        );
    }

    #[test]
    fn test_endereco_omite_segmentos_vazios() {
        let mut cliente = ClienteData::default();
        cliente.rua = "Rua A".to_string();
        cliente.bairro = "Centro".to_string();
        cliente.cidade = "X".to_string();
        cliente.cep = "00000-000".to_string();
        let campos = build_placeholders(&cliente, hoje());
        let endereco = &campos["ENDERECO_COMPLETO"];
        assert_eq!(endereco, "Rua A, Centro, X, 00000-000");
        assert!(!endereco.contains(",,"));
        assert!(!endereco.contains(", ,"));
        assert!(!endereco.contains("- ,"));
    }

    #[test]
    fn test_endereco_sem_rua() {
        let mut cliente = ClienteData::default();
        cliente.bairro = "Centro".to_string();
        cliente.cidade = "X".to_string();
        let campos = build_placeholders(&cliente, hoje());
        assert_eq!(campos["ENDERECO_COMPLETO"], "Centro, X");
    }
}
