//! Intake form validation.
//!
//! Generation only starts after the record passes here; messages are the
//! ones the form shows next to its fields, so they stay in Portuguese and
//! carry a fix suggestion where one helps.

use std::fmt;

use super::models::ClienteData;

/// Validation error with a user-facing message.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    fn empty_field(field: &str, label: &str) -> Self {
        Self::new(field, format!("{label} não pode ficar em branco"))
    }

    fn invalid_cpf(field: &str) -> Self {
        Self::new(field, "CPF deve ter 11 dígitos")
            .with_suggestion("Confira o CPF no documento, ex.: 123.456.789-01")
    }

    fn invalid_cep(field: &str) -> Self {
        Self::new(field, "CEP deve ter 8 dígitos")
            .with_suggestion("Use o formato 00000-000")
    }

    fn invalid_telefone(field: &str) -> Self {
        Self::new(field, "Telefone inválido")
            .with_suggestion("Informe DDD e número, ex.: (11) 98765-4321")
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, ". {}", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Accumulator for everything wrong with one submission.
#[derive(Debug, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Numbered report for the form's notification channel.
    pub fn to_message(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }

        let mut parts = vec![format!(
            "Validação falhou: {} erro(s) encontrado(s)\n",
            self.errors.len()
        )];
        for (i, error) in self.errors.iter().enumerate() {
            parts.push(format!("{}. {}", i + 1, error));
        }
        parts.join("\n")
    }

    pub fn into_result(self) -> Result<(), String> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self.to_message())
        }
    }
}

fn digitos(valor: &str) -> String {
    valor.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Validate that a string is not empty after trimming.
pub fn validate_required(value: &str, field: &str, label: &str, errors: &mut ValidationErrors) {
    if value.trim().is_empty() {
        errors.add(ValidationError::empty_field(field, label));
    }
}

/// CPF: exactly 11 digits once the mask is stripped.
pub fn validate_cpf(value: &str, field: &str, errors: &mut ValidationErrors) {
    if digitos(value).len() != 11 {
        errors.add(ValidationError::invalid_cpf(field));
    }
}

/// CEP: exactly 8 digits once the mask is stripped.
pub fn validate_cep(value: &str, field: &str, errors: &mut ValidationErrors) {
    if digitos(value).len() != 8 {
        errors.add(ValidationError::invalid_cep(field));
    }
}

/// Telefone: DDD plus number, at least 10 digits.
pub fn validate_telefone(value: &str, field: &str, errors: &mut ValidationErrors) {
    if digitos(value).len() < 10 {
        errors.add(ValidationError::invalid_telefone(field));
    }
}

/// Validate the whole record; Err carries the formatted report.
pub fn validate_cliente(cliente: &ClienteData) -> Result<(), String> {
    let mut errors = ValidationErrors::new();

    validate_required(
        &cliente.nome_completo,
        "nome_completo",
        "Nome completo",
        &mut errors,
    );
    validate_cpf(&cliente.cpf, "cpf", &mut errors);
    validate_cep(&cliente.cep, "cep", &mut errors);
    validate_telefone(&cliente.telefone, "telefone", &mut errors);

    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cliente_valido() -> ClienteData {
        ClienteData {
            nome_completo: "Maria da Silva".to_string(),
            cpf: "12345678901".to_string(),
            cep: "12345678".to_string(),
            telefone: "11987654321".to_string(),
            ..ClienteData::default()
        }
    }

    #[test]
    fn test_cliente_valido_passa() {
        assert!(validate_cliente(&cliente_valido()).is_ok());
    }

    #[test]
    fn test_mascaras_sao_aceitas() {
        let cliente = ClienteData {
            cpf: "123.456.789-01".to_string(),
            cep: "12345-678".to_string(),
            telefone: "(11) 98765-4321".to_string(),
            ..cliente_valido()
        };
        assert!(validate_cliente(&cliente).is_ok());
    }

    #[test]
    fn test_nome_em_branco_reprova() {
        let cliente = ClienteData {
            nome_completo: "   ".to_string(),
            ..cliente_valido()
        };
        let mensagem = validate_cliente(&cliente).unwrap_err();
        assert!(mensagem.contains("nome_completo"));
        assert!(mensagem.contains("em branco"));
    }

    #[test]
    fn test_cpf_curto_reprova() {
        let cliente = ClienteData {
            cpf: "1234567".to_string(),
            ..cliente_valido()
        };
        let mensagem = validate_cliente(&cliente).unwrap_err();
        assert!(mensagem.contains("[cpf]"));
        assert!(mensagem.contains("11 dígitos"));
    }

    #[test]
    fn test_erros_sao_acumulados() {
        let mensagem = validate_cliente(&ClienteData::default()).unwrap_err();
        assert!(mensagem.contains("4 erro(s)"));
        assert!(mensagem.contains("[cpf]"));
        assert!(mensagem.contains("[cep]"));
        assert!(mensagem.contains("[telefone]"));
    }

    #[test]
    fn test_telefone_dez_ou_mais_digitos() {
        let mut errors = ValidationErrors::new();
        validate_telefone("1187654321", "telefone", &mut errors);
        assert!(errors.is_empty());

        let mut errors = ValidationErrors::new();
        validate_telefone("118765432", "telefone", &mut errors);
        assert!(!errors.is_empty());
    }
}
