//! Shared formatting helpers for intake fields and dates.

use chrono::{DateTime, Datelike, NaiveDate};

/// Month names for the long-form date, lowercase as written in the documents.
const MESES: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Format a date in long Brazilian form (e.g. "6 de agosto de 2026").
pub fn format_data_extenso(data: NaiveDate) -> String {
    let mes = MESES[(data.month0() as usize).min(MESES.len() - 1)];
    format!("{} de {} de {}", data.day(), mes, data.year())
}

/// Reformat an ISO date string into the dd/mm/yyyy display form.
///
/// Date inputs arrive as `YYYY-MM-DD`; a few are piped through as full
/// RFC 3339 timestamps. Anything unparsable yields an empty string.
pub fn format_data_br(entrada: &str) -> String {
    let entrada = entrada.trim();
    if entrada.is_empty() {
        return String::new();
    }
    if let Ok(data) = NaiveDate::parse_from_str(entrada, "%Y-%m-%d") {
        return data.format("%d/%m/%Y").to_string();
    }
    if let Ok(data) = DateTime::parse_from_rfc3339(entrada) {
        return data.date_naive().format("%d/%m/%Y").to_string();
    }
    String::new()
}

/// Canonical CPF display form (`000.000.000-00`).
///
/// Accepts raw or already-masked input; anything that does not hold exactly
/// 11 digits is passed through trimmed.
pub fn format_cpf(cpf: &str) -> String {
    let digitos: String = cpf.chars().filter(|c| c.is_ascii_digit()).collect();
    if digitos.len() != 11 {
        return cpf.trim().to_string();
    }
    format!(
        "{}.{}.{}-{}",
        &digitos[..3],
        &digitos[3..6],
        &digitos[6..9],
        &digitos[9..]
    )
}

/// Canonical RG display form (`00.000.000`) for plain 8-digit numbers.
///
/// RGs carry state prefixes and check letters in the wild ("MG 12.345.678"),
/// so anything that is not exactly 8 digits is passed through trimmed.
pub fn format_rg(rg: &str) -> String {
    let digitos: String = rg.chars().filter(|c| c.is_ascii_digit()).collect();
    if digitos.len() != 8 {
        return rg.trim().to_string();
    }
    format!("{}.{}.{}", &digitos[..2], &digitos[2..5], &digitos[5..])
}
