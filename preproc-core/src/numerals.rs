//! # Conversão de Números por Extenso (PT-BR)
//!
//! Implementa a regra de nomeação usada pela etapa 9 do pipeline: uma tabela
//! fixa cobre 0–20, as dezenas redondas (30, 40, ..., 90) e 100; valores de
//! 21 a 99 fora da tabela são compostos como `"<dezena> e <unidade>"`
//! (42 → "quarenta e dois"). Qualquer valor sem decomposição válida volta
//! como a própria string de dígitos.
//!
//! A cobertura é propositalmente limitada: a conversão é aproximada e
//! lossy acima de certas magnitudes, por decisão de projeto.

/// Tabela fixa número → palavra
const NUMBER_WORDS: &[(u64, &str)] = &[
    (0, "zero"),
    (1, "um"),
    (2, "dois"),
    (3, "três"),
    (4, "quatro"),
    (5, "cinco"),
    (6, "seis"),
    (7, "sete"),
    (8, "oito"),
    (9, "nove"),
    (10, "dez"),
    (11, "onze"),
    (12, "doze"),
    (13, "treze"),
    (14, "quatorze"),
    (15, "quinze"),
    (16, "dezesseis"),
    (17, "dezessete"),
    (18, "dezoito"),
    (19, "dezenove"),
    (20, "vinte"),
    (30, "trinta"),
    (40, "quarenta"),
    (50, "cinquenta"),
    (60, "sessenta"),
    (70, "setenta"),
    (80, "oitenta"),
    (90, "noventa"),
    (100, "cem"),
];

fn lookup(value: u64) -> Option<&'static str> {
    NUMBER_WORDS
        .iter()
        .find(|(n, _)| *n == value)
        .map(|(_, w)| *w)
}

/// Converte um valor para sua forma por extenso em português.
///
/// Retorna `None` quando o valor não tem decomposição válida na regra
/// (ex.: 101, 250); o chamador deve então manter a string original.
pub fn number_to_words(value: u64) -> Option<String> {
    if let Some(word) = lookup(value) {
        return Some(word.to_string());
    }
    if value < 100 {
        let dezena = (value / 10) * 10;
        let unidade = value % 10;
        if let (Some(d), Some(u)) = (lookup(dezena), lookup(unidade)) {
            return Some(format!("{} e {}", d, u));
        }
    }
    None
}

/// Iterador sobre as entradas da tabela fixa (usado pelos testes de
/// round-trip da conversão).
pub fn table_entries() -> impl Iterator<Item = (u64, &'static str)> {
    NUMBER_WORDS.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabela_fixa() {
        assert_eq!(number_to_words(0).as_deref(), Some("zero"));
        assert_eq!(number_to_words(15).as_deref(), Some("quinze"));
        assert_eq!(number_to_words(20).as_deref(), Some("vinte"));
        assert_eq!(number_to_words(100).as_deref(), Some("cem"));
    }

    #[test]
    fn test_composicao_dezena_unidade() {
        assert_eq!(number_to_words(42).as_deref(), Some("quarenta e dois"));
        assert_eq!(number_to_words(21).as_deref(), Some("vinte e um"));
        assert_eq!(number_to_words(99).as_deref(), Some("noventa e nove"));
    }

    #[test]
    fn test_sem_decomposicao() {
        // Acima de 100 (exceto o próprio 100) não há forma por extenso
        assert_eq!(number_to_words(101), None);
        assert_eq!(number_to_words(250), None);
        assert_eq!(number_to_words(2024), None);
    }

    #[test]
    fn test_tabela_sem_digitos() {
        // Cada entrada da tabela produz uma palavra sem dígitos
        for (n, _) in table_entries() {
            let word = number_to_words(n).expect("entrada da tabela converte");
            assert!(!word.chars().any(|c| c.is_ascii_digit()), "{}: {}", n, word);
        }
    }
}
