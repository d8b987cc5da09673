//! # Biblioteca de Etapas de Normalização
//!
//! As treze transformações texto→texto aplicadas em ordem fixa pelo
//! [`Pipeline`](crate::pipeline::Pipeline). Cada etapa é uma função total
//! sobre strings: nunca falha para entrada Unicode válida (pode devolver a
//! string vazia) e recebe o pacote de recursos fixo para toda a execução.
//!
//! ## Ordem importa
//!
//! As etapas não assumem pré-condições escondidas — elas são ordenadas para
//! que cada uma encontre a forma de texto que espera. Em particular, a
//! remoção de stopwords (etapa 4) roda **antes** da remoção de pontuação
//! (etapa 5) e da caixa-baixa explícita (etapa 10), por isso sua
//! tokenização precisa tolerar pontuação embutida e ela mesma aplica
//! minúsculas aos tokens.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::numerals;
use crate::resources::LinguisticResources;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());
static URL_HTTP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").unwrap());
static URL_WWW_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"www\.\S+").unwrap());
static URL_TCO_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"t\.co/\S+").unwrap());
static URL_BITLY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"bit\.ly/\S+").unwrap());
// Faixas Unicode de emojis: emoticons, símbolos e pictogramas, transporte,
// indicadores de bandeira e duas faixas suplementares. As faixas se
// sobrepõem de propósito; caracteres fora delas ficam intactos.
static EMOJI_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"[\x{1F600}-\x{1F64F}\x{1F300}-\x{1F5FF}\x{1F680}-\x{1F6FF}\x{1F1E0}-\x{1F1FF}\x{2702}-\x{27B0}\x{24C2}-\x{1F251}]+",
    )
    .unwrap()
});
static PUNCT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());
static SPECIAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-ZÀ-ÿ0-9\s]").unwrap());
static WS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+\b").unwrap());

/// **Etapa 1** — Remove tags de marcação (`<...>`), decodifica entidades
/// HTML (`&amp;` → `&`) e apara espaços nas pontas.
pub fn strip_markup(text: &str, _res: &LinguisticResources) -> String {
    let sem_tags = TAG_RE.replace_all(text, "");
    decode_entities(&sem_tags).trim().to_string()
}

/// Decodifica entidades HTML nomeadas comuns e numéricas (`&#65;`, `&#x41;`).
///
/// Entidades desconhecidas são mantidas como texto literal.
fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.char_indices();

    while let Some((i, c)) = chars.next() {
        if c != '&' {
            out.push(c);
            continue;
        }
        // Procura o ';' num raio curto; entidades reais são pequenas
        let rest = &text[i + 1..];
        let end = rest.char_indices().take(10).find(|(_, c)| *c == ';');
        let Some((semi, _)) = end else {
            out.push('&');
            continue;
        };
        let name = &rest[..semi];
        let decoded = match name {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" | "#39" => Some('\''),
            "nbsp" => Some(' '),
            _ => decode_numeric_entity(name),
        };
        match decoded {
            Some(ch) => {
                out.push(ch);
                // Consome o corpo da entidade e o ';'
                for _ in 0..name.chars().count() + 1 {
                    chars.next();
                }
            }
            None => out.push('&'),
        }
    }
    out
}

fn decode_numeric_entity(name: &str) -> Option<char> {
    let code = if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
        u32::from_str_radix(hex, 16).ok()?
    } else if let Some(dec) = name.strip_prefix('#') {
        dec.parse::<u32>().ok()?
    } else {
        return None;
    };
    char::from_u32(code)
}

/// **Etapa 2** — Remove URLs: `http(s)://...`, `www....` e encurtadores
/// conhecidos (`t.co/...`, `bit.ly/...`).
///
/// Os quatro padrões são aplicados em sequência, na ordem de declaração,
/// sobre o resultado do anterior — todos surtem efeito.
pub fn strip_urls(text: &str, _res: &LinguisticResources) -> String {
    let t = URL_HTTP_RE.replace_all(text, "");
    let t = URL_WWW_RE.replace_all(&t, "");
    let t = URL_TCO_RE.replace_all(&t, "");
    let t = URL_BITLY_RE.replace_all(&t, "");
    t.trim().to_string()
}

/// **Etapa 3** — Remove caracteres nas faixas Unicode de emoji.
pub fn strip_emojis(text: &str, _res: &LinguisticResources) -> String {
    EMOJI_RE.replace_all(text, "").into_owned()
}

/// **Etapa 4** — Remove stopwords e tokens curtos.
///
/// Aplica minúsculas, tokeniza com segmentação de palavras Unicode
/// (tolerante à pontuação ainda presente no texto), descarta tokens com
/// até 2 caracteres ou presentes no conjunto de stopwords e rejunta com
/// espaço simples. É a única etapa que combina caixa-baixa com filtro de
/// comprimento.
pub fn remove_stopwords(text: &str, res: &LinguisticResources) -> String {
    let lower = text.to_lowercase();
    lower
        .unicode_words()
        .filter(|w| w.chars().count() > 2 && !res.is_stopword(w))
        .collect::<Vec<_>>()
        .join(" ")
}

/// **Etapa 5** — Substitui por espaço tudo que não for caractere de
/// palavra (`\w`) ou espaço em branco.
pub fn strip_punctuation(text: &str, _res: &LinguisticResources) -> String {
    PUNCT_RE.replace_all(text, " ").into_owned()
}

/// **Etapa 6** — Segundo filtro, mais estreito que a etapa 5: mantém apenas
/// letras ASCII, a faixa acentuada Latin-1 (`À-ÿ`), dígitos e espaços.
/// Pega resíduos que `\w` considera válidos, como o sublinhado.
pub fn strip_special_chars(text: &str, _res: &LinguisticResources) -> String {
    SPECIAL_RE.replace_all(text, " ").into_owned()
}

/// **Etapa 7** — Colapsa qualquer sequência de espaços em branco (incluindo
/// quebras de linha e tabulações) num único espaço e apara as pontas.
/// Idempotente.
pub fn collapse_whitespace(text: &str, _res: &LinguisticResources) -> String {
    WS_RE.replace_all(text, " ").trim().to_string()
}

/// **Etapa 8** — Substitui abreviações de chat pela forma canônica.
///
/// A consulta é exata e insensível a caixa; tokens sem correspondência
/// mantêm a grafia original.
pub fn expand_chat_words(text: &str, res: &LinguisticResources) -> String {
    text.split_whitespace()
        .map(|w| match res.chat_word(&w.to_lowercase()) {
            Some(canonical) => canonical.to_string(),
            None => w.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// **Etapa 9** — Converte sequências de dígitos delimitadas por fronteira
/// de palavra para a forma por extenso em português.
///
/// Valores abaixo de um milhão são convertidos pela regra de
/// [`numerals::number_to_words`]; valores a partir de um milhão, sem
/// decomposição válida, ou que falhem no parse (caso guardado) permanecem
/// como a string de dígitos original — nunca um erro.
pub fn convert_numbers(text: &str, _res: &LinguisticResources) -> String {
    DIGITS_RE
        .replace_all(text, |caps: &regex::Captures| {
            let digits = &caps[0];
            match digits.parse::<u64>() {
                Ok(n) if n < 1_000_000 => {
                    numerals::number_to_words(n).unwrap_or_else(|| digits.to_string())
                }
                _ => digits.to_string(),
            }
        })
        .into_owned()
}

/// **Etapa 10** — Converte todo o texto para minúsculas (case folding
/// Unicode padrão). Idempotente.
pub fn to_lowercase(text: &str, _res: &LinguisticResources) -> String {
    text.to_lowercase()
}

/// **Etapa 11** — Correção ortográfica por dicionário.
///
/// Consulta exata na tabela sem-acento → com-acento (`nao` → `não`);
/// tokens fora da tabela passam inalterados.
pub fn correct_spelling(text: &str, res: &LinguisticResources) -> String {
    text.split_whitespace()
        .map(|w| match res.correction(w) {
            Some(corrected) => corrected.to_string(),
            None => w.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// **Etapa 12** — Stemização: reduz cada token puramente alfabético ao seu
/// radical via Snowball português; tokens não alfabéticos são descartados.
pub fn stem_tokens(text: &str, res: &LinguisticResources) -> String {
    text.unicode_words()
        .filter(|w| w.chars().all(char::is_alphabetic))
        .map(|w| res.stem(w).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// **Etapa 13** — Lematização.
///
/// Não há lematizador disponível para português, então esta etapa usa a
/// stemização como aproximação — comportamento idêntico à etapa 12, mantida
/// como etapa nomeada distinta para preservar o contrato de 13 etapas e a
/// granularidade do relatório.
pub fn lemmatize(text: &str, res: &LinguisticResources) -> String {
    stem_tokens(text, res)
}
