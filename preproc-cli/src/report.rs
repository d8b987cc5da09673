//! # Relatório de Console
//!
//! Renderiza no console as estatísticas antes/depois do pré-processamento:
//! contagem de caracteres e palavras, redução absoluta e percentual por
//! etapa, e amostras truncadas do texto em cada ponto. Consome apenas os
//! eventos e métricas expostos pelo núcleo — nenhuma lógica de
//! transformação vive aqui.

use std::fmt::Write;

use preproc_core::pipeline::SAMPLE_CHARS;
use preproc_core::PipelineEvent;

/// Estatísticas básicas de um texto: caracteres e palavras.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStats {
    pub chars: usize,
    pub words: usize,
}

impl TextStats {
    pub fn from_text(text: &str) -> Self {
        Self {
            chars: text.chars().count(),
            words: text.split_whitespace().count(),
        }
    }
}

/// Redução percentual entre dois tamanhos; 0.0 quando o original é vazio.
pub fn reduction_pct(before: usize, after: usize) -> f64 {
    if before == 0 {
        return 0.0;
    }
    (before as i64 - after as i64) as f64 / before as f64 * 100.0
}

/// Amostra truncada (primeiros [`SAMPLE_CHARS`] caracteres), segura quanto
/// a fronteiras de caracteres multibyte.
pub fn sample(text: &str) -> String {
    let mut s: String = text.chars().take(SAMPLE_CHARS).collect();
    if text.chars().count() > SAMPLE_CHARS {
        s.push_str("...");
    }
    s
}

/// Monta o relatório completo de um documento a partir da sequência de
/// eventos do pipeline: texto original, uma seção por etapa (tamanhos,
/// redução absoluta e percentual, amostra do resultado) e o resumo final.
pub fn render_document_report(label: &str, original: &str, events: &[PipelineEvent]) -> String {
    let mut out = String::new();
    let divisor = "=".repeat(80);
    let _ = writeln!(out, "\n{}", divisor);
    let _ = writeln!(out, "PRÉ-PROCESSAMENTO DO {}", label.to_uppercase());
    let _ = writeln!(out, "{}", divisor);

    let original_stats = TextStats::from_text(original);
    let _ = writeln!(out, "\n--- TEXTO ORIGINAL ---");
    let _ = writeln!(out, "Tamanho: {} caracteres", original_stats.chars);
    let _ = writeln!(out, "Primeiros {} caracteres: {}", SAMPLE_CHARS, sample(original));

    for event in events {
        match event {
            PipelineEvent::StageCompleted {
                stage,
                name,
                input_chars,
                output_chars,
                sample: stage_sample,
            } => {
                let _ = writeln!(out, "\n--- {}. {} ---", stage, name.to_uppercase());
                let _ = writeln!(out, "Tamanho antes: {} caracteres", input_chars);
                let _ = writeln!(out, "Tamanho depois: {} caracteres", output_chars);
                let _ = writeln!(
                    out,
                    "Redução: {} caracteres ({:.1}%)",
                    *input_chars as i64 - *output_chars as i64,
                    reduction_pct(*input_chars, *output_chars)
                );
                if stage_sample.is_empty() {
                    let _ = writeln!(out, "Resultado: [texto vazio]");
                } else if *output_chars > SAMPLE_CHARS {
                    let _ = writeln!(out, "Amostra do resultado: {}...", stage_sample);
                } else {
                    let _ = writeln!(out, "Amostra do resultado: {}", stage_sample);
                }
            }
            PipelineEvent::Done { text, .. } => {
                let final_stats = TextStats::from_text(text);
                let _ = writeln!(out, "\n--- RESULTADO FINAL ---");
                let _ = writeln!(out, "Texto original: {} caracteres", original_stats.chars);
                let _ = writeln!(out, "Texto final: {} caracteres", final_stats.chars);
                let _ = writeln!(
                    out,
                    "Redução total: {} caracteres ({:.1}%)",
                    original_stats.chars as i64 - final_stats.chars as i64,
                    reduction_pct(original_stats.chars, final_stats.chars)
                );
                if text.is_empty() {
                    let _ = writeln!(out, "Resultado: [texto vazio]");
                } else {
                    let _ = writeln!(out, "Amostra do resultado: {}", sample(text));
                }
            }
        }
    }
    out
}

/// Imprime o relatório de um documento no console.
pub fn print_document_report(label: &str, original: &str, events: &[PipelineEvent]) {
    print!("{}", render_document_report(label, original, events));
}

/// Monta a comparação entre um par (original, processado).
pub fn render_comparison(title: &str, original: &str, processed: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", title);
    let _ = writeln!(out, "{}", "-".repeat(50));

    let o = TextStats::from_text(original);
    let p = TextStats::from_text(processed);

    let _ = writeln!(out, "ESTATÍSTICAS:");
    let _ = writeln!(out, "   Tamanho original: {} caracteres", o.chars);
    let _ = writeln!(out, "   Tamanho processado: {} caracteres", p.chars);
    let _ = writeln!(
        out,
        "   Redução: {} caracteres ({:.1}%)",
        o.chars as i64 - p.chars as i64,
        reduction_pct(o.chars, p.chars)
    );
    let _ = writeln!(out, "   Palavras originais: {}", o.words);
    let _ = writeln!(out, "   Palavras processadas: {}", p.words);
    let _ = writeln!(out, "   Redução de palavras: {}", o.words as i64 - p.words as i64);

    let _ = writeln!(out, "\nTEXTO ORIGINAL (amostra):");
    let _ = writeln!(out, "   \"{}\"", sample(original));
    let _ = writeln!(out, "\nTEXTO PROCESSADO (amostra):");
    let _ = writeln!(out, "   \"{}\"", sample(processed));
    let _ = writeln!(out, "\n{}", "=".repeat(50));
    out
}

/// Imprime a comparação entre um par (original, processado).
pub fn print_comparison(title: &str, original: &str, processed: &str) {
    print!("{}", render_comparison(title, original, processed));
}
