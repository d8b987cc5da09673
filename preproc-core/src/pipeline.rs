//! # Pipeline de Normalização — Orquestrador com Eventos Observáveis
//!
//! O pipeline aplica as treze etapas da [`crate::stages`] em ordem fixa,
//! encadeando a saída da etapa *i* como entrada da etapa *i+1* e medindo o
//! delta de caracteres em cada passo. A ordem é um dado explícito
//! ([`STAGES`]), não uma sequência implícita de chamadas: exatamente 13
//! etapas, numeradas de 1 a 13, sempre nessa ordem — nunca reordenadas,
//! puladas ou paralelizadas dentro de um mesmo texto.
//!
//! Cada passo emite um evento via canal Rust (`mpsc`), permitindo que uma
//! camada de relatório acompanhe o progresso sem acoplar impressão ao
//! núcleo. Textos independentes podem ser processados em paralelo
//! ([`Pipeline::run_many`]): o pacote de recursos é somente-leitura.

use std::sync::mpsc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::PreprocResult;
use crate::resources::LinguisticResources;
use crate::stages;

/// Assinatura comum de toda etapa: texto e recursos fixos → novo texto.
pub type StageFn = fn(&str, &LinguisticResources) -> String;

/// Quantos caracteres de amostra cada evento de etapa carrega.
pub const SAMPLE_CHARS: usize = 200;

/// As treze etapas, em ordem de execução. A posição na lista define o
/// número da etapa (1–13) usado nas métricas e no relatório.
pub const STAGES: &[(&str, StageFn)] = &[
    ("Remover tags HTML", stages::strip_markup),
    ("Remover URLs", stages::strip_urls),
    ("Remover emojis", stages::strip_emojis),
    ("Remover stopwords", stages::remove_stopwords),
    ("Remover sinais de pontuação", stages::strip_punctuation),
    ("Remover caracteres especiais", stages::strip_special_chars),
    ("Remover espaços excedentes", stages::collapse_whitespace),
    ("Substituir palavras de chat", stages::expand_chat_words),
    ("Converter números em palavras", stages::convert_numbers),
    ("Converter para minúsculas", stages::to_lowercase),
    ("Correção ortográfica", stages::correct_spelling),
    ("Stemização", stages::stem_tokens),
    ("Lematização", stages::lemmatize),
];

/// Métricas de uma aplicação de etapa: tamanhos de entrada e saída em
/// caracteres (não bytes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageMetrics {
    /// Número da etapa (1–13).
    pub stage: usize,
    /// Nome de exibição da etapa.
    pub name: String,
    /// Caracteres na entrada da etapa.
    pub input_chars: usize,
    /// Caracteres na saída da etapa.
    pub output_chars: usize,
}

impl StageMetrics {
    /// Redução em caracteres (`entrada - saída`). Pode ser negativa: a
    /// expansão de abreviações de chat aumenta o texto.
    pub fn delta(&self) -> i64 {
        self.input_chars as i64 - self.output_chars as i64
    }
}

/// Eventos emitidos pelo pipeline durante o processamento.
///
/// Permitem que a camada de relatório renderize o progresso etapa a etapa
/// sem que o núcleo imprima nada.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PipelineEvent {
    /// Uma etapa terminou. Carrega as métricas da etapa e uma amostra
    /// truncada (primeiros [`SAMPLE_CHARS`] caracteres) do texto resultante.
    StageCompleted {
        stage: usize,
        name: String,
        input_chars: usize,
        output_chars: usize,
        sample: String,
    },
    /// O processamento terminou. Carrega o texto final, as métricas de
    /// todas as 13 etapas em ordem e o tempo total.
    Done {
        text: String,
        metrics: Vec<StageMetrics>,
        processing_ms: u64,
    },
}

/// O pipeline de normalização.
///
/// Detém o pacote de recursos linguísticos e aplica as etapas de [`STAGES`]
/// em sequência. Não muta suas entradas e não produz efeitos colaterais:
/// impressão é responsabilidade de quem consome os eventos/métricas.
pub struct Pipeline {
    resources: LinguisticResources,
}

impl Pipeline {
    /// Cria o pipeline construindo o pacote de recursos padrão.
    pub fn build() -> PreprocResult<Self> {
        Ok(Self {
            resources: LinguisticResources::build()?,
        })
    }

    /// Cria o pipeline a partir de um pacote de recursos já construído.
    pub fn with_resources(resources: LinguisticResources) -> Self {
        Self { resources }
    }

    /// Acesso ao pacote de recursos (somente leitura).
    pub fn resources(&self) -> &LinguisticResources {
        &self.resources
    }

    /// Processa o texto de forma síncrona e retorna o texto final mais as
    /// métricas das 13 etapas, em ordem.
    pub fn run(&self, text: &str) -> (String, Vec<StageMetrics>) {
        let (tx, rx) = mpsc::channel();
        self.run_streaming(text, tx);
        let mut final_text = String::new();
        let mut all_metrics = Vec::new();

        // Consome todos os eventos até o fim
        while let Ok(event) = rx.recv() {
            if let PipelineEvent::Done { text, metrics, .. } = event {
                final_text = text;
                all_metrics = metrics;
            }
        }
        (final_text, all_metrics)
    }

    /// Executa o pipeline enviando eventos de progresso pelo canal `tx`.
    ///
    /// # Fluxo de Eventos
    /// 1. `StageCompleted` ×13, na ordem das etapas.
    /// 2. `Done` com o texto final e as métricas consolidadas.
    pub fn run_streaming(&self, text: &str, tx: mpsc::Sender<PipelineEvent>) {
        let start = std::time::Instant::now();

        let mut current = text.to_string();
        let mut metrics = Vec::with_capacity(STAGES.len());

        for (i, (name, stage)) in STAGES.iter().enumerate() {
            let input_chars = char_len(&current);
            let output = stage(&current, &self.resources);
            let output_chars = char_len(&output);

            let _ = tx.send(PipelineEvent::StageCompleted {
                stage: i + 1,
                name: (*name).to_string(),
                input_chars,
                output_chars,
                sample: output.chars().take(SAMPLE_CHARS).collect(),
            });
            metrics.push(StageMetrics {
                stage: i + 1,
                name: (*name).to_string(),
                input_chars,
                output_chars,
            });
            current = output;
        }

        let _ = tx.send(PipelineEvent::Done {
            text: current,
            metrics,
            processing_ms: start.elapsed().as_millis() as u64,
        });
    }

    /// Processa o texto e devolve a sequência completa de eventos: 13
    /// `StageCompleted` em ordem, seguidos de `Done`.
    ///
    /// Útil para camadas de relatório que precisam das amostras
    /// intermediárias além das métricas consolidadas.
    pub fn run_events(&self, text: &str) -> Vec<PipelineEvent> {
        let (tx, rx) = mpsc::channel();
        self.run_streaming(text, tx);
        rx.try_iter().collect()
    }

    /// Versão em lote de [`Pipeline::run_events`] para textos
    /// independentes, processados em paralelo.
    pub fn run_many_events(&self, texts: &[&str]) -> Vec<Vec<PipelineEvent>> {
        texts.par_iter().map(|t| self.run_events(t)).collect()
    }

    /// Processa vários textos independentes em paralelo.
    ///
    /// Seguro porque o pacote de recursos é somente-leitura após a
    /// construção; cada texto ainda passa pelas 13 etapas em sequência.
    pub fn run_many(&self, texts: &[&str]) -> Vec<(String, Vec<StageMetrics>)> {
        texts.par_iter().map(|t| self.run(t)).collect()
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipeline() -> Pipeline {
        Pipeline::build().expect("recursos devem construir")
    }

    #[test]
    fn test_pipeline_13_etapas() {
        assert_eq!(STAGES.len(), 13);
        let (_, metrics) = pipeline().run("um texto qualquer");
        assert_eq!(metrics.len(), 13);
        for (i, m) in metrics.iter().enumerate() {
            assert_eq!(m.stage, i + 1);
        }
    }

    #[test]
    fn test_pipeline_vazio() {
        let (out, metrics) = pipeline().run("");
        assert_eq!(out, "");
        assert_eq!(metrics.len(), 13);
    }

    #[test]
    fn test_pipeline_deterministico() {
        let p = pipeline();
        let texto = "O Hospital Albert Einstein atendeu 42 pacientes hj! 😀";
        let (a, ma) = p.run(texto);
        let (b, mb) = p.run(texto);
        assert_eq!(a, b);
        assert_eq!(ma, mb);
    }

    #[test]
    fn test_metricas_consistentes() {
        let p = pipeline();
        let texto = "<p>Uma notícia do jornal com 42 palavras &amp; símbolos!</p>";
        let (final_text, metrics) = p.run(texto);

        // A entrada da primeira etapa é o texto cru; cada saída vira a
        // entrada seguinte; a saída da última é o texto final
        assert_eq!(metrics[0].input_chars, texto.chars().count());
        for par in metrics.windows(2) {
            assert_eq!(par[0].output_chars, par[1].input_chars);
        }
        assert_eq!(
            metrics.last().unwrap().output_chars,
            final_text.chars().count()
        );
        for m in &metrics {
            assert_eq!(m.delta(), m.input_chars as i64 - m.output_chars as i64);
        }
    }

    #[test]
    fn test_delta_negativo_na_expansao_de_chat() {
        let p = pipeline();
        let (_, metrics) = p.run("blz vlw galera");
        // Etapa 8 expande "blz"/"vlw" e aumenta o texto
        assert!(metrics[7].delta() < 0, "esperava delta negativo: {:?}", metrics[7]);
    }

    #[test]
    fn test_fim_a_fim_texto_sujo() {
        let p = pipeline();
        let entrada = "<b>Olá, vc viu isso? 😀 Visite https://x.co/abc hj!</b>";
        let (saida, _) = p.run(entrada);

        assert!(!saida.contains('<'), "tags sobraram: {:?}", saida);
        assert!(!saida.contains("http"), "URL sobrou: {:?}", saida);
        assert!(!saida.contains('😀'), "emoji sobrou: {:?}", saida);
        assert!(!saida.contains('?'), "pontuação sobrou: {:?}", saida);
        // "isso" é stopword; "vc" e "hj" caem pelo filtro de tamanho ≤2
        assert!(!saida.split_whitespace().any(|t| t == "isso"));
        assert_eq!(saida, saida.to_lowercase());
        assert!(!saida.is_empty());
    }

    #[test]
    fn test_expansao_de_chat_antes_da_stemizacao() {
        // Abreviações com ≥3 caracteres sobrevivem à etapa 4 e chegam à
        // etapa 8; o radical da forma expandida aparece no resultado final
        let p = pipeline();
        let (saida, _) = p.run("blz vlw galera");

        assert!(!saida.contains("blz"));
        assert!(!saida.contains("vlw"));
        let radical_beleza = p.resources().stem("beleza").into_owned();
        let radical_valeu = p.resources().stem("valeu").into_owned();
        assert!(saida.split_whitespace().any(|t| t == radical_beleza));
        assert!(saida.split_whitespace().any(|t| t == radical_valeu));
    }

    #[test]
    fn test_eventos_streaming() {
        let p = pipeline();
        let (tx, rx) = mpsc::channel();
        p.run_streaming("São Paulo é a maior cidade do Brasil.", tx);

        let events: Vec<PipelineEvent> = rx.try_iter().collect();
        assert_eq!(events.len(), 14); // 13 etapas + Done

        for (i, event) in events.iter().take(13).enumerate() {
            match event {
                PipelineEvent::StageCompleted { stage, .. } => assert_eq!(*stage, i + 1),
                other => panic!("esperava StageCompleted, veio {:?}", other),
            }
        }
        assert!(
            matches!(events.last().unwrap(), PipelineEvent::Done { .. }),
            "último evento deve ser Done"
        );
    }

    #[test]
    fn test_run_events_consistente_com_run() {
        let p = pipeline();
        let texto = "O jornal publicou 42 notícias hj!";
        let events = p.run_events(texto);
        assert_eq!(events.len(), 14);

        let (final_text, metrics) = p.run(texto);
        match events.last().unwrap() {
            PipelineEvent::Done { text, metrics: m, .. } => {
                assert_eq!(*text, final_text);
                assert_eq!(*m, metrics);
            }
            other => panic!("esperava Done, veio {:?}", other),
        }
    }

    #[test]
    fn test_run_many_events() {
        let p = pipeline();
        let textos = ["um texto", "outro texto"];
        let lote = p.run_many_events(&textos);
        assert_eq!(lote.len(), 2);
        for (texto, events) in textos.iter().zip(&lote) {
            let solo = p.run_events(texto);
            // Eventos de etapa idênticos; o Done pode diferir só no tempo
            assert_eq!(events[..13], solo[..13]);
            match (events.last().unwrap(), solo.last().unwrap()) {
                (
                    PipelineEvent::Done { text: a, metrics: ma, .. },
                    PipelineEvent::Done { text: b, metrics: mb, .. },
                ) => {
                    assert_eq!(a, b);
                    assert_eq!(ma, mb);
                }
                _ => panic!("esperava Done nos dois lados"),
            }
        }
    }

    #[test]
    fn test_run_many_igual_run() {
        let p = pipeline();
        let textos = ["primeiro texto do jornal", "segunda bula de remédio"];
        let lote = p.run_many(&textos);
        assert_eq!(lote.len(), 2);
        for (texto, resultado) in textos.iter().zip(&lote) {
            assert_eq!(*resultado, p.run(texto));
        }
    }

    #[test]
    fn test_metricas_serializam_json() {
        let p = pipeline();
        let (_, metrics) = p.run("um exemplo");
        let json = serde_json::to_string(&metrics).unwrap();
        let de: Vec<StageMetrics> = serde_json::from_str(&json).unwrap();
        assert_eq!(metrics, de);
    }
}
