//! # preproc-core — Pré-processamento de Textos PT-BR para LLMs
//!
//! Este crate normaliza texto bruto em linguagem natural (notícias de
//! jornal, bulas de medicamento) em um fluxo de tokens reduzido e canônico,
//! adequado como entrada para pipelines de modelos de linguagem. O alvo é
//! o Português, com seus acentos, abreviações informais de chat e
//! morfologia.
//!
//! ## Arquitetura do Sistema
//!
//! O núcleo é um pipeline de normalização em treze etapas, aplicadas em
//! ordem fixa:
//!
//! 1.  **Recursos** ([`resources`]): stopwords, stemmer Snowball português,
//!     dicionário de abreviações de chat e de correções ortográficas —
//!     construídos uma vez, imutáveis dali em diante.
//! 2.  **Etapas** ([`stages`]): treze transformações texto→texto
//!     independentes e totais (remoção de marcação, URLs, emojis,
//!     stopwords, pontuação, caracteres especiais, espaços; expansão de
//!     chat; números por extenso; minúsculas; correção ortográfica;
//!     stemização; lematização aproximada).
//! 3.  **Orquestração** ([`pipeline`]): aplica as etapas em sequência,
//!     mede o delta de caracteres de cada uma e emite eventos observáveis.
//!
//! Entrada/saída de arquivos e relatório de console ficam fora do núcleo
//! (crate `preproc-cli`): o núcleo recebe uma string e devolve a string
//! final mais as métricas por etapa.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use preproc_core::Pipeline;
//!
//! let pipeline = Pipeline::build().expect("recursos linguísticos");
//!
//! let texto = "<b>Notícia: 42 casos confirmados hj!</b>";
//! let (normalizado, metricas) = pipeline.run(texto);
//!
//! assert_eq!(metricas.len(), 13);
//! for m in &metricas {
//!     println!("{}. {}: {} -> {} chars", m.stage, m.name, m.input_chars, m.output_chars);
//! }
//! println!("final: {}", normalizado);
//! ```

pub mod error;
pub mod numerals;
pub mod pipeline;
pub mod resources;
pub mod stages;

pub use error::{PreprocError, PreprocResult};
pub use pipeline::{Pipeline, PipelineEvent, StageMetrics, STAGES};
pub use resources::LinguisticResources;
