//! Tipos de erro compartilhados pelo pipeline de pré-processamento.
//!
//! As etapas de transformação em si são funções totais sobre strings e não
//! falham; os únicos modos de falha visíveis são a construção dos recursos
//! linguísticos e a leitura/escrita de arquivos na camada de orquestração.

use std::path::PathBuf;

use thiserror::Error;

/// Erros do sistema de pré-processamento
#[derive(Error, Debug)]
pub enum PreprocError {
    /// Um recurso linguístico obrigatório (stopwords, stemmer, dicionários)
    /// não pôde ser construído. Fatal: sem recursos não há pipeline.
    #[error("recurso linguístico indisponível: {0}")]
    ResourceUnavailable(String),

    /// Um arquivo de entrada nomeado não existe. Reportado por documento;
    /// o processamento dos demais documentos continua.
    #[error("arquivo de entrada não encontrado: {0}")]
    InputNotFound(PathBuf),

    /// Erro de E/S ao ler ou escrever um arquivo de texto.
    #[error("erro de E/S: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias de resultado para operações do pré-processador
pub type PreprocResult<T> = Result<T, PreprocError>;
