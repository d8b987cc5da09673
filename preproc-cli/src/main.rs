//! Interface de linha de comando: lê arquivos de texto UTF-8, roda o
//! pipeline de 13 etapas e grava o resultado; também compara pares de
//! arquivos (original, processado). Falhas de E/S são reportadas por
//! documento sem interromper o processamento dos demais.

mod report;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use preproc_core::{Pipeline, PipelineEvent, PreprocError, PreprocResult};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "preproc")]
#[command(about = "Pré-processamento de textos em Português para pipelines de LLM")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Executa as 13 etapas de normalização sobre arquivos de entrada
    Processar {
        /// Arquivos de entrada (UTF-8), pareados com --saida pela posição
        #[arg(short, long, required = true, num_args = 1..)]
        entrada: Vec<PathBuf>,
        /// Arquivos de saída correspondentes
        #[arg(short, long, required = true, num_args = 1..)]
        saida: Vec<PathBuf>,
        /// Também imprime as métricas por etapa em JSON
        #[arg(long)]
        json: bool,
    },
    /// Compara pares (original, processado) e imprime estatísticas
    Comparar {
        /// Arquivos originais
        #[arg(short, long, required = true, num_args = 1..)]
        original: Vec<PathBuf>,
        /// Arquivos processados correspondentes
        #[arg(short, long, required = true, num_args = 1..)]
        processado: Vec<PathBuf>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Processar { entrada, saida, json } => processar(&entrada, &saida, json),
        Commands::Comparar { original, processado } => comparar(&original, &processado),
    }
}

/// Lê um arquivo de entrada por inteiro, distinguindo "não existe" de
/// outros erros de E/S.
fn read_input(path: &Path) -> PreprocResult<String> {
    if !path.exists() {
        return Err(PreprocError::InputNotFound(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}

/// Rótulo de exibição de um documento: o nome do arquivo sem extensão.
fn label_for(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn processar(entrada: &[PathBuf], saida: &[PathBuf], json: bool) -> ExitCode {
    if entrada.len() != saida.len() {
        error!(
            "número de entradas ({}) difere do de saídas ({})",
            entrada.len(),
            saida.len()
        );
        return ExitCode::FAILURE;
    }

    let pipeline = match Pipeline::build() {
        Ok(p) => p,
        Err(e) => {
            // Sem recursos não há pipeline parcial utilizável
            error!("falha ao construir recursos linguísticos: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut houve_erro = false;
    let mut documentos = Vec::new();
    for (ent, sai) in entrada.iter().zip(saida) {
        match read_input(ent) {
            Ok(texto) => documentos.push((ent.clone(), sai.clone(), texto)),
            Err(e) => {
                error!("pulando documento: {}", e);
                houve_erro = true;
            }
        }
    }

    // Documentos são independentes: processa em paralelo
    let textos: Vec<&str> = documentos.iter().map(|(_, _, t)| t.as_str()).collect();
    let resultados = pipeline.run_many_events(&textos);

    for ((ent, sai, texto), events) in documentos.iter().zip(&resultados) {
        report::print_document_report(&label_for(ent), texto, events);

        let done = events.iter().find_map(|e| match e {
            PipelineEvent::Done { text, metrics, .. } => Some((text, metrics)),
            _ => None,
        });
        let Some((final_text, metrics)) = done else {
            error!("pipeline não emitiu evento final para {}", ent.display());
            houve_erro = true;
            continue;
        };

        if json {
            match serde_json::to_string_pretty(metrics) {
                Ok(j) => println!("{}", j),
                Err(e) => error!("falha ao serializar métricas: {}", e),
            }
        }

        match fs::write(sai, final_text) {
            Ok(()) => info!("resultado gravado em {}", sai.display()),
            Err(e) => {
                error!("falha ao gravar {}: {}", sai.display(), e);
                houve_erro = true;
            }
        }
    }

    if houve_erro {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn comparar(original: &[PathBuf], processado: &[PathBuf]) -> ExitCode {
    if original.len() != processado.len() {
        error!(
            "número de originais ({}) difere do de processados ({})",
            original.len(),
            processado.len()
        );
        return ExitCode::FAILURE;
    }

    println!("{}", "=".repeat(80));
    println!("COMPARAÇÃO: TEXTO ORIGINAL vs TEXTO PROCESSADO");
    println!("{}", "=".repeat(80));

    let mut houve_erro = false;
    for (orig, proc) in original.iter().zip(processado) {
        let par = read_input(orig).and_then(|o| read_input(proc).map(|p| (o, p)));
        match par {
            Ok((texto_original, texto_processado)) => {
                report::print_comparison(&label_for(orig), &texto_original, &texto_processado);
            }
            Err(e) => {
                error!("pulando comparação: {}", e);
                houve_erro = true;
            }
        }
    }

    if houve_erro {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
