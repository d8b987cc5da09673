//! # Recursos Linguísticos para Português Brasileiro
//!
//! Agrupa as quatro estruturas de consulta usadas pelas etapas do pipeline:
//! o conjunto de stopwords, o stemmer Snowball para português, o dicionário
//! de abreviações de chat e o dicionário de correções ortográficas.
//!
//! O pacote é construído uma única vez ([`LinguisticResources::build`]) e é
//! somente-leitura dali em diante: nenhuma etapa o modifica, então o mesmo
//! pacote pode ser compartilhado entre execuções concorrentes do pipeline
//! sobre textos independentes, sem qualquer sincronização.

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

use rust_stemmers::{Algorithm, Stemmer};

use crate::error::{PreprocError, PreprocResult};

/// Stopwords em Português Brasileiro.
///
/// Cobertura equivalente à lista clássica do NLTK para português: artigos,
/// preposições, pronomes, contrações e as formas flexionadas dos verbos
/// auxiliares (ser, estar, ter, haver).
const STOPWORDS: &[&str] = &[
    "a", "à", "ao", "aos", "aquela", "aquelas", "aquele", "aqueles", "aquilo",
    "as", "às", "até", "com", "como", "da", "das", "de", "dela", "delas",
    "dele", "deles", "depois", "do", "dos", "e", "é", "ela", "elas", "ele",
    "eles", "em", "entre", "era", "eram", "éramos", "essa", "essas", "esse",
    "esses", "esta", "está", "estamos", "estão", "estar", "estas", "estava",
    "estavam", "estávamos", "este", "esteja", "estejam", "estejamos", "estes",
    "esteve", "estive", "estivemos", "estiver", "estivera", "estiveram",
    "estivéramos", "estiverem", "estivermos", "estivesse", "estivessem",
    "estivéssemos", "estou", "eu", "foi", "fomos", "for", "fora", "foram",
    "fôramos", "forem", "formos", "fosse", "fossem", "fôssemos", "fui", "há",
    "haja", "hajam", "hajamos", "hão", "havemos", "haver", "hei", "houve",
    "houvemos", "houver", "houvera", "houverá", "houveram", "houvéramos",
    "houverão", "houverei", "houverem", "houveremos", "houveria",
    "houveriam", "houveríamos", "houvermos", "houvesse", "houvessem",
    "houvéssemos", "isso", "isto", "já", "lhe", "lhes", "mais", "mas", "me",
    "mesmo", "meu", "meus", "minha", "minhas", "muito", "na", "não", "nas",
    "nem", "no", "nos", "nós", "nossa", "nossas", "nosso", "nossos", "num",
    "numa", "o", "os", "ou", "para", "pela", "pelas", "pelo", "pelos", "por",
    "qual", "quando", "que", "quem", "são", "se", "seja", "sejam", "sejamos",
    "sem", "ser", "será", "serão", "serei", "seremos", "seria", "seriam",
    "seríamos", "seu", "seus", "só", "somos", "sou", "sua", "suas", "também",
    "te", "tem", "têm", "temos", "tenha", "tenham", "tenhamos", "tenho",
    "terá", "terão", "terei", "teremos", "teria", "teriam", "teríamos",
    "teu", "teus", "teve", "tinha", "tinham", "tínhamos", "tive", "tivemos",
    "tiver", "tivera", "tiveram", "tivéramos", "tiverem", "tivermos",
    "tivesse", "tivessem", "tivéssemos", "tu", "tua", "tuas", "um", "uma",
    "você", "vocês", "vos",
];

/// Abreviações de chat → forma canônica.
///
/// Tabela estática intencionalmente pequena (inclui entradas identidade como
/// "ontem"); a incompletude é uma limitação documentada, não um defeito.
const CHAT_WORDS: &[(&str, &str)] = &[
    ("vc", "você"),
    ("vcs", "vocês"),
    ("q", "que"),
    ("pq", "porque"),
    ("n", "não"),
    ("tb", "também"),
    ("mt", "muito"),
    ("kk", "haha"),
    ("rsrs", "haha"),
    ("blz", "beleza"),
    ("vlw", "valeu"),
    ("flw", "falou"),
    ("cmg", "comigo"),
    ("ctg", "contigo"),
    ("hj", "hoje"),
    ("ontem", "ontem"),
    ("amanha", "amanhã"),
    ("sdd", "saudade"),
    ("bjs", "beijos"),
    ("abraços", "abraços"),
];

/// Correções ortográficas comuns (forma sem acento → forma acentuada).
///
/// Consulta exata, não estatística: só corrige o que está na tabela.
const CORRECTIONS: &[(&str, &str)] = &[
    ("nao", "não"),
    ("voce", "você"),
    ("tambem", "também"),
    ("alem", "além"),
    ("porem", "porém"),
    ("atraves", "através"),
    ("pos", "pós"),
    ("pre", "pré"),
    ("anti", "anti"),
    ("sobre", "sobre"),
    ("entre", "entre"),
];

/// Pacote imutável de recursos linguísticos compartilhado por todas as etapas.
///
/// Construído uma vez antes da primeira etapa rodar; nenhuma etapa recebe um
/// pacote parcialmente construído.
pub struct LinguisticResources {
    stopwords: HashSet<String>,
    stemmer: Stemmer,
    chat_words: HashMap<String, String>,
    corrections: HashMap<String, String>,
}

impl LinguisticResources {
    /// Constrói o pacote completo de recursos.
    ///
    /// As tabelas são embutidas no binário, então a construção é barata e
    /// idempotente. Ainda assim a assinatura é falível: se alguma tabela
    /// resultar vazia o chamador recebe [`PreprocError::ResourceUnavailable`]
    /// e decide entre abortar ou degradar.
    pub fn build() -> PreprocResult<Self> {
        let stopwords: HashSet<String> =
            STOPWORDS.iter().map(|s| s.to_string()).collect();
        if stopwords.is_empty() {
            return Err(PreprocError::ResourceUnavailable(
                "lista de stopwords vazia".into(),
            ));
        }

        let chat_words: HashMap<String, String> = CHAT_WORDS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        if chat_words.is_empty() {
            return Err(PreprocError::ResourceUnavailable(
                "dicionário de abreviações de chat vazio".into(),
            ));
        }

        let corrections: HashMap<String, String> = CORRECTIONS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        if corrections.is_empty() {
            return Err(PreprocError::ResourceUnavailable(
                "dicionário de correções ortográficas vazio".into(),
            ));
        }

        Ok(Self {
            stopwords,
            stemmer: Stemmer::create(Algorithm::Portuguese),
            chat_words,
            corrections,
        })
    }

    /// Verifica se a palavra (já em minúsculas) é uma stopword.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Aplica o stemmer Snowball de português à palavra.
    pub fn stem<'a>(&self, word: &'a str) -> Cow<'a, str> {
        self.stemmer.stem(word)
    }

    /// Consulta a forma canônica de uma abreviação de chat (chave em minúsculas).
    pub fn chat_word(&self, word: &str) -> Option<&str> {
        self.chat_words.get(word).map(|s| s.as_str())
    }

    /// Consulta a correção ortográfica exata para a palavra.
    pub fn correction(&self, word: &str) -> Option<&str> {
        self.corrections.get(word).map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_resources() {
        let res = LinguisticResources::build().expect("recursos devem construir");
        assert!(res.is_stopword("de"));
        assert!(res.is_stopword("não"));
        assert!(!res.is_stopword("vacina"));
    }

    #[test]
    fn test_chat_words() {
        let res = LinguisticResources::build().unwrap();
        assert_eq!(res.chat_word("vc"), Some("você"));
        assert_eq!(res.chat_word("hj"), Some("hoje"));
        assert_eq!(res.chat_word("blz"), Some("beleza"));
        assert_eq!(res.chat_word("inexistente"), None);
    }

    #[test]
    fn test_corrections() {
        let res = LinguisticResources::build().unwrap();
        assert_eq!(res.correction("nao"), Some("não"));
        assert_eq!(res.correction("voce"), Some("você"));
        assert_eq!(res.correction("casa"), None);
    }

    #[test]
    fn test_stemmer_portugues() {
        let res = LinguisticResources::build().unwrap();
        // amigo/amiga/amigos/amigas compartilham o mesmo radical
        assert_eq!(res.stem("amigas"), res.stem("amigos"));
        assert_eq!(res.stem("sol"), "sol");
    }
}
