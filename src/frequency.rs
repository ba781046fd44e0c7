//! Usage frequency ranking of Spanish verbs

use crate::error::PipelineError;
use std::{collections::HashMap, path::Path, sync::OnceLock};

/// Usage frequency rank of a verb (lower is more frequent)
pub type Rank = u32;

/// Rank given to verbs which the built-in table does not know about
pub const UNKNOWN_RANK: Rank = 999;

/// Highest rank a table entry may have, leaving room for the unknown rank
pub const MAX_RANK: Rank = Rank::MAX - 1;

/// Mapping from verb infinitives to their usage frequency rank
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FrequencyTable {
    /// Rank of each known infinitive
    ranks: HashMap<Box<str>, Rank>,

    /// Rank of infinitives which are not in the table
    ///
    /// Always strictly greater than every rank in the table.
    unknown_rank: Rank,
}
//
impl FrequencyTable {
    /// Build a table from (infinitive, rank) pairs
    ///
    /// Ranks should not exceed [`MAX_RANK`].
    pub fn new<'a>(entries: impl IntoIterator<Item = (&'a str, Rank)>) -> Self {
        let ranks = entries
            .into_iter()
            .map(|(infinitive, rank)| (Box::from(infinitive), rank))
            .collect::<HashMap<_, _>>();
        let max_rank = ranks.values().copied().max().unwrap_or(0);
        debug_assert!(max_rank <= MAX_RANK, "no rank is left for unknown verbs");
        Self {
            ranks,
            unknown_rank: UNKNOWN_RANK.max(max_rank.saturating_add(1)),
        }
    }

    /// Common Spanish verbs with their approximate frequency rank
    pub fn builtin() -> &'static Self {
        static LAZY: OnceLock<FrequencyTable> = OnceLock::new();
        LAZY.get_or_init(|| Self::new(BUILTIN_RANKS.iter().copied()))
    }

    /// Load a custom table from a JSON object of the form `{"ser": 1, ...}`
    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        let bytes = std::fs::read(path).map_err(|e| PipelineError::io(path, e))?;
        let value: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(|e| PipelineError::parse(path, e))?;
        let serde_json::Value::Object(entries) = value else {
            return Err(PipelineError::schema(path, None, "frequency table is not an object"));
        };
        let mut ranks = Vec::with_capacity(entries.len());
        for (infinitive, rank) in &entries {
            let rank = rank
                .as_u64()
                .and_then(|rank| Rank::try_from(rank).ok())
                .filter(|rank| (1..=MAX_RANK).contains(rank))
                .ok_or_else(|| {
                    PipelineError::schema(
                        path,
                        None,
                        format!("rank of {infinitive:?} is not in 1..={MAX_RANK}: {rank}"),
                    )
                })?;
            ranks.push((infinitive.as_str(), rank));
        }
        let table = Self::new(ranks);
        log::debug!(
            "Loaded {} verb ranks from {}, unknown verbs get rank {}",
            table.len(),
            path.display(),
            table.unknown_rank()
        );
        Ok(table)
    }

    /// Usage frequency rank of a verb, given its infinitive
    ///
    /// Lookup is an exact string match, without any case or accent folding.
    pub fn rank(&self, infinitive: &str) -> Rank {
        self.ranks
            .get(infinitive)
            .copied()
            .unwrap_or(self.unknown_rank)
    }

    /// Rank given to verbs that are not in the table
    pub fn unknown_rank(&self) -> Rank {
        self.unknown_rank
    }

    /// Number of verbs with a known rank
    pub fn len(&self) -> usize {
        self.ranks.len()
    }
}

/// Built-in frequency ranks of the 100 most common Spanish verbs
const BUILTIN_RANKS: &[(&str, Rank)] = &[
    ("ser", 1),
    ("estar", 2),
    ("tener", 3),
    ("hacer", 4),
    ("poder", 5),
    ("decir", 6),
    ("ir", 7),
    ("ver", 8),
    ("dar", 9),
    ("saber", 10),
    ("querer", 11),
    ("llegar", 12),
    ("pasar", 13),
    ("deber", 14),
    ("poner", 15),
    ("parecer", 16),
    ("quedar", 17),
    ("creer", 18),
    ("hablar", 19),
    ("llevar", 20),
    ("dejar", 21),
    ("seguir", 22),
    ("encontrar", 23),
    ("llamar", 24),
    ("venir", 25),
    ("pensar", 26),
    ("salir", 27),
    ("volver", 28),
    ("tomar", 29),
    ("conocer", 30),
    ("vivir", 31),
    ("sentir", 32),
    ("tratar", 33),
    ("mirar", 34),
    ("contar", 35),
    ("empezar", 36),
    ("esperar", 37),
    ("buscar", 38),
    ("existir", 39),
    ("entrar", 40),
    ("trabajar", 41),
    ("escribir", 42),
    ("perder", 43),
    ("producir", 44),
    ("ocurrir", 45),
    ("entender", 46),
    ("pedir", 47),
    ("recibir", 48),
    ("recordar", 49),
    ("terminar", 50),
    ("permitir", 51),
    ("aparecer", 52),
    ("conseguir", 53),
    ("comenzar", 54),
    ("servir", 55),
    ("sacar", 56),
    ("necesitar", 57),
    ("mantener", 58),
    ("resultar", 59),
    ("leer", 60),
    ("caer", 61),
    ("cambiar", 62),
    ("presentar", 63),
    ("crear", 64),
    ("abrir", 65),
    ("considerar", 66),
    ("oír", 67),
    ("acabar", 68),
    ("convertir", 69),
    ("ganar", 70),
    ("formar", 71),
    ("traer", 72),
    ("partir", 73),
    ("morir", 74),
    ("aceptar", 75),
    ("realizar", 76),
    ("suponer", 77),
    ("comprender", 78),
    ("lograr", 79),
    ("explicar", 80),
    ("preguntar", 81),
    ("tocar", 82),
    ("reconocer", 83),
    ("estudiar", 84),
    ("alcanzar", 85),
    ("nacer", 86),
    ("dirigir", 87),
    ("correr", 88),
    ("utilizar", 89),
    ("pagar", 90),
    ("ayudar", 91),
    ("gustar", 92),
    ("jugar", 93),
    ("escuchar", 94),
    ("cumplir", 95),
    ("ofrecer", 96),
    ("descubrir", 97),
    ("levantar", 98),
    ("intentar", 99),
    ("usar", 100),];
