//! Move catalog and its cyclic beats relation

use serde::{Deserialize, Serialize};
use crate::error::MatchError;

/// Number of moves in every catalog
pub const CATALOG_SIZE: usize = 3;

/// Move names served by the default provider, in beats order
pub const DEFAULT_MOVES: [&str; CATALOG_SIZE] = ["Piedra", "Papel", "Tijera"];

/// Anything that can answer "which moves are playable?"
///
/// Queried once when a match is set up. Position encodes the beats
/// relation: index `i` beats index `(i + 2) % 3`.
pub trait CatalogSource {
    fn moves(&self) -> Vec<String>;
}

/// In-memory provider
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticCatalog {
    moves: Vec<String>,
}

impl StaticCatalog {
    pub fn new<I, S>(moves: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { moves: moves.into_iter().map(Into::into).collect() }
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_MOVES)
    }
}

impl CatalogSource for StaticCatalog {
    fn moves(&self) -> Vec<String> {
        self.moves.clone()
    }
}

/// Ordered, immutable set of the three playable moves
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct MoveCatalog {
    moves: [String; CATALOG_SIZE],
}

impl MoveCatalog {
    /// Build a catalog, trusting the names but not the count
    pub fn new(moves: Vec<String>) -> Result<Self, MatchError> {
        let len = moves.len();
        let moves: [String; CATALOG_SIZE] = moves
            .try_into()
            .map_err(|_| MatchError::MalformedCatalog { len })?;
        Ok(Self { moves })
    }

    pub fn from_source(source: &dyn CatalogSource) -> Result<Self, MatchError> {
        Self::new(source.moves())
    }

    pub fn len(&self) -> usize {
        CATALOG_SIZE
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Validate a move index against the catalog bounds
    pub fn check(&self, index: usize) -> Result<usize, MatchError> {
        if index < CATALOG_SIZE {
            Ok(index)
        } else {
            Err(MatchError::MoveOutOfRange { index, len: CATALOG_SIZE })
        }
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.moves.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.moves.iter().map(String::as_str)
    }

    /// Does move `a` beat move `b`?
    ///
    /// `a` beats `b` exactly when `b == (a + 2) % 3`, i.e. `a == (b + 1) % 3`.
    pub fn beats(&self, a: usize, b: usize) -> Result<bool, MatchError> {
        let (a, b) = (self.check(a)?, self.check(b)?);
        Ok(a == (b + 1) % CATALOG_SIZE)
    }
}

impl Default for MoveCatalog {
    fn default() -> Self {
        Self { moves: DEFAULT_MOVES.map(String::from) }
    }
}

impl TryFrom<Vec<String>> for MoveCatalog {
    type Error = MatchError;

    fn try_from(moves: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(moves)
    }
}

impl From<MoveCatalog> for Vec<String> {
    fn from(catalog: MoveCatalog) -> Self {
        catalog.moves.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rps() -> MoveCatalog {
        MoveCatalog::from_source(&StaticCatalog::new(["Rock", "Paper", "Scissors"])).unwrap()
    }

    #[test]
    fn test_default_source_order() {
        let catalog = MoveCatalog::from_source(&StaticCatalog::default()).unwrap();
        assert_eq!(catalog.iter().collect::<Vec<_>>(), vec!["Piedra", "Papel", "Tijera"]);
        assert_eq!(catalog, MoveCatalog::default());
    }

    #[test]
    fn test_beats_relation() {
        let catalog = rps();
        // Rock beats Scissors, Paper beats Rock, Scissors beats Paper
        assert_eq!(catalog.beats(0, 2), Ok(true));
        assert_eq!(catalog.beats(1, 0), Ok(true));
        assert_eq!(catalog.beats(2, 1), Ok(true));

        assert_eq!(catalog.beats(2, 0), Ok(false));
        assert_eq!(catalog.beats(0, 1), Ok(false));
        assert_eq!(catalog.beats(1, 2), Ok(false));
    }

    #[test]
    fn test_nothing_beats_itself() {
        let catalog = rps();
        for i in 0..CATALOG_SIZE {
            assert_eq!(catalog.beats(i, i), Ok(false), "move {} beats itself", i);
        }
    }

    #[test]
    fn test_wrong_cardinality_rejected() {
        let two = StaticCatalog::new(["Rock", "Paper"]);
        assert_eq!(
            MoveCatalog::from_source(&two),
            Err(MatchError::MalformedCatalog { len: 2 })
        );

        let four = vec!["a".to_string(), "b".into(), "c".into(), "d".into()];
        assert_eq!(MoveCatalog::new(four), Err(MatchError::MalformedCatalog { len: 4 }));
    }

    #[test]
    fn test_check_bounds() {
        let catalog = rps();
        assert_eq!(catalog.check(2), Ok(2));
        assert_eq!(catalog.check(3), Err(MatchError::MoveOutOfRange { index: 3, len: 3 }));
    }

    #[test]
    fn test_beats_rejects_unknown_moves() {
        let catalog = rps();
        assert_eq!(catalog.beats(3, 2), Err(MatchError::MoveOutOfRange { index: 3, len: 3 }));
        assert_eq!(
            catalog.beats(0, usize::MAX),
            Err(MatchError::MoveOutOfRange { index: usize::MAX, len: 3 })
        );
    }

    #[test]
    fn test_name_lookup() {
        let catalog = rps();
        assert_eq!(catalog.name(1), Some("Paper"));
        assert_eq!(catalog.name(3), None);
        assert_eq!(catalog.name(4), None);
    }

    #[test]
    fn test_json_shape() {
        let catalog = rps();
        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(json, r#"["Rock","Paper","Scissors"]"#);

        let short: Result<MoveCatalog, _> = serde_json::from_str(r#"["Rock"]"#);
        assert!(short.is_err());
    }
}
