//! Puzzle set loader.
//!
//! Puzzle files are JSON with a `puzzles` array for the main rounds and a
//! `bonusPuzzles` array for the bonus pool. Either list falls back to the
//! built-in set when missing or empty, so a game can always start.

use std::path::Path;

use serde::Deserialize;

use jontune_core::Puzzle;

use crate::loaders::{LoadResult, read_file};

/// Main-round puzzles plus the bonus pool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PuzzleSet {
    pub main: Vec<Puzzle>,
    pub bonus: Vec<Puzzle>,
}

#[derive(Deserialize)]
struct PuzzleFile {
    #[serde(default)]
    puzzles: Vec<Puzzle>,
    #[serde(default, rename = "bonusPuzzles")]
    bonus_puzzles: Vec<Puzzle>,
}

/// Built-in puzzle list used when no puzzle file is available.
pub fn fallback_puzzles() -> Vec<Puzzle> {
    fn p(category: &str, answer: &str) -> Puzzle {
        Puzzle {
            category: category.to_string(),
            answer: answer.to_string(),
        }
    }
    vec![
        p("PLACE", "JIMMYJONS"),
        p("PHRASE", "HAPPY BIRTHDAY JON"),
        p("CLASSIC PHRASE", "JON SAVED MY LIFE"),
        p("RELIGIOUS STUFF", "JONELUJAH"),
        p("POLITICS", "JONTRARIAN"),
        p("MOVIE QUOTE", "LOOK THE PROBLEM IS OVER"),
        p("CULINARY", "JON FOOD"),
        p("WORD", "MNEMONIC"),
        p("SHOWS", "JON SNOW"),
        p("EVENT", "JONCON"),
        p("WORD", "LYMPH"),
        p("MUSIC", "THIS IS THE RHYTHM OF THE NIGHT"),
    ]
}

/// Loader for puzzle sets from JSON files.
pub struct PuzzleLoader;

impl PuzzleLoader {
    /// Load a puzzle set from a JSON file.
    ///
    /// Missing or empty lists inside an otherwise valid file fall back to
    /// the built-in puzzles per list.
    pub fn load(path: &Path) -> LoadResult<PuzzleSet> {
        let content = read_file(path)?;
        let file: PuzzleFile = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse puzzle JSON: {}", e))?;

        let main = if file.puzzles.is_empty() {
            fallback_puzzles()
        } else {
            file.puzzles
        };
        let bonus = if file.bonus_puzzles.is_empty() {
            fallback_puzzles()
        } else {
            file.bonus_puzzles
        };
        Ok(PuzzleSet { main, bonus })
    }

    /// Load a puzzle set, degrading to the built-in list on any failure.
    pub fn load_or_fallback(path: &Path) -> PuzzleSet {
        Self::load(path).unwrap_or_else(|_| PuzzleSet {
            main: fallback_puzzles(),
            bonus: fallback_puzzles(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_both_lists_from_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "puzzles": [{{"category": "PHRASE", "answer": "HELLO THERE"}}],
                "bonusPuzzles": [{{"category": "WORD", "answer": "QUARTZ"}}]
            }}"#
        )
        .unwrap();

        let set = PuzzleLoader::load(file.path()).unwrap();
        assert_eq!(set.main.len(), 1);
        assert_eq!(set.main[0].answer, "HELLO THERE");
        assert_eq!(set.bonus[0].category, "WORD");
    }

    #[test]
    fn empty_lists_fall_back_per_list() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"puzzles": [], "bonusPuzzles": [{{"category": "WORD", "answer": "QUARTZ"}}]}}"#
        )
        .unwrap();

        let set = PuzzleLoader::load(file.path()).unwrap();
        assert_eq!(set.main, fallback_puzzles());
        assert_eq!(set.bonus.len(), 1);
    }

    #[test]
    fn missing_file_degrades_to_fallback() {
        let set = PuzzleLoader::load_or_fallback(Path::new("/definitely/not/here.json"));
        assert_eq!(set.main, fallback_puzzles());
        assert_eq!(set.bonus, fallback_puzzles());
    }

    #[test]
    fn malformed_json_is_an_error_from_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();
        assert!(PuzzleLoader::load(file.path()).is_err());
    }
}
