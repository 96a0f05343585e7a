//! Puzzle board: the answer text and per-cell reveal flags.

use std::collections::BTreeSet;

/// A puzzle as loaded from content: a category hint and the answer.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Puzzle {
    pub category: String,
    pub answer: String,
}

/// One character slot on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BoardCell {
    pub ch: char,
    pub revealed: bool,
}

/// The board for the current puzzle.
///
/// The answer is normalized to uppercase on load. Non-letter cells
/// (spaces, punctuation, digits) are revealed from the start and never
/// participate in guessing.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Board {
    category: String,
    cells: Vec<BoardCell>,
}

/// Letters a team may guess.
pub fn is_letter(ch: char) -> bool {
    ch.is_ascii_uppercase()
}

/// The five vowels; everything else guessable is a consonant.
pub fn is_vowel(ch: char) -> bool {
    matches!(ch, 'A' | 'E' | 'I' | 'O' | 'U')
}

impl Board {
    pub fn from_puzzle(puzzle: &Puzzle) -> Self {
        let cells = puzzle
            .answer
            .to_uppercase()
            .chars()
            .map(|ch| BoardCell {
                ch,
                revealed: !is_letter(ch),
            })
            .collect();
        Self {
            category: puzzle.category.clone(),
            cells,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn cells(&self) -> &[BoardCell] {
        &self.cells
    }

    /// The full answer, reveal flags ignored.
    pub fn answer(&self) -> String {
        self.cells.iter().map(|c| c.ch).collect()
    }

    /// Cell indices holding the given letter, revealed or not.
    pub fn hit_indices(&self, letter: char) -> Vec<usize> {
        let letter = letter.to_ascii_uppercase();
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.ch == letter)
            .map(|(i, _)| i)
            .collect()
    }

    /// Indices of letter cells still hidden.
    pub fn unrevealed_letter_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.revealed)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn is_fully_revealed(&self) -> bool {
        self.cells.iter().all(|c| c.revealed)
    }

    pub fn reveal(&mut self, index: usize) {
        if let Some(cell) = self.cells.get_mut(index) {
            cell.revealed = true;
        }
    }

    /// Reveal every cell whose letter is in `letters`. Used by the bonus
    /// round where reveals are instant rather than staggered.
    pub fn reveal_matching(&mut self, letters: &BTreeSet<char>) {
        for cell in &mut self.cells {
            if letters.contains(&cell.ch) {
                cell.revealed = true;
            }
        }
    }

    pub fn reveal_all(&mut self) {
        for cell in &mut self.cells {
            cell.revealed = true;
        }
    }

    /// Exact-answer comparison: case-insensitive, leading/trailing
    /// whitespace trimmed, internal spacing significant.
    pub fn matches_guess(&self, guess: &str) -> bool {
        guess.trim().to_uppercase() == self.answer()
    }
}
