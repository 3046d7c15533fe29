use super::types::{CellPos, GRID_SIZE};
use crate::games::session_rng::SessionRng;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const PLACEMENT_ATTEMPTS: usize = 64;

/// Square letter grid with the target words hidden in horizontal runs and
/// every other cell filled with random letters.
#[derive(Clone, Debug)]
pub struct Grid {
    letters: Vec<char>,
}

impl Grid {
    pub fn generate(words: &[&str], rng: &mut SessionRng) -> Self {
        // 0 marks a still-free cell so placement can detect collisions.
        let mut letters = vec![0u8; GRID_SIZE * GRID_SIZE];

        for word in words {
            place_word(&mut letters, word, rng);
        }

        for cell in letters.iter_mut() {
            if *cell == 0 {
                *cell = ALPHABET[rng.random_range(0..ALPHABET.len())];
            }
        }

        Self {
            letters: letters.into_iter().map(char::from).collect(),
        }
    }

    pub fn letter(&self, pos: CellPos) -> Option<char> {
        if pos.row >= GRID_SIZE || pos.col >= GRID_SIZE {
            return None;
        }
        self.letters.get(pos.row * GRID_SIZE + pos.col).copied()
    }

    /// Letters at the given positions, in selection order.
    pub fn word_at(&self, positions: &[CellPos]) -> String {
        positions
            .iter()
            .filter_map(|&pos| self.letter(pos))
            .collect()
    }

    /// Whether the word occurs left-to-right in some row.
    pub fn contains_horizontal(&self, word: &str) -> bool {
        let needle: Vec<char> = word.chars().collect();
        if needle.is_empty() || needle.len() > GRID_SIZE {
            return false;
        }
        for row in 0..GRID_SIZE {
            let start = row * GRID_SIZE;
            let row_letters = &self.letters[start..start + GRID_SIZE];
            if row_letters
                .windows(needle.len())
                .any(|window| window == needle.as_slice())
            {
                return true;
            }
        }
        false
    }
}

/// Tries random horizontal positions that do not destroy previously placed
/// letters (sharing a cell is fine when the letter matches). If random
/// probing comes up empty, scans every position for a fit; a word with no
/// collision-free spot anywhere is skipped rather than written over another
/// word.
fn place_word(letters: &mut [u8], word: &str, rng: &mut SessionRng) {
    let bytes = word.as_bytes();
    if bytes.is_empty() || bytes.len() > GRID_SIZE {
        return;
    }

    for _ in 0..PLACEMENT_ATTEMPTS {
        let row = rng.random_range(0..GRID_SIZE);
        let col = rng.random_range(0..=GRID_SIZE - bytes.len());
        if try_place(letters, bytes, row * GRID_SIZE + col) {
            return;
        }
    }

    for row in 0..GRID_SIZE {
        for col in 0..=GRID_SIZE - bytes.len() {
            if try_place(letters, bytes, row * GRID_SIZE + col) {
                return;
            }
        }
    }
}

/// Writes the word at `start` if every covered cell is free or already holds
/// the matching letter. Returns whether the write happened.
fn try_place(letters: &mut [u8], bytes: &[u8], start: usize) -> bool {
    let fits = (0..bytes.len()).all(|i| {
        let cell = letters[start + i];
        cell == 0 || cell == bytes[i]
    });
    if fits {
        letters[start..start + bytes.len()].copy_from_slice(bytes);
    }
    fits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::word_search::types::TARGET_WORDS;

    #[test]
    fn test_every_target_word_is_placed() {
        for seed in 0..300 {
            let mut rng = SessionRng::new(seed);
            let grid = Grid::generate(&TARGET_WORDS, &mut rng);
            for word in TARGET_WORDS {
                assert!(
                    grid.contains_horizontal(word),
                    "seed {}: word {} missing from grid",
                    seed,
                    word
                );
            }
        }
    }

    #[test]
    fn test_grid_is_fully_populated_with_uppercase() {
        let mut rng = SessionRng::new(42);
        let grid = Grid::generate(&TARGET_WORDS, &mut rng);
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let letter = grid.letter(CellPos::new(row, col)).unwrap();
                assert!(letter.is_ascii_uppercase());
            }
        }
    }

    #[test]
    fn test_letter_out_of_range_is_none() {
        let mut rng = SessionRng::new(42);
        let grid = Grid::generate(&TARGET_WORDS, &mut rng);
        assert_eq!(grid.letter(CellPos::new(GRID_SIZE, 0)), None);
        assert_eq!(grid.letter(CellPos::new(0, GRID_SIZE)), None);
    }

    #[test]
    fn test_word_at_follows_selection_order() {
        let mut rng = SessionRng::new(42);
        let grid = Grid::generate(&TARGET_WORDS, &mut rng);
        let forward = [CellPos::new(0, 0), CellPos::new(0, 1)];
        let backward = [CellPos::new(0, 1), CellPos::new(0, 0)];
        let a = grid.word_at(&forward);
        let b = grid.word_at(&backward);
        assert_eq!(a.chars().rev().collect::<String>(), b);
    }

    #[test]
    fn test_full_grid_leaves_placed_letters_untouched() {
        // No free cell anywhere and no matching letters, so the word has no
        // legal spot and must be skipped, not written over existing letters.
        let mut letters = vec![b'Q'; GRID_SIZE * GRID_SIZE];
        let mut rng = SessionRng::new(42);
        place_word(&mut letters, "AB", &mut rng);
        assert!(letters.iter().all(|&cell| cell == b'Q'));
    }

    #[test]
    fn test_placement_scan_finds_the_only_free_spot() {
        // Random probing will mostly hit occupied cells; the exhaustive scan
        // must still land the word in the single free run.
        let mut letters = vec![b'Q'; GRID_SIZE * GRID_SIZE];
        let start = 3 * GRID_SIZE;
        letters[start] = 0;
        letters[start + 1] = 0;

        let mut rng = SessionRng::new(42);
        place_word(&mut letters, "AB", &mut rng);

        assert_eq!(&letters[start..start + 2], b"AB");
        let overwritten = letters
            .iter()
            .enumerate()
            .filter(|&(i, &cell)| i != start && i != start + 1 && cell != b'Q')
            .count();
        assert_eq!(overwritten, 0);
    }

    #[test]
    fn test_oversized_word_is_skipped() {
        let mut rng = SessionRng::new(42);
        let grid = Grid::generate(&["JAVASCRIPT", "CSS"], &mut rng);
        assert!(grid.contains_horizontal("CSS"));
        assert!(!grid.contains_horizontal("JAVASCRIPT"));
    }
}
