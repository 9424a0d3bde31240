//! Fence engine
//!
//! Rail-fence transposition: characters are written column by column along a
//! zig-zag over `rails` rows, then read row by row.
//!
//! Every call builds its own working state from its arguments, so the
//! functions here are pure and safe to call from any number of threads.
//!
//! # Examples
//!
//! ```
//! use railfence::fence::{self, FenceKey};
//!
//! let key = FenceKey::new(3, 0).unwrap();
//!
//! let ciphertext = fence::encrypt("WEAREDISCOVEREDFLEEATONCE", key);
//! assert_eq!(ciphertext, "WECRLTEERDSOEEFEAOCAIVDEN");
//!
//! let plaintext = fence::decrypt(&ciphertext, key);
//! assert_eq!(plaintext, "WEAREDISCOVEREDFLEEATONCE");
//!
//! print!("{}", fence::render("WEAREDISCOVER", key));
//! ```

mod key;
mod zigzag;

pub use key::{FenceKey, KeyError, MAX_RAILS, MIN_RAILS};
pub use zigzag::{Direction, ZigZag};

/// Placeholder drawn for line breaks in a diagram
const LINE_BREAK_GLYPH: char = '¶';
/// Placeholder drawn for any other control character in a diagram
const CONTROL_GLYPH: char = '·';

/// Rail visited by each column, in visit order.
pub fn visit_rows(key: FenceKey, len: usize) -> Vec<usize> {
    ZigZag::new(key).take(len).collect()
}

/// Columns in read order: rail 0 first, columns ascending within a rail.
///
/// `read_order(..)[k]` is the plaintext position of ciphertext position `k`.
fn read_order(key: FenceKey, len: usize) -> Vec<usize> {
    let rows = visit_rows(key, len);
    let mut order: Vec<usize> = (0..len).collect();
    // stable: columns keep their order within a rail
    order.sort_by_key(|&col| rows[col]);
    order
}

/// Encrypt `text` on the fence described by `key`.
///
/// The result is a permutation of the input characters with the same length.
pub fn encrypt(text: &str, key: FenceKey) -> String {
    let chars: Vec<char> = text.chars().collect();
    read_order(key, chars.len())
        .into_iter()
        .map(|col| chars[col])
        .collect()
}

/// Decrypt `ciphertext` produced by [`encrypt`] with the same key.
///
/// A different key yields a string of the same length but not the plaintext;
/// no integrity check is made.
pub fn decrypt(ciphertext: &str, key: FenceKey) -> String {
    let chars: Vec<char> = ciphertext.chars().collect();
    let mut plain = vec!['\0'; chars.len()];
    for (col, ch) in read_order(key, chars.len()).into_iter().zip(chars) {
        plain[col] = ch;
    }
    plain.into_iter().collect()
}

/// Draw the fence for `text`: one line per rail, one cell per column.
///
/// Empty cells are blank and trailing blanks are trimmed. Line breaks and
/// other control characters are drawn as visible placeholders so the grid
/// keeps its shape. Empty text draws nothing.
pub fn render(text: &str, key: FenceKey) -> String {
    if text.is_empty() {
        return String::new();
    }
    Fence::lay(text, key).to_string()
}

/// Dense grid of a laid-out fence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fence {
    cells: Vec<Vec<Option<char>>>,
}

impl Fence {
    /// Place every character of `text` along the zig-zag.
    pub fn lay(text: &str, key: FenceKey) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let mut cells = vec![vec![None; chars.len()]; key.rails()];
        for (col, (row, ch)) in ZigZag::new(key).zip(chars).enumerate() {
            cells[row][col] = Some(ch);
        }
        Self { cells }
    }

    /// Number of rails
    pub fn rails(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns (characters laid)
    pub fn width(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// Cell at `row`, `col`, or `None` if empty or outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get(row)?.get(col).copied().flatten()
    }

    /// Occupied cells of one rail, left to right
    pub fn rail(&self, row: usize) -> impl Iterator<Item = char> + '_ {
        self.cells
            .get(row)
            .into_iter()
            .flat_map(|rail| rail.iter().flatten().copied())
    }
}

fn glyph(ch: char) -> char {
    match ch {
        '\n' | '\r' => LINE_BREAK_GLYPH,
        c if c.is_control() => CONTROL_GLYPH,
        c => c,
    }
}

impl std::fmt::Display for Fence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, rail) in self.cells.iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let line: String = rail
                .iter()
                .map(|cell| cell.map_or(' ', glyph).to_string())
                .collect::<Vec<_>>()
                .join(" ");
            write!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
