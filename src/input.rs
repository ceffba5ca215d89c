//! Line-oriented input boundary: coordinate grammar and the sentinel loop.

use std::io::BufRead;

/// Parses one input line. Returns `Ok(None)` for the quit sentinel (the
/// exact lines `"q"` or `"Q"`), `Ok(Some(coords))` for exactly four
/// whitespace-separated integers, and `Err` with a format diagnostic for
/// anything else, including trailing tokens after the fourth integer.
pub fn parse_wall_line(line: &str) -> Result<Option<[i32; 4]>, String> {
    if line == "q" || line == "Q" {
        return Ok(None);
    }
    let mut coords = [0i32; 4];
    let mut tokens = line.split_whitespace();
    for slot in &mut coords {
        let token = tokens.next().ok_or_else(|| format_diagnostic(line))?;
        *slot = token.parse().map_err(|_| format_diagnostic(line))?;
    }
    if tokens.next().is_some() {
        return Err(format_diagnostic(line));
    }
    Ok(Some(coords))
}

fn format_diagnostic(line: &str) -> String {
    format!("Invalid input {line:?}. Use format: x1 y1 x2 y2 (e.g., 0 0 300 0)")
}

/// Lazy sequence of validated coordinate 4-tuples over a line source.
///
/// Terminates on the quit sentinel or end-of-input. Malformed lines are not
/// fatal: they surface as `Err` items so the caller can report them and keep
/// consuming.
pub struct WallLines<R> {
    reader: R,
    done: bool,
}

impl<R: BufRead> WallLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for WallLines<R> {
    type Item = Result<[i32; 4], String>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => self.done = true,
                Ok(_) => {
                    let line = line.trim_end_matches(['\n', '\r']);
                    match parse_wall_line(line) {
                        Ok(Some(coords)) => return Some(Ok(coords)),
                        Ok(None) => self.done = true,
                        Err(e) => return Some(Err(e)),
                    }
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(format!("Failed to read input: {e}")));
                }
            }
        }
        None
    }
}
