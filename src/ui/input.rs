/// Line input.
///
/// The game only ever asks for whole lines, typed in the terminal's normal
/// (cooked) mode so the player gets echo and backspace for free. `None`
/// means the input is exhausted (EOF / Ctrl-D).

use std::io::{self, BufRead};

pub trait LineSource {
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

pub struct StdinLines<R: BufRead> {
    reader: R,
}

impl StdinLines<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        StdinLines::new(io::stdin().lock())
    }
}

impl<R: BufRead> StdinLines<R> {
    pub fn new(reader: R) -> Self {
        StdinLines { reader }
    }
}

impl<R: BufRead> LineSource for StdinLines<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        // Strip the terminator only; other whitespace is the parser's call.
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_lines_then_eof() {
        let mut src = StdinLines::new(Cursor::new("2\r\n\n 42 \n"));
        assert_eq!(src.read_line().unwrap(), Some("2".to_string()));
        assert_eq!(src.read_line().unwrap(), Some(String::new()));
        assert_eq!(src.read_line().unwrap(), Some(" 42 ".to_string()));
        assert_eq!(src.read_line().unwrap(), None);
    }

    #[test]
    fn last_line_without_newline() {
        let mut src = StdinLines::new(Cursor::new("Y"));
        assert_eq!(src.read_line().unwrap(), Some("Y".to_string()));
        assert_eq!(src.read_line().unwrap(), None);
    }
}
