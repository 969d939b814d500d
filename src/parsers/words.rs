//! Shell-style word splitting for interactive commands.
//!
//! Splits on spaces and tabs. Double quotes group words (`"two words"`), and a
//! backslash inside quotes escapes the next character.

/// Stateful cursor over one command line.
pub struct Cursor {
    pub src: Vec<char>,
    pub pos: usize,
}

impl Cursor {
    pub fn new(src: &str) -> Self {
        Self {
            src: src.chars().collect(),
            pos: 0,
        }
    }

    pub fn eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn peek(&self) -> Option<char> {
        self.src.get(self.pos).copied()
    }

    /// Skip spaces, tabs and a stray carriage return.
    pub fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t' | '\r')) {
            self.pos += 1;
        }
    }

    /// Read one word. Returns `Ok(None)` at end of input.
    pub fn next_word(&mut self) -> Result<Option<String>, String> {
        self.skip_ws();
        if self.eof() {
            return Ok(None);
        }
        let mut word = String::new();
        while let Some(ch) = self.peek() {
            match ch {
                ' ' | '\t' | '\r' => break,
                '"' => {
                    let start = self.pos;
                    self.pos += 1;
                    self.read_quoted(&mut word)
                        .map_err(|()| format!("unterminated quote at column {}", start + 1))?;
                }
                _ => {
                    word.push(ch);
                    self.pos += 1;
                }
            }
        }
        Ok(Some(word))
    }

    /// Consume a quoted section (opening quote already consumed).
    fn read_quoted(&mut self, word: &mut String) -> Result<(), ()> {
        while let Some(ch) = self.peek() {
            self.pos += 1;
            match ch {
                '"' => return Ok(()),
                '\\' => {
                    let escaped = self.peek().ok_or(())?;
                    self.pos += 1;
                    word.push(escaped);
                }
                _ => word.push(ch),
            }
        }
        Err(())
    }
}

/// Split a command line into words.
pub fn split_words(line: &str) -> Result<Vec<String>, String> {
    let mut cursor = Cursor::new(line);
    let mut words = Vec::new();
    while let Some(word) = cursor.next_word()? {
        words.push(word);
    }
    Ok(words)
}
