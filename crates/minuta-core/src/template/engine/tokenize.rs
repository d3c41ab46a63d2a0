//! Placeholder tokenization
//!
//! Provides O(n) tokenization using a state machine.

/// A single `{{...}}` token with position information
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token<'a> {
    /// Text between the delimiters, verbatim
    pub name: &'a str,
    /// Absolute byte position of `{{` in the template
    pub start: usize,
    /// Total length in bytes including `{{` and `}}`
    pub length: usize,
    /// Line number where the token starts (for error messages)
    pub line: usize,
}

impl Token<'_> {
    /// Byte position one past the closing `}}`
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    /// `{{}}` or whitespace only
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty()
    }
}

/// Tokenization state machine (explicit for testability)
///
/// # State Transitions
///
/// ```text
/// Normal ──{───> SeenLBrace ──{───> InToken ──}───> SeenRBrace ──}───> [Yield Token] → Normal
///   │               │                  │ │                │
///   │ (not {)       │ (not {)          │ │ ({{)           │ (not })
///   └──────────────>└─────────> Normal │ └─> InToken      └──────────> InToken
///                                      │     (restart)
///                                      └─ \n ──> Normal (token abandoned)
/// ```
///
/// A `{{` without a closing `}}` on the same line never yields a token, so it
/// stays literal text.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ScanState {
    /// Normal text scanning
    Normal,

    /// Seen first `{`, checking for second `{`
    SeenLBrace {
        /// Position of the first `{` character
        pos: usize,
    },

    /// Inside `{{...}}`, scanning until `}}`
    InToken {
        /// Byte position of the opening `{{`
        start: usize,
        /// Byte position where token content starts (after `{{`)
        content_start: usize,
        /// Line of the opening `{{`
        line: usize,
    },

    /// Seen first `}` inside token, checking for second `}`
    SeenRBrace {
        /// Byte position of the opening `{{`
        start: usize,
        /// Byte position where token content starts (after `{{`)
        content_start: usize,
        /// Position of the first `}` character
        rbrace_pos: usize,
        /// Line of the opening `{{`
        line: usize,
    },
}

/// Iterator over placeholder tokens in a template string
///
/// Each byte is inspected a bounded number of times and the position never
/// moves backward.
pub(crate) struct TokenStream<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
    state: ScanState,
    line: usize,
}

impl<'a> TokenStream<'a> {
    /// Create a new TokenStream from template text
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            pos: 0,
            state: ScanState::Normal,
            line: 1,
        }
    }

    /// Current line number
    pub fn line(&self) -> usize {
        self.line
    }

    fn process_normal_state(&mut self, byte: u8) {
        if byte == b'{' {
            self.state = ScanState::SeenLBrace { pos: self.pos };
        } else if byte == b'\n' {
            self.line += 1;
        }
        self.pos += 1;
    }

    /// Returns false if the byte should be reprocessed in Normal state
    fn process_seen_lbrace(&mut self, byte: u8, lbrace_pos: usize) -> bool {
        if byte == b'{' {
            self.state = ScanState::InToken {
                start: lbrace_pos,
                content_start: self.pos + 1,
                line: self.line,
            };
            self.pos += 1;
            true
        } else {
            self.state = ScanState::Normal;
            false
        }
    }

    fn process_in_token(&mut self, byte: u8, start: usize, content_start: usize, line: usize) {
        match byte {
            b'}' => {
                self.state = ScanState::SeenRBrace {
                    start,
                    content_start,
                    rbrace_pos: self.pos,
                    line,
                };
                self.pos += 1;
            }
            b'{' if self.bytes.get(self.pos + 1) == Some(&b'{') => {
                // No nesting: the earlier `{{` becomes literal text
                self.state = ScanState::InToken {
                    start: self.pos,
                    content_start: self.pos + 2,
                    line: self.line,
                };
                self.pos += 2;
            }
            b'\n' => {
                self.line += 1;
                self.state = ScanState::Normal;
                self.pos += 1;
            }
            _ => self.pos += 1,
        }
    }

    /// Returns the completed token, if any
    fn process_seen_rbrace(
        &mut self,
        byte: u8,
        start: usize,
        content_start: usize,
        rbrace_pos: usize,
        line: usize,
    ) -> Option<Token<'a>> {
        if byte == b'}' {
            let token = Token {
                name: &self.text[content_start..rbrace_pos],
                start,
                length: self.pos + 1 - start,
                line,
            };
            self.state = ScanState::Normal;
            self.pos += 1;
            Some(token)
        } else {
            // A lone `}` is part of the name; reprocess this byte in InToken
            self.state = ScanState::InToken {
                start,
                content_start,
                line,
            };
            None
        }
    }
}

impl<'a> Iterator for TokenStream<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        while self.pos < self.bytes.len() {
            let byte = self.bytes[self.pos];

            match self.state.clone() {
                ScanState::Normal => self.process_normal_state(byte),
                ScanState::SeenLBrace { pos } => {
                    self.process_seen_lbrace(byte, pos);
                }
                ScanState::InToken {
                    start,
                    content_start,
                    line,
                } => self.process_in_token(byte, start, content_start, line),
                ScanState::SeenRBrace {
                    start,
                    content_start,
                    rbrace_pos,
                    line,
                } => {
                    if let Some(token) =
                        self.process_seen_rbrace(byte, start, content_start, rbrace_pos, line)
                    {
                        return Some(token);
                    }
                }
            }
        }
        None
    }
}
