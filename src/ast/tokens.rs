/// Lexical token of the strict query grammar.
///
/// Legacy dotted or slashed identifiers never reach this level: the
/// normalizer rewrites them into [`Token::String`] literals first.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Bare identifier or bareword value
    ///
    /// Made of ASCII letters, digits, underscores and hyphens.
    ///
    /// # Examples
    /// ```text
    /// calc
    /// modules
    /// tier-2
    /// 42
    /// ```
    Identifier(String),

    /// String literal enclosed in double quotes, escapes already resolved
    ///
    /// # Examples
    /// ```text
    /// "pricing.bvr"
    /// "data/input.json"
    /// ```
    String(String),

    /// Opens an argument list
    LParen,

    /// Closes an argument list
    RParen,

    /// Opens a field projection block
    LBrace,

    /// Closes a field projection block
    RBrace,

    /// Separates arguments
    Comma,

    /// Binds an argument key to its value
    ///
    /// # Examples
    /// ```text
    /// input="data.json"
    /// module=pricing
    /// ```
    Equals,

    /// Separates statements in a batch
    Semicolon,

    /// End of input
    Eof,
}

impl Token {
    /// Short human-readable description used in parse errors.
    pub fn describe(&self) -> String {
        match self {
            Token::Identifier(name) => format!("identifier '{}'", name),
            Token::String(s) => format!("string \"{}\"", s),
            Token::LParen => "'('".to_string(),
            Token::RParen => "')'".to_string(),
            Token::LBrace => "'{'".to_string(),
            Token::RBrace => "'}'".to_string(),
            Token::Comma => "','".to_string(),
            Token::Equals => "'='".to_string(),
            Token::Semicolon => "';'".to_string(),
            Token::Eof => "end of input".to_string(),
        }
    }
}
