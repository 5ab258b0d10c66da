//! Declaration lexer using logos.
//!
//! Only the handful of tokens the splitter and extractor care about get
//! their own kind: declaration keywords, braces, the field punctuation
//! (`:`, `;`, `?`) and line breaks. Everything else is an identifier, a
//! number, a string literal or a run of punctuation whose text is read back
//! from the source when needed. Whitespace and comments are skipped.

use logos::Logos;

use crate::Span;

/// A token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The span of the token in the source.
    pub span: Span,
}

impl Token {
    /// Returns the source text of this token.
    pub fn text(self, source: &str) -> &str {
        self.span.slice(source)
    }
}

/// Token kinds for declaration source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Logos, Default)]
#[logos(skip r"[ \t\r\f]+")]
#[logos(skip(r"//[^\n]*", allow_greedy = true))]
#[logos(skip r"/\*([^*]|\*+[^*/])*\*+/")]
pub enum TokenKind {
    // === Keywords ===
    /// `export`
    #[token("export")]
    Export,

    /// `default`
    #[token("default")]
    Default,

    /// `declare`
    #[token("declare")]
    Declare,

    /// `abstract`
    #[token("abstract")]
    Abstract,

    /// `interface`
    #[token("interface")]
    Interface,

    /// `class`
    #[token("class")]
    Class,

    // === Punctuation ===
    /// `{`
    #[token("{")]
    LBrace,

    /// `}`
    #[token("}")]
    RBrace,

    /// `:`
    #[token(":")]
    Colon,

    /// `;`
    #[token(";")]
    Semicolon,

    /// `?`
    #[token("?")]
    Question,

    /// Newline
    #[token("\n")]
    Newline,

    /// An identifier (declaration name, field name, type name).
    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Ident,

    /// A number
    #[regex(r"[0-9]+")]
    Number,

    /// A quoted or template string literal. Lexed as one token so braces
    /// inside it never count towards brace depth.
    #[regex(r#""([^"\\\n]|\\[^\n])*""#)]
    #[regex(r#"'([^'\\\n]|\\[^\n])*'"#)]
    #[regex(r"`([^`\\]|\\.)*`")]
    Str,

    /// Any other single character (`[`, `]`, `<`, `|`, ...).
    #[regex(r"[^\sA-Za-z0-9_${}:;?]")]
    Punct,

    /// End of file
    Eof,

    /// Invalid/unknown token
    #[default]
    Error,
}

impl TokenKind {
    /// Returns true for tokens that can name something: plain identifiers
    /// and the contextual keywords, which are valid field names.
    pub fn is_word(&self) -> bool {
        matches!(
            self,
            TokenKind::Ident
                | TokenKind::Export
                | TokenKind::Default
                | TokenKind::Declare
                | TokenKind::Abstract
                | TokenKind::Interface
                | TokenKind::Class
        )
    }

    /// Returns true for modifiers allowed between `export` and the
    /// declaration keyword.
    pub fn is_declaration_modifier(&self) -> bool {
        matches!(
            self,
            TokenKind::Default | TokenKind::Declare | TokenKind::Abstract
        )
    }

    /// Returns a human-readable name for this token kind.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Export => "'export'",
            TokenKind::Default => "'default'",
            TokenKind::Declare => "'declare'",
            TokenKind::Abstract => "'abstract'",
            TokenKind::Interface => "'interface'",
            TokenKind::Class => "'class'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::Colon => "':'",
            TokenKind::Semicolon => "';'",
            TokenKind::Question => "'?'",
            TokenKind::Newline => "newline",
            TokenKind::Ident => "identifier",
            TokenKind::Number => "number",
            TokenKind::Str => "string literal",
            TokenKind::Punct => "punctuation",
            TokenKind::Eof => "end of file",
            TokenKind::Error => "invalid token",
        }
    }
}

/// A lexer for declaration source text.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
    source: &'src str,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    pub fn new(source: &'src str) -> Self {
        Self {
            inner: TokenKind::lexer(source),
            source,
            finished: false,
        }
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.inner.next() {
            Some(Ok(kind)) => Some(Token {
                kind,
                span: Span::from_usize_range(self.inner.span()),
            }),
            Some(Err(())) => Some(Token {
                kind: TokenKind::Error,
                span: Span::from_usize_range(self.inner.span()),
            }),
            None => {
                self.finished = true;
                Some(Token {
                    kind: TokenKind::Eof,
                    span: Span::from_usize_range(self.source.len()..self.source.len()),
                })
            }
        }
    }
}

/// Lexes `source` into a token vector that always ends with `Eof`.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}
