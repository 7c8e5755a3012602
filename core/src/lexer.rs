//! Token-level view of an expression.
//!
//! The substitution engine and the radix tracker work on tokens rather than
//! on the full grammar: they only need to know where identifiers and numeral
//! literals are, and must never look inside string literals.

use core::fmt;

use logos::Logos;

use crate::parser::Span;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum TokenKind {
    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*")]
    Real,

    // Optional size, a tick, then signedness/radix/digits. Digit validity is
    // checked by the numeral decoder, not here.
    #[regex(r"([0-9][0-9_]*)?'[A-Za-z0-9_]+")]
    BasedNumber,

    #[regex(r"[0-9][0-9_]*")]
    Decimal,

    #[regex(r#""[^"]*""#)]
    Str,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,

    #[regex(r"\$[A-Za-z_][A-Za-z0-9_]*")]
    SystemFunction,

    #[token("'{")]
    TickBrace,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[token("?")]
    Question,
    #[token(":")]
    Colon,

    #[token("**")]
    Pow,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("<<")]
    Shl,
    #[token(">>")]
    Shr,
    #[token("<=")]
    Le,
    #[token(">=")]
    Ge,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("&&")]
    AndAnd,
    #[token("||")]
    OrOr,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("~")]
    Tilde,
    #[token("!")]
    Bang,
}

/// Coarse classification of tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    Literal,
    Identifier,
    Operator,
    Bracket,
    String,
}

impl TokenKind {
    pub fn class(self) -> TokenClass {
        use TokenKind::*;
        match self {
            Real | BasedNumber | Decimal => TokenClass::Literal,
            Str => TokenClass::String,
            Identifier | SystemFunction => TokenClass::Identifier,
            TickBrace | LBrace | RBrace | LParen | RParen => TokenClass::Bracket,
            _ => TokenClass::Operator,
        }
    }

    /// Operators that can also appear in prefix position.
    pub fn is_prefix_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Minus | TokenKind::Plus | TokenKind::Tilde | TokenKind::Bang
        )
    }

    /// Whether an operand must follow this token, putting an `is_prefix_operator`
    /// token after it in prefix position.
    fn expects_operand(self) -> bool {
        !matches!(
            self.class(),
            TokenClass::Literal | TokenClass::Identifier | TokenClass::String
        ) && !matches!(self, TokenKind::RParen | TokenKind::RBrace)
    }

    pub fn is_numeral(self) -> bool {
        matches!(
            self,
            TokenKind::Real | TokenKind::BasedNumber | TokenKind::Decimal
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub span: Span,
}

impl Token<'_> {
    /// An identifier that names a parameter, as opposed to a keyword.
    pub fn is_reference(&self) -> bool {
        self.kind == TokenKind::Identifier && !is_keyword(self.text)
    }
}

/// A character sequence the lexer does not recognize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub span: Span,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unrecognized input at {}..{}",
            self.span.start(),
            self.span.end()
        )
    }
}

/// Boolean keywords are matched case-insensitively.
pub fn is_keyword(text: &str) -> bool {
    text.eq_ignore_ascii_case("true") || text.eq_ignore_ascii_case("false")
}

pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    TokenKind::lexer(source)
        .spanned()
        .map(|(kind, range)| match kind {
            Ok(kind) => Ok(Token {
                kind,
                text: &source[range.clone()],
                span: Span::from(range),
            }),
            Err(()) => Err(LexError {
                span: Span::from(range),
            }),
        })
        .collect()
}

/// Problems with bracket structure found before parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DelimiterError {
    /// An opening bracket is never closed.
    Unclosed { delimiter: char, span: Span },
    /// A closing bracket does not match the innermost open one.
    Mismatched {
        expected: Option<char>,
        found: char,
        span: Span,
    },
}

/// An open bracket seen by [`check_delimiters`].
struct OpenBracket {
    closer: char,
    span: Span,
    /// Nesting to drop when this bracket closes: the bracket itself plus
    /// any prefix operators applied to it.
    weight: usize,
    /// `?` tokens in the current element, each one level of ternary chain.
    ternaries: usize,
}

/// Checks that brackets are balanced and returns the deepest nesting level.
///
/// Besides brackets, two unbracketed forms nest in the parse tree and are
/// counted too: runs of prefix operators (`- - ~x`) and ternary chains
/// (`a ? b : c ? d : e`). Flat runs of binary operators do not nest.
pub fn check_delimiters(tokens: &[Token<'_>]) -> Result<usize, DelimiterError> {
    let mut stack: Vec<OpenBracket> = Vec::new();
    // Ternaries outside any bracket.
    let mut top_ternaries = 0;
    let mut depth = 0;
    let mut max_depth = 0;
    let mut prefix_run = 0;
    let mut previous: Option<TokenKind> = None;

    for token in tokens {
        let in_prefix_position = previous.is_none_or(TokenKind::expects_operand);
        if in_prefix_position && token.kind.is_prefix_operator() {
            prefix_run += 1;
            depth += 1;
            max_depth = max_depth.max(depth);
            previous = Some(token.kind);
            continue;
        }

        match token.kind {
            TokenKind::LParen | TokenKind::LBrace | TokenKind::TickBrace => {
                stack.push(OpenBracket {
                    closer: if token.kind == TokenKind::LParen { ')' } else { '}' },
                    span: token.span.clone(),
                    weight: prefix_run + 1,
                    ternaries: 0,
                });
                depth += 1;
            }
            TokenKind::RParen | TokenKind::RBrace => {
                depth -= prefix_run;
                let found = if token.kind == TokenKind::RParen {
                    ')'
                } else {
                    '}'
                };
                match stack.pop() {
                    Some(open) if open.closer == found => {
                        depth -= open.weight + open.ternaries;
                    }
                    Some(open) => {
                        return Err(DelimiterError::Mismatched {
                            expected: Some(open.closer),
                            found,
                            span: token.span.clone(),
                        });
                    }
                    None => {
                        return Err(DelimiterError::Mismatched {
                            expected: None,
                            found,
                            span: token.span.clone(),
                        });
                    }
                }
            }
            _ => {
                depth -= prefix_run;
                let ternaries = stack
                    .last_mut()
                    .map_or(&mut top_ternaries, |open| &mut open.ternaries);
                match token.kind {
                    TokenKind::Question => {
                        *ternaries += 1;
                        depth += 1;
                    }
                    // A new aggregate element or call argument starts a new chain.
                    TokenKind::Comma => {
                        depth -= *ternaries;
                        *ternaries = 0;
                    }
                    _ => {}
                }
            }
        }
        prefix_run = 0;
        max_depth = max_depth.max(depth);
        previous = Some(token.kind);
    }

    match stack.pop() {
        Some(open) => Err(DelimiterError::Unclosed {
            delimiter: if open.closer == ')' { '(' } else { '{' },
            span: open.span,
        }),
        None => Ok(max_depth),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_numerals() {
        use TokenKind::*;
        assert_eq!(kinds("1 1.5 'h1F 8'hFF 'sd2 10_000"), vec![
            Decimal,
            Real,
            BasedNumber,
            BasedNumber,
            BasedNumber,
            Decimal
        ]);
    }

    #[test]
    fn test_operators_take_longest_match() {
        use TokenKind::*;
        assert_eq!(kinds("a**b<=c<<d!=e&&f||g"), vec![
            Identifier, Pow, Identifier, Le, Identifier, Shl, Identifier, NotEq, Identifier,
            AndAnd, Identifier, OrOr, Identifier
        ]);
    }

    #[test]
    fn test_strings_hide_identifiers() {
        let tokens = tokenize(r#""one two" + three"#).unwrap();
        let references: Vec<_> = tokens
            .iter()
            .filter(|t| t.is_reference())
            .map(|t| t.text)
            .collect();
        assert_eq!(references, vec!["three"]);
    }

    #[test]
    fn test_keywords_and_functions_are_not_references() {
        let tokens = tokenize("TRUE + $clog2(width) + False").unwrap();
        let references: Vec<_> = tokens
            .iter()
            .filter(|t| t.is_reference())
            .map(|t| t.text)
            .collect();
        assert_eq!(references, vec!["width"]);
    }

    #[test]
    fn test_c_style_hex_splits_into_decimal_and_identifier() {
        assert_eq!(kinds("0xff"), vec![TokenKind::Decimal, TokenKind::Identifier]);
    }

    #[test]
    fn test_spans() {
        let tokens = tokenize("  ab + 'h1").unwrap();
        assert_eq!(tokens[0].span, Span::new(2, 4));
        assert_eq!(tokens[2].span, Span::new(7, 10));
        assert_eq!(tokens[2].text, "'h1");
    }

    #[test]
    fn test_unrecognized_input() {
        assert!(tokenize("#ff").is_err());
        assert!(tokenize(r#""unterminated"#).is_err());
    }

    #[test]
    fn test_unbracketed_nesting() {
        let depth = |s: &str| check_delimiters(&tokenize(s).unwrap());
        assert_eq!(depth("- - ~1"), Ok(3));
        assert_eq!(depth("-1 + -2 - -3"), Ok(1));
        assert_eq!(depth("-(-(1))"), Ok(4));
        assert_eq!(depth("a ? b : c ? d : e"), Ok(2));
        assert_eq!(depth("(a ? b : c) + (d ? e : f)"), Ok(2));
        assert_eq!(depth("{a ? b : c, d ? e : f}"), Ok(2));
        assert_eq!(depth(&vec!["1"; 1_000].join(" + ")), Ok(0));
    }

    #[test]
    fn test_delimiters() {
        let depth = |s: &str| check_delimiters(&tokenize(s).unwrap());
        assert_eq!(depth("1 + 2"), Ok(0));
        assert_eq!(depth("((1) + {2, '{3}})"), Ok(3));
        assert!(matches!(
            depth("((1)"),
            Err(DelimiterError::Unclosed { delimiter: '(', .. })
        ));
        assert!(matches!(
            depth("(1))"),
            Err(DelimiterError::Mismatched { expected: None, found: ')', .. })
        ));
        assert!(matches!(
            depth("{1)"),
            Err(DelimiterError::Mismatched {
                expected: Some('}'),
                found: ')',
                ..
            })
        ));
    }
}
