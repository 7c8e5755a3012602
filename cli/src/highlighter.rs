use nu_ansi_term::{Color, Style};
use svexpr_core::lexer::{self, TokenClass, TokenKind, is_keyword};

#[derive(Debug)]
struct PaletteItem<'a> {
    name: &'a str,
    fg: Color,
}

const PALETTE: &[PaletteItem] = &[
    PaletteItem { name: "keyword", fg: Color::Magenta },
    PaletteItem { name: "operator", fg: Color::White },
    PaletteItem { name: "number", fg: Color::Cyan },
    PaletteItem { name: "string", fg: Color::Green },
    PaletteItem { name: "function", fg: Color::Blue },
    PaletteItem { name: "variable", fg: Color::Red },
    PaletteItem { name: "punctuation", fg: Color::White },
];

fn style_for(name: &str) -> Style {
    PALETTE
        .iter()
        .find(|item| item.name == name)
        .map(|item| Style::new().fg(item.fg))
        .unwrap_or_default()
}

/// Colors an expression for terminal output. Text the lexer does not
/// recognize is left as is.
pub fn highlight(source: &str) -> String {
    let Ok(tokens) = lexer::tokenize(source) else {
        return source.to_string();
    };

    let mut out = String::with_capacity(source.len() * 2);
    let mut cursor = 0;
    for token in tokens {
        out.push_str(&source[cursor..token.span.start()]);
        let name = match token.kind.class() {
            TokenClass::Literal => "number",
            TokenClass::String => "string",
            TokenClass::Bracket => "punctuation",
            TokenClass::Operator => "operator",
            TokenClass::Identifier if token.kind == TokenKind::SystemFunction => "function",
            TokenClass::Identifier if is_keyword(token.text) => "keyword",
            TokenClass::Identifier => "variable",
        };
        out.push_str(&style_for(name).paint(token.text).to_string());
        cursor = token.span.end();
    }
    out.push_str(&source[cursor..]);
    out
}

/// Colors a formatted result; the unresolvable value stands out.
pub fn highlight_result(result: &str) -> String {
    if result == svexpr::UNRESOLVABLE {
        Style::new().fg(Color::Red).bold().paint(result).to_string()
    } else {
        highlight(result)
    }
}
