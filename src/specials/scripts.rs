// src/specials/scripts.rs

//! Sector colours set by ACS scripts.
//!
//! Only OPEN scripts are read, since they run once when the level starts.
//! Inside them, `Sector_SetColor(tag, r, g, b)` and `Sector_SetFade(tag, r,
//! g, b)` calls bind a colour to a sector tag.

use log::{debug, warn};

use crate::specials::{ColRgba, SectorColour};

const SPECIAL_CHARACTERS: &str = ";,:|={}/()";

/// Colours found in one scripts lump, in script order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScriptColours {
    pub colours: Vec<SectorColour>,
    pub fade_colours: Vec<SectorColour>,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Token {
    pub text: String,
    pub quoted: bool,
}

impl Token {
    fn integer(&self) -> Option<i64> {
        if self.quoted {
            return None;
        }
        self.text.parse().ok()
    }
}

/// Whitespace separated tokens, with each of [`SPECIAL_CHARACTERS`] a token
/// of its own. Comments are dropped and quoted strings kept whole.
pub(crate) struct Tokenizer {
    tokens: Vec<Token>,
    pos: usize,
}

impl Tokenizer {
    pub(crate) fn new(data: &[u8]) -> Self {
        Self {
            tokens: tokenize(&String::from_utf8_lossy(data)),
            pos: 0,
        }
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(crate) fn adv(&mut self) {
        self.adv_by(1);
    }

    pub(crate) fn adv_by(&mut self, count: usize) {
        self.pos = (self.pos + count).min(self.tokens.len());
    }

    pub(crate) fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    pub(crate) fn check(&self, text: &str) -> bool {
        self.current().is_some_and(|t| !t.quoted && t.text == text)
    }

    /// Case-insensitive [`Tokenizer::check`].
    pub(crate) fn check_nc(&self, text: &str) -> bool {
        self.current().is_some_and(|t| !t.quoted && t.text.eq_ignore_ascii_case(text))
    }

    /// Tokens from the current one up to (not including) `end`. Leaves the
    /// tokenizer on `end`, or at the end of input.
    pub(crate) fn tokens_until(&mut self, end: &str) -> Vec<Token> {
        let mut out = Vec::new();
        while let Some(token) = self.current() {
            if !token.quoted && token.text == end {
                break;
            }
            out.push(token.clone());
            self.adv();
        }
        out
    }
}

fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = text.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        if c == '/' {
            let mut ahead = chars.clone();
            ahead.next();
            match ahead.peek() {
                Some('/') => {
                    for c in chars.by_ref() {
                        if c == '\n' {
                            break;
                        }
                    }
                    continue;
                }
                Some('*') => {
                    chars.next();
                    chars.next();
                    let mut prev = '\0';
                    for c in chars.by_ref() {
                        if prev == '*' && c == '/' {
                            break;
                        }
                        prev = c;
                    }
                    continue;
                }
                _ => {}
            }
        }

        if c == '"' {
            chars.next();
            let mut text = String::new();
            while let Some(c) = chars.next() {
                match c {
                    '"' => break,
                    '\\' => {
                        if let Some(escaped) = chars.next() {
                            text.push(escaped);
                        }
                    }
                    _ => text.push(c),
                }
            }
            tokens.push(Token { text, quoted: true });
            continue;
        }

        if SPECIAL_CHARACTERS.contains(c) {
            chars.next();
            tokens.push(Token { text: c.to_string(), quoted: false });
            continue;
        }

        let mut text = String::new();
        while let Some(&c) = chars.peek() {
            if c.is_whitespace() || c == '"' || SPECIAL_CHARACTERS.contains(c) {
                break;
            }
            text.push(c);
            chars.next();
        }
        tokens.push(Token { text, quoted: false });
    }

    tokens
}

/// Scans an ACS source lump for colours set by OPEN scripts. Calls with bad
/// arguments are logged and skipped; nothing here fails.
pub fn parse_acs_colours(data: &[u8]) -> ScriptColours {
    let mut out = ScriptColours::default();
    let mut tz = Tokenizer::new(data);

    while !tz.at_end() {
        if tz.check_nc("script") {
            debug!("script found");

            // skip the script number (or name)
            tz.adv_by(2);

            if tz.check_nc("OPEN") {
                debug!("script is OPEN");

                while !tz.at_end() && !tz.check("{") {
                    tz.adv();
                }
                parse_open_script(&mut tz, &mut out);
            }
        }

        tz.adv();
    }

    out
}

// Reads an OPEN script body, starting on its opening brace and stopping on
// the matching closing brace.
fn parse_open_script(tz: &mut Tokenizer, out: &mut ScriptColours) {
    let mut depth = 0usize;

    while !tz.at_end() {
        if tz.check("{") {
            depth += 1;
        } else if tz.check("}") {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                return;
            }
        } else if tz.check_nc("Sector_SetColor") {
            let params = tz.tokens_until(")");
            match parse_colour_args("Sector_SetColor", &params) {
                Ok((tag, colour)) => {
                    debug!("Sector tag {}, colour {},{},{}", tag, colour.r, colour.g, colour.b);
                    out.colours.push(SectorColour {
                        tag,
                        colour: ColRgba { a: 255, ..colour },
                    });
                }
                Err(msg) => warn!("{}", msg),
            }
        } else if tz.check_nc("Sector_SetFade") {
            let params = tz.tokens_until(")");
            match parse_colour_args("Sector_SetFade", &params) {
                Ok((tag, colour)) => {
                    debug!("Sector tag {}, fade colour {},{},{}", tag, colour.r, colour.g, colour.b);
                    out.fade_colours.push(SectorColour {
                        tag,
                        colour: ColRgba { a: 0, ..colour },
                    });
                }
                Err(msg) => warn!("{}", msg),
            }
        }

        tz.adv();
    }
}

/// Takes the first four integers in `params` as tag, red, green and blue.
/// Anything that isn't an integer is skipped.
pub(crate) fn parse_colour_args(name: &str, params: &[Token]) -> Result<(i32, ColRgba), String> {
    let values: Vec<i64> = params.iter().filter_map(Token::integer).take(4).collect();

    let &[tag, r, g, b] = values.as_slice() else {
        return Err(format!("Invalid {} parameters", name));
    };
    let tag = i32::try_from(tag).map_err(|_| format!("Invalid {} tag {}", name, tag))?;

    let channel = |v: i64| v.clamp(0, 255) as u8;
    Ok((tag, ColRgba::new(channel(r), channel(g), channel(b), 255)))
}
