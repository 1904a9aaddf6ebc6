//! Rule-block parsing.
//!
//! Text goes through two passes:
//!
//! 1. a bracket balance check, so unclosed blocks fail instead of being
//!    closed silently at end of input;
//! 2. the `cssparser` tokenizer, driving the rule, selector and value
//!    grammars in this module's children.
//!
//! Any error aborts the whole load; no partial table is produced.

mod balance;
mod selector;
mod value;

use cssparser::{
    BasicParseErrorKind, Delimiter, ParseError as CssError, ParseErrorKind as CssErrorKind,
    Parser, ParserInput, SourceLocation, ToCss, Token,
};

use crate::config::{LoadOptions, PropertyPolicy};
use crate::error::{ParseError, ParseErrorKind, ParseResult};
use crate::properties::{is_known_property, normalize_property};
use crate::selector::Selector;
use crate::sheet::{Declarations, StyleRule};

pub(crate) type CssResult<'i, T> = Result<T, CssError<'i, ParseErrorKind>>;

pub(crate) fn custom<'i>(location: SourceLocation, kind: ParseErrorKind) -> CssError<'i, ParseErrorKind> {
    CssError {
        kind: CssErrorKind::Custom(kind),
        location,
    }
}

pub(crate) fn describe(token: &Token<'_>) -> String {
    match token {
        Token::WhiteSpace(_) => "whitespace".to_string(),
        Token::CurlyBracketBlock => "'{'".to_string(),
        Token::SquareBracketBlock => "'['".to_string(),
        Token::ParenthesisBlock => "'('".to_string(),
        other => format!("'{}'", other.to_css_string()),
    }
}

fn into_error(err: CssError<'_, ParseErrorKind>) -> ParseError {
    let kind = match err.kind {
        CssErrorKind::Custom(kind) => kind,
        CssErrorKind::Basic(BasicParseErrorKind::EndOfInput) => ParseErrorKind::UnexpectedEnd,
        CssErrorKind::Basic(BasicParseErrorKind::UnexpectedToken(token)) => {
            ParseErrorKind::UnexpectedToken(describe(&token))
        }
        CssErrorKind::Basic(BasicParseErrorKind::AtRuleInvalid(name)) => {
            ParseErrorKind::UnsupportedAtRule(name.to_string())
        }
        CssErrorKind::Basic(other) => ParseErrorKind::UnexpectedToken(format!("{:?}", other)),
    };
    ParseError::new(kind, err.location.line + 1, err.location.column)
}

/// Parses a whole sheet.
pub(crate) fn parse_rules(source: &str, options: &LoadOptions) -> ParseResult<Vec<StyleRule>> {
    balance::check(source)?;
    let mut input = ParserInput::new(source);
    let mut parser = Parser::new(&mut input);
    let mut rules = Vec::new();
    while !parser.is_exhausted() {
        rules.push(parse_rule(&mut parser, options).map_err(into_error)?);
    }
    Ok(rules)
}

/// Parses text holding exactly one rule block.
pub(crate) fn parse_single_rule(source: &str) -> ParseResult<StyleRule> {
    balance::check(source)?;
    let options = LoadOptions::default();
    let mut input = ParserInput::new(source);
    let mut parser = Parser::new(&mut input);
    parser
        .parse_entirely(|input| parse_rule(input, &options))
        .map_err(into_error)
}

/// Parses a single selector with no comma alternatives.
pub(crate) fn parse_selector(source: &str) -> ParseResult<Selector> {
    balance::check(source)?;
    let mut input = ParserInput::new(source);
    let mut parser = Parser::new(&mut input);
    parser
        .parse_entirely(|input| selector::parse_selector(input))
        .map_err(into_error)
}

/// Parses a selector-less declaration list.
pub(crate) fn parse_declaration_list(source: &str, options: &LoadOptions) -> ParseResult<Declarations> {
    balance::check(source)?;
    let mut input = ParserInput::new(source);
    let mut parser = Parser::new(&mut input);
    parse_declarations(&mut parser, options).map_err(into_error)
}

fn parse_rule<'i>(input: &mut Parser<'i, '_>, options: &LoadOptions) -> CssResult<'i, StyleRule> {
    input.skip_whitespace();
    let start = input.current_source_location();
    let state = input.state();
    match input.next()?.clone() {
        Token::AtKeyword(name) => {
            return Err(custom(start, ParseErrorKind::UnsupportedAtRule(name.to_string())))
        }
        Token::CurlyBracketBlock => return Err(custom(start, ParseErrorKind::EmptySelector)),
        _ => input.reset(&state),
    }

    let selectors = input.parse_until_before(Delimiter::CurlyBracketBlock, |input| {
        selector::parse_selector_list(input)
    })?;

    let location = input.current_source_location();
    match input.next() {
        Ok(Token::CurlyBracketBlock) => {}
        _ => return Err(custom(location, ParseErrorKind::MissingBlock)),
    }
    let declarations = input.parse_nested_block(|input| parse_declarations(input, options))?;

    StyleRule::from_selectors(selectors, declarations)
        .ok_or_else(|| custom(start, ParseErrorKind::EmptySelector))
}

/// `property: value;` pairs until the end of the current block.
fn parse_declarations<'i>(input: &mut Parser<'i, '_>, options: &LoadOptions) -> CssResult<'i, Declarations> {
    let mut declarations = Declarations::new();
    loop {
        while input.try_parse(|input| input.expect_semicolon()).is_ok() {}
        if input.is_exhausted() {
            break;
        }

        input.skip_whitespace();
        let location = input.current_source_location();
        let property = match input.next()?.clone() {
            Token::Ident(name) => normalize_property(&name),
            token => {
                return Err(custom(
                    location,
                    ParseErrorKind::InvalidDeclaration(format!(
                        "expected property name, found {}",
                        describe(&token)
                    )),
                ))
            }
        };
        if options.properties == PropertyPolicy::KnownOnly && !is_known_property(&property) {
            return Err(custom(location, ParseErrorKind::UnknownProperty(property)));
        }

        input.skip_whitespace();
        let colon = input.current_source_location();
        if input.expect_colon().is_err() {
            return Err(custom(
                colon,
                ParseErrorKind::InvalidDeclaration(format!("expected ':' after '{}'", property)),
            ));
        }

        let value = input.parse_until_after(Delimiter::Semicolon, |input| {
            value::parse_value(input, &property)
        })?;
        declarations.insert(property, value);
    }
    Ok(declarations)
}
