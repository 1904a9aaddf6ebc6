//! Selector grammar.

use cssparser::{Parser, Token};

use super::{custom, describe, CssResult};
use crate::error::ParseErrorKind;
use crate::selector::{
    AttributeOp, AttributeSelector, Combinator, Compound, ElementSelector, Selector, StateSelector,
};

/// `selector[, selector ...]`, up to (not including) the rule's `{`.
pub(super) fn parse_selector_list<'i>(input: &mut Parser<'i, '_>) -> CssResult<'i, Vec<Selector>> {
    input.skip_whitespace();
    let location = input.current_source_location();
    if input.is_exhausted() {
        return Err(custom(location, ParseErrorKind::EmptySelector));
    }
    input.parse_comma_separated(|input| parse_selector(input))
}

#[derive(Default)]
struct Builder {
    compounds: Vec<Compound>,
    combinators: Vec<Combinator>,
    pending: Option<Combinator>,
    current: Option<Compound>,
}

impl Builder {
    /// The compound being built, starting a new one if needed.
    fn compound(&mut self) -> &mut Compound {
        if self.current.is_none() && !self.compounds.is_empty() {
            let combinator = self.pending.take().unwrap_or(Combinator::Descendant);
            self.combinators.push(combinator);
        }
        self.current.get_or_insert_with(Compound::universal)
    }

    fn close(&mut self) {
        if let Some(compound) = self.current.take() {
            self.compounds.push(compound);
        }
    }
}

fn invalid(reason: impl Into<String>) -> ParseErrorKind {
    ParseErrorKind::InvalidSelector(reason.into())
}

/// One selector with its combinators, stopping at a comma or the end of
/// the delimited input.
pub(super) fn parse_selector<'i>(input: &mut Parser<'i, '_>) -> CssResult<'i, Selector> {
    input.skip_whitespace();
    let start = input.current_source_location();
    let mut builder = Builder::default();

    loop {
        let location = input.current_source_location();
        let token = match input.next_including_whitespace() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };
        match token {
            Token::WhiteSpace(_) => {
                builder.close();
                if !builder.compounds.is_empty() && builder.pending.is_none() {
                    builder.pending = Some(Combinator::Descendant);
                }
            }
            Token::Delim('>') => {
                builder.close();
                if builder.compounds.is_empty() || builder.pending == Some(Combinator::Child) {
                    return Err(custom(location, invalid("'>' needs a selector on each side")));
                }
                builder.pending = Some(Combinator::Child);
            }
            Token::Ident(name) => {
                if builder.current.is_some() {
                    return Err(custom(
                        location,
                        invalid(format!("type '{}' must start a compound selector", name)),
                    ));
                }
                builder.compound().element = ElementSelector::Type(name.to_string());
            }
            Token::Delim('*') => {
                if builder.current.is_some() {
                    return Err(custom(location, invalid("'*' must start a compound selector")));
                }
                builder.compound();
            }
            Token::Delim('.') => {
                if builder.current.is_some() {
                    return Err(custom(location, invalid("'.' must start a compound selector")));
                }
                let name = match input.next_including_whitespace()?.clone() {
                    Token::Ident(name) => name.to_string(),
                    token => {
                        return Err(custom(
                            location,
                            invalid(format!("expected class name after '.', found {}", describe(&token))),
                        ))
                    }
                };
                builder.compound().element = ElementSelector::Exact(name);
            }
            Token::IDHash(id) | Token::Hash(id) => {
                let compound = builder.compound();
                if compound.id.is_some() {
                    return Err(custom(location, invalid(format!("second id '#{}'", id))));
                }
                compound.id = Some(id.to_string());
            }
            Token::SquareBracketBlock => {
                let attribute = input.parse_nested_block(|input| parse_attribute(input))?;
                builder.compound().attributes.push(attribute);
            }
            Token::Colon => parse_pseudo(input, &mut builder)?,
            token => {
                return Err(custom(
                    location,
                    ParseErrorKind::UnexpectedToken(format!("{} in selector", describe(&token))),
                ))
            }
        }
    }

    builder.close();
    if builder.pending == Some(Combinator::Child) {
        return Err(custom(start, invalid("'>' needs a selector on each side")));
    }
    if builder.compounds.is_empty() {
        return Err(custom(start, ParseErrorKind::EmptySelector));
    }
    Selector::from_parts(builder.compounds, builder.combinators)
        .ok_or_else(|| custom(start, invalid("only the last compound may name a subcontrol")))
}

/// After a `:`: `:state`, `:!state` or `::subcontrol`.
fn parse_pseudo<'i>(input: &mut Parser<'i, '_>, builder: &mut Builder) -> CssResult<'i, ()> {
    let location = input.current_source_location();
    match input.next_including_whitespace()?.clone() {
        Token::Ident(state) => {
            builder.compound().states.push(StateSelector {
                name: state.to_string(),
                negated: false,
            });
        }
        Token::Delim('!') => {
            let state = expect_name(input, "state")?;
            builder.compound().states.push(StateSelector {
                name: state,
                negated: true,
            });
        }
        Token::Colon => {
            let sub = expect_name(input, "subcontrol")?;
            let compound = builder.compound();
            if compound.subcontrol.is_some() {
                return Err(custom(location, invalid(format!("second subcontrol '::{}'", sub))));
            }
            compound.subcontrol = Some(sub);
        }
        token => {
            return Err(custom(
                location,
                invalid(format!("expected state after ':', found {}", describe(&token))),
            ))
        }
    }
    Ok(())
}

fn expect_name<'i>(input: &mut Parser<'i, '_>, what: &str) -> CssResult<'i, String> {
    let location = input.current_source_location();
    match input.next_including_whitespace()?.clone() {
        Token::Ident(name) => Ok(name.to_string()),
        token => Err(custom(
            location,
            invalid(format!("expected {} name, found {}", what, describe(&token))),
        )),
    }
}

/// Inside `[...]`: `name`, `name="value"` or `name~="value"`.
fn parse_attribute<'i>(input: &mut Parser<'i, '_>) -> CssResult<'i, AttributeSelector> {
    let name = input.expect_ident()?.to_string();
    if input.is_exhausted() {
        return Ok(AttributeSelector {
            name,
            op: AttributeOp::Exists,
            value: String::new(),
        });
    }
    let location = input.current_source_location();
    let op = match input.next()?.clone() {
        Token::Delim('=') => AttributeOp::Equals,
        Token::IncludeMatch => AttributeOp::Includes,
        token => {
            return Err(custom(
                location,
                invalid(format!("expected '=' or '~=' in attribute, found {}", describe(&token))),
            ))
        }
    };
    let location = input.current_source_location();
    let value = match input.next()?.clone() {
        Token::QuotedString(s) | Token::Ident(s) => s.to_string(),
        Token::Number {
            int_value: Some(i), ..
        } => i.to_string(),
        token => {
            return Err(custom(
                location,
                invalid(format!("expected attribute value, found {}", describe(&token))),
            ))
        }
    };
    Ok(AttributeSelector { name, op, value })
}
