//! Value grammar.

use cssparser::{Parser, SourceLocation, Token};

use super::{custom, describe, CssResult};
use crate::error::ParseErrorKind;
use crate::value::{
    is_named_color, Color, Gradient, GradientKind, GradientStop, HexColor, Length, LengthUnit,
    Spread, Value,
};

fn invalid<'i>(
    location: SourceLocation,
    property: &str,
    reason: impl Into<String>,
) -> cssparser::ParseError<'i, ParseErrorKind> {
    custom(
        location,
        ParseErrorKind::InvalidValue {
            property: property.to_string(),
            reason: reason.into(),
        },
    )
}

/// Numbers too large for `f32` overflow to infinity in the tokenizer.
fn finite<'i>(value: f32, location: SourceLocation, property: &str) -> CssResult<'i, f32> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid(location, property, "number out of range"))
    }
}

/// Everything after `property:` up to the `;` or the end of the block.
pub(super) fn parse_value<'i>(input: &mut Parser<'i, '_>, property: &str) -> CssResult<'i, Value> {
    input.skip_whitespace();
    let location = input.current_source_location();
    if input.is_exhausted() {
        return Err(custom(
            location,
            ParseErrorKind::EmptyValue {
                property: property.to_string(),
            },
        ));
    }
    let mut groups = input.parse_comma_separated(|input| parse_space_list(input, property))?;
    Ok(if groups.len() == 1 {
        groups.remove(0)
    } else {
        Value::Comma(groups)
    })
}

fn parse_space_list<'i>(input: &mut Parser<'i, '_>, property: &str) -> CssResult<'i, Value> {
    input.skip_whitespace();
    let location = input.current_source_location();
    let mut parts = Vec::new();
    while !input.is_exhausted() {
        parts.push(parse_component(input, property)?);
    }
    match parts.len() {
        0 => Err(custom(
            location,
            ParseErrorKind::EmptyValue {
                property: property.to_string(),
            },
        )),
        1 => Ok(parts.remove(0)),
        _ => Ok(Value::Space(parts)),
    }
}

fn parse_component<'i>(input: &mut Parser<'i, '_>, property: &str) -> CssResult<'i, Value> {
    input.skip_whitespace();
    let location = input.current_source_location();
    match input.next()?.clone() {
        Token::Hash(digits) | Token::IDHash(digits) => HexColor::parse(&digits)
            .map(|hex| Value::Color(Color::Hex(hex)))
            .ok_or_else(|| invalid(location, property, format!("bad hex color '#{}'", digits))),
        Token::Ident(name) if is_named_color(&name) => Ok(Value::Color(Color::Named(name.to_string()))),
        Token::Ident(name) => Ok(Value::Keyword(name.to_string())),
        Token::Dimension { value, unit, .. } => {
            let value = finite(value, location, property)?;
            LengthUnit::parse(&unit)
                .map(|unit| Value::Length(Length::new(value, unit)))
                .ok_or_else(|| invalid(location, property, format!("unknown unit '{}'", unit)))
        }
        Token::Number { value, .. } => finite(value, location, property).map(Value::Number),
        Token::Percentage { unit_value, .. } => finite(unit_value, location, property).map(Value::Percentage),
        Token::QuotedString(s) => Ok(Value::Str(s.to_string())),
        Token::UnquotedUrl(url) => Ok(Value::Url(url.to_string())),
        Token::Function(name) => parse_function(input, &name, property, location),
        Token::BadUrl(_) => Err(invalid(location, property, "malformed url()")),
        Token::BadString(_) => Err(invalid(location, property, "malformed string")),
        token => Err(custom(
            location,
            ParseErrorKind::UnexpectedToken(format!("{} in value of '{}'", describe(&token), property)),
        )),
    }
}

fn parse_function<'i>(
    input: &mut Parser<'i, '_>,
    name: &str,
    property: &str,
    location: SourceLocation,
) -> CssResult<'i, Value> {
    match name.to_ascii_lowercase().as_str() {
        "url" => input.parse_nested_block(|input| -> CssResult<'i, Value> {
            let location = input.current_source_location();
            match input.next()?.clone() {
                Token::QuotedString(path) => Ok(Value::Url(path.to_string())),
                token => Err(invalid(
                    location,
                    property,
                    format!("expected path in url(), found {}", describe(&token)),
                )),
            }
        }),
        "rgb" | "rgba" => input
            .parse_nested_block(|input| parse_rgb(input, property, location))
            .map(Value::Color),
        "palette" => input.parse_nested_block(|input| -> CssResult<'i, Value> {
            let role = input.expect_ident()?.to_string();
            Ok(Value::Palette(role))
        }),
        function @ ("qlineargradient" | "qradialgradient" | "qconicalgradient") => {
            let args = input.parse_nested_block(|input| {
                input.parse_comma_separated(|input| parse_gradient_arg(input, property))
            })?;
            build_gradient(function, args)
                .map(Value::Gradient)
                .map_err(|reason| invalid(location, property, reason))
        }
        _ => Err(custom(location, ParseErrorKind::UnknownFunction(name.to_string()))),
    }
}

/// A bare color: hex, named, `rgb()` or `rgba()`.
fn parse_color<'i>(input: &mut Parser<'i, '_>, property: &str) -> CssResult<'i, Color> {
    input.skip_whitespace();
    let location = input.current_source_location();
    match input.next()?.clone() {
        Token::Hash(digits) | Token::IDHash(digits) => HexColor::parse(&digits)
            .map(Color::Hex)
            .ok_or_else(|| invalid(location, property, format!("bad hex color '#{}'", digits))),
        Token::Ident(name) if is_named_color(&name) => Ok(Color::Named(name.to_string())),
        Token::Function(name) if name.eq_ignore_ascii_case("rgb") || name.eq_ignore_ascii_case("rgba") => {
            input.parse_nested_block(|input| parse_rgb(input, property, location))
        }
        token => Err(invalid(
            location,
            property,
            format!("expected a color, found {}", describe(&token)),
        )),
    }
}

enum Channel {
    Number(f32),
    /// Fraction in `0.0..=1.0` from a percentage.
    Fraction(f32),
}

/// `r, g, b[, a]`. Channels are integers 0-255 or percentages. An alpha
/// number up to 1 is a fraction, so `1` and `1.0` are opaque; a larger one
/// is read as 0-255.
fn parse_rgb<'i>(
    input: &mut Parser<'i, '_>,
    property: &str,
    location: SourceLocation,
) -> CssResult<'i, Color> {
    let channels = input.parse_comma_separated(|input| -> CssResult<'i, Channel> {
        let location = input.current_source_location();
        match input.next()?.clone() {
            Token::Number { value, .. } => Ok(Channel::Number(value)),
            Token::Percentage { unit_value, .. } => Ok(Channel::Fraction(unit_value)),
            token => Err(invalid(
                location,
                property,
                format!("expected a color channel, found {}", describe(&token)),
            )),
        }
    })?;

    let byte = |channel: &Channel, alpha: bool| -> Option<u8> {
        let v = match *channel {
            Channel::Fraction(f) => f * 255.0,
            Channel::Number(n) if alpha && n <= 1.0 => n * 255.0,
            Channel::Number(n) => n,
        };
        let v = v.round();
        (0.0..=255.0).contains(&v).then_some(v as u8)
    };
    let out_of_range = || invalid(location, property, "color channel out of range");

    match channels.as_slice() {
        [r, g, b] => Ok(Color::Rgba {
            r: byte(r, false).ok_or_else(out_of_range)?,
            g: byte(g, false).ok_or_else(out_of_range)?,
            b: byte(b, false).ok_or_else(out_of_range)?,
            a: 255,
            alpha: false,
        }),
        [r, g, b, a] => Ok(Color::Rgba {
            r: byte(r, false).ok_or_else(out_of_range)?,
            g: byte(g, false).ok_or_else(out_of_range)?,
            b: byte(b, false).ok_or_else(out_of_range)?,
            a: byte(a, true).ok_or_else(out_of_range)?,
            alpha: true,
        }),
        _ => Err(invalid(location, property, "expected 3 or 4 color channels")),
    }
}

enum GradientArg {
    Coord(String, f32),
    Spread(Spread),
    Stop(GradientStop),
}

/// `key:number`, `spread:pad|repeat|reflect` or `stop:offset color`.
fn parse_gradient_arg<'i>(input: &mut Parser<'i, '_>, property: &str) -> CssResult<'i, GradientArg> {
    input.skip_whitespace();
    let location = input.current_source_location();
    let key = input.expect_ident()?.to_ascii_lowercase();
    input.expect_colon()?;
    match key.as_str() {
        "stop" => {
            let offset = input.expect_number()?;
            if !(0.0..=1.0).contains(&offset) {
                return Err(invalid(
                    location,
                    property,
                    format!("gradient stop {} outside 0..1", offset),
                ));
            }
            let color = parse_color(input, property)?;
            Ok(GradientArg::Stop(GradientStop { offset, color }))
        }
        "spread" => {
            let word = input.expect_ident()?.to_string();
            Spread::parse(&word)
                .map(GradientArg::Spread)
                .ok_or_else(|| invalid(location, property, format!("unknown spread '{}'", word)))
        }
        _ => {
            let value = input.expect_number()?;
            finite(value, location, property).map(|value| GradientArg::Coord(key, value))
        }
    }
}

fn build_gradient(function: &str, args: Vec<GradientArg>) -> Result<Gradient, String> {
    let mut coords: Vec<(String, f32)> = Vec::new();
    let mut spread = None;
    let mut stops = Vec::new();
    for arg in args {
        match arg {
            GradientArg::Coord(key, value) => match coords.iter_mut().find(|(k, _)| *k == key) {
                Some(existing) => existing.1 = value,
                None => coords.push((key, value)),
            },
            GradientArg::Spread(s) => spread = Some(s),
            GradientArg::Stop(stop) => stops.push(stop),
        }
    }

    let allowed: &[&str] = match function {
        "qlineargradient" => &["x1", "y1", "x2", "y2"],
        "qradialgradient" => &["cx", "cy", "radius", "fx", "fy"],
        _ => &["cx", "cy", "angle"],
    };
    if let Some((key, _)) = coords.iter().find(|(k, _)| !allowed.contains(&k.as_str())) {
        return Err(format!("unknown {} argument '{}'", function, key));
    }
    let get = |key: &str| coords.iter().find(|(k, _)| k == key).map(|(_, v)| *v);
    let require = |key: &str| get(key).ok_or_else(|| format!("{} is missing '{}'", function, key));

    if stops.is_empty() {
        return Err(format!("{} needs at least one stop", function));
    }

    let kind = match function {
        "qlineargradient" => GradientKind::Linear {
            x1: require("x1")?,
            y1: require("y1")?,
            x2: require("x2")?,
            y2: require("y2")?,
        },
        "qradialgradient" => GradientKind::Radial {
            cx: require("cx")?,
            cy: require("cy")?,
            radius: require("radius")?,
            focal: match (get("fx"), get("fy")) {
                (Some(fx), Some(fy)) => Some((fx, fy)),
                (None, None) => None,
                _ => return Err("qradialgradient needs both 'fx' and 'fy'".to_string()),
            },
        },
        _ => GradientKind::Conical {
            cx: require("cx")?,
            cy: require("cy")?,
            angle: require("angle")?,
        },
    };

    Ok(Gradient {
        kind,
        spread,
        stops,
    })
}
