//! Gradient descriptors: `qlineargradient`, `qradialgradient` and
//! `qconicalgradient`.

use std::fmt;

use super::color::Color;

/// One `stop:offset color` entry. Offsets lie in `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

/// How a gradient fills the area outside its stops (`spread:` argument).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spread {
    Pad,
    Repeat,
    Reflect,
}

impl Spread {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pad" => Some(Spread::Pad),
            "repeat" => Some(Spread::Repeat),
            "reflect" => Some(Spread::Reflect),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Spread::Pad => "pad",
            Spread::Repeat => "repeat",
            Spread::Reflect => "reflect",
        }
    }
}

/// Geometry of a gradient.
#[derive(Debug, Clone, PartialEq)]
pub enum GradientKind {
    /// From `(x1, y1)` to `(x2, y2)`.
    Linear { x1: f32, y1: f32, x2: f32, y2: f32 },
    /// Circle around `(cx, cy)`, optionally focused on `(fx, fy)`.
    Radial {
        cx: f32,
        cy: f32,
        radius: f32,
        focal: Option<(f32, f32)>,
    },
    /// Sweep around `(cx, cy)` starting at `angle` degrees.
    Conical { cx: f32, cy: f32, angle: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    pub kind: GradientKind,
    pub spread: Option<Spread>,
    pub stops: Vec<GradientStop>,
}

impl Gradient {
    /// A linear gradient with the given endpoints and stops.
    pub fn linear(x1: f32, y1: f32, x2: f32, y2: f32, stops: Vec<GradientStop>) -> Self {
        Self {
            kind: GradientKind::Linear { x1, y1, x2, y2 },
            spread: None,
            stops,
        }
    }

    /// The function name this gradient is written with.
    pub fn function_name(&self) -> &'static str {
        match self.kind {
            GradientKind::Linear { .. } => "qlineargradient",
            GradientKind::Radial { .. } => "qradialgradient",
            GradientKind::Conical { .. } => "qconicalgradient",
        }
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.function_name())?;
        if let Some(spread) = self.spread {
            write!(f, "spread:{}, ", spread.as_str())?;
        }
        match &self.kind {
            GradientKind::Linear { x1, y1, x2, y2 } => {
                write!(f, "x1:{}, y1:{}, x2:{}, y2:{}", x1, y1, x2, y2)?
            }
            GradientKind::Radial {
                cx,
                cy,
                radius,
                focal,
            } => {
                write!(f, "cx:{}, cy:{}, radius:{}", cx, cy, radius)?;
                if let Some((fx, fy)) = focal {
                    write!(f, ", fx:{}, fy:{}", fx, fy)?;
                }
            }
            GradientKind::Conical { cx, cy, angle } => {
                write!(f, "cx:{}, cy:{}, angle:{}", cx, cy, angle)?
            }
        }
        for stop in &self.stops {
            write!(f, ", stop:{} {}", stop.offset, stop.color)?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_display() {
        let g = Gradient::linear(
            0.0,
            0.0,
            0.0,
            1.0,
            vec![
                GradientStop {
                    offset: 0.0,
                    color: Color::hex(0xFF, 0xFF, 0xFF),
                },
                GradientStop {
                    offset: 1.0,
                    color: Color::hex(0xE0, 0xE0, 0xE0),
                },
            ],
        );
        assert_eq!(
            g.to_string(),
            "qlineargradient(x1:0, y1:0, x2:0, y2:1, stop:0 #FFFFFF, stop:1 #E0E0E0)"
        );
    }

    #[test]
    fn test_radial_display_with_focal_and_spread() {
        let g = Gradient {
            kind: GradientKind::Radial {
                cx: 0.5,
                cy: 0.5,
                radius: 1.0,
                focal: Some((0.5, 0.25)),
            },
            spread: Some(Spread::Reflect),
            stops: vec![GradientStop {
                offset: 0.0,
                color: Color::Named("white".into()),
            }],
        };
        assert_eq!(
            g.to_string(),
            "qradialgradient(spread:reflect, cx:0.5, cy:0.5, radius:1, fx:0.5, fy:0.25, stop:0 white)"
        );
    }
}
