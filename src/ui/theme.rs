// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Completable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::{env, error::Error, fmt};

use ratatui::style::{Color, Modifier, Style};

pub const PALETTE_ENV: &str = "COMPLETABLE_PALETTE";

/// Styles for chrome and content. Without a palette the terminal's own colors are used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    palette: Option<Palette>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Palette {
    fg: Color,
    bg: Color,
    accent: Color,
}

impl Theme {
    pub fn from_env() -> Result<Self, ThemeError> {
        let value = match env::var(PALETTE_ENV) {
            Ok(value) => value,
            Err(env::VarError::NotPresent) => return Ok(Self::default()),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ThemeError::InvalidEnv {
                    name: PALETTE_ENV.to_owned(),
                    value: "<non-unicode>".to_owned(),
                });
            }
        };

        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        let palette = Palette::parse_csv(trimmed).map_err(|error| ThemeError::InvalidEnv {
            name: PALETTE_ENV.to_owned(),
            value: format!("{trimmed} ({error})"),
        })?;
        Ok(Self {
            palette: Some(palette),
        })
    }

    pub fn base_style(&self) -> Style {
        match &self.palette {
            Some(palette) => Style::default().fg(palette.fg).bg(palette.bg),
            None => Style::default(),
        }
    }

    fn accent(&self) -> Color {
        self.palette
            .map(|palette| palette.accent)
            .unwrap_or(Color::Yellow)
    }

    pub fn border_style(&self, active: bool) -> Style {
        if active {
            self.base_style().fg(self.accent())
        } else {
            self.base_style()
        }
    }

    pub fn title_style(&self, active: bool) -> Style {
        if active {
            self.base_style().add_modifier(Modifier::BOLD)
        } else {
            self.base_style()
        }
    }

    pub fn selection_style(&self) -> Style {
        self.base_style()
            .add_modifier(Modifier::REVERSED | Modifier::BOLD)
    }

    /// Highlighted row of a list that does not have focus.
    pub fn passive_selection_style(&self) -> Style {
        self.base_style().add_modifier(Modifier::UNDERLINED)
    }

    pub fn label_style(&self) -> Style {
        self.base_style().fg(self.accent())
    }
}

impl Palette {
    const CSV_LEN: usize = 3;

    fn parse_csv(value: &str) -> Result<Self, String> {
        let parts: Vec<&str> = value.split(',').map(str::trim).collect();
        if parts.len() != Self::CSV_LEN {
            return Err(format!(
                "expected {} comma-separated colors (fg,bg,accent), got {}",
                Self::CSV_LEN,
                parts.len()
            ));
        }

        Ok(Self {
            fg: parse_hex_color(parts[0])?,
            bg: parse_hex_color(parts[1])?,
            accent: parse_hex_color(parts[2])?,
        })
    }
}

fn parse_hex_color(value: &str) -> Result<Color, String> {
    let hex = value
        .strip_prefix('#')
        .or_else(|| value.strip_prefix("0x"))
        .unwrap_or(value);
    if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(format!("invalid hex color: {value} (expected #RRGGBB)"));
    }
    let rgb = u32::from_str_radix(hex, 16).map_err(|_| format!("invalid hex color: {value}"))?;
    Ok(Color::Rgb(
        ((rgb >> 16) & 0xFF) as u8,
        ((rgb >> 8) & 0xFF) as u8,
        (rgb & 0xFF) as u8,
    ))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    InvalidEnv { name: String, value: String },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnv { name, value } => write!(f, "invalid env {name}={value}"),
        }
    }
}

impl Error for ThemeError {}
