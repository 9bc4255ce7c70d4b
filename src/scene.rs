//! The hero mockup and the feature icons
//!
//! Layout coordinates are in pixels on the unpadded 400x800 phone surface and on
//! the 128x128 icon surface.

use crate::color::Palette;
use crate::config::{Config, GlowConfig};
use crate::draw::{Painter, Stroke};
use crate::error::{AssetError, AssetResult};
use crate::gradient::{diagonal, linear_vertical};
use crate::mask::{build_mask, composite};
use crate::shape::{Rect, Shape};
use image::{imageops, RgbaImage};
use rusttype::Font;
use std::{fmt, str::FromStr};
use tracing::debug;

pub const HERO_WIDTH: u32 = 400;
pub const HERO_HEIGHT: u32 = 800;
pub const ICON_SIZE: u32 = 128;

/// Feature icons, in the order they are generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    /// One price: credit card with a checkmark
    Price,
    /// No pay-to-win: struck-through coin
    NoPay,
    /// Real humans: person with a verified badge
    Human,
    /// Privacy: padlock
    Lock,
    /// Paywall bouncer: velvet rope between two posts
    Bouncer,
}

impl Icon {
    pub const ALL: [Icon; 5] = [Icon::Price, Icon::NoPay, Icon::Human, Icon::Lock, Icon::Bouncer];

    pub fn name(self) -> &'static str {
        match self {
            Icon::Price => "price",
            Icon::NoPay => "nopay",
            Icon::Human => "human",
            Icon::Lock => "lock",
            Icon::Bouncer => "bouncer",
        }
    }

    pub fn render(self, palette: &Palette) -> RgbaImage {
        let mut img = RgbaImage::new(ICON_SIZE, ICON_SIZE);
        let mut p = Painter::new(&mut img);
        let gold = palette.gold.rgba();
        let crimson = palette.crimson.rgba();

        match self {
            Icon::Price => {
                p.rounded_rect(
                    Rect::new(15.0, 35.0, 113.0, 93.0),
                    8.0,
                    None,
                    Some(Stroke::new(gold, 4.0)),
                );
                p.rect(Rect::new(15.0, 50.0, 113.0, 62.0), gold);
                p.line(
                    &[(75.0, 75.0), (88.0, 88.0), (110.0, 55.0)],
                    Stroke::new(gold, 4.0),
                );
            }
            Icon::NoPay => {
                p.ellipse(
                    Rect::new(25.0, 25.0, 103.0, 103.0),
                    None,
                    Some(Stroke::new(gold, 4.0)),
                );
                p.line(&[(64.0, 40.0), (64.0, 88.0)], Stroke::new(gold, 3.0));
                p.arc(Rect::new(48.0, 40.0, 80.0, 65.0), 0.0, 180.0, Stroke::new(gold, 3.0));
                p.arc(Rect::new(48.0, 63.0, 80.0, 88.0), 180.0, 0.0, Stroke::new(gold, 3.0));
                p.line(&[(30.0, 30.0), (98.0, 98.0)], Stroke::new(crimson, 5.0));
            }
            Icon::Human => {
                p.ellipse(
                    Rect::new(44.0, 15.0, 84.0, 55.0),
                    None,
                    Some(Stroke::new(gold, 4.0)),
                );
                p.arc(Rect::new(30.0, 55.0, 98.0, 115.0), 180.0, 0.0, Stroke::new(gold, 4.0));
                p.ellipse(Rect::new(80.0, 70.0, 115.0, 105.0), Some(gold), None);
                p.line(
                    &[(88.0, 88.0), (95.0, 95.0), (108.0, 78.0)],
                    Stroke::new(palette.dark_bg.rgba(), 3.0),
                );
            }
            Icon::Lock => {
                p.rounded_rect(
                    Rect::new(35.0, 55.0, 93.0, 105.0),
                    8.0,
                    None,
                    Some(Stroke::new(gold, 4.0)),
                );
                p.arc(Rect::new(42.0, 25.0, 86.0, 70.0), 180.0, 0.0, Stroke::new(gold, 4.0));
                p.ellipse(Rect::new(58.0, 70.0, 70.0, 82.0), Some(gold), None);
                p.rect(Rect::new(61.0, 78.0, 67.0, 92.0), gold);
            }
            Icon::Bouncer => {
                p.rect(Rect::new(25.0, 30.0, 35.0, 100.0), gold);
                p.ellipse(Rect::new(22.0, 22.0, 38.0, 38.0), Some(gold), None);
                p.rect(Rect::new(93.0, 30.0, 103.0, 100.0), gold);
                p.ellipse(Rect::new(90.0, 22.0, 106.0, 38.0), Some(gold), None);
                p.arc(Rect::new(25.0, 45.0, 103.0, 85.0), 0.0, 180.0, Stroke::new(crimson, 6.0));
            }
        }

        img
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Icon {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Icon::ALL
            .into_iter()
            .find(|icon| icon.name() == s)
            .ok_or_else(|| AssetError::UnknownAsset(s.to_string()))
    }
}

/// One output file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    Hero,
    Icon(Icon),
}

impl Asset {
    /// Every asset in generation order: the hero first, then the icons
    pub fn all() -> Vec<Asset> {
        std::iter::once(Asset::Hero)
            .chain(Icon::ALL.into_iter().map(Asset::Icon))
            .collect()
    }

    pub fn name(self) -> &'static str {
        match self {
            Asset::Hero => "hero",
            Asset::Icon(icon) => icon.name(),
        }
    }

    pub fn file_name(self) -> String {
        match self {
            Asset::Hero => "app_mockup.png".to_string(),
            Asset::Icon(icon) => format!("icon_{}.png", icon.name()),
        }
    }

    /// Pixel size of the written file
    ///
    /// Fails when the glow margin is out of range.
    pub fn dimensions(self, glow: &GlowConfig) -> AssetResult<(u32, u32)> {
        match self {
            Asset::Hero => {
                glow.validate()?;
                Ok((
                    HERO_WIDTH + 2 * glow.margin,
                    HERO_HEIGHT + 2 * glow.margin,
                ))
            }
            Asset::Icon(_) => Ok((ICON_SIZE, ICON_SIZE)),
        }
    }

    pub fn render(self, config: &Config, font: Option<&Font<'static>>) -> AssetResult<RgbaImage> {
        match self {
            Asset::Hero => hero_mockup(&config.palette, &config.glow, font),
            Asset::Icon(icon) => Ok(icon.render(&config.palette)),
        }
    }
}

impl FromStr for Asset {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hero" | "app_mockup" => Ok(Asset::Hero),
            _ => s.parse().map(Asset::Icon),
        }
    }
}

/// Phone mockup with a profile card, action buttons and a gold glow
pub fn hero_mockup(
    palette: &Palette,
    glow: &GlowConfig,
    font: Option<&Font<'static>>,
) -> AssetResult<RgbaImage> {
    let (width, height) = Asset::Hero.dimensions(glow)?;

    let mut phone = RgbaImage::new(HERO_WIDTH, HERO_HEIGHT);
    draw_phone(&mut phone, palette, font)?;

    let mut out = glow_layer(width, height, palette, glow);
    imageops::overlay(&mut out, &phone, glow.margin.into(), glow.margin.into());

    Ok(out)
}

fn draw_phone(
    canvas: &mut RgbaImage,
    palette: &Palette,
    font: Option<&Font<'static>>,
) -> AssetResult<()> {
    let gold = palette.gold.rgba();
    let crimson = palette.crimson.rgba();
    let dark_bg = palette.dark_bg.rgba();
    let mut p = Painter::new(canvas).with_font(font);

    debug!("drawing phone frame");
    p.rounded_rect(
        Rect::new(10.0, 10.0, 390.0, 790.0),
        45.0,
        Some(palette.frame.rgba()),
        Some(Stroke::new(gold, 3.0)),
    );
    p.rounded_rect(Rect::new(18.0, 18.0, 382.0, 782.0), 40.0, Some(dark_bg), None);
    p.text(175.0, 35.0, "9:41", palette.text_primary.rgba());
    p.rounded_rect(
        Rect::new(160.0, 25.0, 240.0, 50.0),
        12.0,
        Some(palette.notch.rgba()),
        None,
    );

    debug!("drawing profile card");
    let card_top = 80.0;
    let card_bottom = 580.0;
    p.rounded_rect(
        Rect::new(30.0, card_top, 370.0, card_bottom),
        24.0,
        Some(palette.surface.rgba()),
        None,
    );

    let profile_size = 280;
    let profile_x = (HERO_WIDTH - profile_size) / 2;
    let profile_y = card_top as u32 + 20;
    let placeholder = linear_vertical(
        profile_size,
        profile_size,
        palette.placeholder_top.rgb(),
        palette.placeholder_bottom.rgb(),
    );
    let circle = build_mask(profile_size, profile_size, Shape::Ellipse)?;
    composite(
        p.canvas(),
        &placeholder,
        &circle,
        profile_x.into(),
        profile_y.into(),
    )?;

    let (px, py, ps) = (profile_x as f32, profile_y as f32, profile_size as f32);
    p.ellipse(
        Rect::new(px - 2.0, py - 2.0, px + ps + 2.0, py + ps + 2.0),
        None,
        Some(Stroke::new(gold, 2.0)),
    );

    p.text(50.0, card_bottom - 110.0, "Sophia, 26", palette.text_primary.rgba());
    p.text(50.0, card_bottom - 80.0, "Creative Director", palette.text_secondary.rgba());
    p.text(50.0, card_bottom - 55.0, "2 miles away", palette.text_muted.rgba());

    debug!("drawing action buttons");
    let btn_y = 620.0;
    let btn_size = 70.0;
    let half = btn_size / 2.0;

    // Pass
    let x_center = 100.0;
    p.ellipse(
        Rect::new(x_center - half, btn_y, x_center + half, btn_y + btn_size),
        None,
        Some(Stroke::new(crimson, 3.0)),
    );
    let offset = 18.0;
    let mid = btn_y + half;
    p.line(
        &[(x_center - offset, mid - offset), (x_center + offset, mid + offset)],
        Stroke::new(crimson, 3.0),
    );
    p.line(
        &[(x_center - offset, mid + offset), (x_center + offset, mid - offset)],
        Stroke::new(crimson, 3.0),
    );

    // Like: gold disc with a diagonal sheen, heart cut out in the background color
    let heart_center = 300.0;
    let disc = btn_size as u32 + 1;
    let sheen = diagonal(disc, disc, palette.gold_light.rgb(), palette.gold.rgb());
    composite(
        p.canvas(),
        &sheen,
        &build_mask(disc, disc, Shape::Ellipse)?,
        (heart_center - half) as i64,
        btn_y as i64,
    )?;
    p.polygon(
        &[
            (heart_center, btn_y + 55.0),
            (heart_center - 20.0, btn_y + 30.0),
            (heart_center - 20.0, btn_y + 20.0),
            (heart_center, btn_y + 28.0),
            (heart_center + 20.0, btn_y + 20.0),
            (heart_center + 20.0, btn_y + 30.0),
        ],
        dark_bg,
    );

    debug!("drawing navigation bar");
    let nav_y = 720.0;
    p.rounded_rect(
        Rect::new(30.0, nav_y, 370.0, 770.0),
        20.0,
        Some(palette.surface_elevated.rgba()),
        None,
    );
    for (i, x) in [80.0, 150.0, 250.0, 320.0].into_iter().enumerate() {
        let color = if i == 0 { gold } else { palette.text_muted.rgba() };
        p.ellipse(
            Rect::new(x - 12.0, nav_y + 13.0, x + 12.0, nav_y + 37.0),
            Some(color),
            None,
        );
    }

    Ok(())
}

/// Blurred translucent copy of the frame outline on the padded canvas
fn glow_layer(width: u32, height: u32, palette: &Palette, glow: &GlowConfig) -> RgbaImage {
    let m = glow.margin as f32;

    // Transparent gold, so blurring only spreads alpha
    let mut layer = RgbaImage::from_pixel(width, height, palette.gold.with_alpha(0));
    Painter::new(&mut layer).rounded_rect(
        Rect::new(10.0 + m, 10.0 + m, 390.0 + m, 790.0 + m),
        45.0,
        Some(palette.gold.with_alpha(glow.alpha)),
        None,
    );

    if glow.blur > 0.0 {
        imageops::blur(&layer, glow.blur)
    } else {
        layer
    }
}
