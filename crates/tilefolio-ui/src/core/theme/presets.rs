//! Built-in theme descriptors.
//!
//! Palette and icon tables list entries in `TileKey::ALL` order:
//! lms, profile, experience, stack, talk, testimonials, contact, github,
//! linkedin, sandbox.

use tilefolio_content::TileTable;

use super::Contrast::{Dark, Light};
use super::{Contrast, ThemeDescriptor, ThemeName};
use crate::core::icons::{Glyph, IconRef, pixels};

const SEGOE: &str = "\"Segoe UI\", \"Selawik\", system-ui, sans-serif";
const INTER: &str = "\"Inter\", system-ui, sans-serif";

const ALL_DARK: TileTable<Contrast> = TileTable::new([Dark; 10]);

const fn filled(glyphs: [Glyph; 10]) -> TileTable<IconRef> {
    let mut icons = [IconRef::FALLBACK; 10];
    let mut index = 0;
    while index < glyphs.len() {
        icons[index] = IconRef::fill(glyphs[index]);
        index += 1;
    }
    TileTable::new(icons)
}

const fn duotone(glyphs: [Glyph; 10]) -> TileTable<IconRef> {
    let mut icons = [IconRef::FALLBACK; 10];
    let mut index = 0;
    while index < glyphs.len() {
        icons[index] = IconRef::duotone(glyphs[index]);
        index += 1;
    }
    TileTable::new(icons)
}

const CLASSIC_GLYPHS: [Glyph; 10] = [
    Glyph::PresentationChart,
    Glyph::UserCircleGear,
    Glyph::Briefcase,
    Glyph::Stack,
    Glyph::ChatsCircle,
    Glyph::Handshake,
    Glyph::EnvelopeSimple,
    Glyph::GithubLogo,
    Glyph::LinkedinLogo,
    Glyph::PuzzlePiece,
];

pub(super) static METRO: ThemeDescriptor = ThemeDescriptor {
    name: ThemeName::Metro,
    background: "#1d1d1d",
    backdrop: "#111111",
    foreground: "#ffffff",
    chrome: "#2b2b2b",
    accent: "#0078d7",
    neutral: "#8a8a8a",
    font_family: SEGOE,
    heading_font_family: SEGOE,
    tile_palette: TileTable::new([
        "#00a300", "#2d89ef", "#603cba", "#da532c", "#ff0097", "#00aba9", "#ee1111", "#1e1e1e",
        "#0a66c2", "#ffc40d",
    ]),
    tile_contrasts: TileTable::new([
        Dark, Dark, Dark, Dark, Dark, Dark, Dark, Dark, Dark, Light,
    ]),
    tile_icons: filled(CLASSIC_GLYPHS),
    tile_light_text: "#1d1d1d",
    tile_dark_text: "#ffffff",
    pointer_glow: true,
    glass_surface: false,
};

pub(super) static PASTEL: ThemeDescriptor = ThemeDescriptor {
    name: ThemeName::Pastel,
    background: "#f6f1fb",
    backdrop: "#ede4f7",
    foreground: "#3b3355",
    chrome: "#ffffff",
    accent: "#9a7fd1",
    neutral: "#b9afc9",
    font_family: INTER,
    heading_font_family: "\"Quicksand\", \"Inter\", sans-serif",
    tile_palette: TileTable::new([
        "#ffd6e0", "#c9e4ff", "#d7f5d0", "#fff1b8", "#e8d6ff", "#ffe0c2", "#c2f0ec", "#d9d9e8",
        "#cfe0ff", "#f8d2f0",
    ]),
    tile_contrasts: TileTable::new([Light; 10]),
    tile_icons: filled([
        Glyph::ChartPieSlice,
        Glyph::UsersThree,
        Glyph::Star,
        Glyph::Stack,
        Glyph::ChatsCircle,
        Glyph::ListBullets,
        Glyph::EnvelopeSimple,
        Glyph::GithubLogo,
        Glyph::LinkedinLogo,
        Glyph::PuzzlePiece,
    ]),
    tile_light_text: "#3b3355",
    tile_dark_text: "#ffffff",
    pointer_glow: true,
    glass_surface: false,
};

pub(super) static NEON: ThemeDescriptor = ThemeDescriptor {
    name: ThemeName::Neon,
    background: "#07010f",
    backdrop: "#0d0221",
    foreground: "#f5f3ff",
    chrome: "#150533",
    accent: "#39ff14",
    neutral: "#6b5b95",
    font_family: INTER,
    heading_font_family: "\"Orbitron\", \"Inter\", sans-serif",
    tile_palette: TileTable::new([
        "#ff2fd0", "#00e5ff", "#7b2bff", "#39ff14", "#ff6b00", "#f9f871", "#00ffa3", "#2a1b4d",
        "#0077ff", "#ff3864",
    ]),
    tile_contrasts: TileTable::new([
        Dark, Light, Dark, Light, Dark, Light, Light, Dark, Dark, Dark,
    ]),
    tile_icons: filled([
        Glyph::RocketLaunch,
        Glyph::User,
        Glyph::Cpu,
        Glyph::ChartLineUp,
        Glyph::Megaphone,
        Glyph::Sparkle,
        Glyph::PhoneCall,
        Glyph::GithubLogo,
        Glyph::LinkedinLogo,
        Glyph::Flask,
    ]),
    tile_light_text: "#07010f",
    tile_dark_text: "#f5f3ff",
    pointer_glow: true,
    glass_surface: false,
};

pub(super) static SOLAR: ThemeDescriptor = ThemeDescriptor {
    name: ThemeName::Solar,
    background: "#2b1d0e",
    backdrop: "#3a2611",
    foreground: "#fff4e0",
    chrome: "#4a3118",
    accent: "#ffb347",
    neutral: "#a68a64",
    font_family: INTER,
    heading_font_family: "\"Merriweather\", Georgia, serif",
    tile_palette: TileTable::new([
        "#e07a1f", "#c2452d", "#7a9e3d", "#4f7942", "#d4a017", "#b5651d", "#8c4a2f", "#3e2a14",
        "#2f6f8f", "#f2c14e",
    ]),
    tile_contrasts: TileTable::new([
        Dark, Dark, Dark, Dark, Light, Dark, Dark, Dark, Dark, Light,
    ]),
    tile_icons: filled([
        Glyph::SunHorizon,
        Glyph::UsersThree,
        Glyph::Leaf,
        Glyph::Tree,
        Glyph::ChatsCircle,
        Glyph::HandsClapping,
        Glyph::EnvelopeSimple,
        Glyph::GithubLogo,
        Glyph::LinkedinLogo,
        Glyph::PuzzlePiece,
    ]),
    tile_light_text: "#2b1d0e",
    tile_dark_text: "#fff4e0",
    pointer_glow: false,
    glass_surface: false,
};

pub(super) static RETRO: ThemeDescriptor = ThemeDescriptor {
    name: ThemeName::Retro,
    background: "#0f380f",
    backdrop: "#0b2a0b",
    foreground: "#e0f8d0",
    chrome: "#306230",
    accent: "#8bac0f",
    neutral: "#5a7a3a",
    font_family: "\"Press Start 2P\", \"VT323\", monospace",
    heading_font_family: "\"Press Start 2P\", monospace",
    tile_palette: TileTable::new([
        "#8bac0f", "#306230", "#9bbc0f", "#4a7a2a", "#6b8e23", "#556b2f", "#3c5a14", "#1f3d1f",
        "#2e5e4e", "#a4c639",
    ]),
    tile_contrasts: TileTable::new([
        Light, Dark, Light, Dark, Dark, Dark, Dark, Dark, Dark, Light,
    ]),
    tile_icons: TileTable::new([
        IconRef::Pixel(&pixels::CASE_STUDY),
        IconRef::Pixel(&pixels::PROFILE),
        IconRef::Pixel(&pixels::EXPERIENCE),
        IconRef::Pixel(&pixels::STACK),
        IconRef::Pixel(&pixels::TALK),
        IconRef::Pixel(&pixels::TESTIMONIALS),
        IconRef::Pixel(&pixels::CONTACT),
        IconRef::Pixel(&pixels::GITHUB),
        IconRef::Pixel(&pixels::LINKEDIN),
        IconRef::Pixel(&pixels::SANDBOX),
    ]),
    tile_light_text: "#0f380f",
    tile_dark_text: "#e0f8d0",
    pointer_glow: false,
    glass_surface: false,
};

pub(super) static GLASS: ThemeDescriptor = ThemeDescriptor {
    name: ThemeName::Glass,
    background: "#0e1a2b",
    backdrop: "#16263d",
    foreground: "#f0f6ff",
    chrome: "#1e3050",
    accent: "#7dd3fc",
    neutral: "#94a3b8",
    font_family: INTER,
    heading_font_family: INTER,
    tile_palette: TileTable::new([
        "#3b82f6", "#06b6d4", "#8b5cf6", "#14b8a6", "#ec4899", "#f59e0b", "#22c55e", "#334155",
        "#0ea5e9", "#a855f7",
    ]),
    tile_contrasts: ALL_DARK,
    tile_icons: duotone(CLASSIC_GLYPHS),
    tile_light_text: "#0e1a2b",
    tile_dark_text: "#ffffff",
    pointer_glow: true,
    glass_surface: true,
};

pub(super) static ORCHID: ThemeDescriptor = ThemeDescriptor {
    name: ThemeName::Orchid,
    background: "#1a0b24",
    backdrop: "#241033",
    foreground: "#fbeaff",
    chrome: "#2e1440",
    accent: "#da70d6",
    neutral: "#9d7aa8",
    font_family: INTER,
    heading_font_family: "\"Playfair Display\", Georgia, serif",
    tile_palette: TileTable::new([
        "#9932cc", "#c71585", "#ba55d3", "#8a2be2", "#dda0dd", "#e75480", "#6a0dad", "#2d1b3d",
        "#7b68ee", "#ff77ff",
    ]),
    tile_contrasts: TileTable::new([
        Dark, Dark, Dark, Dark, Light, Dark, Dark, Dark, Dark, Light,
    ]),
    tile_icons: duotone([
        Glyph::PresentationChart,
        Glyph::UserCircleGear,
        Glyph::ChartLineUp,
        Glyph::Stack,
        Glyph::ChatsCircle,
        Glyph::HandsClapping,
        Glyph::Envelope,
        Glyph::GithubLogo,
        Glyph::LinkedinLogo,
        Glyph::PuzzlePiece,
    ]),
    tile_light_text: "#1a0b24",
    tile_dark_text: "#fbeaff",
    pointer_glow: true,
    glass_surface: false,
};
