//! Themed tile icons.
//!
//! Each theme maps every tile key to an [`IconRef`]: a phosphor glyph in a
//! fill or duotone weight, or an 8x8 pixel pattern for the retro theme.

/// Phosphor glyphs used by the tile icon tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// Presentation board with a chart; also the fallback icon.
    PresentationChart,
    /// Person with a gear.
    UserCircleGear,
    /// Briefcase.
    Briefcase,
    /// Stacked layers.
    Stack,
    /// Overlapping chat bubbles.
    ChatsCircle,
    /// Bulleted list.
    ListBullets,
    /// Plain envelope.
    Envelope,
    /// Simplified envelope.
    EnvelopeSimple,
    /// GitHub mark.
    GithubLogo,
    /// LinkedIn mark.
    LinkedinLogo,
    /// Puzzle piece.
    PuzzlePiece,
    /// Pie chart with a slice out.
    ChartPieSlice,
    /// Group of three people.
    UsersThree,
    /// Star.
    Star,
    /// Rocket.
    RocketLaunch,
    /// Single person.
    User,
    /// Processor.
    Cpu,
    /// Rising line chart.
    ChartLineUp,
    /// Megaphone.
    Megaphone,
    /// Sparkle.
    Sparkle,
    /// Ringing phone.
    PhoneCall,
    /// Lab flask.
    Flask,
    /// Sun on the horizon.
    SunHorizon,
    /// Leaf.
    Leaf,
    /// Tree.
    Tree,
    /// Clapping hands.
    HandsClapping,
    /// Handshake.
    Handshake,
}

impl Glyph {
    /// Every glyph.
    pub const ALL: [Self; 27] = [
        Self::PresentationChart,
        Self::UserCircleGear,
        Self::Briefcase,
        Self::Stack,
        Self::ChatsCircle,
        Self::ListBullets,
        Self::Envelope,
        Self::EnvelopeSimple,
        Self::GithubLogo,
        Self::LinkedinLogo,
        Self::PuzzlePiece,
        Self::ChartPieSlice,
        Self::UsersThree,
        Self::Star,
        Self::RocketLaunch,
        Self::User,
        Self::Cpu,
        Self::ChartLineUp,
        Self::Megaphone,
        Self::Sparkle,
        Self::PhoneCall,
        Self::Flask,
        Self::SunHorizon,
        Self::Leaf,
        Self::Tree,
        Self::HandsClapping,
        Self::Handshake,
    ];

    /// Phosphor icon slug.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::PresentationChart => "presentation-chart",
            Self::UserCircleGear => "user-circle-gear",
            Self::Briefcase => "briefcase",
            Self::Stack => "stack",
            Self::ChatsCircle => "chats-circle",
            Self::ListBullets => "list-bullets",
            Self::Envelope => "envelope",
            Self::EnvelopeSimple => "envelope-simple",
            Self::GithubLogo => "github-logo",
            Self::LinkedinLogo => "linkedin-logo",
            Self::PuzzlePiece => "puzzle-piece",
            Self::ChartPieSlice => "chart-pie-slice",
            Self::UsersThree => "users-three",
            Self::Star => "star",
            Self::RocketLaunch => "rocket-launch",
            Self::User => "user",
            Self::Cpu => "cpu",
            Self::ChartLineUp => "chart-line-up",
            Self::Megaphone => "megaphone",
            Self::Sparkle => "sparkle",
            Self::PhoneCall => "phone-call",
            Self::Flask => "flask",
            Self::SunHorizon => "sun-horizon",
            Self::Leaf => "leaf",
            Self::Tree => "tree",
            Self::HandsClapping => "hands-clapping",
            Self::Handshake => "handshake",
        }
    }

    /// Look a glyph up by slug.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|glyph| glyph.slug() == slug)
    }
}

/// Phosphor weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconWeight {
    /// Solid glyph.
    Fill,
    /// Two-tone glyph.
    Duotone,
}

impl IconWeight {
    /// Suffix used in icon names.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Fill => "fill",
            Self::Duotone => "duotone",
        }
    }
}

/// Eight rows of eight `0`/`1` cells.
pub type PixelPattern = [&'static str; 8];

/// Icon reference resolved from a theme's icon table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconRef {
    /// Phosphor glyph rendered through an iconify CSS class.
    Glyph {
        /// Glyph.
        glyph: Glyph,
        /// Weight.
        weight: IconWeight,
    },
    /// Pixel-art icon rendered as SVG cells.
    Pixel(&'static PixelPattern),
}

impl IconRef {
    /// Icon used when a name cannot be resolved.
    pub const FALLBACK: Self = Self::fill(Glyph::PresentationChart);

    /// Filled glyph.
    #[must_use]
    pub const fn fill(glyph: Glyph) -> Self {
        Self::Glyph {
            glyph,
            weight: IconWeight::Fill,
        }
    }

    /// Duotone glyph.
    #[must_use]
    pub const fn duotone(glyph: Glyph) -> Self {
        Self::Glyph {
            glyph,
            weight: IconWeight::Duotone,
        }
    }

    /// Resolve an icon name such as `briefcase-fill` or `stack-duotone`.
    ///
    /// Unknown names and unsupported weights resolve to [`IconRef::FALLBACK`].
    #[must_use]
    pub fn named(name: &str) -> Self {
        let parsed = name.rsplit_once('-').and_then(|(slug, suffix)| {
            let weight = match suffix {
                "fill" => IconWeight::Fill,
                "duotone" => IconWeight::Duotone,
                _ => return None,
            };
            Glyph::from_slug(slug).map(|glyph| Self::Glyph { glyph, weight })
        });
        parsed.unwrap_or(Self::FALLBACK)
    }

    /// Iconify CSS classes for glyph icons; `None` for pixel icons.
    #[must_use]
    pub fn css_class(self) -> Option<String> {
        match self {
            Self::Glyph { glyph, weight } => Some(format!(
                "iconify ph--{}-{}",
                glyph.slug(),
                weight.suffix()
            )),
            Self::Pixel(_) => None,
        }
    }
}

/// Coordinates `(column, row)` of every lit cell in a pixel pattern.
#[must_use]
pub fn pixel_cells(pattern: &PixelPattern) -> Vec<(usize, usize)> {
    pattern
        .iter()
        .enumerate()
        .flat_map(|(row, line)| {
            line.bytes()
                .enumerate()
                .filter(|(_, cell)| *cell == b'1')
                .map(move |(column, _)| (column, row))
        })
        .collect()
}

/// Retro pixel patterns, one per tile key.
pub mod pixels {
    use super::PixelPattern;

    /// Case study.
    pub const CASE_STUDY: PixelPattern = [
        "01111110", "11111111", "11000011", "11011011", "11011011", "11000011", "11111111",
        "01111110",
    ];
    /// Profile.
    pub const PROFILE: PixelPattern = [
        "00111100", "01111110", "11100111", "11000111", "11111111", "01111110", "00111100",
        "00011000",
    ];
    /// Experience.
    pub const EXPERIENCE: PixelPattern = [
        "00011000", "00111100", "11111111", "01111110", "00111100", "01111110", "11111111",
        "00011000",
    ];
    /// Stack.
    pub const STACK: PixelPattern = [
        "11111111", "10000001", "11111111", "10000001", "11111111", "10000001", "11111111",
        "00000000",
    ];
    /// Talk.
    pub const TALK: PixelPattern = [
        "00111100", "01111110", "11111111", "11111111", "11111111", "01111110", "00111100",
        "00011000",
    ];
    /// Testimonials.
    pub const TESTIMONIALS: PixelPattern = [
        "01100110", "11111111", "11111111", "11111111", "01111110", "00111100", "00011000",
        "00000000",
    ];
    /// Contact.
    pub const CONTACT: PixelPattern = [
        "11111111", "10000001", "10111101", "11011011", "11100111", "11111111", "10000001",
        "11111111",
    ];
    /// GitHub.
    pub const GITHUB: PixelPattern = [
        "00111100", "01111110", "11111111", "11011011", "11011011", "11111111", "01111110",
        "11011011",
    ];
    /// LinkedIn.
    pub const LINKEDIN: PixelPattern = [
        "11111111", "11000000", "11011110", "11011110", "11011110", "11011110", "11011110",
        "11111111",
    ];
    /// Sandbox.
    pub const SANDBOX: PixelPattern = [
        "11100111", "11100111", "00111100", "00111100", "11100111", "11100111", "00111100",
        "00111100",
    ];
}
