//! Typed content models shared by the UI core and the browser views.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Logical tile identifier. Stable across themes; the key set never changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileKey {
    /// Flagship case study.
    Lms,
    /// About / profile.
    Profile,
    /// Work history.
    Experience,
    /// Skills and tooling.
    Stack,
    /// Writing and talks.
    Talk,
    /// Kind words from collaborators.
    Testimonials,
    /// Contact form.
    Contact,
    /// External code hosting profile.
    Github,
    /// External professional profile.
    Linkedin,
    /// Experiments and prototypes.
    Sandbox,
}

impl TileKey {
    /// Number of distinct tile keys.
    pub const COUNT: usize = 10;

    /// Every tile key in declaration order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Lms,
        Self::Profile,
        Self::Experience,
        Self::Stack,
        Self::Talk,
        Self::Testimonials,
        Self::Contact,
        Self::Github,
        Self::Linkedin,
        Self::Sandbox,
    ];

    /// Identifier used in CSS custom properties and element ids.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lms => "lms",
            Self::Profile => "profile",
            Self::Experience => "experience",
            Self::Stack => "stack",
            Self::Talk => "talk",
            Self::Testimonials => "testimonials",
            Self::Contact => "contact",
            Self::Github => "github",
            Self::Linkedin => "linkedin",
            Self::Sandbox => "sandbox",
        }
    }

    /// Parse a key from its identifier.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == value)
    }

    /// Position of the key inside [`TileKey::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl Display for TileKey {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Total mapping from every [`TileKey`] to a value.
///
/// A missing entry cannot be expressed, which keeps theme palettes and copy
/// tables complete by construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileTable<T> {
    entries: [T; TileKey::COUNT],
}

impl<T> TileTable<T> {
    /// Build a table from entries listed in [`TileKey::ALL`] order.
    #[must_use]
    pub const fn new(entries: [T; TileKey::COUNT]) -> Self {
        Self { entries }
    }

    /// Build a table by computing each entry from its key.
    pub fn from_fn(mut f: impl FnMut(TileKey) -> T) -> Self {
        Self {
            entries: std::array::from_fn(|index| f(TileKey::ALL[index])),
        }
    }

    /// Entry for `key`.
    #[must_use]
    pub const fn get(&self, key: TileKey) -> &T {
        &self.entries[key.index()]
    }

    /// Mutable entry for `key`.
    pub const fn get_mut(&mut self, key: TileKey) -> &mut T {
        &mut self.entries[key.index()]
    }

    /// Iterate `(key, entry)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (TileKey, &T)> {
        TileKey::ALL.into_iter().zip(self.entries.iter())
    }
}

impl<T> TileTable<Option<T>> {
    /// Convert a table of optional entries into a complete table.
    ///
    /// # Errors
    ///
    /// Returns the first key (in key order) whose entry is `None`.
    pub fn transpose(self) -> Result<TileTable<T>, TileKey> {
        if let Some(key) = self
            .iter()
            .find_map(|(key, value)| value.is_none().then_some(key))
        {
            return Err(key);
        }
        let values: Vec<T> = self.entries.into_iter().flatten().collect();
        values
            .try_into()
            .map(TileTable::new)
            .map_err(|_: Vec<T>| TileKey::ALL[0])
    }
}

/// Column/row span occupied by a tile in the dense grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSpan {
    /// Columns spanned.
    pub cols: u8,
    /// Rows spanned.
    pub rows: u8,
}

/// Tile footprint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileSize {
    /// One column by one row.
    Medium,
    /// Two columns by one row.
    Wide,
    /// Two columns by two rows.
    Large,
}

impl TileSize {
    /// Every size, in menu order.
    pub const ALL: [Self; 3] = [Self::Medium, Self::Wide, Self::Large];

    /// Grid span for this size.
    #[must_use]
    pub const fn span(self) -> GridSpan {
        match self {
            Self::Medium => GridSpan { cols: 1, rows: 1 },
            Self::Wide => GridSpan { cols: 2, rows: 1 },
            Self::Large => GridSpan { cols: 2, rows: 2 },
        }
    }

    /// Identifier used in CSS classes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Medium => "medium",
            Self::Wide => "wide",
            Self::Large => "large",
        }
    }

    /// Human label for the resize menu.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Medium => "Medium",
            Self::Wide => "Wide",
            Self::Large => "Large",
        }
    }
}

/// Destination of a tile activation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TileLink {
    /// In-app route path (e.g. `/about`).
    Internal(String),
    /// Absolute `http(s)` URL opened in a new browsing context.
    External(String),
}

impl TileLink {
    /// Classify an href: absolute `http://` or `https://` URLs are external.
    #[must_use]
    pub fn parse(href: &str) -> Self {
        if href.starts_with("http://") || href.starts_with("https://") {
            Self::External(href.to_string())
        } else {
            Self::Internal(href.to_string())
        }
    }

    /// Raw href.
    #[must_use]
    pub fn href(&self) -> &str {
        match self {
            Self::Internal(href) | Self::External(href) => href,
        }
    }

    /// True for absolute URLs.
    #[must_use]
    pub const fn is_external(&self) -> bool {
        matches!(self, Self::External(_))
    }
}

impl From<String> for TileLink {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<TileLink> for String {
    fn from(value: TileLink) -> Self {
        match value {
            TileLink::Internal(href) | TileLink::External(href) => href,
        }
    }
}

/// Theme-independent tile copy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileCopy {
    /// Tile this copy belongs to.
    pub key: TileKey,
    /// Tile title.
    pub title: String,
    /// Optional one-line description.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional destination; tiles without one open the detail overlay.
    #[serde(default)]
    pub link: Option<TileLink>,
    /// Default footprint.
    pub size: TileSize,
}

/// Content route identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    /// About page.
    About,
    /// Projects page.
    Projects,
    /// Resume page.
    Resume,
    /// Skills page.
    Skills,
    /// Blog page.
    Blog,
    /// Contact page.
    Contact,
}

impl SectionId {
    /// Every section.
    pub const ALL: [Self; 6] = [
        Self::About,
        Self::Projects,
        Self::Resume,
        Self::Skills,
        Self::Blog,
        Self::Contact,
    ];

    /// Route path for the section.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::About => "/about",
            Self::Projects => "/projects",
            Self::Resume => "/resume",
            Self::Skills => "/skills",
            Self::Blog => "/blog",
            Self::Contact => "/contact",
        }
    }

    /// Identifier used in CSS classes and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Projects => "projects",
            Self::Resume => "resume",
            Self::Skills => "skills",
            Self::Blog => "blog",
            Self::Contact => "contact",
        }
    }
}

impl Display for SectionId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Label/value pair shown in a section rail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    /// Short uppercase label.
    pub label: String,
    /// Value text.
    pub value: String,
}

/// Generic list entry used by resume, skills and blog pages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Entry title.
    pub title: String,
    /// Secondary line (employer, date, category).
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Longer body text.
    #[serde(default)]
    pub detail: Option<String>,
    /// Chips rendered under the entry.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Copy for one content route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionCopy {
    /// Route the copy belongs to.
    pub id: SectionId,
    /// Rail kicker.
    #[serde(default)]
    pub kicker: Option<String>,
    /// Page title.
    pub title: String,
    /// Lead paragraph.
    #[serde(default)]
    pub description: Option<String>,
    /// Tile whose palette tints the page.
    #[serde(default)]
    pub tile_key: Option<TileKey>,
    /// Rail facts.
    #[serde(default)]
    pub facts: Vec<Fact>,
    /// Body paragraphs.
    #[serde(default)]
    pub paragraphs: Vec<String>,
    /// List entries.
    #[serde(default)]
    pub items: Vec<ContentItem>,
}

/// Titled block of project detail paragraphs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSection {
    /// Block heading.
    pub title: String,
    /// Paragraphs; a leading `**bold**` run is rendered as strong text.
    pub content: Vec<String>,
}

/// Portfolio project shown as a card and in the detail overlay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project title.
    pub title: String,
    /// Card summary.
    pub summary: String,
    /// Technology chips.
    pub tech: Vec<String>,
    /// Impact statement.
    pub impact: String,
    /// Optional external link.
    #[serde(default)]
    pub link: Option<String>,
    /// Detail sections for the overlay.
    #[serde(default)]
    pub details: Vec<ProjectSection>,
}

/// Quote shown on the about page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    /// Quote body.
    pub text: String,
    /// Attribution.
    pub author: String,
}

/// Site owner copy used by the start screen header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteProfile {
    /// Owner name, used as the header title.
    pub name: String,
    /// Small uppercase line above the title.
    #[serde(default)]
    pub eyebrow: Option<String>,
    /// Header description.
    #[serde(default)]
    pub description: Option<String>,
    /// Header tip line.
    #[serde(default)]
    pub tip: Option<String>,
}

/// Contact form wiring.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSettings {
    /// Public email address.
    pub email: String,
    /// External form endpoint; `None` uses the local acknowledgement stub.
    #[serde(default)]
    pub endpoint: Option<String>,
}

/// Validated site content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteContent {
    /// Owner copy.
    pub profile: SiteProfile,
    /// Contact wiring.
    pub contact: ContactSettings,
    /// Copy for every tile key.
    pub tiles: TileTable<TileCopy>,
    /// Copy for every content route, in [`SectionId::ALL`] order.
    pub sections: Vec<SectionCopy>,
    /// Projects, in display order.
    pub projects: Vec<Project>,
    /// Testimonials, in display order.
    pub testimonials: Vec<Testimonial>,
}

impl SiteContent {
    /// Copy for a content route.
    #[must_use]
    pub fn section(&self, id: SectionId) -> Option<&SectionCopy> {
        self.sections.iter().find(|section| section.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_keys_round_trip_through_identifiers() {
        for key in TileKey::ALL {
            assert_eq!(TileKey::parse(key.as_str()), Some(key));
            assert_eq!(TileKey::ALL[key.index()], key);
        }
        assert_eq!(TileKey::parse("unknown"), None);
    }

    #[test]
    fn tile_sizes_map_to_expected_spans() {
        assert_eq!(TileSize::Medium.span(), GridSpan { cols: 1, rows: 1 });
        assert_eq!(TileSize::Wide.span(), GridSpan { cols: 2, rows: 1 });
        assert_eq!(TileSize::Large.span(), GridSpan { cols: 2, rows: 2 });
    }

    #[test]
    fn links_are_classified_by_scheme() {
        assert!(TileLink::parse("https://example.com").is_external());
        assert!(TileLink::parse("http://example.com").is_external());
        assert!(!TileLink::parse("/about").is_external());
        assert!(!TileLink::parse("mailto:someone@example.com").is_external());
        assert_eq!(TileLink::parse("/about").href(), "/about");
    }

    #[test]
    fn tile_link_deserializes_from_plain_string() {
        let link: TileLink = serde_json::from_str("\"https://github.com\"").unwrap();
        assert_eq!(link, TileLink::External("https://github.com".to_string()));
    }

    #[test]
    fn tile_table_transpose_reports_first_gap() {
        let mut table: TileTable<Option<u8>> = TileTable::from_fn(|key| Some(key.index() as u8));
        *table.get_mut(TileKey::Talk) = None;
        *table.get_mut(TileKey::Github) = None;
        assert_eq!(table.transpose(), Err(TileKey::Talk));

        let full: TileTable<Option<u8>> = TileTable::from_fn(|key| Some(key.index() as u8));
        let complete = full.transpose().unwrap();
        assert_eq!(*complete.get(TileKey::Sandbox), 9);
    }
}
