//! Menu catalog data model
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;
use std::collections::HashSet;
use thiserror::Error;

/// Errors raised while loading bundled content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate menu item id `{0}`")]
    DuplicateId(String),
    #[error("no slides defined for page `{0}`")]
    UnknownPage(String),
}

/// Real catalog categories. The "All" view is [`CategoryFilter::All`], never a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Starters,
    Soups,
    Grill,
    Mains,
    Noodles,
    Desserts,
    Drinks,
}

impl Category {
    /// Every category in display order.
    pub const ALL: [Self; 7] = [
        Self::Starters,
        Self::Soups,
        Self::Grill,
        Self::Mains,
        Self::Noodles,
        Self::Desserts,
        Self::Drinks,
    ];

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Starters => "starters",
            Self::Soups => "soups",
            Self::Grill => "grill",
            Self::Mains => "mains",
            Self::Noodles => "noodles",
            Self::Desserts => "desserts",
            Self::Drinks => "drinks",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Starters => "Starters",
            Self::Soups => "Soups & Stews",
            Self::Grill => "Grill",
            Self::Mains => "Mains",
            Self::Noodles => "Noodles & Rice",
            Self::Desserts => "Desserts",
            Self::Drinks => "Drinks",
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

/// View-level category selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// No filter: every catalog item.
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }

    /// Slug used in `?category=`; `All` has none.
    #[must_use]
    pub const fn slug(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Only(category) => Some(category.slug()),
        }
    }

    /// Parse a `?category=` value. Unknown or missing values select `All`.
    #[must_use]
    pub fn from_query(value: Option<&str>) -> Self {
        value
            .and_then(Category::from_slug)
            .map_or(Self::All, Self::Only)
    }

    /// The "All" entry followed by every real category.
    #[must_use]
    pub fn choices() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(Category::ALL.into_iter().map(Self::Only))
            .collect()
    }
}

/// Closed tag vocabulary for menu items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tag {
    /// Promoted item, ranked first within any category view.
    Featured,
    Spicy,
    Vegetarian,
    New,
}

impl Tag {
    #[must_use]
    pub const fn is_promoted(self) -> bool {
        matches!(self, Self::Featured)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Featured => "Chef's pick",
            Self::Spicy => "Spicy",
            Self::Vegetarian => "Vegetarian",
            Self::New => "New",
        }
    }
}

/// Either a fixed amount or the "market price" sentinel.
///
/// Serialised as a JSON number or the string `"market"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Price {
    Fixed(f64),
    Market,
}

impl Price {
    #[must_use]
    pub const fn amount(self) -> Option<f64> {
        match self {
            Self::Fixed(amount) => Some(amount),
            Self::Market => None,
        }
    }

    #[must_use]
    pub const fn is_market(self) -> bool {
        matches!(self, Self::Market)
    }
}

const MARKET_LABEL: &str = "market";

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Fixed(amount) => serializer.serialize_f64(*amount),
            Self::Market => serializer.serialize_str(MARKET_LABEL),
        }
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Amount(f64),
            Label(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Amount(amount) if amount.is_finite() && amount >= 0.0 => Ok(Self::Fixed(amount)),
            Raw::Amount(amount) => Err(D::Error::custom(format!("invalid price {amount}"))),
            Raw::Label(label) if label == MARKET_LABEL => Ok(Self::Market),
            Raw::Label(label) => Err(D::Error::custom(format!("unknown price label `{label}`"))),
        }
    }
}

/// Image reference with alt text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

/// A single dish or drink on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    /// Name in the house language, shown under the English name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: Category,
    #[serde(default)]
    pub tags: SmallVec<[Tag; 2]>,
    pub image: ImageRef,
    pub price: Price,
}

impl MenuItem {
    #[must_use]
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    #[must_use]
    pub fn is_promoted(&self) -> bool {
        self.tags.iter().any(|tag| tag.is_promoted())
    }

    /// Whether the item can go into the cart.
    #[must_use]
    pub const fn is_orderable(&self) -> bool {
        !self.price.is_market()
    }
}

/// The complete, immutable menu.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::DuplicateId`] if two items share an id.
    pub fn new(items: Vec<MenuItem>) -> Result<Self, ContentError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(ContentError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self { items })
    }

    /// Parse the bundled `menu.json` format: `{ "items": [...] }`.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or ids are duplicated.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let raw: Self = serde_json::from_str(json)?;
        Self::new(raw.items)
    }

    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Catalog index of an item, used as the stable ordering key.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_json(id: &str, price: &str) -> String {
        format!(
            r#"{{"id":"{id}","name":"{id}","category":"soups","image":{{"src":"/img/{id}.webp"}},"price":{price}}}"#
        )
    }

    #[test]
    fn price_parses_number_and_market_sentinel() {
        let fixed: Price = serde_json::from_str("12.5").unwrap();
        assert_eq!(fixed, Price::Fixed(12.5));
        let market: Price = serde_json::from_str("\"market\"").unwrap();
        assert!(market.is_market());
        assert_eq!(serde_json::to_string(&market).unwrap(), "\"market\"");
    }

    #[test]
    fn price_rejects_negative_and_unknown_labels() {
        assert!(serde_json::from_str::<Price>("-1").is_err());
        assert!(serde_json::from_str::<Price>("\"ask\"").is_err());
    }

    #[test]
    fn catalog_rejects_duplicate_ids() {
        let json = format!(
            r#"{{"items":[{},{}]}}"#,
            item_json("stew-1", "9"),
            item_json("stew-1", "10")
        );
        let err = Catalog::from_json(&json).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateId(id) if id == "stew-1"));
    }

    #[test]
    fn tags_default_to_empty_and_featured_is_promoted() {
        let json = format!(r#"{{"items":[{}]}}"#, item_json("stew-1", "9"));
        let catalog = Catalog::from_json(&json).unwrap();
        let item = catalog.find("stew-1").unwrap();
        assert!(item.tags.is_empty());
        assert!(!item.is_promoted());
        assert!(Tag::Featured.is_promoted());
        assert!(!Tag::Spicy.is_promoted());
    }

    #[test]
    fn category_filter_parses_query_values() {
        assert_eq!(CategoryFilter::from_query(None), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_query(Some("bogus")), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_query(Some("grill")),
            CategoryFilter::Only(Category::Grill)
        );
        assert_eq!(CategoryFilter::choices().len(), Category::ALL.len() + 1);
        assert!(CategoryFilter::All.matches(Category::Drinks));
        assert!(!CategoryFilter::Only(Category::Soups).matches(Category::Drinks));
    }

    #[test]
    fn only_filter_matches_its_own_category_alone() {
        for selected in Category::ALL {
            let filter = CategoryFilter::Only(selected);
            let hits: Vec<_> = Category::ALL
                .into_iter()
                .filter(|c| filter.matches(*c))
                .collect();
            assert_eq!(hits, vec![selected]);
        }
    }
}
