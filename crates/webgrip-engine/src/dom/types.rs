//! Shared DOM types: viewport, bounding box, computed style, and attributes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Viewport state, including the current scroll offsets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewportInfo {
    /// Viewport width in pixels.
    pub width: f64,
    /// Viewport height in pixels.
    pub height: f64,
    /// Scroll X offset in page coordinates.
    #[serde(default)]
    pub scroll_x: f64,
    /// Scroll Y offset in page coordinates.
    #[serde(default)]
    pub scroll_y: f64,
}

impl Default for ViewportInfo {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            scroll_x: 0.0,
            scroll_y: 0.0,
        }
    }
}

impl ViewportInfo {
    /// The viewport as a rectangle in page coordinates.
    pub fn rect(&self) -> BoundingBox {
        BoundingBox {
            x: self.scroll_x,
            y: self.scroll_y,
            width: self.width,
            height: self.height,
        }
    }
}

/// Bounding box for an element, in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Get the center point of this bounding box.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Whether this box has zero area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Whether this box lies entirely inside `other` (the conservative
    /// in-viewport rule: any edge outside disqualifies).
    pub fn is_fully_inside(&self, other: &BoundingBox) -> bool {
        self.x >= other.x
            && self.y >= other.y
            && self.x + self.width <= other.x + other.width
            && self.y + self.height <= other.y + other.height
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// Computed style fields the interactability classifier reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputedStyle {
    #[serde(default = "default_display")]
    pub display: String,
    #[serde(default = "default_visibility")]
    pub visibility: String,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            display: default_display(),
            visibility: default_visibility(),
            opacity: default_opacity(),
        }
    }
}

fn default_display() -> String {
    "block".to_string()
}

fn default_visibility() -> String {
    "visible".to_string()
}

fn default_opacity() -> f64 {
    1.0
}

/// Element attributes.
///
/// The names the engine reads on hot paths get dedicated fields; everything
/// else (including `data-*`) lives in the maps. [`NodeAttributes::get`]
/// presents them uniformly by attribute name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeAttributes {
    pub id: Option<String>,
    pub class: Option<String>,
    pub href: Option<String>,
    pub src: Option<String>,
    pub alt: Option<String>,
    pub title: Option<String>,
    pub placeholder: Option<String>,
    /// The `value` attribute (initial value, distinct from the live value).
    pub value: Option<String>,
    pub r#type: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
    pub aria_label: Option<String>,
    pub onclick: Option<String>,
    /// `data-*` attributes, keyed by full name (`data-field`, ...).
    #[serde(default)]
    pub data: BTreeMap<String, String>,
    /// Any other attribute.
    #[serde(default)]
    pub other: BTreeMap<String, String>,
}

impl NodeAttributes {
    /// Look up an attribute by its document name.
    pub fn get(&self, attr: &str) -> Option<&str> {
        match attr {
            "id" => self.id.as_deref(),
            "class" => self.class.as_deref(),
            "href" => self.href.as_deref(),
            "src" => self.src.as_deref(),
            "alt" => self.alt.as_deref(),
            "title" => self.title.as_deref(),
            "placeholder" => self.placeholder.as_deref(),
            "value" => self.value.as_deref(),
            "type" => self.r#type.as_deref(),
            "name" => self.name.as_deref(),
            "role" => self.role.as_deref(),
            "aria-label" => self.aria_label.as_deref(),
            "onclick" => self.onclick.as_deref(),
            _ if attr.starts_with("data-") => self.data.get(attr).map(String::as_str),
            _ => self.other.get(attr).map(String::as_str),
        }
    }

    /// Set an attribute by its document name.
    pub fn set(&mut self, attr: &str, value: impl Into<String>) {
        let value = value.into();
        match attr {
            "id" => self.id = Some(value),
            "class" => self.class = Some(value),
            "href" => self.href = Some(value),
            "src" => self.src = Some(value),
            "alt" => self.alt = Some(value),
            "title" => self.title = Some(value),
            "placeholder" => self.placeholder = Some(value),
            "value" => self.value = Some(value),
            "type" => self.r#type = Some(value),
            "name" => self.name = Some(value),
            "role" => self.role = Some(value),
            "aria-label" => self.aria_label = Some(value),
            "onclick" => self.onclick = Some(value),
            _ if attr.starts_with("data-") => {
                self.data.insert(attr.to_string(), value);
            }
            _ => {
                self.other.insert(attr.to_string(), value);
            }
        }
    }

    /// Whether the element has a class token equal to `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.class
            .as_deref()
            .map(|c| c.split_whitespace().any(|t| t == class))
            .unwrap_or(false)
    }

    /// All attributes flattened into one name→value map, for reporting.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        let named = [
            ("id", &self.id),
            ("class", &self.class),
            ("href", &self.href),
            ("src", &self.src),
            ("alt", &self.alt),
            ("title", &self.title),
            ("placeholder", &self.placeholder),
            ("value", &self.value),
            ("type", &self.r#type),
            ("name", &self.name),
            ("role", &self.role),
            ("aria-label", &self.aria_label),
            ("onclick", &self.onclick),
        ];
        for (name, value) in named {
            if let Some(v) = value {
                map.insert(name.to_string(), v.clone());
            }
        }
        for (k, v) in &self.data {
            map.insert(k.clone(), v.clone());
        }
        for (k, v) in &self.other {
            map.insert(k.clone(), v.clone());
        }
        map
    }
}
