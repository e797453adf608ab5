//! A small CSS selector subset.
//!
//! Supports exactly what the engine itself emits plus plain caller-supplied
//! selectors: tag names, `*`, `#id`, `.class`, attribute predicates
//! (`[attr]`, `[attr="v"]`, `[attr*="v"]`, `[attr^="v"]`), compound simple
//! selectors, the descendant combinator, and comma lists. Child/sibling
//! combinators and pseudo-classes are unsupported; an unparsable selector
//! matches nothing, which surfaces as a clean "not found".

use tracing::debug;

use super::document::PageDocument;
use super::node::NodeId;

/// A parsed comma list of selectors.
#[derive(Debug, Clone)]
pub struct SelectorList {
    alternatives: Vec<ComplexSelector>,
}

/// A descendant chain: `ytd-video-renderer h3 a` is three compounds.
#[derive(Debug, Clone)]
struct ComplexSelector {
    compounds: Vec<Compound>,
}

#[derive(Debug, Clone, Default)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrPredicate>,
}

#[derive(Debug, Clone)]
struct AttrPredicate {
    name: String,
    op: AttrOp,
    value: String,
}

#[derive(Debug, Clone, PartialEq)]
enum AttrOp {
    Exists,
    Equals,
    Contains,
    StartsWith,
}

impl SelectorList {
    /// Parse a selector, returning `None` if it uses unsupported syntax.
    pub fn parse(selector: &str) -> Option<Self> {
        let selector = selector.trim();
        if selector.is_empty() {
            return None;
        }
        let mut alternatives = Vec::new();
        for part in selector.split(',') {
            alternatives.push(ComplexSelector::parse(part.trim())?);
        }
        Some(Self { alternatives })
    }

    /// Whether the node matches any alternative, considering ancestors for
    /// descendant chains.
    pub fn matches(&self, doc: &PageDocument, id: NodeId) -> bool {
        self.alternatives.iter().any(|alt| alt.matches(doc, id))
    }
}

impl ComplexSelector {
    fn parse(part: &str) -> Option<Self> {
        if part.is_empty() || part.contains(['>', '+', '~', ':']) {
            return None;
        }
        let compounds = part
            .split_whitespace()
            .map(Compound::parse)
            .collect::<Option<Vec<_>>>()?;
        if compounds.is_empty() {
            return None;
        }
        Some(Self { compounds })
    }

    fn matches(&self, doc: &PageDocument, id: NodeId) -> bool {
        let (last, ancestors) = match self.compounds.split_last() {
            Some(split) => split,
            None => return false,
        };
        if !last.matches(doc, id) {
            return false;
        }
        // Each remaining compound must match some strictly higher ancestor,
        // in order.
        let mut current = doc.node(id).parent;
        for compound in ancestors.iter().rev() {
            loop {
                match current {
                    Some(ancestor) => {
                        current = doc.node(ancestor).parent;
                        if compound.matches(doc, ancestor) {
                            break;
                        }
                    }
                    None => return false,
                }
            }
        }
        true
    }
}

impl Compound {
    fn parse(part: &str) -> Option<Self> {
        let mut compound = Compound::default();
        let mut rest = part;
        // Leading tag or universal selector.
        let tag_end = rest
            .find(['#', '.', '['])
            .unwrap_or(rest.len());
        if tag_end > 0 {
            let tag = &rest[..tag_end];
            if tag != "*" {
                if !tag
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
                {
                    return None;
                }
                compound.tag = Some(tag.to_lowercase());
            }
            rest = &rest[tag_end..];
        }
        while !rest.is_empty() {
            match rest.as_bytes()[0] {
                b'#' | b'.' => {
                    let marker = rest.as_bytes()[0];
                    let body = &rest[1..];
                    let end = body.find(['#', '.', '[']).unwrap_or(body.len());
                    if end == 0 {
                        return None;
                    }
                    let token = body[..end].to_string();
                    if marker == b'#' {
                        compound.id = Some(token);
                    } else {
                        compound.classes.push(token);
                    }
                    rest = &body[end..];
                }
                b'[' => {
                    let close = rest.find(']')?;
                    let inner = &rest[1..close];
                    compound.attrs.push(AttrPredicate::parse(inner)?);
                    rest = &rest[close + 1..];
                }
                _ => return None,
            }
        }
        Some(compound)
    }

    fn matches(&self, doc: &PageDocument, id: NodeId) -> bool {
        let node = doc.node(id);
        if let Some(ref tag) = self.tag {
            if node.tag != *tag {
                return false;
            }
        }
        if let Some(ref want) = self.id {
            if node.attrs.id.as_deref() != Some(want.as_str()) {
                return false;
            }
        }
        for class in &self.classes {
            if !node.attrs.has_class(class) {
                return false;
            }
        }
        for pred in &self.attrs {
            let actual = node.attrs.get(&pred.name);
            let holds = match (&pred.op, actual) {
                (AttrOp::Exists, Some(_)) => true,
                (AttrOp::Equals, Some(v)) => v == pred.value,
                (AttrOp::Contains, Some(v)) => v.contains(&pred.value),
                (AttrOp::StartsWith, Some(v)) => v.starts_with(&pred.value),
                _ => false,
            };
            if !holds {
                return false;
            }
        }
        true
    }
}

impl AttrPredicate {
    fn parse(inner: &str) -> Option<Self> {
        let inner = inner.trim();
        if inner.is_empty() {
            return None;
        }
        let (name, op, raw) = if let Some(pos) = inner.find("*=") {
            (&inner[..pos], AttrOp::Contains, &inner[pos + 2..])
        } else if let Some(pos) = inner.find("^=") {
            (&inner[..pos], AttrOp::StartsWith, &inner[pos + 2..])
        } else if let Some(pos) = inner.find('=') {
            (&inner[..pos], AttrOp::Equals, &inner[pos + 1..])
        } else {
            (inner, AttrOp::Exists, "")
        };
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let value = raw.trim().trim_matches(['"', '\'']).to_string();
        Some(Self {
            name: name.to_string(),
            op,
            value,
        })
    }
}

/// Parse a selector, logging unsupported syntax once at debug level.
pub(crate) fn parse_or_log(selector: &str) -> Option<SelectorList> {
    let parsed = SelectorList::parse(selector);
    if parsed.is_none() {
        debug!(selector, "unsupported selector syntax");
    }
    parsed
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
