//! Styles and natures shared by tables, rows, columns and cells

use indexmap::IndexMap;

use super::nature::Nature;

/// User-defined key-value styles (`border-top`, `text-align`, `valign`, ...)
///
/// Insertion order is kept so that builders emit attributes deterministically.
/// Every styled object owns its map: building one from a map moves or clones
/// it, so sibling cells never share styles.
pub type Styles = IndexMap<String, String>;

/// Object carrying styles and a nature
pub trait Styled {
    fn styles(&self) -> &Styles;

    fn styles_mut(&mut self) -> &mut Styles;

    fn nature(&self) -> &Nature;

    fn set_nature(&mut self, nature: Nature);

    /// Value of a single style
    fn style(&self, key: &str) -> Option<&str> {
        self.styles().get(key).map(String::as_str)
    }

    /// Set a single style, returning the previous value
    fn set_style(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String>
    where
        Self: Sized,
    {
        self.styles_mut().insert(key.into(), value.into())
    }
}

/// Build a [`Styles`] map from string pairs
///
/// ```
/// use tablegrid::styles_from;
///
/// let styles = styles_from([("align", "center"), ("valign", "top")]);
/// assert_eq!(styles["align"], "center");
/// ```
pub fn styles_from<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Styles
where
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
