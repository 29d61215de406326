//! Data-source contracts for the list a scroller controls.

use std::rc::Rc;

/// Supplies a short label for an item, shown in the bubble while dragging.
pub trait TitleProvider {
    fn section_title(&self, position: usize) -> String;
}

/// The data source behind a scroll container.
pub trait ListAdapter {
    /// Number of items in the list.
    fn item_count(&self) -> usize;

    /// Capability query: the adapter as a title provider, if it is one.
    ///
    /// Adapters that implement [`TitleProvider`] override this with
    /// `Some(self)`. The scroller resolves it once when it is attached.
    fn title_provider(self: Rc<Self>) -> Option<Rc<dyn TitleProvider>> {
        None
    }
}

/// Adapter over a list of strings whose section title is the upper-cased
/// first character of each item.
#[derive(Debug, Clone, Default)]
pub struct StringListAdapter {
    items: Vec<String>,
}

impl StringListAdapter {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }
}

impl ListAdapter for StringListAdapter {
    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn title_provider(self: Rc<Self>) -> Option<Rc<dyn TitleProvider>> {
        Some(self)
    }
}

impl TitleProvider for StringListAdapter {
    fn section_title(&self, position: usize) -> String {
        self.items
            .get(position)
            .and_then(|item| item.chars().next())
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Adapter that only knows how many items exist; it has no titles.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountAdapter {
    count: usize,
}

impl CountAdapter {
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl ListAdapter for CountAdapter {
    fn item_count(&self) -> usize {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_adapter_titles() {
        let adapter = StringListAdapter::new(["apple", "banana", "", "éclair"]);
        assert_eq!(adapter.item_count(), 4);
        assert_eq!(adapter.items()[1], "banana");
        assert_eq!(adapter.section_title(0), "A");
        assert_eq!(adapter.section_title(1), "B");
        assert_eq!(adapter.section_title(2), "");
        assert_eq!(adapter.section_title(3), "É");
        assert_eq!(adapter.section_title(99), "");
    }

    #[test]
    fn test_title_capability_detection() {
        let titled: Rc<dyn ListAdapter> = Rc::new(StringListAdapter::new(["x"]));
        assert!(titled.title_provider().is_some());

        let plain: Rc<dyn ListAdapter> = Rc::new(CountAdapter::new(3));
        assert!(plain.title_provider().is_none());
    }
}
