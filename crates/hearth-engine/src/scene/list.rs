use super::DrawItem;

/// Recorded draw stream for a frame.
///
/// Items are submitted in insertion order; there is no sorting. `push()` is O(1) and
/// `clear()` keeps the allocation so the list can be re-recorded every frame.
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    items: Vec<DrawItem>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn push(&mut self, item: DrawItem) {
        self.items.push(item);
    }

    /// Appends a whole assembly, preserving its order.
    #[inline]
    pub fn extend(&mut self, items: impl IntoIterator<Item = DrawItem>) {
        self.items.extend(items);
    }

    /// Returns items in submission order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items carrying `label`, in order.
    pub fn labeled<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a DrawItem> + 'a {
        self.items.iter().filter(move |item| item.label == label)
    }
}
