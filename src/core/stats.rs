use crate::core::store::EventStore;
use crate::models::category::Category;
use crate::models::priority::Priority;

/// Event counts per priority and per category.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    /// Indexed by `Category::code()`.
    pub categories: [usize; 7],
}

impl Statistics {
    pub fn collect(store: &EventStore) -> Self {
        let mut stats = Self::default();

        for ev in store {
            stats.total += 1;
            match ev.priority {
                Priority::High => stats.high += 1,
                Priority::Medium => stats.medium += 1,
                Priority::Low => stats.low += 1,
            }
            stats.categories[ev.category.code() as usize] += 1;
        }

        stats
    }

    pub fn count_for(&self, category: Category) -> usize {
        self.categories[category.code() as usize]
    }

    /// Categories with at least one event, in category order.
    pub fn used_categories(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .map(|c| (*c, self.count_for(*c)))
            .filter(|(_, n)| *n > 0)
            .collect()
    }
}
