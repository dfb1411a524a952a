use order_framework::InternPool;
use std::fmt::{self, Display};
use std::sync::Arc;

/// Canonical handle for an ingredient name.
///
/// Handles issued by the same [`IngredientPool`] for equal names share one allocation;
/// [`Ingredient::is_same`] checks that identity, `==` compares the text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ingredient(Arc<str>);

impl Ingredient {
    pub fn name(&self) -> &str {
        &self.0
    }

    /// True when both handles point at the same pooled value.
    pub fn is_same(&self, other: &Ingredient) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Ingredient {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Flyweight registry of ingredient names. Lives as long as the shop session.
#[derive(Debug, Default)]
pub struct IngredientPool {
    pool: InternPool,
}

impl IngredientPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&mut self, name: &str) -> Ingredient {
        Ingredient(self.pool.intern(name))
    }

    /// Number of distinct ingredients seen so far.
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_names_share_a_handle() {
        let mut pool = IngredientPool::new();
        let first = pool.intern("Extra Cheese");
        let second = pool.intern("Extra Cheese");

        assert_eq!(first, second);
        assert!(first.is_same(&second));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_separate_pools_do_not_share() {
        let mut a = IngredientPool::new();
        let mut b = IngredientPool::new();
        let left = a.intern("Onions");
        let right = b.intern("Onions");

        assert_eq!(left, right);
        assert!(!left.is_same(&right));
    }
}
