use ecow::EcoVec;

use crate::syntax::Value;

/// A persistent mapping from variable names to values.
///
/// Bindings are kept sorted by name, so two environments with the same
/// bindings compare equal regardless of the order they were added in.
/// Cloning is *O(1)*; [`Env::with`] copies the bindings only if they are
/// shared with another environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env<'core> {
    bindings: EcoVec<(&'core str, Value)>,
}

impl<'core> Env<'core> {
    pub const fn new() -> Self {
        Self {
            bindings: EcoVec::new(),
        }
    }

    pub fn len(&self) -> usize { self.bindings.len() }

    pub fn is_empty(&self) -> bool { self.bindings.is_empty() }

    fn position(&self, name: &str) -> Result<usize, usize> {
        self.bindings
            .binary_search_by(|(bound, _)| Ord::cmp(*bound, name))
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        let index = self.position(name).ok()?;
        Some(self.bindings[index].1)
    }

    pub fn contains(&self, name: &str) -> bool { self.position(name).is_ok() }

    /// A new environment that binds `name` to `value`, replacing any previous
    /// binding of `name`. `self` is left untouched.
    #[must_use]
    pub fn with(&self, name: &'core str, value: Value) -> Self {
        let mut bindings = self.bindings.clone();
        match self.position(name) {
            Ok(index) => bindings.make_mut()[index].1 = value,
            Err(index) => bindings.insert(index, (name, value)),
        }
        Self { bindings }
    }

    /// Bindings in ascending order of name.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&'core str, Value)> + '_ {
        self.bindings.iter().copied()
    }
}

impl<'core> FromIterator<(&'core str, Value)> for Env<'core> {
    fn from_iter<I: IntoIterator<Item = (&'core str, Value)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |env, (name, value)| env.with(name, value))
    }
}

impl<'core, const N: usize> From<[(&'core str, Value); N]> for Env<'core> {
    fn from(bindings: [(&'core str, Value); N]) -> Self { Self::from_iter(bindings) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        let env = Env::new();
        assert!(env.is_empty());
        assert_eq!(env.get("x"), None);
        assert!(!env.contains("x"));
    }

    #[test]
    fn with_adds_binding() {
        let env = Env::new().with("x", Value::Number(1));
        assert_eq!(env.len(), 1);
        assert_eq!(env.get("x"), Some(Value::Number(1)));
    }

    #[test]
    fn with_overwrites_binding() {
        let env = Env::from([("x", Value::Number(1))]);
        let env = env.with("x", Value::Boolean(true));
        assert_eq!(env.len(), 1);
        assert_eq!(env.get("x"), Some(Value::Boolean(true)));
    }

    #[test]
    fn with_leaves_old_env_intact() {
        let old = Env::from([("x", Value::Number(1))]);
        let new = old.with("x", Value::Number(2)).with("y", Value::Number(3));
        assert_eq!(old.get("x"), Some(Value::Number(1)));
        assert_eq!(old.get("y"), None);
        assert_eq!(new.get("x"), Some(Value::Number(2)));
        assert_eq!(new.get("y"), Some(Value::Number(3)));
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let xy = Env::new()
            .with("x", Value::Number(1))
            .with("y", Value::Number(2));
        let yx = Env::new()
            .with("y", Value::Number(2))
            .with("x", Value::Number(1));
        assert_eq!(xy, yx);
    }

    #[test]
    fn iter_is_sorted() {
        let env = Env::from([
            ("z", Value::Number(3)),
            ("x", Value::Number(1)),
            ("y", Value::Boolean(false)),
        ]);
        let names: Vec<_> = env.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["x", "y", "z"]);
    }
}
