//! Lookup from [`ActivationKind`] to a factory.

use std::collections::BTreeMap;

use super::{Activation, ActivationError, ActivationKind};

/// Builds a fresh activation instance.
pub type ActivationFactory = fn() -> Box<dyn Activation>;

/// Factories keyed on [`ActivationKind`].
///
/// Starts empty; whoever owns the concrete activations registers them.
///
/// ```
/// use treemat::activation::{Activation, ActivationError, ActivationKind, ActivationRegistry};
/// use treemat::data::Vector;
///
/// struct Margin;
///
/// impl Activation for Margin {
///     fn transform(&self, raw: &Vector) -> Result<Vector, ActivationError> {
///         Ok(raw.clone())
///     }
///     fn kind(&self) -> ActivationKind {
///         ActivationKind::Raw
///     }
///     fn name(&self) -> &str {
///         "margin"
///     }
/// }
///
/// let mut registry = ActivationRegistry::new();
/// registry.register(ActivationKind::Raw, || Box::new(Margin)).unwrap();
///
/// let activation = registry.create_for_objective("reg:squarederror").unwrap();
/// assert_eq!(activation.name(), "margin");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ActivationRegistry {
    factories: BTreeMap<ActivationKind, ActivationFactory>,
}

impl ActivationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` under `kind`, replacing any previous factory.
    ///
    /// # Errors
    ///
    /// [`ActivationError::KindMismatch`] if the factory's product reports a
    /// different kind. The registry is left unchanged.
    pub fn register(
        &mut self,
        kind: ActivationKind,
        factory: ActivationFactory,
    ) -> Result<(), ActivationError> {
        let actual = factory().kind();
        if actual != kind {
            return Err(ActivationError::KindMismatch {
                expected: kind,
                actual,
            });
        }
        if self.factories.insert(kind, factory).is_some() {
            tracing::warn!(%kind, "replaced registered activation factory");
        }
        Ok(())
    }

    /// Whether a factory is registered for `kind`.
    pub fn contains(&self, kind: ActivationKind) -> bool {
        self.factories.contains_key(&kind)
    }

    /// Registered kinds in ascending order.
    pub fn kinds(&self) -> impl Iterator<Item = ActivationKind> + '_ {
        self.factories.keys().copied()
    }

    /// Instantiate the activation registered for `kind`.
    pub fn create(&self, kind: ActivationKind) -> Result<Box<dyn Activation>, ActivationError> {
        self.factories
            .get(&kind)
            .map(|factory| factory())
            .ok_or(ActivationError::NotRegistered(kind))
    }

    /// Instantiate the activation implied by an XGBoost objective name.
    pub fn create_for_objective(
        &self,
        objective: &str,
    ) -> Result<Box<dyn Activation>, ActivationError> {
        let kind = ActivationKind::from_objective(objective)
            .ok_or_else(|| ActivationError::UnknownObjective(objective.to_string()))?;
        self.create(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Vector;

    /// Checks arity only; passes scores through.
    struct ClassScores {
        n_classes: usize,
    }

    impl Activation for ClassScores {
        fn transform(&self, raw: &Vector) -> Result<Vector, ActivationError> {
            if raw.len() != self.n_classes {
                return Err(ActivationError::Arity {
                    kind: self.kind(),
                    expected: self.n_classes,
                    actual: raw.len(),
                });
            }
            Ok(raw.clone())
        }

        fn kind(&self) -> ActivationKind {
            ActivationKind::Softmax
        }

        fn name(&self) -> &str {
            "class-scores"
        }
    }

    fn three_classes() -> Box<dyn Activation> {
        Box::new(ClassScores { n_classes: 3 })
    }

    #[test]
    fn empty_registry() {
        let registry = ActivationRegistry::new();
        assert_eq!(registry.kinds().count(), 0);
        assert_eq!(
            registry.create(ActivationKind::Logistic).unwrap_err(),
            ActivationError::NotRegistered(ActivationKind::Logistic)
        );
    }

    #[test]
    fn register_and_create() {
        let mut registry = ActivationRegistry::new();
        registry
            .register(ActivationKind::Softmax, three_classes)
            .unwrap();
        assert!(registry.contains(ActivationKind::Softmax));
        assert_eq!(registry.kinds().collect::<Vec<_>>(), vec![ActivationKind::Softmax]);

        let activation = registry.create(ActivationKind::Softmax).unwrap();
        assert_eq!(activation.kind(), ActivationKind::Softmax);

        let raw = Vector::from(vec![1.0, 2.0, 3.0]);
        assert_eq!(activation.transform(&raw).unwrap(), raw);
        assert_eq!(
            activation.transform(&Vector::from(vec![1.0])).unwrap_err(),
            ActivationError::Arity {
                kind: ActivationKind::Softmax,
                expected: 3,
                actual: 1
            }
        );
    }

    #[test]
    fn mismatched_kind_is_rejected() {
        let mut registry = ActivationRegistry::new();
        let err = registry
            .register(ActivationKind::Logistic, three_classes)
            .unwrap_err();
        assert_eq!(
            err,
            ActivationError::KindMismatch {
                expected: ActivationKind::Logistic,
                actual: ActivationKind::Softmax
            }
        );
        assert!(!registry.contains(ActivationKind::Logistic));
    }

    #[test]
    fn create_for_objective() {
        let mut registry = ActivationRegistry::new();
        registry
            .register(ActivationKind::Softmax, three_classes)
            .unwrap();

        assert_eq!(
            registry.create_for_objective("multi:softprob").unwrap().name(),
            "class-scores"
        );
        assert_eq!(
            registry.create_for_objective("binary:logistic").unwrap_err(),
            ActivationError::NotRegistered(ActivationKind::Logistic)
        );
        assert_eq!(
            registry.create_for_objective("rank:ndcg").unwrap_err(),
            ActivationError::UnknownObjective("rank:ndcg".into())
        );
    }
}
