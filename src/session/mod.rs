//! In-memory state for one analysis session.
//!
//! Owns the ordered criterion and variant lists and serializes all
//! mutations before any scoring call; the engine itself stays pure.
//! Sessions live for one analysis only and are never persisted.

use crate::config::Config;
use crate::error::{NutzwertError, Result};
use crate::model::{Criterion, ScoreResult, Variant};
use crate::scoring;

/// One analysis session: criteria, variants, and the limits that the
/// collecting layer enforces on them.
#[derive(Debug, Clone)]
pub struct Session {
    config: Config,
    criteria: Vec<Criterion>,
    variants: Vec<Variant>,
}

impl Session {
    /// Create an empty session with one default-named variant.
    pub fn new(config: Config) -> Self {
        let variants = vec![Variant::new("Variant 1")];
        Self {
            config,
            criteria: Vec::new(),
            variants,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    /// Add a criterion with the configured initial weight.
    ///
    /// Names are trimmed, must be non-empty, and must not collide with
    /// an existing criterion (exact string match).
    pub fn add_criterion(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(NutzwertError::EmptyCriterionName);
        }
        if self.criteria.iter().any(|c| c.name == name) {
            return Err(NutzwertError::DuplicateCriterion(name.to_string()));
        }
        tracing::debug!("adding criterion '{}'", name);
        self.criteria
            .push(Criterion::new(name, self.config.initial_weight));
        Ok(())
    }

    /// Update the weight of the criterion at `index`.
    pub fn set_weight(&mut self, index: usize, weight: f64) -> Result<()> {
        if !(0.0..=self.config.weight_max).contains(&weight) {
            return Err(NutzwertError::WeightOutOfRange {
                value: weight,
                max: self.config.weight_max,
            });
        }
        let criterion = self
            .criteria
            .get_mut(index)
            .ok_or(NutzwertError::IndexOutOfRange(index))?;
        criterion.weight = weight;
        Ok(())
    }

    /// Remove the criteria at the given indices, together with their
    /// rating entries on every variant.
    pub fn remove_criteria(&mut self, indices: &[usize]) -> Result<()> {
        for &index in indices {
            if index >= self.criteria.len() {
                return Err(NutzwertError::IndexOutOfRange(index));
            }
        }

        let mut sorted: Vec<usize> = indices.to_vec();
        sorted.sort_unstable();
        sorted.dedup();

        // Highest first so earlier removals don't shift pending indices.
        for index in sorted.into_iter().rev() {
            let removed = self.criteria.remove(index);
            for variant in &mut self.variants {
                variant.ratings.remove(&removed.name);
            }
            tracing::debug!("removed criterion '{}'", removed.name);
        }
        Ok(())
    }

    /// Resize the variant list to `count`, within 1..=max_variants.
    ///
    /// Growing appends default-named variants; shrinking truncates from
    /// the end.
    pub fn set_variant_count(&mut self, count: usize) -> Result<()> {
        if count == 0 || count > self.config.max_variants {
            return Err(NutzwertError::VariantLimit {
                max: self.config.max_variants,
            });
        }
        while self.variants.len() < count {
            let name = format!("Variant {}", self.variants.len() + 1);
            self.variants.push(Variant::new(name));
        }
        self.variants.truncate(count);
        Ok(())
    }

    pub fn rename_variant(&mut self, index: usize, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(NutzwertError::EmptyVariantName);
        }
        let variant = self
            .variants
            .get_mut(index)
            .ok_or(NutzwertError::IndexOutOfRange(index))?;
        variant.name = name.to_string();
        Ok(())
    }

    /// Record one variant's rating for one criterion.
    pub fn set_rating(&mut self, variant_index: usize, criterion: &str, rating: f64) -> Result<()> {
        if !(0.0..=self.config.rating_max).contains(&rating) {
            return Err(NutzwertError::RatingOutOfRange {
                value: rating,
                max: self.config.rating_max,
            });
        }
        if !self.criteria.iter().any(|c| c.name == criterion) {
            return Err(NutzwertError::UnknownCriterion(criterion.to_string()));
        }
        let variant = self
            .variants
            .get_mut(variant_index)
            .ok_or(NutzwertError::IndexOutOfRange(variant_index))?;
        variant.ratings.insert(criterion.to_string(), rating);
        Ok(())
    }

    /// Run the analysis: recomputed fresh on every call, never cached.
    pub fn run(&self) -> Vec<ScoreResult> {
        if self.criteria.iter().all(|c| c.weight == 0.0) && !self.criteria.is_empty() {
            tracing::warn!("all weights are zero; every utility will be 0");
        }
        scoring::compute_scores(&self.criteria, &self.variants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(Config::default())
    }

    #[test]
    fn test_add_criterion_uses_initial_weight() {
        let mut s = session();
        s.add_criterion("Cost").unwrap();
        assert_eq!(s.criteria()[0].weight, 1.0);
    }

    #[test]
    fn test_duplicate_criterion_rejected() {
        let mut s = session();
        s.add_criterion("Cost").unwrap();
        assert!(matches!(
            s.add_criterion("Cost"),
            Err(NutzwertError::DuplicateCriterion(_))
        ));
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut s = session();
        assert!(matches!(
            s.add_criterion("   "),
            Err(NutzwertError::EmptyCriterionName)
        ));
    }

    #[test]
    fn test_weight_range_enforced() {
        let mut s = session();
        s.add_criterion("Cost").unwrap();
        assert!(s.set_weight(0, 10.0).is_ok());
        assert!(matches!(
            s.set_weight(0, 10.5),
            Err(NutzwertError::WeightOutOfRange { .. })
        ));
        assert!(matches!(
            s.set_weight(0, -1.0),
            Err(NutzwertError::WeightOutOfRange { .. })
        ));
    }

    #[test]
    fn test_variant_limit() {
        let mut s = session();
        assert!(s.set_variant_count(5).is_ok());
        assert_eq!(s.variants().len(), 5);
        assert!(matches!(
            s.set_variant_count(6),
            Err(NutzwertError::VariantLimit { max: 5 })
        ));
        assert!(matches!(
            s.set_variant_count(0),
            Err(NutzwertError::VariantLimit { max: 5 })
        ));
    }

    #[test]
    fn test_remove_criteria_drops_ratings() {
        let mut s = session();
        s.add_criterion("Cost").unwrap();
        s.add_criterion("Quality").unwrap();
        s.set_rating(0, "Cost", 8.0).unwrap();
        s.set_rating(0, "Quality", 6.0).unwrap();

        s.remove_criteria(&[0]).unwrap();

        assert_eq!(s.criteria().len(), 1);
        assert_eq!(s.criteria()[0].name, "Quality");
        assert!(!s.variants()[0].ratings.contains_key("Cost"));
        assert!(s.variants()[0].ratings.contains_key("Quality"));
    }

    #[test]
    fn test_blank_variant_name_rejected() {
        let mut s = session();
        assert!(matches!(
            s.rename_variant(0, "   "),
            Err(NutzwertError::EmptyVariantName)
        ));
        // Original name survives the rejected rename.
        assert_eq!(s.variants()[0].name, "Variant 1");
    }

    #[test]
    fn test_rating_requires_known_criterion() {
        let mut s = session();
        assert!(matches!(
            s.set_rating(0, "Cost", 5.0),
            Err(NutzwertError::UnknownCriterion(_))
        ));
    }
}
