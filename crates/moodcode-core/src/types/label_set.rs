//! Configured subsets of the label enumeration.
//!
//! The classifier core always reasons over the full six-label enumeration,
//! but a deployment may only display a subset. Minimal front-ends use the
//! four-label set `{happy, sad, angry, neutral}`. Labels outside the
//! configured set fold to `Neutral`, the same fallback the template registry
//! applies to anything it does not recognize.

use serde::{Deserialize, Serialize};

use super::label::EmotionLabel;

/// The set of labels a deployment is willing to surface.
///
/// Always contains [`EmotionLabel::Neutral`]; folding would otherwise have
/// no target.
///
/// # Example
///
/// ```
/// use moodcode_core::{EmotionLabel, LabelSet};
///
/// let basic = LabelSet::core_four();
/// assert!(basic.contains(EmotionLabel::Angry));
/// assert!(!basic.contains(EmotionLabel::Fear));
/// assert_eq!(basic.fold(EmotionLabel::Fear), EmotionLabel::Neutral);
/// assert_eq!(basic.fold(EmotionLabel::Sad), EmotionLabel::Sad);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSet {
    members: Vec<EmotionLabel>,
}

impl LabelSet {
    /// The full six-label enumeration.
    pub fn full() -> Self {
        Self {
            members: EmotionLabel::ALL.to_vec(),
        }
    }

    /// The reduced `{happy, sad, angry, neutral}` set used by minimal
    /// front-ends.
    pub fn core_four() -> Self {
        Self {
            members: vec![
                EmotionLabel::Happy,
                EmotionLabel::Sad,
                EmotionLabel::Angry,
                EmotionLabel::Neutral,
            ],
        }
    }

    /// Build a set from arbitrary labels. `Neutral` is added if missing and
    /// duplicates are dropped; canonical order is preserved.
    pub fn from_labels<I>(labels: I) -> Self
    where
        I: IntoIterator<Item = EmotionLabel>,
    {
        let mut requested: Vec<EmotionLabel> = labels.into_iter().collect();
        if !requested.contains(&EmotionLabel::Neutral) {
            requested.push(EmotionLabel::Neutral);
        }
        let members = EmotionLabel::ALL
            .into_iter()
            .filter(|l| requested.contains(l))
            .collect();
        Self { members }
    }

    /// Whether `label` is surfaced by this deployment.
    pub fn contains(&self, label: EmotionLabel) -> bool {
        self.members.contains(&label)
    }

    /// Fold a label into this set: members pass through, everything else
    /// becomes `Neutral`.
    pub fn fold(&self, label: EmotionLabel) -> EmotionLabel {
        if self.contains(label) {
            label
        } else {
            EmotionLabel::Neutral
        }
    }

    /// Members in canonical order.
    pub fn members(&self) -> &[EmotionLabel] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Default for LabelSet {
    fn default() -> Self {
        Self::full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_contains_everything() {
        let set = LabelSet::full();
        for label in EmotionLabel::ALL {
            assert!(set.contains(label));
            assert_eq!(set.fold(label), label);
        }
        assert_eq!(set.len(), 6);
    }

    #[test]
    fn test_core_four_folds_fear_and_surprise() {
        let set = LabelSet::core_four();
        assert_eq!(set.fold(EmotionLabel::Fear), EmotionLabel::Neutral);
        assert_eq!(set.fold(EmotionLabel::Surprise), EmotionLabel::Neutral);
        assert_eq!(set.fold(EmotionLabel::Happy), EmotionLabel::Happy);
        assert_eq!(set.fold(EmotionLabel::Angry), EmotionLabel::Angry);
    }

    #[test]
    fn test_from_labels_always_has_neutral() {
        let set = LabelSet::from_labels([EmotionLabel::Happy]);
        assert!(set.contains(EmotionLabel::Neutral));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_from_labels_dedups_and_orders() {
        let set = LabelSet::from_labels([
            EmotionLabel::Surprise,
            EmotionLabel::Happy,
            EmotionLabel::Happy,
        ]);
        assert_eq!(
            set.members(),
            &[
                EmotionLabel::Happy,
                EmotionLabel::Surprise,
                EmotionLabel::Neutral
            ]
        );
    }

    #[test]
    fn test_default_is_full() {
        assert_eq!(LabelSet::default(), LabelSet::full());
    }
}
