use rand::Rng;

/// A pair of dice plus the per-die used flags for the current turn.
///
/// Doubles expand to four values, one per move the roll allows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dice {
    values: Vec<u8>,
    used: Vec<bool>,
}

impl Dice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Roll two dice and reset the used flags. Returns the values and whether
    /// doubles were rolled.
    pub fn roll_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> (Vec<u8>, bool) {
        let first = rng.random_range(1..=6);
        let second = rng.random_range(1..=6);
        self.set_values(first, second);

        (self.values.clone(), first == second)
    }

    /// Set the dice to a known result.
    pub fn set_values(&mut self, first: u8, second: u8) {
        self.values = if first == second {
            vec![first; 4]
        } else {
            vec![first, second]
        };
        self.used = vec![false; self.values.len()];
    }

    pub fn values(&self) -> &[u8] {
        &self.values
    }

    pub fn used(&self) -> &[bool] {
        &self.used
    }

    pub fn unused_values(&self) -> Vec<u8> {
        self.values
            .iter()
            .zip(&self.used)
            .filter(|(_, used)| !**used)
            .map(|(value, _)| *value)
            .collect()
    }

    /// Mark the first unused die showing `value`. Returns false if none.
    pub fn mark_used(&mut self, value: u8) -> bool {
        let slot = self
            .values
            .iter()
            .zip(&self.used)
            .position(|(v, used)| *v == value && !*used);

        match slot {
            Some(index) => {
                self.used[index] = true;
                true
            }
            None => false,
        }
    }

    /// True once every die is consumed. Also true before the first roll.
    pub fn all_used(&self) -> bool {
        self.used.iter().all(|used| *used)
    }

    pub fn has_unused(&self) -> bool {
        self.used.iter().any(|used| !*used)
    }

    pub fn is_rolled(&self) -> bool {
        !self.values.is_empty()
    }

    pub fn reset(&mut self) {
        self.values.clear();
        self.used.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_roll_produces_valid_values() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut dice = Dice::new();

        for _ in 0..100 {
            let (values, doubles) = dice.roll_with(&mut rng);
            assert!(values.iter().all(|v| (1..=6).contains(v)));
            if doubles {
                assert_eq!(values.len(), 4);
            } else {
                assert_eq!(values.len(), 2);
            }
            assert_eq!(dice.used().len(), values.len());
            assert!(!dice.all_used());
        }
    }

    #[test]
    fn test_doubles_expand_to_four() {
        let mut dice = Dice::new();
        dice.set_values(3, 3);

        assert_eq!(dice.values(), &[3, 3, 3, 3]);
        assert_eq!(dice.used(), &[false; 4]);
    }

    #[test]
    fn test_mark_used() {
        let mut dice = Dice::new();
        dice.set_values(4, 6);

        assert!(dice.mark_used(6));
        assert!(!dice.mark_used(6));
        assert!(!dice.mark_used(2));
        assert_eq!(dice.unused_values(), vec![4]);
        assert!(dice.has_unused());

        assert!(dice.mark_used(4));
        assert!(dice.all_used());
    }

    #[test]
    fn test_reset() {
        let mut dice = Dice::new();
        dice.set_values(5, 2);
        dice.reset();

        assert!(!dice.is_rolled());
        assert!(dice.values().is_empty());
        assert!(!dice.has_unused());
    }
}
