//! Ordering of the ten digit keys.

use std::fmt;

use pinpad_core::{
    Digit, Error, KeyOrder, Result,
    config::validate_key_set,
    constants::{DEFAULT_KEY_SET, KEY_COUNT},
};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// A permutation of the digits 0-9, read left to right, top to bottom.
///
/// # Examples
///
/// ```
/// use pinpad_keypad::KeyLayout;
///
/// let layout = KeyLayout::default();
/// assert_eq!(layout.to_key_set(), vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 0]);
///
/// assert!(KeyLayout::new(&[1, 1, 2, 3, 4, 5, 6, 7, 8, 9]).is_err());
/// ```
///
/// Serialized as the plain key set; deserializing validates it like
/// [`KeyLayout::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct KeyLayout {
    keys: [Digit; KEY_COUNT],
}

impl KeyLayout {
    /// Create a layout from a custom key order.
    ///
    /// # Errors
    /// Returns `Error::InvalidKeyLayout` unless `keys` holds each digit 0-9
    /// exactly once.
    pub fn new(keys: &[u8]) -> Result<Self> {
        validate_key_set(keys)?;

        let mut digits = [Digit::ALL[0]; KEY_COUNT];
        for (slot, &key) in digits.iter_mut().zip(keys) {
            *slot = Digit::new(key)?;
        }
        Ok(Self { keys: digits })
    }

    /// A random permutation of the default layout.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut layout = Self::default();
        layout.keys.shuffle(rng);
        layout
    }

    /// A random permutation drawn from the thread-local generator.
    pub fn random() -> Self {
        Self::shuffled(&mut rand::thread_rng())
    }

    /// Build the layout a [`KeyOrder`] asks for.
    ///
    /// # Errors
    /// Returns `Error::InvalidKeyLayout` for an invalid custom order.
    pub fn from_order(order: &KeyOrder) -> Result<Self> {
        match order {
            KeyOrder::Default => Ok(Self::default()),
            KeyOrder::Custom(keys) => Self::new(keys),
            KeyOrder::Shuffled => Ok(Self::random()),
        }
    }

    /// The keys in grid order.
    #[must_use]
    pub fn keys(&self) -> &[Digit; KEY_COUNT] {
        &self.keys
    }

    /// The key at `index` (0-9).
    #[must_use]
    pub fn key(&self, index: usize) -> Option<Digit> {
        self.keys.get(index).copied()
    }

    /// The keys as plain numbers.
    #[must_use]
    pub fn to_key_set(&self) -> Vec<u8> {
        self.keys.iter().map(|d| d.as_u8()).collect()
    }
}

impl Default for KeyLayout {
    fn default() -> Self {
        Self {
            keys: DEFAULT_KEY_SET.map(|key| Digit::ALL[usize::from(key)]),
        }
    }
}

impl TryFrom<Vec<u8>> for KeyLayout {
    type Error = Error;

    fn try_from(keys: Vec<u8>) -> Result<Self> {
        Self::new(&keys)
    }
}

impl From<KeyLayout> for Vec<u8> {
    fn from(layout: KeyLayout) -> Self {
        layout.to_key_set()
    }
}

impl fmt::Display for KeyLayout {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for key in &self.keys {
            write!(f, "{key}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    fn sorted(layout: &KeyLayout) -> Vec<u8> {
        let mut keys = layout.to_key_set();
        keys.sort_unstable();
        keys
    }

    #[test]
    fn test_default_layout() {
        let layout = KeyLayout::default();
        assert_eq!(layout.to_string(), "1234567890");
        assert_eq!(layout.key(9).map(Digit::as_u8), Some(0));
        assert_eq!(layout.key(10), None);
    }

    #[test]
    fn test_custom_layout() {
        let layout = KeyLayout::new(&[0, 9, 8, 7, 6, 5, 4, 3, 2, 1]).unwrap();
        assert_eq!(layout.to_string(), "0987654321");
    }

    #[rstest]
    #[case(&[1, 2, 3, 4, 5, 6, 7, 8, 9])]
    #[case(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1])]
    #[case(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 11])]
    #[case(&[1, 2, 3, 4, 5, 6, 7, 8, 8, 0])]
    fn test_invalid_layouts(#[case] keys: &[u8]) {
        assert!(KeyLayout::new(keys).is_err());
    }

    #[test]
    fn test_serde_uses_key_set() {
        let layout = KeyLayout::new(&[0, 9, 8, 7, 6, 5, 4, 3, 2, 1]).unwrap();
        let json = serde_json::to_string(&layout).unwrap();
        assert_eq!(json, "[0,9,8,7,6,5,4,3,2,1]");
        assert_eq!(serde_json::from_str::<KeyLayout>(&json).unwrap(), layout);
    }

    #[rstest]
    #[case("[1,1,1,1,1,1,1,1,1,1]")]
    #[case("[1,2,3]")]
    #[case(r#"{"keys":[1,2,3,4,5,6,7,8,9,0]}"#)]
    fn test_deserialize_rejects_invalid_layout(#[case] json: &str) {
        assert!(serde_json::from_str::<KeyLayout>(json).is_err());
    }

    #[test]
    fn test_shuffled_is_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let layout = KeyLayout::shuffled(&mut rng);
            assert_eq!(sorted(&layout), vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        }
    }

    #[test]
    fn test_shuffled_is_deterministic_for_seed() {
        let a = KeyLayout::shuffled(&mut StdRng::seed_from_u64(42));
        let b = KeyLayout::shuffled(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_order() {
        assert_eq!(
            KeyLayout::from_order(&KeyOrder::Default).unwrap(),
            KeyLayout::default()
        );
        assert_eq!(
            KeyLayout::from_order(&KeyOrder::Custom(vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0]))
                .unwrap()
                .to_string(),
            "9876543210"
        );
        let shuffled = KeyLayout::from_order(&KeyOrder::Shuffled).unwrap();
        assert_eq!(sorted(&shuffled), vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert!(KeyLayout::from_order(&KeyOrder::Custom(vec![1])).is_err());
    }
}
