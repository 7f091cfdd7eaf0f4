use serde::{Deserialize, Serialize};

/// A pointer to an externally authored model file and its texture.
///
/// Paths are relative to the data directory. [`ModelReference::NONE`] stands
/// for "no custom model".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelReference {
    /// Relative path of the model file, e.g. `models/item/blade.geo.json`.
    pub model_path: String,
    /// Relative path of the texture file, e.g. `textures/item/blade.png`.
    pub texture_path: String,
    /// Display scale applied by the client.
    pub scale: f64,
}

impl ModelReference {
    /// The sentinel for "no custom model".
    pub const NONE: ModelReference = ModelReference {
        model_path: String::new(),
        texture_path: String::new(),
        scale: 1.0,
    };

    /// Create a model reference with the default scale.
    pub fn new(model_path: impl Into<String>, texture_path: impl Into<String>) -> Self {
        Self {
            model_path: model_path.into(),
            texture_path: texture_path.into(),
            scale: 1.0,
        }
    }

    /// Set the display scale.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Returns true if this is the [`ModelReference::NONE`] sentinel.
    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// The non-empty asset paths this reference points at (model first).
    pub fn asset_paths(&self) -> impl Iterator<Item = &str> {
        [self.model_path.as_str(), self.texture_path.as_str()]
            .into_iter()
            .filter(|p| !p.is_empty())
    }
}

impl Default for ModelReference {
    fn default() -> Self {
        Self::NONE
    }
}

/// Combat stats carried by a custom item.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemStats {
    /// Bonus damage.
    pub damage: f64,
    /// Bonus defense.
    pub defense: f64,
    /// Critical hit chance in the range 0.0-1.0.
    pub critical_chance: f64,
}

impl ItemStats {
    /// Stats with every value at zero.
    pub const EMPTY: ItemStats = ItemStats {
        damage: 0.0,
        defense: 0.0,
        critical_chance: 0.0,
    };

    /// Returns true if every stat is zero.
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_sentinel() {
        assert!(ModelReference::NONE.is_none());
        assert!(ModelReference::default().is_none());
        assert!(!ModelReference::new("models/a.json", "").is_none());
    }

    #[test]
    fn scale_alone_is_not_none() {
        let model = ModelReference::NONE.with_scale(2.0);
        assert!(!model.is_none());
        assert_eq!(model.asset_paths().count(), 0);
    }

    #[test]
    fn asset_paths_skip_empty() {
        let model = ModelReference::new("models/item/a.geo.json", "");
        let paths: Vec<_> = model.asset_paths().collect();
        assert_eq!(paths, vec!["models/item/a.geo.json"]);

        let model = ModelReference::new("models/item/a.geo.json", "textures/item/a.png");
        assert_eq!(model.asset_paths().count(), 2);
    }

    #[test]
    fn empty_stats() {
        assert!(ItemStats::default().is_empty());
        let stats = ItemStats {
            damage: 5.0,
            ..ItemStats::EMPTY
        };
        assert!(!stats.is_empty());
    }
}
