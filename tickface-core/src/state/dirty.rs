//! Invalidation tracking for drawn layers

/// Drawn layers, bottom to top
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layer {
    Background,
    Dial,
    Temperature,
    Battery,
    Health,
    /// Bluetooth and charging glyphs
    Glyphs,
    /// Day, date and step text
    Text,
    /// Weather and shoe icons
    Icons,
    Hands,
}

impl Layer {
    pub const ALL: [Layer; 9] = [
        Layer::Background,
        Layer::Dial,
        Layer::Temperature,
        Layer::Battery,
        Layer::Health,
        Layer::Glyphs,
        Layer::Text,
        Layer::Icons,
        Layer::Hands,
    ];

    const fn bit(self) -> u16 {
        1 << self as u16
    }
}

/// Set of layers that need redrawing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DirtyLayers(u16);

impl DirtyLayers {
    pub const NONE: DirtyLayers = DirtyLayers(0);

    /// Every layer
    pub const fn all() -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < Layer::ALL.len() {
            bits |= Layer::ALL[i].bit();
            i += 1;
        }
        DirtyLayers(bits)
    }

    pub fn mark(&mut self, layer: Layer) {
        self.0 |= layer.bit();
    }

    /// Builder form of [`Self::mark`]
    pub fn with(mut self, layer: Layer) -> Self {
        self.mark(layer);
        self
    }

    pub fn merge(&mut self, other: DirtyLayers) {
        self.0 |= other.0;
    }

    pub fn contains(&self, layer: Layer) -> bool {
        self.0 & layer.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Dirty layers, bottom to top
    pub fn iter(&self) -> impl Iterator<Item = Layer> + '_ {
        Layer::ALL.into_iter().filter(move |l| self.contains(*l))
    }
}
