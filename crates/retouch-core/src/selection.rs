//! Filter selection: which stylistic filter is active and its tunable parameter.

use serde::{Deserialize, Serialize};

/// The stylistic filters a session can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FilterKind {
    #[default]
    None,
    Median,
    GreyScale,
    Cold,
    Contrast,
    Sobel,
    Warm,
}

impl FilterKind {
    pub const ALL: [FilterKind; 7] = [
        FilterKind::None,
        FilterKind::Median,
        FilterKind::GreyScale,
        FilterKind::Cold,
        FilterKind::Contrast,
        FilterKind::Sobel,
        FilterKind::Warm,
    ];

    /// Map a filter radio-button label to the filter it is wired to.
    ///
    /// The editor's controls are historically mislabeled: "Laplacian" runs the
    /// contrast stretch, "Bilateral" runs greyscale and "Gaussian" runs the cold
    /// tint. Those mappings are kept as-is. Matching ignores case and
    /// surrounding whitespace.
    pub fn from_control_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "none" | "no filter" | "" => Some(FilterKind::None),
            "median" => Some(FilterKind::Median),
            "bilateral" | "greyscale" | "grayscale" => Some(FilterKind::GreyScale),
            "gaussian" | "cold" => Some(FilterKind::Cold),
            "laplacian" | "contrast" => Some(FilterKind::Contrast),
            "sobel" | "sobal" => Some(FilterKind::Sobel),
            "warm" => Some(FilterKind::Warm),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FilterKind::None => "None",
            FilterKind::Median => "Median",
            FilterKind::GreyScale => "GreyScale",
            FilterKind::Cold => "Cold",
            FilterKind::Contrast => "Contrast",
            FilterKind::Sobel => "Sobel",
            FilterKind::Warm => "Warm",
        }
    }

    /// Whether the filter reads the selection's parameter.
    pub fn uses_parameter(self) -> bool {
        matches!(
            self,
            FilterKind::Median | FilterKind::Cold | FilterKind::Contrast | FilterKind::Warm
        )
    }
}

impl std::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The filter parameter: always odd and within `[MIN, MAX]`.
///
/// The only way to build one is through [`KernelSize::new`], which normalizes,
/// so every value that reaches a kernel already satisfies the invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct KernelSize(u32);

impl KernelSize {
    pub const MIN: u32 = 3;
    pub const MAX: u32 = 99;

    /// Normalize a raw control value: even values are bumped up by one, then
    /// the result is clamped to `[3, 99]`.
    pub fn new(value: i64) -> Self {
        let odd = if value % 2 == 0 { value + 1 } else { value };
        Self(odd.clamp(Self::MIN as i64, Self::MAX as i64) as u32)
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Neighborhood radius, `(size - 1) / 2`.
    #[inline]
    pub fn radius(self) -> u32 {
        self.0 / 2
    }
}

impl Default for KernelSize {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl From<i64> for KernelSize {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<KernelSize> for i64 {
    fn from(size: KernelSize) -> Self {
        size.0 as i64
    }
}

/// Active filter plus its parameter.
///
/// The parameter is kept when switching filters, so it carries over to
/// whichever filter is selected next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterSelection {
    pub kind: FilterKind,
    pub parameter: KernelSize,
}

impl FilterSelection {
    pub fn new(kind: FilterKind, parameter: KernelSize) -> Self {
        Self { kind, parameter }
    }

    pub fn is_none(&self) -> bool {
        self.kind == FilterKind::None
    }
}
