//! Logical sales categories and raw-code reconciliation.

use serde::{Deserialize, Serialize};

/// The closed set of sales classifications used for target-setting.
///
/// Stores tag transactions with free-form raw codes; several raw codes
/// collapse into one logical category. A code outside the alias table
/// belongs to no category and is excluded from every aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicalCategory {
    /// Overall store sales. Its target is the record's total figure.
    General,
    /// High-margin product lines.
    Profitable,
    /// Perfumery premium line.
    PerfumeryPlus,
    /// Convenience premium line, toys included.
    ConveniencePlus,
    /// Health and GoodLife products.
    Health,
}

impl LogicalCategory {
    /// Every category, in the fixed presentation order.
    pub const ALL: [Self; 5] = [
        Self::General,
        Self::Profitable,
        Self::PerfumeryPlus,
        Self::ConveniencePlus,
        Self::Health,
    ];

    /// Maps a raw category code onto its logical category.
    ///
    /// The alias table is exhaustive and mutually exclusive; codes outside
    /// it map to `None` and are dropped from every bucket.
    #[must_use]
    pub fn from_raw_code(code: &str) -> Option<Self> {
        match code {
            "geral" => Some(Self::General),
            "r_mais" | "rentaveis20" | "rentaveis25" => Some(Self::Profitable),
            "perfumaria_r_mais" => Some(Self::PerfumeryPlus),
            "conveniencia_r_mais" | "conveniencia" | "brinquedo" => Some(Self::ConveniencePlus),
            "saude" | "goodlife" => Some(Self::Health),
            _ => None,
        }
    }

    /// Returns true if the raw code reconciles to this category.
    #[must_use]
    pub fn matches(self, code: &str) -> bool {
        Self::from_raw_code(code) == Some(self)
    }

    /// Display title shown on the metric card.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::General => "Geral",
            Self::Profitable => "Rentáveis",
            Self::PerfumeryPlus => "Perfumaria R+",
            Self::ConveniencePlus => "Conveniência R+",
            Self::Health => "GoodLife",
        }
    }

    /// Presentation slug used by the display layer for color-coding.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::General => "geral",
            Self::Profitable => "rentavel",
            Self::PerfumeryPlus => "perfumaria",
            Self::ConveniencePlus => "conveniencia",
            Self::Health => "goodlife",
        }
    }
}
