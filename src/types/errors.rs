//! Typed failures for the life calculation core

use thiserror::Error;

use super::BearingKind;

/// Errors raised by the bearing life core.
///
/// Every variant carries the offending value so a caller can fix the
/// configuration without reading the internals. None of these are transient.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LifeError {
    #[error("Invalid bearing kind '{0}': expected 'ball' or 'roller'")]
    InvalidKind(String),

    #[error("Invalid bearing geometry: {field} = {value}")]
    InvalidGeometry { field: &'static str, value: f64 },

    #[error("Insufficient data in '{series}': need {needed} samples, have {available}")]
    InsufficientData {
        series: String,
        needed: usize,
        available: usize,
    },

    #[error("Equivalent load undefined: duty-weighted denominator is {denominator}")]
    UndefinedEquivalentLoad { denominator: f64 },

    #[error("Invalid equivalent oscillation angle: {0} deg (must be > 0)")]
    InvalidAngle(f64),

    #[error("Unknown contamination level '{0}'")]
    UnknownContaminationLevel(String),

    #[error("Unknown reliability level {0}% (expected one of 90, 95, 96, 97, 98, 99, 99.95)")]
    UnknownReliabilityLevel(f64),

    #[error("Invalid ISO correction flag '{0}': expected yes or no")]
    InvalidCorrectionFlag(String),

    #[error("Life undefined: oscillatory equivalent load is {equivalent_load} N (must be > 0)")]
    UndefinedLife { equivalent_load: f64 },

    #[error("Life undefined: L10 evaluated to {0} million oscillations")]
    NonFiniteLife(f64),

    #[error("Life in hours undefined: average oscillation speed is {0} per minute")]
    UndefinedLifeHours(f64),

    #[error("Catalogue coefficient fc is required to compute the {0} bearing rating without manufacturer data")]
    MissingCatalogueCoefficient(BearingKind),

    #[error("Unit height H is required to compute the roller bearing rating without manufacturer data")]
    MissingUnitHeight,

    #[error("ISO correction factor undefined for {kind} bearing: evaluated to {value}")]
    UndefinedCorrectionFactor { kind: BearingKind, value: f64 },
}
