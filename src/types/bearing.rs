//! Bearing design types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::LifeError;
use crate::physics_engine::bearing_models;

/// Rolling element family. Fixes the ISO 281 life exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BearingKind {
    Ball,
    Roller,
}

impl BearingKind {
    /// Life exponent p: 3 for ball bearings, 3.3 for roller bearings
    pub const fn life_exponent(self) -> f64 {
        match self {
            BearingKind::Ball => 3.0,
            BearingKind::Roller => 3.3,
        }
    }
}

impl fmt::Display for BearingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BearingKind::Ball => write!(f, "ball"),
            BearingKind::Roller => write!(f, "roller"),
        }
    }
}

impl FromStr for BearingKind {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ball" => Ok(BearingKind::Ball),
            "roller" => Ok(BearingKind::Roller),
            _ => Err(LifeError::InvalidKind(s.to_string())),
        }
    }
}

/// Raw bearing parameters as supplied by a catalogue or config file.
///
/// `kind` stays a string here; [`BearingSpecification::new`] is where an
/// unknown kind is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BearingParams {
    /// "ball" or "roller"
    pub kind: String,
    /// Number of rows of rolling elements (i)
    pub rows: u32,
    /// Rolling elements per row (z)
    pub elements_per_row: u32,
    /// Rolling element diameter (mm)
    pub element_diameter_mm: f64,
    /// Nominal contact angle (degrees)
    pub contact_angle_deg: f64,
    /// Outside diameter (mm)
    pub outside_diameter_mm: f64,
    /// Bore diameter (mm)
    pub bore_diameter_mm: f64,
    /// Fatigue limit load from the manufacturer catalogue (N)
    pub fatigue_limit_load_n: f64,
    /// Individual unit height (mm), roller bearings only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_height_mm: Option<f64>,
    /// Dynamic axial load rating from the manufacturer catalogue (N)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer_rating_n: Option<f64>,
}

/// Validated bearing design.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BearingSpecification {
    kind: BearingKind,
    rows: u32,
    elements_per_row: u32,
    element_diameter_mm: f64,
    contact_angle_deg: f64,
    outside_diameter_mm: f64,
    bore_diameter_mm: f64,
    fatigue_limit_load_n: f64,
    unit_height_mm: Option<f64>,
    manufacturer_rating_n: Option<f64>,
}

/// Where the rotational dynamic axial load rating came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingSource {
    /// Supplied by the caller for this calculation
    Catalogue,
    /// Manufacturer value stored with the bearing
    Manufacturer,
    /// Computed from geometry and the fc coefficient
    Computed,
}

impl fmt::Display for RatingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatingSource::Catalogue => write!(f, "catalogue"),
            RatingSource::Manufacturer => write!(f, "manufacturer"),
            RatingSource::Computed => write!(f, "computed"),
        }
    }
}

impl BearingSpecification {
    /// Validate raw parameters into a bearing specification.
    ///
    /// Fails with `InvalidKind` for anything other than ball/roller and with
    /// `InvalidGeometry` for physically impossible dimensions.
    pub fn new(params: &BearingParams) -> Result<Self, LifeError> {
        let kind: BearingKind = params.kind.parse()?;

        if params.rows == 0 {
            return Err(LifeError::InvalidGeometry { field: "rows", value: 0.0 });
        }
        if params.elements_per_row == 0 {
            return Err(LifeError::InvalidGeometry { field: "elements_per_row", value: 0.0 });
        }
        check_positive("element_diameter_mm", params.element_diameter_mm)?;
        check_positive("outside_diameter_mm", params.outside_diameter_mm)?;
        check_positive("bore_diameter_mm", params.bore_diameter_mm)?;
        if !(0.0..=90.0).contains(&params.contact_angle_deg) {
            return Err(LifeError::InvalidGeometry {
                field: "contact_angle_deg",
                value: params.contact_angle_deg,
            });
        }
        if !params.fatigue_limit_load_n.is_finite() || params.fatigue_limit_load_n < 0.0 {
            return Err(LifeError::InvalidGeometry {
                field: "fatigue_limit_load_n",
                value: params.fatigue_limit_load_n,
            });
        }
        if let Some(h) = params.unit_height_mm {
            check_positive("unit_height_mm", h)?;
        }
        if let Some(ca) = params.manufacturer_rating_n {
            check_positive("manufacturer_rating_n", ca)?;
        }

        Ok(Self {
            kind,
            rows: params.rows,
            elements_per_row: params.elements_per_row,
            element_diameter_mm: params.element_diameter_mm,
            contact_angle_deg: params.contact_angle_deg,
            outside_diameter_mm: params.outside_diameter_mm,
            bore_diameter_mm: params.bore_diameter_mm,
            fatigue_limit_load_n: params.fatigue_limit_load_n,
            unit_height_mm: params.unit_height_mm,
            manufacturer_rating_n: params.manufacturer_rating_n,
        })
    }

    pub const fn kind(&self) -> BearingKind {
        self.kind
    }

    pub const fn life_exponent(&self) -> f64 {
        self.kind.life_exponent()
    }

    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Rolling elements per row (z)
    pub const fn element_count(&self) -> u32 {
        self.elements_per_row
    }

    pub const fn fatigue_limit_load(&self) -> f64 {
        self.fatigue_limit_load_n
    }

    pub const fn manufacturer_rating(&self) -> Option<f64> {
        self.manufacturer_rating_n
    }

    /// Pitch diameter (mm): mean of outside and bore diameters
    pub fn pitch_diameter_mm(&self) -> f64 {
        (self.outside_diameter_mm + self.bore_diameter_mm) / 2.0
    }

    /// Dynamic axial load rating for continuous rotation (N).
    ///
    /// A catalogue value passed here wins over the manufacturer rating stored
    /// with the bearing; either is returned unchanged once checked to be
    /// positive and finite. Without both, the rating is computed from
    /// geometry, which needs the ISO 281 `fc` coefficient (and the unit
    /// height for roller bearings).
    pub fn dynamic_axial_load_rating(
        &self,
        fc: Option<f64>,
        catalogue_value: Option<f64>,
    ) -> Result<f64, LifeError> {
        self.resolve_rating(fc, catalogue_value).map(|(ca, _)| ca)
    }

    /// Same as [`Self::dynamic_axial_load_rating`], also reporting the source
    pub fn resolve_rating(
        &self,
        fc: Option<f64>,
        catalogue_value: Option<f64>,
    ) -> Result<(f64, RatingSource), LifeError> {
        if let Some(ca) = catalogue_value {
            check_positive("catalogue_rating_n", ca)?;
            return Ok((ca, RatingSource::Catalogue));
        }
        if let Some(ca) = self.manufacturer_rating_n {
            return Ok((ca, RatingSource::Manufacturer));
        }

        let fc = fc.ok_or(LifeError::MissingCatalogueCoefficient(self.kind))?;
        let ca = match self.kind {
            BearingKind::Ball => bearing_models::ball_axial_rating(
                fc,
                self.rows,
                self.elements_per_row,
                self.element_diameter_mm,
                self.contact_angle_deg,
            ),
            BearingKind::Roller => {
                let height = self.unit_height_mm.ok_or(LifeError::MissingUnitHeight)?;
                bearing_models::roller_axial_rating(
                    fc,
                    height,
                    self.elements_per_row,
                    self.element_diameter_mm,
                    self.contact_angle_deg,
                )
            }
        };
        tracing::debug!(kind = %self.kind, fc, ca, "Computed rotational axial load rating");
        Ok((ca, RatingSource::Computed))
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<(), LifeError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(LifeError::InvalidGeometry { field, value })
    }
}
