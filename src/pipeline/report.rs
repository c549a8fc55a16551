//! Human-readable rendering of a life report

use std::fmt;

use crate::types::LifeReport;

fn optional(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.6}"))
}

impl fmt::Display for LifeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Oscillating Bearing Life ({}) ===", self.generated_at.format("%Y-%m-%d %H:%M:%S UTC"))?;
        writeln!(f, "  Bearing:    {} (dp = {:.1} mm)", self.kind, self.pitch_diameter_mm)?;
        writeln!(f, "  Ca:         {:.1} N ({})", self.rotational_rating, self.rating_source)?;
        writeln!(f)?;

        writeln!(
            f,
            "  {:<16} {:>8} {:>14} {:>14} {:>14} {:>14} {:>10} {:>10}",
            "Scenario", "Duty", "Fr_rms [N]", "Fa_rms [N]", "My_rms [Nm]", "P [N]", "θ [deg]", "N [1/min]"
        )?;
        for (case, duty) in self.load_cases.iter().zip(&self.duty_cycles) {
            writeln!(
                f,
                "  {:<16} {:>8.4} {:>14.1} {:>14.1} {:>14.1} {:>14.1} {:>10.4} {:>10.4}",
                case.scenario,
                duty,
                case.radial_rms,
                case.axial_rms,
                case.moment_rms,
                case.equivalent_load,
                case.amplitude_deg,
                case.speed_opm
            )?;
        }
        writeln!(f)?;

        let c = &self.combined;
        writeln!(f, "  P_osc:      {:.3} N", c.equivalent_load)?;
        writeln!(f, "  θ_equiv:    {:.4} deg", c.equivalent_angle_deg)?;
        writeln!(f, "  N_ave:      {:.4} osc/min", c.average_speed_opm)?;
        writeln!(f, "  Ca_osc:     {:.3} N", c.oscillatory_rating)?;
        writeln!(f)?;

        let i = &self.inputs;
        writeln!(
            f,
            "  ISO 281:    {} (contamination: {}, k = {}, reliability: {}%)",
            i.iso_correction,
            i.contamination,
            i.lubrication_k,
            i.reliability.percent()
        )?;
        let e = &self.estimate;
        writeln!(f, "  eta:        {}", optional(e.eta))?;
        writeln!(f, "  a_iso:      {}", optional(e.a_iso))?;
        writeln!(f, "  a1:         {}", optional(e.a1))?;
        writeln!(f, "  L10:        {:.3} million oscillations", e.l10_million_oscillations)?;
        write!(f, "  L10h:       {:.1} hours ({:.1} years)", e.l10_hours, e.l10_hours / 8766.0)
    }
}
