use crate::error::ParseVariantError;
use crate::oscillator::RecurrenceForm;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The interchangeable circle generators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmVariant {
    Df2Real,
    /// DF2 in Q16.16.
    Df2Fixed,
    CoupledReal,
    /// Coupled form in Q16.16.
    CoupledFixed,
    /// Midpoint circle baseline.
    Bresenham,
}

impl AlgorithmVariant {
    pub const ALL: [AlgorithmVariant; 5] = [
        AlgorithmVariant::Df2Real,
        AlgorithmVariant::Df2Fixed,
        AlgorithmVariant::CoupledReal,
        AlgorithmVariant::CoupledFixed,
        AlgorithmVariant::Bresenham,
    ];

    /// Stable identifier, also the serde representation.
    pub fn id(&self) -> &'static str {
        match self {
            AlgorithmVariant::Df2Real => "df2-real",
            AlgorithmVariant::Df2Fixed => "df2-fixed",
            AlgorithmVariant::CoupledReal => "coupled-real",
            AlgorithmVariant::CoupledFixed => "coupled-fixed",
            AlgorithmVariant::Bresenham => "bresenham",
        }
    }

    /// Human-readable name for reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            AlgorithmVariant::Df2Real => "DF2 Float",
            AlgorithmVariant::Df2Fixed => "DF2 Fixed (Q16.16)",
            AlgorithmVariant::CoupledReal => "Coupled Float",
            AlgorithmVariant::CoupledFixed => "Coupled Fixed (Q16.16)",
            AlgorithmVariant::Bresenham => "Bresenham",
        }
    }

    /// Recurrence the variant runs, or `None` for the baseline.
    pub fn recurrence_form(&self) -> Option<RecurrenceForm> {
        match self {
            AlgorithmVariant::Df2Real | AlgorithmVariant::Df2Fixed => Some(RecurrenceForm::Df2),
            AlgorithmVariant::CoupledReal | AlgorithmVariant::CoupledFixed => {
                Some(RecurrenceForm::Coupled)
            }
            AlgorithmVariant::Bresenham => None,
        }
    }

    pub fn is_fixed_point(&self) -> bool {
        matches!(
            self,
            AlgorithmVariant::Df2Fixed | AlgorithmVariant::CoupledFixed
        )
    }

    /// Multiplies per generated sample, counting the DF2 quadrature rebuild.
    pub fn multiplies_per_step(&self) -> u32 {
        match self.recurrence_form() {
            Some(RecurrenceForm::Df2) => 2,
            Some(RecurrenceForm::Coupled) => 4,
            None => 0,
        }
    }
}

impl fmt::Display for AlgorithmVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for AlgorithmVariant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AlgorithmVariant::ALL
            .into_iter()
            .find(|v| v.id() == s)
            .ok_or_else(|| ParseVariantError::UnknownVariant(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_roundtrip_through_from_str() {
        for variant in AlgorithmVariant::ALL {
            assert_eq!(variant.id().parse::<AlgorithmVariant>(), Ok(variant));
        }
    }

    #[test]
    fn unknown_id_is_an_error() {
        let err = "midpoint".parse::<AlgorithmVariant>().unwrap_err();
        assert_eq!(err, ParseVariantError::UnknownVariant("midpoint".into()));
        assert_eq!(err.to_string(), "Unknown algorithm variant: midpoint");
    }

    #[test]
    fn serde_uses_the_id() {
        for variant in AlgorithmVariant::ALL {
            let json = serde_json::to_string(&variant).unwrap();
            assert_eq!(json, format!("\"{}\"", variant.id()));
        }
    }

    #[test]
    fn multiply_counts() {
        assert_eq!(AlgorithmVariant::Df2Fixed.multiplies_per_step(), 2);
        assert_eq!(AlgorithmVariant::CoupledReal.multiplies_per_step(), 4);
        assert_eq!(AlgorithmVariant::Bresenham.multiplies_per_step(), 0);
    }

    #[test]
    fn fixed_point_variants() {
        let fixed: Vec<_> = AlgorithmVariant::ALL
            .into_iter()
            .filter(AlgorithmVariant::is_fixed_point)
            .collect();
        assert_eq!(
            fixed,
            vec![AlgorithmVariant::Df2Fixed, AlgorithmVariant::CoupledFixed]
        );
    }
}
