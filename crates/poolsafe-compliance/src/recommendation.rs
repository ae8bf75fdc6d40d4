//! # Adjustment Recommendations
//!
//! Direction-aware treatment guidance for readings outside their ideal
//! range. Text targets the ideal range of the active standard, so a table
//! override changes the numbers in the advice as well.

use poolsafe_core::{ChemicalParameter, ChemicalStandard};

use crate::verdict::{ReadingBand, ValidationVerdict};

/// Treatment hint for raising a parameter.
fn raise_hint(parameter: ChemicalParameter) -> &'static str {
    match parameter {
        ChemicalParameter::FreeChlorine => "by adding liquid or granular chlorine",
        ChemicalParameter::TotalChlorine => "by adding liquid or granular chlorine",
        ChemicalParameter::Ph => "by adding sodium carbonate (soda ash)",
        ChemicalParameter::TotalAlkalinity => "by adding sodium bicarbonate",
        ChemicalParameter::CyanuricAcid => "by adding cyanuric acid stabilizer",
        ChemicalParameter::CalciumHardness => "by adding calcium chloride",
        ChemicalParameter::WaterTemperature => "by raising the heater set point",
    }
}

/// Treatment hint for lowering a parameter.
fn lower_hint(parameter: ChemicalParameter) -> &'static str {
    match parameter {
        ChemicalParameter::FreeChlorine => "by pausing chlorination until levels dissipate",
        ChemicalParameter::TotalChlorine => "by superchlorinating to break down chloramines",
        ChemicalParameter::Ph => "by adding muriatic acid or sodium bisulfate",
        ChemicalParameter::TotalAlkalinity => "by adding muriatic acid and aerating",
        ChemicalParameter::CyanuricAcid => "by partially draining and refilling with fresh water",
        ChemicalParameter::CalciumHardness => {
            "by partially draining and refilling with fresh water"
        }
        ChemicalParameter::WaterTemperature => "by lowering the heater set point",
    }
}

/// Suggestion for a verdict, or `None` when the reading is ideal.
pub fn recommend(
    parameter: ChemicalParameter,
    standard: &ChemicalStandard,
    verdict: &ValidationVerdict,
) -> Option<String> {
    let name = parameter.lowercase_name();
    let target = standard.ideal_range_label();

    let adjustment = match verdict.band {
        ReadingBand::Ideal => return None,
        ReadingBand::NotANumber => {
            format!("Re-test {name}; the recorded value is not a valid measurement")
        }
        band if band.is_low() => {
            format!("Increase {name} toward {target} {}", raise_hint(parameter))
        }
        _ => format!("Decrease {name} toward {target} {}", lower_hint(parameter)),
    };

    if verdict.requires_closure {
        Some(format!(
            "Close the pool until {name} is within {}. {adjustment}",
            standard.acceptable_range_label()
        ))
    } else {
        Some(adjustment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poolsafe_core::StandardsTable;

    fn standard(p: ChemicalParameter) -> ChemicalStandard {
        StandardsTable::mahc().get(p).cloned().unwrap()
    }

    #[test]
    fn ideal_has_no_recommendation() {
        let v = ValidationVerdict::new(ReadingBand::Ideal, false, "ok");
        assert_eq!(
            recommend(ChemicalParameter::Ph, &standard(ChemicalParameter::Ph), &v),
            None
        );
    }

    #[test]
    fn low_chlorine_warning() {
        let p = ChemicalParameter::FreeChlorine;
        let v = ValidationVerdict::new(ReadingBand::BelowIdeal, false, "low");
        assert_eq!(
            recommend(p, &standard(p), &v).unwrap(),
            "Increase free chlorine toward 1.5-2.5 ppm by adding liquid or granular chlorine"
        );
    }

    #[test]
    fn high_calcium_critical() {
        let p = ChemicalParameter::CalciumHardness;
        let v = ValidationVerdict::new(ReadingBand::AboveMaximum, false, "high");
        let text = recommend(p, &standard(p), &v).unwrap();
        assert!(text.starts_with("Decrease calcium hardness toward 200-350 ppm"));
        assert!(!text.contains("Close the pool"));
    }

    #[test]
    fn closure_prefix() {
        let p = ChemicalParameter::Ph;
        let v = ValidationVerdict::new(ReadingBand::AboveMaximum, true, "high");
        assert_eq!(
            recommend(p, &standard(p), &v).unwrap(),
            "Close the pool until pH is within 7.2-7.6. \
             Decrease pH toward 7.3-7.5 by adding muriatic acid or sodium bisulfate"
        );
    }

    #[test]
    fn not_a_number_asks_for_retest() {
        let p = ChemicalParameter::TotalAlkalinity;
        let v = ValidationVerdict::new(ReadingBand::NotANumber, false, "nan");
        assert!(recommend(p, &standard(p), &v)
            .unwrap()
            .starts_with("Re-test total alkalinity"));
    }
}
