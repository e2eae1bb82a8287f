//! Deterministic health-metric calculators. Pure functions; no store
//! access.

use crate::error::ServiceError;

/// Body mass index from weight in kilograms and height in centimetres,
/// formatted as `"BMI is X.XX - <Category>"`.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Result<String, ServiceError> {
    if height_cm == 0.0 {
        return Err(ServiceError::InvalidPayload("Height cannot be zero.".into()));
    }

    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    if !bmi.is_finite() {
        return Err(ServiceError::InvalidPayload(
            "BMI is not a finite number".into(),
        ));
    }

    let category = if bmi < 18.5 {
        "Underweight"
    } else if bmi < 24.9 {
        "Normal Weight"
    } else if bmi < 29.9 {
        "Overweight"
    } else {
        "Obese"
    };
    Ok(format!("BMI is {bmi:.2} - {category}"))
}

/// Total dosage from body weight and dose-per-kilogram. Inputs are whole
/// numbers; no rounding policy applies.
pub fn calculate_dosage(weight_kg: u64, dose_per_kg: u64) -> u64 {
    weight_kg * dose_per_kg
}

/// Estimated out-of-pocket cost: insured callers get a 20% discount on
/// the base cost, rounded to the nearest whole amount.
pub fn estimate_insurance_cost(base_cost: f64, has_insurance: bool) -> i64 {
    let discount = if has_insurance { base_cost * 0.20 } else { 0.0 };
    (base_cost - discount).round() as i64
}

/// Weighted health risk score, formatted as
/// `"Health Risk Score: X.XX - <Level>"`.
pub fn calculate_risk_score(age: f64, bmi: f64, blood_pressure: f64) -> String {
    let score = age * 0.3 + bmi * 0.5 + blood_pressure * 0.2;
    let level = if score < 20.0 {
        "Low"
    } else if score < 30.0 {
        "Moderate"
    } else {
        "High"
    };
    format!("Health Risk Score: {score:.2} - {level}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bmi_normal_weight() {
        let result = calculate_bmi(70.0, 175.0).unwrap();
        assert_eq!(result, "BMI is 22.86 - Normal Weight");
    }

    #[test]
    fn bmi_obese() {
        let result = calculate_bmi(120.0, 160.0).unwrap();
        assert_eq!(result, "BMI is 46.88 - Obese");
    }

    #[test]
    fn bmi_underweight_and_overweight_boundaries() {
        assert!(calculate_bmi(50.0, 175.0).unwrap().ends_with("Underweight"));
        assert!(calculate_bmi(80.0, 175.0).unwrap().ends_with("Overweight"));
    }

    #[test]
    fn bmi_zero_height_is_an_error() {
        let err = calculate_bmi(70.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::InvalidPayload(msg) if msg == "Height cannot be zero."
        ));
    }

    #[test]
    fn bmi_non_finite_result_is_an_error() {
        let err = calculate_bmi(f64::INFINITY, 175.0).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidPayload(_)));
    }

    #[test]
    fn dosage_is_integer_product() {
        assert_eq!(calculate_dosage(70, 5), 350);
        assert_eq!(calculate_dosage(0, 5), 0);
    }

    #[test]
    fn insurance_discount_only_when_insured() {
        assert_eq!(estimate_insurance_cost(1000.0, true), 800);
        assert_eq!(estimate_insurance_cost(1000.0, false), 1000);
    }

    #[test]
    fn insurance_estimate_rounds_to_whole_amount() {
        // 123.45 - 20% = 98.76 -> 99
        assert_eq!(estimate_insurance_cost(123.45, true), 99);
    }

    #[test]
    fn risk_score_levels() {
        // 30*0.3 + 20*0.5 + 0*0.2 = 19.0
        assert_eq!(
            calculate_risk_score(30.0, 20.0, 0.0),
            "Health Risk Score: 19.00 - Low"
        );
        // 40*0.3 + 22*0.5 + 30*0.2 = 29.0
        assert_eq!(
            calculate_risk_score(40.0, 22.0, 30.0),
            "Health Risk Score: 29.00 - Moderate"
        );
        // 60*0.3 + 30*0.5 + 90*0.2 = 51.0
        assert_eq!(
            calculate_risk_score(60.0, 30.0, 90.0),
            "Health Risk Score: 51.00 - High"
        );
    }
}
