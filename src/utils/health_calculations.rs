/// Pounds per kilogram.
pub const LBS_PER_KG: f64 = 2.20462;

/// Round to `places` decimal places, half away from zero.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Round to the two decimals every dashboard value is shown with.
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

pub fn kg_to_lbs(kg: f64) -> f64 {
    kg * LBS_PER_KG
}

pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs / LBS_PER_KG
}

/// Weight as displayed on dashboards: pounds with two decimals.
pub fn display_weight_lbs(kg: f64) -> f64 {
    round2(kg_to_lbs(kg))
}

/// Mean arterial pressure, (systolic + 2 * diastolic) / 3.
/// Undefined unless both readings are present.
pub fn mean_arterial_pressure(systolic: Option<i32>, diastolic: Option<i32>) -> Option<f64> {
    match (systolic, diastolic) {
        (Some(sys), Some(dia)) => Some((sys as f64 + 2.0 * dia as f64) / 3.0),
        _ => None,
    }
}

/// Arithmetic mean of the present values; `None` when nothing is present.
pub fn mean_of_present<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (sum, count) = values
        .into_iter()
        .flatten()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Sum of the present values; `None` when nothing is present.
pub fn sum_of_present<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    values
        .into_iter()
        .flatten()
        .fold(None, |acc, v| Some(acc.unwrap_or(0.0) + v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_conversion_round_trips() {
        for kg in [0.5, 45.0, 70.3, 123.456, 250.0] {
            let back = lbs_to_kg(kg_to_lbs(kg));
            assert!((back - kg).abs() < 1e-9, "{} -> {}", kg, back);
        }
    }

    #[test]
    fn display_weight_is_rounded_to_two_places() {
        assert_eq!(display_weight_lbs(70.0), 154.32);
        assert_eq!(display_weight_lbs(80.0), 176.37);
    }

    #[test]
    fn map_needs_both_readings() {
        assert_eq!(mean_arterial_pressure(Some(120), Some(90)), Some(100.0));
        assert_eq!(mean_arterial_pressure(Some(120), None), None);
        assert_eq!(mean_arterial_pressure(None, Some(80)), None);
    }

    #[test]
    fn means_and_sums_skip_missing_values() {
        assert_eq!(mean_of_present(vec![Some(70.0), None]), Some(70.0));
        assert_eq!(mean_of_present(vec![None, None]), None);
        assert_eq!(sum_of_present(vec![Some(1.5), None, Some(2.5)]), Some(4.0));
        assert_eq!(sum_of_present(Vec::<Option<f64>>::new()), None);
    }
}
