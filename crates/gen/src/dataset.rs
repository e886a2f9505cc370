//! Synthetic incident dataset generation and expected-answer derivation.

use crate::rng::SeededRng;
use alloc::vec::Vec;
use dataduel_core::{AnswerMode, ExpectedAnswer, Incident, Service, Severity};

/// Number of incidents in every dataset.
pub const DATASET_SIZE: usize = 120;

/// First value of the sequential id suffix (`INC-1000`, `INC-1001`, ...).
const ID_BASE: usize = 1000;

/// Extra minutes added to the duration of critical incidents.
const CRITICAL_DURATION_BONUS: u32 = 20;

/// Extra affected users added to critical incidents.
const CRITICAL_USERS_BONUS: u32 = 1200;

/// Generates the incident table for a seed.
///
/// The same seed yields an identical dataset on every platform. Field
/// distributions: severity and service uniform over their domains,
/// `duration_min` in [5, 90] (+20 when critical), `error_rate` in [0, 0.2)
/// rounded to 3 decimals, `affected_users` in [50, 2500] (+1200 when
/// critical).
pub fn generate_dataset(seed: u32) -> Vec<Incident> {
    let mut rng = SeededRng::new(seed);
    let mut dataset = Vec::with_capacity(DATASET_SIZE);

    for i in 0..DATASET_SIZE {
        let severity = *rng.next_choice(&Severity::ALL);
        let service = *rng.next_choice(&Service::ALL);

        let mut duration_min = rng.next_range(5, 90);
        let error_rate = round3(rng.next_uniform() * 0.2);
        let mut affected_users = rng.next_range(50, 2500);

        if severity == Severity::Critical {
            duration_min += CRITICAL_DURATION_BONUS;
            affected_users += CRITICAL_USERS_BONUS;
        }

        dataset.push(Incident::new(
            alloc::format!("INC-{}", ID_BASE + i),
            service,
            severity,
            duration_min,
            error_rate,
            affected_users,
        ));
    }

    dataset
}

/// Derives the hidden correct answer by applying a challenge rule.
///
/// The rule is supplied by the caller (challenge configuration), never
/// hardwired here, so challenge variants can change it without touching
/// the generator. Depending on `mode`, the answer is the matching id set
/// or the matching count.
pub fn derive_expected<F>(dataset: &[Incident], rule: F, mode: AnswerMode) -> ExpectedAnswer
where
    F: Fn(&Incident) -> bool,
{
    match mode {
        AnswerMode::Ids => {
            ExpectedAnswer::ids(dataset.iter().filter(|i| rule(i)).map(Incident::id))
        }
        AnswerMode::Count => {
            ExpectedAnswer::count(dataset.iter().filter(|i| rule(i)).count() as u64)
        }
    }
}

/// Rounds to 3 decimal places.
fn round3(x: f64) -> f64 {
    libm::round(x * 1000.0) / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_is_deterministic() {
        let a = generate_dataset(20_250_601);
        let b = generate_dataset(20_250_601);
        assert_eq!(a, b);
    }

    #[test]
    fn test_dataset_size_and_ids() {
        let dataset = generate_dataset(7);
        assert_eq!(dataset.len(), DATASET_SIZE);
        assert_eq!(dataset[0].id(), "INC-1000");
        assert_eq!(dataset[119].id(), "INC-1119");
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = generate_dataset(1);
        let b = generate_dataset(2);
        assert_ne!(a, b);
    }

    #[test]
    fn test_field_distributions() {
        for incident in generate_dataset(99) {
            let (duration_lo, duration_hi, users_lo, users_hi) =
                if incident.severity() == Severity::Critical {
                    (25, 110, 1250, 3700)
                } else {
                    (5, 90, 50, 2500)
                };
            assert!((duration_lo..=duration_hi).contains(&incident.duration_min()));
            assert!((users_lo..=users_hi).contains(&incident.affected_users()));
            // rounding can land exactly on 0.2 when the raw draw is close
            assert!((0.0..=0.2).contains(&incident.error_rate()));
            // 3-decimal rounding leaves no residue beyond float noise
            let scaled = incident.error_rate() * 1000.0;
            assert!((scaled - libm::round(scaled)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_derive_expected_ids() {
        let dataset = generate_dataset(5);
        let answer = derive_expected(&dataset, |i| i.severity() == Severity::Critical, AnswerMode::Ids);
        let ids = answer.as_ids().unwrap();
        for incident in &dataset {
            assert_eq!(
                ids.contains(incident.id()),
                incident.severity() == Severity::Critical
            );
        }
    }

    #[test]
    fn test_derive_expected_count_matches_ids() {
        let dataset = generate_dataset(5);
        let rule = |i: &Incident| i.duration_min() >= 30;
        let ids = derive_expected(&dataset, rule, AnswerMode::Ids);
        let count = derive_expected(&dataset, rule, AnswerMode::Count);
        assert_eq!(ids.as_ids().unwrap().len() as u64, count.as_count().unwrap());
    }

    #[test]
    fn test_derive_expected_is_pure() {
        let dataset = generate_dataset(123);
        let a = derive_expected(&dataset, |i| i.error_rate() >= 0.08, AnswerMode::Count);
        let b = derive_expected(&dataset, |i| i.error_rate() >= 0.08, AnswerMode::Count);
        assert_eq!(a, b);
    }
}
