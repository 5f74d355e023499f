use super::ConsoleError;
use crate::models::{TrustSetting, TrustTier};

pub fn set_setting(
    settings: &mut [TrustSetting],
    key: &str,
    value: &str,
) -> Result<(), ConsoleError> {
    let setting = settings
        .iter_mut()
        .find(|setting| setting.key == key)
        .ok_or_else(|| ConsoleError::UnknownSetting(key.to_string()))?;
    setting.value = value.to_string();
    Ok(())
}

/// Updates one numeric or text field of the tier at `index`.
pub fn set_tier_field(
    tiers: &mut [TrustTier],
    index: usize,
    field: &str,
    value: &str,
) -> Result<(), ConsoleError> {
    let tier = tiers
        .get_mut(index)
        .ok_or(ConsoleError::UnknownTier(index))?;
    let invalid = || ConsoleError::Invalid(format!("invalid value for {field}: {value}"));
    match field {
        "name" => tier.name = value.to_string(),
        "min_score" => tier.min_score = value.trim().parse().map_err(|_| invalid())?,
        "max_score" => tier.max_score = value.trim().parse().map_err(|_| invalid())?,
        "withdrawal_percent" => {
            tier.withdrawal_percent = value.trim().parse().map_err(|_| invalid())?
        }
        "days_prior" => tier.days_prior = value.trim().parse().map_err(|_| invalid())?,
        other => return Err(ConsoleError::Invalid(format!("unknown tier field: {other}"))),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiers() -> Vec<TrustTier> {
        vec![TrustTier {
            id: Some("1".into()),
            name: "Bronze".to_string(),
            min_score: 0,
            max_score: 49,
            withdrawal_percent: 30.0,
            days_prior: 7,
        }]
    }

    #[test]
    fn edits_known_setting_only() {
        let mut settings = vec![TrustSetting {
            id: None,
            key: "points_per_event".to_string(),
            value: "10".to_string(),
            description: None,
        }];
        set_setting(&mut settings, "points_per_event", "15").expect("known key");
        assert_eq!(settings[0].value, "15");
        assert!(matches!(
            set_setting(&mut settings, "bogus", "1"),
            Err(ConsoleError::UnknownSetting(_))
        ));
    }

    #[test]
    fn tier_fields_are_parsed() {
        let mut tiers = tiers();
        set_tier_field(&mut tiers, 0, "withdrawal_percent", "45.5").expect("percent");
        set_tier_field(&mut tiers, 0, "days_prior", " 3 ").expect("days");
        assert_eq!(tiers[0].withdrawal_percent, 45.5);
        assert_eq!(tiers[0].days_prior, 3);

        assert!(set_tier_field(&mut tiers, 0, "min_score", "lots").is_err());
        assert!(matches!(
            set_tier_field(&mut tiers, 2, "name", "Gold"),
            Err(ConsoleError::UnknownTier(2))
        ));
    }
}
