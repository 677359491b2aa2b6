//! Pure conversions: TOML config structs -> schedule API config types.

use anyhow::{Result, bail};

use wird_cycle::UnitKind;
use wird_plan::{PlanConfig, PlanMode};

use crate::cli::PlanOverrides;
use crate::config::PlanToml;

/// Applies CLI flag overrides on top of the TOML schedule settings.
///
/// An explicit unit override drops any custom per-cycle count, so the
/// named unit's canonical count takes effect.
pub fn apply_overrides(plan: &mut PlanToml, overrides: &PlanOverrides) {
    if let Some(periods) = overrides.periods {
        plan.periods = periods;
    }
    if let Some(khatam) = overrides.khatam {
        plan.khatam = khatam;
    }
    if let Some(ref unit) = overrides.unit {
        plan.unit = unit.clone();
        plan.per_cycle = None;
    }
}

/// Parses a day subdivision mode name into the corresponding enum variant.
pub fn parse_mode(s: &str) -> Result<PlanMode> {
    match s.to_lowercase().as_str() {
        "per-day" => Ok(PlanMode::PerDay),
        "per-slot" => Ok(PlanMode::PerSlot),
        other => bail!("unknown mode: {other:?} (expected per-day or per-slot)"),
    }
}

/// Resolves the per-cycle unit count for the configured scheme.
///
/// An explicit `per_cycle` wins over the named unit's canonical count,
/// so custom schemes (a particular print's page count, a fixed daily
/// portion) stay expressible.
pub fn resolve_per_cycle(plan: &PlanToml) -> Result<u32> {
    if let Some(per_cycle) = plan.per_cycle {
        if per_cycle == 0 {
            bail!("per_cycle must be positive");
        }
        return Ok(per_cycle);
    }
    match UnitKind::from_label(&plan.unit) {
        Some(kind) => Ok(kind.per_cycle()),
        None => bail!(
            "unknown unit: {:?} (expected pages, verses, juz, or hizb, or set per_cycle)",
            plan.unit
        ),
    }
}

/// Builds a [`PlanConfig`] from the TOML schedule configuration.
///
/// The schedule total is the per-cycle count multiplied by the number
/// of khatam repetitions.
pub fn build_plan_config(plan: &PlanToml) -> Result<PlanConfig> {
    if plan.khatam == 0 {
        bail!("khatam must be positive");
    }
    let mode = parse_mode(&plan.mode)?;
    let per_cycle = resolve_per_cycle(plan)?;
    let total = per_cycle
        .checked_mul(u32::from(plan.khatam))
        .ok_or_else(|| anyhow::anyhow!("total overflows: {per_cycle} x {}", plan.khatam))?;
    Ok(PlanConfig::new(total, plan.periods)
        .with_mode(mode)
        .with_slots_per_day(plan.slots_per_day)
        .with_distribute_remainder(plan.distribute_remainder)
        .with_unit_label(plan.unit.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_overrides() -> PlanOverrides {
        PlanOverrides {
            periods: None,
            khatam: None,
            unit: None,
        }
    }

    #[test]
    fn parse_mode_known_names() {
        assert_eq!(parse_mode("per-day").unwrap(), PlanMode::PerDay);
        assert_eq!(parse_mode("per-slot").unwrap(), PlanMode::PerSlot);
        assert_eq!(parse_mode("Per-Slot").unwrap(), PlanMode::PerSlot);
    }

    #[test]
    fn parse_mode_unknown_name() {
        let err = parse_mode("hourly").unwrap_err();
        assert!(err.to_string().contains("unknown mode"));
    }

    #[test]
    fn per_cycle_defaults_to_named_unit() {
        let plan = PlanToml::default();
        assert_eq!(plan.unit, "pages");
        assert_eq!(resolve_per_cycle(&plan).unwrap(), 604);
    }

    #[test]
    fn explicit_per_cycle_wins_over_unit() {
        let plan = PlanToml {
            per_cycle: Some(611),
            ..PlanToml::default()
        };
        assert_eq!(resolve_per_cycle(&plan).unwrap(), 611);
    }

    #[test]
    fn zero_per_cycle_rejected() {
        let plan = PlanToml {
            per_cycle: Some(0),
            ..PlanToml::default()
        };
        assert!(resolve_per_cycle(&plan).is_err());
    }

    #[test]
    fn unknown_unit_without_per_cycle_rejected() {
        let plan = PlanToml {
            unit: "chapters".to_string(),
            ..PlanToml::default()
        };
        let err = resolve_per_cycle(&plan).unwrap_err();
        assert!(err.to_string().contains("unknown unit"));
    }

    #[test]
    fn khatam_multiplies_total() {
        let plan = PlanToml {
            khatam: 2,
            ..PlanToml::default()
        };
        let config = build_plan_config(&plan).unwrap();
        assert_eq!(config.total(), 1208);
        assert_eq!(config.periods(), 30);
        assert_eq!(config.unit_label(), "pages");
    }

    #[test]
    fn zero_khatam_rejected() {
        let plan = PlanToml {
            khatam: 0,
            ..PlanToml::default()
        };
        assert!(build_plan_config(&plan).is_err());
    }

    #[test]
    fn overflowing_total_rejected() {
        let plan = PlanToml {
            per_cycle: Some(u32::MAX / 2),
            khatam: 3,
            ..PlanToml::default()
        };
        let err = build_plan_config(&plan).unwrap_err();
        assert!(err.to_string().contains("overflows"));
    }

    #[test]
    fn config_carries_mode_and_slots() {
        let plan = PlanToml {
            mode: "per-slot".to_string(),
            slots_per_day: 3,
            distribute_remainder: false,
            ..PlanToml::default()
        };
        let config = build_plan_config(&plan).unwrap();
        assert_eq!(config.mode(), PlanMode::PerSlot);
        assert_eq!(config.slots_per_day(), 3);
        assert!(!config.distribute_remainder());
    }

    #[test]
    fn overrides_replace_fields() {
        let mut plan = PlanToml::default();
        let overrides = PlanOverrides {
            periods: Some(60),
            khatam: Some(2),
            unit: None,
        };
        apply_overrides(&mut plan, &overrides);
        assert_eq!(plan.periods, 60);
        assert_eq!(plan.khatam, 2);
        assert_eq!(plan.unit, "pages");
    }

    #[test]
    fn no_overrides_leave_config_untouched() {
        let mut plan = PlanToml {
            per_cycle: Some(611),
            ..PlanToml::default()
        };
        apply_overrides(&mut plan, &no_overrides());
        assert_eq!(plan.periods, 30);
        assert_eq!(plan.per_cycle, Some(611));
    }

    #[test]
    fn unit_override_drops_custom_per_cycle() {
        let mut plan = PlanToml {
            per_cycle: Some(611),
            ..PlanToml::default()
        };
        let overrides = PlanOverrides {
            periods: None,
            khatam: None,
            unit: Some("verses".to_string()),
        };
        apply_overrides(&mut plan, &overrides);
        assert_eq!(plan.unit, "verses");
        assert_eq!(plan.per_cycle, None);
        assert_eq!(resolve_per_cycle(&plan).unwrap(), 6236);
    }
}
