use once_cell::sync::Lazy;
use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

use crate::constants::LAST_PLAYED_KEY_PREFIX;
use crate::error::WheelConfigError;
use crate::gating::{BusinessHours, GatingPolicy};
use crate::presentation::KioskCopy;
use crate::wheel_config::{Segment, WheelConfiguration, WheelSettings};

#[derive(
    Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter, AsRefStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum VariantId {
    #[default]
    Classic,
    Golden,
    Neon,
    Pastel,
    Midnight,
    Festival,
}

impl VariantId {
    pub fn storage_key(&self) -> String {
        format!("{}:{}", LAST_PLAYED_KEY_PREFIX, self.as_ref())
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct WheelTheme {
    pub font: &'static str,
    pub border_color: &'static str,
    pub label_color: &'static str,
    pub pointer_color: &'static str,
    pub background: &'static str,
    pub confetti_colors: Vec<&'static str>,
}

/// One kiosk flavour: wheel, rules, look and wording.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct WheelVariant {
    pub id: VariantId,
    pub configuration: WheelConfiguration,
    pub gating: GatingPolicy,
    pub theme: WheelTheme,
    pub copy: KioskCopy,
}

static PRESETS: Lazy<Result<Vec<WheelVariant>, WheelConfigError>> = Lazy::new(|| {
    let presets = VariantId::iter().map(build).collect::<Result<Vec<_>, _>>();
    match &presets {
        Ok(list) => log::info!("Loaded {} wheel variants", list.len()),
        Err(e) => log::error!("Wheel presets rejected: {}", e),
    }
    presets
});

/// Looks up a preset, validating every preset on first use.
pub fn preset(id: VariantId) -> Result<&'static WheelVariant, WheelConfigError> {
    match &*PRESETS {
        Ok(list) => Ok(list
            .iter()
            .find(|v| v.id == id)
            .unwrap_or(&list[0])),
        Err(e) => Err(e.clone()),
    }
}

/// Parses a route or query value, falling back to the default variant.
pub fn resolve_variant(name: &str) -> VariantId {
    name.parse().unwrap_or_else(|_| {
        log::warn!("Unknown wheel variant '{}', using {}", name, VariantId::default());
        VariantId::default()
    })
}

fn two_tone(count: usize, win: (&str, &str), loss: (&str, &str)) -> Vec<Segment> {
    (0..count)
        .map(|i| {
            if i % 2 == 0 {
                Segment::win(win.0, win.1)
            } else {
                Segment::loss(loss.0, loss.1)
            }
        })
        .collect()
}

fn build(id: VariantId) -> Result<WheelVariant, WheelConfigError> {
    let variant = match id {
        VariantId::Classic => WheelVariant {
            id,
            configuration: WheelConfiguration::new(
                vec![
                    Segment::win("GAGNÉ !", "#00ff88"),
                    Segment::loss("PERDU", "#ff0066"),
                    Segment::win("GAGNÉ !", "#ffd700"),
                    Segment::loss("PERDU", "#ff0066"),
                ],
                0.05,
                WheelSettings::default(),
            )?,
            gating: GatingPolicy {
                business_hours: Some(BusinessHours::new(7, 20)?),
                daily_limit: false,
            },
            theme: WheelTheme {
                font: "bold 32px 'Fredoka One', Arial",
                border_color: "#ffffff",
                label_color: "#ffffff",
                pointer_color: "#ffd700",
                background: "#1a1a2e",
                confetti_colors: vec!["#ffd700", "#00ff88", "#ffff00"],
            },
            copy: KioskCopy {
                win_title: "🎉 FÉLICITATIONS !",
                win_message: "Vous avez gagné un GRILLE-PAIN ! Montrez cet écran au comptoir.",
                loss_title: "Pas cette fois !",
                loss_message: "Réessayez votre chance ! Vous aurez peut-être plus de succès.",
            },
        },
        VariantId::Golden => WheelVariant {
            id,
            configuration: WheelConfiguration::new(
                two_tone(6, ("GAGNÉ !", "#d4af37"), ("PERDU", "#3b2f0b")),
                0.10,
                WheelSettings::default(),
            )?,
            gating: GatingPolicy {
                business_hours: None,
                daily_limit: true,
            },
            theme: WheelTheme {
                font: "bold 26px 'Bungee', Arial",
                border_color: "#fff4c2",
                label_color: "#fffbe6",
                pointer_color: "#ffffff",
                background: "#0d0d0d",
                confetti_colors: vec!["#d4af37", "#fff4c2", "#ffffff"],
            },
            copy: KioskCopy {
                win_title: "🏆 JACKPOT !",
                win_message: "Vous avez gagné un BON D'ACHAT de 10 € ! Montrez cet écran en caisse.",
                loss_title: "Pas de chance !",
                loss_message: "Revenez demain pour un nouvel essai.",
            },
        },
        VariantId::Neon => WheelVariant {
            id,
            configuration: WheelConfiguration::new(
                vec![
                    Segment::win("GAGNÉ !", "#39ff14"),
                    Segment::loss("PERDU", "#ff073a"),
                    Segment::loss("PERDU", "#bc13fe"),
                    Segment::loss("PERDU", "#ff073a"),
                    Segment::win("GAGNÉ !", "#00f0ff"),
                    Segment::loss("PERDU", "#bc13fe"),
                    Segment::loss("PERDU", "#ff073a"),
                    Segment::loss("PERDU", "#bc13fe"),
                ],
                0.05,
                WheelSettings::default(),
            )?,
            gating: GatingPolicy {
                business_hours: Some(BusinessHours::new(9, 19)?),
                daily_limit: true,
            },
            theme: WheelTheme {
                font: "bold 20px 'Orbitron', sans-serif",
                border_color: "#0ff",
                label_color: "#ffffff",
                pointer_color: "#39ff14",
                background: "#050014",
                confetti_colors: vec!["#39ff14", "#00f0ff", "#bc13fe"],
            },
            copy: KioskCopy {
                win_title: "⚡ VICTOIRE !",
                win_message: "Vous avez gagné un CASQUE AUDIO ! Montrez cet écran au comptoir.",
                loss_title: "Raté !",
                loss_message: "Une nouvelle chance vous attend demain.",
            },
        },
        VariantId::Pastel => WheelVariant {
            id,
            configuration: WheelConfiguration::new(
                vec![
                    Segment::win("GAGNÉ !", "#a8e6cf"),
                    Segment::loss("PERDU", "#ffaaa5"),
                    Segment::win("GAGNÉ !", "#dcedc1"),
                    Segment::loss("PERDU", "#ffd3b6"),
                ],
                0.20,
                WheelSettings {
                    normalize_between_spins: false,
                    ..Default::default()
                },
            )?,
            gating: GatingPolicy::open(),
            theme: WheelTheme {
                font: "bold 30px 'Baloo 2', Arial",
                border_color: "#ffffff",
                label_color: "#5a5a5a",
                pointer_color: "#ff8b94",
                background: "#fdf6f0",
                confetti_colors: vec!["#a8e6cf", "#ffd3b6", "#ff8b94"],
            },
            copy: KioskCopy {
                win_title: "🎉 BRAVO !",
                win_message: "Votre CAFÉ est offert ! Montrez cet écran au comptoir.",
                loss_title: "Oups !",
                loss_message: "Retentez votre chance, la roue tourne !",
            },
        },
        VariantId::Midnight => WheelVariant {
            id,
            configuration: WheelConfiguration::new(
                two_tone(6, ("GAGNÉ !", "#4b6cb7"), ("PERDU", "#182848")),
                0.05,
                WheelSettings {
                    min_spins: 5,
                    max_spins: 8,
                    ..Default::default()
                },
            )?,
            gating: GatingPolicy {
                business_hours: Some(BusinessHours::new(10, 22)?),
                daily_limit: false,
            },
            theme: WheelTheme {
                font: "bold 24px 'Montserrat', sans-serif",
                border_color: "#c0c0ff",
                label_color: "#f0f0ff",
                pointer_color: "#f5d76e",
                background: "#0b1026",
                confetti_colors: vec!["#f5d76e", "#c0c0ff", "#ffffff"],
            },
            copy: KioskCopy {
                win_title: "🌙 FÉLICITATIONS !",
                win_message: "Votre DESSERT est offert ! Montrez cet écran au serveur.",
                loss_title: "Pas cette fois !",
                loss_message: "La chance sourit aux audacieux, réessayez !",
            },
        },
        VariantId::Festival => WheelVariant {
            id,
            configuration: WheelConfiguration::new(
                two_tone(8, ("GAGNÉ !", "#ff9f1c"), ("PERDU", "#2ec4b6")),
                0.15,
                WheelSettings {
                    jitter_fraction: 0.3,
                    spin_duration_ms: 6000.0,
                    ..Default::default()
                },
            )?,
            gating: GatingPolicy {
                business_hours: None,
                daily_limit: true,
            },
            theme: WheelTheme {
                font: "26px 'Luckiest Guy', Arial",
                border_color: "#ffffff",
                label_color: "#ffffff",
                pointer_color: "#e71d36",
                background: "#011627",
                confetti_colors: vec!["#ff9f1c", "#2ec4b6", "#e71d36", "#fdfffc"],
            },
            copy: KioskCopy {
                win_title: "🎊 C'EST GAGNÉ !",
                win_message: "Vous avez gagné un T-SHIRT du festival ! Passez au stand.",
                loss_title: "Perdu !",
                loss_message: "Merci d'avoir joué, revenez demain !",
            },
        },
    };
    Ok(variant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wheel_config::OutcomeClass;

    #[test]
    fn test_all_presets_load() {
        for id in VariantId::iter() {
            let variant = preset(id).unwrap();
            assert_eq!(variant.id, id);
            assert!(!variant.theme.confetti_colors.is_empty());
            let config = &variant.configuration;
            assert!(!config.indices_of(OutcomeClass::Win).is_empty());
            assert!(!config.indices_of(OutcomeClass::Loss).is_empty());
        }
    }

    #[test]
    fn test_classic_matches_counter_kiosk() {
        let classic = preset(VariantId::Classic).unwrap();
        assert_eq!(classic.configuration.segment_count(), 4);
        assert_eq!(classic.configuration.win_probability(), 0.05);
        assert_eq!(classic.gating.business_hours, Some(BusinessHours::new(7, 20).unwrap()));
        assert!(!classic.gating.daily_limit);
    }

    #[test]
    fn test_variant_names() {
        assert_eq!(VariantId::Midnight.to_string(), "midnight");
        assert_eq!(resolve_variant("neon"), VariantId::Neon);
        assert_eq!(resolve_variant("disco"), VariantId::Classic);
        assert_eq!(
            VariantId::Golden.storage_key(),
            "prize_wheel_last_played:golden"
        );
    }
}
