use serde::Serialize;

use crate::constants::*;
use crate::gating::GateRejection;
use crate::shared_wheel_game::SpinReport;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum StatusLine {
    Ready,
    Spinning,
    Won,
    Lost,
}

impl StatusLine {
    pub fn text(&self) -> &'static str {
        match self {
            Self::Ready => STATUS_READY,
            Self::Spinning => STATUS_SPINNING,
            Self::Won => STATUS_WON,
            Self::Lost => STATUS_LOST,
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum ModalTone {
    Win,
    Loss,
    Notice,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ModalContent {
    pub title: String,
    pub message: String,
    pub tone: ModalTone,
}

/// Per-variant wording for the result modal.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct KioskCopy {
    pub win_title: &'static str,
    pub win_message: &'static str,
    pub loss_title: &'static str,
    pub loss_message: &'static str,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub enum ParticleProfile {
    None,
    Celebration { colors: Vec<&'static str> },
}

/// What the kiosk shows once the wheel stops.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ResultPresentation {
    pub modal: ModalContent,
    pub status: StatusLine,
    pub particles: ParticleProfile,
}

pub fn present_result(
    copy: &KioskCopy,
    confetti_colors: &[&'static str],
    report: &SpinReport,
) -> ResultPresentation {
    if report.is_win() {
        ResultPresentation {
            modal: ModalContent {
                title: copy.win_title.to_string(),
                message: copy.win_message.to_string(),
                tone: ModalTone::Win,
            },
            status: StatusLine::Won,
            particles: ParticleProfile::Celebration {
                colors: confetti_colors.to_vec(),
            },
        }
    } else {
        ResultPresentation {
            modal: ModalContent {
                title: copy.loss_title.to_string(),
                message: copy.loss_message.to_string(),
                tone: ModalTone::Loss,
            },
            status: StatusLine::Lost,
            particles: ParticleProfile::None,
        }
    }
}

pub fn present_rejection(rejection: &GateRejection) -> ModalContent {
    match rejection {
        GateRejection::Closed { start_hour, end_hour } => ModalContent {
            title: CLOSED_TITLE.to_string(),
            message: format!(
                "Le jeu est disponible de {}h à {}h uniquement !",
                start_hour, end_hour
            ),
            tone: ModalTone::Notice,
        },
        GateRejection::AlreadyPlayedToday => ModalContent {
            title: ALREADY_PLAYED_TITLE.to_string(),
            message: ALREADY_PLAYED_MESSAGE.to_string(),
            tone: ModalTone::Notice,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wheel_config::Segment;

    const COPY: KioskCopy = KioskCopy {
        win_title: "🎉 FÉLICITATIONS !",
        win_message: "Vous avez gagné !",
        loss_title: "Pas cette fois !",
        loss_message: "Réessayez votre chance !",
    };

    fn report(segment: Segment) -> SpinReport {
        SpinReport {
            outcome: segment.outcome_class,
            segment_index: 0,
            segment,
            final_rotation: 3105.0,
        }
    }

    #[test]
    fn test_win_gets_confetti() {
        let shown = present_result(&COPY, &["#ffd700"], &report(Segment::win("GAGNÉ !", "#0f0")));
        assert_eq!(shown.status, StatusLine::Won);
        assert_eq!(shown.modal.title, COPY.win_title);
        assert_eq!(shown.particles, ParticleProfile::Celebration { colors: vec!["#ffd700"] });
    }

    #[test]
    fn test_loss_is_quiet() {
        let shown = present_result(&COPY, &["#ffd700"], &report(Segment::loss("PERDU", "#f00")));
        assert_eq!(shown.status, StatusLine::Lost);
        assert_eq!(shown.modal.tone, ModalTone::Loss);
        assert_eq!(shown.particles, ParticleProfile::None);
    }

    #[test]
    fn test_closed_message_names_hours() {
        let modal = present_rejection(&GateRejection::Closed { start_hour: 7, end_hour: 20 });
        assert_eq!(modal.title, CLOSED_TITLE);
        assert_eq!(modal.message, "Le jeu est disponible de 7h à 20h uniquement !");
    }

    #[test]
    fn test_status_text() {
        assert_eq!(StatusLine::Ready.text(), "PRÊT À JOUER ?");
        assert_eq!(StatusLine::Spinning.text(), STATUS_SPINNING);
    }
}
