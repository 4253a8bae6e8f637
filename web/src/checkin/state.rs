use shared_types::CheckinOutcome;

/// Closed set of scanner states. The camera/QR library only ever sees
/// `Scanning`; every other state renders a modal or toast over a stopped
/// scanner.
#[derive(Debug, Clone, PartialEq)]
pub enum ScannerState {
    Scanning,
    Processing,
    Success { member_name: String, club_name: String },
    Closed { next_opening: Option<String> },
    ClubNotFound,
    InvalidQr { message: String },
    GenericError { message: String },
}

impl ScannerState {
    /// Terminal states require a full page reload on dismissal; the scanner
    /// library cannot re-arm the camera in place.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ScannerState::Scanning | ScannerState::Processing)
    }

    /// Unclassified failures reload on their own after a delay, so an
    /// unattended kiosk is never stranded on an error screen. Classified
    /// results wait for the operator to dismiss them.
    pub fn auto_reloads(&self) -> bool {
        matches!(self, ScannerState::GenericError { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScanEvent {
    QrDecoded,
    Outcome(CheckinOutcome),
    Dismissed,
}

/// Pure transition function. Events that make no sense in the current state
/// (a second decode while processing, a stale response after dismissal) are
/// dropped rather than corrupting the state.
pub fn transition(state: &ScannerState, event: ScanEvent) -> ScannerState {
    match (state, event) {
        (ScannerState::Scanning, ScanEvent::QrDecoded) => ScannerState::Processing,
        (ScannerState::Processing, ScanEvent::Outcome(outcome)) => match outcome {
            CheckinOutcome::Success {
                member_name,
                club_name,
            } => ScannerState::Success {
                member_name,
                club_name,
            },
            CheckinOutcome::InvalidQr { message } => ScannerState::InvalidQr { message },
            CheckinOutcome::ClubNotFound => ScannerState::ClubNotFound,
            CheckinOutcome::ClubClosed { next_opening } => ScannerState::Closed { next_opening },
            CheckinOutcome::Error { message } => ScannerState::GenericError { message },
        },
        (state, ScanEvent::Dismissed) if state.is_terminal() => ScannerState::Scanning,
        (state, _) => state.clone(),
    }
}

/// Tailors the invalid-QR modal text from the backend's 400 message.
pub fn invalid_qr_message(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    if lowered.contains("expired") {
        "This QR code has expired. Ask the member to refresh their code.".to_string()
    } else if lowered.contains("invalid") {
        "This QR code is not valid for check-in.".to_string()
    } else {
        "The QR code could not be processed. Please try again.".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_then_outcome_reaches_success() {
        let state = transition(&ScannerState::Scanning, ScanEvent::QrDecoded);
        assert_eq!(state, ScannerState::Processing);

        let state = transition(
            &state,
            ScanEvent::Outcome(CheckinOutcome::Success {
                member_name: "Anna Berg".into(),
                club_name: "Riverside".into(),
            }),
        );
        assert_eq!(
            state,
            ScannerState::Success {
                member_name: "Anna Berg".into(),
                club_name: "Riverside".into()
            }
        );
        assert!(state.is_terminal());
    }

    #[test]
    fn each_outcome_maps_to_its_own_state() {
        let processing = ScannerState::Processing;
        assert_eq!(
            transition(
                &processing,
                ScanEvent::Outcome(CheckinOutcome::InvalidQr {
                    message: "expired".into()
                })
            ),
            ScannerState::InvalidQr {
                message: "expired".into()
            }
        );
        assert_eq!(
            transition(&processing, ScanEvent::Outcome(CheckinOutcome::ClubNotFound)),
            ScannerState::ClubNotFound
        );
        assert_eq!(
            transition(
                &processing,
                ScanEvent::Outcome(CheckinOutcome::ClubClosed {
                    next_opening: Some("2024-03-14T15:00:00Z".into())
                })
            ),
            ScannerState::Closed {
                next_opening: Some("2024-03-14T15:00:00Z".into())
            }
        );
        assert_eq!(
            transition(
                &processing,
                ScanEvent::Outcome(CheckinOutcome::Error {
                    message: "boom".into()
                })
            ),
            ScannerState::GenericError {
                message: "boom".into()
            }
        );
    }

    #[test]
    fn dismissal_only_leaves_terminal_states() {
        assert_eq!(
            transition(&ScannerState::ClubNotFound, ScanEvent::Dismissed),
            ScannerState::Scanning
        );
        // Dismissing mid-processing does nothing.
        assert_eq!(
            transition(&ScannerState::Processing, ScanEvent::Dismissed),
            ScannerState::Processing
        );
    }

    #[test]
    fn stray_events_are_ignored() {
        // A second decode while processing.
        assert_eq!(
            transition(&ScannerState::Processing, ScanEvent::QrDecoded),
            ScannerState::Processing
        );
        // A late response after the modal was dismissed.
        assert_eq!(
            transition(
                &ScannerState::Scanning,
                ScanEvent::Outcome(CheckinOutcome::ClubNotFound)
            ),
            ScannerState::Scanning
        );
    }

    #[test]
    fn only_generic_errors_reload_unattended() {
        assert!(ScannerState::GenericError {
            message: "boom".into()
        }
        .auto_reloads());
        assert!(!ScannerState::Success {
            member_name: "Anna Berg".into(),
            club_name: "Riverside".into()
        }
        .auto_reloads());
        assert!(!ScannerState::InvalidQr {
            message: "expired".into()
        }
        .auto_reloads());
        assert!(!ScannerState::Closed { next_opening: None }.auto_reloads());
        assert!(!ScannerState::Scanning.auto_reloads());
    }

    #[test]
    fn invalid_qr_text_is_substring_classified() {
        assert!(invalid_qr_message("QR token has EXPIRED").contains("expired"));
        assert!(invalid_qr_message("invalid signature").contains("not valid"));
        assert!(invalid_qr_message("???").contains("could not be processed"));
    }
}
