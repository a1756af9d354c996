use matchup_client_core::interaction::{
    InteractionError, InteractionOutcome, classify_outcome, decode_interaction_response,
};
use matchup_client_core::routing::MATCHES_NEW_MATCH_PATH;
use web_time::Duration;

pub(crate) const FADE_OUT_CLASS: &str = "fade-out";
pub(crate) const FADE_OUT_RELOAD_DELAY: Duration = Duration::from_millis(400);

/// The single DOM/navigation effect one like/pass response resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum InteractionEffect {
    OpenMatches { url: &'static str },
    DismissCard {
        fade_class: &'static str,
        reload_delay: Duration,
    },
}

/// Full pipeline from raw HTTP response to planned effect. Kept free of
/// `web-sys` so the contract in it is testable on the host.
pub(crate) fn plan_interaction(
    status: u16,
    body: &str,
) -> Result<InteractionEffect, InteractionError> {
    let result = decode_interaction_response(status, body)?;
    match classify_outcome(result)? {
        InteractionOutcome::MatchFound => Ok(InteractionEffect::OpenMatches {
            url: MATCHES_NEW_MATCH_PATH,
        }),
        InteractionOutcome::CardDismissed => Ok(InteractionEffect::DismissCard {
            fade_class: FADE_OUT_CLASS,
            reload_delay: FADE_OUT_RELOAD_DELAY,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_like_fades_card_then_reloads() {
        let effect = plan_interaction(200, r#"{"success": true, "is_match": false}"#)
            .expect("planned effect");
        assert_eq!(
            effect,
            InteractionEffect::DismissCard {
                fade_class: FADE_OUT_CLASS,
                reload_delay: Duration::from_millis(400),
            }
        );
    }

    #[test]
    fn missing_match_flag_behaves_like_plain_like() {
        let effect = plan_interaction(200, r#"{"success": true}"#).expect("planned effect");
        assert!(matches!(effect, InteractionEffect::DismissCard { .. }));
    }

    #[test]
    fn mutual_like_navigates_to_matches_with_banner_flag() {
        let effect = plan_interaction(200, r#"{"success": true, "is_match": true}"#)
            .expect("planned effect");
        assert_eq!(
            effect,
            InteractionEffect::OpenMatches {
                url: "/connections/matches/?new_match=true",
            }
        );
    }

    #[test]
    fn server_rejection_plans_no_effect() {
        let error = plan_interaction(200, r#"{"success": false, "error": "X"}"#)
            .expect_err("rejection expected");
        assert_eq!(error, InteractionError::Rejected("X".to_string()));
    }

    #[test]
    fn non_success_status_fails_regardless_of_body() {
        let error =
            plan_interaction(500, r#"{"success": true, "is_match": true}"#).expect_err("status error");
        assert_eq!(error, InteractionError::Status(500));
    }

    #[test]
    fn malformed_body_fails_decode() {
        let error = plan_interaction(200, "not json").expect_err("decode error");
        assert!(matches!(error, InteractionError::Decode(_)));
    }
}
