use serde::{Deserialize, Serialize};

use super::{
    acquire_game::GameId,
    errors::{ErrorKind, Rejection},
    view::{GameView, PrivateView},
};

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct GameSummary {
    pub id: GameId,
    pub title: String,
    pub players: usize,
    pub is_started: bool,
    pub is_over: bool,
}

/// The engine's answer to one `AcquireRequest`.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AcquireResponse {
    Created { game_id: GameId },
    State { state: Box<GameView> },
    Private { view: PrivateView },
    Games { games: Vec<GameSummary> },
    Rejected {
        kind: ErrorKind,
        code: String,
        message: String,
    },
}

impl From<Rejection> for AcquireResponse {
    fn from(rejection: Rejection) -> Self {
        AcquireResponse::Rejected {
            kind: rejection.kind(),
            code: rejection.code().to_string(),
            message: rejection.to_string(),
        }
    }
}

impl From<GameView> for AcquireResponse {
    fn from(view: GameView) -> Self {
        AcquireResponse::State { state: Box::new(view) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::player::PlayerId;

    #[test]
    fn test_rejection_payload() {
        let response = AcquireResponse::from(Rejection::NotYourTurn(PlayerId::from("bo")));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "rejected");
        assert_eq!(json["kind"], "TurnViolation");
        assert_eq!(json["code"], "NotYourTurn");
        assert_eq!(json["message"], "it is not bo's turn to act");
    }

    #[test]
    fn test_created_payload() {
        let json = serde_json::to_string(&AcquireResponse::Created { game_id: GameId::from("g1") }).unwrap();
        assert_eq!(json, r#"{"status":"created","game_id":"g1"}"#);
    }
}
