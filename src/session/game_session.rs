use std::sync::{Arc, Mutex, MutexGuard};

use log::{debug, error, info};
use rand::{rngs::StdRng, SeedableRng};
use tokio::sync::watch;

use crate::logic::{
    acquire_game::{GameId, GameState},
    acquire_game_state::ActionType,
    acquire_response::GameSummary,
    errors::Rejection,
    player::PlayerId,
    view::{GameView, PrivateView},
};

struct Authoritative {
    game: GameState,
    rng: StdRng,
}

/// Sole writer of one game. Actions are applied to a copy of the state and
/// committed only if every invariant still holds.
pub struct GameSession {
    id: GameId,
    state: Mutex<Authoritative>,
    publisher: watch::Sender<Arc<GameView>>,
}

fn lock_state(state: &Mutex<Authoritative>) -> MutexGuard<'_, Authoritative> {
    state
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl GameSession {
    pub fn new(game: GameState, seed: u64) -> Self {
        let (publisher, _) = watch::channel(Arc::new(game.view()));
        Self {
            id: game.id.clone(),
            state: Mutex::new(Authoritative {
                game,
                rng: StdRng::seed_from_u64(seed),
            }),
            publisher,
        }
    }

    pub fn id(&self) -> &GameId {
        &self.id
    }

    /// Receives every committed snapshot from now on.
    pub fn subscribe(&self) -> watch::Receiver<Arc<GameView>> {
        self.publisher.subscribe()
    }

    /// The latest committed snapshot, without taking the writer lock.
    pub fn snapshot(&self) -> Arc<GameView> {
        self.publisher.borrow().clone()
    }

    pub fn private_view(&self, player: &PlayerId) -> Result<PrivateView, Rejection> {
        lock_state(&self.state)
            .game
            .private_view(player)
            .ok_or_else(|| Rejection::NotSeated(player.clone()))
    }

    pub fn summary(&self) -> GameSummary {
        let view = self.snapshot();
        GameSummary {
            id: view.id.clone(),
            title: view.title.clone(),
            players: view.player_order.len(),
            is_started: view.is_started,
            is_over: view.current_action_type == Some(ActionType::GameOver),
        }
    }

    /// Runs `action` as one atomic step. A stale `expected_revision`, a
    /// rejected action or a broken invariant leaves the committed state as is.
    pub fn submit<F>(&self, expected_revision: Option<u64>, action: F) -> Result<Arc<GameView>, Rejection>
    where
        F: FnOnce(&mut GameState, &mut StdRng) -> Result<(), Rejection>,
    {
        let mut current = lock_state(&self.state);

        if let Some(expected) = expected_revision {
            if expected != current.game.revision {
                debug!("[{}] stale revision {} (now {})", self.id, expected, current.game.revision);
                return Err(Rejection::StaleRevision {
                    expected,
                    actual: current.game.revision,
                });
            }
        }

        let mut game = current.game.clone();
        let mut rng = current.rng.clone();
        let first_new_line = game.most_recent_actions.len();

        if let Err(rejection) = action(&mut game, &mut rng) {
            debug!("[{}] rejected: {}", self.id, rejection);
            return Err(rejection);
        }

        if let Err(violation) = game
            .verify_invariants()
            .and_then(|_| game.verify_transition(&current.game))
        {
            error!("[{}] aborted commit: {}", self.id, violation);
            return Err(violation);
        }

        game.revision += 1;
        for line in &game.most_recent_actions[first_new_line..] {
            info!("[{} r{}] {}", self.id, game.revision, line);
        }

        let view = Arc::new(game.view());
        current.game = game;
        current.rng = rng;
        self.publisher.send_replace(view.clone());

        Ok(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::game_config::GameConfig;

    fn session() -> GameSession {
        let game = GameState::new(GameId::from("g"), "Session", GameConfig::default());
        GameSession::new(game, 11)
    }

    #[test]
    fn test_commit_bumps_revision_and_publishes() {
        let session = session();
        let mut receiver = session.subscribe();

        let view = session
            .submit(None, |game, _| game.join(PlayerId::from("a"), "Ann"))
            .unwrap();
        assert_eq!(view.revision, 1);
        assert!(receiver.has_changed().unwrap());
        assert_eq!(receiver.borrow_and_update().player_order, vec![PlayerId::from("a")]);
        assert_eq!(session.snapshot().revision, 1);
    }

    #[test]
    fn test_rejection_does_not_commit() {
        let session = session();
        session.submit(None, |game, _| game.join(PlayerId::from("a"), "Ann")).unwrap();
        let receiver = session.subscribe();

        assert_eq!(
            session.submit(None, |game, _| game.join(PlayerId::from("a"), "Ann")),
            Err(Rejection::AlreadySeated(PlayerId::from("a")))
        );
        assert!(!receiver.has_changed().unwrap());
        assert_eq!(session.snapshot().revision, 1);
    }

    #[test]
    fn test_stale_revision() {
        let session = session();
        session.submit(Some(0), |game, _| game.join(PlayerId::from("a"), "Ann")).unwrap();
        assert_eq!(
            session.submit(Some(0), |game, _| game.join(PlayerId::from("b"), "Bo")),
            Err(Rejection::StaleRevision { expected: 0, actual: 1 })
        );
    }

    #[test]
    fn test_invariant_violation_aborts() {
        let session = session();
        let result = session.submit(None, |game, _| {
            game.market.availability.insert(crate::logic::brand::Brand::Tower, 0);
            Ok(())
        });
        assert!(matches!(result, Err(Rejection::Invariant(_))));
        assert_eq!(session.snapshot().stock_availability[&crate::logic::brand::Brand::Tower], 25);
    }
}
