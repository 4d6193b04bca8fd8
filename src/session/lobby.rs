use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, RwLock},
};

use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tokio::sync::watch;

use crate::logic::{
    acquire_game::{GameId, GameState},
    acquire_request::{tile_from_coordinates, AcquireRequest},
    acquire_response::{AcquireResponse, GameSummary},
    brand::Brand,
    errors::Rejection,
    game_config::GameConfig,
    stock_market::PurchaseOrder,
    tile::Tile,
    view::{GameView, PrivateView},
};

use super::{game_session::GameSession, identity::IdentityVerifier};

/// Registry of running games. Routes every request to its game's session.
pub struct Lobby {
    games: RwLock<BTreeMap<GameId, Arc<GameSession>>>,
    verifier: Arc<dyn IdentityVerifier>,
    seeds: Mutex<StdRng>,
    default_config: GameConfig,
}

impl Lobby {
    pub fn new(verifier: Arc<dyn IdentityVerifier>, seed: u64, default_config: GameConfig) -> Self {
        Self {
            games: RwLock::new(BTreeMap::new()),
            verifier,
            seeds: Mutex::new(StdRng::seed_from_u64(seed)),
            default_config,
        }
    }

    pub fn session(&self, game_id: &GameId) -> Result<Arc<GameSession>, Rejection> {
        self.games
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(game_id)
            .cloned()
            .ok_or_else(|| Rejection::UnknownGame(game_id.to_string()))
    }

    pub fn create_game(
        &self,
        id_token: &str,
        title: &str,
        config: Option<GameConfig>,
    ) -> Result<GameId, Rejection> {
        let identity = self.verifier.verify(id_token)?;
        if title.trim().is_empty() {
            return Err(Rejection::Malformed("a game needs a title".to_string()));
        }

        let config = config.unwrap_or_else(|| self.default_config.clone());
        config.validate()?;

        let seed = self
            .seeds
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .gen::<u64>();

        let mut games = self.games.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        let id = GameId(format!("game-{}", games.len() + 1));
        let session = GameSession::new(GameState::new(id.clone(), title, config), seed);
        games.insert(id.clone(), Arc::new(session));

        info!("{} created game {} ({:?})", identity.user_id, id, title);
        Ok(id)
    }

    pub fn join_game(&self, id_token: &str, game_id: &GameId) -> Result<Arc<GameView>, Rejection> {
        let identity = self.verifier.verify(id_token)?;
        self.session(game_id)?.submit(None, |game, _| {
            game.join(identity.user_id.clone(), &identity.display_name)
        })
    }

    pub fn start_game(
        &self,
        id_token: &str,
        game_id: &GameId,
        revision: Option<u64>,
    ) -> Result<Arc<GameView>, Rejection> {
        let identity = self.verifier.verify(id_token)?;
        self.session(game_id)?.submit(revision, |game, rng| {
            game.player(&identity.user_id)?;
            game.start(rng)
        })
    }

    pub fn place_tile(
        &self,
        id_token: &str,
        game_id: &GameId,
        tile: Option<Tile>,
        brand: Option<Brand>,
        skip: bool,
        revision: Option<u64>,
    ) -> Result<Arc<GameView>, Rejection> {
        let identity = self.verifier.verify(id_token)?;
        self.session(game_id)?.submit(revision, |game, _| {
            game.place_tile(&identity.user_id, tile, brand, skip)
        })
    }

    pub fn buy_stock(
        &self,
        id_token: &str,
        game_id: &GameId,
        order: &PurchaseOrder,
        revision: Option<u64>,
    ) -> Result<Arc<GameView>, Rejection> {
        let identity = self.verifier.verify(id_token)?;
        self.session(game_id)?
            .submit(revision, |game, _| game.buy_stock(&identity.user_id, order))
    }

    pub fn resolve_acquisition(
        &self,
        id_token: &str,
        game_id: &GameId,
        sell_count: u32,
        trade_count: u32,
        revision: Option<u64>,
    ) -> Result<Arc<GameView>, Rejection> {
        let identity = self.verifier.verify(id_token)?;
        self.session(game_id)?.submit(revision, |game, _| {
            game.resolve_acquisition(&identity.user_id, sell_count, trade_count)
        })
    }

    pub fn state(&self, game_id: &GameId) -> Result<Arc<GameView>, Rejection> {
        Ok(self.session(game_id)?.snapshot())
    }

    pub fn subscribe(&self, game_id: &GameId) -> Result<watch::Receiver<Arc<GameView>>, Rejection> {
        Ok(self.session(game_id)?.subscribe())
    }

    /// The caller's own rack. Nobody can read another player's tiles.
    pub fn private_view(&self, id_token: &str, game_id: &GameId) -> Result<PrivateView, Rejection> {
        let identity = self.verifier.verify(id_token)?;
        self.session(game_id)?.private_view(&identity.user_id)
    }

    pub fn list_games(&self) -> Vec<GameSummary> {
        self.games
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .values()
            .map(|session| session.summary())
            .collect()
    }

    pub fn dispatch(&self, request: AcquireRequest) -> AcquireResponse {
        let state = |result: Result<Arc<GameView>, Rejection>| match result {
            Ok(view) => AcquireResponse::from(view.as_ref().clone()),
            Err(rejection) => AcquireResponse::from(rejection),
        };

        match request {
            AcquireRequest::CreateGame { id_token, title, config } => {
                match self.create_game(&id_token, &title, config) {
                    Ok(game_id) => AcquireResponse::Created { game_id },
                    Err(rejection) => rejection.into(),
                }
            }
            AcquireRequest::JoinGame { id_token, game_id } => state(self.join_game(&id_token, &game_id)),
            AcquireRequest::StartGame { id_token, game_id, revision } => {
                state(self.start_game(&id_token, &game_id, revision))
            }
            AcquireRequest::PlaceTile { id_token, game_id, x, y, brand, skip, revision } => {
                match tile_from_coordinates(x, y) {
                    Ok(tile) => state(self.place_tile(&id_token, &game_id, tile, brand, skip, revision)),
                    Err(rejection) => rejection.into(),
                }
            }
            AcquireRequest::BuyStock { id_token, game_id, purchase_order, revision } => {
                state(self.buy_stock(&id_token, &game_id, &purchase_order, revision))
            }
            AcquireRequest::ResolveAcquisition { id_token, game_id, sell_count, trade_count, revision } => {
                state(self.resolve_acquisition(&id_token, &game_id, sell_count, trade_count, revision))
            }
            AcquireRequest::GetState { game_id } => state(self.state(&game_id)),
            AcquireRequest::GetPrivateView { id_token, game_id } => {
                match self.private_view(&id_token, &game_id) {
                    Ok(view) => AcquireResponse::Private { view },
                    Err(rejection) => rejection.into(),
                }
            }
            AcquireRequest::ListGames => AcquireResponse::Games { games: self.list_games() },
        }
    }
}
