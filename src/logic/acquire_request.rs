use serde::{
    de::{value::StrDeserializer, Error, IntoDeserializer},
    Deserialize, Deserializer, Serialize,
};

use super::{
    acquire_game::GameId, brand::Brand, errors::Rejection, game_config::GameConfig,
    stock_market::PurchaseOrder, tile::Tile,
};

// Clients send "" when no brand was picked.
fn brand_or_empty<'de, D>(deserializer: D) -> Result<Option<Brand>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(name) if name.is_empty() => Ok(None),
        Some(name) => {
            let text: StrDeserializer<'_, D::Error> = name.as_str().into_deserializer();
            let brand = Brand::deserialize(text)
                .map_err(|_| D::Error::custom(format!("unknown brand {:?}", name)))?;
            Ok(Some(brand))
        }
    }
}

/// An action submitted by a client. Callers are identified only by `id_token`.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum AcquireRequest {
    CreateGame {
        id_token: String,
        title: String,
        #[serde(default)]
        config: Option<GameConfig>,
    },
    JoinGame {
        id_token: String,
        game_id: GameId,
    },
    StartGame {
        id_token: String,
        game_id: GameId,
        #[serde(default)]
        revision: Option<u64>,
    },
    PlaceTile {
        id_token: String,
        game_id: GameId,
        #[serde(default)]
        x: Option<usize>,
        #[serde(default)]
        y: Option<usize>,
        #[serde(default, deserialize_with = "brand_or_empty")]
        brand: Option<Brand>,
        #[serde(default)]
        skip: bool,
        #[serde(default)]
        revision: Option<u64>,
    },
    BuyStock {
        id_token: String,
        game_id: GameId,
        #[serde(default)]
        purchase_order: PurchaseOrder,
        #[serde(default)]
        revision: Option<u64>,
    },
    ResolveAcquisition {
        id_token: String,
        game_id: GameId,
        sell_count: u32,
        trade_count: u32,
        #[serde(default)]
        revision: Option<u64>,
    },
    GetState {
        game_id: GameId,
    },
    GetPrivateView {
        id_token: String,
        game_id: GameId,
    },
    ListGames,
}

/// Turns the optional coordinates of a place action into a tile.
pub fn tile_from_coordinates(x: Option<usize>, y: Option<usize>) -> Result<Option<Tile>, Rejection> {
    match (x, y) {
        (Some(x), Some(y)) => Ok(Some(Tile::new(x, y))),
        (None, None) => Ok(None),
        _ => Err(Rejection::Malformed("x and y must be given together".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_tile_payload() {
        let request: AcquireRequest = serde_json::from_str(
            r#"{"action":"place_tile","id_token":"t","game_id":"g1","x":3,"y":4,"brand":""}"#,
        )
        .unwrap();
        assert_eq!(
            request,
            AcquireRequest::PlaceTile {
                id_token: "t".to_string(),
                game_id: GameId::from("g1"),
                x: Some(3),
                y: Some(4),
                brand: None,
                skip: false,
                revision: None,
            }
        );

        let request: AcquireRequest = serde_json::from_str(
            r#"{"action":"place_tile","id_token":"t","game_id":"g1","x":3,"y":4,"brand":"LUXOR","revision":9}"#,
        )
        .unwrap();
        assert!(matches!(
            request,
            AcquireRequest::PlaceTile { brand: Some(Brand::Luxor), revision: Some(9), .. }
        ));
    }

    #[test]
    fn test_unknown_brand_is_malformed() {
        let parsed = serde_json::from_str::<AcquireRequest>(
            r#"{"action":"place_tile","id_token":"t","game_id":"g1","x":3,"y":4,"brand":"HILTON"}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn test_buy_stock_payload() {
        let request: AcquireRequest = serde_json::from_str(
            r#"{"action":"buy_stock","id_token":"t","game_id":"g1","purchase_order":{"TOWER":2,"IMPERIAL":1}}"#,
        )
        .unwrap();
        match request {
            AcquireRequest::BuyStock { purchase_order, .. } => {
                assert_eq!(purchase_order.total(), Some(3));
                assert_eq!(purchase_order.0.get(&Brand::Imperial), Some(&1));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_coordinates() {
        assert_eq!(tile_from_coordinates(Some(1), Some(2)), Ok(Some(Tile::new(1, 2))));
        assert_eq!(tile_from_coordinates(None, None), Ok(None));
        assert!(tile_from_coordinates(Some(1), None).is_err());
    }
}
