use super::*;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tokio::{net::TcpListener, sync::Mutex};

#[derive(Clone, Default)]
struct StubState {
    valid_move_queries: Arc<Mutex<Vec<ValidMovesQuery>>>,
    move_queries: Arc<Mutex<Vec<MovePieceQuery>>>,
}

fn stub_board() -> BoardMatrix {
    BoardMatrix::empty()
        .with_piece(0, 4, "k")
        .with_piece(6, 4, "P")
        .with_piece(7, 4, "K")
}

async fn handle_board_state() -> Json<BoardMatrix> {
    Json(stub_board())
}

async fn handle_valid_moves(
    State(state): State<StubState>,
    Query(query): Query<ValidMovesQuery>,
) -> Json<Vec<Square>> {
    state.valid_move_queries.lock().await.push(query);
    if query == (ValidMovesQuery { x: 5, y: 2 }) {
        Json(vec![Square::new(5, 3), Square::new(5, 4)])
    } else {
        Json(Vec::new())
    }
}

async fn handle_move_piece(
    State(state): State<StubState>,
    Query(query): Query<MovePieceQuery>,
) -> (StatusCode, Json<serde_json::Value>) {
    state.move_queries.lock().await.push(query);
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "No piece at source position" })),
    )
}

async fn spawn_authority(app: Router) -> Url {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Url::parse(&format!("http://{addr}")).expect("url")
}

async fn spawn_stub_authority() -> (HttpMoveAuthority, StubState) {
    let state = StubState::default();
    let app = Router::new()
        .route(BOARD_STATE_PATH, get(handle_board_state))
        .route(VALID_MOVES_PATH, get(handle_valid_moves))
        .route(MOVE_PIECE_PATH, get(handle_move_piece))
        .with_state(state.clone());
    let base_url = spawn_authority(app).await;
    (HttpMoveAuthority::new(base_url), state)
}

#[tokio::test]
async fn fetches_board_state_from_authority() {
    let (authority, _state) = spawn_stub_authority().await;

    let board = authority.fetch_board_state().await.expect("board");

    assert_eq!(board, stub_board());
    assert_eq!(board.occupied(), 3);
}

#[tokio::test]
async fn candidate_query_sends_authority_coordinates() {
    let (authority, state) = spawn_stub_authority().await;

    let moves = authority
        .fetch_candidate_moves(Square::new(5, 2))
        .await
        .expect("moves");
    let none = authority
        .fetch_candidate_moves(Square::new(4, 4))
        .await
        .expect("empty square");

    assert_eq!(moves, vec![Square::new(5, 3), Square::new(5, 4)]);
    assert!(none.is_empty());
    assert_eq!(
        *state.valid_move_queries.lock().await,
        vec![
            ValidMovesQuery { x: 5, y: 2 },
            ValidMovesQuery { x: 4, y: 4 }
        ]
    );
}

#[tokio::test]
async fn submit_move_completes_even_when_authority_rejects_it() {
    let (authority, state) = spawn_stub_authority().await;

    authority
        .submit_move(Square::new(3, 3), Square::new(3, 4))
        .await
        .expect("any answer completes the move");

    assert_eq!(
        *state.move_queries.lock().await,
        vec![MovePieceQuery::new(Square::new(3, 3), Square::new(3, 4))]
    );
}

#[tokio::test]
async fn perform_wraps_answers_in_outcomes() {
    let (authority, _state) = spawn_stub_authority().await;

    let outcome = perform(
        &authority,
        &SyncRequest::FetchCandidateMoves {
            at: Square::new(5, 2),
        },
    )
    .await
    .expect("outcome");
    assert_eq!(
        outcome,
        SyncOutcome::CandidateMoves {
            origin: Square::new(5, 2),
            moves: vec![Square::new(5, 3), Square::new(5, 4)],
        }
    );

    let outcome = perform(
        &authority,
        &SyncRequest::SubmitMove {
            from: Square::new(5, 2),
            to: Square::new(5, 4),
        },
    )
    .await
    .expect("outcome");
    assert_eq!(
        outcome,
        SyncOutcome::MoveSubmitted {
            from: Square::new(5, 2),
            to: Square::new(5, 4),
        }
    );
}

#[tokio::test]
async fn failing_board_state_is_a_status_error() {
    let app = Router::new().route(
        BOARD_STATE_PATH,
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let authority = HttpMoveAuthority::new(spawn_authority(app).await);

    let err = authority.fetch_board_state().await.expect_err("status");

    match err {
        SyncError::Status { endpoint, status } => {
            assert_eq!(endpoint, BOARD_STATE_PATH);
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn misshapen_board_is_a_decode_error() {
    let app = Router::new().route(
        BOARD_STATE_PATH,
        get(|| async { Json(serde_json::json!([["K"]])) }),
    );
    let authority = HttpMoveAuthority::new(spawn_authority(app).await);

    let err = authority.fetch_board_state().await.expect_err("decode");

    assert!(matches!(err, SyncError::Decode { .. }));
    assert_eq!(err.endpoint(), BOARD_STATE_PATH);
}

#[tokio::test]
async fn unreachable_authority_is_a_transport_error() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    let authority =
        HttpMoveAuthority::new(Url::parse(&format!("http://{addr}")).expect("url"));

    let err = authority
        .submit_move(Square::new(1, 2), Square::new(1, 3))
        .await
        .expect_err("transport");

    assert!(matches!(
        err,
        SyncError::Transport {
            endpoint: MOVE_PIECE_PATH,
            ..
        }
    ));
}

#[test]
fn endpoints_resolve_against_the_authority_origin() {
    let authority = HttpMoveAuthority::new(Url::parse("http://localhost:8080").expect("url"));

    let url = authority.endpoint(VALID_MOVES_PATH).expect("endpoint");

    assert_eq!(url.as_str(), "http://localhost:8080/valid_moves");
    assert_eq!(authority.base_url().port(), Some(8080));
}
