use axum::{
    extract::{ws::Message, ws::WebSocket, ws::WebSocketUpgrade},
    response::IntoResponse,
    routing::get,
    Router,
};
use futures_util::{SinkExt, StreamExt};
use glam::Quat;
use rand::{rngs::StdRng, SeedableRng};
use scene_engine::{Engine, FixedCamera};
use scene_protocol::{ClientMsg, ServerMsg};
use std::path::PathBuf;
use tokio::sync::mpsc;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let dist_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../web/dist");
    let index_file = dist_dir.join("index.html");

    let app = Router::new()
        .route("/ws", get(ws_handler))
        .nest_service(
            "/",
            ServeDir::new(dist_dir.clone()).append_index_html_on_directories(true),
        )
        .fallback_service(ServeFile::new(index_file))
        .layer(TraceLayer::new_for_http());

    let addr = std::env::var("EDITOR_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

async fn ws_handler(ws: WebSocketUpgrade) -> impl IntoResponse {
    ws.on_upgrade(handle_socket)
}

/// One editor session per connection; the scene dies with the socket.
async fn handle_socket(socket: WebSocket) {
    let (mut ws_tx, mut ws_rx) = socket.split();
    let (out_tx, mut out_rx) = mpsc::channel::<ServerMsg>(32);

    let send_task = tokio::spawn(async move {
        while let Some(msg) = out_rx.recv().await {
            if let Ok(text) = serde_json::to_string(&msg) {
                if ws_tx.send(Message::Text(text)).await.is_err() {
                    break;
                }
            }
        }
    });

    let _ = out_tx.send(ServerMsg::HelloAck).await;

    let mut engine = Engine::new(StdRng::from_entropy());

    while let Some(Ok(msg)) = ws_rx.next().await {
        match msg {
            Message::Text(text) => {
                if let Ok(client_msg) = serde_json::from_str::<ClientMsg>(&text) {
                    match client_msg {
                        ClientMsg::Hello { client_version } => {
                            let _ = out_tx.send(ServerMsg::HelloAck).await;
                            let _ = out_tx
                                .send(ServerMsg::Log {
                                    text: format!("client hello: {client_version}"),
                                })
                                .await;
                        }
                        ClientMsg::Apply { command, camera } => {
                            let rig =
                                FixedCamera(camera.map(Quat::from_array).unwrap_or(Quat::IDENTITY));
                            match engine.process(&command, &rig) {
                                Ok(description) => {
                                    let _ = out_tx.send(ServerMsg::Applied { description }).await;
                                    let _ = out_tx.send(scene_snapshot(&engine)).await;
                                }
                                Err(err) => {
                                    warn!(%err, general = %command.general_label, "command rejected");
                                    let _ = out_tx
                                        .send(ServerMsg::Rejected {
                                            reason: err.to_string(),
                                        })
                                        .await;
                                }
                            }
                        }
                        ClientMsg::ToggleSelect { id } => {
                            engine.toggle_select(id);
                            let _ = out_tx.send(scene_snapshot(&engine)).await;
                        }
                        ClientMsg::RequestScene => {
                            let _ = out_tx.send(scene_snapshot(&engine)).await;
                        }
                    }
                } else {
                    let _ = out_tx
                        .send(ServerMsg::Log {
                            text: format!("unrecognized payload: {text}"),
                        })
                        .await;
                }
            }
            Message::Binary(_) => {
                let _ = out_tx
                    .send(ServerMsg::Log {
                        text: "binary message ignored".to_string(),
                    })
                    .await;
            }
            Message::Close(_) => break,
            _ => {}
        }
    }

    drop(out_tx);
    let _ = send_task.await;
    warn!("websocket closed");
}

fn scene_snapshot(engine: &Engine<StdRng>) -> ServerMsg {
    ServerMsg::Scene {
        objects: engine.state().objects().to_vec(),
        active_id: engine.state().active_id(),
    }
}
