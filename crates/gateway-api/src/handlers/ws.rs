//! WebSocket upgrade handler.

use std::net::SocketAddr;

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{ConnectInfo, State, WebSocketUpgrade};
use axum::http::Extensions;
use axum::response::Response;
use futures::{SinkExt, StreamExt};
use tracing::{debug, warn};

use crate::state::AppState;

/// GET /ws
///
/// The peer address is only known when the server was started with
/// connect info; routers driven directly in tests have none.
pub async fn ws_upgrade(
    State(state): State<AppState>,
    extensions: Extensions,
    ws: WebSocketUpgrade,
) -> Response {
    let remote_addr = extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);

    ws.on_upgrade(move |socket| handle_ws_connection(state, remote_addr, socket))
}

/// Handles an established WebSocket connection.
async fn handle_ws_connection(state: AppState, remote_addr: Option<SocketAddr>, socket: WebSocket) {
    let engine = state.realtime;
    let (mut ws_tx, mut ws_rx) = socket.split();

    let (handle, mut outbound_rx) = engine.connect(remote_addr);
    let conn_id = handle.id;

    let writer_handle = handle.clone();
    let mut outbound_task = tokio::spawn(async move {
        loop {
            tokio::select! {
                frame = outbound_rx.recv() => match frame {
                    Some(frame) => {
                        if ws_tx.send(Message::Text(frame.into())).await.is_err() {
                            break;
                        }
                    }
                    None => break,
                },
                () = writer_handle.closed() => {
                    debug!(conn_id = %writer_handle.id, "Closing WebSocket from the server side");
                    let _ = ws_tx.send(Message::Close(None)).await;
                    break;
                }
            }
        }
    });

    loop {
        let result = tokio::select! {
            next = ws_rx.next() => match next {
                Some(result) => result,
                None => break,
            },
            // Writer gone: the peer is unreachable or the server closed it.
            _ = &mut outbound_task => break,
        };

        match result {
            Ok(Message::Text(text)) => {
                engine.receive(&handle, text.as_str());
            }
            Ok(Message::Binary(data)) => {
                engine.receive_binary(&handle, &data);
            }
            Ok(Message::Close(frame)) => {
                debug!(conn_id = %conn_id, ?frame, "Client sent close frame");
                break;
            }
            // Control frames are answered by the transport.
            Ok(Message::Ping(_)) | Ok(Message::Pong(_)) => {}
            Err(e) => {
                warn!(conn_id = %conn_id, error = %e, "WebSocket error");
                break;
            }
        }
    }

    engine.disconnect(&conn_id);
    outbound_task.abort();
}
