//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::sync::Arc;

use dessert_menu_provider::{ClientConfig, MealCatalog, TheMealDbClient};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// A local HTTP responder that answers exactly one request with a canned reply.
pub struct StubServer {
    pub base_url: String,
    request_line: JoinHandle<String>,
}

impl StubServer {
    /// Bind an ephemeral port and answer the first request with `status` and `body`.
    pub async fn respond_once(status: u16, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let request_line = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0_u8; 8192];
            let n = socket.read(&mut buf).await.unwrap();
            let request = String::from_utf8_lossy(&buf[..n]).into_owned();

            let reason = if status == 200 { "OK" } else { "Error" };
            let response = format!(
                "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;

            request.lines().next().unwrap_or_default().to_string()
        });

        Self {
            base_url: format!("http://{addr}"),
            request_line,
        }
    }

    /// Client pointed at this stub.
    pub fn client(&self) -> Arc<dyn MealCatalog> {
        Arc::new(TheMealDbClient::new(&ClientConfig::with_base_url(&self.base_url)).unwrap())
    }

    /// The request line the stub received, e.g. `GET /filter.php?c=Dessert HTTP/1.1`.
    pub async fn request_line(self) -> String {
        self.request_line.await.unwrap()
    }
}

/// A base URL on which nothing is listening.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// 真实 API 的测试客户端
pub fn live_client() -> Option<Arc<dyn MealCatalog>> {
    let client = TheMealDbClient::new(&ClientConfig::default()).ok()?;
    Some(Arc::new(client))
}
