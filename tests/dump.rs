use elastic_aliases::Client;
use mockito::Server;
use std::{
    io,
    sync::{Arc, Mutex},
};
use tracing_subscriber::{fmt::MakeWriter, EnvFilter};

const BODY: &str = r#"{"idx":{"aliases":{"idx-current":{}}}}"#;

#[derive(Debug, Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn output(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture() -> (Captured, tracing::subscriber::DefaultGuard) {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("elastic_aliases::dump=info"))
        .with_writer(captured.clone())
        .with_ansi(false)
        .finish();

    let guard = tracing::subscriber::set_default(subscriber);
    (captured, guard)
}

#[tokio::test]
async fn test_dump_when_debug() {
    let (captured, _guard) = capture();
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/idx/_aliases")
        .with_status(200)
        .with_body(BODY)
        .create_async()
        .await;

    let client = Client::new(&server.url());
    let result = client.aliases().index("idx").debug(true).execute().await.unwrap();

    mock.assert_async().await;
    assert!(result.index("idx").unwrap().has_alias("idx-current"));

    let output = captured.output();
    assert!(
        output.contains(&format!("GET {}/idx/_aliases", server.url())),
        "{output}"
    );
    assert!(output.contains("200 OK"), "{output}");
    assert!(output.contains(BODY), "{output}");
}

#[tokio::test]
async fn test_dump_error_body() {
    let (captured, _guard) = capture();
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/missing/_aliases")
        .with_status(404)
        .with_body("index_not_found_exception")
        .create_async()
        .await;

    let client = Client::new(&server.url());
    let res = client.aliases().index("missing").debug(true).execute().await;

    assert!(res.is_err());
    let output = captured.output();
    assert!(output.contains("404 Not Found"), "{output}");
    assert!(output.contains("index_not_found_exception"), "{output}");
}

#[tokio::test]
async fn test_no_dump_without_debug() {
    let (captured, _guard) = capture();
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/idx/_aliases")
        .with_status(200)
        .with_body(BODY)
        .create_async()
        .await;

    let client = Client::new(&server.url());
    let result = client.aliases().index("idx").execute().await.unwrap();

    assert!(result.index("idx").unwrap().has_alias("idx-current"));
    assert_eq!(captured.output(), "");
}
