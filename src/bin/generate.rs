//! One-shot story/poem generation from the command line.
//!
//! Uses the endpoint from `--endpoint`, or the one saved by the app's
//! settings page.

#[cfg(not(target_arch = "wasm32"))]
use clap::Parser;
#[cfg(not(target_arch = "wasm32"))]
use dioxus::logger::tracing::Level;

#[cfg(not(target_arch = "wasm32"))]
use storybot::{
    generation::HttpGenerationService,
    prompt_console::{PromptConsole, fulfil},
    storage::load_settings_or_default,
    writing::WritingType,
};

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Parser)]
#[command(name = "storybot-generate", about = "Write a story or poem about a prompt")]
struct Args {
    /// What to write: story or poem
    #[arg(short = 't', long = "type", default_value = "story")]
    kind: WritingType,

    /// Generation endpoint, overriding the saved setting
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Theme or idea; multiple words are joined with spaces
    #[arg(required = true)]
    prompt: Vec<String>,
}

/// Generates the text for `args`.
///
/// A failed generation comes back as an error carrying the same fixed text
/// the app shows in its output panel.
#[cfg(not(target_arch = "wasm32"))]
async fn run(args: Args) -> anyhow::Result<String> {
    let mut console = PromptConsole::new();
    console.prompt = args.prompt.join(" ");
    if console.prompt.is_empty() {
        anyhow::bail!("the prompt is empty");
    }

    let endpoint = match args.endpoint {
        Some(e) => e,
        None => load_settings_or_default().await.endpoint,
    };
    let service = HttpGenerationService::new(endpoint);

    let Some(pending) = console.begin(args.kind) else {
        anyhow::bail!("the prompt is empty");
    };
    let result = fulfil(&service, &pending).await;
    let succeeded = result.is_ok();
    console.finish(pending, result);

    if !succeeded {
        anyhow::bail!("{}", console.displayed());
    }
    Ok(console.displayed().to_string())
}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dioxus::logger::init(Level::WARN)?;
    let text = run(Args::parse()).await?;
    println!("{text}");
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use std::time::Duration;

    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
        task::JoinHandle,
    };

    use super::*;

    /// Answers one request with `status` and `body`, returning the request body.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/generate", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 1024];
            let request_body = loop {
                let n = socket.read(&mut buf).await.unwrap();
                raw.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&raw).to_string();
                if let Some(split) = text.find("\r\n\r\n") {
                    let content_length = text[..split]
                        .lines()
                        .filter_map(|l| l.split_once(':'))
                        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
                        .and_then(|(_, v)| v.trim().parse::<usize>().ok())
                        .unwrap_or(0);
                    if raw.len() >= split + 4 + content_length || n == 0 {
                        break text[split + 4..].to_string();
                    }
                }
                if n == 0 {
                    break String::new();
                }
            };
            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            request_body
        });
        (url, handle)
    }

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("storybot-generate").chain(argv.iter().copied()))
            .unwrap()
    }

    #[tokio::test]
    async fn prints_generated_poem() {
        let (url, server) = serve_once("200 OK", r#"{"poem": "Leaves fall\nWind calls"}"#).await;

        let text = run(args(&["--type", "poem", "--endpoint", url.as_str(), "autumn", "leaves"]))
            .await
            .unwrap();
        assert_eq!(text, "Leaves fall\nWind calls");

        let body: serde_json::Value = serde_json::from_str(&server.await.unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"prompt": "autumn leaves", "type": "poem"}));
    }

    #[tokio::test]
    async fn server_error_reports_fixed_text() {
        let (url, server) = serve_once("500 Internal Server Error", r#"{"error": "boom"}"#).await;

        let err = run(args(&["--endpoint", url.as_str(), "a brave fox"])).await.unwrap_err();
        assert_eq!(err.to_string(), "Error generating story.");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn empty_prompt_sends_nothing() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/generate", listener.local_addr().unwrap());

        let err = run(args(&["--endpoint", url.as_str(), ""])).await.unwrap_err();
        assert_eq!(err.to_string(), "the prompt is empty");

        let accepted = tokio::time::timeout(Duration::from_millis(200), listener.accept()).await;
        assert!(accepted.is_err(), "no connection should have been made");
    }

    #[test]
    fn prompt_is_required() {
        let argv = ["storybot-generate", "--type", "poem"];
        assert!(Args::try_parse_from(argv).is_err());
    }

    #[test]
    fn unknown_type_is_rejected() {
        let argv = ["storybot-generate", "--type", "limerick", "fox"];
        assert!(Args::try_parse_from(argv).is_err());
    }
}
