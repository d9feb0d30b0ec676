use {
  access_token::AccessToken,
  anyhow::{Context, bail, ensure},
  arguments::Arguments,
  clap::Parser,
  client::Client,
  comment::Comment,
  comment_row::CommentRow,
  credentials::Credentials,
  crossterm::style::Stylize,
  endpoints::Endpoints,
  futures::stream::{self, StreamExt, TryStreamExt},
  harvest::Harvest,
  listing::Listing,
  more::More,
  post::Post,
  post_row::PostRow,
  serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, DeserializeOwned, Unexpected},
  },
  serde_json::Value,
  std::{
    backtrace::BacktraceStatus,
    fs,
    io::{self, IsTerminal},
    num::NonZeroUsize,
    path::{Path, PathBuf},
    process,
  },
  table::Row,
  thing::Thing,
  tracing::{debug, info},
  tracing_subscriber::EnvFilter,
  utils::{deserialize_author, deserialize_optional_string, deserialize_text},
};

mod access_token;
mod arguments;
mod client;
mod comment;
mod comment_row;
mod credentials;
mod endpoints;
mod harvest;
mod listing;
mod more;
mod post;
mod post_row;
mod table;
mod thing;
mod utils;

const DEFAULT_LOG_FILTER: &str = "info";

const USER_AGENT: &str =
  concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_tracing() {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .init();
}

fn report(error: &anyhow::Error) {
  let use_color = io::stderr().is_terminal();

  let label = |text: &'static str| {
    if use_color {
      text.bold().red().to_string()
    } else {
      text.to_string()
    }
  };

  eprintln!("{} {error}", label("error:"));

  let mut causes = error.chain().skip(1).peekable();

  if causes.peek().is_some() {
    eprintln!();
    eprintln!("{}", label("because:"));
  }

  for cause in causes {
    eprintln!("{} {cause}", label("-"));
  }

  let backtrace = error.backtrace();

  if backtrace.status() == BacktraceStatus::Captured {
    eprintln!("{}", label("backtrace:"));
    eprintln!("{backtrace}");
  }
}

async fn run() -> Result {
  let _ = dotenvy::dotenv();

  initialize_tracing();

  Arguments::parse().run().await
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    report(&error);
    process::exit(1);
  }
}
