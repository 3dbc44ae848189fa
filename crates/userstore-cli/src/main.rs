//! # Userstore CLI Entry Point
//!
//! Main binary for the userstore RPC service. Provides command-line
//! interface for running the server and calling the four user-management
//! methods.
//!
//! ## Usage
//!
//! ```bash
//! # Start the server with the seeded sample data
//! userstore serve -b 0.0.0.0:50051
//!
//! # Make a raw RPC call (outputs raw JSON)
//! userstore call http://127.0.0.1:50051 GetUsers
//! userstore call http://127.0.0.1:50051 UpdateUser -a '{"id":"2","status":"inactive"}'
//!
//! # Typed verbs
//! userstore list http://127.0.0.1:50051
//! userstore add http://127.0.0.1:50051 --name Zed --email zed@x.com
//! userstore update http://127.0.0.1:50051 --id 2 --status inactive
//! userstore delete http://127.0.0.1:50051 --id 2
//! ```
//!
//! ## URL Format
//!
//! All server URLs must include the `http://` or `https://` prefix.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use argh::FromArgs;
use userstore_client::UserStoreClient;
use userstore_server::{HttpServer, UserStore};

/// Validates that a URL string starts with http:// or https://
///
/// # Arguments
///
/// * `url` - The URL string to validate
/// * `description` - Human-readable description of what the URL is for
///
/// # Errors
///
/// Returns an error if the URL doesn't start with http:// or https://
fn validate_http_url(url: &str, description: &str) -> Result<()> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(anyhow::anyhow!(
            "Invalid {}: '{}' must start with http:// or https://",
            description,
            url
        ))
    }
}

/// Main CLI structure parsed from command-line arguments.
///
/// Uses `argh` for declarative argument parsing. The top-level command
/// dispatches to the server or one of the client verbs.
#[derive(FromArgs)]
/// Userstore - user management RPC service
struct Cli {
    #[argh(subcommand)]
    command: Commands,
}

/// Available CLI subcommands.
///
/// - **Serve**: run the RPC server with the seeded sample data
/// - **Call**: make a raw RPC call (unix-friendly JSON output)
/// - **List/Add/Update/Delete**: typed verbs over the four methods
#[derive(FromArgs)]
#[argh(subcommand)]
enum Commands {
    Serve(ServeArgs),
    Call(CallArgs),
    List(ListArgs),
    Add(AddArgs),
    Update(UpdateArgs),
    Delete(DeleteArgs),
}

/// Arguments for running the userstore server.
///
/// The server holds the in-memory collection, seeded with the 12 sample
/// records, and answers JSON-RPC over HTTP on the bind address. The
/// listener is plaintext; there is no TLS.
#[derive(FromArgs)]
#[argh(subcommand, name = "serve")]
/// run the userstore server
struct ServeArgs {
    /// address to bind the HTTP server to
    ///
    /// Defaults to "0.0.0.0:50051", the port the reference deployments
    /// of this service use.
    #[argh(option, short = 'b', default = "\"0.0.0.0:50051\".into()")]
    bind: String,
}

/// Arguments for making a raw RPC call.
///
/// Makes one call and outputs the result as raw JSON to stdout, suitable
/// for piping into `jq` and friends. Errors go to stderr with a non-zero
/// exit code.
#[derive(FromArgs)]
#[argh(subcommand, name = "call")]
/// call an RPC method on a server
struct CallArgs {
    /// URL of the server to call
    ///
    /// Must include the http:// or https:// prefix
    /// (e.g., http://127.0.0.1:50051).
    #[argh(positional)]
    server_url: String,

    /// name of the RPC method to call
    ///
    /// One of GetUsers, AddUser, UpdateUser, DeleteUser.
    #[argh(positional)]
    method: String,

    /// JSON string containing parameters for the method
    ///
    /// Must be valid JSON. Defaults to `{}`.
    #[argh(option, short = 'a', long = "args", default = "\"{}\".into()")]
    args: String,
}

/// Arguments for listing all users.
#[derive(FromArgs)]
#[argh(subcommand, name = "list")]
/// list all users
struct ListArgs {
    /// URL of the server to call
    #[argh(positional)]
    server_url: String,
}

/// Arguments for creating a user.
#[derive(FromArgs)]
#[argh(subcommand, name = "add")]
/// add a user
struct AddArgs {
    /// URL of the server to call
    #[argh(positional)]
    server_url: String,

    /// display name of the new user
    #[argh(option, default = "String::new()")]
    name: String,

    /// email address of the new user
    #[argh(option, default = "String::new()")]
    email: String,

    /// status of the new user; the server defaults it to "active"
    #[argh(option, default = "String::new()")]
    status: String,
}

/// Arguments for updating a user.
///
/// Omitted fields are left unchanged by the server.
#[derive(FromArgs)]
#[argh(subcommand, name = "update")]
/// update a user
struct UpdateArgs {
    /// URL of the server to call
    #[argh(positional)]
    server_url: String,

    /// id of the user to update
    #[argh(option)]
    id: String,

    /// new display name
    #[argh(option, default = "String::new()")]
    name: String,

    /// new email address
    #[argh(option, default = "String::new()")]
    email: String,

    /// new status
    #[argh(option, default = "String::new()")]
    status: String,
}

/// Arguments for deleting a user.
#[derive(FromArgs)]
#[argh(subcommand, name = "delete")]
/// delete a user
struct DeleteArgs {
    /// URL of the server to call
    #[argh(positional)]
    server_url: String,

    /// id of the user to delete
    #[argh(option)]
    id: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli: Cli = argh::from_env();

    // Initialize tracing only for the server; the client verbs keep
    // stdout clean for unix tool usage (piping to jq, etc.).
    if matches!(cli.command, Commands::Serve(_)) {
        // Set default log level to INFO, but allow RUST_LOG env var to override
        let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    match cli.command {
        Commands::Serve(args) => {
            tracing::info!("Starting userstore server");
            tracing::info!("Binding to: {}", args.bind);

            let store = Arc::new(UserStore::seeded());
            tracing::info!("Store seeded with {} users", store.len().await);

            let server = HttpServer::new(store);
            let addr: SocketAddr = args
                .bind
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid bind address {}: {}", args.bind, e))?;
            server.run(addr).await?;

            Ok(())
        }
        Commands::Call(args) => run_call(args).await,
        Commands::List(args) => {
            validate_http_url(&args.server_url, "server URL")?;
            let client = UserStoreClient::new(&args.server_url);
            let users = client.get_users().await?;
            println!("{}", serde_json::to_string(&users)?);
            Ok(())
        }
        Commands::Add(args) => {
            validate_http_url(&args.server_url, "server URL")?;
            let client = UserStoreClient::new(&args.server_url);
            let user = client
                .add_user(&args.name, &args.email, &args.status)
                .await?;
            println!("{}", serde_json::to_string(&user)?);
            Ok(())
        }
        Commands::Update(args) => {
            validate_http_url(&args.server_url, "server URL")?;
            let client = UserStoreClient::new(&args.server_url);
            let user = client
                .update_user(&args.id, &args.name, &args.email, &args.status)
                .await?;
            println!("{}", serde_json::to_string(&user)?);
            Ok(())
        }
        Commands::Delete(args) => {
            validate_http_url(&args.server_url, "server URL")?;
            let client = UserStoreClient::new(&args.server_url);
            client.delete_user(&args.id).await?;
            println!("{{}}");
            Ok(())
        }
    }
}

/// Executes the `call` subcommand.
///
/// Parses the JSON arguments string, makes the call, and prints the raw
/// JSON result to stdout.
///
/// # Errors
///
/// Returns an error if:
/// - The args string is not valid JSON
/// - The connection to the server fails
/// - The RPC call itself fails
async fn run_call(args: CallArgs) -> Result<()> {
    validate_http_url(&args.server_url, "server URL")?;

    let args_value: serde_json::Value = serde_json::from_str(&args.args)
        .map_err(|e| anyhow::anyhow!("Invalid JSON in args: {}", e))?;

    let client = UserStoreClient::new(&args.server_url);
    let result = client.call(&args.method, args_value).await?;

    println!("{}", serde_json::to_string(&result)?);

    Ok(())
}

/// CLI argument parsing tests.
///
/// Tests verify that `argh` correctly parses all subcommands and their
/// arguments.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_serve_defaults() {
        let args: Cli = Cli::from_args(&["userstore"], &["serve"]).unwrap();
        match args.command {
            Commands::Serve(ServeArgs { bind }) => {
                assert_eq!(bind, "0.0.0.0:50051");
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_cli_parse_serve_custom_bind() {
        let args: Cli = Cli::from_args(&["userstore"], &["serve", "-b", "127.0.0.1:9000"]).unwrap();
        match args.command {
            Commands::Serve(ServeArgs { bind }) => {
                assert_eq!(bind, "127.0.0.1:9000");
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_cli_parse_call() {
        let args: Cli = Cli::from_args(
            &["userstore"],
            &["call", "http://127.0.0.1:50051", "GetUsers"],
        )
        .unwrap();
        match args.command {
            Commands::Call(CallArgs {
                server_url,
                method,
                args,
            }) => {
                assert_eq!(server_url, "http://127.0.0.1:50051");
                assert_eq!(method, "GetUsers");
                assert_eq!(args, "{}");
            }
            _ => panic!("Expected Call command"),
        }
    }

    #[test]
    fn test_cli_parse_call_with_args() {
        let args: Cli = Cli::from_args(
            &["userstore"],
            &[
                "call",
                "http://127.0.0.1:50051",
                "UpdateUser",
                "-a",
                "{\"id\":\"2\",\"status\":\"inactive\"}",
            ],
        )
        .unwrap();
        match args.command {
            Commands::Call(CallArgs { method, args, .. }) => {
                assert_eq!(method, "UpdateUser");
                assert_eq!(args, "{\"id\":\"2\",\"status\":\"inactive\"}");
            }
            _ => panic!("Expected Call command"),
        }
    }

    #[test]
    fn test_cli_parse_list() {
        let args: Cli =
            Cli::from_args(&["userstore"], &["list", "http://127.0.0.1:50051"]).unwrap();
        match args.command {
            Commands::List(ListArgs { server_url }) => {
                assert_eq!(server_url, "http://127.0.0.1:50051");
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_parse_add() {
        let args: Cli = Cli::from_args(
            &["userstore"],
            &[
                "add",
                "http://127.0.0.1:50051",
                "--name",
                "Zed",
                "--email",
                "zed@x.com",
            ],
        )
        .unwrap();
        match args.command {
            Commands::Add(AddArgs {
                name,
                email,
                status,
                ..
            }) => {
                assert_eq!(name, "Zed");
                assert_eq!(email, "zed@x.com");
                assert_eq!(status, "");
            }
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_cli_parse_update_partial_fields() {
        let args: Cli = Cli::from_args(
            &["userstore"],
            &[
                "update",
                "http://127.0.0.1:50051",
                "--id",
                "2",
                "--status",
                "inactive",
            ],
        )
        .unwrap();
        match args.command {
            Commands::Update(UpdateArgs {
                id,
                name,
                email,
                status,
                ..
            }) => {
                assert_eq!(id, "2");
                assert_eq!(name, "");
                assert_eq!(email, "");
                assert_eq!(status, "inactive");
            }
            _ => panic!("Expected Update command"),
        }
    }

    #[test]
    fn test_cli_parse_delete() {
        let args: Cli = Cli::from_args(
            &["userstore"],
            &["delete", "http://127.0.0.1:50051", "--id", "2"],
        )
        .unwrap();
        match args.command {
            Commands::Delete(DeleteArgs { id, .. }) => {
                assert_eq!(id, "2");
            }
            _ => panic!("Expected Delete command"),
        }
    }

    #[test]
    fn test_validate_http_url() {
        assert!(validate_http_url("http://127.0.0.1:50051", "server URL").is_ok());
        assert!(validate_http_url("https://example.com:50051", "server URL").is_ok());
        assert!(validate_http_url("127.0.0.1:50051", "server URL").is_err());
    }
}
